use crate::tracing::{scope_request_id, RequestId};
use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every request with a [`RequestId`] and echoes it on the response.
///
/// A non-blank `x-request-id` from the caller is kept; otherwise a new id is
/// generated. The id is stored as a request extension, scoped task-locally
/// for the lifetime of the handler, and copied onto the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request).unwrap_or_default();
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    // Ids that are not valid header values are still used for logging.
    let header_value = HeaderValue::from_str(request_id.as_str()).ok();

    if let Some(value) = &header_value {
        request.headers_mut().insert(header.clone(), value.clone());
    }
    request.extensions_mut().insert(request_id.clone());

    let mut response = scope_request_id(request_id, next.run(request)).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(header, value);
    }
    response
}
