use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::warn;

use crate::{
    dto::{OrderCreateRequest, OrderResponse},
    errors::ServiceError,
    AppState,
};

/// Create order
///
/// Any failure other than an unreachable database is reported as a bad
/// request carrying the underlying error text. A body the JSON extractor
/// refuses keeps the extractor's status but uses the usual error body.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = OrderCreateRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse,
            headers(("x-request-id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Order could not be created", body = crate::errors::ErrorResponse),
        (status = 415, description = "Body is not JSON", body = crate::errors::ErrorResponse),
        (status = 422, description = "Malformed order payload", body = crate::errors::ErrorResponse),
        (status = 503, description = "Database unreachable", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderResponse>), ServiceError> {
    let Json(request) = payload?;
    match state.services.orders.create_order(request).await {
        Ok(order) => Ok((StatusCode::CREATED, Json(order.into()))),
        Err(err) if err.is_unavailable() => Err(err),
        Err(err) => {
            warn!(error = %err, "Order creation rejected");
            Err(ServiceError::BadRequest(format!(
                "Error creating order: {err}"
            )))
        }
    }
}

/// List orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders, ascending by id", body = [OrderResponse],
            headers(("x-request-id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
        (status = 503, description = "Database unreachable", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ServiceError> {
    let orders = state.services.orders.list_orders().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
