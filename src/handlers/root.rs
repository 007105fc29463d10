use axum::{http::Uri, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ServiceError;

/// Static landing payload pointing at the interactive docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub mensaje: String,
    pub proyecto: String,
    pub documentacion: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        mensaje: "API Ventas de Lacteos".to_string(),
        proyecto: "Registro de ordenes de venta de productos lacteos".to_string(),
        documentacion: crate::openapi::DOCS_PATH.to_string(),
    })
}

/// Uniform JSON body for unknown routes.
pub async fn not_found(uri: Uri) -> ServiceError {
    ServiceError::NotFound(format!("No route for {}", uri.path()))
}
