//! Dairy Sales API
//!
//! Records sales orders placed by supermarkets with dairy vendors and lists
//! them back. Reference data lives in the same database and is maintained
//! outside this service.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod openapi;
pub mod schema;
pub mod services;
pub mod tracing;

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{AppConfig, AppConfigError};

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Order routes
pub fn order_routes() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(handlers::orders::list_orders).post(handlers::orders::create_order),
    )
}

/// Builds the CORS layer from configuration.
///
/// Explicit origins win. Without them, permissive CORS is only allowed in
/// development or when `cors_allow_any_origin` is set.
pub fn cors_layer(cfg: &AppConfig) -> Result<CorsLayer, AppConfigError> {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    if cfg.should_allow_permissive_cors() {
        ::tracing::info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        return Ok(CorsLayer::permissive());
    }

    Err(AppConfigError::Cors(
        "set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true".to_string(),
    ))
}

/// Full application router: welcome, health, orders and Swagger UI, wrapped
/// in request-id, tracing and CORS layers.
pub fn app_router(state: AppState) -> Result<Router, AppConfigError> {
    let cors = cors_layer(&state.config)?;

    let app = Router::<AppState>::new()
        .route("/", get(handlers::root::welcome))
        .route("/health", get(handlers::health::health_check))
        .merge(order_routes())
        .merge(openapi::swagger_ui())
        .fallback(handlers::root::not_found)
        .layer(crate::tracing::configure_http_tracing())
        .layer(cors)
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_without_origins_is_rejected() {
        let mut cfg = AppConfig::new("sqlite::memory:");
        cfg.environment = "production".into();
        assert!(matches!(cors_layer(&cfg), Err(AppConfigError::Cors(_))));

        cfg.cors_allowed_origins = Some("https://ventas.example".into());
        assert!(cors_layer(&cfg).is_ok());
    }
}
