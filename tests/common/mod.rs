#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use dairy_sales_api::{
    config::AppConfig,
    db,
    entities::{city, payment_method, purchasing_representative, state, supermarket, vendor},
    AppState,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness for spinning up the full router backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with an empty schema.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new("sqlite::memory:");
        cfg.environment = "test".to_string();
        cfg.cors_allow_any_origin = true;
        // Every pooled connection to `sqlite::memory:` is its own database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::create_schema(&pool)
            .await
            .expect("failed to create schema in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = dairy_sales_api::app_router(state.clone()).expect("router builds");

        Self { router, state }
    }

    /// Construct a test application with one row in each table an order references.
    pub async fn with_reference_data() -> Self {
        let app = Self::new().await;
        seed_reference_data(app.db()).await;
        app
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }

    /// Send a request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a raw body with an explicit content type.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn create_order(&self, payload: Value) -> (StatusCode, Value) {
        let response = self.request(Method::POST, "/orders", Some(payload)).await;
        let status = response.status();
        (status, response_json(response).await)
    }

    pub async fn list_orders(&self) -> Vec<Value> {
        let response = self.request(Method::GET, "/orders", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        match response_json(response).await {
            Value::Array(items) => items,
            other => panic!("expected array, got {other}"),
        }
    }
}

/// Inserts state, city, supermarket, vendor, representative and payment method, all with id 1.
pub async fn seed_reference_data(db: &DatabaseConnection) {
    state::ActiveModel {
        id: Set(1),
        name: Set("Carabobo".to_string()),
    }
    .insert(db)
    .await
    .expect("insert state");
    city::ActiveModel {
        id: Set(1),
        name: Set("Valencia".to_string()),
        state_id: Set(1),
    }
    .insert(db)
    .await
    .expect("insert city");
    supermarket::ActiveModel {
        id: Set(1),
        name: Set("Central Madeirense".to_string()),
        city_id: Set(1),
    }
    .insert(db)
    .await
    .expect("insert supermarket");
    vendor::ActiveModel {
        id: Set(1),
        name: Set("Ana Torres".to_string()),
        email: Set("ana.torres@lacteos.example".to_string()),
    }
    .insert(db)
    .await
    .expect("insert vendor");
    purchasing_representative::ActiveModel {
        id: Set(1),
        name: Set("Maria Perez".to_string()),
    }
    .insert(db)
    .await
    .expect("insert representative");
    payment_method::ActiveModel {
        id: Set(1),
        name: Set("Transferencia".to_string()),
    }
    .insert(db)
    .await
    .expect("insert payment method");
}

pub fn order_payload(fecha: &str) -> Value {
    json!({
        "fecha": fecha,
        "id_vendedor": 1,
        "id_supermercado": 1,
        "id_representante": 1,
        "id_forma_pago": 1
    })
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}
