use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::entities::order;

/// Payload accepted by `POST /orders`.
///
/// Only the shape is checked here. Whether the referenced vendor,
/// supermarket, representative and payment method exist is decided by the
/// database when the row is inserted. Keys outside the five fields are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "fecha": "2024-01-15",
    "id_vendedor": 1,
    "id_supermercado": 1,
    "id_representante": 1,
    "id_forma_pago": 1
}))]
pub struct OrderCreateRequest {
    /// Order date, `YYYY-MM-DD`
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub fecha: NaiveDate,
    pub id_vendedor: i32,
    pub id_supermercado: i32,
    pub id_representante: i32,
    pub id_forma_pago: i32,
}

impl OrderCreateRequest {
    /// Builds the row to insert; the id is left for the database to assign.
    pub fn into_active_model(self) -> order::ActiveModel {
        use sea_orm::{ActiveValue::NotSet, Set};

        order::ActiveModel {
            id: NotSet,
            date: Set(self.fecha),
            vendor_id: Set(self.id_vendedor),
            supermarket_id: Set(self.id_supermercado),
            representative_id: Set(self.id_representante),
            payment_method_id: Set(self.id_forma_pago),
        }
    }
}

/// A stored order as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id_orden: i32,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub fecha: NaiveDate,
    pub id_vendedor: i32,
    pub id_supermercado: i32,
    pub id_representante: i32,
    pub id_forma_pago: i32,
}

impl From<order::Model> for OrderResponse {
    fn from(model: order::Model) -> Self {
        Self {
            id_orden: model.id,
            fecha: model.date,
            id_vendedor: model.vendor_id,
            id_supermercado: model.supermarket_id,
            id_representante: model.representative_id,
            id_forma_pago: model.payment_method_id,
        }
    }
}
