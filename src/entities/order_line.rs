use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item of an order. Declared for the schema; the HTTP surface never
/// writes or reads it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "detalle_orden")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_detalle")]
    pub id: i32,
    #[sea_orm(column_name = "id_orden")]
    pub order_id: i32,
    #[sea_orm(column_name = "id_producto")]
    pub product_id: i32,
    /// Units purchased. Must be positive (table CHECK constraint).
    #[sea_orm(column_name = "cantidad_comprada")]
    pub quantity: i32,
    /// Line value in USD, numeric(12, 2).
    #[sea_orm(column_name = "valor_total_usd", column_type = "Decimal(Some((12, 2)))")]
    pub total_value_usd: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
