use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog product. `presentation` describes the packaging (e.g. "1L carton").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_producto")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(column_name = "presentacion", column_type = "String(StringLen::N(100))")]
    pub presentation: String,
    /// Unit price in USD, numeric(10, 2).
    #[sea_orm(column_name = "precio_unitario_usd", column_type = "Decimal(Some((10, 2)))")]
    pub unit_price_usd: Decimal,
    #[sea_orm(column_name = "id_categoria")]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLine,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
