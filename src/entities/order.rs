use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A sales order: one vendor selling to one supermarket, signed by a
/// purchasing representative and settled with one payment method.
///
/// Every reference is a required foreign key; the row has no defaults, so
/// all referenced rows must exist before the order can be inserted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ordenes")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_orden")]
    pub id: i32,
    #[sea_orm(column_name = "fecha")]
    pub date: NaiveDate,
    #[sea_orm(column_name = "id_vendedor")]
    pub vendor_id: i32,
    #[sea_orm(column_name = "id_supermercado")]
    pub supermarket_id: i32,
    #[sea_orm(column_name = "id_representante")]
    pub representative_id: i32,
    #[sea_orm(column_name = "id_forma_pago")]
    pub payment_method_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::supermarket::Entity",
        from = "Column::SupermarketId",
        to = "super::supermarket::Column::Id"
    )]
    Supermarket,
    #[sea_orm(
        belongs_to = "super::purchasing_representative::Entity",
        from = "Column::RepresentativeId",
        to = "super::purchasing_representative::Column::Id"
    )]
    Representative,
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::PaymentMethodId",
        to = "super::payment_method::Column::Id"
    )]
    PaymentMethod,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLine,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::supermarket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supermarket.def()
    }
}

impl Related<super::purchasing_representative::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Representative.def()
    }
}

impl Related<super::payment_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethod.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
