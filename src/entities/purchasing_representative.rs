use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchasing representative on the supermarket side who signs off an order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "representantes_compras")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_representante")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(150))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
