use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendedores")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_vendedor")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub email: String,
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
