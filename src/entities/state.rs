use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A state or province. Owns the cities registered under it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "estados")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_estado")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::city::Entity")]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
