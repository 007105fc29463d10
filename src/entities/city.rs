use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ciudades")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_ciudad")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_name = "id_estado")]
    pub state_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::state::Entity",
        from = "Column::StateId",
        to = "super::state::Column::Id"
    )]
    State,
    #[sea_orm(has_many = "super::supermarket::Entity")]
    Supermarket,
}

impl Related<super::state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::State.def()
    }
}

impl Related<super::supermarket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supermarket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
