use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A supermarket branch, the buying side of an order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supermercados")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_supermercado")]
    pub id: i32,
    #[sea_orm(column_name = "nombre", column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(column_name = "id_ciudad")]
    pub city_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id"
    )]
    City,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
