use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cpf: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_reservation::Entity")]
    CustomerReservations,
}

impl Related<super::customer_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerReservations.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_reservation::Relation::Reservation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_reservation::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
