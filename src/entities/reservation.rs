use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub number: i32,
    /// Nulled when the room is removed; the reservation itself is kept.
    pub room_number: Option<i32>,
    pub check_in: Option<DateTime>,
    pub check_out: Option<DateTime>,
    pub total_price: f64,
    pub status_paid: bool,
    pub vehicles: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomNumber",
        to = "super::room::Column::Number",
        on_delete = "SetNull"
    )]
    Room,
    #[sea_orm(has_many = "super::customer_reservation::Entity")]
    CustomerReservations,
    #[sea_orm(has_many = "super::room_service::Entity")]
    RoomServices,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::customer_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerReservations.def()
    }
}

impl Related<super::room_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomServices.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_reservation::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::customer_reservation::Relation::Reservation
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
