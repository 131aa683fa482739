use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table carrying the Customer↔Reservation many-to-many.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_cpf: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub reservation_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerCpf",
        to = "super::customer::Column::Cpf",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationNumber",
        to = "super::reservation::Column::Number",
        on_delete = "Cascade"
    )]
    Reservation,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
