use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Points at `employees.user_id`; nulled when the employee leaves so
    /// the task survives as a historical record.
    pub employee_id: Option<i32>,
    pub description: String,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::UserId",
        on_delete = "SetNull"
    )]
    Employee,
    #[sea_orm(has_one = "super::room_service::Entity")]
    RoomService,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::room_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
