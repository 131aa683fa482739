use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_customers_table()).await?;
        manager.create_table(create_reservations_table()).await?;
        manager
            .create_table(create_customer_reservations_table())
            .await?;
        manager.create_table(create_room_services_table()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomServices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerReservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn create_customers_table() -> TableCreateStatement {
    Table::create()
        .table(Customers::Table)
        .col(string_len(Customers::Cpf, 15).primary_key())
        .col(string_len(Customers::Name, 100))
        .col(string_len_null(Customers::Email, 100))
        .col(string_len_null(Customers::Phone, 50))
        .col(string_len_null(Customers::Address, 100))
        .to_owned()
}

fn create_reservations_table() -> TableCreateStatement {
    Table::create()
        .table(Reservations::Table)
        .col(pk_auto(Reservations::Number))
        // reservation history outlives the room
        .col(integer_null(Reservations::RoomNumber))
        .col(timestamp_null(Reservations::CheckIn))
        .col(timestamp_null(Reservations::CheckOut))
        .col(double(Reservations::TotalPrice).default(0))
        .col(boolean(Reservations::StatusPaid).default(false))
        .col(
            ColumnDef::new(Reservations::Vehicles)
                .array(ColumnType::String(StringLen::N(50)))
                .not_null()
                .default("{}"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_reservations_room")
                .from(Reservations::Table, Reservations::RoomNumber)
                .to(Rooms::Table, Rooms::Number)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn create_customer_reservations_table() -> TableCreateStatement {
    Table::create()
        .table(CustomerReservations::Table)
        .col(string_len(CustomerReservations::CustomerCpf, 15))
        .col(integer(CustomerReservations::ReservationNumber))
        .primary_key(
            Index::create()
                .col(CustomerReservations::CustomerCpf)
                .col(CustomerReservations::ReservationNumber),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_customer_reservations_customer")
                .from(
                    CustomerReservations::Table,
                    CustomerReservations::CustomerCpf,
                )
                .to(Customers::Table, Customers::Cpf)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_customer_reservations_reservation")
                .from(
                    CustomerReservations::Table,
                    CustomerReservations::ReservationNumber,
                )
                .to(Reservations::Table, Reservations::Number)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_room_services_table() -> TableCreateStatement {
    Table::create()
        .table(RoomServices::Table)
        // one service record per task
        .col(integer(RoomServices::TaskId).primary_key())
        .col(integer(RoomServices::ReservationNumber))
        .col(double(RoomServices::Price))
        .foreign_key(
            ForeignKey::create()
                .name("fk_room_services_task")
                .from(RoomServices::Table, RoomServices::TaskId)
                .to(Tasks::Table, Tasks::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_room_services_reservation")
                .from(RoomServices::Table, RoomServices::ReservationNumber)
                .to(Reservations::Table, Reservations::Number)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}
