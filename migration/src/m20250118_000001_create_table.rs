use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_post_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("name_idx")
                    .table(Post::Table)
                    .col(Post::Name)
                    .to_owned(),
            )
            .await?;

        manager.create_table(create_hotels_table()).await?;
        manager.create_table(create_users_table()).await?;
        manager.create_table(create_rooms_table()).await?;
        manager.create_table(create_employees_table()).await?;
        manager.create_table(create_tasks_table()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop all tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Example table kept from the project scaffold; unrelated to the hotel
// domain but exercised by the on-update timestamp rule in the app layer.
fn create_post_table() -> TableCreateStatement {
    Table::create()
        .table(Post::Table)
        .col(pk_auto(Post::Id))
        .col(string_len_null(Post::Name, 256))
        .col(timestamp_with_time_zone(Post::CreatedAt).default(Expr::current_timestamp()))
        .col(timestamp_with_time_zone_null(Post::UpdatedAt))
        .to_owned()
}

fn create_hotels_table() -> TableCreateStatement {
    Table::create()
        .table(Hotels::Table)
        .col(pk_auto(Hotels::Id))
        .col(string_len(Hotels::Name, 100))
        .col(string_len_null(Hotels::Address, 200))
        .col(string_len_null(Hotels::Phone, 50))
        // soft-delete marker; listing policy lives in the route layer
        .col(boolean(Hotels::Deleted).default(false))
        .to_owned()
}

fn create_users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .col(pk_auto(Users::Id))
        .col(string_len_uniq(Users::Email, 100))
        .col(string_len(Users::Password, 256))
        .col(
            ColumnDef::new(Users::Role)
                .array(ColumnType::String(StringLen::N(50)))
                .not_null()
                .default("{}"),
        )
        .to_owned()
}

fn create_rooms_table() -> TableCreateStatement {
    Table::create()
        .table(Rooms::Table)
        // room numbers are assigned by the hotel, not by a sequence
        .col(integer(Rooms::Number).primary_key())
        .col(integer(Rooms::HotelId))
        .col(integer(Rooms::Floor))
        .col(boolean(Rooms::Available).default(true))
        .col(integer(Rooms::Beds))
        .col(string_len(Rooms::Description, 100).default(""))
        .col(double(Rooms::DailyRate))
        .foreign_key(
            ForeignKey::create()
                .name("fk_rooms_hotel")
                .from(Rooms::Table, Rooms::HotelId)
                .to(Hotels::Table, Hotels::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_employees_table() -> TableCreateStatement {
    Table::create()
        .table(Employees::Table)
        .col(string_len(Employees::Cpf, 15).primary_key())
        // one account per employee
        .col(integer(Employees::UserId).unique_key())
        .col(integer(Employees::HotelId))
        .col(string_len(Employees::Name, 100))
        .col(string_len(Employees::Phone, 50))
        .col(string_len_null(Employees::Address, 100))
        .foreign_key(
            ForeignKey::create()
                .name("fk_employees_user")
                .from(Employees::Table, Employees::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_employees_hotel")
                .from(Employees::Table, Employees::HotelId)
                .to(Hotels::Table, Hotels::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_tasks_table() -> TableCreateStatement {
    Table::create()
        .table(Tasks::Table)
        .col(pk_auto(Tasks::Id))
        // tasks outlive their employee as historical records
        .col(integer_null(Tasks::EmployeeId))
        .col(string_len(Tasks::Description, 100))
        .col(timestamp_null(Tasks::Start))
        .col(timestamp_null(Tasks::End))
        .foreign_key(
            ForeignKey::create()
                .name("fk_tasks_employee")
                .from(Tasks::Table, Tasks::EmployeeId)
                .to(Employees::Table, Employees::UserId)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}
