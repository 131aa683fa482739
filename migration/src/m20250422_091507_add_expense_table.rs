use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_expenses_table()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn create_expenses_table() -> TableCreateStatement {
    Table::create()
        .table(Expenses::Table)
        .col(pk_auto(Expenses::Id))
        .col(integer(Expenses::HotelId))
        .col(string_len(Expenses::Description, 100))
        .col(double(Expenses::Value))
        .col(timestamp(Expenses::Date).default(Expr::current_timestamp()))
        .foreign_key(
            ForeignKey::create()
                .name("fk_expenses_hotel")
                .from(Expenses::Table, Expenses::HotelId)
                .to(Hotels::Table, Hotels::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}
