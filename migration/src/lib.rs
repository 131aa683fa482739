pub use sea_orm_migration::prelude::*;

mod iden;
mod m20250118_000001_create_table;
mod m20250301_114822_guest_tables;
mod m20250422_091507_add_expense_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250118_000001_create_table::Migration),
            Box::new(m20250301_114822_guest_tables::Migration),
            Box::new(m20250422_091507_add_expense_table::Migration),
        ]
    }
}
