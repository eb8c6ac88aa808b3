//! Create `employee` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(big_integer(Employee::Id).auto_increment().primary_key())
                    .col(string_len(Employee::FirstName, 100))
                    .col(string_len(Employee::LastName, 100))
                    .col(string_len(Employee::Email, 255).unique_key())
                    .col(string_len_null(Employee::Phone, 32))
                    .col(string_len_null(Employee::Department, 255))
                    .col(double(Employee::Salary))
                    .col(timestamp_with_time_zone(Employee::CreatedAt))
                    .col(timestamp_with_time_zone(Employee::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, FirstName, LastName, Email, Phone, Department, Salary, CreatedAt, UpdatedAt }
