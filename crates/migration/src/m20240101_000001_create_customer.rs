//! Create `customer` table.
//!
//! Email carries a unique constraint; address fields are nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(big_integer(Customer::Id).auto_increment().primary_key())
                    .col(string_len(Customer::FirstName, 100))
                    .col(string_len(Customer::LastName, 100))
                    .col(string_len(Customer::Email, 255).unique_key())
                    .col(string_len_null(Customer::Phone, 32))
                    .col(string_len_null(Customer::Address, 255))
                    .col(string_len_null(Customer::City, 255))
                    .col(string_len_null(Customer::State, 255))
                    .col(string_len_null(Customer::ZipCode, 20))
                    .col(timestamp_with_time_zone(Customer::CreatedAt))
                    .col(timestamp_with_time_zone(Customer::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, FirstName, LastName, Email, Phone, Address, City, State, ZipCode, CreatedAt, UpdatedAt }
