#![cfg(test)]
use sea_orm::DatabaseConnection;

use crate::customer::domain::CustomerInput;
use crate::employee::domain::EmployeeInput;

/// Fresh, migrated in-memory database per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}

pub fn customer_input(email: &str) -> CustomerInput {
    CustomerInput {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        phone: Some("555-0100".into()),
        address: Some("12 Analytical Way".into()),
        city: None,
        state: None,
        zip_code: Some("10001".into()),
    }
}

pub fn employee_input(email: &str) -> EmployeeInput {
    EmployeeInput {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: email.into(),
        phone: None,
        department: Some("Engineering".into()),
        salary: 60_000.0,
    }
}
