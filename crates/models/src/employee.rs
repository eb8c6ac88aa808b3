use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub salary: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

pub fn validate_salary(salary: f64) -> Result<(), errors::ModelError> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(errors::ModelError::Validation("salary must be a non-negative number".into()));
    }
    Ok(())
}

/// Validate every field a client may supply for an employee.
pub fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: Option<&str>,
    department: Option<&str>,
    salary: f64,
) -> Result<(), errors::ModelError> {
    validation::validate_name("firstName", first_name)?;
    validation::validate_name("lastName", last_name)?;
    validation::validate_email(email)?;
    validation::validate_phone(phone)?;
    validation::optional_max_len("department", department, 255)?;
    validate_salary(salary)
}
