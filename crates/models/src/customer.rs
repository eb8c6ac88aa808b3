use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps `created_at` on insert and refreshes `updated_at` on every save.
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

pub fn validate_zip_code(zip: Option<&str>) -> Result<(), errors::ModelError> {
    validation::optional_max_len("zipCode", zip, 20)
}

/// Validate every field a client may supply for a customer.
#[allow(clippy::too_many_arguments)]
pub fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: Option<&str>,
    address: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip_code: Option<&str>,
) -> Result<(), errors::ModelError> {
    validation::validate_name("firstName", first_name)?;
    validation::validate_name("lastName", last_name)?;
    validation::validate_email(email)?;
    validation::validate_phone(phone)?;
    validation::optional_max_len("address", address, 255)?;
    validation::optional_max_len("city", city, 255)?;
    validation::optional_max_len("state", state, 255)?;
    validate_zip_code(zip_code)
}
