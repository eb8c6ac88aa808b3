use models::customer;
use sea_orm::{prelude::DateTimeWithTimeZone, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Fields a client supplies on create/update. Id and timestamps are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Customer as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl CustomerInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        customer::validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone.as_deref(),
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip_code.as_deref(),
        )?;
        Ok(())
    }

    /// Overwrite every mutable column; id and created_at stay untouched.
    pub fn apply_to(self, am: &mut customer::ActiveModel) {
        am.first_name = Set(self.first_name);
        am.last_name = Set(self.last_name);
        am.email = Set(self.email);
        am.phone = Set(self.phone);
        am.address = Set(self.address);
        am.city = Set(self.city);
        am.state = Set(self.state);
        am.zip_code = Set(self.zip_code);
    }

    pub fn into_active_model(self) -> customer::ActiveModel {
        let mut am = customer::ActiveModel { ..Default::default() };
        self.apply_to(&mut am);
        am
    }
}

impl From<customer::Model> for CustomerDto {
    fn from(m: customer::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;
    use serde_json::json;

    #[test]
    fn input_ignores_server_assigned_keys() {
        let input: CustomerInput = serde_json::from_value(json!({
            "id": 99,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "zipCode": "N1",
            "createdAt": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.zip_code.as_deref(), Some("N1"));
        assert_eq!(input.phone, None);
    }

    #[test]
    fn new_active_model_leaves_id_unset() {
        let am = CustomerInput {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            address: None,
            city: Some("London".into()),
            state: None,
            zip_code: None,
        }
        .into_active_model();
        assert!(matches!(am.id, ActiveValue::NotSet));
        assert!(matches!(am.created_at, ActiveValue::NotSet));
        assert_eq!(am.city, Set(Some("London".to_string())));
    }

    #[test]
    fn dto_serializes_camel_case() {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let dto = CustomerDto {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: Some("N1".into()),
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["firstName"], "Ada");
        assert_eq!(v["zipCode"], "N1");
        assert!(v.get("createdAt").is_some());
        assert!(v.get("first_name").is_none());
    }
}
