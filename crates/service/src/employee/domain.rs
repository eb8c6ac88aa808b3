use models::employee;
use sea_orm::{prelude::DateTimeWithTimeZone, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Fields a client supplies on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub salary: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl EmployeeInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        employee::validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone.as_deref(),
            self.department.as_deref(),
            self.salary,
        )?;
        Ok(())
    }

    pub fn apply_to(self, am: &mut employee::ActiveModel) {
        am.first_name = Set(self.first_name);
        am.last_name = Set(self.last_name);
        am.email = Set(self.email);
        am.phone = Set(self.phone);
        am.department = Set(self.department);
        am.salary = Set(self.salary);
    }

    pub fn into_active_model(self) -> employee::ActiveModel {
        let mut am = employee::ActiveModel { ..Default::default() };
        self.apply_to(&mut am);
        am
    }
}

impl From<employee::Model> for EmployeeDto {
    fn from(m: employee::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            department: m.department,
            salary: m.salary,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn salary_accepts_integers() {
        let input: EmployeeInput = serde_json::from_value(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "department": "Engineering",
            "salary": 95000
        }))
        .unwrap();
        assert_eq!(input.salary, 95000.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn missing_salary_is_a_shape_error() {
        let res = serde_json::from_value::<EmployeeInput>(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com"
        }));
        assert!(res.is_err());
    }
}
