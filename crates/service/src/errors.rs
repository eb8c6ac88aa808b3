use thiserror::Error;

/// Failure kinds surfaced by the resource services.
///
/// Callers branch on the variant; the message is for humans only.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} not found with id: {id}"))
    }

    pub fn email_taken(entity: &str, email: &str) -> Self {
        Self::Conflict(format!("{entity} with email {email} already exists"))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            models::errors::ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ServiceError::not_found("Customer", 3).to_string(), "Customer not found with id: 3");
        assert_eq!(
            ServiceError::email_taken("Employee", "a@x.com").to_string(),
            "Employee with email a@x.com already exists"
        );
    }

    #[test]
    fn model_errors_keep_their_kind() {
        let v: ServiceError = models::errors::ModelError::Validation("email is required".into()).into();
        assert!(matches!(v, ServiceError::Validation(ref m) if m == "email is required"));
        let d: ServiceError = models::errors::ModelError::Db("down".into()).into();
        assert!(matches!(d, ServiceError::Db(_)));
    }
}
