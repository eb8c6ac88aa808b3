//! Helpers for reading `ActiveValue`s the way an insert/update would.

use sea_orm::{ActiveValue, Value};

use crate::errors::ServiceError;

pub(crate) fn value<V: Into<Value>>(v: ActiveValue<V>) -> Option<V> {
    match v {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

/// New value if set, otherwise the stored one; inserts must set every column.
pub(crate) fn pick<V: Into<Value>>(v: ActiveValue<V>, current: Option<V>, column: &str) -> Result<V, ServiceError> {
    value(v).or(current).ok_or_else(|| ServiceError::Db(format!("column {column} not set")))
}
