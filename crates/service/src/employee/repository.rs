use async_trait::async_trait;
use models::employee;

use crate::errors::ServiceError;

/// Persistence capabilities the employee service relies on.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError>;
    async fn save(&self, employee: employee::ActiveModel) -> Result<employee::Model, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;
    use sea_orm::prelude::DateTimeWithTimeZone;

    use crate::repo_support::{pick, value};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, employee::Model>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        table: Mutex<Table>,
    }

    impl InMemoryEmployeeRepository {
        fn table(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("employee table lock poisoned".into()))
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(self.table()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.table()?.rows.get(&id).cloned())
        }

        async fn save(&self, am: employee::ActiveModel) -> Result<employee::Model, ServiceError> {
            let mut table = self.table()?;
            let existing = match value(am.id) {
                Some(id) => Some(
                    table.rows.get(&id).cloned().ok_or_else(|| ServiceError::Db(format!("no employee row with id {id}")))?,
                ),
                None => None,
            };
            let now: DateTimeWithTimeZone = Utc::now().into();
            let cur = existing.as_ref();
            let id = match cur {
                Some(e) => e.id,
                None => table.last_id + 1,
            };
            let model = employee::Model {
                id,
                first_name: pick(am.first_name, cur.map(|e| e.first_name.clone()), "first_name")?,
                last_name: pick(am.last_name, cur.map(|e| e.last_name.clone()), "last_name")?,
                email: pick(am.email, cur.map(|e| e.email.clone()), "email")?,
                phone: pick(am.phone, cur.map(|e| e.phone.clone()), "phone")?,
                department: pick(am.department, cur.map(|e| e.department.clone()), "department")?,
                salary: pick(am.salary, cur.map(|e| e.salary), "salary")?,
                created_at: cur.map_or(now, |e| e.created_at),
                updated_at: now,
            };
            if table.rows.values().any(|r| r.id != model.id && r.email == model.email) {
                return Err(ServiceError::email_taken("Employee", &model.email));
            }
            table.last_id = table.last_id.max(id);
            table.rows.insert(id, model.clone());
            Ok(model)
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table()?.rows.contains_key(&id))
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(self.table()?.rows.values().any(|r| r.email == email))
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.table()?.rows.remove(&id);
            Ok(())
        }
    }
}
