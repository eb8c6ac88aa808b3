use async_trait::async_trait;
use models::customer;

use crate::errors::ServiceError;

/// Persistence capabilities the customer service relies on.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError>;
    /// Insert when the primary key is unset, update otherwise.
    async fn save(&self, customer: customer::ActiveModel) -> Result<customer::Model, ServiceError>;
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
        rows: BTreeMap<i64, customer::Model>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryCustomerRepository {
        table: Mutex<Table>,
    }

    impl InMemoryCustomerRepository {
        fn table(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("customer table lock poisoned".into()))
        }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
            Ok(self.table()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
            Ok(self.table()?.rows.get(&id).cloned())
        }

        async fn save(&self, am: customer::ActiveModel) -> Result<customer::Model, ServiceError> {
            let mut table = self.table()?;
            let existing = match value(am.id) {
                Some(id) => Some(
                    table.rows.get(&id).cloned().ok_or_else(|| ServiceError::Db(format!("no customer row with id {id}")))?,
                ),
                None => None,
            };
            let now: DateTimeWithTimeZone = Utc::now().into();
            let cur = existing.as_ref();
            let id = match cur {
                Some(c) => c.id,
                None => table.last_id + 1,
            };
            let model = customer::Model {
                id,
                first_name: pick(am.first_name, cur.map(|c| c.first_name.clone()), "first_name")?,
                last_name: pick(am.last_name, cur.map(|c| c.last_name.clone()), "last_name")?,
                email: pick(am.email, cur.map(|c| c.email.clone()), "email")?,
                phone: pick(am.phone, cur.map(|c| c.phone.clone()), "phone")?,
                address: pick(am.address, cur.map(|c| c.address.clone()), "address")?,
                city: pick(am.city, cur.map(|c| c.city.clone()), "city")?,
                state: pick(am.state, cur.map(|c| c.state.clone()), "state")?,
                zip_code: pick(am.zip_code, cur.map(|c| c.zip_code.clone()), "zip_code")?,
                created_at: cur.map_or(now, |c| c.created_at),
                updated_at: now,
            };
            if table.rows.values().any(|r| r.id != model.id && r.email == model.email) {
                return Err(ServiceError::email_taken("Customer", &model.email));
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
