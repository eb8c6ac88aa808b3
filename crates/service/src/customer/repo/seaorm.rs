use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use models::customer;

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;
use crate::repo_support::value;

/// SeaORM-backed customer repository.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        let rows = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn save(&self, am: customer::ActiveModel) -> Result<customer::Model, ServiceError> {
        let is_new = matches!(am.id, ActiveValue::NotSet);
        let email = value(am.email.clone()).unwrap_or_default();
        let res = if is_new { am.insert(&self.db).await } else { am.update(&self.db).await };
        // email is the only unique column besides the key
        res.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::email_taken("Customer", &email),
            _ => e.into(),
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = customer::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let n = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        customer::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
