use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use models::employee;

use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::repo_support::value;

/// SeaORM-backed employee repository.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn save(&self, am: employee::ActiveModel) -> Result<employee::Model, ServiceError> {
        let is_new = matches!(am.id, ActiveValue::NotSet);
        let email = value(am.email.clone()).unwrap_or_default();
        let res = if is_new { am.insert(&self.db).await } else { am.update(&self.db).await };
        // email is the only unique column besides the key
        res.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::email_taken("Employee", &email),
            _ => e.into(),
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(employee::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let n = employee::Entity::find()
            .filter(employee::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        employee::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{employee_input, get_db};

    #[tokio::test]
    async fn seaorm_employee_repository_roundtrip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository { db: get_db().await? };

        let e = repo.save(employee_input("e@x.com").into_active_model()).await?;
        assert_eq!(e.id, 1);
        assert!(repo.exists_by_email("e@x.com").await?);

        let mut am: employee::ActiveModel = e.clone().into();
        am.salary = ActiveValue::Set(61_000.0);
        let updated = repo.save(am).await?;
        assert_eq!(updated.salary, 61_000.0);
        assert_eq!(updated.created_at, e.created_at);

        repo.delete_by_id(e.id).await?;
        assert!(!repo.exists_by_id(e.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unique_violation_from_store_is_conflict() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository { db: get_db().await? };
        repo.save(employee_input("a@x.com").into_active_model()).await?;

        let err = repo.save(employee_input("a@x.com").into_active_model()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "Employee with email a@x.com already exists");
        assert_eq!(repo.find_all().await?.len(), 1);
        Ok(())
    }
}
