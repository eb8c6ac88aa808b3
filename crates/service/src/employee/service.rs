use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::employee;

use super::domain::{EmployeeDto, EmployeeInput};
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Employee";

/// Employee business rules; mirrors `CustomerService`.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<EmployeeDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(EmployeeDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<EmployeeDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(EmployeeDto::from)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: EmployeeInput) -> Result<EmployeeDto, ServiceError> {
        input.validate()?;
        if self.repo.exists_by_email(&input.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken(ENTITY, &input.email));
        }
        let saved = self.repo.save(input.into_active_model()).await?;
        info!(id = saved.id, email = %saved.email, "employee_created");
        Ok(saved.into())
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn update(&self, id: i64, input: EmployeeInput) -> Result<EmployeeDto, ServiceError> {
        input.validate()?;
        let existing = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))?;

        if existing.email != input.email && self.repo.exists_by_email(&input.email).await? {
            debug!(current = %existing.email, "email already registered");
            return Err(ServiceError::email_taken(ENTITY, &input.email));
        }

        let mut am: employee::ActiveModel = existing.into();
        input.apply_to(&mut am);
        let saved = self.repo.save(am).await?;
        info!(id = saved.id, "employee_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "employee_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repo::seaorm::SeaOrmEmployeeRepository;
    use crate::employee::repository::mock::InMemoryEmployeeRepository;
    use crate::test_support::{employee_input, get_db};

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()))
    }

    #[tokio::test]
    async fn employee_crud_service() -> Result<(), anyhow::Error> {
        let svc = service();

        let created = svc.create(employee_input("e@x.com")).await?;
        assert_eq!(created.id, 1);
        assert_eq!(svc.get_by_id(1).await?, created);

        let raise = EmployeeInput { salary: 72_500.0, department: Some("Research".into()), ..employee_input("e@x.com") };
        let updated = svc.update(created.id, raise).await?;
        assert_eq!(updated.salary, 72_500.0);
        assert_eq!(updated.department.as_deref(), Some("Research"));
        assert_eq!(updated.created_at, created.created_at);

        let all = svc.list_all().await?;
        assert_eq!(all.len(), 1);

        svc.delete(created.id).await?;
        let err = svc.get_by_id(created.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found with id: 1");
        Ok(())
    }

    #[tokio::test]
    async fn email_uniqueness_on_create_and_update() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(employee_input("a@x.com")).await?;
        let b = svc.create(employee_input("b@x.com")).await?;

        let dup = svc.create(employee_input("a@x.com")).await.unwrap_err();
        assert_eq!(dup.to_string(), "Employee with email a@x.com already exists");
        assert_eq!(svc.list_all().await?.len(), 2);

        let steal = EmployeeInput { salary: 1.0, ..employee_input("a@x.com") };
        assert!(matches!(svc.update(b.id, steal).await, Err(ServiceError::Conflict(_))));
        assert_eq!(svc.get_by_id(b.id).await?, b);
        assert_eq!(svc.get_by_id(a.id).await?, a);
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_mutates_nothing() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(employee_input("a@x.com")).await?;

        assert!(matches!(svc.update(7, employee_input("q@x.com")).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(7).await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.list_all().await?, vec![a]);
        Ok(())
    }

    #[tokio::test]
    async fn negative_salary_rejected() {
        let svc = service();
        let input = EmployeeInput { salary: -5.0, ..employee_input("a@x.com") };
        assert!(matches!(svc.create(input).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn sqlite_backed_service() -> Result<(), anyhow::Error> {
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository { db: get_db().await? }));
        let a = svc.create(employee_input("a@x.com")).await?;
        svc.create(employee_input("b@x.com")).await?;
        assert!(matches!(svc.update(a.id, employee_input("b@x.com")).await, Err(ServiceError::Conflict(_))));

        let same = svc.update(a.id, EmployeeInput { phone: Some("555".into()), ..employee_input("a@x.com") }).await?;
        assert_eq!(same.phone.as_deref(), Some("555"));

        let listed = svc.list_all().await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, a.id);
        Ok(())
    }
}
