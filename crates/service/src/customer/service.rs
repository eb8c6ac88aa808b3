use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::customer;

use super::domain::{CustomerDto, CustomerInput};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Customer";

/// Customer business rules: unique email, not-found detection, entity/DTO conversion.
///
/// Stateless; every call goes back to the repository.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<CustomerDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(CustomerDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<CustomerDto, ServiceError> {
        let found = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        Ok(found.into())
    }

    /// Create a customer; the email must not be in use.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, domain::CustomerInput, repository::mock::InMemoryCustomerRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::default()));
    /// let input = CustomerInput {
    ///     first_name: "Ada".into(), last_name: "Lovelace".into(), email: "a@x.com".into(),
    ///     phone: None, address: None, city: None, state: None, zip_code: None,
    /// };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.id, 1);
    /// let again = tokio_test::block_on(svc.create(input));
    /// assert!(matches!(again, Err(ServiceError::Conflict(_))));
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CustomerInput) -> Result<CustomerDto, ServiceError> {
        input.validate()?;
        if self.repo.exists_by_email(&input.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken(ENTITY, &input.email));
        }
        let saved = self.repo.save(input.into_active_model()).await?;
        info!(id = saved.id, email = %saved.email, "customer_created");
        Ok(saved.into())
    }

    /// Overwrite all mutable fields of an existing customer.
    ///
    /// Keeping the current email never conflicts; switching to an email held
    /// by another customer does, and leaves the record untouched.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn update(&self, id: i64, input: CustomerInput) -> Result<CustomerDto, ServiceError> {
        input.validate()?;
        let existing = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))?;

        if existing.email != input.email && self.repo.exists_by_email(&input.email).await? {
            debug!(current = %existing.email, "email already registered");
            return Err(ServiceError::email_taken(ENTITY, &input.email));
        }

        let mut am: customer::ActiveModel = existing.into();
        input.apply_to(&mut am);
        let saved = self.repo.save(am).await?;
        info!(id = saved.id, "customer_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "customer_deleted");
        Ok(())
    }
}
