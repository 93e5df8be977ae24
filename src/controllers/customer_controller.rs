use std::sync::Arc;

use crate::models::customer::Customer;
use crate::repositories::CustomerRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct CustomerController {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerController {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, national_id: &str) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(national_id)
            .await?
            .ok_or_else(|| not_found_error("Customer not found."))
    }

    pub async fn create(&self, customer: Customer) -> Result<Customer, AppError> {
        self.repository.create(&customer).await?;
        tracing::info!("👤 Cliente {} creado", customer.national_id);
        Ok(customer)
    }

    pub async fn update(&self, national_id: &str, customer: Customer) -> Result<(), AppError> {
        // Se rechaza antes de tocar la base
        if national_id != customer.national_id {
            return Err(bad_request_error(
                "The national ID in the URL does not match the national ID in the request body.",
            ));
        }

        match self.repository.update(national_id, &customer).await? {
            0 => Err(not_found_error("Customer not found for update.")),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, national_id: &str) -> Result<(), AppError> {
        match self.repository.delete(national_id).await? {
            0 => Err(not_found_error("Customer not found for deletion.")),
            _ => Ok(()),
        }
    }
}
