use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::utils::errors::{conflict_on_unique, AppError};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;
    async fn find_by_id(&self, national_id: &str) -> Result<Option<Customer>, AppError>;
    /// Devuelve `Conflict` si el documento o el email ya existen
    async fn create(&self, customer: &Customer) -> Result<(), AppError>;
    /// Devuelve las filas afectadas
    async fn update(&self, national_id: &str, customer: &Customer) -> Result<u64, AppError>;
    async fn delete(&self, national_id: &str) -> Result<u64, AppError>;
}

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT national_id, name, email, phone FROM customers ORDER BY national_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn find_by_id(&self, national_id: &str) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT national_id, name, email, phone FROM customers WHERE national_id = $1",
        )
        .bind(national_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn create(&self, customer: &Customer) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO customers (national_id, name, email, phone) VALUES ($1, $2, $3, $4)",
        )
        .bind(&customer.national_id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(e, || {
                format!(
                    "A customer with national ID {} or email {} already exists.",
                    customer.national_id, customer.email
                )
            })
        })?;

        Ok(())
    }

    async fn update(&self, national_id: &str, customer: &Customer) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE customers SET name = $1, email = $2, phone = $3 WHERE national_id = $4",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(national_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(e, || {
                format!("A customer with email {} already exists.", customer.email)
            })
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, national_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE national_id = $1")
            .bind(national_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
