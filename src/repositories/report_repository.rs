use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::report::ActiveRentalReport;
use crate::utils::errors::AppError;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn active_rentals(&self) -> Result<Vec<ActiveRentalReport>, AppError>;
}

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn active_rentals(&self) -> Result<Vec<ActiveRentalReport>, AppError> {
        let rows = sqlx::query_as::<_, ActiveRentalReport>(
            r#"
            SELECT rental_id, start_date, expected_return_date, customer_id, customer_name,
                   vehicle_plate, vehicle_make, vehicle_model, employee_name
            FROM vw_active_rentals_report
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
