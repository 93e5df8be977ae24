use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::error;

use crate::dto::rental_dto::RentalRequest;
use crate::models::rental::{Rental, RentalRegistration};
use crate::utils::errors::AppError;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Rental>, AppError>;
    async fn find_by_id(&self, rental_id: i32) -> Result<Option<Rental>, AppError>;
    /// Delega todas las reglas de negocio al procedimiento almacenado
    async fn register(&self, request: &RentalRequest) -> Result<RentalRegistration, AppError>;
    /// `None` si la locación no existe; `Some(None)` si sigue abierta
    async fn actual_return_date(
        &self,
        rental_id: i32,
    ) -> Result<Option<Option<DateTime<Utc>>>, AppError>;
    /// Cierra la locación en una transacción y devuelve el vehículo liberado.
    /// `None` si no hay vehículo asociado a la locación.
    async fn close(&self, rental_id: i32) -> Result<Option<i32>, AppError>;
}

pub struct PgRentalRepository {
    pool: PgPool,
}

impl PgRentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const RENTAL_SELECT: &str = r#"
    SELECT r.rental_id, r.customer_id, r.employee_id, rv.vehicle_id,
           r.start_date, r.expected_return_date, r.actual_return_date, r.total_price
    FROM rentals r
    JOIN rental_vehicles rv ON rv.rental_id = r.rental_id
"#;

/// Pasos 2 a 5 del cierre; todos comparten la transacción
async fn close_steps(
    tx: &mut Transaction<'_, Postgres>,
    rental_id: i32,
) -> Result<Option<i32>, sqlx::Error> {
    let vehicle_id = sqlx::query_scalar::<_, i32>(
        "SELECT vehicle_id FROM rental_vehicles WHERE rental_id = $1",
    )
    .bind(rental_id)
    .fetch_optional(&mut **tx)
    .await?;

    let Some(vehicle_id) = vehicle_id else {
        return Ok(None);
    };

    sqlx::query("UPDATE rentals SET actual_return_date = NOW() WHERE rental_id = $1")
        .bind(rental_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query("UPDATE rentals SET total_price = fn_calculate_final_price($1) WHERE rental_id = $1")
        .bind(rental_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query("UPDATE vehicles SET availability = 'Available' WHERE vehicle_id = $1")
        .bind(vehicle_id)
        .execute(&mut **tx)
        .await?;

    Ok(Some(vehicle_id))
}

/// Un fallo del rollback solo se registra; el error original es el que se reporta
async fn rollback_quietly(tx: Transaction<'_, Postgres>, rental_id: i32) {
    if let Err(e) = tx.rollback().await {
        error!("❌ Error al hacer rollback del cierre de la locación {}: {}", rental_id, e);
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn find_all(&self) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(&format!("{RENTAL_SELECT} ORDER BY r.rental_id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    async fn find_by_id(&self, rental_id: i32) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>(&format!("{RENTAL_SELECT} WHERE r.rental_id = $1"))
            .bind(rental_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    async fn register(&self, request: &RentalRequest) -> Result<RentalRegistration, AppError> {
        let (rental_id, error_message): (Option<i32>, Option<String>) = sqlx::query_as(
            "SELECT rental_id, error_message FROM sp_register_rental($1, $2, $3, $4)",
        )
        .bind(&request.customer_id)
        .bind(request.employee_id)
        .bind(request.vehicle_id)
        .bind(request.expected_return_date)
        .fetch_one(&self.pool)
        .await?;

        RentalRegistration::from_routine(rental_id, error_message).ok_or_else(|| {
            AppError::Internal(
                "sp_register_rental returned neither a rental ID nor an error message".to_string(),
            )
        })
    }

    async fn actual_return_date(
        &self,
        rental_id: i32,
    ) -> Result<Option<Option<DateTime<Utc>>>, AppError> {
        let returned = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            "SELECT actual_return_date FROM rentals WHERE rental_id = $1",
        )
        .bind(rental_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(returned)
    }

    async fn close(&self, rental_id: i32) -> Result<Option<i32>, AppError> {
        let mut tx = self.pool.begin().await?;

        match close_steps(&mut tx, rental_id).await {
            Ok(Some(vehicle_id)) => {
                tx.commit().await?;
                Ok(Some(vehicle_id))
            }
            Ok(None) => {
                rollback_quietly(tx, rental_id).await;
                Ok(None)
            }
            Err(e) => {
                rollback_quietly(tx, rental_id).await;
                Err(AppError::Database(e))
            }
        }
    }
}
