use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::maintenance_dto::StartMaintenanceRequest;
use crate::models::maintenance::Maintenance;
use crate::utils::errors::AppError;

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Maintenance>, AppError>;
    async fn find_by_id(&self, maintenance_id: i32) -> Result<Option<Maintenance>, AppError>;
    /// Texto crudo de `vehicles.availability`, `None` si el vehículo no existe
    async fn vehicle_availability(&self, vehicle_id: i32) -> Result<Option<String>, AppError>;
    /// Inserta un registro abierto; el trigger de la base marca el vehículo como Unavailable
    async fn start(&self, request: &StartMaintenanceRequest) -> Result<i32, AppError>;
    async fn vehicle_of(&self, maintenance_id: i32) -> Result<Option<i32>, AppError>;
    async fn stamp_end(&self, maintenance_id: i32) -> Result<(), AppError>;
    /// Marca el vehículo como Available salvo que una locación abierta lo use.
    /// Devuelve `true` si el vehículo quedó liberado.
    async fn release_vehicle_if_idle(&self, vehicle_id: i32) -> Result<bool, AppError>;
}

pub struct PgMaintenanceRepository {
    pool: PgPool,
}

impl PgMaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const MAINTENANCE_COLUMNS: &str =
    "maintenance_id, vehicle_id, employee_id, start_date, end_date, description";

#[async_trait]
impl MaintenanceRepository for PgMaintenanceRepository {
    async fn find_all(&self) -> Result<Vec<Maintenance>, AppError> {
        let records = sqlx::query_as::<_, Maintenance>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance ORDER BY maintenance_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_id(&self, maintenance_id: i32) -> Result<Option<Maintenance>, AppError> {
        let record = sqlx::query_as::<_, Maintenance>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance WHERE maintenance_id = $1"
        ))
        .bind(maintenance_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn vehicle_availability(&self, vehicle_id: i32) -> Result<Option<String>, AppError> {
        let availability = sqlx::query_scalar::<_, String>(
            "SELECT availability FROM vehicles WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(availability)
    }

    async fn start(&self, request: &StartMaintenanceRequest) -> Result<i32, AppError> {
        let maintenance_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO maintenance (vehicle_id, employee_id, start_date, description)
            VALUES ($1, $2, NOW(), $3)
            RETURNING maintenance_id
            "#,
        )
        .bind(request.vehicle_id)
        .bind(request.employee_id)
        .bind(&request.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance_id)
    }

    async fn vehicle_of(&self, maintenance_id: i32) -> Result<Option<i32>, AppError> {
        let vehicle_id = sqlx::query_scalar::<_, i32>(
            "SELECT vehicle_id FROM maintenance WHERE maintenance_id = $1",
        )
        .bind(maintenance_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle_id)
    }

    async fn stamp_end(&self, maintenance_id: i32) -> Result<(), AppError> {
        sqlx::query("UPDATE maintenance SET end_date = NOW() WHERE maintenance_id = $1")
            .bind(maintenance_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn release_vehicle_if_idle(&self, vehicle_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles v
            SET availability = 'Available'
            WHERE v.vehicle_id = $1
              AND NOT EXISTS (
                  SELECT 1
                  FROM rentals r
                  JOIN rental_vehicles rv ON rv.rental_id = r.rental_id
                  WHERE rv.vehicle_id = v.vehicle_id
                    AND r.actual_return_date IS NULL
              )
            "#,
        )
        .bind(vehicle_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
