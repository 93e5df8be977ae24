use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{conflict_on_unique, AppError};

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn find_by_id(&self, vehicle_id: i32) -> Result<Option<Vehicle>, AppError>;
    /// Inserta el vehículo ignorando `vehicle_id` y devuelve el ID asignado
    async fn create(&self, vehicle: &Vehicle) -> Result<i32, AppError>;
    async fn update(&self, vehicle: &Vehicle) -> Result<u64, AppError>;
    async fn delete(&self, vehicle_id: i32) -> Result<u64, AppError>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const VEHICLE_COLUMNS: &str =
    "vehicle_id, plate, make, model, year, color, daily_price, availability";

fn duplicate_plate(plate: &str) -> String {
    format!("A vehicle with plate {} already exists.", plate)
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY vehicle_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, vehicle_id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE vehicle_id = $1"
        ))
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn create(&self, vehicle: &Vehicle) -> Result<i32, AppError> {
        let (vehicle_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO vehicles (plate, make, model, year, color, daily_price, availability)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING vehicle_id
            "#,
        )
        .bind(&vehicle.plate)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.color)
        .bind(vehicle.daily_price)
        .bind(vehicle.availability.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, || duplicate_plate(&vehicle.plate)))?;

        Ok(vehicle_id)
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET plate = $2, make = $3, model = $4, year = $5, color = $6,
                daily_price = $7, availability = $8
            WHERE vehicle_id = $1
            "#,
        )
        .bind(vehicle.vehicle_id)
        .bind(&vehicle.plate)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.color)
        .bind(vehicle.daily_price)
        .bind(vehicle.availability.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, || duplicate_plate(&vehicle.plate)))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, vehicle_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
