use std::sync::Arc;

use crate::dto::vehicle_dto::VehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle not found."))
    }

    pub async fn create(&self, request: VehicleRequest) -> Result<Vehicle, AppError> {
        // El ID lo asigna la base
        let availability = request.availability.unwrap_or_default();
        let mut vehicle = request.into_vehicle(0, availability);
        vehicle.vehicle_id = self.repository.create(&vehicle).await?;

        tracing::info!(
            "🚗 Vehículo {} creado con ID {} ({})",
            vehicle.plate,
            vehicle.vehicle_id,
            vehicle.availability
        );
        Ok(vehicle)
    }

    pub async fn update(&self, vehicle_id: i32, request: VehicleRequest) -> Result<(), AppError> {
        if request.vehicle_id != Some(vehicle_id) {
            return Err(bad_request_error(
                "The ID in the URL does not match the ID in the request body.",
            ));
        }

        // Obligatorio en PUT
        let availability = request.availability.ok_or_else(|| {
            bad_request_error("The availability field is required when updating a vehicle.")
        })?;

        let vehicle = request.into_vehicle(vehicle_id, availability);
        match self.repository.update(&vehicle).await? {
            0 => Err(not_found_error("Vehicle not found for update.")),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<(), AppError> {
        match self.repository.delete(vehicle_id).await? {
            0 => Err(not_found_error("Vehicle not found for deletion.")),
            _ => Ok(()),
        }
    }
}
