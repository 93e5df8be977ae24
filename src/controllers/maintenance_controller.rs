use std::sync::Arc;
use tracing::info;

use crate::dto::maintenance_dto::{
    MaintenanceFinishedData, MaintenanceStartedData, StartMaintenanceRequest,
};
use crate::models::maintenance::Maintenance;
use crate::models::vehicle::VehicleAvailability;
use crate::repositories::MaintenanceRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct MaintenanceController {
    repository: Arc<dyn MaintenanceRepository>,
}

impl MaintenanceController {
    pub fn new(repository: Arc<dyn MaintenanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Maintenance>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, maintenance_id: i32) -> Result<Maintenance, AppError> {
        self.repository
            .find_by_id(maintenance_id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record not found."))
    }

    pub async fn start(
        &self,
        request: StartMaintenanceRequest,
    ) -> Result<MaintenanceStartedData, AppError> {
        let status = self
            .repository
            .vehicle_availability(request.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehicle with ID {} not found.", request.vehicle_id))
            })?;

        if status != VehicleAvailability::Available.as_str() {
            return Err(AppError::Conflict(format!(
                "Vehicle is not 'Available' to start maintenance. Current status: {}",
                status
            )));
        }

        let maintenance_id = self.repository.start(&request).await?;
        info!("🔧 Manutención {} iniciada para el vehículo {}", maintenance_id, request.vehicle_id);

        Ok(MaintenanceStartedData {
            maintenance_id,
            vehicle_id: request.vehicle_id,
        })
    }

    pub async fn finish(&self, maintenance_id: i32) -> Result<MaintenanceFinishedData, AppError> {
        let vehicle_id = self
            .repository
            .vehicle_of(maintenance_id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record not found."))?;

        self.repository.stamp_end(maintenance_id).await?;
        let vehicle_released = self.repository.release_vehicle_if_idle(vehicle_id).await?;

        if !vehicle_released {
            info!("🔒 Vehículo {} sigue en una locación abierta", vehicle_id);
        }

        Ok(MaintenanceFinishedData {
            maintenance_id,
            vehicle_id,
            vehicle_released,
        })
    }
}
