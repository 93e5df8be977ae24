use std::sync::Arc;
use tracing::info;

use crate::dto::rental_dto::{RentalClosedData, RentalCreatedResponse, RentalRequest};
use crate::models::rental::{Rental, RentalRegistration};
use crate::repositories::RentalRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct RentalController {
    repository: Arc<dyn RentalRepository>,
}

impl RentalController {
    pub fn new(repository: Arc<dyn RentalRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Rental>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, rental_id: i32) -> Result<Rental, AppError> {
        self.repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| not_found_error("Rental not found."))
    }

    pub async fn create(&self, request: RentalRequest) -> Result<RentalCreatedResponse, AppError> {
        match self.repository.register(&request).await? {
            RentalRegistration::Created(rental_id) => {
                info!("📝 Locación {} registrada para el vehículo {}", rental_id, request.vehicle_id);
                Ok(RentalCreatedResponse { rental_id })
            }
            RentalRegistration::Rejected(message) => Err(AppError::BadRequest(message)),
        }
    }

    /// Devolución del vehículo.
    ///
    /// La verificación de "ya cerrada" corre fuera de la transacción del cierre:
    /// dos cierres concurrentes de la misma locación pueden pasar ambos la
    /// verificación antes de que alguno haga commit.
    pub async fn close(&self, rental_id: i32) -> Result<RentalClosedData, AppError> {
        if let Some(Some(_)) = self.repository.actual_return_date(rental_id).await? {
            return Err(bad_request_error("This rental has already been closed."));
        }

        let vehicle_id = self
            .repository
            .close(rental_id)
            .await?
            .ok_or_else(|| not_found_error("No rental found with this ID."))?;

        info!("✅ Locación {} cerrada, vehículo {} liberado", rental_id, vehicle_id);
        Ok(RentalClosedData { rental_id, vehicle_id })
    }
}
