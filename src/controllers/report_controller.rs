use std::sync::Arc;

use crate::models::report::ActiveRentalReport;
use crate::repositories::ReportRepository;
use crate::utils::errors::AppError;

pub struct ReportController {
    repository: Arc<dyn ReportRepository>,
}

impl ReportController {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn active_rentals(&self) -> Result<Vec<ActiveRentalReport>, AppError> {
        self.repository.active_rentals().await
    }
}
