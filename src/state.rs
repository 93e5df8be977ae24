//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Solo contiene repositorios sin estado propio;
//! cada request toma su propia conexión del pool.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::{
    CustomerRepository, MaintenanceRepository, PgCustomerRepository, PgMaintenanceRepository,
    PgRentalRepository, PgReportRepository, PgVehicleRepository, RentalRepository,
    ReportRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub customers: Arc<dyn CustomerRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub rentals: Arc<dyn RentalRepository>,
    pub maintenance: Arc<dyn MaintenanceRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            customers: Arc::new(PgCustomerRepository::new(pool.clone())),
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            rentals: Arc::new(PgRentalRepository::new(pool.clone())),
            maintenance: Arc::new(PgMaintenanceRepository::new(pool.clone())),
            reports: Arc::new(PgReportRepository::new(pool)),
        }
    }
}
