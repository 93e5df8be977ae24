//! Repositorios
//!
//! Cada recurso define un trait de acceso a datos y su implementación sobre PostgreSQL.

pub mod customer_repository;
pub mod maintenance_repository;
pub mod rental_repository;
pub mod report_repository;
pub mod vehicle_repository;

pub use customer_repository::{CustomerRepository, PgCustomerRepository};
pub use maintenance_repository::{MaintenanceRepository, PgMaintenanceRepository};
pub use rental_repository::{PgRentalRepository, RentalRepository};
pub use report_repository::{PgReportRepository, ReportRepository};
pub use vehicle_repository::{PgVehicleRepository, VehicleRepository};
