use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para iniciar una manutención
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartMaintenanceRequest {
    pub vehicle_id: i32,
    pub employee_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MaintenanceStartedData {
    pub maintenance_id: i32,
    pub vehicle_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MaintenanceFinishedData {
    pub maintenance_id: i32,
    pub vehicle_id: i32,
    // false si una locación abierta todavía retiene el vehículo
    pub vehicle_released: bool,
}
