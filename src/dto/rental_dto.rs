use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para registrar una locación vía sp_register_rental
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RentalRequest {
    #[validate(custom = "validate_not_blank")]
    pub customer_id: String,
    pub employee_id: i32,
    pub vehicle_id: i32,
    pub expected_return_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RentalCreatedResponse {
    pub rental_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RentalClosedData {
    pub rental_id: i32,
    pub vehicle_id: i32,
}
