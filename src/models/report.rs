//! Fila de la vista vw_active_rentals_report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ActiveRentalReport {
    pub rental_id: i32,
    pub start_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    pub customer_id: String,
    pub customer_name: String,
    pub vehicle_plate: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub employee_name: String,
}
