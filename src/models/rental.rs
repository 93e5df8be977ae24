//! Modelo de Rental
//!
//! Una locación une cliente, empleado y vehículo (tabla rental_vehicles).
//! Está activa mientras `actual_return_date` sea NULL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub rental_id: i32,
    pub customer_id: String,
    pub employee_id: i32,
    pub vehicle_id: i32,
    pub start_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
}

/// Resultado de `sp_register_rental`: el procedimiento devuelve un ID o un mensaje de error
#[derive(Debug, Clone, PartialEq)]
pub enum RentalRegistration {
    Created(i32),
    Rejected(String),
}

impl RentalRegistration {
    /// Un mensaje no vacío tiene prioridad sobre el ID
    pub fn from_routine(rental_id: Option<i32>, error_message: Option<String>) -> Option<Self> {
        match error_message.filter(|msg| !msg.trim().is_empty()) {
            Some(msg) => Some(RentalRegistration::Rejected(msg)),
            None => rental_id.map(RentalRegistration::Created),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_wins_over_id() {
        let outcome = RentalRegistration::from_routine(Some(7), Some("Vehicle unavailable".into()));
        assert_eq!(outcome, Some(RentalRegistration::Rejected("Vehicle unavailable".into())));
    }

    #[test]
    fn test_blank_message_means_created() {
        let outcome = RentalRegistration::from_routine(Some(7), Some("  ".into()));
        assert_eq!(outcome, Some(RentalRegistration::Created(7)));
        assert_eq!(RentalRegistration::from_routine(None, None), None);
    }
}
