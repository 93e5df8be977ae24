//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado de disponibilidad.
//! Mapea exactamente a la tabla vehicles con primary key 'vehicle_id'.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use thiserror::Error;

/// Estado de disponibilidad del vehículo - columna de texto `availability`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleAvailability {
    #[default]
    Available,
    Unavailable,
}

#[derive(Error, Debug)]
#[error("unknown vehicle availability '{0}'")]
pub struct UnknownAvailability(pub String);

impl VehicleAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleAvailability::Available => "Available",
            VehicleAvailability::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for VehicleAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for VehicleAvailability {
    type Error = UnknownAvailability;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Available" => Ok(VehicleAvailability::Available),
            "Unavailable" => Ok(VehicleAvailability::Unavailable),
            _ => Err(UnknownAvailability(value)),
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i32,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub daily_price: Decimal,
    #[sqlx(try_from = "String")]
    pub availability: VehicleAvailability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_round_trips_through_column_text() {
        for availability in [VehicleAvailability::Available, VehicleAvailability::Unavailable] {
            let parsed = VehicleAvailability::try_from(availability.as_str().to_string()).unwrap();
            assert_eq!(parsed, availability);
        }
    }

    #[test]
    fn test_unknown_availability_is_rejected() {
        let err = VehicleAvailability::try_from("Rented".to_string()).unwrap_err();
        assert_eq!(err.0, "Rented");
        assert!(serde_json::from_str::<VehicleAvailability>("\"available\"").is_err());
    }

    #[test]
    fn test_availability_serializes_as_plain_string() {
        let json = serde_json::to_string(&VehicleAvailability::Unavailable).unwrap();
        assert_eq!(json, "\"Unavailable\"");
        assert_eq!(VehicleAvailability::Unavailable.to_string(), "Unavailable");
    }
}
