use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleAvailability};
use crate::utils::validation::validate_not_blank;

// Cuerpo de POST y PUT. En POST el vehicle_id se ignora y availability es opcional;
// en PUT ambos son obligatorios y el vehicle_id debe coincidir con la URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleRequest {
    pub vehicle_id: Option<i32>,
    #[validate(custom = "validate_not_blank")]
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub daily_price: Decimal,
    pub availability: Option<VehicleAvailability>,
}

impl VehicleRequest {
    pub fn into_vehicle(self, vehicle_id: i32, availability: VehicleAvailability) -> Vehicle {
        Vehicle {
            vehicle_id,
            plate: self.plate,
            make: self.make,
            model: self.model,
            year: self.year,
            color: self.color,
            daily_price: self.daily_price,
            availability,
        }
    }
}
