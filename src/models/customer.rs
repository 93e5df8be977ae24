//! Modelo de Customer
//!
//! Mapea la tabla customers; la clave es el documento nacional del cliente.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Customer - se usa igual como fila y como cuerpo de POST/PUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Customer {
    #[validate(custom = "validate_not_blank")]
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
