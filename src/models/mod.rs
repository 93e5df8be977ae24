//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean las tablas
//! y la vista de reportes del schema PostgreSQL.

pub mod customer;
pub mod maintenance;
pub mod rental;
pub mod report;
pub mod vehicle;
