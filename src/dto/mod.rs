pub mod common_dto;
pub mod maintenance_dto;
pub mod rental_dto;
pub mod vehicle_dto;
