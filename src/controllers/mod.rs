pub mod customer_controller;
pub mod maintenance_controller;
pub mod rental_controller;
pub mod report_controller;
pub mod vehicle_controller;
