pub mod business_unit_repository;
pub mod client_repository;
pub mod opportunity_repository;
pub mod relationship_signal;
pub mod service_repository;
