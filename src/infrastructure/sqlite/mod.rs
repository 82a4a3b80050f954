pub mod crm_repo;
pub mod migrations;
