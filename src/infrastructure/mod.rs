pub mod dataset;
pub mod http;
pub mod sqlite;
