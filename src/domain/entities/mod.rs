pub mod business_unit;
pub mod client;
pub mod matrix_item;
pub mod opportunity;
pub mod service;

fn active_by_default() -> bool {
    true
}
