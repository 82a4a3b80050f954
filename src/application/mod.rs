pub mod cross_sell_matrix;
pub mod engagement;
pub mod enumerate;
pub mod matrix_filter;
pub mod relationship;
pub mod scoring;
pub mod snapshot;
pub mod summary;
