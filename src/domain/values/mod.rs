pub mod opportunity_score;
pub mod relationship_mode;
pub mod scoring;
