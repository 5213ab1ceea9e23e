pub mod analytics;
pub mod diet_chart;
pub mod food;
pub mod health;
pub mod patient;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod specialist;
