pub mod analytics;
pub mod authentication;
pub mod common;
pub mod compatibility;
pub mod diet_chart;
pub mod food;
pub mod health;
pub mod patient;
pub mod recipe;
pub mod specialist;
