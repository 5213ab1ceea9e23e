pub mod db;
pub mod diet_chart;
pub mod food;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod patient;
pub mod recipe;
pub mod specialist;
