//! `SeaORM` entities for the tables created by `core/migrations`.

pub mod diet_charts;
pub mod food_swap_logs;
pub mod foods;
pub mod meal_items;
pub mod meal_plans;
pub mod patients;
pub mod recipes;
