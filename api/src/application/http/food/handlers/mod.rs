pub mod create_food;
pub mod get_food;
pub mod get_foods;
pub mod get_sample_csv;
pub mod import_foods;
pub mod update_food;
