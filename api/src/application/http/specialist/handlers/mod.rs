pub mod find_similar_foods;
pub mod get_swap_logs;
pub mod similar_foods_for_item;
pub mod swap_food;
