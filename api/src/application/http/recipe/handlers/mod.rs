pub mod generate_recipe;
pub mod get_chart_recipes;
pub mod get_recipe;
pub mod get_recipes;
pub mod recipe_chat;
