pub mod generate_diet_chart;
pub mod get_diet_chart;
pub mod get_diet_charts;
pub mod update_chart_status;
