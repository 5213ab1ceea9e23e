pub mod get_analytics;
