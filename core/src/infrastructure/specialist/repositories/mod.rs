pub mod swap_log_repository;
