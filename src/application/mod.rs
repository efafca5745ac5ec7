// Application layer - Use cases over the in-memory dataset
pub mod analytics_repository;
pub mod dashboard_builder;
pub mod dashboard_service;
pub mod filter_holder;
pub mod filter_options;
pub mod hospital_service;
pub mod live_dashboard;
