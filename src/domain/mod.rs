// Domain layer - Records, filter state and the pure filter/aggregate core
pub mod area;
pub mod block;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod format;
pub mod hospital;
pub mod location;
pub mod metrics;
pub mod period;
pub mod primetime;
pub mod provider;
pub mod service_line;
pub mod trend;
pub mod turnover;
