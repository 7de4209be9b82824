pub mod extract_ops;

mod route_metrics;

pub use route_metrics::RouteMetrics;
