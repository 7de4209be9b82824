mod console;
mod route_report;

pub use console::print_ranking;
pub use route_report::{ReportSource, RouteReport, REPORT_FILENAME};
