pub mod app;
pub mod client;
pub mod report;
pub mod util;
