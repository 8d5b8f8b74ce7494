mod builder;
mod config;

pub use builder::{ReportBuilder, SalesReportBuilder};
pub use config::SalesReport;
