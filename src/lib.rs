pub mod error;
pub mod preset;
pub mod render;
pub mod report;

pub use error::{ReportError, Result};
pub use preset::Preset;
pub use report::{ReportBuilder, SalesReport, SalesReportBuilder};
