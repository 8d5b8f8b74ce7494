use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully assembled sales report descriptor.
///
/// Produced exclusively by [`SalesReportBuilder`]'s `build`; every field
/// starts at its zero value and only the builder populates it. A returned
/// descriptor is an independent snapshot, so later builder mutation never
/// reaches it.
///
/// [`SalesReportBuilder`]: crate::report::SalesReportBuilder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesReport {
    /// Required; the only field validated at build time.
    pub title: String,
    /// Free-form output format label (e.g., "PDF", "Excel").
    pub format: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub include_header: bool,
    pub header_text: String,
    pub include_footer: bool,
    pub footer_text: String,
    pub include_charts: bool,
    pub chart_type: String,
    pub include_summary: bool,
    /// Table columns, in the order they were added.
    pub columns: Vec<String>,
    /// Filter expressions (e.g., "Status=Active"), in the order they were added.
    pub filters: Vec<String>,
    pub sort_by: String,
    pub group_by: String,
    pub include_totals: bool,
    pub orientation: String,
    pub page_size: String,
    pub include_page_numbers: bool,
    pub company_logo: String,
    pub watermark: String,
}
