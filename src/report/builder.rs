use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::report::SalesReport;

/// The builder capability set: chained setters plus a validating `build`.
///
/// Every setter returns `&mut Self` so calls chain in any order; all setters
/// are total and validation happens once, in [`build`](ReportBuilder::build).
/// The paired header/footer/chart setters come in two forms because Rust has
/// no default arguments: the bare form fixes the visibility flag to `true`
/// (and the chart kind to `"Bar"`), the `_with` form takes it explicitly.
pub trait ReportBuilder {
    fn title(&mut self, title: impl Into<String>) -> &mut Self;

    fn format(&mut self, format: impl Into<String>) -> &mut Self;

    /// Sets both ends of the reporting period. Ordering is not checked.
    fn date_range(&mut self, start: NaiveDate, end: NaiveDate) -> &mut Self;

    fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.header_with(text, true)
    }

    fn header_with(&mut self, text: impl Into<String>, show: bool) -> &mut Self;

    fn footer(&mut self, text: impl Into<String>) -> &mut Self {
        self.footer_with(text, true)
    }

    fn footer_with(&mut self, text: impl Into<String>, show: bool) -> &mut Self;

    fn chart(&mut self, show: bool) -> &mut Self {
        self.chart_with(show, "Bar")
    }

    fn chart_with(&mut self, show: bool, kind: impl Into<String>) -> &mut Self;

    /// Appends to the column list; calling twice accumulates.
    fn columns<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>;

    /// Appends to the filter list; calling twice accumulates.
    fn filters<I>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>;

    fn summary(&mut self, show: bool) -> &mut Self;

    fn sort_by(&mut self, column: impl Into<String>) -> &mut Self;

    fn group_by(&mut self, column: impl Into<String>) -> &mut Self;

    fn totals(&mut self, show: bool) -> &mut Self;

    fn orientation(&mut self, orientation: impl Into<String>) -> &mut Self;

    fn page_size(&mut self, size: impl Into<String>) -> &mut Self;

    fn page_numbers(&mut self, show: bool) -> &mut Self;

    fn company_logo(&mut self, logo_path: impl Into<String>) -> &mut Self;

    fn watermark(&mut self, text: impl Into<String>) -> &mut Self;

    /// Validates the accumulated state and returns an independent snapshot.
    ///
    /// Fails with [`ReportError::MissingTitle`] when no non-empty title was
    /// set. The builder is not consumed and there is no reset: calling
    /// `build` again returns a fresh snapshot of whatever the state is then.
    fn build(&self) -> Result<SalesReport>;
}

/// The one [`ReportBuilder`] implementation: a mutable accumulator around an
/// in-progress [`SalesReport`].
#[derive(Debug, Clone, Default)]
pub struct SalesReportBuilder {
    report: SalesReport,
}

impl SalesReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for SalesReportBuilder {
    fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.report.title = title.into();
        self
    }

    fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.report.format = format.into();
        self
    }

    fn date_range(&mut self, start: NaiveDate, end: NaiveDate) -> &mut Self {
        self.report.start_date = Some(start);
        self.report.end_date = Some(end);
        self
    }

    fn header_with(&mut self, text: impl Into<String>, show: bool) -> &mut Self {
        self.report.header_text = text.into();
        self.report.include_header = show;
        self
    }

    fn footer_with(&mut self, text: impl Into<String>, show: bool) -> &mut Self {
        self.report.footer_text = text.into();
        self.report.include_footer = show;
        self
    }

    fn chart_with(&mut self, show: bool, kind: impl Into<String>) -> &mut Self {
        self.report.include_charts = show;
        self.report.chart_type = kind.into();
        self
    }

    fn columns<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.report.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    fn filters<I>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.report.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    fn summary(&mut self, show: bool) -> &mut Self {
        self.report.include_summary = show;
        self
    }

    fn sort_by(&mut self, column: impl Into<String>) -> &mut Self {
        self.report.sort_by = column.into();
        self
    }

    fn group_by(&mut self, column: impl Into<String>) -> &mut Self {
        self.report.group_by = column.into();
        self
    }

    fn totals(&mut self, show: bool) -> &mut Self {
        self.report.include_totals = show;
        self
    }

    fn orientation(&mut self, orientation: impl Into<String>) -> &mut Self {
        self.report.orientation = orientation.into();
        self
    }

    fn page_size(&mut self, size: impl Into<String>) -> &mut Self {
        self.report.page_size = size.into();
        self
    }

    fn page_numbers(&mut self, show: bool) -> &mut Self {
        self.report.include_page_numbers = show;
        self
    }

    fn company_logo(&mut self, logo_path: impl Into<String>) -> &mut Self {
        self.report.company_logo = logo_path.into();
        self
    }

    fn watermark(&mut self, text: impl Into<String>) -> &mut Self {
        self.report.watermark = text.into();
        self
    }

    fn build(&self) -> Result<SalesReport> {
        if self.report.title.is_empty() {
            return Err(ReportError::MissingTitle);
        }
        Ok(self.report.clone())
    }
}
