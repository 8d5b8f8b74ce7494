use crate::report::SalesReport;

/// Render a finished report descriptor as console text, one line per
/// populated field. Pure string building; callers decide where it goes.
pub fn describe(report: &SalesReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Sales Report: {} ===\n", report.title));

    if !report.format.is_empty() {
        out.push_str(&format!("Format: {}\n", report.format));
    }

    if let (Some(start), Some(end)) = (report.start_date, report.end_date) {
        out.push_str(&format!(
            "Period: {} to {}\n",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ));
    }

    if report.include_header {
        out.push_str(&format!("Header: {}\n", report.header_text));
    }

    if report.include_charts {
        out.push_str(&format!("Chart: {}\n", report.chart_type));
    }

    if !report.columns.is_empty() {
        out.push_str(&format!("Columns: {}\n", report.columns.join(", ")));
    }

    if !report.filters.is_empty() {
        out.push_str(&format!("Filters: {}\n", report.filters.join(", ")));
    }

    if !report.sort_by.is_empty() {
        out.push_str(&format!("Sorted by: {}\n", report.sort_by));
    }

    if !report.group_by.is_empty() {
        out.push_str(&format!("Grouped by: {}\n", report.group_by));
    }

    if report.include_summary {
        out.push_str("Summary: included\n");
    }

    if report.include_totals {
        out.push_str("Totals: included\n");
    }

    if !report.orientation.is_empty() || !report.page_size.is_empty() {
        let mut layout = Vec::new();
        if !report.orientation.is_empty() {
            layout.push(report.orientation.as_str());
        }
        if !report.page_size.is_empty() {
            layout.push(report.page_size.as_str());
        }
        out.push_str(&format!("Layout: {}\n", layout.join(" ")));
    }

    if report.include_page_numbers {
        out.push_str("Page numbers: included\n");
    }

    if !report.company_logo.is_empty() {
        out.push_str(&format!("Logo: {}\n", report.company_logo));
    }

    if !report.watermark.is_empty() {
        out.push_str(&format!("Watermark: {}\n", report.watermark));
    }

    if report.include_footer {
        out.push_str(&format!("Footer: {}\n", report.footer_text));
    }

    out
}
