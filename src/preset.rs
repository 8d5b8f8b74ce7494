use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{ReportError, Result};
use crate::report::{ReportBuilder, SalesReportBuilder};

/// A reusable report configuration from presets.toml.
///
/// Every field is optional; a preset is applied through the public builder
/// API, so anything it leaves unset keeps its default and later setter calls
/// (e.g., CLI flags) override it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Preset {
    pub title: Option<String>,
    pub format: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub header: Option<String>,
    pub show_header: Option<bool>,
    pub footer: Option<String>,
    pub show_footer: Option<bool>,
    /// Chart kind; presence enables charts.
    pub chart: Option<String>,
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub summary: Option<bool>,
    pub sort_by: Option<String>,
    pub group_by: Option<String>,
    pub totals: Option<bool>,
    pub orientation: Option<String>,
    pub page_size: Option<String>,
    pub page_numbers: Option<bool>,
    pub logo: Option<String>,
    pub watermark: Option<String>,
}

impl Preset {
    /// Feed this preset into a builder. Columns and filters append, matching
    /// the builder contract, so apply a preset before any flag-driven calls.
    pub fn apply(&self, builder: &mut SalesReportBuilder) {
        if let Some(title) = &self.title {
            builder.title(title);
        }
        if let Some(format) = &self.format {
            builder.format(format);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            builder.date_range(start, end);
        }
        if let Some(text) = &self.header {
            builder.header_with(text, self.show_header.unwrap_or(true));
        }
        if let Some(text) = &self.footer {
            builder.footer_with(text, self.show_footer.unwrap_or(true));
        }
        if let Some(kind) = &self.chart {
            builder.chart_with(true, kind);
        }
        if !self.columns.is_empty() {
            builder.columns(self.columns.iter().cloned());
        }
        if !self.filters.is_empty() {
            builder.filters(self.filters.iter().cloned());
        }
        if let Some(show) = self.summary {
            builder.summary(show);
        }
        if let Some(column) = &self.sort_by {
            builder.sort_by(column);
        }
        if let Some(column) = &self.group_by {
            builder.group_by(column);
        }
        if let Some(show) = self.totals {
            builder.totals(show);
        }
        if let Some(orientation) = &self.orientation {
            builder.orientation(orientation);
        }
        if let Some(size) = &self.page_size {
            builder.page_size(size);
        }
        if let Some(show) = self.page_numbers {
            builder.page_numbers(show);
        }
        if let Some(logo) = &self.logo {
            builder.company_logo(logo);
        }
        if let Some(text) = &self.watermark {
            builder.watermark(text);
        }
    }
}

/// Get the config directory path (~/.salesreport/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "salesreport") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.salesreport/
    let home = dirs_home().ok_or_else(|| {
        ReportError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".salesreport"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load presets.toml as a HashMap
pub fn load_presets(config_dir: &PathBuf) -> Result<HashMap<String, Preset>> {
    let path = config_dir.join("presets.toml");
    if !path.exists() {
        return Err(ReportError::PresetFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ReportError::PresetParse { path, source: e })
}

/// Template content for presets.toml
pub const PRESETS_TEMPLATE: &str = r#"# Define reusable report presets here. The table name (e.g., [monthly-sales])
# is used as the preset identifier in the generate command.
#
# Example:
#   salesreport generate --preset monthly-sales
#
# Flags given alongside --preset override the preset; --column and --filter
# append to the preset's lists.

[monthly-sales]
title = "Monthly Sales"
format = "PDF"
start_date = "2024-01-01"
end_date = "2024-01-31"
header = "Sales Report"
footer = "Confidential"
chart = "Bar"
columns = ["Product", "Quantity", "Amount"]
filters = ["Status=Active"]
summary = true
sort_by = "Amount"
group_by = "Category"
totals = true
orientation = "Portrait"
page_size = "A4"
page_numbers = true

[quarterly]
title = "Quarterly Report"
format = "Excel"
header = "Quarterly Report"
chart = "Line"
columns = ["Rep", "Region", "Total"]
group_by = "Region"
totals = true
"#;
