mod error;
mod preset;
mod render;
mod report;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::error::{ReportError, Result};
use crate::preset::{config_dir, load_presets, PRESETS_TEMPLATE};
use crate::report::{ReportBuilder, SalesReportBuilder};

#[derive(Parser)]
#[command(name = "salesreport")]
#[command(version, about = "Fluent builder for sales report descriptors", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.salesreport or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a presets template
    Init,

    /// Compose a report descriptor and print it
    Generate(GenerateArgs),

    /// List configured presets
    Presets,
}

#[derive(Args)]
struct GenerateArgs {
    /// Preset identifier from presets.toml, applied before the other flags
    #[arg(short, long)]
    preset: Option<String>,

    /// Report title (required unless the preset supplies one)
    #[arg(short, long)]
    title: Option<String>,

    /// Output format label (e.g., PDF, Excel)
    #[arg(short, long)]
    format: Option<String>,

    /// Period start (YYYY-MM-DD); requires --to
    #[arg(long, value_name = "DATE")]
    from: Option<String>,

    /// Period end (YYYY-MM-DD); requires --from
    #[arg(long, value_name = "DATE")]
    to: Option<String>,

    /// Header text (shown by default)
    #[arg(long)]
    header: Option<String>,

    /// Footer text (shown by default)
    #[arg(long)]
    footer: Option<String>,

    /// Include a chart; TYPE defaults to Bar when omitted
    #[arg(long, value_name = "TYPE", num_args = 0..=1, default_missing_value = "Bar")]
    chart: Option<String>,

    /// Table column (can be repeated; appends)
    #[arg(short, long = "column", value_name = "NAME")]
    column: Vec<String>,

    /// Filter expression like "Status=Active" (can be repeated; appends)
    #[arg(long = "filter", value_name = "EXPR")]
    filter: Vec<String>,

    /// Include a summary section
    #[arg(long)]
    summary: bool,

    /// Include totals
    #[arg(long)]
    totals: bool,

    /// Include page numbers
    #[arg(long)]
    page_numbers: bool,

    /// Column to sort rows by
    #[arg(long, value_name = "NAME")]
    sort_by: Option<String>,

    /// Column to group rows by
    #[arg(long, value_name = "NAME")]
    group_by: Option<String>,

    /// Page orientation (e.g., Portrait, Landscape)
    #[arg(long)]
    orientation: Option<String>,

    /// Page size (e.g., A4, Letter)
    #[arg(long)]
    page_size: Option<String>,

    /// Company logo path
    #[arg(long, value_name = "PATH")]
    logo: Option<String>,

    /// Watermark text
    #[arg(long)]
    watermark: Option<String>,

    /// Print the descriptor as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Generate(args) => cmd_generate(&cfg_dir, &args),
        Commands::Presets => cmd_presets(&cfg_dir),
    }
}

/// Initialize config directory with a presets template
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(ReportError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("presets.toml"), PRESETS_TEMPLATE)?;

    println!("Initialized salesreport config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your presets:  $EDITOR {}/presets.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then compose your first report:");
    println!("  salesreport generate --preset monthly-sales");
    println!("  salesreport generate --title \"Monthly Sales\" --format PDF --column Product");

    Ok(())
}

// Table row struct for tabled
#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "FORMAT")]
    format: String,
    #[tabled(rename = "COLUMNS")]
    columns: String,
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(input.to_string()))
}

/// Compose a report descriptor from preset + flags and print it
fn cmd_generate(cfg_dir: &PathBuf, args: &GenerateArgs) -> Result<()> {
    let mut builder = SalesReportBuilder::new();

    // Preset first, so explicit flags override it
    if let Some(name) = &args.preset {
        if !cfg_dir.exists() {
            return Err(ReportError::ConfigNotFound(cfg_dir.clone()));
        }
        let presets = load_presets(cfg_dir)?;
        let preset = presets
            .get(name)
            .ok_or_else(|| ReportError::PresetNotFound(name.clone()))?;
        preset.apply(&mut builder);
    }

    if let Some(title) = &args.title {
        builder.title(title);
    }
    if let Some(format) = &args.format {
        builder.format(format);
    }
    match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            builder.date_range(parse_date(from)?, parse_date(to)?);
        }
        (None, None) => {}
        _ => return Err(ReportError::IncompleteDateRange),
    }
    if let Some(text) = &args.header {
        builder.header(text);
    }
    if let Some(text) = &args.footer {
        builder.footer(text);
    }
    if let Some(kind) = &args.chart {
        builder.chart_with(true, kind);
    }
    if !args.column.is_empty() {
        builder.columns(args.column.iter().cloned());
    }
    if !args.filter.is_empty() {
        builder.filters(args.filter.iter().cloned());
    }
    if args.summary {
        builder.summary(true);
    }
    if args.totals {
        builder.totals(true);
    }
    if args.page_numbers {
        builder.page_numbers(true);
    }
    if let Some(column) = &args.sort_by {
        builder.sort_by(column);
    }
    if let Some(column) = &args.group_by {
        builder.group_by(column);
    }
    if let Some(orientation) = &args.orientation {
        builder.orientation(orientation);
    }
    if let Some(size) = &args.page_size {
        builder.page_size(size);
    }
    if let Some(path) = &args.logo {
        builder.company_logo(path);
    }
    if let Some(text) = &args.watermark {
        builder.watermark(text);
    }

    let report = builder.build()?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            ))
        })?;
        println!("{json}");
    } else {
        print!("{}", render::describe(&report));
    }

    Ok(())
}

/// List configured presets
fn cmd_presets(cfg_dir: &PathBuf) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(ReportError::ConfigNotFound(cfg_dir.clone()));
    }

    let presets = load_presets(cfg_dir)?;

    if presets.is_empty() {
        println!("No presets configured.");
        println!("Add presets to: {}/presets.toml", cfg_dir.display());
        return Ok(());
    }

    let mut sorted: Vec<_> = presets.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let rows: Vec<PresetRow> = sorted
        .iter()
        .map(|(id, preset)| PresetRow {
            id: id.to_string(),
            title: preset.title.clone().unwrap_or_default(),
            format: preset.format.clone().unwrap_or_default(),
            columns: preset.columns.join(", "),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}
