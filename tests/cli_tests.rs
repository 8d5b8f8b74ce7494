use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn report_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("salesreport"))
}

// Stateless commands still resolve a default config dir, so always pass -C
fn report_cmd_at(config_path: &std::path::Path) -> Command {
    let mut cmd = report_cmd();
    cmd.args(["-C", config_path.to_str().unwrap()]);
    cmd
}

#[test]
fn test_help() {
    report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fluent builder for sales report descriptors",
        ));
}

#[test]
fn test_version() {
    report_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salesreport"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized salesreport config"));

    assert!(config_path.join("presets.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    // First init should succeed
    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    // Second init should fail
    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_generate_requires_title() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args(["generate", "--format", "PDF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title is required"));
}

#[test]
fn test_generate_renders_text() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args([
            "generate",
            "--title",
            "Monthly Sales",
            "--format",
            "PDF",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--column",
            "Product",
            "--column",
            "Amount",
            "--filter",
            "Status=Active",
            "--group-by",
            "Category",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sales Report: Monthly Sales ==="))
        .stdout(predicate::str::contains("Format: PDF"))
        .stdout(predicate::str::contains("Period: 2024-01-01 to 2024-01-31"))
        .stdout(predicate::str::contains("Columns: Product, Amount"))
        .stdout(predicate::str::contains("Filters: Status=Active"))
        .stdout(predicate::str::contains("Grouped by: Category"));
}

#[test]
fn test_generate_bare_chart_defaults_to_bar() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args(["generate", "--title", "T", "--chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart: Bar"));
}

#[test]
fn test_generate_chart_with_type() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args(["generate", "--title", "T", "--chart", "Line"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart: Line"));
}

#[test]
fn test_generate_json_output() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args(["generate", "--title", "Monthly Sales", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Monthly Sales\""));
}

#[test]
fn test_generate_incomplete_date_range() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args(["generate", "--title", "T", "--from", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--from and --to must be provided together",
        ));
}

#[test]
fn test_generate_invalid_date() {
    let temp_dir = TempDir::new().unwrap();
    report_cmd_at(temp_dir.path())
        .args([
            "generate",
            "--title",
            "T",
            "--from",
            "notadate",
            "--to",
            "2024-01-31",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_generate_from_preset() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "generate",
            "--preset",
            "monthly-sales",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sales Report: Monthly Sales ==="))
        .stdout(predicate::str::contains("Filters: Status=Active"))
        .stdout(predicate::str::contains("Chart: Bar"));
}

#[test]
fn test_generate_preset_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "generate",
            "--preset",
            "monthly-sales",
            "--title",
            "January Recap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sales Report: January Recap ==="));
}

#[test]
fn test_generate_unknown_preset() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "generate",
            "--preset",
            "nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_presets_list() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monthly-sales"))
        .stdout(predicate::str::contains("Monthly Sales"))
        .stdout(predicate::str::contains("quarterly"));
}

#[test]
fn test_presets_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
