//! Artwork command implementation
//!
//! Checks the icon, fanart, screenshots and other bundled images of an addon
//! directory.

use addoncheck_lint::{ArtworkChecker, ArtworkPolicy, FileIndex, Record, Report, Severity};
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Name of the addon descriptor at the addon root.
pub const ADDON_XML: &str = "addon.xml";

/// JSON output for the artwork command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkOutput {
    /// Whether the check passed.
    pub success: bool,
    /// Path to the checked addon.
    pub addon_path: String,
    /// All records, in the order they were produced.
    pub report: Report,
}

/// Loads `addon.xml`, indexes the addon tree and runs the artwork checks.
pub fn check_addon(addon_path: &Path, policy: ArtworkPolicy) -> Result<Report> {
    if !addon_path.is_dir() {
        anyhow::bail!("Addon path is not a directory: {}", addon_path.display());
    }

    let xml_path = addon_path.join(ADDON_XML);
    let xml = fs::read_to_string(&xml_path)
        .with_context(|| format!("Failed to read {}", xml_path.display()))?;
    let descriptor = roxmltree::Document::parse(&xml)
        .with_context(|| format!("Failed to parse {}", xml_path.display()))?;

    let index = FileIndex::scan(addon_path)
        .with_context(|| format!("Failed to index {}", addon_path.display()))?;

    let mut report = Report::new();
    ArtworkChecker::new(policy).check(&mut report, addon_path, &descriptor, &index);
    Ok(report)
}

/// Returns true if the report passes, counting warnings as failures in
/// strict mode.
pub fn is_success(report: &Report, strict: bool) -> bool {
    !report.has_problems() && !(strict && report.has_warnings())
}

/// Run the artwork command.
///
/// # Arguments
/// * `addon_dir` - Path to the addon root directory
/// * `policy_path` - Optional JSON policy overriding accepted sizes
/// * `json` - Whether to output machine-readable JSON
/// * `strict` - Whether warnings also fail the check
///
/// # Returns
/// Exit code: 0 if passed, 1 if problems (or warnings in strict mode)
pub fn run(addon_dir: &str, policy_path: Option<&str>, json: bool, strict: bool) -> Result<ExitCode> {
    let policy = match policy_path {
        Some(path) => ArtworkPolicy::from_file(Path::new(path))?,
        None => ArtworkPolicy::default(),
    };
    log::debug!("artwork policy: {:?}", policy);

    let report = check_addon(Path::new(addon_dir), policy)?;
    let success = is_success(&report, strict);

    if json {
        let output = ArtworkOutput {
            success,
            addon_path: addon_dir.to_string(),
            report,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize report")?
        );
    } else {
        print_text_output(addon_dir, &report, strict);
    }

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print records in human-readable text format.
fn print_text_output(addon_dir: &str, report: &Report, strict: bool) {
    println!("{} {}", "Checking artwork:".cyan().bold(), addon_dir);

    if report.is_empty() {
        println!("\n{} No records", "PASSED".green().bold());
        return;
    }

    print_section(report, Severity::Problem, "Problems:".red().bold(), "x".red());
    print_section(report, Severity::Warning, "Warnings:".yellow().bold(), "!".yellow());
    print_section(report, Severity::Information, "Info:".blue().bold(), "i".blue());

    let summary = report.summary();
    let line = format!(
        "{} problem(s), {} warning(s), {} info",
        summary.problem_count, summary.warning_count, summary.information_count
    );

    if is_success(report, strict) {
        println!("\n{} {}", "PASSED".green().bold(), line.dimmed());
    } else {
        println!("\n{} {}", "FAILED".red().bold(), line.dimmed());
    }
}

fn print_section(report: &Report, severity: Severity, title: ColoredString, marker: ColoredString) {
    let mut records = report.with_severity(severity).peekable();
    if records.peek().is_none() {
        return;
    }
    println!("\n{}", title);
    for record in records {
        print_record(record, &marker);
    }
}

fn print_record(record: &Record, marker: &ColoredString) {
    println!("  {} {}", marker, record.message);
}
