//! Reporters: format analysis results as console / JSON / CSV / HTML.

pub mod console;
pub mod csv;
pub mod html;
pub mod json;

use std::time::Duration;

use clap::ValueEnum;

use crate::assets::AssetReport;
use crate::code::model::CodeIssue;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
    Html,
}

pub fn render_code_report(
    format: OutputFormat,
    issues: &[CodeIssue],
    files_scanned: usize,
    scan_duration: Duration,
    colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render_code(issues, files_scanned, scan_duration, colors)),
        OutputFormat::Json => json::render(issues, files_scanned, scan_duration),
        OutputFormat::Csv => Ok(csv::render(issues)),
        OutputFormat::Html => Ok(html::render(issues)),
    }
}

pub fn render_asset_report(
    format: OutputFormat,
    report: &AssetReport,
    show_used: bool,
    show_potential: bool,
    colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render_assets(report, show_used, show_potential, colors)),
        OutputFormat::Json => asset_json(report),
        OutputFormat::Csv => Ok(asset_csv(report)),
        OutputFormat::Html => Err(CliError::InvalidArgument(
            "html output is only supported for the unused-code command".to_string(),
        )),
    }
}

fn asset_json(report: &AssetReport) -> Result<String> {
    use serde::Serialize;
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Output<'a> {
        findings: &'a [crate::assets::model::AssetFinding],
        warnings: &'a [String],
    }
    Ok(serde_json::to_string_pretty(&Output {
        findings: &report.findings,
        warnings: &report.warnings,
    })?)
}

fn asset_csv(report: &AssetReport) -> String {
    let mut out = String::from("path,package,status,sizeBytes\n");
    for finding in &report.findings {
        out.push_str(&format!(
            "{},{},{:?},{}\n",
            finding.asset.path,
            finding.asset.package,
            finding.status,
            finding.asset.size_bytes
        ));
    }
    out
}
