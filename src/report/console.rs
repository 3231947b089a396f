//! Console reporter: human-readable output for both subcommands, plus a
//! one-line summary after every run.

use std::time::Duration;

use crate::assets::model::{AssetFinding, AssetStatus};
use crate::assets::AssetReport;
use crate::code::model::{CodeIssue, Severity};
use crate::ui::format::{bold, dim, human_bytes, severity_label};

pub fn render_code(issues: &[CodeIssue], files_scanned: usize, scan_duration: Duration, colors: bool) -> String {
    let mut out = String::new();
    for issue in issues {
        out.push_str(&format!(
            "{}:{}:{}  {}  {}  {}\n",
            issue.file.display(),
            issue.line,
            issue.column,
            severity_label(issue.severity, colors),
            bold(&issue.symbol, colors),
            issue.message,
        ));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("  {}\n", dim(suggestion, colors)));
        }
    }
    out.push('\n');
    out.push_str(&summary_line(files_scanned, issues, scan_duration));
    out
}

pub fn render_assets(report: &AssetReport, show_used: bool, show_potential: bool, colors: bool) -> String {
    let mut out = String::new();
    for finding in &report.findings {
        if finding.status == AssetStatus::Used && !show_used {
            continue;
        }
        if finding.status == AssetStatus::Potential && !show_potential {
            continue;
        }
        out.push_str(&format!(
            "{}  {}  ({})\n",
            status_label(finding, colors),
            bold(&finding.asset.path, colors),
            human_bytes(finding.asset.size_bytes),
        ));
    }
    for warning in &report.warnings {
        out.push_str(&format!("{}  {}\n", dim("warning:", colors), warning));
    }
    out.push('\n');
    out.push_str(&format!(
        "{} declared asset(s): {} used, {} potential, {} unused\n",
        report.findings.len(),
        report.used().count(),
        report.potential().count(),
        report.unused().count(),
    ));
    out
}

fn status_label(finding: &AssetFinding, colors: bool) -> String {
    let text = match finding.status {
        AssetStatus::Used => "used",
        AssetStatus::Potential => "potential",
        AssetStatus::Unused => "unused",
    };
    if !colors {
        return text.to_string();
    }
    use owo_colors::OwoColorize;
    match finding.status {
        AssetStatus::Used => text.green().to_string(),
        AssetStatus::Potential => text.yellow().to_string(),
        AssetStatus::Unused => text.red().bold().to_string(),
    }
}

fn summary_line(files_scanned: usize, issues: &[CodeIssue], scan_duration: Duration) -> String {
    let warnings = issues.iter().filter(|i| i.severity == Severity::Warning).count();
    let info = issues.iter().filter(|i| i.severity == Severity::Info).count();
    format!(
        "{files_scanned} files scanned, {} issues ({warnings} warnings, {info} info) in {} ms",
        issues.len(),
        scan_duration.as_millis(),
    )
}
