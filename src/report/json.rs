//! JSON reporter (code): `{version, issues, statistics}`.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::code::model::CodeIssue;
use crate::error::Result;

const REPORT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    files_scanned: usize,
    total_issues: usize,
    by_category: BTreeMap<String, usize>,
    scan_duration_ms: u128,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    version: u32,
    issues: &'a [CodeIssue],
    statistics: Statistics,
}

pub fn render(issues: &[CodeIssue], files_scanned: usize, scan_duration: Duration) -> Result<String> {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for issue in issues {
        *by_category.entry(issue.category.clone()).or_default() += 1;
    }
    let report = Report {
        version: REPORT_VERSION,
        issues,
        statistics: Statistics {
            files_scanned,
            total_issues: issues.len(),
            by_category,
            scan_duration_ms: scan_duration.as_millis(),
        },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
