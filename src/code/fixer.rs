//! Deletes auto-fixable issues' source ranges, sorted
//! descending by start offset within each file, written atomically.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};

use super::model::CodeIssue;

#[derive(Debug, Clone)]
pub struct FixPlan {
    pub file: PathBuf,
    pub deletions: Vec<(usize, usize)>,
}

pub fn plan_fixes(issues: &[CodeIssue]) -> Vec<FixPlan> {
    let mut by_file: HashMap<PathBuf, Vec<(usize, usize)>> = HashMap::new();
    for issue in issues {
        if !issue.auto_fixable {
            continue;
        }
        if let Some(range) = issue.delete_range {
            by_file.entry(issue.file.clone()).or_default().push(range);
        }
    }
    let mut plans: Vec<FixPlan> = by_file
        .into_iter()
        .map(|(file, mut deletions)| {
            deletions.sort_by(|a, b| b.0.cmp(&a.0));
            FixPlan { file, deletions }
        })
        .collect();
    plans.sort_by(|a, b| a.file.cmp(&b.file));
    plans
}

/// Applies a plan's deletions to one file's buffer and returns the result.
/// Caller is responsible for writing it (or not, in dry-run mode).
pub fn apply_to_buffer(source: &str, plan: &FixPlan) -> String {
    let mut buffer = source.to_string();
    for &(start, end) in &plan.deletions {
        if start <= buffer.len() && end <= buffer.len() && start <= end {
            buffer.replace_range(start..end, "");
        }
    }
    buffer
}

/// Applies every plan to disk, atomically (temp file + rename) per file.
/// In dry-run mode no file is touched; the would-be buffers are returned.
pub fn apply_fixes(plans: &[FixPlan], dry_run: bool) -> Result<Vec<(PathBuf, String)>> {
    let mut results = Vec::new();
    for plan in plans {
        let source = std::fs::read_to_string(&plan.file)
            .map_err(|source| AnalysisError::FixWriteFailed { path: plan.file.clone(), source })?;
        let fixed = apply_to_buffer(&source, plan);
        if !dry_run {
            write_atomic(&plan.file, &fixed)?;
        }
        results.push((plan.file.clone(), fixed));
    }
    Ok(results)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("tmp_fix");
    std::fs::write(&tmp_path, contents)
        .map_err(|source| AnalysisError::FixWriteFailed { path: path.to_path_buf(), source })?;
    std::fs::rename(&tmp_path, path)
        .map_err(|source| AnalysisError::FixWriteFailed { path: path.to_path_buf(), source })?;
    Ok(())
}
