//! `unused-code` subcommand: resolves the workspace, loads configuration,
//! runs the two-pass analyzer, applies auto-fixes if requested, and renders
//! a report.

use std::io::Write;

use tracing::warn;

use crate::cli::UnusedCodeArgs;
use crate::code::model::Severity;
use crate::code::{self, fixer, CodeScanOptions};
use crate::config;
use crate::error::Result;
use crate::report;
use crate::ui::should_use_colors;
use crate::workspace;

pub fn run(args: &UnusedCodeArgs) -> Result<i32> {
    let ws = workspace::resolve(&args.common.path, args.common.scan_workspace_effective())?;

    let mut config = config::load(args.config.as_deref())?;
    config.include_tests = args.common.include_tests;
    config.exclude.extend(args.common.exclude.iter().cloned());
    if args.exclude_public_api {
        config.public_api.consider_exports_as_used = true;
    }
    if !args.exclude_overrides_effective() {
        for rule in [
            &mut config.rules.unused_classes,
            &mut config.rules.unused_functions,
            &mut config.rules.unused_parameters,
            &mut config.rules.unused_imports,
            &mut config.rules.unused_members,
        ] {
            rule.exclude_overrides = false;
        }
    }
    config.monorepo.cross_package_analysis = args.cross_package_effective();

    let options = CodeScanOptions {
        include_tests: args.common.include_tests,
        extra_excludes: args.common.exclude.clone(),
    };
    let report_data = code::analyze(&ws, &options, &config);

    for warning in &report_data.parse_warnings {
        warn!("{warning}");
    }

    if args.fix || args.fix_dry_run {
        let plans = fixer::plan_fixes(&report_data.issues);
        let dry_run = args.fix_dry_run;
        fixer::apply_fixes(&plans, dry_run)?;
        tracing::info!(
            "{} file(s) {} by auto-fix",
            plans.len(),
            if dry_run { "would be modified" } else { "modified" }
        );
    }

    let threshold = args.severity.to_severity();
    let mut issues = report_data.issues;
    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    let reportable: Vec<_> = issues.iter().filter(|i| i.severity >= threshold).cloned().collect();

    let colors = should_use_colors(args.common.no_color);
    let rendered = report::render_code_report(
        args.common.format,
        &reportable,
        report_data.files_scanned,
        report_data.scan_duration,
        colors,
    )?;
    emit(&rendered, args.common.output.as_deref())?;

    if reportable.iter().any(|i| i.severity == Severity::Error) {
        Ok(2)
    } else if !reportable.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn emit(rendered: &str, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
        }
        None => {
            print!("{rendered}");
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}
