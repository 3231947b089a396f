//! `assets` subcommand: resolves the workspace, runs the asset analyzer,
//! renders a report, and optionally deletes unused files behind a
//! confirmation gate.

use std::io::Write;

use tracing::warn;

use crate::assets::{self, AssetScanOptions};
use crate::cli::AssetsArgs;
use crate::error::Result;
use crate::gate::{delete_unused_assets, NoConfirm, TerminalConfirm};
use crate::report;
use crate::ui::should_use_colors;
use crate::workspace;

/// Process exit code: 0 clean, 1 if any unused asset was found.
pub fn run(args: &AssetsArgs) -> Result<i32> {
    let ws = workspace::resolve(&args.common.path, args.common.scan_workspace_effective())?;

    let options = AssetScanOptions {
        include_tests: args.common.include_tests,
        include_generated: args.include_generated,
        extra_excludes: args.common.exclude.clone(),
    };
    let report = assets::analyze(&ws, &options)?;

    for warning in &report.warnings {
        warn!("{warning}");
    }

    let colors = should_use_colors(args.common.no_color);
    let rendered = report::render_asset_report(
        args.common.format,
        &report,
        args.show_used,
        args.show_potential_effective(),
        colors,
    )?;
    emit(&rendered, args.common.output.as_deref())?;

    if args.delete {
        use std::io::IsTerminal;
        let unused_paths: Vec<_> = report.unused().map(|f| f.absolute_path.as_path()).collect();
        let prompt: Box<dyn crate::gate::ConfirmPrompt> = if std::io::stdin().is_terminal() {
            Box::new(TerminalConfirm)
        } else {
            Box::new(NoConfirm { auto_approve: false })
        };
        let deleted = delete_unused_assets(&unused_paths, prompt.as_ref())?;
        tracing::info!("deleted {deleted} unused asset file(s)");
    }

    if report.unused().next().is_some() {
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
