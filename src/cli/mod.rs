//! CLI surface: flag parsing only. Dispatch lives in `commands/`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "unused-finder", version, about = "Finds unused assets and unused code in target-language packages and workspaces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for unused declared assets (images, fonts, ...).
    Assets(AssetsArgs),
    /// Scan for unused declared code symbols.
    UnusedCode(UnusedCodeArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[arg(short = 'f', long, value_enum, default_value = "console")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(short = 't', long)]
    pub include_tests: bool,

    #[arg(short = 'e', long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,

    #[arg(short = 'w', long, default_value_t = true)]
    pub scan_workspace: bool,

    /// Disable workspace scanning (process only the given path as a single package).
    #[arg(long = "no-scan-workspace")]
    pub no_scan_workspace: bool,
}

impl CommonArgs {
    pub fn scan_workspace_effective(&self) -> bool {
        self.scan_workspace && !self.no_scan_workspace
    }
}

#[derive(Debug, Args)]
pub struct AssetsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short = 'g', long)]
    pub include_generated: bool,

    #[arg(short, long)]
    pub delete: bool,

    #[arg(long)]
    pub show_used: bool,

    #[arg(long, default_value_t = true)]
    pub show_potential: bool,

    /// Disable listing of potentially-used assets in the report.
    #[arg(long = "no-show-potential")]
    pub no_show_potential: bool,
}

impl AssetsArgs {
    pub fn show_potential_effective(&self) -> bool {
        self.show_potential && !self.no_show_potential
    }
}

#[derive(Debug, Args)]
pub struct UnusedCodeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub exclude_public_api: bool,

    #[arg(long, default_value_t = true)]
    pub exclude_overrides: bool,

    /// Disable the override-method exclusion rule (report overrides as candidates too).
    #[arg(long = "no-exclude-overrides")]
    pub no_exclude_overrides: bool,

    #[arg(long, default_value_t = true)]
    pub cross_package: bool,

    /// Disable cross-package usage analysis inside a workspace.
    #[arg(long = "no-cross-package")]
    pub no_cross_package: bool,

    #[arg(long, value_enum, default_value = "warning")]
    pub severity: SeverityArg,

    #[arg(long)]
    pub fix_dry_run: bool,

    #[arg(long)]
    pub fix: bool,
}

impl UnusedCodeArgs {
    pub fn exclude_overrides_effective(&self) -> bool {
        self.exclude_overrides && !self.no_exclude_overrides
    }

    pub fn cross_package_effective(&self) -> bool {
        self.cross_package && !self.no_cross_package
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SeverityArg {
    Info,
    Warning,
    Error,
}

impl SeverityArg {
    pub fn to_severity(self) -> crate::code::model::Severity {
        match self {
            SeverityArg::Info => crate::code::model::Severity::Info,
            SeverityArg::Warning => crate::code::model::Severity::Warning,
            SeverityArg::Error => crate::code::model::Severity::Error,
        }
    }
}
