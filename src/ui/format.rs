//! Small presentation helpers for the console reporter: colored severity
//! labels, byte-size formatting, and a relative-path renderer.

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;

use crate::code::model::Severity;

pub fn severity_label(severity: Severity, colors: bool) -> String {
    let text = match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    if !colors {
        return text.to_string();
    }
    match severity {
        Severity::Error => text.red().bold().to_string(),
        Severity::Warning => text.yellow().bold().to_string(),
        Severity::Info => text.cyan().to_string(),
    }
}

pub fn dim(text: &str, colors: bool) -> String {
    if colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, colors: bool) -> String {
    if colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}

/// Human-readable byte size (`512 B`, `3.4 KB`, `1.2 MB`), matching the
/// precision the console reporter uses for declared-asset summaries.
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
