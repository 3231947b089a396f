//! Error hierarchy for the CLI.
//!
//! Mirrors the split used throughout the pack: a top-level [`CliError`] that
//! aggregates domain-specific errors via `#[from]`, plus a [`ResultExt`] trait
//! for attaching path/hint context at the call site.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}\n\nHint: pass --config <path> or remove the flag to use defaults", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: figment::Error,
    },

    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Project path does not exist: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("No package manifest found under {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    ManifestInvalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Auto-fix aborted while writing {}: {source}", .path.display())]
    FixWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

pub trait ResultExt<T> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::PathNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{err}\n\nHint: {hint}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_mentions_flag() {
        let err = ConfigError::NotFound(PathBuf::from("unused_code.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("unused_code.yaml"));
        assert!(msg.contains("--config"));
    }

    #[test]
    fn with_path_rewrites_not_found_io_errors() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.with_path("/tmp/proj").unwrap_err();
        assert!(matches!(err, CliError::PathNotFound(_)));
    }

    #[test]
    fn with_hint_appends_hint_text() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("x.yaml")));
        let err = result.with_hint("create one").unwrap_err();
        assert!(err.to_string().contains("Hint: create one"));
    }
}
