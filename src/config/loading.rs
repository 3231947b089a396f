//! Loads the `unused-code` config file with `figment`, layering built-in
//! defaults, an optional on-disk file (JSON or YAML, by extension), then
//! environment overrides — lowest to highest priority.

use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized, Yaml};
use figment::Figment;

use super::defaults::defaults;
use super::types::{ConfigFile, UnusedCodeConfig};
use crate::error::{ConfigError, Result};

pub fn load(config_path: Option<&Path>) -> Result<UnusedCodeConfig> {
    let mut figment = Figment::from(Serialized::defaults(defaults()));

    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        figment = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Yaml::file(path)),
        };
    }

    figment = figment.merge(Env::prefixed("UNUSED_FINDER_").split("__"));

    let parsed: ConfigFile = figment.extract().map_err(|source| {
        ConfigError::Invalid {
            path: config_path.unwrap_or_else(|| Path::new("<defaults>")).to_path_buf(),
            source,
        }
    })?;
    Ok(parsed.unused_code)
}
