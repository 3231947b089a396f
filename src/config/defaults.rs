//! Built-in default values, split out so `loading.rs` can layer them under
//! the on-disk config file and environment overrides.

use super::types::{ConfigFile, UnusedCodeConfig};

pub fn defaults() -> ConfigFile {
    ConfigFile {
        unused_code: UnusedCodeConfig::default(),
    }
}
