//! Typed configuration for the `unused-code` subcommand.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::code::model::ElementKind;

fn default_exclude_annotations() -> Vec<String> {
    vec![
        "visibleForTesting".to_string(),
        "pragma".to_string(),
        "JsonSerializable".to_string(),
        "immutable".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RuleConfig {
    pub enabled: bool,
    pub exclude_patterns: Vec<String>,
    pub exclude_annotations: Vec<String>,
    pub exclude_overrides: bool,
    pub exclude_public: bool,
    pub exclude_private: bool,
    pub exclude_static: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude_patterns: Vec::new(),
            exclude_annotations: default_exclude_annotations(),
            exclude_overrides: true,
            exclude_public: false,
            exclude_private: false,
            exclude_static: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RulesConfig {
    pub unused_classes: RuleConfig,
    pub unused_functions: RuleConfig,
    pub unused_parameters: RuleConfig,
    pub unused_imports: RuleConfig,
    pub unused_members: RuleConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            unused_classes: RuleConfig::default(),
            unused_functions: RuleConfig::default(),
            unused_parameters: RuleConfig::default(),
            unused_imports: RuleConfig {
                exclude_overrides: false,
                ..RuleConfig::default()
            },
            unused_members: RuleConfig::default(),
        }
    }
}

impl RulesConfig {
    /// The rule bucket that governs a given declaration kind.
    pub fn rule_for(&self, kind: ElementKind) -> &RuleConfig {
        match kind {
            ElementKind::Class
            | ElementKind::Mixin
            | ElementKind::Extension
            | ElementKind::Enum
            | ElementKind::EnumValue
            | ElementKind::Typedef => &self.unused_classes,
            ElementKind::TopLevelFunction => &self.unused_functions,
            ElementKind::Parameter => &self.unused_parameters,
            ElementKind::Method
            | ElementKind::Getter
            | ElementKind::Setter
            | ElementKind::Field
            | ElementKind::Constructor => &self.unused_members,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PublicApiConfig {
    /// When true, exported/public symbols are treated as used and excluded
    /// from unused-symbol reporting (the `--exclude-public-api` flag sets
    /// this).
    pub consider_exports_as_used: bool,
    pub entry_points: Vec<String>,
}

impl Default for PublicApiConfig {
    fn default() -> Self {
        Self {
            consider_exports_as_used: false,
            entry_points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MonorepoConfig {
    pub enabled: bool,
    pub cross_package_analysis: bool,
    pub exclude_packages: Vec<String>,
}

impl Default for MonorepoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cross_package_analysis: true,
            exclude_packages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UnusedCodeConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub rules: RulesConfig,
    pub public_api: PublicApiConfig,
    pub monorepo: MonorepoConfig,
    /// Not part of the on-disk schema; threaded in from `--include-tests`.
    #[serde(skip)]
    pub include_tests: bool,
}

impl Default for UnusedCodeConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            rules: RulesConfig::default(),
            public_api: PublicApiConfig::default(),
            monorepo: MonorepoConfig::default(),
            include_tests: false,
        }
    }
}

/// The config file's top-level shape: everything lives under `unused_code`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub unused_code: UnusedCodeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_common_annotations() {
        let config = UnusedCodeConfig::default();
        assert!(config
            .rules
            .unused_members
            .exclude_annotations
            .contains(&"visibleForTesting".to_string()));
    }

    #[test]
    fn rule_for_maps_kind_to_bucket() {
        let config = UnusedCodeConfig::default();
        assert!(std::ptr::eq(
            config.rules.rule_for(ElementKind::Method),
            &config.rules.unused_members
        ));
        assert!(std::ptr::eq(
            config.rules.rule_for(ElementKind::Class),
            &config.rules.unused_classes
        ));
    }
}
