//! Data model for the asset analyzer.

use std::collections::HashMap;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DeclaredAsset {
    /// Relative to its package root, forward-slash normalized.
    pub path: String,
    pub package: String,
    pub size_bytes: u64,
    pub is_font: bool,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub enum AssetReference {
    Literal {
        text: String,
        location: Location,
    },
    PropertyChain {
        segments: Vec<String>,
        location: Location,
    },
    FontFamily {
        name: String,
        location: Location,
    },
    DynamicHint {
        directory: String,
        location: Location,
    },
}

/// All references collected from in-scope source across the scan (spec's
/// "cross-package scan" unions references regardless of which package a
/// declared asset lives in).
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollection {
    pub literals: FxHashSet<String>,
    pub property_chains: Vec<Vec<String>>,
    pub font_families: FxHashSet<String>,
    pub dynamic_hint_dirs: FxHashSet<String>,
}

impl ReferenceCollection {
    pub fn extend(&mut self, refs: Vec<AssetReference>) {
        for r in refs {
            match r {
                AssetReference::Literal { text, .. } => {
                    self.literals.insert(text);
                }
                AssetReference::PropertyChain { segments, .. } => {
                    self.property_chains.push(segments);
                }
                AssetReference::FontFamily { name, .. } => {
                    self.font_families.insert(name);
                }
                AssetReference::DynamicHint { directory, .. } => {
                    self.dynamic_hint_dirs.insert(directory);
                }
            }
        }
    }
}

/// Generated-accessor property-chain → asset-path map (C5's output),
/// keyed by the dotted chain rooted at the outermost accessor class.
#[derive(Debug, Clone, Default)]
pub struct GeneratedAssetMapping {
    pub chain_to_path: HashMap<String, String>,
    pub all_paths: FxHashSet<String>,
    /// generated-class name -> default asset paths found in const-constructor
    /// parameter defaults attributed to that class.
    pub class_defaults: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Used,
    Potential,
    Unused,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetFinding {
    pub asset: DeclaredAsset,
    pub status: AssetStatus,
    #[serde(skip)]
    pub absolute_path: PathBuf,
}
