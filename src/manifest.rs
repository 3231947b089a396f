//! Extracts declared asset entries and font-family
//! entries from a package's `pubspec.yaml`.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Deserialize;

use crate::error::{AnalysisError, Result};

#[derive(Debug, Deserialize, Default)]
struct Pubspec {
    #[serde(default)]
    flutter: Option<FlutterSection>,
}

#[derive(Debug, Deserialize, Default)]
struct FlutterSection {
    #[serde(default)]
    assets: Vec<String>,
    #[serde(default)]
    fonts: Vec<FontFamilyEntry>,
}

#[derive(Debug, Deserialize)]
struct FontFamilyEntry {
    family: String,
    #[serde(default)]
    fonts: Vec<FontAssetEntry>,
}

#[derive(Debug, Deserialize)]
struct FontAssetEntry {
    asset: String,
}

/// One raw entry as declared in the manifest: a file, a directory (trailing
/// `/`), or a glob (`*`/`**` segments), not yet expanded to existing files.
#[derive(Debug, Clone)]
pub enum DeclaredEntry {
    File(String),
    Directory(String),
    Glob(String),
}

#[derive(Debug, Clone, Default)]
pub struct ManifestAssets {
    pub entries: Vec<DeclaredEntry>,
    /// `(family_name, asset_entries)` — font asset paths double as file
    /// entries, and the family name feeds matching as a reference tag.
    pub font_families: Vec<(String, Vec<String>)>,
    pub warnings: Vec<String>,
}

pub fn read_manifest(package_root: &Path) -> Result<ManifestAssets> {
    let path = package_root.join("pubspec.yaml");
    if !path.is_file() {
        return Err(AnalysisError::ManifestNotFound(path).into());
    }
    let text = std::fs::read_to_string(&path)?;
    let pubspec: Pubspec = serde_yaml::from_str(&text).map_err(|source| AnalysisError::ManifestInvalid {
        path: path.clone(),
        source,
    })?;

    let mut result = ManifestAssets::default();
    let Some(flutter) = pubspec.flutter else {
        return Ok(result);
    };

    for raw in &flutter.assets {
        let entry = classify_entry(raw);
        if let DeclaredEntry::File(rel) = &entry {
            if !package_root.join(rel).is_file() {
                result
                    .warnings
                    .push(format!("declared asset does not exist: {rel}"));
            }
        }
        result.entries.push(entry);
    }

    for font in &flutter.fonts {
        let mut assets = Vec::new();
        for f in &font.fonts {
            if !package_root.join(&f.asset).is_file() {
                result
                    .warnings
                    .push(format!("declared font asset does not exist: {}", f.asset));
            }
            result.entries.push(DeclaredEntry::File(f.asset.clone()));
            assets.push(f.asset.clone());
        }
        result.font_families.push((font.family.clone(), assets));
    }

    Ok(result)
}

fn classify_entry(raw: &str) -> DeclaredEntry {
    if raw.contains('*') {
        DeclaredEntry::Glob(raw.to_string())
    } else if raw.ends_with('/') {
        DeclaredEntry::Directory(raw.to_string())
    } else {
        DeclaredEntry::File(raw.to_string())
    }
}

/// Expand `Directory`/`Glob` entries against the filesystem into concrete
/// existing files, relative to `package_root`, normalized to forward slashes.
pub fn expand_entries(package_root: &Path, entries: &[DeclaredEntry]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in entries {
        match entry {
            DeclaredEntry::File(rel) => {
                let abs = package_root.join(rel).clean();
                if abs.is_file() {
                    out.push(PathBuf::from(rel.replace('\\', "/")));
                }
            }
            DeclaredEntry::Directory(rel) => {
                let abs = package_root.join(rel);
                if let Ok(read) = std::fs::read_dir(&abs) {
                    for entry in read.flatten() {
                        if entry.path().is_file() {
                            if let Ok(relpath) = entry.path().strip_prefix(package_root) {
                                out.push(normalize(relpath));
                            }
                        }
                    }
                }
            }
            DeclaredEntry::Glob(pattern) => {
                out.extend(crate::walker::expand_glob(package_root, pattern));
            }
        }
    }
    out
}

fn normalize(path: &Path) -> PathBuf {
    PathBuf::from(path.clean().to_string_lossy().replace('\\', "/"))
}
