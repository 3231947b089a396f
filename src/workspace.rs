//! Finds the workspace manifest (if any) and
//! enumerates member package roots.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AnalysisError, Result};

/// Both the workspace root and every member package share this manifest
/// filename; the root is distinguished by carrying a `workspace:` key.
const MANIFEST_FILE: &str = "pubspec.yaml";

#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub packages: Vec<Package>,
    pub is_workspace: bool,
}

impl Workspace {
    /// Every member package's source root, plus the workspace root itself
    /// when it isn't already one of the member package roots (so source
    /// files living directly under a workspace root, outside any member
    /// package directory, still get scanned for references).
    pub fn scan_roots(&self) -> Vec<&Path> {
        let mut roots: Vec<&Path> = self.packages.iter().map(|p| p.root.as_path()).collect();
        if self.is_workspace && !roots.iter().any(|r| *r == self.root.as_path()) {
            roots.push(self.root.as_path());
        }
        roots
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceManifest {
    #[serde(default)]
    workspace: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PackageManifestName {
    name: Option<String>,
}

/// Resolve the workspace rooted at or above `project_path`. When
/// `scan_workspace` is `false`, only `project_path` itself is returned as a
/// single-member workspace, even if a workspace manifest is found above it.
pub fn resolve(project_path: &Path, scan_workspace: bool) -> Result<Workspace> {
    if !project_path.exists() {
        return Err(AnalysisError::ProjectNotFound(project_path.to_path_buf()).into());
    }
    let project_path = dunce_canonicalize(project_path);

    if scan_workspace {
        if let Some((ws_root, manifest)) = find_workspace_manifest(&project_path) {
            let mut packages = Vec::new();
            for pattern in &manifest.workspace {
                for member_root in expand_member_pattern(&ws_root, pattern) {
                    if let Some(pkg) = load_package(&member_root) {
                        packages.push(pkg);
                    }
                }
            }
            if !packages.is_empty() {
                return Ok(Workspace {
                    root: ws_root,
                    packages,
                    is_workspace: true,
                });
            }
        }
    }

    let package = load_package(&project_path)
        .ok_or_else(|| AnalysisError::ManifestNotFound(project_path.clone()))?;
    Ok(Workspace {
        root: project_path,
        packages: vec![package],
        is_workspace: false,
    })
}

fn find_workspace_manifest(start: &Path) -> Option<(PathBuf, WorkspaceManifest)> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(MANIFEST_FILE);
        if candidate.is_file() {
            if let Ok(text) = std::fs::read_to_string(&candidate) {
                if let Ok(manifest) = serde_yaml::from_str::<WorkspaceManifest>(&text) {
                    if !manifest.workspace.is_empty() {
                        return Some((d.to_path_buf(), manifest));
                    }
                }
            }
        }
        dir = d.parent();
    }
    None
}

fn expand_member_pattern(ws_root: &Path, pattern: &str) -> Vec<PathBuf> {
    if let Some(prefix) = pattern.strip_suffix("/*") {
        let base = ws_root.join(prefix);
        let mut out = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&base) {
            for entry in entries.flatten() {
                if entry.path().is_dir() {
                    out.push(entry.path());
                }
            }
        }
        out
    } else {
        vec![ws_root.join(pattern)]
    }
}

fn load_package(root: &Path) -> Option<Package> {
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return None;
    }
    let text = std::fs::read_to_string(&manifest_path).ok()?;
    let parsed: PackageManifestName = serde_yaml::from_str(&text).unwrap_or(PackageManifestName {
        name: None,
    });
    let name = parsed
        .name
        .unwrap_or_else(|| root.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default());
    Some(Package {
        name,
        root: root.to_path_buf(),
    })
}

fn dunce_canonicalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
