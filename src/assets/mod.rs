//! Asset Analyzer: orchestrates manifest reading, generated-accessor
//! recognition, reference scanning and matching across a
//! resolved workspace.

pub mod generated;
pub mod matcher;
pub mod model;
pub mod visitor;

use model::{AssetFinding, AssetStatus, DeclaredAsset, GeneratedAssetMapping, ReferenceCollection};

use crate::error::Result;
use crate::manifest;
use crate::parser::parse_file;
use crate::walker::{walk_sources, walk_sources_excluding, WalkOptions};
use crate::workspace::Workspace;

#[derive(Debug, Clone, Default)]
pub struct AssetScanOptions {
    pub include_tests: bool,
    pub include_generated: bool,
    pub extra_excludes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct AssetReport {
    pub findings: Vec<AssetFinding>,
    pub warnings: Vec<String>,
}

impl AssetReport {
    pub fn used(&self) -> impl Iterator<Item = &AssetFinding> {
        self.findings.iter().filter(|f| f.status == AssetStatus::Used)
    }

    pub fn unused(&self) -> impl Iterator<Item = &AssetFinding> {
        self.findings.iter().filter(|f| f.status == AssetStatus::Unused)
    }

    pub fn potential(&self) -> impl Iterator<Item = &AssetFinding> {
        self.findings.iter().filter(|f| f.status == AssetStatus::Potential)
    }
}

pub fn analyze(workspace: &Workspace, options: &AssetScanOptions) -> Result<AssetReport> {
    let mut declared = Vec::new();
    let mut warnings = Vec::new();

    for package in &workspace.packages {
        let assets = manifest::read_manifest(&package.root)?;
        warnings.extend(assets.warnings.iter().map(|w| format!("[{}] {w}", package.name)));

        for path in manifest::expand_entries(&package.root, &assets.entries) {
            let rel = path.to_string_lossy().replace('\\', "/");
            let abs = package.root.join(&path);
            let size_bytes = std::fs::metadata(&abs).map(|m| m.len()).unwrap_or(0);
            let font_family = assets
                .font_families
                .iter()
                .find(|(_, paths)| paths.iter().any(|p| p == &rel))
                .map(|(family, _)| family.clone());
            declared.push(DeclaredAsset {
                path: rel,
                package: package.name.clone(),
                size_bytes,
                is_font: font_family.is_some(),
                font_family,
            });
        }
    }

    let walk_options = WalkOptions {
        include_tests: options.include_tests,
        include_generated: true,
        extra_excludes: options.extra_excludes.clone(),
    };

    let mut mapping = GeneratedAssetMapping::default();
    let mut refs = ReferenceCollection::default();

    let package_roots: Vec<_> = workspace.packages.iter().map(|p| p.root.as_path()).collect();

    for root in workspace.scan_roots() {
        let files = if root == workspace.root.as_path() && workspace.is_workspace {
            walk_sources_excluding(root, &package_roots, &walk_options)
        } else {
            walk_sources(root, &walk_options)
        };
        for file in files {
            let Ok(source) = std::fs::read_to_string(&file) else {
                continue;
            };
            if generated::is_generated_file(&file) {
                if let Ok(parsed) = parse_file(&file, &source) {
                    generated::collect_generated_mapping(&parsed, &mut mapping);
                }
                if !options.include_generated {
                    continue;
                }
            }
            if let Ok(parsed) = parse_file(&file, &source) {
                refs.extend(visitor::collect_references(&parsed));
            }
        }
    }

    let mut findings: Vec<AssetFinding> = declared
        .into_iter()
        .map(|asset| {
            let absolute_path = workspace
                .packages
                .iter()
                .find(|p| p.name == asset.package)
                .map(|p| p.root.join(&asset.path))
                .unwrap_or_default();
            let status = matcher::classify(&asset, &refs, &mapping);
            AssetFinding {
                asset,
                status,
                absolute_path,
            }
        })
        .collect();

    findings.sort_by(|a, b| a.asset.path.cmp(&b.asset.path));

    Ok(AssetReport { findings, warnings })
}
