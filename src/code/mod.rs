//! Code Analyzer: orchestrates the two-pass scan (declaration pass, then
//! reference+import pass) across a resolved workspace and hands the result to
//! [`analyzer::analyze`].

pub mod analyzer;
pub mod declarations;
pub mod fixer;
pub mod imports;
pub mod model;
pub mod references;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use analyzer::AnalysisInput;
use model::CodeIssue;

use crate::config::types::UnusedCodeConfig;
use crate::parser::parse_file;
use crate::walker::{walk_sources, walk_sources_excluding, WalkOptions};
use crate::workspace::Workspace;

#[derive(Debug, Clone, Default)]
pub struct CodeScanOptions {
    pub include_tests: bool,
    pub extra_excludes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CodeReport {
    pub issues: Vec<CodeIssue>,
    pub files_scanned: usize,
    pub parse_warnings: Vec<String>,
    pub scan_duration: Duration,
}

pub fn analyze(
    workspace: &Workspace,
    options: &CodeScanOptions,
    config: &UnusedCodeConfig,
) -> CodeReport {
    let started = Instant::now();
    let walk_options = WalkOptions {
        include_tests: options.include_tests,
        include_generated: true,
        extra_excludes: options.extra_excludes.clone(),
    };

    let mut files_by_package = Vec::new();
    for package in &workspace.packages {
        for file in walk_sources(&package.root, &walk_options) {
            files_by_package.push((package.name.clone(), file));
        }
    }

    if workspace.is_workspace {
        let package_roots: Vec<_> = workspace.packages.iter().map(|p| p.root.as_path()).collect();
        let root_name = workspace
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workspace".to_string());
        for file in walk_sources_excluding(&workspace.root, &package_roots, &walk_options) {
            files_by_package.push((root_name.clone(), file));
        }
    }

    let mut parsed_files = Vec::new();
    let mut parse_warnings = Vec::new();
    for (package_name, file) in &files_by_package {
        let Ok(source) = std::fs::read_to_string(file) else {
            parse_warnings.push(format!("failed to read {}", file.display()));
            continue;
        };
        match parse_file(file, &source) {
            Ok(parsed) => parsed_files.push((package_name.clone(), parsed)),
            Err(err) => parse_warnings.push(format!("failed to parse {}: {err}", file.display())),
        }
    }

    let mut elements = Vec::new();
    for (package_name, parsed) in &parsed_files {
        elements.extend(declarations::collect_declarations(parsed, package_name));
    }

    let mut used_names: HashSet<String> = HashSet::new();
    let mut imports = Vec::new();
    for (_, parsed) in &parsed_files {
        let refs = references::collect_references(parsed);
        imports.extend(imports::collect_imports(&parsed.directives, &refs, &parsed.path));
        used_names.extend(refs.identifiers);
        used_names.extend(refs.types);
    }

    let input = AnalysisInput {
        elements,
        used_names,
        imports,
    };
    let issues = analyzer::analyze(input, config);

    CodeReport {
        issues,
        files_scanned: parsed_files.len(),
        parse_warnings,
        scan_duration: started.elapsed(),
    }
}
