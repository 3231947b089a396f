//! Enumerates `.dart` source files under a package root,
//! honoring include/exclude globs and the default test/generated filters.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use path_clean::PathClean;

const SOURCE_EXTENSION: &str = "dart";
const GENERATED_SUFFIXES: &[&str] = &[".g.dart", ".freezed.dart", ".gen.dart", ".mocks.dart"];

#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    pub include_tests: bool,
    pub include_generated: bool,
    pub extra_excludes: Vec<String>,
}

pub fn walk_sources(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let mut overrides = OverrideBuilder::new(root);
    overrides.add("!/.dart_tool/**").ok();
    overrides.add("!/build/**").ok();
    for pattern in &options.extra_excludes {
        let negated = format!("!{}", ensure_leading_slash_free(pattern));
        overrides.add(&negated).ok();
    }
    let overrides = overrides.build().unwrap_or_else(|_| {
        OverrideBuilder::new(root)
            .build()
            .expect("empty override set always builds")
    });

    let mut walker = WalkBuilder::new(root);
    walker
        .overrides(overrides)
        .hidden(false)
        .git_ignore(false)
        .git_exclude(false)
        .git_global(false)
        .parents(false);

    let mut out = Vec::new();
    for entry in walker.build().flatten() {
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        if !options.include_generated && is_generated(path) {
            continue;
        }
        if !options.include_tests && is_test_path(root, path) {
            continue;
        }
        out.push(path.to_path_buf());
    }
    out.sort();
    out
}

/// Like [`walk_sources`], but drops any file that falls under one of
/// `nested_roots` — used when walking a workspace root that contains member
/// package directories already covered by their own dedicated walk, so
/// source files don't get visited (and their declarations/references
/// double-counted) twice.
pub fn walk_sources_excluding(root: &Path, nested_roots: &[&Path], options: &WalkOptions) -> Vec<PathBuf> {
    walk_sources(root, options)
        .into_iter()
        .filter(|file| !nested_roots.iter().any(|nested| file.starts_with(nested)))
        .collect()
}

fn ensure_leading_slash_free(pattern: &str) -> String {
    pattern.strip_prefix('/').unwrap_or(pattern).to_string()
}

fn is_generated(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    GENERATED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn is_test_path(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str() == "test" || c.as_os_str() == "integration_test")
}

/// Expand a declared-asset glob (`*`/`**` segment semantics, not regex) against
/// the filesystem rooted at `package_root`, returning existing files only.
pub fn expand_glob(package_root: &Path, pattern: &str) -> Vec<PathBuf> {
    let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let mut out = Vec::new();
    expand_segments(package_root, package_root, &segments, &mut out);
    out.sort();
    out
}

fn expand_segments(package_root: &Path, current: &Path, remaining: &[&str], out: &mut Vec<PathBuf>) {
    let Some((head, rest)) = remaining.split_first() else {
        return;
    };
    if *head == "**" {
        expand_segments(package_root, current, rest, out);
        if let Ok(read) = std::fs::read_dir(current) {
            for entry in read.flatten() {
                if entry.path().is_dir() {
                    expand_segments(package_root, &entry.path(), remaining, out);
                }
            }
        }
        return;
    }

    if !head.contains('*') {
        let next = current.join(head);
        if rest.is_empty() {
            if next.is_file() {
                if let Ok(rel) = next.strip_prefix(package_root) {
                    out.push(normalize(rel));
                }
            }
        } else if next.is_dir() {
            expand_segments(package_root, &next, rest, out);
        }
        return;
    }

    let Ok(read) = std::fs::read_dir(current) else {
        return;
    };
    for entry in read.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !segment_matches(head, &name) {
            continue;
        }
        let next = entry.path();
        if rest.is_empty() {
            if next.is_file() {
                if let Ok(rel) = next.strip_prefix(package_root) {
                    out.push(normalize(rel));
                }
            }
        } else if next.is_dir() {
            expand_segments(package_root, &next, rest, out);
        }
    }
}

/// `*` within one path segment matches any run of non-separator characters.
fn segment_matches(pattern: &str, candidate: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == candidate;
    }
    let mut rest = candidate;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            if !rest.starts_with(part) {
                return false;
            }
            rest = &rest[part.len()..];
        } else if i == parts.len() - 1 {
            return rest.ends_with(part);
        } else if let Some(pos) = rest.find(part) {
            rest = &rest[pos + part.len()..];
        } else {
            return false;
        }
    }
    true
}

fn normalize(path: &Path) -> PathBuf {
    PathBuf::from(path.clean().to_string_lossy().replace('\\', "/"))
}
