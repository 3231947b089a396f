//! End-to-end scenarios for the code analyzer: unused symbols, exclusion
//! rules, unused imports, and the auto-fix round-trip invariant.

use std::fs;
use tempfile::TempDir;
use unused_finder::code::{self, CodeScanOptions};
use unused_finder::config::UnusedCodeConfig;
use unused_finder::workspace;

fn single_package(dir: &TempDir, source: &str) {
    fs::write(dir.path().join("pubspec.yaml"), "name: demo\n").unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/main.dart"), source).unwrap();
}

#[test]
fn unused_class_is_reported_as_auto_fixable_warning() {
    let dir = TempDir::new().unwrap();
    single_package(
        &dir,
        "class UnusedService { void neverCalled() {} }\nvoid main() {}\n",
    );

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);

    let class_issue = report.issues.iter().find(|i| i.symbol == "UnusedService").unwrap();
    assert_eq!(class_issue.category, "unused-class");
    assert_eq!(class_issue.severity, unused_finder::code::model::Severity::Warning);
    assert!(class_issue.auto_fixable);
}

#[test]
fn override_method_is_excluded_by_default() {
    let dir = TempDir::new().unwrap();
    single_package(
        &dir,
        r#"
            class Base {
              void build() {}
            }
            class Impl extends Base {
              @override
              void build() {}
            }
            void main() {}
        "#,
    );

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);

    assert!(report.issues.iter().all(|i| i.symbol != "build"));
}

#[test]
fn unused_prefixed_import_is_info_and_never_auto_fixable() {
    let dir = TempDir::new().unwrap();
    single_package(
        &dir,
        "import 'package:flutter/widgets.dart' as w;\nvoid main() {}\n",
    );

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);

    let import_issue = report
        .issues
        .iter()
        .find(|i| i.category == "unused-import")
        .expect("unused import should be reported");
    assert_eq!(import_issue.severity, unused_finder::code::model::Severity::Info);
    assert!(!import_issue.auto_fixable);
}

#[test]
fn auto_fix_removes_the_unused_class_and_does_not_reappear() {
    let dir = TempDir::new().unwrap();
    single_package(
        &dir,
        "class UnusedService { void neverCalled() {} }\nclass Keep {}\nvoid main() { Keep(); }\n",
    );

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let first_pass = code::analyze(&ws, &CodeScanOptions::default(), &config);

    let plans = code::fixer::plan_fixes(&first_pass.issues);
    code::fixer::apply_fixes(&plans, false).unwrap();

    let source = fs::read_to_string(dir.path().join("lib/main.dart")).unwrap();
    assert!(!source.contains("UnusedService"));
    assert!(source.contains("class Keep"));

    let second_pass = code::analyze(&ws, &CodeScanOptions::default(), &config);
    assert!(second_pass.issues.iter().all(|i| i.symbol != "UnusedService"));
}

#[test]
fn fix_dry_run_leaves_source_untouched() {
    let dir = TempDir::new().unwrap();
    single_package(&dir, "class UnusedService {}\nvoid main() {}\n");
    let original = fs::read_to_string(dir.path().join("lib/main.dart")).unwrap();

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);
    let plans = code::fixer::plan_fixes(&report.issues);
    code::fixer::apply_fixes(&plans, true).unwrap();

    let after = fs::read_to_string(dir.path().join("lib/main.dart")).unwrap();
    assert_eq!(original, after);
}

#[test]
fn symbol_referenced_only_from_a_workspace_root_file_is_not_flagged() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pubspec.yaml"),
        "name: root\nworkspace:\n  - packages/*\n",
    )
    .unwrap();
    let pkg_a = dir.path().join("packages/a");
    fs::create_dir_all(pkg_a.join("lib")).unwrap();
    fs::write(pkg_a.join("pubspec.yaml"), "name: a\n").unwrap();
    fs::write(pkg_a.join("lib/service.dart"), "class SharedService {}\n").unwrap();
    // Lives directly under the workspace root, outside any member package.
    fs::create_dir_all(dir.path().join("tool")).unwrap();
    fs::write(
        dir.path().join("tool/build_script.dart"),
        "void main() { SharedService(); }\n",
    )
    .unwrap();

    let ws = workspace::resolve(&pkg_a, true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);

    assert!(report.issues.iter().all(|i| i.symbol != "SharedService"));
}

#[test]
fn empty_project_has_zero_issues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pubspec.yaml"), "name: demo\n").unwrap();

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let config = UnusedCodeConfig::default();
    let report = code::analyze(&ws, &CodeScanOptions::default(), &config);

    assert!(report.issues.is_empty());
    assert_eq!(report.files_scanned, 0);
}
