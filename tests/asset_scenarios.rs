//! End-to-end scenarios for the asset analyzer, built on real temp-directory
//! fixtures rather than mocked manifests or file walks.

use std::fs;
use tempfile::TempDir;
use unused_finder::assets::{self, AssetScanOptions};
use unused_finder::workspace;

fn package(dir: &TempDir, pubspec: &str) {
    fs::write(dir.path().join("pubspec.yaml"), pubspec).unwrap();
}

#[test]
fn asset_literal_match_is_used() {
    let dir = TempDir::new().unwrap();
    package(
        &dir,
        "name: demo\nflutter:\n  assets:\n    - assets/images/logo.png\n",
    );
    fs::create_dir_all(dir.path().join("assets/images")).unwrap();
    fs::write(dir.path().join("assets/images/logo.png"), b"").unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(
        dir.path().join("lib/main.dart"),
        "String logoPath = 'assets/images/logo.png';\n",
    )
    .unwrap();

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let report = assets::analyze(&ws, &AssetScanOptions::default()).unwrap();

    assert_eq!(report.findings.len(), 1);
    assert!(report.unused().next().is_none());
}

#[test]
fn generated_accessor_match_is_used() {
    let dir = TempDir::new().unwrap();
    package(
        &dir,
        "name: demo\nflutter:\n  assets:\n    - assets/images/logo.png\n",
    );
    fs::create_dir_all(dir.path().join("assets/images")).unwrap();
    fs::write(dir.path().join("assets/images/logo.png"), b"").unwrap();
    fs::create_dir_all(dir.path().join("lib/gen")).unwrap();
    fs::write(
        dir.path().join("lib/gen/assets.gen.dart"),
        r#"
            class Assets {
              static const images = _$Images();
            }
            class _$Images {
              String get logo => 'assets/images/logo.png';
            }
        "#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/main.dart"), "var img = Assets.images.logo;\n").unwrap();

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let options = AssetScanOptions {
        include_generated: true,
        ..Default::default()
    };
    let report = assets::analyze(&ws, &options).unwrap();

    assert!(report.unused().next().is_none());
}

#[test]
fn dynamic_hint_marks_potential_not_unused() {
    let dir = TempDir::new().unwrap();
    package(
        &dir,
        "name: demo\nflutter:\n  assets:\n    - assets/icons/a.svg\n    - assets/icons/b.svg\n",
    );
    fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
    fs::write(dir.path().join("assets/icons/a.svg"), b"").unwrap();
    fs::write(dir.path().join("assets/icons/b.svg"), b"").unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(
        dir.path().join("lib/main.dart"),
        "String iconFor(String name) => 'assets/icons/$name.svg';\n",
    )
    .unwrap();

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let report = assets::analyze(&ws, &AssetScanOptions::default()).unwrap();

    assert_eq!(report.unused().count(), 0);
    assert_eq!(report.potential().count(), 2);
}

#[test]
fn missing_declared_asset_is_a_warning_not_a_finding() {
    let dir = TempDir::new().unwrap();
    package(&dir, "name: demo\nflutter:\n  assets:\n    - assets/missing.png\n");

    let ws = workspace::resolve(dir.path(), true).unwrap();
    let report = assets::analyze(&ws, &AssetScanOptions::default()).unwrap();

    assert!(report.findings.is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn reference_in_a_file_directly_under_the_workspace_root_counts_as_used() {
    let dir = TempDir::new().unwrap();
    package(&dir, "name: root\nworkspace:\n  - packages/*\n");
    let pkg_a = dir.path().join("packages/a");
    fs::create_dir_all(&pkg_a).unwrap();
    fs::write(
        pkg_a.join("pubspec.yaml"),
        "name: a\nflutter:\n  assets:\n    - assets/logo.png\n",
    )
    .unwrap();
    fs::create_dir_all(pkg_a.join("assets")).unwrap();
    fs::write(pkg_a.join("assets/logo.png"), b"").unwrap();
    // Lives directly under the workspace root, outside any member package.
    fs::create_dir_all(dir.path().join("tool")).unwrap();
    fs::write(dir.path().join("tool/build_script.dart"), "var p = 'assets/logo.png';\n").unwrap();

    let ws = workspace::resolve(&pkg_a, true).unwrap();
    let report = assets::analyze(&ws, &AssetScanOptions::default()).unwrap();

    assert!(report.unused().next().is_none());
}

#[test]
fn workspace_scan_disabled_does_not_match_across_packages() {
    let dir = TempDir::new().unwrap();
    package(&dir, "name: root\nworkspace:\n  - packages/*\n");
    let pkg_a = dir.path().join("packages/a");
    let pkg_b = dir.path().join("packages/b");
    fs::create_dir_all(&pkg_a).unwrap();
    fs::create_dir_all(&pkg_b).unwrap();
    fs::write(
        pkg_a.join("pubspec.yaml"),
        "name: a\nflutter:\n  assets:\n    - assets/logo.png\n",
    )
    .unwrap();
    fs::create_dir_all(pkg_a.join("assets")).unwrap();
    fs::write(pkg_a.join("assets/logo.png"), b"").unwrap();
    fs::write(pkg_b.join("pubspec.yaml"), "name: b\n").unwrap();
    fs::create_dir_all(pkg_b.join("lib")).unwrap();
    fs::write(pkg_b.join("lib/main.dart"), "var p = 'assets/logo.png';\n").unwrap();

    let ws = workspace::resolve(&pkg_a, false).unwrap();
    assert!(!ws.is_workspace);
    let report = assets::analyze(&ws, &AssetScanOptions::default()).unwrap();
    assert_eq!(report.unused().count(), 1);
}
