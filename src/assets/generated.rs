//! Recognizes generated asset-accessor
//! classes and builds the property-chain → asset-path map.

use std::path::Path;

use super::model::GeneratedAssetMapping;
use crate::parser::ast::{Node, NodeKind, ParsedFile};
use crate::parser::lexer::{Token, TokenKind};

const GENERATED_PATH_HINTS: &[&str] = &[
    "lib/gen/assets.gen.dart",
    "lib/generated/assets.dart",
    "lib/src/generated/assets.dart",
];

const ASSET_PREFIXES: &[&str] = &["assets/", "asset/", "images/", "icons/", "fonts/", "res/"];
const ASSET_SUFFIXES: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg", ".ttf", ".otf", ".json",
];

pub fn looks_like_asset_path(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    ASSET_PREFIXES.iter().any(|p| lower.starts_with(p)) || ASSET_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

pub fn is_generated_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.ends_with(".gen.dart") {
        return true;
    }
    let text = path.to_string_lossy().replace('\\', "/");
    GENERATED_PATH_HINTS.iter().any(|hint| text.ends_with(hint))
}

/// Walk every container in a generated file collecting static-field,
/// getter, and const-constructor-default asset-looking strings, keyed by
/// the dotted class-hierarchy + member name.
pub fn collect_generated_mapping(parsed: &ParsedFile, mapping: &mut GeneratedAssetMapping) {
    for node in &parsed.nodes {
        walk_container(parsed, node, &node.name, mapping);
    }
}

fn walk_container(parsed: &ParsedFile, container: &Node, chain_prefix: &str, mapping: &mut GeneratedAssetMapping) {
    let mut defaults_for_class = Vec::new();

    for child in &container.children {
        match child.kind {
            NodeKind::Field => {
                if let Some(text) = literal_in_range(parsed, child.body_tokens) {
                    if looks_like_asset_path(&text) {
                        let chain = format!("{chain_prefix}.{}", child.name);
                        mapping.all_paths.insert(text.clone());
                        mapping.chain_to_path.insert(chain, text);
                    }
                }
            }
            NodeKind::Getter => {
                if let Some(text) = literal_in_range(parsed, child.body_tokens) {
                    if looks_like_asset_path(&text) {
                        let chain = format!("{chain_prefix}.{}", child.name);
                        mapping.all_paths.insert(text.clone());
                        mapping.chain_to_path.insert(chain, text);
                    }
                }
            }
            NodeKind::Constructor => {
                // Named-parameter-group defaults don't segment cleanly through
                // the declaration children, so the parameter list's own byte
                // range is scanned directly for `name = 'literal'` pairs.
                for text in ident_eq_string_defaults(parsed, child.span.start, child.span.end) {
                    if looks_like_asset_path(&text) {
                        mapping.all_paths.insert(text.clone());
                        defaults_for_class.push(text);
                    }
                }
            }
            NodeKind::Class | NodeKind::Mixin | NodeKind::Extension => {
                let nested_prefix = format!("{chain_prefix}.{}", child.name);
                walk_container(parsed, child, &nested_prefix, mapping);
            }
            _ => {}
        }
    }

    if !defaults_for_class.is_empty() {
        mapping
            .class_defaults
            .entry(container.name.clone())
            .or_default()
            .extend(defaults_for_class);
    }
}

/// Find the first plain (non-interpolated) string literal inside a token
/// range, used for getter bodies and field initializers.
fn literal_in_range(parsed: &ParsedFile, range: (usize, usize)) -> Option<String> {
    let (start, end) = range;
    for token in parsed.tokens.get(start..end.min(parsed.tokens.len()))? {
        if let TokenKind::Str(lit) = &token.kind {
            if let Some(text) = lit.plain_text() {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Scan a byte range for `identifier '=' 'string literal'` triples, in
/// token order, ignoring nesting depth — covers constructor parameter
/// defaults without needing comma-accurate parameter segmentation.
fn ident_eq_string_defaults(parsed: &ParsedFile, byte_start: usize, byte_end: usize) -> Vec<String> {
    let in_range: Vec<&Token> = parsed
        .tokens
        .iter()
        .filter(|t| t.start >= byte_start && t.end <= byte_end)
        .collect();
    let mut out = Vec::new();
    for window in in_range.windows(3) {
        if matches!(window[0].kind, TokenKind::Ident(_)) && matches!(window[1].kind, TokenKind::Symbol('=')) {
            if let TokenKind::Str(lit) = &window[2].kind {
                if let Some(text) = lit.plain_text() {
                    out.push(text.to_string());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;
    use std::path::PathBuf;

    #[test]
    fn recognizes_gen_dart_suffix() {
        assert!(is_generated_file(Path::new("lib/gen/assets.gen.dart")));
        assert!(!is_generated_file(Path::new("lib/main.dart")));
    }

    #[test]
    fn builds_chain_for_static_field_and_getter() {
        let src = r#"
            class Assets {
              static const images = _$Images();
            }
            class _$Images {
              String get logo => 'assets/images/logo.png';
            }
        "#;
        let parsed = parse_file(&PathBuf::from("assets.gen.dart"), src).unwrap();
        let mut mapping = GeneratedAssetMapping::default();
        collect_generated_mapping(&parsed, &mut mapping);
        assert_eq!(
            mapping.chain_to_path.get("_$Images.logo"),
            Some(&"assets/images/logo.png".to_string())
        );
    }

    #[test]
    fn const_constructor_default_is_attributed_to_enclosing_class() {
        let src = r#"
            class IconAsset {
              const IconAsset({this.path = 'icons/star.svg'});
            }
        "#;
        let parsed = parse_file(&PathBuf::from("assets.gen.dart"), src).unwrap();
        let mut mapping = GeneratedAssetMapping::default();
        collect_generated_mapping(&parsed, &mut mapping);
        assert_eq!(
            mapping.class_defaults.get("IconAsset"),
            Some(&vec!["icons/star.svg".to_string()])
        );
    }
}
