//! Classifies declared assets as used / potential /
//! unused against the collected reference set.

use std::path::Path;

use super::model::{AssetStatus, DeclaredAsset, GeneratedAssetMapping, ReferenceCollection};

const CHAIN_SUGAR_SUFFIXES: &[&str] = &[".path", ".keyName", ".provider", ".image", ".svg"];

pub fn classify(
    asset: &DeclaredAsset,
    refs: &ReferenceCollection,
    mapping: &GeneratedAssetMapping,
) -> AssetStatus {
    if is_used(asset, refs, mapping) {
        AssetStatus::Used
    } else if is_potential(asset, refs) {
        AssetStatus::Potential
    } else {
        AssetStatus::Unused
    }
}

fn is_used(asset: &DeclaredAsset, refs: &ReferenceCollection, mapping: &GeneratedAssetMapping) -> bool {
    let filename = Path::new(&asset.path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&asset.path);

    let literal_match = refs.literals.iter().any(|lit| {
        lit == &asset.path || lit.ends_with(&format!("/{}", asset.path)) || lit == filename
    });
    if literal_match {
        return true;
    }

    if refs
        .property_chains
        .iter()
        .any(|chain| chain_resolves_to(&asset.path, chain, mapping))
    {
        return true;
    }

    if asset.is_font {
        if let Some(family) = &asset.font_family {
            if refs.font_families.contains(family) {
                return true;
            }
        }
    }

    false
}

fn is_potential(asset: &DeclaredAsset, refs: &ReferenceCollection) -> bool {
    let dir = Path::new(&asset.path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned() + "/")
        .unwrap_or_default();
    refs.dynamic_hint_dirs.iter().any(|hint| dir.starts_with(hint.as_str()) || hint.starts_with(dir.as_str()))
}

/// Resolution precedence: exact chain lookup, sugar-suffix-stripped lookup,
/// category-level (two-segment) prefix match, then fuzzy last-segment match.
fn chain_resolves_to(asset_path: &str, chain: &[String], mapping: &GeneratedAssetMapping) -> bool {
    if chain.is_empty() {
        return false;
    }
    let full = chain.join(".");

    if mapping.chain_to_path.get(&full).map(String::as_str) == Some(asset_path) {
        return true;
    }

    for suffix in CHAIN_SUGAR_SUFFIXES {
        if let Some(stripped) = full.strip_suffix(suffix) {
            if mapping.chain_to_path.get(stripped).map(String::as_str) == Some(asset_path) {
                return true;
            }
        }
    }

    if chain.len() == 2 {
        let category = &chain[1];
        let prefix = format!("{full}.");
        let by_chain_prefix = mapping
            .chain_to_path
            .iter()
            .any(|(k, v)| k.starts_with(&prefix) && v == asset_path);
        if by_chain_prefix {
            return true;
        }
        if asset_path.contains(&format!("/{category}/")) || asset_path.starts_with(&format!("{category}/")) {
            return true;
        }
    }

    // Fuzzy last-segment match, in the documented precedence: lower-camel
    // equality, then snake_case, then hyphen-normalized snake, then
    // underscore-stripped.
    let last = chain.last().unwrap();
    let stem = Path::new(asset_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(asset_path);
    let snake = camel_to_snake(last);
    let stem_hyphen_normalized = stem.replace('-', "_");

    if last.to_ascii_lowercase() == stem.to_ascii_lowercase() {
        return true;
    }
    if snake == stem {
        return true;
    }
    if snake == stem_hyphen_normalized {
        return true;
    }
    if snake.replace('_', "") == stem_hyphen_normalized.replace('_', "") {
        return true;
    }

    false
}

fn camel_to_snake(name: &str) -> String {
    let mut out = String::new();
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str) -> DeclaredAsset {
        DeclaredAsset {
            path: path.to_string(),
            package: "demo".to_string(),
            size_bytes: 0,
            is_font: false,
            font_family: None,
        }
    }

    #[test]
    fn literal_match_marks_used() {
        let a = asset("assets/images/logo.png");
        let mut refs = ReferenceCollection::default();
        refs.literals.insert("assets/images/logo.png".to_string());
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Used);
    }

    #[test]
    fn property_chain_exact_lookup_marks_used() {
        let a = asset("assets/images/logo.png");
        let mut refs = ReferenceCollection::default();
        refs.property_chains.push(vec!["Assets".to_string(), "images".to_string(), "logo".to_string()]);
        let mut mapping = GeneratedAssetMapping::default();
        mapping
            .chain_to_path
            .insert("Assets.images.logo".to_string(), "assets/images/logo.png".to_string());
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Used);
    }

    #[test]
    fn category_level_two_segment_chain_matches_directory() {
        let a = asset("assets/icons/star.svg");
        let mut refs = ReferenceCollection::default();
        refs.property_chains.push(vec!["Assets".to_string(), "icons".to_string()]);
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Used);
    }

    #[test]
    fn fuzzy_camel_case_last_segment_matches_snake_case_filename() {
        let a = asset("assets/icons/star_outline.svg");
        let mut refs = ReferenceCollection::default();
        refs.property_chains.push(vec!["Assets".to_string(), "icons".to_string(), "starOutline".to_string()]);
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Used);
    }

    #[test]
    fn dynamic_hint_into_same_directory_marks_potential() {
        let a = asset("assets/icons/star.svg");
        let mut refs = ReferenceCollection::default();
        refs.dynamic_hint_dirs.insert("assets/icons/".to_string());
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Potential);
    }

    #[test]
    fn no_reference_marks_unused() {
        let a = asset("assets/icons/star.svg");
        let refs = ReferenceCollection::default();
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Unused);
    }

    #[test]
    fn font_family_reference_marks_font_used() {
        let mut a = asset("assets/fonts/Roboto-Regular.ttf");
        a.is_font = true;
        a.font_family = Some("Roboto".to_string());
        let mut refs = ReferenceCollection::default();
        refs.font_families.insert("Roboto".to_string());
        let mapping = GeneratedAssetMapping::default();
        assert_eq!(classify(&a, &refs, &mapping), AssetStatus::Used);
    }
}
