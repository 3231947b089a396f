//! Orchestrates the two-pass scan, applies exclusion rules, computes the
//! candidate-unused set, and produces [`CodeIssue`]s.

use std::collections::HashSet;
use std::path::Path;

use super::model::{CodeElement, CodeIssue, ElementKind, ImportDirective, Severity};
use crate::assets::generated::is_generated_file;
use crate::config::types::UnusedCodeConfig;

pub struct AnalysisInput {
    pub elements: Vec<CodeElement>,
    pub used_names: HashSet<String>,
    pub imports: Vec<ImportDirective>,
}

pub fn analyze(input: AnalysisInput, config: &UnusedCodeConfig) -> Vec<CodeIssue> {
    let AnalysisInput {
        elements,
        used_names,
        imports,
    } = input;

    let fully_unused_enums = fully_unused_enums(&elements, &used_names);

    let unused_classes: HashSet<String> = elements
        .iter()
        .filter(|e| matches!(e.kind, ElementKind::Class | ElementKind::Mixin | ElementKind::Extension))
        .filter(|e| is_candidate_unused(e, &used_names, &fully_unused_enums))
        .map(|e| e.name.clone())
        .collect();

    let mut issues = Vec::new();

    for element in &elements {
        if !is_candidate_unused(element, &used_names, &fully_unused_enums) {
            continue;
        }
        if excluded(element, &unused_classes, config) {
            continue;
        }
        issues.push(issue_for_element(element));
    }

    for import in &imports {
        if import.used {
            continue;
        }
        if !config.rules.unused_imports.enabled {
            continue;
        }
        issues.push(issue_for_import(import));
    }

    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    issues
}

/// For each enum, the set of enum names where neither the enum type itself
/// nor any of its values appears in `used_names`. Enum values use whole-enum
/// granularity: an individual value is only a candidate when its entire enum
/// is unreferenced.
fn fully_unused_enums(elements: &[CodeElement], used_names: &HashSet<String>) -> HashSet<String> {
    elements
        .iter()
        .filter(|e| e.kind == ElementKind::Enum)
        .filter(|e| {
            let values_used = elements
                .iter()
                .filter(|v| v.kind == ElementKind::EnumValue && v.parent.as_deref() == Some(e.name.as_str()))
                .any(|v| used_names.contains(&v.name));
            !values_used && !used_names.contains(&e.name)
        })
        .map(|e| e.name.clone())
        .collect()
}

fn is_candidate_unused(
    element: &CodeElement,
    used_names: &HashSet<String>,
    fully_unused_enums: &HashSet<String>,
) -> bool {
    if element.kind == ElementKind::EnumValue {
        return match &element.parent {
            Some(parent) => fully_unused_enums.contains(parent),
            None => false,
        };
    }
    !used_names.contains(&element.name)
}

fn excluded(element: &CodeElement, unused_classes: &HashSet<String>, config: &UnusedCodeConfig) -> bool {
    if element.name == "main" {
        return true;
    }

    let rule = config.rules.rule_for(element.kind);
    if !rule.enabled {
        return true;
    }
    if rule.exclude_overrides && element.is_override {
        return true;
    }
    if element.annotations.iter().any(|a| rule.exclude_annotations.contains(a)) {
        return true;
    }
    if let Some(parent) = &element.parent {
        if unused_classes.contains(parent) && is_member_kind(element.kind) {
            return true;
        }
    }
    if element.is_public && config.public_api.consider_exports_as_used {
        return true;
    }
    if rule.exclude_public && element.is_public {
        return true;
    }
    if rule.exclude_private && !element.is_public {
        return true;
    }
    if rule.exclude_static && element.is_static {
        return true;
    }
    if rule
        .exclude_patterns
        .iter()
        .chain(config.exclude.iter())
        .any(|glob| glob_matches(glob, &element.name))
    {
        return true;
    }
    if is_in_test_file(&element.file) && !config.include_tests {
        return true;
    }
    if is_generated_file(&element.file) {
        return true;
    }
    false
}

fn is_member_kind(kind: ElementKind) -> bool {
    matches!(
        kind,
        ElementKind::Method | ElementKind::Field | ElementKind::Getter | ElementKind::Setter | ElementKind::Constructor
    )
}

fn is_in_test_file(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "test" || c.as_os_str() == "integration_test")
}

/// Simple single-segment glob: `*` matches any run of characters (element
/// names never contain path separators, so this is a plain substring-anchor
/// match rather than the multi-segment walker glob).
fn glob_matches(pattern: &str, candidate: &str) -> bool {
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

fn category_for(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Class => "unused-class",
        ElementKind::Mixin => "unused-mixin",
        ElementKind::Extension => "unused-extension",
        ElementKind::Enum => "unused-enum",
        ElementKind::EnumValue => "unused-enum-value",
        ElementKind::Typedef => "unused-typedef",
        ElementKind::TopLevelFunction => "unused-function",
        ElementKind::Method => "unused-method",
        ElementKind::Getter => "unused-getter",
        ElementKind::Setter => "unused-setter",
        ElementKind::Field => "unused-field",
        ElementKind::Constructor => "unused-constructor",
        ElementKind::Parameter => "unused-parameter",
    }
}

fn severity_for(kind: ElementKind) -> Severity {
    match kind {
        ElementKind::Class
        | ElementKind::Mixin
        | ElementKind::Extension
        | ElementKind::Enum
        | ElementKind::Typedef
        | ElementKind::TopLevelFunction
        | ElementKind::Method
        | ElementKind::Field
        | ElementKind::Getter
        | ElementKind::Setter
        | ElementKind::Constructor => Severity::Warning,
        ElementKind::Parameter | ElementKind::EnumValue => Severity::Info,
    }
}

fn issue_for_element(element: &CodeElement) -> CodeIssue {
    let category = category_for(element.kind);
    CodeIssue {
        category: category.to_string(),
        severity: severity_for(element.kind),
        symbol: element.name.clone(),
        file: element.file.clone(),
        line: element.location.line,
        column: element.location.column,
        message: format!("{} '{}' is never referenced", describe_kind(element.kind), element.name),
        suggestion: Some(format!("remove the unused {}", describe_kind(element.kind))),
        auto_fixable: true,
        delete_range: Some(element.delete_range),
    }
}

fn issue_for_import(import: &ImportDirective) -> CodeIssue {
    CodeIssue {
        category: "unused-import".to_string(),
        severity: Severity::Info,
        symbol: import.prefix.clone().unwrap_or_else(|| import.uri.clone()),
        file: import.file.clone(),
        line: import.location.line,
        column: import.location.column,
        message: format!("import '{}' is never referenced", import.uri),
        suggestion: Some("remove this import".to_string()),
        auto_fixable: false,
        delete_range: None,
    }
}

fn describe_kind(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Class => "class",
        ElementKind::Mixin => "mixin",
        ElementKind::Extension => "extension",
        ElementKind::Enum => "enum",
        ElementKind::EnumValue => "enum value",
        ElementKind::Typedef => "typedef",
        ElementKind::TopLevelFunction => "function",
        ElementKind::Method => "method",
        ElementKind::Getter => "getter",
        ElementKind::Setter => "setter",
        ElementKind::Field => "field",
        ElementKind::Constructor => "constructor",
        ElementKind::Parameter => "parameter",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::model::Location;
    use std::path::PathBuf;

    fn element(name: &str, kind: ElementKind, parent: Option<&str>) -> CodeElement {
        CodeElement {
            name: name.to_string(),
            kind,
            file: PathBuf::from("lib/foo.dart"),
            package: "demo".to_string(),
            location: Location { line: 1, column: 1 },
            delete_range: (0, 10),
            parent: parent.map(str::to_string),
            annotations: Vec::new(),
            is_public: true,
            is_static: false,
            is_override: false,
        }
    }

    #[test]
    fn unused_class_produces_warning_issue() {
        let input = AnalysisInput {
            elements: vec![element("UnusedService", ElementKind::Class, None)],
            used_names: HashSet::new(),
            imports: Vec::new(),
        };
        let config = UnusedCodeConfig::default();
        let issues = analyze(input, &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "unused-class");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].auto_fixable);
    }

    #[test]
    fn main_function_is_never_reported() {
        let input = AnalysisInput {
            elements: vec![element("main", ElementKind::TopLevelFunction, None)],
            used_names: HashSet::new(),
            imports: Vec::new(),
        };
        let config = UnusedCodeConfig::default();
        let issues = analyze(input, &config);
        assert!(issues.is_empty());
    }

    #[test]
    fn override_method_excluded_by_default() {
        let mut method = element("build", ElementKind::Method, Some("Widget"));
        method.is_override = true;
        let input = AnalysisInput {
            elements: vec![method],
            used_names: HashSet::new(),
            imports: Vec::new(),
        };
        let config = UnusedCodeConfig::default();
        let issues = analyze(input, &config);
        assert!(issues.is_empty());
    }

    #[test]
    fn enum_value_is_exempt_when_a_sibling_value_is_used() {
        let enum_elem = element("Status", ElementKind::Enum, None);
        let active = element("active", ElementKind::EnumValue, Some("Status"));
        let retired = element("retired", ElementKind::EnumValue, Some("Status"));
        let input = AnalysisInput {
            elements: vec![enum_elem, active, retired],
            used_names: HashSet::from(["active".to_string()]),
            imports: Vec::new(),
        };
        let config = UnusedCodeConfig::default();
        let issues = analyze(input, &config);
        assert!(issues.iter().all(|i| i.category != "unused-enum-value"));
    }

    #[test]
    fn enum_values_are_flagged_when_the_whole_enum_is_unreferenced() {
        let enum_elem = element("Status", ElementKind::Enum, None);
        let active = element("active", ElementKind::EnumValue, Some("Status"));
        let retired = element("retired", ElementKind::EnumValue, Some("Status"));
        let input = AnalysisInput {
            elements: vec![enum_elem, active, retired],
            used_names: HashSet::new(),
            imports: Vec::new(),
        };
        let config = UnusedCodeConfig::default();
        let issues = analyze(input, &config);
        let flagged: HashSet<_> = issues
            .iter()
            .filter(|i| i.category == "unused-enum-value")
            .map(|i| i.symbol.as_str())
            .collect();
        assert_eq!(flagged, HashSet::from(["active", "retired"]));
    }

    #[test]
    fn member_of_unused_class_is_suppressed_in_favor_of_the_class_issue() {
        let class = element("UnusedService", ElementKind::Class, None);
        let mut method = element("doWork", ElementKind::Method, Some("UnusedService"));
        method.is_public = false;
        let input = AnalysisInput {
            elements: vec![class, method],
            used_names: HashSet::new(),
            imports: Vec::new(),
        };
        let mut config = UnusedCodeConfig::default();
        config.public_api.consider_exports_as_used = false;
        let issues = analyze(input, &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].symbol, "UnusedService");
    }
}
