//! Collects every declarable symbol from a parsed
//! file's shallow AST, carrying visibility, static-ness, annotations and
//! parent linkage.

use std::path::Path;

use super::model::{CodeElement, ElementKind, Location};
use crate::parser::ast::{Node, ParsedFile};

pub fn collect_declarations(parsed: &ParsedFile, package: &str) -> Vec<CodeElement> {
    let mut out = Vec::new();
    for node in &parsed.nodes {
        walk(node, None, &parsed.path, package, &mut out);
    }
    out
}

fn walk(node: &Node, parent: Option<&str>, file: &Path, package: &str, out: &mut Vec<CodeElement>) {
    out.push(CodeElement {
        name: node.name.clone(),
        kind: ElementKind::from(node.kind),
        file: file.to_path_buf(),
        package: package.to_string(),
        location: Location {
            line: node.header_span.line,
            column: node.header_span.column,
        },
        delete_range: (node.span.start, node.span.end),
        parent: parent.map(str::to_string),
        annotations: node.annotations.clone(),
        is_public: node.is_public(),
        is_static: node.is_static,
        is_override: node.is_override,
    });

    for child in &node.children {
        walk(child, Some(&node.name), file, package, out);
    }
}
