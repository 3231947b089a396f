//! Collects per-file referenced identifier and type
//! names, skipping the file's own declaration name sites so a declaration is
//! never trivially "used" by its own header.

use super::model::ReferenceSet;
use crate::parser::ast::ParsedFile;
use crate::parser::lexer::TokenKind;

pub fn collect_references(parsed: &ParsedFile) -> ReferenceSet {
    let mut set = ReferenceSet::default();
    for (idx, token) in parsed.tokens.iter().enumerate() {
        if parsed.declared_name_tokens.contains(&idx) {
            continue;
        }
        if let TokenKind::Ident(name) = &token.kind {
            if is_keyword(name) {
                continue;
            }
            if name.chars().next().is_some_and(char::is_uppercase) {
                set.types.insert(name.clone());
            } else {
                set.identifiers.insert(name.clone());
            }
        }
    }
    set
}

const KEYWORDS: &[&str] = &[
    "class", "mixin", "enum", "extension", "typedef", "abstract", "final", "const", "static",
    "late", "required", "covariant", "external", "base", "interface", "sealed", "get", "set",
    "factory", "var", "void", "return", "if", "else", "for", "while", "do", "switch", "case",
    "break", "continue", "this", "super", "new", "import", "export", "as", "show", "hide",
    "async", "await", "sync", "yield", "try", "catch", "finally", "throw", "is", "in", "on",
    "true", "false", "null", "default", "augment",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;
    use std::path::PathBuf;

    #[test]
    fn collects_referenced_identifiers_excluding_declaration_sites() {
        let src = r#"
            class Foo {
              void bar() {
                helper();
              }
            }
            void helper() {}
        "#;
        let parsed = parse_file(&PathBuf::from("foo.dart"), src).unwrap();
        let refs = collect_references(&parsed);
        assert!(refs.identifiers.contains("helper"));
        // `bar` is only ever its own declaration's name site, never called.
        assert!(!refs.identifiers.contains("bar"));
    }

    #[test]
    fn capitalized_identifiers_collect_as_types() {
        let src = "class Foo {} Widget build() => Foo();";
        let parsed = parse_file(&PathBuf::from("foo.dart"), src).unwrap();
        let refs = collect_references(&parsed);
        assert!(refs.types.contains("Widget"));
        assert!(refs.contains_name("Foo"));
    }
}
