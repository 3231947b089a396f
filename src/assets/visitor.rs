//! Walks a parsed file's token stream for
//! literal strings, property-access chains, `fontFamily` assignments, and
//! dynamic-directory hints.

use super::model::{AssetReference, Location};
use crate::parser::ast::ParsedFile;
use crate::parser::lexer::TokenKind;

const ASSET_DIR_HINTS: &[&str] = &["assets/", "asset/", "images/", "icons/", "fonts/", "res/"];

pub fn collect_references(parsed: &ParsedFile) -> Vec<AssetReference> {
    let mut refs = Vec::new();
    let tokens = &parsed.tokens;
    let mut i = 0usize;
    while i < tokens.len() {
        match &tokens[i].kind {
            TokenKind::Str(lit) => {
                let location = Location {
                    line: tokens[i].line,
                    column: tokens[i].column,
                };
                if let Some(text) = lit.plain_text() {
                    refs.push(AssetReference::Literal {
                        text: text.to_string(),
                        location,
                    });
                } else {
                    for part in &lit.literal_parts {
                        if let Some(dir) = dynamic_hint_dir(part) {
                            refs.push(AssetReference::DynamicHint {
                                directory: dir,
                                location,
                            });
                        }
                    }
                }
                i += 1;
            }
            TokenKind::Ident(name) if name == "fontFamily" => {
                if is_assignment_or_colon(tokens, i + 1) {
                    if let Some((text, loc)) = find_following_literal(tokens, i + 2) {
                        refs.push(AssetReference::FontFamily {
                            name: text,
                            location: loc,
                        });
                    }
                }
                i += 1;
            }
            TokenKind::Ident(_) => {
                let (chain, next) = read_property_chain(tokens, i);
                if chain.len() >= 2 {
                    refs.push(AssetReference::PropertyChain {
                        segments: chain,
                        location: Location {
                            line: tokens[i].line,
                            column: tokens[i].column,
                        },
                    });
                }
                i = next.max(i + 1);
            }
            _ => i += 1,
        }
    }
    refs
}

fn is_assignment_or_colon(tokens: &[crate::parser::lexer::Token], idx: usize) -> bool {
    matches!(tokens.get(idx).map(|t| &t.kind), Some(TokenKind::Symbol(':')) | Some(TokenKind::Symbol('=')))
}

fn find_following_literal(
    tokens: &[crate::parser::lexer::Token],
    start: usize,
) -> Option<(String, Location)> {
    let token = tokens.get(start)?;
    match &token.kind {
        TokenKind::Str(lit) => lit.plain_text().map(|text| {
            (
                text.to_string(),
                Location {
                    line: token.line,
                    column: token.column,
                },
            )
        }),
        _ => None,
    }
}

/// Reads `a.b.c` style chains of identifiers joined by `.`, stopping at the
/// first non-ident/non-dot token. Returns the segments and the index past
/// the chain.
fn read_property_chain(tokens: &[crate::parser::lexer::Token], start: usize) -> (Vec<String>, usize) {
    let mut segments = Vec::new();
    let mut idx = start;
    loop {
        match tokens.get(idx).map(|t| &t.kind) {
            Some(TokenKind::Ident(name)) => {
                segments.push(name.clone());
                idx += 1;
            }
            _ => break,
        }
        match tokens.get(idx).map(|t| &t.kind) {
            Some(TokenKind::Symbol('.')) => idx += 1,
            _ => break,
        }
    }
    (segments, idx)
}

fn dynamic_hint_dir(segment: &str) -> Option<String> {
    let lower = segment.to_ascii_lowercase();
    ASSET_DIR_HINTS
        .iter()
        .find(|hint| lower.contains(*hint))
        .map(|hint| hint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;
    use std::path::PathBuf;

    fn refs(src: &str) -> Vec<AssetReference> {
        let parsed = parse_file(&PathBuf::from("main.dart"), src).unwrap();
        collect_references(&parsed)
    }

    #[test]
    fn collects_literal_string() {
        let refs = refs("var p = 'assets/images/logo.png';");
        assert!(refs.iter().any(|r| matches!(r, AssetReference::Literal { text, .. } if text == "assets/images/logo.png")));
    }

    #[test]
    fn collects_property_chain() {
        let refs = refs("var img = Assets.images.logo;");
        assert!(refs.iter().any(|r| matches!(r, AssetReference::PropertyChain { segments, .. } if segments == &vec!["Assets".to_string(), "images".to_string(), "logo".to_string()])));
    }

    #[test]
    fn collects_font_family_assignment() {
        let refs = refs("TextStyle(fontFamily: 'Roboto');");
        assert!(refs.iter().any(|r| matches!(r, AssetReference::FontFamily { name, .. } if name == "Roboto")));
    }

    #[test]
    fn collects_dynamic_interpolation_hint() {
        let refs = refs("var p = 'assets/icons/$name.svg';");
        assert!(refs.iter().any(|r| matches!(r, AssetReference::DynamicHint { directory, .. } if directory == "assets/icons/"
            || directory == "assets/" || directory == "icons/")));
    }
}
