//! Turns raw source text into the shallow [`ast::ParsedFile`].
//!
//! No name resolution happens here — only enough structure for the
//! declaration/reference visitors downstream. The scanner carries its nesting
//! state as an explicit parameter (`container_name`) rather than a mutable
//! visitor-local stack.

pub mod ast;
pub mod lexer;

use std::path::Path;

use ast::{Directive, Node, NodeKind, ParsedFile, SourceSpan};
use lexer::{Token, TokenKind};

use crate::error::AnalysisError;

const CONTAINER_KEYWORDS: &[&str] = &["class", "mixin", "enum", "extension", "typedef"];
const MODIFIERS: &[&str] = &[
    "abstract", "final", "const", "static", "late", "required", "covariant", "external", "base",
    "interface", "sealed", "get", "set", "factory", "var", "async", "augment",
];

pub fn parse_file(path: &Path, source: &str) -> Result<ParsedFile, AnalysisError> {
    let tokens = lexer::tokenize(source);
    let mut cx = Scanner {
        tokens: &tokens,
        source,
        declared_name_tokens: Vec::new(),
    };

    let mut directives = Vec::new();
    let mut nodes = Vec::new();
    let mut idx = 0usize;
    let len = tokens.len();

    while idx < len {
        if let TokenKind::Ident(word) = &tokens[idx].kind {
            if word == "import" || word == "export" {
                let (directive, next) = cx.parse_directive(idx);
                directives.push(directive);
                idx = next;
                continue;
            }
        }
        let (node, next) = cx.parse_declaration(idx, len, None);
        idx = next.max(idx + 1);
        if let Some(node) = node {
            nodes.push(node);
        }
    }

    let declared_name_tokens = cx.declared_name_tokens.iter().copied().collect();

    Ok(ParsedFile {
        path: path.to_path_buf(),
        source: source.to_string(),
        tokens,
        directives,
        nodes,
        declared_name_tokens,
    })
}

struct Scanner<'a> {
    tokens: &'a [Token],
    source: &'a str,
    declared_name_tokens: Vec<usize>,
}

impl<'a> Scanner<'a> {
    fn ident_at(&self, idx: usize) -> Option<&str> {
        match self.tokens.get(idx).map(|t| &t.kind) {
            Some(TokenKind::Ident(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn is_symbol_at(&self, idx: usize, c: char) -> bool {
        matches!(self.tokens.get(idx).map(|t| &t.kind), Some(TokenKind::Symbol(s)) if *s == c)
    }

    fn span_of(&self, start_idx: usize, end_idx_inclusive: usize) -> SourceSpan {
        let start_tok = &self.tokens[start_idx.min(self.tokens.len() - 1)];
        let end_tok = &self.tokens[end_idx_inclusive.min(self.tokens.len() - 1)];
        SourceSpan {
            start: start_tok.start,
            end: end_tok.end,
            line: start_tok.line,
            column: start_tok.column,
        }
    }

    fn single_token_span(&self, idx: usize) -> SourceSpan {
        let t = &self.tokens[idx];
        SourceSpan {
            start: t.start,
            end: t.end,
            line: t.line,
            column: t.column,
        }
    }

    /// Consumes `import`/`export` plus its URI, optional `as prefix`,
    /// `show`/`hide` clauses, up to the terminating `;`.
    fn parse_directive(&mut self, start: usize) -> (Directive, usize) {
        let is_export = self.ident_at(start) == Some("export");
        let mut idx = start + 1;
        let uri = match self.tokens.get(idx).map(|t| &t.kind) {
            Some(TokenKind::Str(lit)) => lit.plain_text().unwrap_or_default().to_string(),
            _ => String::new(),
        };
        idx += 1;

        let mut prefix = None;
        let mut shown = Vec::new();
        let mut hidden = Vec::new();

        while idx < self.tokens.len() && !self.is_symbol_at(idx, ';') {
            match self.ident_at(idx) {
                Some("as") => {
                    idx += 1;
                    if let Some(name) = self.ident_at(idx) {
                        prefix = Some(name.to_string());
                        idx += 1;
                    }
                }
                Some("show") => {
                    idx += 1;
                    let (names, next) = self.parse_name_list(idx);
                    shown = names;
                    idx = next;
                }
                Some("hide") => {
                    idx += 1;
                    let (names, next) = self.parse_name_list(idx);
                    hidden = names;
                    idx = next;
                }
                _ => idx += 1,
            }
        }
        let span = self.span_of(start, idx.min(self.tokens.len().saturating_sub(1)));
        idx += 1; // past ';'

        let directive = if is_export {
            Directive::Export {
                uri,
                shown,
                hidden,
                span,
            }
        } else {
            Directive::Import {
                uri,
                prefix,
                shown,
                hidden,
                span,
            }
        };
        (directive, idx)
    }

    fn parse_name_list(&self, start: usize) -> (Vec<String>, usize) {
        let mut idx = start;
        let mut names = Vec::new();
        loop {
            match self.ident_at(idx) {
                Some(name) => {
                    names.push(name.to_string());
                    idx += 1;
                }
                None => break,
            }
            if self.is_symbol_at(idx, ',') {
                idx += 1;
            } else {
                break;
            }
        }
        (names, idx)
    }

    /// Parses one declaration (container or leaf) starting at `idx`, bounded
    /// by `end`. Returns `(None, idx+1)` for constructs it cannot make sense
    /// of, so the outer loop always makes forward progress.
    fn parse_declaration(
        &mut self,
        idx: usize,
        end: usize,
        container_name: Option<&str>,
    ) -> (Option<Node>, usize) {
        if idx >= end {
            return (None, end);
        }
        let leading_start = idx;
        let mut cur = idx;
        let mut annotations = Vec::new();

        while cur < end && self.is_symbol_at(cur, '@') {
            cur += 1;
            if let Some(name) = self.ident_at(cur) {
                annotations.push(name.to_string());
                cur += 1;
            }
            if cur < end && self.is_symbol_at(cur, '(') {
                cur = self.skip_balanced(cur, '(', ')', end);
            }
        }

        let mut modifiers: Vec<&str> = Vec::new();
        while cur < end {
            match self.ident_at(cur) {
                Some(word) if CONTAINER_KEYWORDS.contains(&word) => break,
                Some(word) if MODIFIERS.contains(&word) => {
                    modifiers.push(word);
                    cur += 1;
                }
                _ => break,
            }
        }

        if let Some(keyword) = self.ident_at(cur) {
            if CONTAINER_KEYWORDS.contains(&keyword) {
                return self.parse_container(cur, end, leading_start, &modifiers, annotations);
            }
        }

        self.parse_leaf(cur, end, container_name, leading_start, &modifiers, annotations)
    }

    fn parse_container(
        &mut self,
        keyword_idx: usize,
        end: usize,
        leading_start: usize,
        modifiers: &[&str],
        annotations: Vec<String>,
    ) -> (Option<Node>, usize) {
        let keyword = self.ident_at(keyword_idx).unwrap_or("class").to_string();
        let mut idx = keyword_idx + 1;

        // `mixin class Name` collapses to a class-flavored mixin.
        if keyword == "mixin" && self.ident_at(idx) == Some("class") {
            idx += 1;
        }

        let (name, name_idx) = match self.ident_at(idx) {
            Some(n) => (n.to_string(), Some(idx)),
            None => ("<anonymous>".to_string(), None),
        };
        if let Some(ni) = name_idx {
            self.declared_name_tokens.push(ni);
            idx += 1;
        }

        let kind = match keyword.as_str() {
            "class" => NodeKind::Class,
            "mixin" => NodeKind::Mixin,
            "enum" => NodeKind::Enum,
            "extension" => NodeKind::Extension,
            _ => NodeKind::Typedef,
        };

        if kind == NodeKind::Typedef {
            idx = self.skip_generics(idx, end);
            while idx < end && !self.is_symbol_at(idx, ';') {
                idx += 1;
            }
            let span = self.span_of(leading_start, idx.min(end.saturating_sub(1)));
            let header_span = name_idx
                .map(|i| self.single_token_span(i))
                .unwrap_or(span);
            idx += 1;
            let node = Node {
                name,
                kind,
                span,
                header_span,
                annotations,
                is_static: modifiers.contains(&"static"),
                is_override: false,
                children: Vec::new(),
                body_tokens: (idx, idx),
            };
            return (Some(node), idx);
        }

        idx = self.skip_generics(idx, end);
        // Skip extends/with/implements/on header clauses up to the opening brace.
        let mut depth = 0i32;
        while idx < end {
            match self.tokens[idx].kind {
                TokenKind::Symbol('{') if depth == 0 => break,
                TokenKind::Symbol('(') | TokenKind::Symbol('[') => {
                    depth += 1;
                    idx += 1;
                }
                TokenKind::Symbol(')') | TokenKind::Symbol(']') => {
                    depth -= 1;
                    idx += 1;
                }
                TokenKind::Symbol('<') => {
                    depth += 1;
                    idx += 1;
                }
                TokenKind::Symbol('>') => {
                    if depth > 0 {
                        depth -= 1;
                    }
                    idx += 1;
                }
                _ => idx += 1,
            }
        }
        if idx >= end {
            // Unterminated container; bail out without a body.
            let span = self.span_of(leading_start, end.saturating_sub(1).max(leading_start));
            return (
                Some(Node {
                    name,
                    kind,
                    span,
                    header_span: span,
                    annotations,
                    is_static: false,
                    is_override: false,
                    children: Vec::new(),
                    body_tokens: (end, end),
                }),
                end,
            );
        }

        let body_open = idx;
        let body_close = self.matching_brace(body_open, end);

        let children = if kind == NodeKind::Enum {
            self.parse_enum_body(body_open + 1, body_close, &name)
        } else {
            self.parse_members_range(body_open + 1, body_close, &name)
        };

        let span = self.span_of(leading_start, body_close.min(end.saturating_sub(1)));
        let header_span = name_idx
            .map(|i| self.single_token_span(i))
            .unwrap_or(self.single_token_span(keyword_idx));

        let node = Node {
            name,
            kind,
            span,
            header_span,
            annotations,
            is_static: modifiers.contains(&"static"),
            is_override: false,
            children,
            body_tokens: (body_open + 1, body_close),
        };
        (Some(node), body_close + 1)
    }

    fn skip_generics(&self, idx: usize, end: usize) -> usize {
        if idx < end && self.is_symbol_at(idx, '<') {
            self.skip_balanced(idx, '<', '>', end)
        } else {
            idx
        }
    }

    /// Returns the index *past* the matching closer, given `idx` sits on `open`.
    fn skip_balanced(&self, idx: usize, open: char, close: char, end: usize) -> usize {
        let mut depth = 0i32;
        let mut i = idx;
        while i < end {
            match &self.tokens[i].kind {
                TokenKind::Symbol(c) if *c == open => depth += 1,
                TokenKind::Symbol(c) if *c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return i + 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        end
    }

    /// `idx` is the opening `{`; returns the index of the matching `}`.
    fn matching_brace(&self, idx: usize, end: usize) -> usize {
        let mut depth = 0i32;
        let mut i = idx;
        while i < end {
            match &self.tokens[i].kind {
                TokenKind::Symbol('{') => depth += 1,
                TokenKind::Symbol('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return i;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        end.saturating_sub(1)
    }

    fn parse_members_range(&mut self, start: usize, end: usize, container_name: &str) -> Vec<Node> {
        let mut idx = start;
        let mut members = Vec::new();
        while idx < end {
            let (node, next) = self.parse_declaration(idx, end, Some(container_name));
            idx = next.max(idx + 1);
            if let Some(node) = node {
                members.push(node);
            }
        }
        members
    }

    fn parse_enum_body(&mut self, start: usize, end: usize, enum_name: &str) -> Vec<Node> {
        let mut idx = start;
        let mut values_end = start;
        let mut depth = 0i32;
        while idx < end {
            match &self.tokens[idx].kind {
                TokenKind::Symbol(';') if depth == 0 => {
                    values_end = idx;
                    break;
                }
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                    depth += 1
                }
                TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                    depth -= 1
                }
                _ => {}
            }
            idx += 1;
        }
        if idx >= end {
            values_end = end;
        }

        let mut values = Vec::new();
        let mut seg_start = start;
        let mut d = 0i32;
        let mut i = start;
        while i <= values_end {
            let at_end = i == values_end;
            let is_comma = !at_end && self.is_symbol_at(i, ',') && d == 0;
            if at_end || is_comma {
                if seg_start < i {
                    if let Some(name_idx) = (seg_start..i).find(|&k| matches!(self.tokens[k].kind, TokenKind::Ident(_))) {
                        let name = self.ident_at(name_idx).unwrap().to_string();
                        self.declared_name_tokens.push(name_idx);
                        values.push(Node {
                            name,
                            kind: NodeKind::EnumValue,
                            span: self.span_of(seg_start, i.saturating_sub(1).max(seg_start)),
                            header_span: self.single_token_span(name_idx),
                            annotations: Vec::new(),
                            is_static: false,
                            is_override: false,
                            children: Vec::new(),
                            body_tokens: (seg_start, i),
                        });
                    }
                }
                seg_start = i + 1;
            } else if !at_end {
                match &self.tokens[i].kind {
                    TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                        d += 1
                    }
                    TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                        d -= 1
                    }
                    _ => {}
                }
            }
            i += 1;
        }

        if values_end < end {
            values.extend(self.parse_members_range(values_end + 1, end, enum_name));
        }
        values
    }

    fn parse_leaf(
        &mut self,
        idx: usize,
        end: usize,
        container_name: Option<&str>,
        leading_start: usize,
        modifiers: &[&str],
        annotations: Vec<String>,
    ) -> (Option<Node>, usize) {
        let is_override = annotations.iter().any(|a| a == "override");
        let is_static = modifiers.contains(&"static");

        if modifiers.contains(&"get") {
            return self.parse_accessor(
                idx,
                end,
                leading_start,
                annotations,
                is_static,
                is_override,
                NodeKind::Getter,
                false,
            );
        }
        if modifiers.contains(&"set") {
            return self.parse_accessor(
                idx,
                end,
                leading_start,
                annotations,
                is_static,
                is_override,
                NodeKind::Setter,
                true,
            );
        }

        // Scan forward for the first depth-0 terminator: `(`, `=`, or `;`.
        let mut depth = 0i32;
        let mut i = idx;
        let mut name_idx = None;
        while i < end {
            match &self.tokens[i].kind {
                TokenKind::Ident(_) if depth == 0 => name_idx = Some(i),
                TokenKind::Symbol('(') if depth == 0 => break,
                TokenKind::Symbol('=') if depth == 0 => break,
                TokenKind::Symbol(';') if depth == 0 => break,
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                    depth += 1
                }
                TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                    depth -= 1
                }
                TokenKind::Symbol('<') => depth += 1,
                TokenKind::Symbol('>') => {
                    if depth > 0 {
                        depth -= 1
                    }
                }
                _ => {}
            }
            i += 1;
        }

        let Some(name_idx) = name_idx else {
            return (None, (idx + 1).min(end));
        };
        let bare_name = self.ident_at(name_idx).unwrap().to_string();

        if i < end && self.is_symbol_at(i, '(') {
            self.declared_name_tokens.push(name_idx);
            let paren_open = i;
            let paren_close = self.skip_balanced(paren_open, '(', ')', end) - 1;

            let is_ctor = container_name
                .map(|cn| self.looks_like_constructor(cn, name_idx))
                .unwrap_or(false);
            // A named constructor (`Container.named(`) is stored under its
            // qualified `Container.named` name; a plain method/function or
            // the unnamed constructor keeps its bare identifier.
            let name = if is_ctor && name_idx >= 2 && self.is_symbol_at(name_idx - 1, '.') {
                format!("{}.{bare_name}", self.ident_at(name_idx - 2).unwrap_or(""))
            } else {
                bare_name.clone()
            };

            let children =
                self.extract_parameters(paren_open + 1, paren_close, container_name, &name);

            let mut j = paren_close + 1;
            // Skip constructor initializer lists and async modifiers before the body.
            while j < end {
                match &self.tokens[j].kind {
                    TokenKind::Symbol(':') if is_ctor => {
                        j += 1;
                        let mut d2 = 0i32;
                        while j < end {
                            match &self.tokens[j].kind {
                                TokenKind::Symbol('{') if d2 == 0 => break,
                                TokenKind::Symbol(';') if d2 == 0 => break,
                                TokenKind::Symbol('(') | TokenKind::Symbol('[') => d2 += 1,
                                TokenKind::Symbol(')') | TokenKind::Symbol(']') => d2 -= 1,
                                _ => {}
                            }
                            j += 1;
                        }
                        break;
                    }
                    TokenKind::Ident(w) if w == "async" || w == "sync" => {
                        j += 1;
                        if j < end && self.is_symbol_at(j, '*') {
                            j += 1;
                        }
                    }
                    _ => break,
                }
            }

            let (body_range, close_idx) = self.consume_body(j, end);
            let span = self.span_of(leading_start, close_idx.min(end.saturating_sub(1)));
            let kind = if is_ctor {
                NodeKind::Constructor
            } else if container_name.is_some() {
                NodeKind::Method
            } else {
                NodeKind::TopLevelFunction
            };
            let node = Node {
                name,
                kind,
                span,
                header_span: self.single_token_span(name_idx),
                annotations,
                is_static,
                is_override,
                children,
                body_tokens: body_range,
            };
            return (Some(node), close_idx + 1);
        }

        // Field / top-level variable.
        self.declared_name_tokens.push(name_idx);
        let mut j = i;
        if j < end && self.is_symbol_at(j, '=') {
            let mut d3 = 0i32;
            while j < end {
                match &self.tokens[j].kind {
                    TokenKind::Symbol(';') if d3 == 0 => break,
                    TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                        d3 += 1
                    }
                    TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                        d3 -= 1
                    }
                    _ => {}
                }
                j += 1;
            }
        }
        let semi_idx = j.min(end.saturating_sub(1));
        let span = self.span_of(leading_start, semi_idx);
        let node = Node {
            name,
            kind: NodeKind::Field,
            span,
            header_span: self.single_token_span(name_idx),
            annotations,
            is_static,
            is_override,
            children: Vec::new(),
            body_tokens: (i, j),
        };
        (Some(node), j + 1)
    }

    fn looks_like_constructor(&self, container_name: &str, name_idx: usize) -> bool {
        if self.ident_at(name_idx) == Some(container_name) {
            return true;
        }
        // `Container.named(`
        name_idx >= 2
            && self.is_symbol_at(name_idx - 1, '.')
            && self.ident_at(name_idx - 2) == Some(container_name)
    }

    fn parse_accessor(
        &mut self,
        idx: usize,
        end: usize,
        leading_start: usize,
        annotations: Vec<String>,
        is_static: bool,
        is_override: bool,
        kind: NodeKind,
        has_params: bool,
    ) -> (Option<Node>, usize) {
        let Some(name) = self.ident_at(idx) else {
            return (None, (idx + 1).min(end));
        };
        let name = name.to_string();
        self.declared_name_tokens.push(idx);
        let mut j = idx + 1;
        let mut children = Vec::new();
        if has_params && j < end && self.is_symbol_at(j, '(') {
            let close = self.skip_balanced(j, '(', ')', end) - 1;
            children = self.extract_parameters(j + 1, close, None, &name);
            j = close + 1;
        }
        let (body_range, close_idx) = self.consume_body(j, end);
        let span = self.span_of(leading_start, close_idx.min(end.saturating_sub(1)));
        let node = Node {
            name,
            kind,
            span,
            header_span: self.single_token_span(idx),
            annotations,
            is_static,
            is_override,
            children,
            body_tokens: body_range,
        };
        (Some(node), close_idx + 1)
    }

    /// Consumes an arrow-expression body, a block body, or a bare `;`
    /// (abstract/external declarations). Returns the body's token range and
    /// the index of the terminating token.
    fn consume_body(&self, idx: usize, end: usize) -> ((usize, usize), usize) {
        if idx >= end {
            return ((idx, idx), idx.min(end.saturating_sub(1)));
        }
        match &self.tokens[idx].kind {
            TokenKind::Arrow => {
                let mut d = 0i32;
                let mut i = idx + 1;
                while i < end {
                    match &self.tokens[i].kind {
                        TokenKind::Symbol(';') if d == 0 => break,
                        TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                            d += 1
                        }
                        TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                            d -= 1
                        }
                        _ => {}
                    }
                    i += 1;
                }
                ((idx + 1, i), i.min(end.saturating_sub(1)))
            }
            TokenKind::Symbol('{') => {
                let close = self.matching_brace(idx, end);
                ((idx + 1, close), close)
            }
            _ => ((idx, idx), idx.min(end.saturating_sub(1))),
        }
    }

    /// Extracts parameter names for diagnostics/reporting purposes and
    /// flags default values that look like asset paths (used by the
    /// generated-accessor scanner, C5).
    fn extract_parameters(
        &mut self,
        start: usize,
        end: usize,
        _container_name: Option<&str>,
        _owner: &str,
    ) -> Vec<Node> {
        let mut params = Vec::new();
        let mut depth = 0i32;
        let mut seg_start = start;
        let mut i = start;
        while i <= end {
            let at_end = i == end;
            let is_comma = !at_end && self.is_symbol_at(i, ',') && depth == 0;
            if at_end || is_comma {
                if seg_start < i {
                    if let Some(p) = self.parameter_from_segment(seg_start, i) {
                        params.push(p);
                    }
                }
                seg_start = i + 1;
            } else if !at_end {
                match &self.tokens[i].kind {
                    TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                        depth += 1
                    }
                    TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                        depth -= 1
                    }
                    _ => {}
                }
            }
            i += 1;
        }
        params
    }

    fn parameter_from_segment(&mut self, start: usize, end: usize) -> Option<Node> {
        // Last identifier before a depth-0 `=` (or the segment end) is the
        // parameter name; `this.x` / `super.x` contribute `x`.
        let mut depth = 0i32;
        let mut last_ident = None;
        let mut default_start = None;
        for i in start..end {
            match &self.tokens[i].kind {
                TokenKind::Ident(_) if depth == 0 => last_ident = Some(i),
                TokenKind::Symbol('=') if depth == 0 => {
                    default_start = Some(i + 1);
                    break;
                }
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                    depth += 1
                }
                TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                    depth -= 1
                }
                _ => {}
            }
        }
        let name_idx = last_ident?;
        self.declared_name_tokens.push(name_idx);
        let name = self.ident_at(name_idx)?.to_string();
        Some(Node {
            name,
            kind: NodeKind::Parameter,
            span: self.span_of(start, end.saturating_sub(1).max(start)),
            header_span: self.single_token_span(name_idx),
            annotations: Vec::new(),
            is_static: false,
            is_override: false,
            children: Vec::new(),
            body_tokens: default_start.map(|d| (d, end)).unwrap_or((end, end)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(src: &str) -> ParsedFile {
        parse_file(&PathBuf::from("test.dart"), src).unwrap()
    }

    #[test]
    fn parses_simple_class_with_members() {
        let pf = parse(
            r#"
            class Foo {
              final String name;
              int get length => name.length;
              void greet() { print(name); }
            }
            "#,
        );
        assert_eq!(pf.nodes.len(), 1);
        let class = &pf.nodes[0];
        assert_eq!(class.kind, NodeKind::Class);
        assert_eq!(class.name, "Foo");
        let kinds: Vec<_> = class.children.iter().map(|c| (c.kind, c.name.clone())).collect();
        assert!(kinds.contains(&(NodeKind::Field, "name".to_string())));
        assert!(kinds.contains(&(NodeKind::Getter, "length".to_string())));
        assert!(kinds.contains(&(NodeKind::Method, "greet".to_string())));
    }

    #[test]
    fn parses_import_with_prefix_and_show() {
        let pf = parse("import 'package:flutter/material.dart' as m show Widget, State;");
        assert_eq!(pf.directives.len(), 1);
        match &pf.directives[0] {
            Directive::Import {
                uri,
                prefix,
                shown,
                ..
            } => {
                assert_eq!(uri, "package:flutter/material.dart");
                assert_eq!(prefix.as_deref(), Some("m"));
                assert_eq!(shown, &vec!["Widget".to_string(), "State".to_string()]);
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn parses_constructor_and_named_constructor() {
        let pf = parse(
            r#"
            class Point {
              final double x;
              final double y;
              Point(this.x, this.y);
              const Point.origin() : x = 0, y = 0;
            }
            "#,
        );
        let class = &pf.nodes[0];
        let ctor_names: Vec<_> = class
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Constructor)
            .map(|c| c.name.clone())
            .collect();
        assert!(ctor_names.contains(&"Point".to_string()));
        assert!(ctor_names.contains(&"Point.origin".to_string()));
    }

    #[test]
    fn parses_enum_with_values_and_methods() {
        let pf = parse(
            r#"
            enum Color {
              red, green, blue;
              String get label => name;
            }
            "#,
        );
        let e = &pf.nodes[0];
        assert_eq!(e.kind, NodeKind::Enum);
        let value_names: Vec<_> = e
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::EnumValue)
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(value_names, vec!["red", "green", "blue"]);
        assert!(e.children.iter().any(|c| c.kind == NodeKind::Getter));
    }

    #[test]
    fn parses_extension_and_typedef() {
        let pf = parse(
            r#"
            extension StringX on String {
              bool get isBlank => trim().isEmpty;
            }
            typedef JsonMap = Map<String, dynamic>;
            "#,
        );
        assert_eq!(pf.nodes[0].kind, NodeKind::Extension);
        assert_eq!(pf.nodes[0].name, "StringX");
        assert_eq!(pf.nodes[1].kind, NodeKind::Typedef);
        assert_eq!(pf.nodes[1].name, "JsonMap");
    }
}
