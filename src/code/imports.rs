//! Builds [`ImportDirective`] records and observes
//! each directive's usage from the same file's reference set.

use std::path::Path;

use super::model::{ImportDirective, Location, ReferenceSet, UriKind};
use crate::parser::ast::Directive;

pub fn collect_imports(directives: &[Directive], refs: &ReferenceSet, file: &Path) -> Vec<ImportDirective> {
    directives
        .iter()
        .map(|directive| build(directive, refs, file))
        .collect()
}

fn build(directive: &Directive, refs: &ReferenceSet, file: &Path) -> ImportDirective {
    let span = directive.span();
    let (uri, is_export, prefix, shown, hidden) = match directive {
        Directive::Import {
            uri,
            prefix,
            shown,
            hidden,
            ..
        } => (uri.clone(), false, prefix.clone(), shown.clone(), hidden.clone()),
        Directive::Export {
            uri, shown, hidden, ..
        } => (uri.clone(), true, None, shown.clone(), hidden.clone()),
    };

    let kind = ImportDirective::classify_uri(&uri);
    let owning_package = if kind == UriKind::Package {
        ImportDirective::package_name(&uri)
    } else {
        None
    };

    let used = match &prefix {
        Some(p) => refs.contains_name(p),
        None if !shown.is_empty() => shown.iter().any(|name| refs.contains_name(name)),
        None => true,
    };

    ImportDirective {
        uri,
        is_export,
        prefix,
        shown,
        hidden,
        kind,
        owning_package,
        file: file.to_path_buf(),
        location: Location {
            line: span.line,
            column: span.column,
        },
        delete_range: (span.start, span.end),
        used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::references;
    use crate::parser::parse_file;
    use std::path::PathBuf;

    #[test]
    fn prefixed_import_used_iff_prefix_referenced() {
        let src = "import 'package:flutter/material.dart' as m;\nvoid f() { m.Widget(); }";
        let parsed = parse_file(&PathBuf::from("f.dart"), src).unwrap();
        let refs = references::collect_references(&parsed);
        let imports = collect_imports(&parsed.directives, &refs, &parsed.path);
        assert!(imports[0].used);
    }

    #[test]
    fn shown_names_import_unused_when_name_never_referenced() {
        let src = "import 'package:flutter/material.dart' show Widget;\nvoid f() {}";
        let parsed = parse_file(&PathBuf::from("f.dart"), src).unwrap();
        let refs = references::collect_references(&parsed);
        let imports = collect_imports(&parsed.directives, &refs, &parsed.path);
        assert!(!imports[0].used);
    }

    #[test]
    fn bare_import_with_no_prefix_or_shown_is_conservatively_used() {
        let src = "import 'package:flutter/material.dart';\nvoid f() {}";
        let parsed = parse_file(&PathBuf::from("f.dart"), src).unwrap();
        let refs = references::collect_references(&parsed);
        let imports = collect_imports(&parsed.directives, &refs, &parsed.path);
        assert!(imports[0].used);
    }
}
