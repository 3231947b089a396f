//! Data model for the code analyzer: [`CodeElement`], [`ReferenceSet`],
//! [`ImportDirective`] and [`CodeIssue`].

use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::parser::ast::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Class,
    Mixin,
    Extension,
    Enum,
    EnumValue,
    Typedef,
    TopLevelFunction,
    Method,
    Getter,
    Setter,
    Field,
    Constructor,
    Parameter,
}

impl From<NodeKind> for ElementKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Class => ElementKind::Class,
            NodeKind::Mixin => ElementKind::Mixin,
            NodeKind::Extension => ElementKind::Extension,
            NodeKind::Enum => ElementKind::Enum,
            NodeKind::EnumValue => ElementKind::EnumValue,
            NodeKind::Typedef => ElementKind::Typedef,
            NodeKind::TopLevelFunction => ElementKind::TopLevelFunction,
            NodeKind::Method => ElementKind::Method,
            NodeKind::Getter => ElementKind::Getter,
            NodeKind::Setter => ElementKind::Setter,
            NodeKind::Field => ElementKind::Field,
            NodeKind::Constructor => ElementKind::Constructor,
            NodeKind::Parameter => ElementKind::Parameter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A declared symbol collected during the declaration pass.
#[derive(Debug, Clone)]
pub struct CodeElement {
    pub name: String,
    pub kind: ElementKind,
    pub file: PathBuf,
    pub package: String,
    pub location: Location,
    /// Byte range used by the auto-fixer; spans leading annotations through
    /// the final closing token.
    pub delete_range: (usize, usize),
    pub parent: Option<String>,
    pub annotations: Vec<String>,
    pub is_public: bool,
    pub is_static: bool,
    pub is_override: bool,
}

impl CodeElement {
    /// `package::file::qualified-name` identity used to key the global index.
    pub fn identity(&self) -> String {
        let qualified = match &self.parent {
            Some(p) => format!("{p}.{}", self.name),
            None => self.name.clone(),
        };
        format!("{}::{}::{}", self.package, self.file.display(), qualified)
    }
}

/// Per-file referenced names, collected during the reference pass.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub identifiers: FxHashSet<String>,
    pub types: FxHashSet<String>,
}

impl ReferenceSet {
    pub fn contains_name(&self, name: &str) -> bool {
        self.identifiers.contains(name) || self.types.contains(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriKind {
    Sdk,
    Package,
    Relative,
}

/// An `import`/`export` directive.
#[derive(Debug, Clone)]
pub struct ImportDirective {
    pub uri: String,
    pub is_export: bool,
    pub prefix: Option<String>,
    pub shown: Vec<String>,
    pub hidden: Vec<String>,
    pub kind: UriKind,
    pub owning_package: Option<String>,
    pub file: PathBuf,
    pub location: Location,
    pub delete_range: (usize, usize),
    pub used: bool,
}

impl ImportDirective {
    pub fn classify_uri(uri: &str) -> UriKind {
        if uri.starts_with("dart:") {
            UriKind::Sdk
        } else if uri.starts_with("package:") {
            UriKind::Package
        } else {
            UriKind::Relative
        }
    }

    pub fn package_name(uri: &str) -> Option<String> {
        uri.strip_prefix("package:")
            .and_then(|rest| rest.split('/').next())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Descending order for report sorting: error, warning, info.
    pub fn sort_rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeIssue {
    pub category: String,
    pub severity: Severity,
    pub symbol: String,
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub suggestion: Option<String>,
    pub auto_fixable: bool,
    #[serde(skip)]
    pub delete_range: Option<(usize, usize)>,
}

impl CodeIssue {
    pub fn sort_key(&self) -> (u8, String, String, usize, usize, String) {
        (
            self.severity.sort_rank(),
            self.category.clone(),
            self.file.display().to_string(),
            self.line,
            self.column,
            self.symbol.clone(),
        )
    }
}
