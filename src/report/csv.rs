//! CSV reporter (code): hand-rolled RFC-4180 quoting, no `csv` crate — the
//! corpus has no example pulling one in for a handful of fixed columns.

use crate::code::model::CodeIssue;

const HEADER: &str = "category,severity,symbol,file,line,column,message,suggestion";

pub fn render(issues: &[CodeIssue]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for issue in issues {
        let fields = [
            issue.category.as_str(),
            severity_text(issue.severity),
            issue.symbol.as_str(),
            &issue.file.display().to_string(),
            &issue.line.to_string(),
            &issue.column.to_string(),
            issue.message.as_str(),
            issue.suggestion.as_deref().unwrap_or(""),
        ];
        out.push_str(&fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(","));
        out.push('\n');
    }
    out
}

fn severity_text(severity: crate::code::model::Severity) -> &'static str {
    match severity {
        crate::code::model::Severity::Error => "error",
        crate::code::model::Severity::Warning => "warning",
        crate::code::model::Severity::Info => "info",
    }
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
