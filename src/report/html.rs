//! HTML reporter (code only): a self-contained document with grouped tables
//! per category and totals.

use std::collections::BTreeMap;

use crate::code::model::{CodeIssue, Severity};

pub fn render(issues: &[CodeIssue]) -> String {
    let mut by_category: BTreeMap<&str, Vec<&CodeIssue>> = BTreeMap::new();
    for issue in issues {
        by_category.entry(issue.category.as_str()).or_default().push(issue);
    }

    let mut body = String::new();
    for (category, group) in &by_category {
        body.push_str(&format!("<h2>{} ({})</h2>\n", escape(category), group.len()));
        body.push_str("<table>\n<tr><th>Severity</th><th>Symbol</th><th>File</th><th>Line</th><th>Message</th></tr>\n");
        for issue in group {
            body.push_str(&format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                severity_class(issue.severity),
                severity_class(issue.severity),
                escape(&issue.symbol),
                escape(&issue.file.display().to_string()),
                issue.line,
                escape(&issue.message),
            ));
        }
        body.push_str("</table>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Unused Code Analysis</title>\n<style>\nbody {{ font-family: sans-serif; margin: 2rem; }}\ntable {{ border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }}\ntd, th {{ border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }}\n.error {{ background: #fdecea; }}\n.warning {{ background: #fff8e1; }}\n.info {{ background: #eef6ff; }}\n</style>\n</head>\n<body>\n<h1>Unused Code Analysis</h1>\n<p>{total} issue(s) across {categories} categories.</p>\n{body}</body>\n</html>\n",
        total = issues.len(),
        categories = by_category.len(),
        body = body,
    )
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_title_and_groups_by_category() {
        let issue = CodeIssue {
            category: "unused-class".to_string(),
            severity: Severity::Warning,
            symbol: "Foo".to_string(),
            file: PathBuf::from("foo.dart"),
            line: 1,
            column: 1,
            message: "never referenced".to_string(),
            suggestion: None,
            auto_fixable: true,
            delete_range: None,
        };
        let html = render(&[issue]);
        assert!(html.contains("Unused Code Analysis"));
        assert!(html.contains("unused-class"));
        assert!(html.contains("1 issue(s)"));
    }
}
