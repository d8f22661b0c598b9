//! `dropgate classify <ext>` – show the full classification of an extension.

use anyhow::Result;
use dropgate_core::{BuiltinRegistry, Classification, ContentClassifier};

pub fn run_classify(registry: &BuiltinRegistry, ext: &str, json: bool) -> Result<()> {
    let report = ContentClassifier::new(registry).classify(ext);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

fn render(report: &Classification) -> String {
    let extension = if report.extension.is_empty() {
        "(none)"
    } else {
        report.extension.as_str()
    };
    let rows = [
        ("extension", extension.to_string()),
        ("mime", report.mime.clone()),
        (
            "language",
            report.language.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("text", yes_no(report.text)),
        ("image", yes_no(report.image)),
        ("resizable image", yes_no(report.resizable_image)),
        ("html", yes_no(report.html)),
        ("css", yes_no(report.css)),
        ("markdown", yes_no(report.markdown)),
        ("needs rewriting", yes_no(report.needs_rewriting)),
        ("archive", yes_no(report.archive)),
        ("size category", report.size_category.as_str().to_string()),
    ];
    rows.iter()
        .map(|(key, value)| format!("{:<16} {}\n", key, value))
        .collect()
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "yes" } else { "no" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_markdown() {
        let reg = BuiltinRegistry::new();
        let out = render(&ContentClassifier::new(&reg).classify("MD"));
        assert!(out.contains("extension        .md\n"));
        assert!(out.contains("mime             text/html\n"));
        assert!(out.contains("language         markdown\n"));
        assert!(out.contains("needs rewriting  no\n"));
    }

    #[test]
    fn render_unknown() {
        let reg = BuiltinRegistry::new();
        let out = render(&ContentClassifier::new(&reg).classify(""));
        assert!(out.contains("extension        (none)\n"));
        assert!(out.contains("language         -\n"));
        assert!(out.contains("size category    regular\n"));
    }
}
