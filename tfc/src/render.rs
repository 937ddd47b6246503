//! Tree rendering for template listings

use colored::*;

use crate::error::TfcError;
use crate::index::{Category, TemplateIndex};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Render every category and its templates below `root_label`
pub fn render_all(index: &TemplateIndex, root_label: &str) -> String {
    let mut lines = vec![format!("{}/", root_label).bold().to_string()];

    let total = index.len();
    for (i, category) in index.categories().enumerate() {
        let is_last_category = i + 1 == total;
        lines.push(format!(
            "{}{}",
            connector(is_last_category),
            format!("{}/", category.name).bold()
        ));
        let indent = if is_last_category { SPACE_INDENT } else { PIPE_INDENT };
        push_entries(&mut lines, category, indent);
    }

    lines.join("\n")
}

/// Render a single category, or fail if `name` is not indexed
pub fn render_category(index: &TemplateIndex, root_label: &str, name: &str) -> Result<String, TfcError> {
    let category = index
        .category(name)
        .ok_or_else(|| TfcError::CategoryNotFound { name: name.to_string() })?;

    let mut lines = vec![format!("{}/{}/", root_label, category.name).bold().to_string()];
    push_entries(&mut lines, category, "");
    Ok(lines.join("\n"))
}

fn push_entries(lines: &mut Vec<String>, category: &Category, indent: &str) {
    let total = category.len();
    for (j, entry) in category.entries.values().enumerate() {
        lines.push(format!(
            "{}{}{}\t({})",
            indent,
            connector(j + 1 == total),
            entry.filename.bright_blue(),
            entry.detected_type
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::tests::{sample_root, text_probe};
    use serial_test::serial;
    use std::fs;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    #[serial]
    fn test_render_all_layout() {
        plain();
        let root = sample_root();
        let index = TemplateIndex::build(root.path(), &text_probe).unwrap();

        let out = render_all(&index, "~/Templates");
        let expected = "\
~/Templates/
├── A/
│   ├── f1\t(text/plain)
│   └── f2\t(text/plain)
└── B/
    └── f3\t(text/plain)";
        assert_eq!(out, expected);
    }

    #[test]
    #[serial]
    fn test_render_all_lists_each_file_once() {
        plain();
        let root = sample_root();
        let index = TemplateIndex::build(root.path(), &text_probe).unwrap();

        let out = render_all(&index, "~/Templates");
        for name in ["A/", "B/", "f1\t", "f2\t", "f3\t"] {
            assert_eq!(out.matches(name).count(), 1, "{name} should appear once");
        }
    }

    #[test]
    #[serial]
    fn test_render_all_empty_last_category() {
        plain();
        let root = sample_root();
        fs::create_dir(root.path().join("C")).unwrap();
        let index = TemplateIndex::build(root.path(), &text_probe).unwrap();

        let out = render_all(&index, "~/Templates");
        assert!(out.contains("├── B/\n│   └── f3"));
        assert!(out.ends_with("└── C/"));
    }

    #[test]
    #[serial]
    fn test_render_category() {
        plain();
        let root = sample_root();
        let index = TemplateIndex::build(root.path(), &text_probe).unwrap();

        let out = render_category(&index, "~/Templates", "A").unwrap();
        assert_eq!(out, "~/Templates/A/\n├── f1\t(text/plain)\n└── f2\t(text/plain)");
    }

    #[test]
    fn test_render_unknown_category() {
        let root = sample_root();
        let index = TemplateIndex::build(root.path(), &text_probe).unwrap();

        let err = render_category(&index, "~/Templates", "Z").unwrap_err();
        assert!(matches!(err, TfcError::CategoryNotFound { name } if name == "Z"));
    }
}
