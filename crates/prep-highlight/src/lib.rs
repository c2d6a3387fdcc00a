//! Heuristic language detection for untagged code samples.
//!
//! Authored content ships code inside Markdown fences, not all of them
//! tagged with a language. [`tag_untagged_blocks`] fills in the missing
//! tags using [`sniff`], an ordered keyword classifier, so the downstream
//! syntax highlighter has something to work with. This is cosmetic
//! enrichment: a wrong guess miscolors a block, it never changes content.

/// The closed set of languages the classifier can produce.
///
/// Only its consumer (the highlighter) cares about these, so the set is
/// deliberately small; anything unrecognized lands on the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Sql,
    Shell,
    /// Default for anything the heuristics do not recognize.
    #[default]
    JavaScript,
}

impl Language {
    /// The Markdown fence info-string token for this language.
    pub fn token(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Sql => "sql",
            Self::Shell => "sh",
            Self::JavaScript => "js",
        }
    }
}

/// Classify a code fragment by ordered keyword heuristics.
///
/// Order matters: Python markers are checked before SQL, SQL before
/// shell, and everything else defaults to JavaScript.
pub fn sniff(code: &str) -> Language {
    if looks_like_python(code) {
        return Language::Python;
    }
    if looks_like_sql(code) {
        return Language::Sql;
    }
    if looks_like_shell(code) {
        return Language::Shell;
    }
    Language::JavaScript
}

fn looks_like_python(code: &str) -> bool {
    if code.contains("def ") {
        return true;
    }
    // `import` alone is ambiguous (ES modules import too); pair it with a
    // block-opening colon, which JavaScript never ends a line with.
    code.contains("import ")
        && code
            .lines()
            .any(|line| line.trim_end().ends_with(':') && !line.trim_start().starts_with("//"))
}

fn looks_like_sql(code: &str) -> bool {
    let upper = code.to_uppercase();
    ["SELECT ", "INSERT INTO ", "CREATE TABLE ", "UPDATE ", "DELETE FROM "]
        .iter()
        .any(|kw| upper.contains(kw))
}

fn looks_like_shell(code: &str) -> bool {
    code.starts_with("#!")
        || code.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with("$ ")
                || line.starts_with("echo ")
                || line.starts_with("curl ")
                || line.starts_with("cd ")
                || line.starts_with("export ")
        })
}

/// Insert a sniffed language token into every fence that lacks one.
///
/// Fences that already carry an info string, and all text outside fences,
/// pass through unchanged. Both ``` and ~~~ fences are handled; the
/// closing fence must match the opening marker.
pub fn tag_untagged_blocks(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + 16);
    let mut lines = markdown.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        let marker = if trimmed.starts_with("```") {
            "```"
        } else if trimmed.starts_with("~~~") {
            "~~~"
        } else {
            out.push_str(line);
            out.push('\n');
            continue;
        };

        let info = trimmed[marker.len()..].trim();
        let indent = &line[..line.len() - trimmed.len()];

        // Collect the block body up to the matching closing fence.
        let mut body = String::new();
        let mut closing: Option<&str> = None;
        for inner in lines.by_ref() {
            if inner.trim_start().starts_with(marker) && inner.trim().len() == marker.len() {
                closing = Some(inner);
                break;
            }
            body.push_str(inner);
            body.push('\n');
        }

        if info.is_empty() {
            out.push_str(indent);
            out.push_str(marker);
            out.push_str(sniff(&body).token());
        } else {
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&body);
        if let Some(close) = closing {
            out.push_str(close);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_wins_over_sql() {
        // A Python script embedding SQL text still classifies as Python.
        let code = "def load():\n    run(\"SELECT * FROM t\")\n";
        assert_eq!(sniff(code), Language::Python);
    }

    #[test]
    fn import_needs_a_colon_line() {
        assert_eq!(sniff("import { a } from './a';\n"), Language::JavaScript);
        assert_eq!(
            sniff("import functools\n\nclass A:\n    pass\n"),
            Language::Python
        );
    }

    #[test]
    fn sql_is_case_insensitive() {
        assert_eq!(sniff("select id from users;"), Language::Sql);
        assert_eq!(sniff("CREATE TABLE t (id INT);"), Language::Sql);
    }

    #[test]
    fn shell_markers() {
        assert_eq!(sniff("#!/bin/sh\nls -la\n"), Language::Shell);
        assert_eq!(sniff("$ cargo build --release"), Language::Shell);
    }

    #[test]
    fn default_is_javascript() {
        assert_eq!(sniff("const x = [];"), Language::JavaScript);
        assert_eq!(sniff(""), Language::JavaScript);
    }

    #[test]
    fn tags_untagged_fence() {
        let input = "intro\n\n```\ndef f():\n    pass\n```\n";
        let tagged = tag_untagged_blocks(input);
        assert!(tagged.contains("```python\n"), "got: {tagged}");
        assert!(tagged.contains("def f():\n"));
    }

    #[test]
    fn leaves_tagged_fence_alone() {
        let input = "```rust\nfn main() {}\n```\n";
        assert_eq!(tag_untagged_blocks(input), input);
    }

    #[test]
    fn text_outside_fences_is_untouched() {
        let input = "plain ```not a fence mid-line\nmore text\n";
        assert_eq!(tag_untagged_blocks(input), input);
    }

    #[test]
    fn multiple_blocks_sniffed_independently() {
        let input = "```\nselect 1;\n```\n\n```\nconst a = 1;\n```\n";
        let tagged = tag_untagged_blocks(input);
        assert!(tagged.contains("```sql\n"));
        assert!(tagged.contains("```js\n"));
    }
}
