//! HTML rendering
//!
//! Two page kinds are produced:
//!
//! | Page | Writer | Content |
//! |------|--------|---------|
//! | `index.html` | [`write_index`] | title, heading, one list item per term |
//! | `<term>.html` | [`write_term_page`] | term heading, linked definition, link back to the index |
//!
//! Output is written line by line to any [`std::io::Write`], so callers decide
//! whether it lands in a file or a buffer. Terms and definitions are escaped
//! before they reach the markup and every link uses [`page_file_name`], the
//! same name the publisher writes the page under.

mod escape;
mod index;
mod page;

pub use escape::escape_html;
pub use index::write_index;
pub use page::write_term_page;

use glossary_config::GlossaryConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// File name of the index page.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Characters that cannot appear in a page file name on common filesystems,
/// plus `_`, which introduces an escape.
static ESCAPED_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[_/\\:*?"<>|\x00-\x1f\x7f]"#).expect("valid file name pattern"));

/// Text used around the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Title and top heading of the index page.
    pub index_title: String,
    /// Heading above the term list.
    pub index_heading: String,
    /// Font colour of the term heading on each page.
    pub term_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            index_title: "Glossary".to_string(),
            index_heading: "Index".to_string(),
            term_color: "red".to_string(),
        }
    }
}

impl From<&GlossaryConfig> for RenderOptions {
    fn from(config: &GlossaryConfig) -> Self {
        Self {
            index_title: config.index.title.clone(),
            index_heading: config.index.heading.clone(),
            term_color: config.page.term_color.clone(),
        }
    }
}

/// Name of the file holding the page for `term`.
///
/// Unsafe characters and `_` itself are written as `_` followed by two
/// uppercase hex digits (`a/b` → `a_2Fb`, `a_b` → `a_5Fb`). Stems that would
/// clash with the index or name a directory get their first character escaped
/// the same way (`index` → `_69ndex`). Every `_` in a name starts an escape,
/// so distinct terms always get distinct names.
pub fn page_file_name(term: &str) -> String {
    let stem = ESCAPED_FILE_CHARS.replace_all(term, |caps: &Captures| hex_escape(&caps[0]));
    match stem.as_ref() {
        "" => "_.html".to_string(),
        "." | ".." | "index" => {
            let (first, rest) = stem.split_at(1);
            format!("{}{}.html", hex_escape(first), rest)
        }
        _ => format!("{}.html", stem),
    }
}

/// `_` plus the hex code of each (ASCII) character of `chars`.
fn hex_escape(chars: &str) -> String {
    chars.chars().map(|c| format!("_{:02X}", c as u32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("cat", "cat.html")]
    #[case("Cat", "Cat.html")]
    #[case("ice cream", "ice cream.html")]
    #[case("and/or", "and_2For.html")]
    #[case(r"C:\temp", "C_3A_5Ctemp.html")]
    #[case("what?", "what_3F.html")]
    #[case("snake_case", "snake_5Fcase.html")]
    #[case("<b>", "_3Cb_3E.html")]
    #[case(".", "_2E.html")]
    #[case("..", "_2E..html")]
    #[case("index", "_69ndex.html")]
    #[case("_index", "_5Findex.html")]
    #[case("Index", "Index.html")]
    #[case("café", "café.html")]
    #[case("", "_.html")]
    fn file_names_are_escaped(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(page_file_name(term), expected);
    }

    #[test]
    fn terms_that_differ_only_in_escaped_characters_get_distinct_names() {
        let terms = [
            "a/b", "a_b", "a_2Fb", "index", "_index", "_69ndex", "what?", "what_", ".", "_2E", "",
            "_",
        ];
        let names: HashSet<String> = terms.iter().map(|t| page_file_name(t)).collect();
        assert_eq!(names.len(), terms.len());
        assert!(!names.contains(INDEX_FILE_NAME));
    }

    #[test]
    fn options_follow_config() {
        let config = glossary_config::Loader::new()
            .set_override("index.title", "Terms")
            .expect("override to apply")
            .build()
            .expect("config to build");

        let options = RenderOptions::from(&config);
        assert_eq!(options.index_title, "Terms");
        assert_eq!(options.index_heading, "Index");
        assert_eq!(options.term_color, "red");
    }
}
