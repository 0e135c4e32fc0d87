use super::escape::escape_html;
use super::{page_file_name, RenderOptions, INDEX_FILE_NAME};
use crate::glossary::entries::Glossary;
use crate::glossary::tokenizing::{tokenize, SeparatorSet};
use std::io::{self, Write};

/// Write the page for one term.
///
/// The definition is scanned into word and separator runs; every run that is
/// exactly a term of `glossary` becomes a link to that term's page, the rest
/// is copied as text. An empty definition gives an empty block quote.
pub fn write_term_page<W: Write>(
    out: &mut W,
    term: &str,
    definition: &str,
    glossary: &Glossary,
    separators: &SeparatorSet,
    options: &RenderOptions,
) -> io::Result<()> {
    let escaped_term = escape_html(term);

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", escaped_term)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>")?;
    writeln!(out, "<b>")?;
    writeln!(out, "<i>")?;
    writeln!(
        out,
        "<font color=\"{}\">{}</font>",
        escape_html(&options.term_color),
        escaped_term
    )?;
    writeln!(out, "</i>")?;
    writeln!(out, "</b>")?;
    writeln!(out, "</h2>")?;

    write!(out, "<blockquote>")?;
    for token in tokenize(definition, separators) {
        if glossary.contains_term(token) {
            write!(
                out,
                "<a href=\"{}\">{}</a>",
                escape_html(&page_file_name(token)),
                escape_html(token)
            )?;
        } else {
            write!(out, "{}", escape_html(token))?;
        }
    }
    writeln!(out, "</blockquote><hr>")?;

    writeln!(out, "<p>")?;
    writeln!(out, "Return to")?;
    writeln!(out, "<a href=\"{}\">index</a>", INDEX_FILE_NAME)?;
    writeln!(out, ".")?;
    writeln!(out, "</p>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
