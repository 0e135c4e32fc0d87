use super::escape::escape_html;
use super::{page_file_name, RenderOptions};
use std::io::{self, Write};

/// Write the index page: a heading and one link per term, in the given order.
///
/// An empty `terms` slice renders an empty list.
pub fn write_index<W: Write>(
    out: &mut W,
    terms: &[String],
    options: &RenderOptions,
) -> io::Result<()> {
    let title = escape_html(&options.index_title);

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", title)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{}</h2>", title)?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<h3>{}</h3>", escape_html(&options.index_heading))?;

    writeln!(out, "<ul>")?;
    for term in terms {
        writeln!(out, "<li>")?;
        writeln!(
            out,
            "<a href=\"{}\">{}</a>",
            escape_html(&page_file_name(term)),
            escape_html(term)
        )?;
        writeln!(out, "</li>")?;
    }
    writeln!(out, "</ul>")?;

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
