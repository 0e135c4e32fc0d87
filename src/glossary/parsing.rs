//! Glossary source parsing
//!
//! The source is a sequence of blocks:
//!
//! ```text
//! term
//! first definition line
//! more definition lines
//! <blank line or end of input>
//! ```
//!
//! Definition lines are appended to each other with nothing in between, so a
//! definition wrapped over two lines loses the line break. Blank lines where a
//! term is expected are skipped. A term that reappears replaces the earlier
//! entry.

use crate::glossary::entries::Glossary;
use crate::glossary::error::GlossaryError;
use std::fs;
use std::path::Path;

/// Parse glossary source text into a [`Glossary`].
///
/// Never fails: a term with nothing after it gets an empty definition.
pub fn parse_glossary(source: &str) -> Glossary {
    let mut glossary = Glossary::new();
    let mut lines = source.lines();

    while let Some(term) = lines.next() {
        if term.is_empty() {
            continue;
        }

        let mut definition = String::new();
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            definition.push_str(line);
        }

        if glossary.insert(term, definition).is_some() {
            log::warn!("duplicate term '{}': keeping the last definition", term);
        }
    }

    log::debug!("parsed {} glossary entries", glossary.len());
    glossary
}

/// Read `path` and parse its contents.
pub fn load_glossary(path: impl AsRef<Path>) -> Result<Glossary, GlossaryError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| GlossaryError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_glossary(&source))
}
