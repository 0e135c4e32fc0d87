//! Text views of a parsed glossary
//!
//! Used by `glossary --inspect` to check how a source file was understood
//! without writing any pages.
//!
//! | Format | Output |
//! |--------|--------|
//! | `terms` | sorted terms, one per line |
//! | `json` | sorted entries with the terms each definition links to |
//! | `yaml` | same entries as YAML |

use crate::glossary::entries::Glossary;
use crate::glossary::error::GlossaryError;
use crate::glossary::tokenizing::{tokenize, SeparatorSet};
use serde::Serialize;
use std::str::FromStr;

/// All available inspect formats
pub const AVAILABLE_FORMATS: &[&str] = &["terms", "json", "yaml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectFormat {
    Terms,
    Json,
    Yaml,
}

impl FromStr for InspectFormat {
    type Err = GlossaryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "terms" => Ok(InspectFormat::Terms),
            "json" => Ok(InspectFormat::Json),
            "yaml" => Ok(InspectFormat::Yaml),
            other => Err(GlossaryError::UnknownFormat(other.to_string())),
        }
    }
}

/// One glossary entry as shown by `json` and `yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub term: String,
    pub definition: String,
    /// Distinct terms linked from the definition, in order of first use.
    pub links: Vec<String>,
}

/// Entries in index order with their outgoing links resolved.
pub fn entry_views(glossary: &Glossary, separators: &SeparatorSet) -> Vec<EntryView> {
    glossary
        .sorted_terms()
        .into_iter()
        .map(|term| {
            let definition = glossary.get(&term).unwrap_or_default().to_string();
            let mut links: Vec<String> = Vec::new();
            for token in tokenize(&definition, separators) {
                if glossary.contains_term(token) && !links.iter().any(|l| l == token) {
                    links.push(token.to_string());
                }
            }
            EntryView {
                term,
                definition,
                links,
            }
        })
        .collect()
}

/// Render `glossary` in the requested format.
pub fn inspect(
    glossary: &Glossary,
    separators: &SeparatorSet,
    format: InspectFormat,
) -> Result<String, GlossaryError> {
    match format {
        InspectFormat::Terms => {
            let mut out = String::new();
            for term in glossary.sorted_terms() {
                out.push_str(&term);
                out.push('\n');
            }
            Ok(out)
        }
        InspectFormat::Json => Ok(serde_json::to_string_pretty(&entry_views(
            glossary, separators,
        ))?),
        InspectFormat::Yaml => Ok(serde_yaml::to_string(&entry_views(glossary, separators))?),
    }
}
