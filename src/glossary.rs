//! Main module for glossary functionality
//!
//! Processing runs once, front to back:
//!
//! 1. [`parsing`] turns the source text into a [`Glossary`] (term → definition).
//! 2. [`Glossary::sorted_terms`] orders the terms by code point.
//! 3. [`rendering`] writes the index page and one page per term, using the
//!    [`tokenizing`] scanner to decide which definition words become links.
//!
//! [`publish`] wires these stages to the filesystem and [`inspect`] renders a
//! parsed glossary as text for debugging input files.

pub mod entries;
pub mod error;
pub mod inspect;
pub mod parsing;
pub mod publish;
pub mod rendering;
pub mod tokenizing;

pub use entries::Glossary;
pub use error::GlossaryError;
pub use parsing::{load_glossary, parse_glossary};
pub use publish::{PublishReport, Publisher};
pub use rendering::RenderOptions;
pub use tokenizing::{next_word_or_separator, tokenize, SeparatorSet};
