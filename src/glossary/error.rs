//! Error types for the glossary pipeline
//!
//! Every failure is fatal to a run. The binary reports the message and
//! exits; nothing is retried and partially written output is left in place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaryError {
    /// The source file could not be opened or read.
    #[error("cannot read input file {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    /// The output folder could not be created.
    #[error("cannot create output folder {}: {source}", .path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    /// An output page could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("configuration error: {0}")]
    Config(#[from] glossary_config::LoadError),

    /// An `--inspect` format name that is not recognised.
    #[error("unknown inspect format '{0}' (expected one of: terms, json, yaml)")]
    UnknownFormat(String),

    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Reading an interactive answer from stdin failed.
    #[error("cannot read answer to prompt: {0}")]
    Prompt(io::Error),
}

impl From<serde_json::Error> for GlossaryError {
    fn from(err: serde_json::Error) -> Self {
        GlossaryError::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for GlossaryError {
    fn from(err: serde_yaml::Error) -> Self {
        GlossaryError::Serialize(err.to_string())
    }
}
