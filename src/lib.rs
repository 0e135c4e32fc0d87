//! # glossary
//!
//! Builds a cross-linked static HTML glossary from a plain text list of
//! terms and definitions.
//!
//! See the [`glossary`] module for the processing stages.

pub mod glossary;
