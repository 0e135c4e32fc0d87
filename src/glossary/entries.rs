//! The term → definition table
//!
//! A [`Glossary`] is filled once by the parser and then only read: the
//! renderer borrows it to decide which definition tokens are known terms.

use std::collections::HashMap;

/// Case-sensitive mapping from term to definition text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the definition it replaced, if any.
    ///
    /// Terms are stored exactly as given; `"Cat"` and `"cat"` are distinct.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(term.into(), definition.into())
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// True if `token` is exactly one of the terms.
    pub fn contains_term(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All terms, ascending by code point. The table itself is not touched.
    pub fn sorted_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.entries.keys().cloned().collect();
        terms.sort();
        terms
    }
}

impl<T, D> FromIterator<(T, D)> for Glossary
where
    T: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, D)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (term, definition) in iter {
            glossary.insert(term, definition);
        }
        glossary
    }
}
