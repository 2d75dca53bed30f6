use crate::tokenizer::Analyzer;
use crate::TermId;
use std::collections::HashMap;

/// Term to dimension mapping shared by every document and query vector.
///
/// Positions form the dense range `0..len()` and are assigned in the order
/// terms are first seen, so a fixed document order always yields the same
/// vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn build<A: Analyzer, S: AsRef<str>>(analyzer: &A, documents: &[S]) -> Self {
        let joined = documents.iter().map(|d| d.as_ref()).collect::<Vec<_>>().join(" ");
        let mut vocabulary = Self::default();
        for term in analyzer.analyze(&joined) {
            if vocabulary.positions.contains_key(&term) { continue; }
            vocabulary.positions.insert(term.clone(), vocabulary.terms.len());
            vocabulary.terms.push(term);
        }
        vocabulary
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn position(&self, term: &str) -> Option<TermId> {
        self.positions.get(term).copied()
    }

    pub fn term(&self, position: TermId) -> Option<&str> {
        self.terms.get(position).map(String::as_str)
    }

    /// Terms in position order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }
}
