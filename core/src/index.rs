use serde::{Deserialize, Serialize};

/// Position of a term in the vocabulary, and so the dimension it occupies in every vector.
pub type TermId = usize;
/// Index of a document in corpus input order.
pub type DocId = usize;

/// Dense vector over the vocabulary. Entry `i` holds the (possibly weighted) count of term `i`.
pub type TermVector = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub doc: DocId,
    pub score: f64,
}

/// Top-k documents for one query, best first under the metric that produced them.
pub type RankedResult = Vec<ScoredDocument>;
