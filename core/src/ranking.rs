use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{RankedResult, ScoredDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Raw term counts.
    TermFrequency,
    /// Counts scaled by `log10(N / df)`.
    TfIdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Similarity {
    Cosine,
    Euclidean,
}

impl Similarity {
    pub fn higher_is_better(self) -> bool {
        matches!(self, Similarity::Cosine)
    }
}

/// The five supported ways of ranking a corpus against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    TfCosine,
    TfEuclidean,
    TfIdfCosine,
    /// Only the query is idf-weighted; documents keep raw counts.
    TfIdfQueryEuclidean,
    /// TF-IDF cosine with one round of pseudo-relevance feedback.
    FeedbackTfIdfCosine,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::TfCosine,
        Strategy::TfEuclidean,
        Strategy::TfIdfCosine,
        Strategy::TfIdfQueryEuclidean,
        Strategy::FeedbackTfIdfCosine,
    ];

    pub fn weighting(self) -> Weighting {
        match self {
            Strategy::TfCosine | Strategy::TfEuclidean => Weighting::TermFrequency,
            _ => Weighting::TfIdf,
        }
    }

    pub fn similarity(self) -> Similarity {
        match self {
            Strategy::TfEuclidean | Strategy::TfIdfQueryEuclidean => Similarity::Euclidean,
            _ => Similarity::Cosine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::TfCosine => "Term Frequency (TF) Weighting + Cosine Similarity",
            Strategy::TfEuclidean => "Term Frequency (TF) Weighting + Euclidean Distance",
            Strategy::TfIdfCosine => "TF-IDF Weighting + Cosine Similarity",
            Strategy::TfIdfQueryEuclidean => "TF-IDF Weighting + Euclidean Distance",
            Strategy::FeedbackTfIdfCosine => "Feedback Queries + TF-IDF Weighting + Cosine Similarity",
        }
    }
}

/// Stable sort of per-document scores (index = document) and truncation to `k`.
/// Documents with equal scores keep their corpus order.
pub fn top_k(scores: &[f64], similarity: Similarity, k: usize) -> RankedResult {
    let mut scored: Vec<ScoredDocument> = scores
        .iter()
        .enumerate()
        .map(|(doc, &score)| ScoredDocument { doc, score })
        .collect();
    if similarity.higher_is_better() {
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    } else {
        scored.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    }
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocId;

    fn docs(r: &RankedResult) -> Vec<DocId> {
        r.iter().map(|s| s.doc).collect()
    }

    #[test]
    fn cosine_sorts_descending_and_keeps_ties_in_order() {
        let r = top_k(&[0.1, 0.9, 0.5, 0.9], Similarity::Cosine, 5);
        assert_eq!(docs(&r), vec![1, 3, 2, 0]);
    }

    #[test]
    fn euclidean_sorts_ascending() {
        let r = top_k(&[2.0, 0.5, 1.0, 0.5, 3.0, 4.0, 0.1], Similarity::Euclidean, 5);
        assert_eq!(docs(&r), vec![6, 1, 3, 2, 0]);
    }

    #[test]
    fn strategies_are_in_report_order() {
        assert_eq!(Strategy::ALL[0].similarity(), Similarity::Cosine);
        assert_eq!(Strategy::ALL[1].similarity(), Similarity::Euclidean);
        assert_eq!(Strategy::ALL[3].weighting(), Weighting::TfIdf);
        assert!(Strategy::FeedbackTfIdfCosine.label().starts_with("Feedback"));
    }
}
