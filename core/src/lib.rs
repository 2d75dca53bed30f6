//! Vector space document ranking: vocabulary construction, term weighting,
//! cosine and Euclidean scoring, and pseudo-relevance feedback.

pub mod config;
pub mod index;
pub mod model;
pub mod ranking;
pub mod similarity;
pub mod tokenizer;
pub mod vocabulary;
pub mod weighting;

pub use config::ModelConfig;
pub use index::{DocId, RankedResult, ScoredDocument, TermId, TermVector};
pub use model::VectorSpaceModel;
pub use ranking::{Similarity, Strategy, Weighting};
pub use tokenizer::{Analyzer, StandardAnalyzer};
pub use vocabulary::Vocabulary;
