use anyhow::{ensure, Result};

use crate::config::ModelConfig;
use crate::ranking::{top_k, Similarity, Strategy};
use crate::similarity::{cosine, euclidean_distance};
use crate::tokenizer::{Analyzer, StandardAnalyzer};
use crate::vocabulary::Vocabulary;
use crate::weighting::tf_idf;
use crate::{DocId, RankedResult, TermVector};

/// Vector space over a fixed corpus.
///
/// Vocabulary, document vectors and document frequencies are computed once in
/// [`VectorSpaceModel::build`] and never change afterwards. Weighted vectors are
/// produced as fresh copies for each ranking call, so calls can run in any order
/// (or concurrently through a shared reference) without affecting each other.
#[derive(Debug, Clone)]
pub struct VectorSpaceModel<A = StandardAnalyzer> {
    analyzer: A,
    config: ModelConfig,
    vocabulary: Vocabulary,
    documents: Vec<TermVector>,
    df: Vec<u32>,
}

impl VectorSpaceModel<StandardAnalyzer> {
    /// Build with the default analyzer and configuration.
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        Self::with_analyzer(StandardAnalyzer::default(), ModelConfig::default(), documents)
    }
}

impl<A: Analyzer> VectorSpaceModel<A> {
    pub fn with_analyzer<S: AsRef<str>>(analyzer: A, config: ModelConfig, documents: &[S]) -> Self {
        let vocabulary = Vocabulary::build(&analyzer, documents);
        let mut model = Self { analyzer, config, vocabulary, documents: Vec::new(), df: Vec::new() };
        model.documents = documents.iter().map(|d| model.make_vector(d.as_ref())).collect();

        let mut df = vec![0u32; model.vocabulary.len()];
        for vector in &model.documents {
            for (count, slot) in vector.iter().zip(df.iter_mut()) {
                if *count > 0.0 {
                    *slot += 1;
                }
            }
        }
        model.df = df;

        tracing::info!(
            num_docs = model.documents.len(),
            num_terms = model.vocabulary.len(),
            "vector space built"
        );
        model
    }

    pub fn config(&self) -> &ModelConfig { &self.config }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn num_documents(&self) -> usize { self.documents.len() }

    /// Raw term-count vectors, one per document in input order.
    pub fn document_vectors(&self) -> &[TermVector] { &self.documents }

    pub fn document_frequencies(&self) -> &[u32] { &self.df }

    /// Term counts of `text` over the frozen vocabulary. Unknown terms are dropped.
    pub fn make_vector(&self, text: &str) -> TermVector {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in self.analyzer.analyze(text) {
            if let Some(pos) = self.vocabulary.position(&term) {
                vector[pos] += 1.0;
            }
        }
        vector
    }

    pub fn build_query_vector<S: AsRef<str>>(&self, terms: &[S]) -> TermVector {
        let joined = terms.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(" ");
        self.make_vector(&joined)
    }

    /// TF-IDF copy of `vector`, with `N` the number of documents in this corpus.
    pub fn weigh(&self, vector: &[f64]) -> Result<TermVector> {
        tf_idf(vector, &self.df, self.documents.len())
    }

    fn weighted_documents(&self) -> Result<Vec<TermVector>> {
        self.documents.iter().map(|d| self.weigh(d)).collect()
    }

    fn score(query: &[f64], documents: &[TermVector], similarity: Similarity) -> Result<Vec<f64>> {
        documents
            .iter()
            .map(|d| match similarity {
                Similarity::Cosine => cosine(query, d),
                Similarity::Euclidean => euclidean_distance(query, d),
            })
            .collect()
    }

    fn rank(&self, scores: &[f64], similarity: Similarity) -> RankedResult {
        top_k(scores, similarity, self.config.top_k)
    }

    /// Rank the corpus against `terms` with the given strategy.
    ///
    /// An empty vocabulary yields an empty result for every strategy.
    pub fn search<S: AsRef<str>>(&self, strategy: Strategy, terms: &[S]) -> Result<RankedResult> {
        match strategy {
            Strategy::TfCosine => self.search_tf_cosine(terms),
            Strategy::TfEuclidean => self.search_tf_euclidean(terms),
            Strategy::TfIdfCosine => self.search_tf_idf_cosine(terms),
            Strategy::TfIdfQueryEuclidean => self.search_tf_idf_euclidean(terms),
            Strategy::FeedbackTfIdfCosine => self.search_feedback(terms),
        }
    }

    pub fn search_tf_cosine<S: AsRef<str>>(&self, terms: &[S]) -> Result<RankedResult> {
        if self.vocabulary.is_empty() {
            return Ok(Vec::new());
        }
        let query = self.build_query_vector(terms);
        let scores = Self::score(&query, &self.documents, Similarity::Cosine)?;
        Ok(self.rank(&scores, Similarity::Cosine))
    }

    pub fn search_tf_euclidean<S: AsRef<str>>(&self, terms: &[S]) -> Result<RankedResult> {
        if self.vocabulary.is_empty() {
            return Ok(Vec::new());
        }
        let query = self.build_query_vector(terms);
        let scores = Self::score(&query, &self.documents, Similarity::Euclidean)?;
        Ok(self.rank(&scores, Similarity::Euclidean))
    }

    pub fn search_tf_idf_cosine<S: AsRef<str>>(&self, terms: &[S]) -> Result<RankedResult> {
        if self.vocabulary.is_empty() {
            return Ok(Vec::new());
        }
        let query = self.weigh(&self.build_query_vector(terms))?;
        let documents = self.weighted_documents()?;
        let scores = Self::score(&query, &documents, Similarity::Cosine)?;
        Ok(self.rank(&scores, Similarity::Cosine))
    }

    /// Euclidean distance between the idf-weighted query and the raw document vectors.
    pub fn search_tf_idf_euclidean<S: AsRef<str>>(&self, terms: &[S]) -> Result<RankedResult> {
        if self.vocabulary.is_empty() {
            return Ok(Vec::new());
        }
        let query = self.weigh(&self.build_query_vector(terms))?;
        let scores = Self::score(&query, &self.documents, Similarity::Euclidean)?;
        Ok(self.rank(&scores, Similarity::Euclidean))
    }

    /// TF-IDF cosine ranking after one round of pseudo-relevance feedback.
    ///
    /// The best document of a first TF-IDF cosine pass is taken as relevant; its raw
    /// counts, scaled by `feedback_weight`, are added to the raw query counts before the
    /// expanded query is weighted and scored again. When no document scores above zero
    /// the first document is used.
    pub fn search_feedback<S: AsRef<str>>(&self, terms: &[S]) -> Result<RankedResult> {
        if self.vocabulary.is_empty() || self.documents.is_empty() {
            return Ok(Vec::new());
        }
        let documents = self.weighted_documents()?;
        let query = self.weigh(&self.build_query_vector(terms))?;
        let first_pass = Self::score(&query, &documents, Similarity::Cosine)?;
        let feedback_doc = feedback_document(&first_pass);
        tracing::debug!(feedback_doc, score = first_pass[feedback_doc], "feedback document");

        let mut expanded = self.build_query_vector(terms);
        for (q, d) in expanded.iter_mut().zip(&self.documents[feedback_doc]) {
            *q += self.config.feedback_weight * d;
        }
        let expanded = self.weigh(&expanded)?;
        let scores = Self::score(&expanded, &documents, Similarity::Cosine)?;
        Ok(self.rank(&scores, Similarity::Cosine))
    }

    /// Cosine similarity of document `doc` against every document, in corpus order.
    pub fn related(&self, doc: DocId) -> Result<Vec<f64>> {
        ensure!(
            doc < self.documents.len(),
            "invalid argument: document {} out of range (corpus has {})",
            doc,
            self.documents.len()
        );
        Self::score(&self.documents[doc], &self.documents, Similarity::Cosine)
    }

    pub fn ranked_related(&self, doc: DocId) -> Result<RankedResult> {
        let scores = self.related(doc)?;
        Ok(self.rank(&scores, Similarity::Cosine))
    }
}

/// Index of the first strictly greatest score, starting from document 0 with a
/// threshold of zero.
fn feedback_document(scores: &[f64]) -> DocId {
    let mut best = 0;
    let mut best_score = 0.0;
    for (doc, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best = doc;
        }
    }
    best
}
