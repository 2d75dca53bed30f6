use serde::{Deserialize, Serialize};

/// Query-time knobs of a [`crate::VectorSpaceModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of documents kept per ranking.
    pub top_k: usize,
    /// Multiplier on the feedback document's term counts when expanding a query.
    pub feedback_weight: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { top_k: 5, feedback_weight: 0.5 }
    }
}
