use anyhow::{ensure, Result};
use crate::TermVector;

/// `log10(n / df)`, or `None` for a term that occurs in no document.
pub fn idf(df: u32, num_docs: usize) -> Option<f64> {
    if df == 0 {
        return None;
    }
    Some((num_docs as f64 / df as f64).log10())
}

/// Scale each entry by its term's idf. Entries whose document frequency is zero
/// keep their raw value.
pub fn tf_idf(vector: &[f64], df: &[u32], num_docs: usize) -> Result<TermVector> {
    ensure!(
        vector.len() == df.len(),
        "invalid argument: vector has {} dimensions but document frequencies cover {}",
        vector.len(),
        df.len()
    );
    Ok(vector
        .iter()
        .zip(df)
        .map(|(&tf, &df_t)| match idf(df_t, num_docs) {
            Some(w) => tf * w,
            None => tf,
        })
        .collect())
}
