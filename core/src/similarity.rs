use anyhow::{ensure, Result};

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    ensure!(
        a.len() == b.len(),
        "invalid argument: vector length mismatch ({} vs {})",
        a.len(),
        b.len()
    );
    Ok(())
}

pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns 0 when either vector has zero magnitude.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64> {
    let d = dot(a, b)?;
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(d / denom)
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum::<f64>().sqrt())
}
