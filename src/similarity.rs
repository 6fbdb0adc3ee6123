//! Pairwise cosine similarity.
//!
//! Used for both similarity spaces of the engine: user rating vectors
//! (collaborative filtering) and movie TF-IDF vectors (content-based).
//!
//! # Quick Start
//!
//! ```
//! use movierec::similarity::pairwise_cosine_similarity;
//!
//! let vectors = vec![
//!     vec![5.0, 4.5, 4.0, 0.0],
//!     vec![4.0, 0.0, 5.0, 4.5],
//!     vec![0.0, 0.0, 0.0, 0.0],
//! ];
//!
//! let sim = pairwise_cosine_similarity(&vectors).expect("equal dimensions");
//! assert_eq!(sim.shape(), (3, 3));
//! assert_eq!(sim.get(0, 0), 1.0);
//! assert_eq!(sim.get(2, 2), 0.0); // zero vector
//! assert_eq!(sim.get(0, 1), sim.get(1, 0));
//! ```

use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use std::cmp::Ordering;

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Cosine similarity between two vectors.
///
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// Defined as `0.0` when either vector has zero norm (including empty
/// vectors) instead of the NaN the formula would produce.
///
/// # Errors
///
/// [`RecommendError::DimensionMismatch`] if the lengths differ.
///
/// # Examples
///
/// ```
/// use movierec::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]).expect("same length");
/// assert!(sim > 0.9);
///
/// let zero = cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).expect("same length");
/// assert_eq!(zero, 0.0);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecommendError::DimensionMismatch {
            expected: a.len().to_string(),
            actual: b.len().to_string(),
        });
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot(a, b) / (norm_a * norm_b))
}

/// Cosine similarity between every pair of rows of `rows`.
///
/// The result is an N×N symmetric matrix. The diagonal is exactly `1.0`
/// for rows with a non-zero norm and `0.0` for zero rows. Only the upper
/// triangle is computed; the lower triangle is mirrored so symmetry holds
/// bit-for-bit.
#[must_use]
pub fn cosine_similarity_matrix(rows: &Matrix<f64>) -> Matrix<f64> {
    let n = rows.n_rows();
    let norms = rows.row_norms();
    let mut sim = Matrix::zeros(n, n);

    for i in 0..n {
        if norms[i] == 0.0 {
            continue;
        }
        sim.set(i, i, 1.0);
        for j in (i + 1)..n {
            if norms[j] == 0.0 {
                continue;
            }
            let value = dot(rows.row(i), rows.row(j)) / (norms[i] * norms[j]);
            sim.set(i, j, value);
            sim.set(j, i, value);
        }
    }
    sim
}

/// Cosine similarity matrix over an ordered sequence of vectors.
///
/// # Errors
///
/// [`RecommendError::DimensionMismatch`] if the vectors differ in length.
pub fn pairwise_cosine_similarity<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Matrix<f64>> {
    let dim = vectors.first().map_or(0, |v| v.as_ref().len());
    let mut data = Vec::with_capacity(vectors.len() * dim);
    for v in vectors {
        let v = v.as_ref();
        if v.len() != dim {
            return Err(RecommendError::DimensionMismatch {
                expected: dim.to_string(),
                actual: v.len().to_string(),
            });
        }
        data.extend_from_slice(v);
    }

    let rows = Matrix::from_vec(vectors.len(), dim, data)?;
    Ok(cosine_similarity_matrix(&rows))
}

/// The `k` rows most similar to `row`, excluding `row` itself.
///
/// Sorted by descending similarity; ties go to the lower row index, so the
/// result never depends on sort stability. `k` larger than the number of
/// other rows is clamped.
///
/// # Panics
///
/// Panics if `row` is out of bounds.
///
/// # Examples
///
/// ```
/// use movierec::similarity::{most_similar, pairwise_cosine_similarity};
///
/// let sim = pairwise_cosine_similarity(&[
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 0.1],
/// ]).expect("equal dimensions");
///
/// let top = most_similar(&sim, 0, 5);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].0, 2);
/// ```
#[must_use]
pub fn most_similar(similarity: &Matrix<f64>, row: usize, k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = similarity
        .row(row)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(j, _)| j != row)
        .collect();
    ranked.sort_by(|a, b| by_score_desc(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(k);
    ranked
}

/// Descending total order on scores; NaN sorts after every number.
pub(crate) fn by_score_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
