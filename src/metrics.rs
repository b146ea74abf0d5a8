//! Vector arithmetic and similarity metrics over sparse descriptors.
//!
//! A descriptor is a sparse count vector stored as a map from token to count.
//! Every metric returns a score where higher means more similar.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use crate::cooccurrence::Descriptor;
use crate::error::{Result, SimilarityError};

/// Euclidean norm of a sparse vector. The empty vector has norm 0.
pub fn norm<K, V>(vec: &HashMap<K, V>) -> f64
where
    V: Copy + Into<f64>,
{
    vec.values()
        .map(|v| {
            let v: f64 = (*v).into();
            v * v
        })
        .sum::<f64>()
        .sqrt()
}

/// Dot product over the keys present in both vectors.
fn dot<K: Eq + Hash>(vec1: &HashMap<K, u32>, vec2: &HashMap<K, u32>) -> f64 {
    // iterate the smaller map, look up in the larger
    let (small, large) = if vec1.len() <= vec2.len() { (vec1, vec2) } else { (vec2, vec1) };
    small
        .iter()
        .filter_map(|(k, a)| large.get(k).map(|b| f64::from(*a) * f64::from(*b)))
        .sum()
}

/// Cosine of the angle between two descriptors, in [0, 1] for count vectors.
///
/// Fails when either descriptor is empty, since the norm product is then zero.
/// Descriptors that share no co-occurring token score 0.
pub fn cosine_similarity(vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {
    let magnitude_prod = norm(vec1) * norm(vec2);
    if magnitude_prod == 0.0 {
        return Err(SimilarityError::ZeroMagnitude { metric: "cosine" });
    }
    Ok(dot(vec1, vec2) / magnitude_prod)
}

/// Negative Euclidean distance between two descriptors.
///
/// Missing keys count as 0 on their side. Two empty descriptors score 0.
pub fn euclidean_similarity(vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {
    Ok(-difference_norm(vec1, vec2, 1.0, 1.0))
}

/// Negative Euclidean distance after scaling each descriptor to unit length.
///
/// Compares direction only. Fails when either descriptor is empty.
pub fn euclidean_similarity_normalized(vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {
    let norm1 = norm(vec1);
    let norm2 = norm(vec2);
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(SimilarityError::ZeroMagnitude { metric: "normalized euclidean" });
    }
    Ok(-difference_norm(vec1, vec2, norm1, norm2))
}

// norm of (vec1 / scale1 - vec2 / scale2) over the union of keys
fn difference_norm(vec1: &Descriptor, vec2: &Descriptor, scale1: f64, scale2: f64) -> f64 {
    let mut vector_sub: HashMap<&str, f64> = HashMap::with_capacity(vec1.len() + vec2.len());
    for (word, count) in vec1 {
        vector_sub.insert(word.as_str(), f64::from(*count) / scale1);
    }
    for (word, count) in vec2 {
        *vector_sub.entry(word.as_str()).or_insert(0.0) -= f64::from(*count) / scale2;
    }
    norm(&vector_sub)
}

/// The available notions of "similar", dispatched by the selector and evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Dot product over the product of norms.
    Cosine,
    /// Negative distance between raw count vectors.
    Euclidean,
    /// Negative distance between unit-length vectors.
    EuclideanNormalized,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cosine, Metric::Euclidean, Metric::EuclideanNormalized];

    /// Score how alike two descriptors are under this metric.
    pub fn similarity(&self, vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {
        match self {
            Metric::Cosine => cosine_similarity(vec1, vec2),
            Metric::Euclidean => euclidean_similarity(vec1, vec2),
            Metric::EuclideanNormalized => euclidean_similarity_normalized(vec1, vec2),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
            Metric::EuclideanNormalized => "euclidean_normalized",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" | "euclidian" => Ok(Metric::Euclidean),
            "euclidean_normalized" | "euclidean_norm" | "euclidian_norm" => Ok(Metric::EuclideanNormalized),
            _ => Err(SimilarityError::UnknownMetric { name: s.to_string() }),
        }
    }
}
