//! Error types for descriptor construction, similarity scoring and evaluation.

use thiserror::Error;

/// Errors that can occur while building descriptors or answering questions.
///
/// A base word missing from the descriptor table is not an error: the
/// selector reports it as `None`.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// A metric that divides by a vector norm got a zero-magnitude vector.
    #[error("{metric} similarity is undefined for a zero-magnitude descriptor")]
    ZeroMagnitude { metric: &'static str },

    /// The selector was asked to choose among zero candidates.
    #[error("cannot select the most similar word from an empty candidate list")]
    NoCandidates,

    /// Scores that cannot be compared (NaN).
    #[error("similarity scores cannot be ordered")]
    UnorderedScores,

    /// Accuracy over zero questions.
    #[error("no well-formed questions to evaluate")]
    NoQuestions,

    /// A question line with fewer than three fields.
    #[error("malformed question line (expected base, answer and at least one choice): '{line}'")]
    MalformedInput { line: String },

    /// Metric name not recognized.
    #[error("unknown similarity metric '{name}' (expected cosine, euclidean or euclidean_normalized)")]
    UnknownMetric { name: String },

    /// Invalid or missing configuration value.
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
