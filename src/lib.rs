//! Distributional word similarity for synonym questions.
//!
//! Sentences are turned into a [`DescriptorTable`]: for every word, how many
//! sentences it shares with every other word. Candidate words are then ranked
//! by how alike their descriptors are to a base word's, under one of the
//! [`Metric`]s.
//!
//! ```rust
//! use synonym_finder::{build_descriptors, most_similar, Metric};
//!
//! let table = build_descriptors(&[
//!     vec!["alfa", "bravo", "charlie", "delta"],
//!     vec!["alfa", "bravo", "echo", "foxtrot", "alfa"],
//! ]);
//! assert_eq!(table.get("alfa").unwrap()["bravo"], 2);
//!
//! let best = most_similar("alfa", &["bravo", "charlie"], &table, Metric::Cosine).unwrap();
//! assert_eq!(best.as_deref(), Some("charlie"));
//! ```

mod config;
mod cooccurrence;
mod corpus;
mod error;
mod evaluate;
mod metrics;
mod pipeline;
mod similarity;

pub use config::{files_handling, Config, JsonTypes};
pub use cooccurrence::{build_descriptors, Descriptor, DescriptorTable};
pub use corpus::{Corpus, SentenceTokenizer, Tokenizer};
pub use error::{Result, SimilarityError};
pub use evaluate::{evaluate, evaluate_report, parse_questions, Evaluation, Question};
pub use metrics::{cosine_similarity, euclidean_similarity, euclidean_similarity_normalized, norm, Metric};
pub use pipeline::{init_logging, Pipeline};
pub use similarity::{most_similar, Similarity};
