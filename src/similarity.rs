use ndarray::Array1;
use ndarray_stats::{errors::MinMaxError, QuantileExt};

use crate::cooccurrence::{Descriptor, DescriptorTable};
use crate::error::{Result, SimilarityError};
use crate::metrics::Metric;

/// Answers "which of these words is closest to that one" over a descriptor table.
pub struct Similarity<'a> {
    table: &'a DescriptorTable,
    metric: Metric,
}

impl<'a> Similarity<'a> {

    pub fn new(table: &'a DescriptorTable, metric: Metric) -> Similarity<'a> {
        Self { table, metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn extract_descriptor(&self, word: &str) -> Option<&'a Descriptor> {
        self.table.get(word)
    }

    /// Similarity of `choice` to `word`, or `None` when either is not in the table.
    pub fn score(&self, word: &str, choice: &str) -> Result<Option<f64>> {
        match (self.table.get(word), self.table.get(choice)) {
            (Some(vec1), Some(vec2)) => Ok(Some(self.metric.similarity(vec1, vec2)?)),
            _ => Ok(None),
        }
    }

    /// The choice most similar to `word`.
    ///
    /// Returns `Ok(None)` when `word` is not in the table. Choices missing from
    /// the table get the lowest possible score, so they are only picked when no
    /// choice is known, in which case the first one is returned. Ties go to the
    /// earliest choice.
    pub fn most_similar<'c, S: AsRef<str>>(&self, word: &str, choices: &'c [S]) -> Result<Option<&'c str>> {

        if choices.is_empty() {
            return Err(SimilarityError::NoCandidates);
        }

        let descriptor = match self.table.get(word) {
            Some(descriptor) => descriptor,
            None => return Ok(None),
        };

        let scores = choices
            .iter()
            .map(|choice| match self.table.get(choice.as_ref()) {
                Some(other) => self.metric.similarity(descriptor, other),
                None => Ok(f64::NEG_INFINITY),
            })
            .collect::<Result<Array1<f64>>>()?;

        // argmax keeps the first index on ties
        let best = scores.argmax().map_err(|e| match e {
            MinMaxError::EmptyInput => SimilarityError::NoCandidates,
            _ => SimilarityError::UnorderedScores,
        })?;

        Ok(Some(choices[best].as_ref()))
    }
}

/// Free-function form of [`Similarity::most_similar`], returning an owned word.
pub fn most_similar<S: AsRef<str>>(
    word: &str,
    choices: &[S],
    table: &DescriptorTable,
    metric: Metric,
) -> Result<Option<String>> {
    let best = Similarity::new(table, metric).most_similar(word, choices)?;
    Ok(best.map(str::to_owned))
}
