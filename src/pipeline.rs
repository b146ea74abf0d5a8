// imports
use crate::config::{files_handling, JsonTypes};
use crate::cooccurrence::DescriptorTable;
use crate::corpus::Corpus;
use crate::error::{Result, SimilarityError};
use crate::evaluate::{evaluate_report, Evaluation, Question};
use crate::metrics::Metric;

use std::time::Instant;
use tracing_subscriber::EnvFilter;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> corpus loading
    // -> descriptors building
    // -> evaluation of the questions under every metric

    pub fn run(params: &JsonTypes) -> Result<Vec<(Metric, Evaluation)>> {

        let questions_file = params.questions_file.as_deref().ok_or_else(|| SimilarityError::Config {
            message: "questions_file was not supplied through json".to_string(),
        })?;

        let table = Pipeline::build_table(params)?;

        let questions = files_handling::read_input::<Vec<Question>>(questions_file)?;
        tracing::info!("loaded {} questions from {}", questions.len(), questions_file);

        let mut results = Vec::with_capacity(params.metrics.len());
        for metric in &params.metrics {
            let timer = Instant::now();
            let evaluation = evaluate_report(&questions, &table, *metric)?;
            tracing::info!("{} similarity: {}, took {} ms", metric, evaluation, timer.elapsed().as_millis());
            results.push((*metric, evaluation));
        }

        Ok(results)
    }

    /// Reads every corpus file and builds the descriptor table.
    pub fn build_table(params: &JsonTypes) -> Result<DescriptorTable> {

        let timer = Instant::now();
        tracing::info!("loading corpus...");
        let mut corpus = Corpus::new();
        for file in &params.corpus_files {
            let part = files_handling::read_input::<Corpus>(file)?;
            tracing::debug!("read {} sentences from {}", part.len(), file);
            corpus.extend(part);
        }
        tracing::info!("loaded {} sentences ({} tokens), took {} ms", corpus.len(), corpus.num_tokens(), timer.elapsed().as_millis());

        let timer = Instant::now();
        let table = if params.num_threads > 1 {
            DescriptorTable::build_parallel(corpus.sentences(), params.num_threads)?
        } else {
            DescriptorTable::build(corpus.sentences())
        };
        tracing::info!("built descriptors for {} words, took {} ms", table.len(), timer.elapsed().as_millis());

        Ok(table)
    }
}

/// Installs the fmt subscriber for the binaries, `RUST_LOG` overrides the default level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("synonym_finder=info,query=info"));
    // a subscriber may already be installed, keep it then
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
