use serde_json::Value;
use std::{fmt::Display, fs};

use crate::error::{Result, SimilarityError};
use crate::metrics::Metric;

#[derive(Clone, Debug, PartialEq)]
pub struct JsonTypes {
    pub corpus_files: Vec<String>,
    pub questions_file: Option<String>,
    pub metrics: Vec<Metric>,
    pub num_threads: usize,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let metrics: Vec<&str> = self.metrics.iter().map(Metric::name).collect();
        write!(f, "using params:
        corpus_files: {:?}
        questions_file: {:?}
        metrics: {:?}
        num_threads: {}",
        self.corpus_files, self.questions_file, metrics, self.num_threads)
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        self.params.clone()
    }

    /// Expects the program name followed by the path to a json file.
    pub fn new(args: &[String]) -> Result<Config> {

        if args.len() != 2 {
            return Err(config_error("input should be a path to json file only"));
        }
        Config::from_file(&args[1])
    }

    pub fn from_file(file_path: &str) -> Result<Config> {

        let text = fs::read_to_string(file_path).map_err(|source| SimilarityError::Io { path: file_path.to_string(), source })?;
        let json: Value = serde_json::from_str(&text)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // validate corpus in json
        let corpus_files = match json.get("corpus_files") {
            Some(Value::Array(files)) if !files.is_empty() => files
                .iter()
                .map(|file| file.as_str().map(str::to_owned).ok_or_else(|| config_error("corpus_files should hold strings only")))
                .collect::<Result<Vec<String>>>()?,
            Some(_) => return Err(config_error("corpus_files should be a non empty array of paths")),
            None => return Err(config_error("corpus_files was not supplied through json")),
        };

        // handle default vs input parameters
        let questions_file = match json.get("questions_file") {
            Some(questions_file) => Some(questions_file.as_str().ok_or_else(|| config_error("questions_file should be a string"))?.to_owned()),
            None => None
        };
        let metrics = match json.get("metrics") {
            Some(Value::Array(names)) if !names.is_empty() => names
                .iter()
                .map(|name| name.as_str().ok_or_else(|| config_error("metrics should hold strings only"))?.parse::<Metric>())
                .collect::<Result<Vec<Metric>>>()?,
            Some(_) => return Err(config_error("metrics should be a non empty array of metric names")),
            None => Metric::ALL.to_vec()
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => match num_threads.as_u64() {
                Some(n) if n > 0 => n as usize,
                _ => return Err(config_error("num_threads should be a positive integer")),
            },
            None => 1
        };

        let params = JsonTypes {
            corpus_files,
            questions_file,
            metrics,
            num_threads,
        };

        Ok(Self { params })
    }

}

fn config_error(message: &str) -> SimilarityError {
    SimilarityError::Config { message: message.to_string() }
}


pub mod files_handling {

    use std::fs;

    use crate::corpus::{Corpus, SentenceTokenizer};
    use crate::error::{Result, SimilarityError};
    use crate::evaluate::{parse_questions, Question};

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item> {
        <R as ReadFile>::read_file(file_path)
    }

    pub trait ReadFile {
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item>;
    }

    impl ReadFile for Corpus {
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item> {
            let text = read_text(file_path)?;
            Ok(Corpus::from_text(&text, &SentenceTokenizer))
        }
    }

    impl ReadFile for Vec<Question> {
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item> {
            let text = read_text(file_path)?;
            Ok(parse_questions(&text))
        }
    }

    fn read_text(file_path: &str) -> Result<String> {
        let bytes = fs::read(file_path).map_err(|source| SimilarityError::Io { path: file_path.to_string(), source })?;
        Ok(decode_text(bytes))
    }

    /// Decodes utf-8, or latin-1 when the bytes are not valid utf-8.
    pub fn decode_text(bytes: Vec<u8>) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            // every byte is a latin-1 code point
            Err(e) => e.into_bytes().iter().map(|b| *b as char).collect(),
        }
    }
}
