//! Accuracy of the selector over a set of synonym questions.
//!
//! A question line reads `base answer choice [choice...]`, for example
//! `draw pull pull reveal ask`.

use std::fmt::Display;

use crate::cooccurrence::DescriptorTable;
use crate::error::{Result, SimilarityError};
use crate::metrics::Metric;
use crate::similarity::Similarity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub base: String,
    pub answer: String,
    pub choices: Vec<String>,
}

impl Question {

    pub fn new(base: &str, answer: &str, choices: &[&str]) -> Question {
        Question {
            base: base.to_string(),
            answer: answer.to_string(),
            choices: choices.iter().map(|x| x.to_string()).collect(),
        }
    }

    /// Parses one whitespace separated question line.
    pub fn parse_line(line: &str) -> Result<Question> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [base, answer, choices @ ..] if !choices.is_empty() => Ok(Question::new(base, answer, choices)),
            _ => Err(SimilarityError::MalformedInput { line: line.to_string() }),
        }
    }
}

/// Parses every well-formed question in `text`. Blank and malformed lines are skipped.
pub fn parse_questions(text: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match Question::parse_line(line) {
            Ok(question) => questions.push(question),
            Err(e) => tracing::debug!("skipping question: {}", e),
        }
    }
    questions
}

/// Outcome of running the selector over a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    /// Percentage of correct answers, in [0, 100].
    pub fn accuracy(&self) -> f64 {
        100.0 * self.correct as f64 / self.total as f64
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} correct ({:.2}%)", self.correct, self.total, self.accuracy())
    }
}

/// Counts the questions whose selected choice equals the recorded answer.
///
/// A base word missing from the table counts as a wrong answer.
pub fn evaluate_report(questions: &[Question], table: &DescriptorTable, metric: Metric) -> Result<Evaluation> {

    if questions.is_empty() {
        return Err(SimilarityError::NoQuestions);
    }

    let similarity = Similarity::new(table, metric);
    let mut correct = 0;
    for question in questions {
        match similarity.most_similar(&question.base, &question.choices)? {
            Some(guess) if guess == question.answer => correct += 1,
            Some(guess) => tracing::trace!("{}: guessed {} instead of {}", question.base, guess, question.answer),
            None => tracing::trace!("{}: not in the descriptor table", question.base),
        }
    }

    Ok(Evaluation { correct, total: questions.len() })
}

/// Percentage of questions answered correctly under `metric`.
pub fn evaluate(questions: &[Question], table: &DescriptorTable, metric: Metric) -> Result<f64> {
    Ok(evaluate_report(questions, table, metric)?.accuracy())
}
