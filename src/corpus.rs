//! Raw text to sentences of word tokens.
//!
//! Text is lower cased, the separators `\n , - : ;` become spaces, sentences end
//! at `.`, `!` or `?`, and words are split on whitespace. Nothing else is
//! stripped, so quotes and apostrophes stay part of their word.

const WORD_SEPARATORS: [char; 5] = ['\n', ',', '-', ':', ';'];
const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// Defines the behavior needed for tokenizing a corpus.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Vec<String>>;
}

/// Splits on sentence-terminal punctuation, then on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceTokenizer;

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if WORD_SEPARATORS.contains(&c) { ' ' } else { c })
            .collect();

        // empty sentences are kept, they contribute nothing to the counts
        normalized
            .split(|c: char| SENTENCE_TERMINALS.contains(&c))
            .map(|sentence| sentence.split_whitespace().map(|x| x.to_string()).collect())
            .collect()
    }
}

/// Sentences gathered from one or more texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<Vec<String>>,
}

impl Corpus {

    pub fn new() -> Corpus {
        Corpus::default()
    }

    pub fn from_text<T: Tokenizer>(text: &str, tokenizer: &T) -> Corpus {
        Corpus { sentences: tokenizer.tokenize(text) }
    }

    /// Appends the sentences of another corpus, keeping their order.
    pub fn extend(&mut self, other: Corpus) {
        self.sentences.extend(other.sentences);
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens over all sentences.
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Vec<String>>> for Corpus {
    fn from(sentences: Vec<Vec<String>>) -> Self {
        Corpus { sentences }
    }
}


#[cfg(test)]
mod tests {

    use super::{Corpus, SentenceTokenizer, Tokenizer};
    use crate::cooccurrence::build_descriptors;

    const SAMPLE: &str = "Alfa; bravo charlie delta.\nalfa-bravo, echo? Foxtrot!\nFoxtrot: echo--foxtrot.";

    fn words(sentence: &[String]) -> Vec<&str> {
        sentence.iter().map(String::as_str).collect()
    }

    #[test]
    fn tokenize_test() {
        let sentences = SentenceTokenizer.tokenize(SAMPLE);

        assert_eq!(sentences.len(), 5);
        assert_eq!(words(&sentences[0]), vec!["alfa", "bravo", "charlie", "delta"]);
        assert_eq!(words(&sentences[1]), vec!["alfa", "bravo", "echo"]);
        assert_eq!(words(&sentences[2]), vec!["foxtrot"]);
        assert_eq!(words(&sentences[3]), vec!["foxtrot", "echo", "foxtrot"]);
        assert!(sentences[4].is_empty());
    }

    #[test]
    fn keeps_other_punctuation_test() {
        let sentences = SentenceTokenizer.tokenize("\"Don't\" (go)\tnow");
        assert_eq!(sentences.len(), 1);
        assert_eq!(words(&sentences[0]), vec!["\"don't\"", "(go)", "now"]);
    }

    #[test]
    fn sample_descriptors_test() {
        // splits sentences on "." "!" "?", ignores case and "-" "--" ":" ";" ","
        let corpus = Corpus::from_text(SAMPLE, &SentenceTokenizer);
        let table = build_descriptors(corpus.sentences());

        let foxtrot = table.get("foxtrot").unwrap();
        assert_eq!(foxtrot.len(), 1);
        assert_eq!(foxtrot["echo"], 1);
        assert_eq!(table.get("alfa").unwrap()["bravo"], 2);
    }

    #[test]
    fn extend_test() {
        let mut corpus = Corpus::new();
        assert!(corpus.is_empty());

        corpus.extend(Corpus::from_text("one two. three", &SentenceTokenizer));
        corpus.extend(Corpus::from_text("four!", &SentenceTokenizer));

        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.num_tokens(), 4);
        assert_eq!(words(&corpus.sentences()[2]), vec!["four"]);
    }
}
