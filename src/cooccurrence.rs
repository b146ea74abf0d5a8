// imports
use crate::error::{Result, SimilarityError};

use std::collections::{HashMap, HashSet};
use rayon::{prelude::*, ThreadPoolBuilder};


/// Co-occurrence profile of one word: for every other word, the number of
/// sentences in which both appear. Never holds the word itself, never holds 0.
pub type Descriptor = HashMap<String, u32>;

/// Mapping from every word seen in the corpus to its descriptor.
///
/// Built once from a sequence of sentences and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorTable {
    descriptors: HashMap<String, Descriptor>,
}

impl DescriptorTable {

    /// Builds the table from tokenized sentences in a single pass.
    pub fn build<S, T>(sentences: &[S]) -> DescriptorTable
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut table = DescriptorTable::default();
        for sentence in sentences {
            table.accumulate(sentence.as_ref());
        }
        table
    }

    /// Builds the table with `num_threads` workers, each counting a contiguous
    /// slice of the sentences. Partial tables are summed, so the result equals
    /// `build` on the same input.
    pub fn build_parallel<S, T>(sentences: &[S], num_threads: usize) -> Result<DescriptorTable>
    where
        S: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        if num_threads == 0 {
            return Err(SimilarityError::Config { message: "num_threads must be positive".to_string() });
        }

        // one slice per thread, rounded up so no sentence is left over
        let slice_size = ((sentences.len() + num_threads - 1) / num_threads).max(1);
        let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

        let table = pool.install(|| {
            sentences
                .par_chunks(slice_size)
                .enumerate()
                .map(|(thread_i, slice)| {
                    tracing::debug!("thread {} counting {} sentences", thread_i, slice.len());
                    DescriptorTable::build(slice)
                })
                .reduce(DescriptorTable::default, DescriptorTable::merge)
        });

        tracing::debug!("merged descriptors for {} words", table.len());
        Ok(table)
    }

    fn accumulate<T: AsRef<str>>(&mut self, sentence: &[T]) {

        // a word repeated within one sentence counts once
        let mut seen: HashSet<&str> = HashSet::new();
        let words: Vec<&str> = sentence
            .iter()
            .map(|tok| tok.as_ref())
            .filter(|tok| seen.insert(*tok))
            .collect();

        for (i, key_word) in words.iter().enumerate() {
            let descriptor = self.descriptors.entry((*key_word).to_owned()).or_default();
            for (j, accomp_word) in words.iter().enumerate() {
                if i != j {
                    *descriptor.entry((*accomp_word).to_owned()).or_insert(0) += 1;
                }
            }
        }
    }

    // sums counts per (word, context) pair; commutative and associative
    fn merge(mut self, other: DescriptorTable) -> DescriptorTable {
        for (word, descriptor) in other.descriptors {
            let target = self.descriptors.entry(word).or_default();
            for (context, count) in descriptor {
                *target.entry(context).or_insert(0) += count;
            }
        }
        self
    }

    pub fn get(&self, word: &str) -> Option<&Descriptor> {
        self.descriptors.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.descriptors.contains_key(word)
    }

    /// Number of distinct words seen.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> + '_ {
        self.descriptors.iter().map(|(word, descriptor)| (word.as_str(), descriptor))
    }

    /// All words in the table, sorted.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Builds the descriptor table for `sentences`. See [`DescriptorTable::build`].
pub fn build_descriptors<S, T>(sentences: &[S]) -> DescriptorTable
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    DescriptorTable::build(sentences)
}


#[cfg(test)]
mod tests {

    use super::{build_descriptors, DescriptorTable};
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    fn sentences(raw: &[&str]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.split_whitespace().map(|x| x.to_string()).collect())
            .collect()
    }

    // alfa is repeated in the second sentence and must not be double counted
    #[test]
    fn cooc_test() {
        let table = build_descriptors(&[
            vec!["alfa", "bravo", "charlie", "delta"],
            vec!["alfa", "bravo", "echo", "foxtrot", "alfa"],
        ]);

        assert_eq!(table.get("alfa").unwrap()["bravo"], 2);
        assert_eq!(table.get("bravo").unwrap()["charlie"], 1);
        assert_eq!(table.get("delta").unwrap().get("foxtrot"), None);

        assert_eq!(table.len(), 6);
        assert_eq!(table.vocabulary(), vec!["alfa", "bravo", "charlie", "delta", "echo", "foxtrot"]);

        // alfa co-occurs once with each of charlie, delta, echo and foxtrot
        let alfa = table.get("alfa").unwrap();
        assert_eq!(alfa.len(), 5);
        assert_eq!(alfa.values().sum::<u32>(), 6);
    }

    #[test]
    fn repeated_words_test() {
        let table = build_descriptors(&sentences(&["a b a b a", "a a"]));

        assert_eq!(table.get("a").unwrap().len(), 1);
        assert_eq!(table.get("a").unwrap()["b"], 1);
        assert_eq!(table.get("b").unwrap()["a"], 1);
    }

    #[test]
    fn empty_input_test() {
        let no_sentences: Vec<Vec<String>> = Vec::new();
        assert!(build_descriptors(&no_sentences).is_empty());

        let table = build_descriptors(&sentences(&["", "x y", ""]));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lone_word_test() {
        // seen, but never alongside anything else
        let table = build_descriptors(&sentences(&["solo", "x y"]));
        assert!(table.contains("solo"));
        assert!(table.get("solo").unwrap().is_empty());
        assert!(!table.contains("absent"));
    }

    #[test]
    fn symmetry_test() {
        let table = build_descriptors(&sentences(&[
            "the cat sat on the mat",
            "the dog sat on the log",
            "a cat and a dog",
            "mat log mat",
        ]));

        for (x, descriptor) in table.iter() {
            assert!(!descriptor.contains_key(x), "{} co-occurs with itself", x);
            assert!(descriptor.values().all(|count| *count >= 1));
            for y in table.vocabulary() {
                let xy = descriptor.get(y).copied().unwrap_or(0);
                let yx = table.get(y).unwrap().get(x).copied().unwrap_or(0);
                assert_eq!(xy, yx, "asymmetric counts for {} / {}", x, y);
            }
        }
        assert_eq!(table.get("sat").unwrap()["on"], 2);
        assert_eq!(table.get("mat").unwrap()["log"], 1);
    }

    #[test]
    fn determinism_test() {
        let mut corpus = sentences(&[
            "what you say makes a lot of sense to me you are right",
            "are you playing basketball just for fun or are you a pro",
            "a pro plays basketball for money",
            "you say fun",
        ]);

        let expected = build_descriptors(&corpus);
        assert_eq!(expected, build_descriptors(&corpus));

        let mut rng = thread_rng();
        for _ in 0..10 {
            corpus.shuffle(&mut rng);
            assert_eq!(expected, build_descriptors(&corpus));
        }
    }

    #[test]
    fn parallel_test() {
        let corpus = sentences(&[
            "alfa bravo charlie delta",
            "alfa bravo echo foxtrot alfa",
            "",
            "golf hotel alfa",
            "hotel india",
            "juliett",
            "bravo india golf",
        ]);

        let expected = DescriptorTable::build(&corpus);
        for num_threads in 1..=8 {
            let table = DescriptorTable::build_parallel(&corpus, num_threads).unwrap();
            assert_eq!(expected, table);
        }

        let no_sentences: Vec<Vec<String>> = Vec::new();
        assert!(DescriptorTable::build_parallel(&no_sentences, 4).unwrap().is_empty());
        assert!(DescriptorTable::build_parallel(&corpus, 0).is_err());
    }
}
