/// This module implements the word index, the read-only data structure every
/// worker shares for the lifetime of one search run.
///
/// The index stores the word list sorted from longest word to shortest. The
/// sort order does double duty: a worker scanning its slice front to back sees
/// candidate longest words first, and the set of "all words shorter than N"
/// becomes a contiguous suffix of the sorted list, so candidate lookup during
/// segmentation is a single slice borrow instead of a table copy.
///
/// In Java this structure would typically be a `Map<Integer, List<String>>`
/// rebuilt per length bound; here the borrow checker lets every worker hold a
/// `&[String]` directly into the shared index with no copying and no locks.
use std::collections::HashMap;
use tracing::info;

use crate::errors::{FinderError, FinderResult};

/// The loaded word list plus the derived indices used during matching.
///
/// Built once, single-threaded, before any worker starts; immutable and
/// safely shared (read-only) afterwards. All lengths here are byte lengths
/// (`str::len`), consistent with the byte-exact segment matching.
#[derive(Debug)]
pub struct WordIndex {
    /// All words, sorted by descending length. Order among words of equal
    /// length is unspecified.
    words: Vec<String>,
    /// Words bucketed by their exact length.
    by_exact_length: HashMap<usize, Vec<String>>,
    /// `shorter_than[bound]` is the first sorted position holding a word with
    /// length < bound, for every bound in 0..=max_word_len. The candidate
    /// pool for a bound is the suffix of `words` starting there.
    shorter_than: Vec<usize>,
}

impl WordIndex {
    /// Builds an index from a sequence of raw lines.
    ///
    /// Lines are trimmed of surrounding whitespace and empty lines are
    /// discarded. Fails with [`FinderError::EmptyWordList`] when no usable
    /// words remain.
    pub fn build<I, S>(lines: I) -> FinderResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = Vec::new();
        let mut by_exact_length: HashMap<usize, Vec<String>> = HashMap::new();

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            words.push(word.to_string());
            by_exact_length
                .entry(word.len())
                .or_default()
                .push(word.to_string());
        }

        if words.is_empty() {
            return Err(FinderError::EmptyWordList);
        }

        // Longest first, so the first compound word a worker confirms is a
        // candidate for the longest compound word overall.
        words.sort_by(|a, b| b.len().cmp(&a.len()));

        let max_len = words[0].len();
        let min_len = words[words.len() - 1].len();

        let mut shorter_than = Vec::with_capacity(max_len + 1);
        for bound in 0..=max_len {
            shorter_than.push(words.partition_point(|w| w.len() >= bound));
        }

        info!(
            "Loaded {} words, shortest is {}, longest is {}",
            words.len(),
            min_len,
            max_len
        );

        Ok(Self {
            words,
            by_exact_length,
            shorter_than,
        })
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// An index built through [`WordIndex::build`] is never empty, but the
    /// partitioner still guards against it.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word in the list.
    pub fn max_word_len(&self) -> usize {
        self.shorter_than.len() - 1
    }

    /// Returns the word at a sorted position.
    pub fn get(&self, index: usize) -> FinderResult<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| FinderError::index_out_of_range(index, self.words.len()))
    }

    /// All words with length strictly less than `bound`, in descending length
    /// order. Bounds of zero or beyond the longest word yield an empty slice.
    pub fn candidates_shorter_than(&self, bound: usize) -> &[String] {
        match self.shorter_than.get(bound) {
            Some(&start) => &self.words[start..],
            None => &[],
        }
    }

    /// Words whose length is exactly `len`.
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_exact_length
            .get(&len)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
