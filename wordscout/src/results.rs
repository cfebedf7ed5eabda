/// This module implements the accumulating result value for a search,
/// demonstrating Rust's ownership rules compared to Java's shared references.
///
/// In Java the per-task result object and the listener-updated global list
/// are both reachable from several threads, and correctness rests on
/// `synchronized` blocks and `volatile` fields. Here each worker owns its
/// [`Tally`] exclusively while scanning, then moves it through a channel;
/// the compiler rules out a second thread touching it mid-scan.
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// The result of a search: how many compound words were found, and the set
/// of words tied for longest.
///
/// One instance lives in each worker during its scan; a separate instance,
/// owned by the coordinator, is the global merge target.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tally {
    /// Count of words confirmed compound. Each word counts once even when it
    /// decomposes several different ways.
    pub compound_word_count: usize,
    /// Every word tied for longest compound word found so far. All entries
    /// share one length, and that length never decreases.
    #[serde(serialize_with = "serialize_sorted")]
    pub longest_words: HashSet<String>,
    #[serde(skip)]
    longest_len: usize,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Default::default()
    }

    /// Length shared by every word currently in `longest_words` (zero while
    /// the set is empty).
    pub fn longest_len(&self) -> usize {
        self.longest_len
    }

    /// Records one confirmed compound word.
    pub fn record_compound(&mut self) {
        self.compound_word_count += 1;
    }

    /// Offers a confirmed compound word as a candidate longest word.
    ///
    /// The word qualifies when the set is still empty (it becomes the length
    /// baseline) or when it matches the baseline length exactly. Returns
    /// whether the word was accepted; a rejection tells a worker scanning a
    /// longest-first list that all of its longest words are already recorded.
    pub fn observe_longest(&mut self, word: &str) -> bool {
        if self.longest_words.is_empty() || word.len() == self.longest_len {
            self.longest_len = word.len();
            self.longest_words.insert(word.to_string());
            return true;
        }
        false
    }

    /// Merges one worker's advertised longest-word set into this tally.
    ///
    /// Longer words replace the held set, equal lengths union into it, and
    /// shorter or empty advertisements are discarded. Arrival order does not
    /// affect the final set.
    pub fn absorb(&mut self, incoming: HashSet<String>) {
        let Some(incoming_len) = incoming.iter().next().map(String::len) else {
            return;
        };
        if self.longest_words.is_empty() || incoming_len > self.longest_len {
            self.longest_len = incoming_len;
            self.longest_words = incoming;
        } else if incoming_len == self.longest_len {
            self.longest_words.extend(incoming);
        }
    }
}

/// Longest words serialize as a sorted list so JSON output is deterministic.
fn serialize_sorted<S>(words: &HashSet<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort();
    sorted.serialize(serializer)
}
