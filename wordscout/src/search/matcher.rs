use crate::index::WordIndex;

/// Decides whether `word` is a compound word: constructible by concatenating
/// two or more other entries from the index.
///
/// A word is never its own decomposition. The first segment is drawn only
/// from words strictly shorter than the whole word, so a duplicate entry of
/// the word itself can not satisfy the match.
pub fn is_compound(word: &str, index: &WordIndex) -> bool {
    match_from(word, 0, index)
}

/// Recursive segmentation from byte offset `offset`.
///
/// Candidates are limited to words that fit in the remaining space: at the
/// first segment the bound is strictly below the full length (see
/// [`is_compound`]); at later offsets a candidate may consume the entire
/// remainder. The first successful decomposition short-circuits; the search
/// never enumerates every way a word can be formed.
fn match_from(word: &str, offset: usize, index: &WordIndex) -> bool {
    if offset == word.len() {
        // Fully segmented.
        return true;
    }

    let remaining = word.len() - offset;
    let bound = if offset == 0 { remaining } else { remaining + 1 };
    let rest = &word.as_bytes()[offset..];

    for candidate in index.candidates_shorter_than(bound) {
        if rest.starts_with(candidate.as_bytes())
            && match_from(word, offset + candidate.len(), index)
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::build(words.iter().copied()).unwrap()
    }

    #[test]
    fn two_part_compounds_are_found() {
        let idx = index(&["a", "b", "ab", "abc", "c", "bc"]);
        assert!(is_compound("ab", &idx));
        assert!(is_compound("bc", &idx));
        assert!(is_compound("abc", &idx));
        assert!(!is_compound("a", &idx));
        assert!(!is_compound("c", &idx));
    }

    #[test]
    fn three_part_compound_is_found() {
        let idx = index(&["cat", "dog", "cats", "dogcatcat"]);
        assert!(is_compound("dogcatcat", &idx));
        // "cats" has no decomposition since "s" is absent.
        assert!(!is_compound("cats", &idx));
        assert!(!is_compound("cat", &idx));
        assert!(!is_compound("dog", &idx));
    }

    #[test]
    fn duplicate_of_whole_word_is_not_compound() {
        // The word appears twice in the list; matching itself at offset 0 is
        // still not a decomposition into other words.
        let idx = index(&["echo", "echo", "al", "one"]);
        assert!(!is_compound("echo", &idx));
    }

    #[test]
    fn non_initial_segment_may_consume_the_whole_remainder() {
        // "ratline" = "rat" + "line": the second segment's length equals the
        // full remaining space.
        let idx = index(&["rat", "line", "ratline"]);
        assert!(is_compound("ratline", &idx));
    }

    #[test]
    fn single_word_list_has_no_compounds() {
        let idx = index(&["alone"]);
        assert!(!is_compound("alone", &idx));
    }

    #[test]
    fn dead_end_prefix_backtracks_to_another_split() {
        // "can" is a valid prefix of "canefield" but leads nowhere; the
        // matcher must backtrack and find "cane" + "fie" + "ld".
        let idx = index(&["cane", "fie", "ld", "canefield", "can"]);
        assert!(is_compound("canefield", &idx));

        // With "ld" removed, no decomposition exists at all.
        let idx = index(&["cane", "fie", "canefield", "can"]);
        assert!(!is_compound("canefield", &idx));
    }

    #[test]
    fn word_absent_from_the_list_can_still_be_tested() {
        // The matcher only consults the index for segments; the word under
        // test need not itself be an entry, as long as its length stays
        // within the bound table.
        let idx = index(&["rain", "bow", "sunshine"]);
        assert!(is_compound("rainbow", &idx));
        assert!(!is_compound("rainfall", &idx));
    }

    #[test]
    fn word_longer_than_every_entry_is_never_compound() {
        // Bounds beyond the longest indexed word yield no candidates, so a
        // word that outgrows the whole list can never decompose.
        let idx = index(&["rain", "bow"]);
        assert!(!is_compound("rainbow", &idx));
        assert!(idx.candidates_shorter_than(7).is_empty());
    }
}
