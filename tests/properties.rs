//! Property tests for counting, merging and ranking

use proptest::prelude::*;
use wordfreq::text::{FrequencyMap, compute, compute_chunked, tokenize};

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Counting the pieces of any split and merging equals counting the whole
    #[test]
    fn merge_of_partition_equals_count(words in arb_words(), cut in 0usize..200) {
        let cut = cut.min(words.len());
        let (left, right) = words.split_at(cut);
        let merged = FrequencyMap::merge([FrequencyMap::count(left), FrequencyMap::count(right)]);
        prop_assert_eq!(merged, FrequencyMap::count(&words));
    }

    /// Ranking length is min(n, unique) and is ordered by count then word
    #[test]
    fn top_n_is_bounded_and_ordered(words in arb_words(), n in 0usize..20) {
        let map = FrequencyMap::count(&words);
        let top = map.top_n(n);
        prop_assert_eq!(top.len(), n.min(map.unique()));
        for pair in top.windows(2) {
            let (ref w1, c1) = pair[0];
            let (ref w2, c2) = pair[1];
            prop_assert!(c1 > c2 || (c1 == c2 && w1 < w2));
        }
    }

    /// Chunked statistics match direct statistics for any chunk count
    #[test]
    fn chunked_matches_direct(words in arb_words(), chunks in 1usize..12, n in 1usize..15) {
        let direct = compute(&words, n);
        let chunked = compute_chunked(&words, n, chunks);
        prop_assert!(direct.agrees_with(&chunked));
        prop_assert_eq!(direct.total_words, words.len() as u64);
    }

    /// Tokens are never empty and purely alphabetic
    #[test]
    fn tokens_are_alphabetic(text in "\\PC{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(char::is_alphabetic));
        }
    }

    /// ASCII input yields ASCII lowercase tokens
    #[test]
    fn ascii_tokens_are_lowercase(text in "[ -~]{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
