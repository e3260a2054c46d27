//! Word frequency maps

use serde::Serialize;
use std::collections::HashMap;

/// Mapping from word to occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count words in a single pass
    pub fn count<S: AsRef<str>>(words: &[S]) -> Self {
        let mut map = Self::new();
        for word in words {
            map.add(word.as_ref(), 1);
        }
        map
    }

    /// Merge any number of maps by summing per-key counts
    pub fn merge<I>(maps: I) -> Self
    where
        I: IntoIterator<Item = FrequencyMap>,
    {
        maps.into_iter().fold(Self::new(), |mut acc, map| {
            acc.merge_from(map);
            acc
        })
    }

    /// Fold another map into this one
    pub fn merge_from(&mut self, other: FrequencyMap) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    fn add(&mut self, word: &str, count: u64) {
        match self.counts.get_mut(word) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(word.to_owned(), count);
            }
        }
    }

    /// The `n` most frequent words.
    ///
    /// Ordered by count descending; equal counts are ordered by word
    /// ascending so the ranking does not depend on hash order.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }

    /// Count for a single word
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct words
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct words in ascending order
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.counts.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = Self::new();
        for word in iter {
            map.add(word.as_ref(), 1);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_count_basic() {
        let map = FrequencyMap::count(&words("a b a c a b"));
        assert_eq!(map.get("a"), Some(3));
        assert_eq!(map.get("b"), Some(2));
        assert_eq!(map.get("c"), Some(1));
        assert_eq!(map.get("d"), None);
        assert_eq!(map.total(), 6);
        assert_eq!(map.unique(), 3);
    }

    #[test]
    fn test_count_empty() {
        let map = FrequencyMap::count::<&str>(&[]);
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
        assert!(map.top_n(10).is_empty());
    }

    #[test]
    fn test_merge_sums_counts() {
        let left = FrequencyMap::count(&words("a b b"));
        let right = FrequencyMap::count(&words("b c"));
        let merged = FrequencyMap::merge([left.clone(), right.clone()]);

        assert_eq!(merged.get("a"), Some(1));
        assert_eq!(merged.get("b"), Some(3));
        assert_eq!(merged.get("c"), Some(1));
        assert_eq!(merged, FrequencyMap::merge([right, left]));
    }

    #[test]
    fn test_top_n_orders_by_count_then_word() {
        let map = FrequencyMap::count(&words("pear apple pear fig apple kiwi pear"));
        assert_eq!(
            map.top_n(3),
            vec![
                ("pear".to_string(), 3),
                ("apple".to_string(), 2),
                ("fig".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_n_shorter_than_n() {
        let map = FrequencyMap::count(&words("x y"));
        assert_eq!(map.top_n(10).len(), 2);
    }

    #[test]
    fn test_sorted_words() {
        let map = FrequencyMap::count(&words("zeta alpha mid alpha"));
        assert_eq!(map.sorted_words(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_from_iterator_matches_count() {
        let list = words("one two two");
        let collected: FrequencyMap = list.iter().collect();
        assert_eq!(collected, FrequencyMap::count(&list));
    }
}
