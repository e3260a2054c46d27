//! Aggregate statistics over a word sequence
//!
//! Two independent computations are provided: a direct single-pass count and
//! a chunked count whose partial maps are merged afterwards. Both must yield
//! the same frequency map and the same ranking for the same input.

use super::counter::FrequencyMap;
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Statistics derived from a word sequence
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_words: u64,
    pub unique_words: usize,
    #[serde(skip)]
    pub frequencies: FrequencyMap,
    /// Requested length of the ranking
    pub top_n: usize,
    /// Most frequent words, at most `top_n` of them
    pub top_words: Vec<(String, u64)>,
    #[serde(rename = "computation_secs", serialize_with = "crate::reports::serialize_secs")]
    pub computation_duration: Duration,
}

impl Statistics {
    fn from_frequencies(frequencies: FrequencyMap, top_n: usize, elapsed: Duration) -> Self {
        Self {
            total_words: frequencies.total(),
            unique_words: frequencies.unique(),
            top_n,
            top_words: frequencies.top_n(top_n),
            frequencies,
            computation_duration: elapsed,
        }
    }

    /// True when both results carry identical frequencies and rankings
    pub fn agrees_with(&self, other: &Statistics) -> bool {
        self.frequencies == other.frequencies && self.top_words == other.top_words
    }
}

/// How statistics are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMethod {
    /// Single pass over the whole sequence
    Direct,
    /// Count contiguous chunks in parallel, then merge the partial maps
    Chunked { chunks: usize },
}

impl StatsMethod {
    pub fn label(&self) -> String {
        match self {
            StatsMethod::Direct => "statistics (direct)".to_string(),
            StatsMethod::Chunked { chunks } => format!("statistics (chunked x{chunks})"),
        }
    }

    pub fn compute<S>(&self, words: &[S], top_n: usize) -> Statistics
    where
        S: AsRef<str> + Sync,
    {
        match self {
            StatsMethod::Direct => compute(words, top_n),
            StatsMethod::Chunked { chunks } => compute_chunked(words, top_n, *chunks),
        }
    }
}

/// Compute statistics with a single pass
pub fn compute<S: AsRef<str>>(words: &[S], top_n: usize) -> Statistics {
    tracing::debug!("Computing statistics over {} words (direct)", words.len());
    let start = Instant::now();
    let frequencies = FrequencyMap::count(words);
    let stats = Statistics::from_frequencies(frequencies, top_n, start.elapsed());
    tracing::info!(
        "Statistics computation completed in {:.4} seconds",
        stats.computation_duration.as_secs_f64()
    );
    stats
}

/// Compute statistics by counting `chunks` contiguous slices in parallel and merging
pub fn compute_chunked<S>(words: &[S], top_n: usize, chunks: usize) -> Statistics
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(
        "Computing statistics over {} words ({} chunks)",
        words.len(),
        chunks
    );
    let start = Instant::now();

    let chunk_size = chunk_size(words.len(), chunks);
    let partials: Vec<FrequencyMap> = words
        .par_chunks(chunk_size)
        .map(|chunk| FrequencyMap::count(chunk))
        .collect();
    let frequencies = FrequencyMap::merge(partials);

    let stats = Statistics::from_frequencies(frequencies, top_n, start.elapsed());
    tracing::info!(
        "Chunked statistics computation completed in {:.4} seconds",
        stats.computation_duration.as_secs_f64()
    );
    stats
}

/// Size of each chunk so that `len` items fall into at most `chunks` chunks
fn chunk_size(len: usize, chunks: usize) -> usize {
    len.div_ceil(chunks.max(1)).max(1)
}
