//! Vocabulary listing and summary statistics

use super::create_writer;
use crate::text::{FrequencyMap, Statistics};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write every distinct word, one per line, in ascending order
pub fn write_vocabulary(path: &Path, frequencies: &FrequencyMap) -> Result<()> {
    let mut writer = create_writer(path)?;
    for word in frequencies.sorted_words() {
        writeln!(writer, "{word}")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write totals followed by the ranked list as `<rank>. <word> <count>`
pub fn write_vocabulary_stats(path: &Path, stats: &Statistics) -> Result<()> {
    let mut writer = create_writer(path)?;
    writeln!(writer, "Total words: {}", stats.total_words)?;
    writeln!(writer, "Unique words: {}", stats.unique_words)?;
    writeln!(writer)?;
    writeln!(writer, "Top {} most common words:", stats.top_n)?;
    for (rank, (word, count)) in stats.top_words.iter().enumerate() {
        writeln!(writer, "{}. {} {}", rank + 1, word, count)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
