//! Performance comparison report

use super::create_writer;
use crate::process::{BatchResult, POOL_WORKERS};
use crate::text::{Statistics, StatsMethod};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// One timed run shown in the comparison
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceEntry {
    pub method: String,
    pub words_processed: u64,
    #[serde(rename = "total_secs", serialize_with = "super::serialize_secs")]
    pub total: Duration,
    /// Statistics computation time, present for statistics runs only
    #[serde(rename = "computation_secs", serialize_with = "serialize_opt_secs")]
    pub computation: Option<Duration>,
}

impl PerformanceEntry {
    pub fn from_batch(batch: &BatchResult) -> Self {
        Self {
            method: batch.method.to_string(),
            words_processed: batch.word_count() as u64,
            total: batch.total_duration,
            computation: None,
        }
    }

    pub fn from_statistics(method: StatsMethod, stats: &Statistics) -> Self {
        Self {
            method: method.label(),
            words_processed: stats.total_words,
            total: stats.computation_duration,
            computation: Some(stats.computation_duration),
        }
    }
}

fn serialize_opt_secs<S: serde::Serializer>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match duration {
        Some(duration) => serializer.serialize_some(&duration.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}

/// Sort entries by ascending total duration; equal durations keep their order
fn sort_by_total(entries: &mut [PerformanceEntry]) {
    entries.sort_by_key(|entry| entry.total);
}

/// Write the comparison report, fastest entry first
pub fn write_performance_comparison(path: &Path, entries: &[PerformanceEntry]) -> Result<()> {
    let mut sorted = entries.to_vec();
    sort_by_total(&mut sorted);

    let mut writer = create_writer(path)?;
    writeln!(writer, "CONCURRENCY PERFORMANCE COMPARISON REPORT")?;
    writeln!(writer, "{}", "=".repeat(50))?;
    writeln!(writer)?;

    writeln!(writer, "System Information:")?;
    writeln!(writer, "- Available CPU cores: {}", num_cpus::get())?;
    writeln!(writer, "- Worker pool size: {POOL_WORKERS} (fixed)")?;
    writeln!(writer)?;

    writeln!(writer, "Processing Method Performance:")?;
    writeln!(writer, "{}", "-".repeat(40))?;

    for entry in &sorted {
        writeln!(writer, "Method: {}", entry.method)?;
        writeln!(writer, "  Words Processed: {}", entry.words_processed)?;
        writeln!(writer, "  Total Time: {:.4} seconds", entry.total.as_secs_f64())?;
        if let Some(computation) = entry.computation {
            writeln!(
                writer,
                "  Statistics Computation Time: {:.4} seconds",
                computation.as_secs_f64()
            )?;
        }
        writeln!(writer)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
