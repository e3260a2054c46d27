//! Flat-file reports
//!
//! Three files are written into the output directory:
//!
//! - `vocabulary.txt`: every distinct word, one per line, ascending
//! - `vocabulary_stats.txt`: totals followed by the ranked most-common list
//! - `performance_comparison.txt`: timings per method, fastest first

mod performance;
mod vocabulary;

pub use performance::{PerformanceEntry, write_performance_comparison};
pub use vocabulary::{write_vocabulary, write_vocabulary_stats};

use crate::process::BatchResult;
use crate::text::Statistics;
use anyhow::{Context, Result};
use serde::Serializer;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const VOCABULARY_FILE: &str = "vocabulary.txt";
pub const VOCABULARY_STATS_FILE: &str = "vocabulary_stats.txt";
pub const PERFORMANCE_FILE: &str = "performance_comparison.txt";

/// Paths of the files written by [`write_reports`]
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub vocabulary: PathBuf,
    pub vocabulary_stats: PathBuf,
    pub performance: PathBuf,
}

/// Write all reports, creating `output_dir` if needed.
///
/// Any failure here is returned to the caller; writing reports is the point
/// of a run.
pub fn write_reports(
    output_dir: &Path,
    stats: &Statistics,
    batches: &[BatchResult],
    stats_entries: &[PerformanceEntry],
) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let paths = ReportPaths {
        vocabulary: output_dir.join(VOCABULARY_FILE),
        vocabulary_stats: output_dir.join(VOCABULARY_STATS_FILE),
        performance: output_dir.join(PERFORMANCE_FILE),
    };

    write_vocabulary(&paths.vocabulary, &stats.frequencies)?;
    write_vocabulary_stats(&paths.vocabulary_stats, stats)?;

    let mut entries: Vec<PerformanceEntry> =
        batches.iter().map(PerformanceEntry::from_batch).collect();
    entries.extend_from_slice(stats_entries);
    write_performance_comparison(&paths.performance, &entries)?;

    tracing::info!("Output files written to '{}'", output_dir.display());
    Ok(paths)
}

/// Serialize a duration as fractional seconds
pub fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Open a file for buffered writing, with the path in the error context
pub(crate) fn create_writer(path: &Path) -> Result<std::io::BufWriter<std::fs::File>> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{FileResult, Method};
    use crate::text::compute;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_write_reports_creates_directory_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("nested").join("output");

        let words: Vec<String> = ["b", "a", "b"].iter().map(|w| w.to_string()).collect();
        let batch = BatchResult::from_file_results(
            Method::Sequential,
            vec![FileResult::success(Arc::from("x.txt"), words.clone(), Duration::from_millis(1))],
            Duration::from_millis(2),
        );
        let stats = compute(&words, 10);

        let paths = write_reports(&output_dir, &stats, &[batch], &[]).unwrap();

        assert_eq!(fs::read_to_string(&paths.vocabulary).unwrap(), "a\nb\n");
        assert!(fs::read_to_string(&paths.vocabulary_stats).unwrap().contains("1. b 2\n"));
        assert!(fs::read_to_string(&paths.performance).unwrap().contains("Method: sequential"));
    }

    #[test]
    fn test_write_reports_fails_when_output_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("output");
        fs::write(&blocker, "not a directory").unwrap();

        let stats = compute::<String>(&[], 10);
        assert!(write_reports(&blocker, &stats, &[], &[]).is_err());
    }
}
