//! Result of running one execution method over a whole file list

use super::FileResult;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// File processing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Files processed one by one on the calling thread
    Sequential,
    /// One thread per file writing into a shared slot vector
    Threading,
    /// Fixed pool of isolated workers fed over channels
    Multiprocessing,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::Sequential,
        Method::Multiprocessing,
        Method::Threading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Sequential => "sequential",
            Method::Threading => "threading",
            Method::Multiprocessing => "multiprocessing",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All words from one method's run plus timing
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Words concatenated across files in discovery order
    #[serde(skip)]
    pub words: Vec<String>,

    pub method: Method,

    /// Wall-clock time for the whole batch
    #[serde(rename = "total_secs", serialize_with = "crate::reports::serialize_secs")]
    pub total_duration: Duration,

    /// Sum of per-file processing times
    #[serde(rename = "processing_secs", serialize_with = "crate::reports::serialize_secs")]
    pub processing_duration: Duration,

    pub files_processed: usize,
    pub files_failed: usize,
}

impl BatchResult {
    /// Concatenate file results, which must already be in discovery order
    pub fn from_file_results(
        method: Method,
        file_results: Vec<FileResult>,
        total_duration: Duration,
    ) -> Self {
        let files_processed = file_results.len();
        let files_failed = file_results.iter().filter(|r| !r.success).count();
        let processing_duration = file_results.iter().map(|r| r.duration).sum();

        let mut words = Vec::with_capacity(file_results.iter().map(FileResult::word_count).sum());
        for result in file_results {
            words.extend(result.words);
        }

        Self {
            words,
            method,
            total_duration,
            processing_duration,
            files_processed,
            files_failed,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Time not spent inside per-file work
    pub fn overhead(&self) -> Duration {
        self.total_duration.saturating_sub(self.processing_duration)
    }

    /// Words per second of wall-clock time, if any time elapsed
    pub fn words_per_second(&self) -> Option<f64> {
        let secs = self.total_duration.as_secs_f64();
        (secs > 0.0).then(|| self.words.len() as f64 / secs)
    }
}
