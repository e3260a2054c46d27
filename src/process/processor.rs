//! Runs tokenization over a file list under each execution method

use super::data::{BatchResult, FileResult, Method};
use super::directory::Discovery;
use crate::parallel::ExecutionStrategy;
use crate::text::tokenize_file;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Number of workers in the multiprocessing pool. Not adapted to the host.
pub const POOL_WORKERS: usize = 4;

/// File processor orchestrating discovery and tokenization per method
#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    discovery: Discovery,
}

impl FileProcessor {
    /// Create a processor for files ending in `.<extension>`
    pub fn new(extension: &str) -> Self {
        Self {
            discovery: Discovery::new(extension),
        }
    }

    /// List the eligible files directly inside `dir`, in discovery order
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.discovery.discover(dir)
    }

    fn strategy_for(method: Method) -> ExecutionStrategy {
        match method {
            Method::Sequential => ExecutionStrategy::Sequential,
            Method::Threading => ExecutionStrategy::ThreadPerItem,
            Method::Multiprocessing => ExecutionStrategy::Pool {
                workers: POOL_WORKERS,
            },
        }
    }

    /// Process `files` with the given method.
    ///
    /// Per-file read failures become empty results and never abort the
    /// batch. Words are concatenated in the order of `files` for every
    /// method, whatever order the workers finish in.
    pub fn process(&self, method: Method, files: &[PathBuf]) -> Result<BatchResult> {
        tracing::info!("Starting {} approach on {} files...", method, files.len());
        let start = Instant::now();

        let file_results: Vec<FileResult> = Self::strategy_for(method)
            .execute(files.to_vec(), |path: PathBuf, _| tokenize_file(&path))?;

        for failed in file_results.iter().filter(|r| !r.success) {
            tracing::debug!(
                "{}: {} contributed no words ({})",
                method,
                failed.file_path,
                failed.error.as_deref().unwrap_or("unknown error")
            );
        }

        let batch = BatchResult::from_file_results(method, file_results, start.elapsed());
        tracing::info!(
            "{} completed in {:.4} seconds ({} words)",
            method,
            batch.total_duration.as_secs_f64(),
            batch.word_count()
        );
        Ok(batch)
    }

    /// Process files one by one in discovery order
    pub fn process_sequential(&self, files: &[PathBuf]) -> Result<BatchResult> {
        self.process(Method::Sequential, files)
    }

    /// Process files with one thread per file
    pub fn process_threaded(&self, files: &[PathBuf]) -> Result<BatchResult> {
        self.process(Method::Threading, files)
    }

    /// Process files on a fixed pool of [`POOL_WORKERS`] workers
    pub fn process_multiprocess(&self, files: &[PathBuf]) -> Result<BatchResult> {
        self.process(Method::Multiprocessing, files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_corpus(dir: &TempDir) -> Vec<PathBuf> {
        let texts = [
            ("01.txt", "Alpha beta, gamma."),
            ("02.txt", "beta beta delta"),
            ("03.txt", "Gamma! epsilon 42 alpha"),
            ("04.txt", ""),
            ("05.txt", "zeta eta theta iota kappa"),
        ];
        texts
            .iter()
            .map(|(name, text)| {
                let path = dir.path().join(name);
                fs::write(&path, text).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_all_methods_produce_identical_words() {
        let temp_dir = TempDir::new().unwrap();
        write_corpus(&temp_dir);
        let processor = FileProcessor::default();
        let files = processor.discover(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 5);

        let sequential = processor.process_sequential(&files).unwrap();
        let threaded = processor.process_threaded(&files).unwrap();
        let pooled = processor.process_multiprocess(&files).unwrap();

        assert_eq!(sequential.words.len(), 14);
        assert_eq!(&sequential.words[..3], &["alpha", "beta", "gamma"]);
        assert_eq!(threaded.words, sequential.words);
        assert_eq!(pooled.words, sequential.words);
        assert_eq!(pooled.method, Method::Multiprocessing);
    }

    #[test]
    fn test_missing_file_is_absorbed() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = write_corpus(&temp_dir);
        files.insert(1, temp_dir.path().join("gone.txt"));

        for method in Method::ALL {
            let batch = FileProcessor::default().process(method, &files).unwrap();
            assert_eq!(batch.files_processed, 6);
            assert_eq!(batch.files_failed, 1);
            assert_eq!(batch.word_count(), 14);
        }
    }

    #[test]
    fn test_empty_file_list() {
        for method in Method::ALL {
            let batch = FileProcessor::default().process(method, &[]).unwrap();
            assert!(batch.words.is_empty());
            assert_eq!(batch.files_processed, 0);
        }
    }
}
