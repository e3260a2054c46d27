//! End-to-end run: discover, process with every method, compute, report

use crate::config::WordfreqConfig;
use crate::process::{BatchResult, FileProcessor, Method};
use crate::reports::{self, PerformanceEntry, ReportPaths};
use crate::text::{Statistics, StatsMethod};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Everything a run produced
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files_discovered: usize,
    /// One result per method, in execution order
    pub batches: Vec<BatchResult>,
    /// Final statistics (direct computation over the sequential words)
    pub statistics: Statistics,
    /// Statistics computed by chunk-then-merge over the same words
    pub chunked_statistics: Statistics,
    /// Whether both statistics computations agreed exactly
    pub statistics_agree: bool,
    #[serde(skip)]
    pub reports: ReportPaths,
}

impl RunSummary {
    /// Batches sorted by ascending total duration
    pub fn batches_by_speed(&self) -> Vec<&BatchResult> {
        let mut sorted: Vec<&BatchResult> = self.batches.iter().collect();
        sorted.sort_by_key(|batch| batch.total_duration);
        sorted
    }

    pub fn batch(&self, method: Method) -> Option<&BatchResult> {
        self.batches.iter().find(|batch| batch.method == method)
    }
}

/// Orchestrates a complete comparison run
pub struct Runner {
    config: WordfreqConfig,
    processor: FileProcessor,
}

impl Runner {
    pub fn new(config: WordfreqConfig) -> Self {
        let processor = FileProcessor::new(&config.input.extension);
        Self { config, processor }
    }

    pub fn config(&self) -> &WordfreqConfig {
        &self.config
    }

    /// Run every method, compute statistics both ways and write the reports.
    ///
    /// A missing or unreadable input directory is logged and treated as
    /// empty. Only report-writing failures are returned as errors.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let input_dir = &self.config.input.directory;
        let output_dir = &self.config.output.directory;

        let files = match self.processor.discover(input_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Cannot read input directory: {:#}", e);
                Vec::new()
            }
        };

        let mut batches = Vec::with_capacity(Method::ALL.len());
        for method in Method::ALL {
            batches.push(self.processor.process(method, &files)?);
        }

        // Sequential words are the baseline for the final analysis
        let words: &[String] = batches
            .iter()
            .find(|batch| batch.method == Method::Sequential)
            .map(|batch| batch.words.as_slice())
            .unwrap_or_default();

        let top_n = self.config.statistics.top_n;
        let chunked_method = StatsMethod::Chunked {
            chunks: self.config.statistics.chunks,
        };
        let statistics = StatsMethod::Direct.compute(words, top_n);
        let chunked_statistics = chunked_method.compute(words, top_n);

        let statistics_agree = statistics.agrees_with(&chunked_statistics);
        if statistics_agree {
            tracing::info!("Direct and chunked statistics agree");
        } else {
            tracing::error!("Direct and chunked statistics disagree");
        }

        let stats_entries = [
            PerformanceEntry::from_statistics(StatsMethod::Direct, &statistics),
            PerformanceEntry::from_statistics(chunked_method, &chunked_statistics),
        ];
        let reports = reports::write_reports(output_dir, &statistics, &batches, &stats_entries)?;

        tracing::debug!("Run finished in {:.4} seconds", start.elapsed().as_secs_f64());

        Ok(RunSummary {
            input_dir: input_dir.clone(),
            output_dir: output_dir.clone(),
            files_discovered: files.len(),
            batches,
            statistics,
            chunked_statistics,
            statistics_agree,
            reports,
        })
    }
}
