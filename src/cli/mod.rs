//! Command-line interface for wordfreq
//!
//! Running `wordfreq` with no arguments processes `data/` into `output/`
//! with every method. Flags only override configuration values.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod output;

pub use output::Output;

use crate::config::{ConfigOverrides, WordfreqConfig};
use crate::runner::Runner;

/// Word-frequency statistics compared across execution methods
#[derive(Parser, Debug)]
#[command(
    name = "wordfreq",
    version = crate::VERSION,
    about = "Word-frequency statistics compared across sequential, threaded and worker-pool processing",
    long_about = None
)]
pub struct Cli {
    /// Input directory of text files [default: data]
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Output directory for report files [default: output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of most common words to rank [default: 10]
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Console summary format
    #[arg(long, value_enum, default_value = "text")]
    pub format: SummaryFormat,
}

/// Console summary format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Styled, human readable summary
    Text,
    /// JSON document on stdout
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let start = Instant::now();
        setup_logging(self.verbose, self.quiet);

        let overrides = ConfigOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            top_n: self.top,
        };
        let config = WordfreqConfig::load(self.config.as_deref(), &overrides)?;

        let text = self.format == SummaryFormat::Text;
        let output = Output::new(self.quiet || !text);

        output.banner("TEXT PROCESSING WITH CONCURRENCY COMPARISON");
        output.step(&format!(
            "Processing '{}' with sequential, multiprocessing and threading methods...",
            config.input.directory.display()
        ));

        let runner = Runner::new(config);
        let summary = runner.run()?;

        if summary.files_discovered == 0 {
            output.warning(&format!(
                "No .{} files found in '{}'",
                runner.config().input.extension,
                summary.input_dir.display()
            ));
        }

        match self.format {
            SummaryFormat::Text => {
                output.summary(&summary);
                output.step(&format!(
                    "Total execution time: {:.4} seconds",
                    start.elapsed().as_secs_f64()
                ));
            }
            SummaryFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
