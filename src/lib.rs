//! # wordfreq - word-frequency statistics across execution methods
//!
//! Reads the `.txt` files of a directory, tokenizes them into lowercase
//! alphabetic words and computes word-frequency statistics. The same file
//! list is processed three ways so their timings can be compared:
//!
//! - **sequential**: one file after another on the calling thread
//! - **threading**: one thread per file, results stored in a pre-sized slot
//!   vector under a mutex
//! - **multiprocessing**: a fixed pool of four workers exchanging owned tasks
//!   and results over channels
//!
//! All methods concatenate words in discovery order, so they produce the same
//! word sequence for the same directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Process ./data into ./output
//! wordfreq
//!
//! # Another corpus, top 20 words, more logging
//! wordfreq --input corpus --top 20 -v
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use wordfreq::process::{FileProcessor, Method};
//! use wordfreq::text::{StatsMethod, compute};
//! use std::path::Path;
//!
//! let processor = FileProcessor::new("txt");
//! let files = processor.discover(Path::new("data"))?;
//! let batch = processor.process(Method::Threading, &files)?;
//!
//! let stats = compute(&batch.words, 10);
//! let chunked = StatsMethod::Chunked { chunks: 4 }.compute(&batch.words, 10);
//! assert!(stats.agrees_with(&chunked));
//!
//! for (word, count) in &stats.top_words {
//!     println!("{word}: {count}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod process;
pub mod reports;
pub mod runner;
pub mod text;

pub use config::WordfreqConfig;
pub use runner::{RunSummary, Runner};

/// Result type alias for wordfreq operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
