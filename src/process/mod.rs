//! File processing
//!
//! Discovers the text files of an input directory and tokenizes them under
//! one of three methods, producing a [`BatchResult`] per method.

mod data;
mod directory;
mod processor;

// Public API exports
pub use data::{BatchResult, FileResult, Method};
pub use directory::Discovery;
pub use processor::{FileProcessor, POOL_WORKERS};
