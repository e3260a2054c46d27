//! Tokenization, word counting and statistics

pub mod counter;
pub mod stats;
pub mod tokenizer;

pub use counter::FrequencyMap;
pub use stats::{Statistics, StatsMethod, compute, compute_chunked};
pub use tokenizer::{decode_lossy, tokenize, tokenize_file};
