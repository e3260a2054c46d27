//! Data structures for per-file and per-batch results

mod batch_result;
mod file_result;

// Public exports
pub use batch_result::{BatchResult, Method};
pub use file_result::FileResult;
