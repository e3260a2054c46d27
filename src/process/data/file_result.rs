//! Result from tokenizing a single file

use std::sync::Arc;
use std::time::Duration;

/// Result from tokenizing a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Path to the file
    pub file_path: Arc<str>,

    /// Words extracted, in order of appearance
    pub words: Vec<String>,

    /// Whether the file was read successfully
    pub success: bool,

    /// Error message if the read failed
    pub error: Option<String>,

    /// Time taken to read and tokenize
    pub duration: Duration,
}

impl FileResult {
    /// Create a successful file result
    pub fn success(file_path: Arc<str>, words: Vec<String>, duration: Duration) -> Self {
        Self {
            file_path,
            words,
            success: true,
            error: None,
            duration,
        }
    }

    /// Create a failed file result; it contributes no words
    pub fn failure(file_path: Arc<str>, error: String, duration: Duration) -> Self {
        Self {
            file_path,
            words: Vec::new(),
            success: false,
            error: Some(error),
            duration,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
