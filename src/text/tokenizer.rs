//! Text normalization and word extraction
//!
//! Words are produced by lowercasing the whole text, deleting ASCII
//! punctuation, splitting on whitespace and keeping only tokens made of
//! letters (general categories `Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Combining
//! marks and letter numbers such as `ⅻ` are not letters. Deleting punctuation before splitting means joined forms survive
//! as a single word: `don't` becomes `dont` and `foo-bar` becomes `foobar`.

use crate::process::FileResult;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Tokenize text into normalized words, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned
        .split(is_separator)
        .filter(|token| !token.is_empty() && token.chars().all(is_letter))
        .map(str::to_owned)
        .collect()
}

/// Unicode whitespace plus the information separators U+001C..=U+001F
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decode bytes as UTF-8, dropping any invalid sequences instead of replacing them
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Read, decode and tokenize a single file.
///
/// Never fails: a file that cannot be read yields an empty word list and
/// carries the error message in the returned [`FileResult`].
pub fn tokenize_file(path: &Path) -> FileResult {
    let start = Instant::now();
    let file_path: Arc<str> = Arc::from(path.to_string_lossy().as_ref());

    match std::fs::read(path) {
        Ok(bytes) => {
            let words = tokenize(&decode_lossy(&bytes));
            let elapsed = start.elapsed();
            tracing::info!(
                "Processed {}: {} words in {:.4} seconds",
                display_name(path),
                words.len(),
                elapsed.as_secs_f64()
            );
            FileResult::success(file_path, words, elapsed)
        }
        Err(e) => {
            tracing::warn!("Error reading {}: {}", path.display(), e);
            FileResult::failure(file_path, e.to_string(), start.elapsed())
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tokenize_strips_punctuation_and_digits() {
        assert_eq!(
            tokenize("Hello, World! 123 foo-bar"),
            vec!["hello", "world", "foobar"]
        );
    }

    #[test]
    fn test_tokenize_joins_apostrophes() {
        assert_eq!(tokenize("Don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn test_tokenize_drops_mixed_alphanumeric() {
        assert_eq!(tokenize("abc123 x1 plain"), vec!["plain"]);
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("the cat and THE hat"),
            vec!["the", "cat", "and", "the", "hat"]
        );
    }

    #[test]
    fn test_tokenize_unicode_letters() {
        assert_eq!(tokenize("Café NAÏVE"), vec!["café", "naïve"]);
    }

    #[test]
    fn test_tokenize_rejects_marks_and_letter_numbers() {
        // Devanagari vowel signs are combining marks
        assert!(tokenize("हिंदी").is_empty());
        assert!(tokenize("ⅻ").is_empty());
        assert_eq!(tokenize("ⅻ chapter"), vec!["chapter"]);
    }

    #[test]
    fn test_tokenize_splits_on_information_separators() {
        assert_eq!(tokenize("a\u{1c}b"), vec!["a", "b"]);
        assert_eq!(tokenize("one\u{1f}two\u{1d}\u{1e}three"), vec!["one", "two", "three"]);
        assert_eq!(tokenize("x\u{a0}y\u{2003}z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t  ").is_empty());
        assert!(tokenize("... --- !!!").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_non_ascii_punctuation() {
        // Only ASCII punctuation is stripped, so a curly apostrophe survives
        // and the token is dropped by the alphabetic filter.
        assert_eq!(tokenize("it\u{2019}s fine"), vec!["fine"]);
    }

    #[test]
    fn test_decode_lossy_drops_invalid_bytes() {
        let bytes = b"ab\xffcd ok";
        assert_eq!(decode_lossy(bytes), "abcd ok");
    }

    #[test]
    fn test_tokenize_file_reads_words() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");
        fs::write(&path, "One two, two THREE!").unwrap();

        let result = tokenize_file(&path);
        assert!(result.success);
        assert_eq!(result.words, vec!["one", "two", "two", "three"]);
    }

    #[test]
    fn test_tokenize_file_missing_is_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let result = tokenize_file(&temp_dir.path().join("missing.txt"));

        assert!(!result.success);
        assert!(result.words.is_empty());
        assert!(result.error.is_some());
    }
}
