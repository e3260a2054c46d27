//! Console output for wordfreq
//!
//! Styled messages plus the end-of-run summary: final statistics, timing per
//! method and the speed comparison against the fastest method.

use crate::runner::RunSummary;
use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a banner title between rules
    pub fn banner(&self, title: &str) {
        if !self.quiet {
            println!("{}", style("=".repeat(60)).dim());
            println!("{}", style(title).bold());
            println!("{}", style("=".repeat(60)).dim());
        }
    }

    /// Print a section header with a rule underneath
    pub fn section_header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().cyan());
            println!("{}", style("-".repeat(title.chars().count())).dim());
        }
    }

    /// Print a step in a process
    pub fn step(&self, step: &str) {
        if !self.quiet {
            println!("{} {}", style("❯").cyan(), step);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<18} {}", style(key).dim(), value);
        }
    }

    /// Print the full end-of-run summary
    pub fn summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }

        self.section_header("FINAL RESULTS:");
        let stats = &summary.statistics;
        self.key_value("Total words:", &group_thousands(stats.total_words));
        self.key_value("Unique words:", &group_thousands(stats.unique_words as u64));
        self.key_value("Files:", &summary.files_discovered.to_string());
        if summary.statistics_agree {
            self.success("Direct and chunked statistics agree");
        } else {
            self.error("Direct and chunked statistics disagree");
        }

        println!("\nTop {} most common words:", stats.top_n);
        for (rank, (word, count)) in stats.top_words.iter().enumerate() {
            println!(
                "  {:>2}. {:<12} : {}",
                rank + 1,
                style(word).bold(),
                group_thousands(*count)
            );
        }

        println!("\nFiles created:");
        for path in [
            &summary.reports.vocabulary,
            &summary.reports.vocabulary_stats,
            &summary.reports.performance,
        ] {
            println!("  - {}", style(path.display()).underlined());
        }

        self.section_header("PERFORMANCE SUMMARY:");
        let sorted = summary.batches_by_speed();
        for batch in &sorted {
            println!("{}:", style(capitalize(batch.method.as_str())).bold());
            self.key_value(
                "Total Time:",
                &format!("{:.4} seconds", batch.total_duration.as_secs_f64()),
            );
            if !batch.processing_duration.is_zero() {
                self.key_value(
                    "Processing Time:",
                    &format!("{:.4} seconds", batch.processing_duration.as_secs_f64()),
                );
                self.key_value(
                    "Overhead Time:",
                    &format!("{:.4} seconds", batch.overhead().as_secs_f64()),
                );
            }
            self.key_value("Words Processed:", &group_thousands(batch.word_count() as u64));
            if let Some(rate) = batch.words_per_second() {
                self.key_value("Words/Second:", &format!("{rate:.0}"));
            }
            if batch.files_failed > 0 {
                self.warning(&format!("{} file(s) could not be read", batch.files_failed));
            }
        }

        if sorted.len() > 1 {
            self.section_header("Speed Comparison:");
            let fastest = sorted[0].total_duration.as_secs_f64();
            for (i, batch) in sorted.iter().enumerate() {
                let name = capitalize(batch.method.as_str());
                if i == 0 {
                    println!("{:<15}: {}", name, style("1.00x (fastest)").green());
                } else if fastest > 0.0 {
                    let ratio = batch.total_duration.as_secs_f64() / fastest;
                    println!("{:<15}: {:.2}x slower", name, ratio);
                }
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an integer with `,` between groups of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("threading"), "Threading");
        assert_eq!(capitalize(""), "");
    }
}
