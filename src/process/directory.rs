//! File discovery

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds the text files of an input directory
#[derive(Debug, Clone)]
pub struct Discovery {
    extension: String,
}

impl Discovery {
    /// Create a discovery for files ending in `.<extension>`
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// List matching regular files directly inside `dir`, sorted by path.
    ///
    /// Subdirectories are not traversed. Hidden files and files named in
    /// ignore files are still included.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            anyhow::bail!("Path does not exist: {}", dir.display());
        }
        if !dir.is_dir() {
            anyhow::bail!("Path is not a directory: {}", dir.display());
        }

        let suffix = format!(".{}", self.extension);
        let mut files = Vec::new();

        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(true)
            .max_depth(Some(1))
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
                        continue;
                    }
                    if entry.file_name().to_string_lossy().ends_with(&suffix) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    tracing::warn!("Error walking directory: {}", err);
                }
            }
        }

        // Sort files for consistent ordering
        files.sort();

        tracing::info!("Discovered {} files in {}", files.len(), dir.display());
        Ok(files)
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new("txt")
    }
}
