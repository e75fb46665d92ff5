use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolves dataset file patterns to concrete files (Single Responsibility Principle)
pub struct DataLoader;

impl DataLoader {
    /// Expand a path or glob pattern into a sorted list of files
    pub fn resolve_files(pattern: &str) -> Result<Vec<PathBuf>> {
        let mut dataset_files = Vec::new();

        for entry in glob(pattern)
            .context("Failed to read glob pattern")? {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        dataset_files.push(path);
                    }
                },
                Err(e) => eprintln!("Warning: Error reading path: {}", e),
            }
        }

        if dataset_files.is_empty() {
            anyhow::bail!("No dataset files found matching pattern: {}", pattern);
        }

        // Sort files for consistent ordering
        dataset_files.sort();

        Ok(dataset_files)
    }
}
