//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to document paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles.into());
    }

    files.sort();
    files.dedup();

    log::debug!("resolved {} document(s)", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_glob_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("c.md"), "x").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("review.txt");
        fs::write(&file, "x").unwrap();

        let exact = file.display().to_string();
        let wildcard = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[exact, wildcard]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_no_match_is_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }
}
