//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the input patterns
    NoInputFiles,
    /// A label file was given together with more than one document
    LabelsNeedSingleInput(usize),
    /// Configured output format is unknown
    UnknownFormat(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles => {
                write!(f, "No files found matching the provided patterns")
            }
            CliError::LabelsNeedSingleInput(count) => write!(
                f,
                "A label file applies to exactly one document, but {count} files matched"
            ),
            CliError::UnknownFormat(format) => write!(f, "Unknown output format: {format}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        assert_eq!(
            CliError::NoInputFiles.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_labels_need_single_input_display() {
        let error = CliError::LabelsNeedSingleInput(3);
        assert_eq!(
            error.to_string(),
            "A label file applies to exactly one document, but 3 files matched"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let error = CliError::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::NoInputFiles.into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
