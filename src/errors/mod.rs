use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum VerdictError {
    // Input errors
    #[error("results file '{path}' could not be read: {reason}")]
    MissingInput {
        path: String,
        reason: String,
    },
    #[error("failed to parse {content_type} file '{path}': {reason}")]
    MalformedInput {
        path: String,
        content_type: String,
        reason: String,
    },

    // Output errors
    #[error("file operation '{operation}' failed for '{path}': {reason}")]
    FileOperation {
        path: String,
        operation: String,
        reason: String,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },
}

impl VerdictError {
    pub fn missing_input(path: &Path, reason: &str) -> Self {
        Self::MissingInput {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_input(path: &Path, content_type: &str, reason: &str) -> Self {
        Self::MalformedInput {
            path: path.display().to_string(),
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(path: &Path, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            path: path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Classifies a read failure: a missing file is `MissingInput`, anything
    /// else the OS reports is treated as unreadable input of the same kind.
    pub fn from_read_error(path: &Path, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::missing_input(path, "no such file"),
            _ => Self::missing_input(path, &error.to_string()),
        }
    }

    pub fn from_json_error(path: &Path, error: &serde_json::Error) -> Self {
        Self::malformed_input(path, "JSON", &error.to_string())
    }

    /// Missing and malformed inputs are recoverable in the alert pipeline,
    /// where they are downgraded to warnings.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::MalformedInput { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingInput { .. } => ErrorSeverity::High,
            Self::MalformedInput { .. } => ErrorSeverity::High,
            Self::FileOperation { .. } => ErrorSeverity::Critical,
            Self::Configuration { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput { path, reason } => {
                format!("Results file '{}' could not be read: {}\n💡 Check that the test run produced its output", path, reason)
            }
            Self::MalformedInput { path, content_type, reason } => {
                format!("'{}' is not valid {}: {}\n💡 Check the format and syntax of the input", path, content_type, reason)
            }
            Self::FileOperation { path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, path, reason)
            }
            Self::Configuration { message, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for runverdict operations
pub type VerdictResult<T> = Result<T, VerdictError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &VerdictError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}
