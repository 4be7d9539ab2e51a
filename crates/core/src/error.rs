//! Error types and recovery strategies for Marquee
//!
//! Errors are classified into three severity tiers:
//! - **Recoverable**: The operation can be retried (a missing catalog file is re-seeded)
//! - **Degraded**: The current request is skipped but the session continues
//! - **Fatal**: No catalog is available and the process must stop
//!
//! Each error includes a recovery action to guide the caller.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Recovery actions that can be taken when an error occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Write the bootstrap seed and load again
    BootstrapSeed,
    /// Skip the current request and keep serving
    SkipOperation,
    /// Stop the process without serving queries
    SafeShutdown,
    /// No automatic recovery - user intervention required
    UserIntervention,
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BootstrapSeed => write!(f, "Writing sample catalog"),
            Self::SkipOperation => write!(f, "Skipping operation"),
            Self::SafeShutdown => write!(f, "Performing safe shutdown"),
            Self::UserIntervention => write!(f, "User intervention required"),
        }
    }
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Error can be automatically recovered from
    Recoverable,
    /// Request skipped but the session continues
    Degraded,
    /// Startup cannot continue
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for Marquee
#[derive(Error, Debug)]
pub enum AppError {
    // ===== File System Errors =====
    /// Catalog file not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission denied for file operation
    #[error("Permission denied: {operation} on {path}")]
    PermissionDenied { operation: String, path: PathBuf },

    /// General I/O error
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    // ===== Catalog Errors =====
    /// The delimited file could not be read or written
    #[error("CSV error in {path}: {message}")]
    CsvError {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A field could not be coerced to its typed form
    #[error("Invalid value '{value}' for {field} on line {line}: {reason}")]
    InvalidField {
        line: u64,
        field: String,
        value: String,
        reason: String,
    },

    /// A required column is missing from the catalog file
    #[error("Missing required field: {field} in {path}")]
    MissingField { field: String, path: PathBuf },

    /// The bootstrap seed could not be written
    #[error("Failed to write sample catalog to {path}: {reason}")]
    BootstrapFailed { path: PathBuf, reason: String },

    /// Aggregates were requested for a catalog with no movies
    #[error("Catalog is empty: no movie data to aggregate")]
    EmptyCatalog,

    // ===== Input Errors =====
    /// A value typed at a prompt could not be parsed
    #[error("Invalid {argument} input. {reason}")]
    InvalidArgument { argument: String, reason: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } => ErrorSeverity::Recoverable,

            Self::EmptyCatalog | Self::InvalidArgument { .. } => ErrorSeverity::Degraded,

            Self::PermissionDenied { .. }
            | Self::IoError { .. }
            | Self::CsvError { .. }
            | Self::InvalidField { .. }
            | Self::MissingField { .. }
            | Self::BootstrapFailed { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns the recommended recovery action for this error
    pub fn recovery_action(&self) -> RecoveryAction {
        match self {
            Self::FileNotFound { .. } => RecoveryAction::BootstrapSeed,

            Self::EmptyCatalog | Self::InvalidArgument { .. } => RecoveryAction::SkipOperation,

            Self::CsvError { .. }
            | Self::InvalidField { .. }
            | Self::MissingField { .. }
            | Self::BootstrapFailed { .. } => RecoveryAction::SafeShutdown,

            Self::PermissionDenied { .. } | Self::IoError { .. } => {
                RecoveryAction::UserIntervention
            }
        }
    }

    /// Returns a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { .. } => {
                "The movie catalog was not found. A sample catalog can be created.".to_string()
            }
            Self::PermissionDenied { .. } => {
                "Permission denied. Please check access to the catalog file.".to_string()
            }
            Self::IoError { .. } => "A file operation failed. Please try again.".to_string(),

            Self::CsvError { .. } | Self::MissingField { .. } => {
                "The movie catalog is malformed and cannot be read.".to_string()
            }
            Self::InvalidField { field, line, .. } => {
                format!("The movie catalog has an invalid {} on line {}.", field, line)
            }
            Self::BootstrapFailed { .. } => {
                "Could not create the sample movie catalog.".to_string()
            }
            Self::EmptyCatalog => "There are no movies to summarize.".to_string(),

            Self::InvalidArgument { argument, reason } => {
                format!("Invalid {} input. {}", argument, reason)
            }
        }
    }

    /// Returns true if this error should be logged at ERROR level
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }

    /// Returns true if the caller may skip the request and continue
    pub fn is_skippable(&self) -> bool {
        self.recovery_action() == RecoveryAction::SkipOperation
    }

    /// Helper to create a CSV error from any error type
    pub fn csv<E: std::error::Error + Send + Sync + 'static>(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::CsvError {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Helper to create a coercion error for a catalog field
    pub fn invalid_field(
        line: u64,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            line,
            field: field.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Helper to create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Implement From for common error types
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound {
                path: PathBuf::from("unknown"),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                operation: "file operation".to_string(),
                path: PathBuf::from("unknown"),
            },
            _ => Self::IoError {
                message: err.to_string(),
                source: err,
            },
        }
    }
}
