//! Error types and exit codes for mapd
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (unknown record, undecodable blob, etc.)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the mapd binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Why a location lookup produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFailure {
    /// The backing service could not be reached
    Network,
    /// The query matched nothing
    NoResults,
}

impl std::fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationFailure::Network => write!(f, "network unavailable"),
            LocationFailure::NoResults => write!(f, "no results"),
        }
    }
}

/// Errors that can occur during mapd operations
#[derive(Error, Debug)]
pub enum MapdError {
    // Usage errors (exit code 2)
    #[error("--format may be specified only once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid record id: {id}")]
    InvalidRecordId { id: String },

    #[error("undecodable blob under key {key}: {reason}")]
    CorruptBlob { key: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("unable to determine data directory (searched from {search_root:?})")]
    NoDataDir { search_root: PathBuf },

    #[error("location lookup failed: {0}")]
    Location(LocationFailure),

    #[error("{0}")]
    Other(String),
}

impl MapdError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MapdError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MapdError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        MapdError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MapdError::DuplicateFormat
            | MapdError::UsageError(_)
            | MapdError::InvalidValue { .. } => ExitCode::Usage,

            MapdError::NotFound { .. }
            | MapdError::InvalidRecordId { .. }
            | MapdError::CorruptBlob { .. } => ExitCode::Data,

            MapdError::Io(_)
            | MapdError::Json(_)
            | MapdError::Toml(_)
            | MapdError::FailedOperationWithTarget { .. }
            | MapdError::NoDataDir { .. }
            | MapdError::Location(_)
            | MapdError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MapdError::DuplicateFormat => "duplicate_format",
            MapdError::UsageError(_) => "usage_error",
            MapdError::InvalidValue { .. } => "invalid_value",
            MapdError::NotFound { .. } => "not_found",
            MapdError::InvalidRecordId { .. } => "invalid_record_id",
            MapdError::CorruptBlob { .. } => "corrupt_blob",
            MapdError::Io(_) => "io_error",
            MapdError::Json(_) => "json_error",
            MapdError::Toml(_) => "toml_error",
            MapdError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MapdError::NoDataDir { .. } => "no_data_dir",
            MapdError::Location(_) => "location_error",
            MapdError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mapd operations
pub type Result<T> = std::result::Result<T, MapdError>;
