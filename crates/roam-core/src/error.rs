//! Error types and exit codes for roam
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed matrix or tour file, bad vertex index)

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input files, out-of-range vertices (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roam operations
#[derive(Error, Debug)]
pub enum RoamError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("invalid tour: {reason}")]
    InvalidTour { reason: String },

    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    // Generic failures (exit code 1)
    #[error("heap capacity {capacity} exceeded")]
    HeapFull { capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Convenience result type for roam operations
pub type Result<T> = std::result::Result<T, RoamError>;

impl RoamError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RoamError::UnknownFormat(_)
            | RoamError::UsageError(_)
            | RoamError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            RoamError::InvalidMatrix { .. }
            | RoamError::InvalidTour { .. }
            | RoamError::VertexOutOfRange { .. } => ExitCode::Data,

            // Generic failures
            RoamError::HeapFull { .. }
            | RoamError::Io(_)
            | RoamError::Json(_)
            | RoamError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the stable error type identifier used in JSON envelopes
    fn error_type(&self) -> &'static str {
        match self {
            RoamError::UnknownFormat(_) => "unknown_format",
            RoamError::UsageError(_) => "usage_error",
            RoamError::InvalidValue { .. } => "invalid_value",
            RoamError::InvalidMatrix { .. } => "invalid_matrix",
            RoamError::InvalidTour { .. } => "invalid_tour",
            RoamError::VertexOutOfRange { .. } => "vertex_out_of_range",
            RoamError::HeapFull { .. } => "heap_full",
            RoamError::Io(_) => "io_error",
            RoamError::Json(_) => "json_error",
            RoamError::Other(_) => "other",
        }
    }

    /// Render this error as a stable JSON envelope for machine consumers
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "status": "error",
            "type": self.error_type(),
            "message": self.to_string(),
        })
        .to_string()
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoamError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed matrix
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        RoamError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Create an error for a malformed tour
    pub fn invalid_tour(reason: impl Into<String>) -> Self {
        RoamError::InvalidTour {
            reason: reason.into(),
        }
    }
}
