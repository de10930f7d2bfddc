//! Error types and exit codes for graphic
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed script lines)
//! - 3: Graph error (missing vertex/edge, rejected self-loop, negative weight)

mod macros;

use thiserror::Error;

/// Exit codes for the graphic binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - the operation was rejected by the graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphicError {
    // Graph errors (exit code 3)
    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("self-loop rejected: {label} -> {label}")]
    SelfLoopRejected { label: String },

    #[error("source vertex not found: {label}")]
    SourceNotFound { label: String },

    #[error("negative edge weight on a path from the source: {from} -> {to} ({weight})")]
    NegativeWeightOnActivePath { from: String, to: String, weight: i64 },

    #[error("graph is empty")]
    EmptyGraph,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config from {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphicError {
    pub fn vertex_not_found(label: impl Into<String>) -> Self {
        GraphicError::VertexNotFound {
            label: label.into(),
        }
    }

    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        GraphicError::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn self_loop(label: impl Into<String>) -> Self {
        GraphicError::SelfLoopRejected {
            label: label.into(),
        }
    }

    pub fn source_not_found(label: impl Into<String>) -> Self {
        GraphicError::SourceNotFound {
            label: label.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphicError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphicError::VertexNotFound { .. }
            | GraphicError::EdgeNotFound { .. }
            | GraphicError::SelfLoopRejected { .. }
            | GraphicError::SourceNotFound { .. }
            | GraphicError::NegativeWeightOnActivePath { .. }
            | GraphicError::EmptyGraph => ExitCode::Data,

            GraphicError::UnknownFormat(_)
            | GraphicError::UsageError(_)
            | GraphicError::InvalidValue { .. } => ExitCode::Usage,

            GraphicError::Io(_)
            | GraphicError::Json(_)
            | GraphicError::Toml { .. }
            | GraphicError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphicError::VertexNotFound { .. } => "vertex_not_found",
            GraphicError::EdgeNotFound { .. } => "edge_not_found",
            GraphicError::SelfLoopRejected { .. } => "self_loop_rejected",
            GraphicError::SourceNotFound { .. } => "source_not_found",
            GraphicError::NegativeWeightOnActivePath { .. } => "negative_weight_on_active_path",
            GraphicError::EmptyGraph => "empty_graph",
            GraphicError::UnknownFormat(_) => "unknown_format",
            GraphicError::UsageError(_) => "usage_error",
            GraphicError::InvalidValue { .. } => "invalid_value",
            GraphicError::Io(_) => "io_error",
            GraphicError::Json(_) => "json_error",
            GraphicError::Toml { .. } => "toml_error",
            GraphicError::Other(_) => "other",
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

/// Result type alias for graphic operations
pub type Result<T> = std::result::Result<T, GraphicError>;
