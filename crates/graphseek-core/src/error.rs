//! Error types and exit codes for graphseek
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad config values)
//! - 3: Data error (bad graph, inconsistent oracle answers)

mod macros;

use thiserror::Error;

/// Exit codes for the graphseek binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or search state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or searching them
#[derive(Error, Debug)]
pub enum SeekError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    UnsupportedFormat {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("no edge from {from} to {to}")]
    NotFound { from: String, to: String },

    #[error("invalid edge weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { value: f64 },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("no candidates remaining: oracle answers are inconsistent with any single target")]
    NoCandidatesRemaining,

    #[error("invalid feedback for query {queried}: {reason}")]
    InvalidFeedback { queried: String, reason: String },

    #[error("query limit of {limit} exceeded")]
    QueryLimitExceeded { limit: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SeekError {
    /// Create an error for a vertex that is not declared in the graph
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        SeekError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex declared twice
    pub fn duplicate_vertex(vertex: &impl std::fmt::Debug) -> Self {
        SeekError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a missing edge between two vertices
    pub fn edge_not_found(source: &impl std::fmt::Debug, target: &impl std::fmt::Debug) -> Self {
        SeekError::NotFound {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    /// Create an error for oracle feedback that cannot be applied to the queried vertex
    pub fn invalid_feedback(queried: &impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        SeekError::InvalidFeedback {
            queried: format!("{:?}", queried),
            reason: reason.into(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        SeekError::UnsupportedFormat {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SeekError::UsageError(_) | SeekError::UnsupportedFormat { .. } => ExitCode::Usage,

            SeekError::UnknownVertex { .. }
            | SeekError::DuplicateVertex { .. }
            | SeekError::NotFound { .. }
            | SeekError::InvalidWeight { .. }
            | SeekError::EmptyGraph
            | SeekError::NoCandidatesRemaining
            | SeekError::InvalidFeedback { .. } => ExitCode::Data,

            SeekError::QueryLimitExceeded { .. }
            | SeekError::Io(_)
            | SeekError::Yaml(_)
            | SeekError::Json(_)
            | SeekError::Toml(_)
            | SeekError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SeekError::UsageError(_) => "usage_error",
            SeekError::UnsupportedFormat { .. } => "unsupported",
            SeekError::UnknownVertex { .. } => "unknown_vertex",
            SeekError::DuplicateVertex { .. } => "duplicate_vertex",
            SeekError::NotFound { .. } => "not_found",
            SeekError::InvalidWeight { .. } => "invalid_weight",
            SeekError::EmptyGraph => "empty_graph",
            SeekError::NoCandidatesRemaining => "no_candidates_remaining",
            SeekError::InvalidFeedback { .. } => "invalid_feedback",
            SeekError::QueryLimitExceeded { .. } => "query_limit_exceeded",
            SeekError::Io(_) => "io_error",
            SeekError::Yaml(_) => "yaml_error",
            SeekError::Json(_) => "json_error",
            SeekError::Toml(_) => "toml_error",
            SeekError::Other(_) => "other",
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

/// Result type alias for graphseek operations
pub type Result<T> = std::result::Result<T, SeekError>;
