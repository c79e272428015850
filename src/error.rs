//! Custom error types for the budget planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Local storage errors (drafts, settings)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backend API errors
    #[error("API error: {0}")]
    Api(String),

    /// Backend answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a "not found" error for plan sections
    pub fn section_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Section",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for plan rows
    pub fn row_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Row",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for pending entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Pending entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from talking to the backend
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_) | Self::ApiStatus { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<url::ParseError> for PlannerError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("Invalid API URL: {}", err))
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
