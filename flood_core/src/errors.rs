//! # Error Types
//!
//! Structured error types for flood_core. Each variant carries enough context
//! for a collaborator (report, editor, import) to tell the operator which room
//! or table is at fault.
//!
//! ## Example
//!
//! ```rust
//! use flood_core::errors::{CalcError, CalcResult};
//!
//! fn require_known(agent: &str) -> CalcResult<()> {
//!     if agent.is_empty() {
//!         return Err(CalcError::unknown_agent(agent));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flood_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and registry operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A room with this name is already held by the registry
    #[error("Duplicate room name: '{name}' already exists")]
    DuplicateName { name: String },

    /// The room references an agent with no registered table
    #[error("Unknown agent: '{agent}' has no registered agent table")]
    UnknownAgent { agent: String },

    /// The room references a unit system other than metric/imperial
    #[error("Invalid unit system: '{units}' (expected 'metric' or 'imperial')")]
    InvalidUnit { units: String },

    /// No bracketing breakpoint pair was found; the agent table is malformed
    #[error("Interpolation failed at {concentration}%: {reason}")]
    InterpolationRange { concentration: f64, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DuplicateName error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        CalcError::DuplicateName { name: name.into() }
    }

    /// Create an UnknownAgent error
    pub fn unknown_agent(agent: impl Into<String>) -> Self {
        CalcError::UnknownAgent {
            agent: agent.into(),
        }
    }

    /// Create an InvalidUnit error
    pub fn invalid_unit(units: impl Into<String>) -> Self {
        CalcError::InvalidUnit {
            units: units.into(),
        }
    }

    /// Create an InterpolationRange error
    pub fn interpolation_range(concentration: f64, reason: impl Into<String>) -> Self {
        CalcError::InterpolationRange {
            concentration,
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if the caller can recover by correcting its request.
    ///
    /// A duplicate add leaves the registry untouched, so the caller can
    /// rename and retry. The other variants are fatal to the room involved.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::DuplicateName { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DuplicateName { .. } => "DUPLICATE_NAME",
            CalcError::UnknownAgent { .. } => "UNKNOWN_AGENT",
            CalcError::InvalidUnit { .. } => "INVALID_UNIT",
            CalcError::InterpolationRange { .. } => "INTERPOLATION_RANGE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
