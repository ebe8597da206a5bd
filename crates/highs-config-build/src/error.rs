//! Error types for descriptor generation.
//!
//! Every variant describes a build-time contradiction. A build script that
//! receives one of these must abort the build rather than emit a partial
//! descriptor.

use crate::options::IndexWidth;
use thiserror::Error;

/// Errors raised while collecting, validating, or checking build options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both `CUPDLP_CPU` and `CUPDLP_GPU` were requested.
    ///
    /// This usually means the `cupdlp-gpu` feature was enabled without
    /// turning off the default `cupdlp-cpu` feature.
    #[error("conflicting cuPDLP backends: CUPDLP_CPU and CUPDLP_GPU are both defined")]
    ConflictingBackends,

    /// Neither `CUPDLP_CPU` nor `CUPDLP_GPU` was requested.
    #[error("missing cuPDLP backend: exactly one of CUPDLP_CPU or CUPDLP_GPU must be defined")]
    MissingBackend,

    /// The git hash resolved to an empty string.
    #[error("HIGHS_GITHASH must not be empty")]
    EmptyGitHash,

    /// The build type resolved to an empty string.
    #[error("CMAKE_BUILD_TYPE must not be empty")]
    EmptyBuildType,

    /// A string value cannot be written as a single-line literal.
    #[error("malformed value for {field}: {reason}")]
    MalformedString {
        /// Symbol the value was destined for
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A boolean override could not be parsed.
    #[error("invalid boolean for {variable}: {value:?} (expected 0/1, ON/OFF, true/false)")]
    InvalidBool {
        /// Environment variable that carried the value
        variable: String,
        /// Raw value as found
        value: String,
    },

    /// An integer value could not be parsed.
    #[error("invalid integer for {variable}: {value:?}")]
    InvalidInteger {
        /// Environment variable that carried the value
        variable: String,
        /// Raw value as found
        value: String,
    },

    /// A required environment variable is absent.
    #[error("required environment variable {variable} is not set")]
    MissingVariable {
        /// Name of the variable
        variable: String,
    },

    /// A consumer was written for a different index width than the linked
    /// descriptor provides.
    #[error("index width mismatch: consumer expects {expected}, descriptor provides {found}")]
    IndexWidthMismatch {
        /// Width the consumer was written against
        expected: IndexWidth,
        /// Width the descriptor was built with
        found: IndexWidth,
    },

    /// Writing generated output failed.
    #[error("I/O error: {reason}")]
    Io {
        /// Rendered `std::io::Error`
        reason: String,
    },
}

impl ConfigError {
    /// Create a MalformedString error for a symbol.
    pub fn malformed<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::MalformedString {
            field,
            reason: reason.into(),
        }
    }

    /// Create an InvalidBool error.
    pub fn invalid_bool<S1, S2>(variable: S1, value: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidBool {
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidInteger error.
    pub fn invalid_integer<S1, S2>(variable: S1, value: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidInteger {
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// Create a MissingVariable error.
    pub fn missing_variable<S: Into<String>>(variable: S) -> Self {
        Self::MissingVariable {
            variable: variable.into(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}

/// Result type for descriptor generation.
pub type Result<T> = std::result::Result<T, ConfigError>;
