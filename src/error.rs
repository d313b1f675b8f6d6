//! Error types for network comparisons.
//!
//! Empty inputs and zero denominators are not errors here; they surface as
//! [`Identity`](crate::Identity) sentinels. Errors are reserved for requests
//! that cannot be answered at all.

use std::fmt;

use thiserror::Error;

/// An error produced by a comparison call.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComparisonError {
    /// Path enumeration produced more paths than the configured cap.
    #[error("more than {limit} paths of length {length} were enumerated")]
    PathLimitExceeded {
        /// Path length (in edges) being enumerated.
        length: usize,
        /// The configured `max_paths` cap.
        limit: usize,
    },
    /// A path length of zero was requested.
    #[error("path length must be at least one edge")]
    ZeroPathLength,
    /// A configuration value was rejected.
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Stable machine-readable codes for [`ComparisonError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparisonErrorCode {
    PathLimitExceeded,
    ZeroPathLength,
    InvalidConfig,
}

impl ComparisonErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PathLimitExceeded => "PATH_LIMIT_EXCEEDED",
            Self::ZeroPathLength => "ZERO_PATH_LENGTH",
            Self::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

impl fmt::Display for ComparisonErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ComparisonError {
    pub const fn code(&self) -> ComparisonErrorCode {
        match self {
            Self::PathLimitExceeded { .. } => ComparisonErrorCode::PathLimitExceeded,
            Self::ZeroPathLength => ComparisonErrorCode::ZeroPathLength,
            Self::InvalidConfig { .. } => ComparisonErrorCode::InvalidConfig,
        }
    }
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, ComparisonError>;
