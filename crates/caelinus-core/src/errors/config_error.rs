//! Configuration errors.

use super::error_code::ErrorCode;

/// Errors that can occur while loading or validating a `CaelinusConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid backend base URL '{url}': expected http:// or https://")]
    InvalidBaseUrl { url: String },

    #[error("Invalid timeout: {secs}s (must be at least 1)")]
    InvalidTimeout { secs: u64 },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CONFIG_IO_ERROR",
            Self::Parse(_) => "CONFIG_PARSE_ERROR",
            Self::InvalidBaseUrl { .. } => "CONFIG_INVALID_BASE_URL",
            Self::InvalidTimeout { .. } => "CONFIG_INVALID_TIMEOUT",
        }
    }
}

/// A limit value that is neither `-1` nor a non-negative `u32`.
/// Raised while deserializing a `Limit`, so it reaches callers inside `ConfigError::Parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid limit {0}: expected -1 (unlimited) or a non-negative count")]
pub struct InvalidLimit(pub i64);

impl ErrorCode for InvalidLimit {
    fn error_code(&self) -> &'static str {
        "CONFIG_INVALID_LIMIT"
    }
}

/// A plan name outside the known vocabulary, raised while deserializing a `Plan`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan '{0}': expected free, initiate, soul or oracle")]
pub struct UnknownPlan(pub String);

impl ErrorCode for UnknownPlan {
    fn error_code(&self) -> &'static str {
        "CONFIG_UNKNOWN_PLAN"
    }
}
