//! Error types for caelinus-core.
//! The evaluator itself never errors; these cover config loading only.

pub mod config_error;
pub mod error_code;

pub use config_error::{ConfigError, InvalidLimit, UnknownPlan};
pub use error_code::ErrorCode;
