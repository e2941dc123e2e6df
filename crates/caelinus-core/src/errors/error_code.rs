//! Stable string codes for errors crossing into UI or log consumers.

/// Implemented by every error enum in the workspace.
pub trait ErrorCode {
    /// A stable `SCREAMING_SNAKE` identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
