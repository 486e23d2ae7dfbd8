/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when building core values from untrusted input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The tag does not name one of the fixed categories.
    #[error("unknown category: \"{0}\" (expected love, career, or wealth)")]
    UnknownCategory(String),

    /// A rating outside the inclusive range 1-5.
    #[error("rating out of range: {0} (expected 1-5)")]
    RatingOutOfRange(u8),
}
