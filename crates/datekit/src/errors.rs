//! Invalid-argument errors raised by the validating operations.

/// Convenience type alias.
pub type DateResult<T> = Result<T, DateError>;

/// Validation errors. All variants are produced synchronously, before
/// any computation or suspension point; the async holiday lookups never
/// introduce failure modes of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The value does not represent (or no longer fits in) a valid
    /// calendar date.
    #[error("Invalid date provided")]
    InvalidDate,

    /// The arithmetic amount is NaN or infinite.
    #[error("Invalid amount provided")]
    InvalidAmount,

    /// Range check called with `from` strictly after `to`.
    #[error("Invalid range: from date must be before to date")]
    InvalidRange,
}
