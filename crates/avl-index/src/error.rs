use thiserror::Error;

/// Errors raised by [`AvlTree`](crate::AvlTree) mutations.
///
/// A failed operation never leaves a partially applied change behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The payload being inserted has no order relative to a stored payload
    /// (e.g. a NaN float).
    #[error("payload `{key}` has no defined order relative to `{existing}`")]
    Unordered { key: String, existing: String },
}
