use folio_core::Color;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    /// The color is not a member of the accent palette. The previous accent
    /// is retained.
    #[error("color {0:?} is not in the accent palette")]
    InvalidAccentColor(Color),
}

/// Failure of the durable key-value backend. Never escapes the theme store:
/// the in-memory state still changes, the write is skipped, and the next
/// mutation retries naturally.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference store document could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no durable storage backend is available")]
    Unavailable,
}
