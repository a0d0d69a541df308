//! Argument validation errors shared by all operations.

use thiserror::Error;

/// An operation parameter outside its required domain.
///
/// Checked before any pixel is touched; a violation aborts the whole command
/// without producing an output file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// Circle radius must be positive.
    #[error("circle radius must be positive (got {0})")]
    Radius(i32),

    /// Line thickness must be positive.
    #[error("thickness must be positive (got {0})")]
    Thickness(i32),

    /// Horizontal part count must leave at least one divider.
    #[error("horizontal part count must be greater than 1 (got {0})")]
    CountX(i32),

    /// Vertical part count must leave at least one divider.
    #[error("vertical part count must be greater than 1 (got {0})")]
    CountY(i32),

    /// Channel override value must be a byte.
    #[error("channel value must be between 0 and 255 (got {0})")]
    ChannelValue(i32),
}
