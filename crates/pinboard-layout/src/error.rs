//! Errors reported by the layout engine.

use thiserror::Error;

/// Which of the two measured blocks of an item a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    Content,
    Annotation,
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementKind::Content => f.write_str("content"),
            MeasurementKind::Annotation => f.write_str("annotation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The board needs at least one column and at most
    /// [`MAX_NUMBER_OF_COLUMNS`](crate::MAX_NUMBER_OF_COLUMNS).
    #[error("column count must be between 1 and {max}, got {count}", max = crate::MAX_NUMBER_OF_COLUMNS)]
    InvalidColumnCount { count: usize },

    #[error("cell padding must be finite and non-negative, got {padding}")]
    InvalidPadding { padding: f32 },

    /// Container width minus horizontal insets is negative or not finite.
    #[error("content width must be finite and non-negative, got {width}")]
    InvalidContentWidth { width: f32 },

    /// The measurement provider broke its contract for one item.
    #[error("{kind} height for item {index} must be finite and non-negative, got {value}")]
    InvalidMeasurement {
        index: usize,
        kind: MeasurementKind,
        value: f32,
    },

    /// Finite heights that add up past `f32::MAX` once stacked in a column.
    #[error("column height overflowed to {height} at item {index}")]
    HeightOverflow { index: usize, height: f32 },

    #[error("item index {index} out of range for {len} placed items")]
    IndexOutOfRange { index: usize, len: usize },
}

impl LayoutError {
    /// Configuration and contract errors abort a build; only out-of-range
    /// lookups are meant to be handled by the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LayoutError::IndexOutOfRange { .. })
    }
}
