//! Error types for slide validation and the JSON/FFI helpers.

use thiserror::Error;

/// A rejected slide mutation.
///
/// Every variant is an input error raised at the offending call; the
/// slide the call targeted keeps its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The start is too narrow to absorb a step's width shrink.
    #[error("invalid note width")]
    InvalidWidth,

    /// A start or step lane position falls outside the lane grid.
    #[error("invalid lane index")]
    InvalidLaneIndex,

    /// A step's resulting width is non-positive or overflows the grid.
    #[error("invalid width change value")]
    InvalidWidthChange,

    #[error("tick offset must be positive")]
    InvalidTickOffset,

    /// Duration requested on a slide without steps.
    #[error("slide has no step notes")]
    EmptyChain,

    #[error("step index {index} out of range (len {len})")]
    StepIndexOutOfRange { index: usize, len: usize },

    #[error("lane count must be positive, got {0}")]
    InvalidLaneCount(i32),
}

/// Errors surfaced by the crate-level JSON helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
