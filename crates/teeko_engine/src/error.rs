//! Error types for the Teeko engine
//!
//! Provides custom error types for rule validation, search queries and
//! deadline handling. Rule violations are always recoverable: the state is
//! left untouched and the `Display` text doubles as the human-readable
//! reason reported through the move-apply interface.

use thiserror::Error;

use super::types::Phase;

/// Errors that can occur in the Teeko engine
#[derive(Error, Debug)]
pub enum TeekoError {
    /// Operation does not match the current game phase
    #[error("Not in {expected:?} phase")]
    PhaseMismatch { expected: Phase },

    /// Position index outside the 5x5 board
    #[error("Position {index} out of bounds (must be 0-24)")]
    OutOfBounds { index: i8 },

    /// Target position already holds a piece
    #[error("Position {index} already occupied")]
    OccupiedCell { index: i8 },

    /// Source position does not hold a piece of the moving player
    #[error("No piece of your color at position {index}")]
    NotOwner { index: i8 },

    /// Shift destination is not one step away from the source
    #[error("Can only move to adjacent points (from {from} to {to})")]
    NotAdjacent { from: i8, to: i8 },

    /// Malformed search input - recoverable, the caller gets no move
    #[error("Invalid search query: {message}")]
    InvalidQuery { message: String },

    /// Internal signal used to unwind an in-flight search when its wall
    /// clock budget runs out. Never surfaces through the public API; the
    /// iterative driver converts it into the last completed result.
    #[error("Search deadline expired")]
    DeadlineExpired,
}

/// Result type alias for Teeko engine operations
pub type TeekoResult<T> = Result<T, TeekoError>;
