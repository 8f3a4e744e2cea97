//! Board utilities and mutation primitives
//!
//! Provides the fundamental board operations used throughout the engine:
//! - Index conversion and bounds checking
//! - Chebyshev adjacency
//! - The two rule-checked mutations, `place` and `shift`
//! - Winner detection over the precalculated shape table

use super::constants::*;
use super::error::{TeekoError, TeekoResult};
use super::types::*;

/// Convert row and column to a linear position (0-24)
#[inline]
pub fn rc_to_index(row: i8, col: i8) -> i8 {
    row * BOARD_SIZE + col
}

/// Convert a linear position to (row, col)
#[inline]
pub fn index_to_rc(index: i8) -> (i8, i8) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Check if a linear position is within board bounds
#[inline]
pub fn is_valid_index(index: i8) -> bool {
    index >= 0 && (index as usize) < CELL_COUNT
}

/// Check if row/column coordinates are valid
#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Chebyshev distance between the two points is exactly 1.
#[inline]
pub fn is_adjacent(from: i8, to: i8) -> bool {
    let (fr, fc) = index_to_rc(from);
    let (tr, tc) = index_to_rc(to);
    let dr = (fr - tr).abs();
    let dc = (fc - tc).abs();
    dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
}

/// Place a piece during the placement phase.
///
/// On success the cell is set and the player's placed count incremented;
/// when both counts first reach four, the phase flips to `Movement`. The
/// flip is irreversible through this interface.
///
/// # Errors
///
/// [`TeekoError::PhaseMismatch`] outside the placement phase,
/// [`TeekoError::OutOfBounds`] for an invalid index,
/// [`TeekoError::OccupiedCell`] if the point is taken. The state is
/// unchanged on every error path.
pub fn place(state: &mut GameState, index: i8, player: Player) -> TeekoResult<()> {
    if state.phase != Phase::Placement {
        return Err(TeekoError::PhaseMismatch {
            expected: Phase::Placement,
        });
    }
    if !is_valid_index(index) {
        return Err(TeekoError::OutOfBounds { index });
    }
    if state.board[index as usize] != EMPTY {
        return Err(TeekoError::OccupiedCell { index });
    }

    debug_assert!(state.placed[player.index()] < PIECES_PER_PLAYER);

    state.board[index as usize] = player.piece();
    state.placed[player.index()] += 1;

    if state.placed == [PIECES_PER_PLAYER; 2] {
        state.phase = Phase::Movement;
    }

    Ok(())
}

/// Slide a piece to an adjacent empty point during the movement phase.
///
/// # Errors
///
/// [`TeekoError::PhaseMismatch`] outside the movement phase,
/// [`TeekoError::OutOfBounds`] for either index,
/// [`TeekoError::NotOwner`] if `from` does not hold the player's piece,
/// [`TeekoError::OccupiedCell`] if `to` is taken,
/// [`TeekoError::NotAdjacent`] if the step is not Chebyshev distance 1.
/// The state is unchanged on every error path.
pub fn shift(state: &mut GameState, from: i8, to: i8, player: Player) -> TeekoResult<()> {
    if state.phase != Phase::Movement {
        return Err(TeekoError::PhaseMismatch {
            expected: Phase::Movement,
        });
    }
    if !is_valid_index(from) {
        return Err(TeekoError::OutOfBounds { index: from });
    }
    if !is_valid_index(to) {
        return Err(TeekoError::OutOfBounds { index: to });
    }
    if state.board[from as usize] != player.piece() {
        return Err(TeekoError::NotOwner { index: from });
    }
    if state.board[to as usize] != EMPTY {
        return Err(TeekoError::OccupiedCell { index: to });
    }
    if !is_adjacent(from, to) {
        return Err(TeekoError::NotAdjacent { from, to });
    }

    state.board[to as usize] = state.board[from as usize];
    state.board[from as usize] = EMPTY;

    Ok(())
}

/// Scan all 44 winning shapes for an all-same-owner run or square.
///
/// A player holding several winning shapes at once is still a single win.
/// Both players holding one simultaneously cannot occur, because only one
/// cell changes per move; the debug assertion documents that invariant.
pub fn winner(board: &Board) -> Option<Player> {
    let mut found: Option<Player> = None;

    for shape in &WIN_SHAPES {
        let first = board[shape[0] as usize];
        if first == EMPTY {
            continue;
        }
        if shape.iter().all(|&i| board[i as usize] == first) {
            let owner = Player::from_piece(first)?;
            debug_assert!(
                found.is_none() || found == Some(owner),
                "both players cannot hold a winning shape"
            );
            found = Some(owner);
            #[cfg(not(debug_assertions))]
            return found;
        }
    }

    found
}
