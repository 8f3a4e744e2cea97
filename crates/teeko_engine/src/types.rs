//! # Teeko Engine Core Types
//!
//! ## The `GameState` Structure
//!
//! `GameState` is the complete, self-contained description of a Teeko
//! position: the 25-cell board, the current phase, how many pieces each
//! player has placed, and whose turn it is. It is small (a few dozen bytes)
//! and `Copy`, so the search engine works on disposable snapshots rather
//! than sharing mutable state with the controller; recursive exploration of
//! one branch can never leak partial mutations into a sibling.
//!
//! ## The `Move` Enum
//!
//! A move is a tagged union checked at compile time:
//! - `Place(index)`: drop a new piece on an empty point (placement phase)
//! - `Shift { from, to }`: slide a piece one step in any of the 8
//!   directions (movement phase)
//!
//! Producers cannot return a placement during the movement phase (or vice
//! versa) without the rule layer rejecting it; there is no stringly-typed
//! move format anywhere in the engine.
//!
//! ## Phase Monotonicity
//!
//! `Phase` flips from `Placement` to `Movement` exactly once, when both
//! players' placed counts first reach four, and never reverts for the
//! lifetime of a game. The search engine's make/unmake machinery may rewind
//! the flip inside its private snapshot while backtracking, but every state
//! it hands back is fully unwound, so observers only ever see the monotonic
//! progression.

use super::constants::*;
use super::error::{TeekoError, TeekoResult};

pub type Board = [i8; CELL_COUNT];

/// One of the two Teeko players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The cell value this player's pieces carry on the board.
    #[inline]
    pub fn piece(self) -> i8 {
        match self {
            Player::One => PIECE_ONE,
            Player::Two => PIECE_TWO,
        }
    }

    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays such as `GameState::placed`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Recover a player from a non-empty cell value.
    #[inline]
    pub fn from_piece(piece: i8) -> Option<Player> {
        match piece {
            PIECE_ONE => Some(Player::One),
            PIECE_TWO => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// The two phases of a Teeko game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Movement,
}

/// A Teeko move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place a new piece on an empty point (placement phase only).
    Place(i8),
    /// Slide a piece to an adjacent empty point (movement phase only).
    Shift { from: i8, to: i8 },
}

/// Complete state of one Teeko game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    /// Pieces placed so far, indexed by `Player::index`.
    pub placed: [u8; 2],
    pub to_move: Player,
}

impl GameState {
    /// Fresh game: empty board, placement phase, player one to move.
    pub fn new() -> Self {
        GameState {
            board: [EMPTY; CELL_COUNT],
            phase: Phase::Placement,
            placed: [0, 0],
            to_move: Player::One,
        }
    }

    /// Reconstruct a state from a raw board snapshot, validating it.
    ///
    /// The phase and placed counts are derived from the board: once both
    /// players have four pieces down the game is in the movement phase.
    ///
    /// # Errors
    ///
    /// Returns [`TeekoError::InvalidQuery`] if any cell holds a value other
    /// than empty/±1, if either player has more than four pieces on the
    /// board, or if the player to move has already placed all pieces while
    /// the game is still in the placement phase.
    pub fn from_board(board: Board, to_move: Player) -> TeekoResult<Self> {
        let mut placed = [0u8, 0u8];
        for (i, &cell) in board.iter().enumerate() {
            match cell {
                EMPTY => {}
                PIECE_ONE => placed[0] += 1,
                PIECE_TWO => placed[1] += 1,
                other => {
                    return Err(TeekoError::InvalidQuery {
                        message: format!("invalid cell value {} at index {}", other, i),
                    });
                }
            }
        }

        for (slot, &count) in placed.iter().enumerate() {
            if count > PIECES_PER_PLAYER {
                return Err(TeekoError::InvalidQuery {
                    message: format!("player {} has {} pieces on the board", slot + 1, count),
                });
            }
        }

        let phase = if placed == [PIECES_PER_PLAYER; 2] {
            Phase::Movement
        } else {
            Phase::Placement
        };

        if phase == Phase::Placement && placed[to_move.index()] == PIECES_PER_PLAYER {
            return Err(TeekoError::InvalidQuery {
                message: format!("{} has already placed all pieces", to_move),
            });
        }

        Ok(GameState {
            board,
            phase,
            placed,
            to_move,
        })
    }

    #[inline]
    pub fn pieces_placed(&self, player: Player) -> u8 {
        self.placed[player.index()]
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Result of a search invocation.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move found, or `None` when no legal move exists or the very
    /// first depth iteration could not finish before the deadline.
    pub best: Option<Move>,
    /// Score of `best` from the searching player's perspective.
    pub score: i16,
    /// Deepest fully completed iteration.
    pub depth: u32,
    /// Nodes expanded over all iterations.
    pub nodes: u64,
}
