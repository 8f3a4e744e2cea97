//! Alpha-beta search with iterative deepening
//!
//! This module implements the move-selection engine using:
//! - Negamax variant of alpha-beta pruning (ITERATIVE - no recursion)
//! - Iterative deepening with a cooperative wall-clock deadline
//! - Move ordering seeded by the previous iteration's best move
//! - Make/unmake on a private state snapshot
//!
//! The inner search walks an explicit stack of frames instead of recursing,
//! so search depth can never overflow the call stack, and it yields
//! cooperatively on a small time slice so an embedding event loop stays
//! responsive while a long search runs.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking utilities
//! - `iterative` - Iterative deepening driver

mod alphabeta;
mod iterative;
mod make_unmake;
mod ordering;

use instant::Instant;

use super::types::GameState;

pub use iterative::find_best_move;

/// Mutable context threaded through one search invocation.
///
/// Owns a private copy of the game state; the caller's state is never
/// touched. Statistics accumulate across all deepening iterations.
pub(crate) struct SearchContext {
    pub state: GameState,
    pub nodes: u64,
    pub cut: u64,
    pub deadline: Option<Instant>,
}

impl SearchContext {
    pub(crate) fn new(state: GameState, deadline: Option<Instant>) -> Self {
        SearchContext {
            state,
            nodes: 0,
            cut: 0,
            deadline,
        }
    }

    #[inline]
    pub(crate) fn deadline_expired(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}
