//! Move making and unmaking for search
//!
//! Applies and reverts moves on the search's private state snapshot. The
//! undo record captures the prior phase, so a placement that flips the game
//! into the movement phase is fully reversible while backtracking.

use crate::constants::*;
use crate::types::*;

/// Information needed to undo a move
pub(crate) struct UndoInfo {
    phase: Phase,
}

/// Make a move on the state (returns undo information)
pub(crate) fn make_move(state: &mut GameState, mv: Move, player: Player) -> UndoInfo {
    let undo = UndoInfo { phase: state.phase };

    match mv {
        Move::Place(index) => {
            state.board[index as usize] = player.piece();
            state.placed[player.index()] += 1;
            if state.placed == [PIECES_PER_PLAYER; 2] {
                state.phase = Phase::Movement;
            }
        }
        Move::Shift { from, to } => {
            state.board[to as usize] = state.board[from as usize];
            state.board[from as usize] = EMPTY;
        }
    }

    state.to_move = player.opponent();
    undo
}

/// Unmake a move on the state
pub(crate) fn unmake_move(state: &mut GameState, mv: Move, player: Player, undo: UndoInfo) {
    match mv {
        Move::Place(index) => {
            state.board[index as usize] = EMPTY;
            state.placed[player.index()] -= 1;
        }
        Move::Shift { from, to } => {
            state.board[from as usize] = state.board[to as usize];
            state.board[to as usize] = EMPTY;
        }
    }

    state.phase = undo.phase;
    state.to_move = player;
}
