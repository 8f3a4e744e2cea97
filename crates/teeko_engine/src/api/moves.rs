//! Move application
//!
//! The `(success, message)` pair mirrors what a UI needs verbatim: a
//! human-readable reason on failure, a confirmation on success. Rule
//! violations leave the game state untouched and are never fatal; whether a
//! rejected automated move counts as a forfeit is the embedding layer's
//! policy, not the engine's.

use tracing::debug;

use super::game::GameController;
use crate::board::{self, is_valid_square, rc_to_index, winner};
use crate::error::TeekoError;
use crate::types::*;

impl GameController {
    /// Place a piece for the current player at (row, col).
    pub fn place(&mut self, row: i8, col: i8) -> (bool, String) {
        if self.game_over {
            return (false, "Game is over".to_string());
        }
        if !is_valid_square(row, col) {
            // Saturate so wildly invalid coordinates cannot overflow i8.
            let index = row.saturating_mul(5).saturating_add(col);
            return (false, TeekoError::OutOfBounds { index }.to_string());
        }

        let player = self.state.to_move;
        let phase_before = self.state.phase;
        match board::place(&mut self.state, rc_to_index(row, col), player) {
            Ok(()) => {
                if phase_before != self.state.phase {
                    debug!("all pieces placed, entering movement phase");
                }
                self.conclude_turn("Piece placed successfully")
            }
            Err(e) => (false, e.to_string()),
        }
    }

    /// Move the current player's piece one step.
    pub fn shift(&mut self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> (bool, String) {
        if self.game_over {
            return (false, "Game is over".to_string());
        }
        if !is_valid_square(from_row, from_col) {
            let index = from_row.saturating_mul(5).saturating_add(from_col);
            return (false, TeekoError::OutOfBounds { index }.to_string());
        }
        if !is_valid_square(to_row, to_col) {
            let index = to_row.saturating_mul(5).saturating_add(to_col);
            return (false, TeekoError::OutOfBounds { index }.to_string());
        }

        let player = self.state.to_move;
        match board::shift(
            &mut self.state,
            rc_to_index(from_row, from_col),
            rc_to_index(to_row, to_col),
            player,
        ) {
            Ok(()) => self.conclude_turn("Move successful"),
            Err(e) => (false, e.to_string()),
        }
    }

    /// Shared post-move bookkeeping: winner first, then repetition, then
    /// the turn switch. Repetition is only consulted after confirming no
    /// winner, so a move that both wins and repeats still wins.
    fn conclude_turn(&mut self, ok_message: &str) -> (bool, String) {
        if let Some(w) = winner(&self.state.board) {
            self.game_over = true;
            self.winner = Some(w);
            debug!(winner = %w, "game over");
            return (true, format!("Winner: {}!", w));
        }

        let next = self.state.to_move.opponent();
        let count = self
            .history
            .entry((self.state.board, next))
            .or_insert(0);
        *count += 1;
        if *count >= 3 {
            self.game_over = true;
            self.draw = true;
            debug!("game over, draw by threefold repetition");
            return (true, "Draw by threefold repetition".to_string());
        }

        self.state.to_move = next;
        (true, ok_message.to_string())
    }
}
