//! Game lifecycle management
//!
//! The controller owns the authoritative game state and the position
//! history used for threefold-repetition draws. One controller instance is
//! one game; instances are independently owned, so parallel self-play
//! simply runs one controller per task.

use std::collections::HashMap;

use crate::types::*;

/// Orchestrates one Teeko game: holds the board, tracks repetitions,
/// applies validated moves and reports terminal conditions.
pub struct GameController {
    pub(super) state: GameState,
    /// Occurrence counts of (board, player-to-move) pairs.
    pub(super) history: HashMap<(Board, Player), u32>,
    pub(super) game_over: bool,
    pub(super) winner: Option<Player>,
    pub(super) draw: bool,
}

impl GameController {
    /// Create a controller with a fresh game.
    pub fn new() -> Self {
        GameController {
            state: GameState::new(),
            history: HashMap::new(),
            game_over: false,
            winner: None,
            draw: false,
        }
    }

    /// Reset to a fresh game, clearing the position history.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history.clear();
        self.game_over = false;
        self.winner = None;
        self.draw = false;
    }
}

impl Default for GameController {
    fn default() -> Self {
        GameController::new()
    }
}
