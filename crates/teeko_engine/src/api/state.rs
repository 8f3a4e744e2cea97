//! Game state queries and automated move selection
//!
//! Read-only accessors for display layers, plus the move-request interface:
//! a raw board snapshot goes in, a validated search outcome comes out. The
//! controller never invokes the search itself; an automation layer calls
//! [`request_move`] and feeds the chosen move back through
//! [`GameController::place`] / [`GameController::shift`].

use std::time::Duration;

use tracing::debug;

use super::game::GameController;
use crate::book;
use crate::constants::*;
use crate::error::TeekoResult;
use crate::move_gen::legal_moves;
use crate::search::find_best_move;
use crate::types::*;

impl GameController {
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.draw
    }

    pub fn current_player(&self) -> Player {
        self.state.to_move
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn pieces_placed(&self, player: Player) -> u8 {
        self.state.pieces_placed(player)
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Snapshot of the full state, for callers that drive the search.
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves for the current player, in deterministic order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        legal_moves(&self.state, self.state.to_move)
    }

    /// One-line status: phase plus per-player placement progress.
    pub fn status(&self) -> String {
        match self.state.phase {
            Phase::Placement => format!(
                "PLACEMENT PHASE - Player 1: {}/4, Player 2: {}/4",
                self.state.pieces_placed(Player::One),
                self.state.pieces_placed(Player::Two),
            ),
            Phase::Movement => "MOVEMENT PHASE".to_string(),
        }
    }

    /// ASCII rendering of the board for console embeddings.
    pub fn board_display(&self) -> String {
        let mut display = String::from("\n     0   1   2   3   4\n");
        display.push_str("   ┌───┬───┬───┬───┬───┐\n");
        for row in 0..BOARD_SIZE {
            display.push_str(&format!(" {} │", row));
            for col in 0..BOARD_SIZE {
                let cell = self.state.board[(row * BOARD_SIZE + col) as usize];
                let glyph = match cell {
                    PIECE_ONE => " ● │",
                    PIECE_TWO => " ○ │",
                    _ => "   │",
                };
                display.push_str(glyph);
            }
            display.push('\n');
            if row < BOARD_SIZE - 1 {
                display.push_str("   ├───┼───┼───┼───┼───┤\n");
            } else {
                display.push_str("   └───┴───┴───┴───┴───┘\n");
            }
        }
        display
    }
}

/// A request for an automated move.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest {
    /// Board as a 25-cell row-major snapshot.
    pub board: Board,
    /// Player the move is for.
    pub player: Player,
    /// Maximum search depth.
    pub max_depth: u8,
    /// Optional wall-clock budget; absent means fixed-depth search only.
    pub time_budget: Option<Duration>,
}

impl MoveRequest {
    /// Request with the stock depth and time budget.
    pub fn new(board: Board, player: Player) -> Self {
        MoveRequest {
            board,
            player,
            max_depth: DEFAULT_DEPTH,
            time_budget: Some(Duration::from_secs_f32(DEFAULT_TIME_BUDGET_SECS)),
        }
    }
}

/// Select a move for the requested position.
///
/// Validates the snapshot, consults the opening book during the placement
/// phase, then falls through to the iterative-deepening search.
///
/// # Errors
///
/// [`crate::error::TeekoError::InvalidQuery`] for a malformed board or a
/// zero depth limit. Deadline expiry is not an error; the outcome simply
/// reflects the last completed depth.
pub async fn request_move(request: &MoveRequest) -> TeekoResult<SearchOutcome> {
    let state = GameState::from_board(request.board, request.player)?;

    if let Some(mv) = book::lookup(&state) {
        debug!(?mv, "opening book hit");
        return Ok(SearchOutcome {
            best: Some(mv),
            score: 0,
            depth: 0,
            nodes: 0,
        });
    }

    find_best_move(&state, request.player, request.max_depth, request.time_budget).await
}
