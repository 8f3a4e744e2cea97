//! Static position evaluation
//!
//! Scores a Teeko position for one player using:
//! - Open line potential (2- and 3-in-a-shape counts, threes weighted
//!   heavier than twos)
//! - Central occupancy (central points sit in more winning shapes)
//!
//! Terminal positions return the `WIN_VALUE` sentinel, which dominates any
//! heuristic sum, so a found win always outranks positional judgement.
//!
//! ## Module Organization
//!
//! - `lines` - Open-shape counting over the precalculated shape table

mod lines;

use super::board::winner;
use super::constants::*;
use super::types::*;

pub use lines::open_line_score;

/// Evaluate a position from `for_player`'s perspective.
///
/// Non-terminal score is own term minus opponent term; each term is the
/// open-line score plus the central occupancy bonus. The weights are
/// monotonic: adding a piece to an open shape never lowers its
/// contribution.
pub fn evaluate(board: &Board, for_player: Player) -> i16 {
    if let Some(w) = winner(board) {
        return if w == for_player { WIN_VALUE } else { -WIN_VALUE };
    }

    side_score(board, for_player) - side_score(board, for_player.opponent())
}

fn side_score(board: &Board, player: Player) -> i16 {
    open_line_score(board, player) + center_score(board, player)
}

fn center_score(board: &Board, player: Player) -> i16 {
    let piece = player.piece();
    let mut score = 0i16;
    for (i, &cell) in board.iter().enumerate() {
        if cell == piece {
            score += CENTER_WEIGHT[i];
        }
    }
    score
}
