//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize pruning efficiency: moves toward central points
//! are tried first, and at the root the best move from the previous
//! deepening iteration leads. The sorts are stable, so equally rated moves
//! keep the generator's deterministic order, and root entries carry their
//! generation index so the driver can break exact score ties in the
//! generator's favor.

use crate::constants::*;
use crate::types::*;

#[inline]
fn destination(mv: &Move) -> usize {
    match mv {
        Move::Place(index) => *index as usize,
        Move::Shift { to, .. } => *to as usize,
    }
}

/// Order moves at an interior node for better alpha-beta pruning
pub(crate) fn order_moves(moves: &mut [Move]) {
    // Center control first; stable sort keeps generator order on ties
    moves.sort_by_key(|mv| -CENTER_WEIGHT[destination(mv)]);
}

/// Order `(generation index, move)` pairs at the root.
///
/// Center control first, then the previous depth's best move rotated to the
/// front. The pairing survives the reordering, so a move's generation index
/// stays attached to it.
pub(crate) fn order_root_moves(moves: &mut [(usize, Move)], previous_best: Option<Move>) {
    moves.sort_by_key(|(_, mv)| -CENTER_WEIGHT[destination(mv)]);

    if let Some(best) = previous_best {
        if let Some(pos) = moves.iter().position(|&(_, mv)| mv == best) {
            moves[..=pos].rotate_right(1);
        }
    }
}
