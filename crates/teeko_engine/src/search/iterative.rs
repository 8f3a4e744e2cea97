//! Iterative deepening search
//!
//! Runs alpha-beta at increasing depth limits, seeding each iteration's
//! move ordering with the best move of the previous completed depth. A
//! wall-clock deadline derived from the caller's time budget cancels the
//! search cooperatively; a depth interrupted mid-way is discarded and the
//! result comes from the last fully finished depth.

use std::time::Duration;

use instant::Instant;
use tracing::debug;

use super::alphabeta::alphabeta;
use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_root_moves;
use super::SearchContext;
use crate::board::winner;
use crate::constants::*;
use crate::error::{TeekoError, TeekoResult};
use crate::move_gen::legal_moves;
use crate::types::*;

/// Find the best move for `player` in `state`.
///
/// Deepens from 1 to `max_depth`; with a `time_budget` the deadline is
/// polled between root moves and at a fixed node interval inside the tree.
/// The returned outcome reflects the deepest fully completed iteration;
/// ties at that depth resolve to the first move in the generator's
/// deterministic order. `best` is `None` when no legal move exists, the
/// position is already won, or even depth 1 could not finish in time.
///
/// The caller's state is never mutated; the search works on its own copy.
///
/// # Errors
///
/// [`TeekoError::InvalidQuery`] for a zero depth limit. Deadline expiry is
/// not an error: the last completed result is returned.
pub async fn find_best_move(
    state: &GameState,
    player: Player,
    max_depth: u8,
    time_budget: Option<Duration>,
) -> TeekoResult<SearchOutcome> {
    if max_depth == 0 {
        return Err(TeekoError::InvalidQuery {
            message: "search depth must be at least 1".into(),
        });
    }
    let max_depth = max_depth.min(MAX_DEPTH);

    let start = Instant::now();
    let deadline = time_budget.map(|budget| start + budget);
    let mut ctx = SearchContext::new(*state, deadline);

    // Already decided - nothing to search
    if let Some(w) = winner(&state.board) {
        let score = if w == player { WIN_VALUE } else { -WIN_VALUE };
        return Ok(SearchOutcome {
            best: None,
            score,
            depth: 0,
            nodes: 0,
        });
    }

    let root_moves: Vec<Move> = legal_moves(state, player).collect();
    if root_moves.is_empty() {
        return Ok(SearchOutcome {
            best: None,
            score: 0,
            depth: 0,
            nodes: 0,
        });
    }

    let mut best: Option<Move> = None;
    let mut best_score = -AB_INF;
    let mut completed_depth = 0u32;

    'deepening: for depth in 1..=max_depth {
        let mut moves: Vec<(usize, Move)> = root_moves.iter().copied().enumerate().collect();
        order_root_moves(&mut moves, best);

        let mut iter_best: Option<Move> = None;
        let mut iter_index = usize::MAX;
        let mut iter_score = -AB_INF;
        let mut alpha = -AB_INF;
        let beta = AB_INF;

        for (gen_index, mv) in moves {
            // Root-level deadline poll guarantees that even a budget too
            // small for a single depth-1 line aborts promptly.
            if ctx.deadline_expired() {
                debug!(depth, nodes = ctx.nodes, "deadline expired, discarding partial depth");
                break 'deepening;
            }

            let undo = make_move(&mut ctx.state, mv, player);
            // The child window is one point wider than the usual null
            // bound: a score equal to alpha comes back exact instead of as
            // a fail-low bound, which the tie-break below relies on.
            let result =
                alphabeta(&mut ctx, depth as i32 - 1, -beta, -alpha + 1, player.opponent()).await;
            unmake_move(&mut ctx.state, mv, player, undo);

            match result {
                Ok(child_score) => {
                    let score = -child_score;
                    // Exact score ties resolve to the earliest move in the
                    // generator's deterministic order, whatever the search
                    // order was.
                    if score > iter_score || (score == iter_score && gen_index < iter_index) {
                        iter_score = score;
                        iter_best = Some(mv);
                        iter_index = gen_index;
                    }
                    alpha = alpha.max(score);
                }
                Err(TeekoError::DeadlineExpired) => {
                    debug!(depth, nodes = ctx.nodes, "deadline expired, discarding partial depth");
                    break 'deepening;
                }
                Err(e) => return Err(e),
            }
        }

        best = iter_best;
        best_score = iter_score;
        completed_depth = depth as u32;
        debug!(
            depth,
            score = best_score,
            nodes = ctx.nodes,
            cuts = ctx.cut,
            "depth completed"
        );

        // A forced win needs no deeper confirmation
        if best_score.abs() >= WIN_VALUE {
            break;
        }
    }

    if completed_depth == 0 {
        // Not even depth 1 finished before the deadline
        return Ok(SearchOutcome {
            best: None,
            score: 0,
            depth: 0,
            nodes: ctx.nodes,
        });
    }

    Ok(SearchOutcome {
        best,
        score: best_score,
        depth: completed_depth,
        nodes: ctx.nodes,
    })
}
