//! Alpha-beta search with negamax (ITERATIVE VERSION - No recursion)
//!
//! The search walks an explicit stack of frames instead of recursing, so no
//! search depth can overflow the call stack. The wall-clock deadline is
//! polled at a fixed node interval; on expiry the whole stack is unwound
//! (restoring the context's state snapshot) and the caller receives a
//! deadline signal instead of a score.

use futures_lite::future::yield_now;
use instant::Instant;

use super::make_unmake::{make_move, unmake_move, UndoInfo};
use super::ordering::order_moves;
use super::SearchContext;
use crate::board::winner;
use crate::constants::*;
use crate::error::{TeekoError, TeekoResult};
use crate::evaluation::evaluate;
use crate::move_gen::legal_moves;
use crate::types::*;

/// Stack frame for the iterative alpha-beta search
///
/// Each frame represents one "recursive call" of the textbook recursive
/// formulation.
struct SearchFrame {
    depth: i32,
    alpha: i16,
    beta: i16,
    player: Player,
    move_index: usize,
    moves: Vec<Move>,
    best_score: i16,
    made_move: Option<(Move, UndoInfo)>,
    returning_score: Option<i16>,
}

impl SearchFrame {
    fn new(depth: i32, alpha: i16, beta: i16, player: Player) -> Self {
        SearchFrame {
            depth,
            alpha,
            beta,
            player,
            move_index: 0,
            moves: Vec::new(),
            best_score: -AB_INF,
            made_move: None,
            returning_score: None,
        }
    }
}

/// Unwind every frame, reverting its made move, so the context's state
/// snapshot is back at the root position.
fn unwind(stack: &mut Vec<SearchFrame>, state: &mut GameState) {
    while let Some(mut frame) = stack.pop() {
        if let Some((mv, undo)) = frame.made_move.take() {
            unmake_move(state, mv, frame.player, undo);
        }
    }
}

/// Negamax alpha-beta over an explicit frame stack.
///
/// Returns the score of the position from `player`'s perspective.
///
/// # Errors
///
/// [`TeekoError::DeadlineExpired`] when the wall-clock budget runs out
/// mid-search; the context state is fully restored before returning.
pub(crate) async fn alphabeta(
    ctx: &mut SearchContext,
    depth: i32,
    alpha: i16,
    beta: i16,
    player: Player,
) -> TeekoResult<i16> {
    let mut stack: Vec<SearchFrame> = vec![SearchFrame::new(depth, alpha, beta, player)];

    // Time slice for cooperative yielding
    let mut chunk_start = Instant::now();

    while let Some(frame) = stack.last_mut() {
        // === PHASE 1: Frame Initialization (first visit) ===
        if frame.moves.is_empty() && frame.move_index == 0 && frame.returning_score.is_none() {
            ctx.nodes += 1;

            if ctx.nodes % DEADLINE_CHECK_INTERVAL == 0 {
                if ctx.deadline_expired() {
                    unwind(&mut stack, &mut ctx.state);
                    return Err(TeekoError::DeadlineExpired);
                }
                if chunk_start.elapsed().as_millis() > YIELD_SLICE_MILLIS {
                    yield_now().await;
                    chunk_start = Instant::now();
                }
            }

            // Terminal: the previous mover completed a winning shape.
            // Deeper remaining depth means a faster win, so it scores higher.
            if let Some(w) = winner(&ctx.state.board) {
                let magnitude = WIN_VALUE + frame.depth.max(0) as i16;
                let score = if w == frame.player {
                    magnitude
                } else {
                    -magnitude
                };
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.returning_score = Some(score);
                } else {
                    return Ok(score);
                }
                continue;
            }

            // Leaf: static evaluation
            if frame.depth <= 0 {
                let score = evaluate(&ctx.state.board, frame.player);
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.returning_score = Some(score);
                } else {
                    return Ok(score);
                }
                continue;
            }

            let moves: Vec<Move> = legal_moves(&ctx.state, frame.player).collect();

            // No moves available - stalemate scores as level
            if moves.is_empty() {
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.returning_score = Some(0);
                } else {
                    return Ok(0);
                }
                continue;
            }

            frame.moves = moves;
            order_moves(&mut frame.moves);
            continue;
        }

        // === PHASE 2: Process Returning Score from Child ===
        if let Some(child_score) = frame.returning_score.take() {
            if let Some((mv, undo)) = frame.made_move.take() {
                unmake_move(&mut ctx.state, mv, frame.player, undo);
            }

            let score = -child_score; // Negamax negation

            if score > frame.best_score {
                frame.best_score = score;
            }
            frame.alpha = frame.alpha.max(score);

            // Beta cutoff
            if frame.alpha >= frame.beta {
                ctx.cut += 1;
                let final_score = frame.best_score;
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.returning_score = Some(final_score);
                } else {
                    return Ok(final_score);
                }
                continue;
            }
        }

        // === PHASE 3: Try Next Move ===
        if frame.move_index < frame.moves.len() {
            let mv = frame.moves[frame.move_index];
            frame.move_index += 1;

            let child_depth = frame.depth - 1;
            let child_alpha = -frame.beta;
            let child_beta = -frame.alpha;
            let child_player = frame.player.opponent();

            let undo = make_move(&mut ctx.state, mv, frame.player);
            frame.made_move = Some((mv, undo));

            // Push child frame (simulates recursive call)
            stack.push(SearchFrame::new(
                child_depth,
                child_alpha,
                child_beta,
                child_player,
            ));
            continue;
        }

        // === PHASE 4: All Moves Processed - Return Result ===
        let final_score = frame.best_score;
        stack.pop();
        if let Some(parent) = stack.last_mut() {
            parent.returning_score = Some(final_score);
        } else {
            return Ok(final_score);
        }
    }

    // The loop always returns through the root frame
    Err(TeekoError::InvalidQuery {
        message: format!("alphabeta: stack became empty unexpectedly at depth {}", depth),
    })
}
