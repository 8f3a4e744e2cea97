//! Move generation
//!
//! Enumerates the legal moves for a position as a lazy, finite, restartable
//! iterator. Ordering is deterministic: placements come out in ascending
//! index order; shifts in ascending source order, then ascending destination
//! (the direction table is arranged so destinations are already sorted).
//! Search reproducibility and the tie-break rule both rest on this.

use super::board::{index_to_rc, is_valid_square, rc_to_index};
use super::constants::*;
use super::types::*;

/// Lazy iterator over the legal moves for `player` in `state`.
///
/// Restartable: calling [`legal_moves`] again on an unmodified state yields
/// an identical sequence.
pub struct LegalMoves<'a> {
    state: &'a GameState,
    player: Player,
    from: i8,
    dir: usize,
}

/// Enumerate legal moves for a phase/player.
///
/// Placement phase: every empty point. Movement phase: every (from, to)
/// pair where `from` holds the player's piece and `to` is an empty point at
/// Chebyshev distance 1.
pub fn legal_moves<'a>(state: &'a GameState, player: Player) -> LegalMoves<'a> {
    LegalMoves {
        state,
        player,
        from: 0,
        dir: 0,
    }
}

/// Number of legal moves for `player`, without materializing them.
///
/// Mobility-style query for evaluation and diagnostics.
pub fn count_moves(state: &GameState, player: Player) -> usize {
    legal_moves(state, player).count()
}

impl<'a> Iterator for LegalMoves<'a> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        match self.state.phase {
            Phase::Placement => {
                // A player with all four pieces down cannot place a fifth,
                // even when the opponent is still mid-placement.
                if self.state.pieces_placed(self.player) >= PIECES_PER_PLAYER {
                    return None;
                }
                while (self.from as usize) < CELL_COUNT {
                    let index = self.from;
                    self.from += 1;
                    if self.state.board[index as usize] == EMPTY {
                        return Some(Move::Place(index));
                    }
                }
                None
            }
            Phase::Movement => {
                let piece = self.player.piece();
                while (self.from as usize) < CELL_COUNT {
                    if self.state.board[self.from as usize] == piece {
                        while self.dir < STEP_DIRS.len() {
                            let (dr, dc) = STEP_DIRS[self.dir];
                            self.dir += 1;
                            let (row, col) = index_to_rc(self.from);
                            if is_valid_square(row + dr, col + dc) {
                                let to = rc_to_index(row + dr, col + dc);
                                if self.state.board[to as usize] == EMPTY {
                                    return Some(Move::Shift {
                                        from: self.from,
                                        to,
                                    });
                                }
                            }
                        }
                    }
                    self.from += 1;
                    self.dir = 0;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::place;

    fn movement_state() -> GameState {
        let mut state = GameState::new();
        let order = [
            (0, Player::One),
            (20, Player::Two),
            (2, Player::One),
            (22, Player::Two),
            (10, Player::One),
            (4, Player::Two),
            (7, Player::One),
            (14, Player::Two),
        ];
        for (index, player) in order {
            place(&mut state, index, player).unwrap();
        }
        state
    }

    #[test]
    fn test_placement_moves_are_all_empty_cells_ascending() {
        let mut state = GameState::new();
        place(&mut state, 12, Player::One).unwrap();

        let moves: Vec<Move> = legal_moves(&state, Player::Two).collect();
        assert_eq!(moves.len(), 24);
        let mut last = -1;
        for mv in &moves {
            match mv {
                Move::Place(i) => {
                    assert!(*i > last, "placements must come out ascending");
                    assert_ne!(*i, 12);
                    last = *i;
                }
                Move::Shift { .. } => panic!("no shifts during placement"),
            }
        }
    }

    #[test]
    fn test_movement_moves_only_own_pieces_and_empty_targets() {
        let state = movement_state();
        let moves: Vec<Move> = legal_moves(&state, Player::One).collect();
        assert!(!moves.is_empty());

        for mv in &moves {
            match mv {
                Move::Shift { from, to } => {
                    assert_eq!(state.board[*from as usize], Player::One.piece());
                    assert_eq!(state.board[*to as usize], EMPTY);
                    assert!(crate::board::is_adjacent(*from, *to));
                }
                Move::Place(_) => panic!("no placements during movement"),
            }
        }
    }

    #[test]
    fn test_movement_ordering_is_source_then_destination() {
        let state = movement_state();
        let moves: Vec<Move> = legal_moves(&state, Player::One).collect();

        let mut last = (-1, -1);
        for mv in &moves {
            if let Move::Shift { from, to } = mv {
                assert!(
                    (*from, *to) > last,
                    "shifts must come out ordered by (from, to)"
                );
                last = (*from, *to);
            }
        }
    }

    #[test]
    fn test_legal_moves_is_idempotent() {
        let state = movement_state();
        let first: Vec<Move> = legal_moves(&state, Player::One).collect();
        let second: Vec<Move> = legal_moves(&state, Player::One).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_moves_matches_enumeration() {
        let placement = {
            let mut state = GameState::new();
            place(&mut state, 12, Player::One).unwrap();
            state
        };
        assert_eq!(count_moves(&placement, Player::Two), 24);

        let movement = movement_state();
        for player in [Player::One, Player::Two] {
            assert_eq!(
                count_moves(&movement, player),
                legal_moves(&movement, player).count()
            );
        }
        assert!(count_moves(&movement, Player::One) > 0);
    }

    #[test]
    fn test_fully_placed_player_gets_no_fifth_placement() {
        // Player one has all four pieces down while player two is still
        // mid-placement; only player two may keep placing.
        let mut board = [EMPTY; CELL_COUNT];
        for &i in &[0, 2, 4, 10] {
            board[i] = PIECE_ONE;
        }
        board[20] = PIECE_TWO;
        board[22] = PIECE_TWO;
        let state = GameState::from_board(board, Player::Two).unwrap();
        assert_eq!(state.phase, Phase::Placement);

        assert_eq!(count_moves(&state, Player::One), 0);
        assert!(count_moves(&state, Player::Two) > 0);
    }

    #[test]
    fn test_corner_piece_has_three_directions() {
        let mut state = movement_state();
        // Clear everything around the corner piece at 0 except its own cell
        for i in [1, 5, 6] {
            state.board[i] = EMPTY;
        }
        let from_corner: Vec<Move> = legal_moves(&state, Player::One)
            .filter(|mv| matches!(mv, Move::Shift { from: 0, .. }))
            .collect();
        assert_eq!(from_corner.len(), 3);
    }
}
