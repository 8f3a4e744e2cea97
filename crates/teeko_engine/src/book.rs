//! Opening book for the placement phase
//!
//! A small read-only lookup table of precomputed replies, consulted before
//! search. Teeko openings are dominated by the central points: taking the
//! center first and answering a central opening diagonally is standard
//! play. The book is an optimization layer, never a correctness
//! requirement; a miss simply falls through to the search.

use super::constants::*;
use super::types::*;

/// Book entries as (occupied cells, player to move, reply).
const BOOK: &[(&[(i8, i8)], Player, Move)] = &[
    // First move: take the center.
    (&[], Player::One, Move::Place(CENTER)),
    (&[], Player::Two, Move::Place(CENTER)),
    // Center is taken: answer on a touching diagonal.
    (&[(CENTER, PIECE_ONE)], Player::Two, Move::Place(6)),
    (&[(CENTER, PIECE_TWO)], Player::One, Move::Place(6)),
    // Our center, their diagonal reply: take the opposite diagonal.
    (
        &[(CENTER, PIECE_ONE), (6, PIECE_TWO)],
        Player::One,
        Move::Place(18),
    ),
    (
        &[(CENTER, PIECE_TWO), (6, PIECE_ONE)],
        Player::Two,
        Move::Place(18),
    ),
];

fn board_with(cells: &[(i8, i8)]) -> Board {
    let mut board = [EMPTY; CELL_COUNT];
    for &(index, piece) in cells {
        board[index as usize] = piece;
    }
    board
}

/// Look up a precomputed placement reply for the current position.
///
/// Returns `None` outside the placement phase or when the position is not
/// in the book.
pub fn lookup(state: &GameState) -> Option<Move> {
    if state.phase != Phase::Placement {
        return None;
    }

    for (cells, player, reply) in BOOK {
        if *player == state.to_move && state.board == board_with(cells) {
            return Some(*reply);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_opens_in_center() {
        let state = GameState::new();
        assert_eq!(lookup(&state), Some(Move::Place(CENTER)));
    }

    #[test]
    fn test_taken_center_gets_diagonal_reply() {
        let mut board = [EMPTY; CELL_COUNT];
        board[CENTER as usize] = PIECE_ONE;
        let state = GameState::from_board(board, Player::Two).unwrap();
        assert_eq!(lookup(&state), Some(Move::Place(6)));
    }

    #[test]
    fn test_unknown_position_misses() {
        let mut board = [EMPTY; CELL_COUNT];
        board[0] = PIECE_ONE;
        let state = GameState::from_board(board, Player::Two).unwrap();
        assert_eq!(lookup(&state), None);
    }

    #[test]
    fn test_movement_phase_never_hits() {
        let mut board = [EMPTY; CELL_COUNT];
        for i in 0..4 {
            board[i] = PIECE_ONE;
            board[20 + i] = PIECE_TWO;
        }
        let state = GameState::from_board(board, Player::One).unwrap();
        assert_eq!(lookup(&state), None);
    }

    #[test]
    fn test_book_replies_target_empty_cells() {
        for (cells, _, reply) in BOOK {
            let board = board_with(cells);
            match reply {
                Move::Place(index) => assert_eq!(board[*index as usize], EMPTY),
                Move::Shift { .. } => panic!("book holds placements only"),
            }
        }
    }
}
