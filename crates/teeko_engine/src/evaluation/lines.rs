//! Open-shape counting
//!
//! A winning shape is "open" for a player when it contains none of the
//! opponent's pieces: every missing point is still reachable. Open shapes
//! holding three own pieces are one move from winning and weigh far more
//! than shapes holding two.

use crate::constants::*;
use crate::types::*;

/// Sum of open 2- and 3-in-a-shape contributions for `player`.
pub fn open_line_score(board: &Board, player: Player) -> i16 {
    let piece = player.piece();
    let mut score = 0i16;

    for shape in &WIN_SHAPES {
        let mut own = 0u8;
        let mut other = 0u8;
        for &i in shape {
            let cell = board[i as usize];
            if cell == piece {
                own += 1;
            } else if cell != EMPTY {
                other += 1;
            }
        }
        if other == 0 {
            score += match own {
                3 => OPEN_THREE_WEIGHT,
                2 => OPEN_TWO_WEIGHT,
                _ => 0,
            };
        }
    }

    score
}
