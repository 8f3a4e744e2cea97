//! # Teeko Engine Constants - Evaluation Weights & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes all constant values used throughout the Teeko engine:
//! board geometry, cell encodings, precalculated winning shapes, evaluation
//! weights and alpha-beta search tuning parameters.
//!
//! ## Cell Encoding
//!
//! The board uses **signed 8-bit integers** where:
//! - `+1` represents a piece belonging to player one
//! - `-1` represents a piece belonging to player two
//! - `0` represents an empty point
//!
//! This encoding keeps the whole board in 25 bytes and makes ownership checks
//! a single sign comparison, which matters during the thousands of positions
//! visited per search.
//!
//! ## Winning Shapes
//!
//! Teeko has exactly 44 winning shapes on the 5×5 board:
//! - 10 horizontal runs of four (5 rows × 2 windows)
//! - 10 vertical runs of four
//! - 4 down-right diagonal runs + 4 down-left diagonal runs
//! - 16 2×2 squares
//!
//! `WIN_SHAPES` is computed once at compile time and shared by the win
//! detector and the evaluator, so both agree on what counts as a line.
//!
//! ## Score Sentinels
//!
//! `WIN_VALUE` (10,000) dominates any achievable heuristic sum (bounded by a
//! few thousand), so terminal outcomes always outrank positional judgement.
//! `AB_INF` (32,000) sits strictly above `WIN_VALUE` plus any depth bonus and
//! serves only as the alpha-beta window bound, never as a real score.

pub const BOARD_SIZE: i8 = 5;
pub const CELL_COUNT: usize = 25;
pub const PIECES_PER_PLAYER: u8 = 4;

pub const EMPTY: i8 = 0;
pub const PIECE_ONE: i8 = 1;
pub const PIECE_TWO: i8 = -1;

pub const CENTER: i8 = 12;

/// The 8 one-step directions as (row delta, col delta), listed so that the
/// resulting destination indices come out in ascending order. Move generation
/// relies on this for its deterministic ordering guarantee.
pub const STEP_DIRS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub const AB_INF: i16 = 32000;
pub const WIN_VALUE: i16 = 10000;

pub const OPEN_THREE_WEIGHT: i16 = 50;
pub const OPEN_TWO_WEIGHT: i16 = 10;

/// Per-cell occupancy bonus. Central points participate in more winning
/// shapes, so holding them is worth a small static edge.
pub const CENTER_WEIGHT: [i16; CELL_COUNT] = [
    0, 1, 1, 1, 0,
    1, 2, 3, 2, 1,
    1, 3, 4, 3, 1,
    1, 2, 3, 2, 1,
    0, 1, 1, 1, 0,
];

pub const MAX_DEPTH: u8 = 15;
pub const DEFAULT_DEPTH: u8 = 3;
pub const DEFAULT_TIME_BUDGET_SECS: f32 = 5.0;

/// Deadline is polled once per this many expanded nodes, bounding the
/// timer overhead without letting an expired search run long.
pub const DEADLINE_CHECK_INTERVAL: u64 = 128;

/// Maximum time slice before the search cooperatively yields, keeping an
/// embedding event loop responsive while a long search runs.
pub const YIELD_SLICE_MILLIS: u128 = 5;

pub const WIN_SHAPE_COUNT: usize = 44;

/// All winning shapes, each as four board indices.
pub const WIN_SHAPES: [[i8; 4]; WIN_SHAPE_COUNT] = build_win_shapes();

const fn idx(row: i8, col: i8) -> i8 {
    row * BOARD_SIZE + col
}

const fn build_win_shapes() -> [[i8; 4]; WIN_SHAPE_COUNT] {
    let mut shapes = [[0i8; 4]; WIN_SHAPE_COUNT];
    let mut n = 0;

    // Horizontal runs
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col <= BOARD_SIZE - 4 {
            shapes[n] = [
                idx(row, col),
                idx(row, col + 1),
                idx(row, col + 2),
                idx(row, col + 3),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Vertical runs
    let mut col = 0;
    while col < BOARD_SIZE {
        let mut row = 0;
        while row <= BOARD_SIZE - 4 {
            shapes[n] = [
                idx(row, col),
                idx(row + 1, col),
                idx(row + 2, col),
                idx(row + 3, col),
            ];
            n += 1;
            row += 1;
        }
        col += 1;
    }

    // Down-right diagonals
    let mut row = 0;
    while row <= BOARD_SIZE - 4 {
        let mut col = 0;
        while col <= BOARD_SIZE - 4 {
            shapes[n] = [
                idx(row, col),
                idx(row + 1, col + 1),
                idx(row + 2, col + 2),
                idx(row + 3, col + 3),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Down-left diagonals
    let mut row = 0;
    while row <= BOARD_SIZE - 4 {
        let mut col = 3;
        while col < BOARD_SIZE {
            shapes[n] = [
                idx(row, col),
                idx(row + 1, col - 1),
                idx(row + 2, col - 2),
                idx(row + 3, col - 3),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // 2x2 squares
    let mut row = 0;
    while row < BOARD_SIZE - 1 {
        let mut col = 0;
        while col < BOARD_SIZE - 1 {
            shapes[n] = [
                idx(row, col),
                idx(row, col + 1),
                idx(row + 1, col),
                idx(row + 1, col + 1),
            ];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    shapes
}
