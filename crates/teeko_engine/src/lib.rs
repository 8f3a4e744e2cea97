//! # Teeko Engine - Rules and Adversarial Search
//!
//! A self-contained engine for Teeko, the two-phase abstract strategy game
//! on a 5×5 grid: each player places four pieces, then pieces slide one
//! step in any of the 8 directions until someone forms four in a
//! row/column/diagonal or a 2×2 square.
//!
//! The crate covers:
//! - **Rule engine**: legality checking, phase transitions, win and
//!   threefold-repetition draw detection ([`board`], [`api`])
//! - **Move generation**: lazy, deterministic enumeration ([`move_gen`])
//! - **Evaluation**: open-line and central-occupancy heuristic
//!   ([`evaluation`])
//! - **Search**: time-bounded iterative-deepening alpha-beta with an
//!   explicit frame stack and cooperative yielding ([`search`])
//! - **Opening book**: precomputed placement replies ([`book`])
//!
//! Rendering, input handling and process orchestration are deliberately
//! outside this crate; external layers consume it through
//! [`api::GameController`] (move application and queries) and
//! [`api::request_move`] (automated move selection).

pub mod api;
pub mod board;
pub mod book;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{request_move, GameController, MoveRequest};
pub use error::{TeekoError, TeekoResult};
pub use types::{Board, GameState, Move, Phase, Player, SearchOutcome};
