//! Public API for the Teeko engine
//!
//! Provides the game controller consumed by UI/automation layers and the
//! move-request interface used to drive automated players.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (controller construction, reset)
//! - `moves` - Move application with `(success, message)` reporting
//! - `state` - Read-only queries, display helpers and the move request

mod game;
mod moves;
mod state;

pub use game::GameController;
pub use state::{request_move, MoveRequest};
