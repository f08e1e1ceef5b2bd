//! Rules engine for Othello (Reversi).
//!
//! The engine is made of three layers:
//!
//! * [`board`] - the 8x8 grid of discs and its low-level reads and writes,
//! * [`flip`] - the move evaluator computing captures and legal moves,
//! * [`game_state`] - the turn controller applying placements and passes,
//!   forcing passes and detecting the end of the game.
//!
//! Presentation is left to the caller, which drives a [`game_state::GameState`]
//! and renders the board and summaries it reports.

pub mod bitboard;
pub mod board;
pub mod disc;
pub mod flip;
pub mod game_state;
pub mod perft;
pub mod player;
pub mod square;
