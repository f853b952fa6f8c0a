//! Tic-tac-toe rules engine with a tiered heuristic computer opponent
//!
//! This crate provides:
//! - Board state representation with parsing and display
//! - Win/tie detection over the 8 winning lines
//! - A computer opponent with three difficulty levels
//!   (random / winning-move-seeking / winning-plus-blocking)
//!
//! Rendering, input capture, and turn sequencing belong to the caller;
//! see [`GameEngine`] for the contract.

pub mod board;
pub mod engine;
pub mod error;
pub mod lines;

pub use board::{BOARD_SIZE, Board, Cell, Player};
pub use engine::{DifficultyLevel, GameEngine, Outcome};
pub use error::{Error, Result};
