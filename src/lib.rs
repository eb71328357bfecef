//! Tic-Tac-Toe rules engine and exhaustive adversarial search
//!
//! This crate provides:
//! - A pure rules engine over immutable 3x3 boards
//! - Plain minimax and alpha-beta searches computing the optimal move
//! - A small command-line front end for querying positions

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    ActionValue, SearchOutcome, SearchStats, Strategy, evaluate, minimax, optimal_actions, search,
};
pub use tictactoe::{
    Action, Board, Cell, Game, GameOutcome, Player,
    rules::{actions, initial_state, player, result, terminal, utility, winner},
};
