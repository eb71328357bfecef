//! Tic-Tac-Toe rules engine

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Action, Board, Cell, MarkCount, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
