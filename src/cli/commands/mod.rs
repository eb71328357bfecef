//! Subcommands of the `tictactoe` binary

pub mod analyze;
pub mod best_move;
pub mod selfplay;
