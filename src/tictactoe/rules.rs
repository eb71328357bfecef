//! Free-function rules surface used by game drivers.
//!
//! Each function is a pure query or transition over a [`Board`] and simply
//! forwards to the corresponding method.

use super::board::{Action, Board, Player};
use crate::error::Result;

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// Player whose move is next; fails on terminal or unreachable boards
pub fn player(board: &Board) -> Result<Player> {
    board.player()
}

/// Legal actions in row-major order
pub fn actions(board: &Board) -> Vec<Action> {
    board.actions()
}

/// Board obtained by the player to move taking `action`
pub fn result(board: &Board, action: Action) -> Result<Board> {
    board.result(action)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// +1 if X won, -1 if O won, 0 for a draw; fails on open boards
pub fn utility(board: &Board) -> Result<i32> {
    board.utility()
}
