//! Board validation and reachable-state enumeration

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board can arise from legal play starting with X.
    ///
    /// Boards built through [`Board::result`] always satisfy this; boards
    /// parsed from strings may not.
    pub fn is_valid(&self) -> bool {
        let count = self.mark_counts();

        // X moves first and turns alternate
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Multiple winning lines are only possible when one move completed them
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }

        lines[0]
            .iter()
            .any(|coord| lines[1..].iter().all(|line| line.contains(coord)))
    }

    /// Every distinct board reachable from the empty board, terminal ones included
    pub fn reachable_boards() -> Vec<Board> {
        let mut boards = Vec::new();
        let mut stack = vec![Board::new()];
        let mut seen = HashSet::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board) {
                continue;
            }
            boards.push(board);

            for action in board.actions() {
                if let Ok(next) = board.result(action) {
                    stack.push(next);
                }
            }
        }

        boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_board_count() {
        // 5478 distinct legal positions, the empty board included
        let boards = Board::reachable_boards();
        assert_eq!(boards.len(), 5478);
        assert!(boards.iter().all(Board::is_valid));
    }

    #[test]
    fn test_invalid_counts() {
        assert!(!Board::from_string("XX.......").unwrap().is_valid());
        assert!(!Board::from_string("O........").unwrap().is_valid());
    }

    #[test]
    fn test_both_players_winning_is_invalid() {
        assert!(!Board::from_string("XXXOOO...").unwrap().is_valid());
    }

    #[test]
    fn test_winner_must_move_last() {
        // X has a line but O has as many marks, so O moved after X had won
        assert!(!Board::from_string("XXXOO.O..").unwrap().is_valid());
        assert!(Board::from_string("XXXOO....").unwrap().is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // X completed the top row and left column with the corner move
        let shared = Board::from_string("XXX/XOO/XOO").unwrap();
        assert!(shared.winning_lines_share_cell(Player::X));
        assert!(shared.is_valid());

        // Two parallel rows can never be completed by one move
        let parallel = Board::from_string("XXX/OO./XXX").unwrap();
        assert!(!parallel.winning_lines_share_cell(Player::X));
        assert!(!parallel.is_valid());
    }
}
