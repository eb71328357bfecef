//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Type alias for one line of three `(row, col)` coordinates
pub type Line = [(usize, usize); 3];

/// Winning lines on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    fn is_complete(cells: &[[Cell; 3]; 3], line: &Line, target: Cell) -> bool {
        line.iter().all(|&(row, col)| cells[row][col] == target)
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| Self::is_complete(cells, line, target))
    }

    /// Every line fully owned by the player.
    ///
    /// All eight lines are inspected; a single move can complete two lines
    /// at once.
    pub fn completed_lines(cells: &[[Cell; 3]; 3], player: Player) -> Vec<Line> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| Self::is_complete(cells, line, target))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(player: Player, coords: &[(usize, usize)]) -> [[Cell; 3]; 3] {
        let mut cells = [[Cell::Empty; 3]; 3];
        for &(row, col) in coords {
            cells[row][col] = player.to_cell();
        }
        cells
    }

    #[test]
    fn test_every_line_detected() {
        for line in &WINNING_LINES {
            for player in [Player::X, Player::O] {
                let cells = cells_with(player, line);
                assert!(LineAnalyzer::has_won(&cells, player), "{line:?}");
                assert!(!LineAnalyzer::has_won(&cells, player.opponent()));
                assert_eq!(LineAnalyzer::completed_lines(&cells, player), vec![*line]);
            }
        }
    }

    #[test]
    fn test_two_in_a_line_is_not_a_win() {
        let cells = cells_with(Player::X, &[(0, 0), (0, 1), (1, 2)]);
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(LineAnalyzer::completed_lines(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_double_line() {
        // XXX
        // X..
        // X..
        let cells = cells_with(Player::X, &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);
        let lines = LineAnalyzer::completed_lines(&cells, Player::X);
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&WINNING_LINES[0]));
        assert!(lines.contains(&WINNING_LINES[3]));
    }
}
