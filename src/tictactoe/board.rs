//! Board representation and the pure rules of the game

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate on the board.
///
/// Coordinates are checked on construction, so an `Action` always addresses
/// a real cell. Whether it is *legal* depends on the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Create an action, rejecting coordinates outside `0..3`
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= Board::SIZE || col >= Board::SIZE {
            return Err(Error::InvalidAction {
                row,
                col,
                reason: "coordinates must be in 0..=2".to_string(),
            });
        }
        Ok(Action { row, col })
    }

    /// Create an action from a row-major index (0-8)
    pub fn from_index(index: usize) -> Result<Self> {
        Self::new(index / Board::SIZE, index % Board::SIZE)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index of the addressed cell (0-8)
    pub fn index(self) -> usize {
        self.row * Board::SIZE + self.col
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 Tic-Tac-Toe grid.
///
/// `Board` is a 9-byte `Copy` value. Transitions never modify a board; they
/// return a new one. The player to move is not stored, it is always derived
/// from the mark counts (X moves first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Side length of the grid
    pub const SIZE: usize = 3;

    /// Create the initial, empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and the row separators `/` and `|` are ignored; the rest
    /// must be exactly nine cell characters in row-major order. Mark counts
    /// are not checked here, see [`Board::is_valid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_minimax::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("XO./.X./..O").unwrap();
    /// assert_eq!(board.player().unwrap(), Player::X);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly nine cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i / Self::SIZE][i % Self::SIZE] =
                Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(board)
    }

    /// Get the cell addressed by an action
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// The raw grid, indexed `[row][col]`
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    pub fn mark_counts(&self) -> MarkCount {
        let mut count = MarkCount::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    pub fn empty_count(&self) -> usize {
        self.mark_counts().empty
    }

    /// Empty cells in row-major order
    fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        (0..Self::SIZE)
            .flat_map(|row| (0..Self::SIZE).map(move |col| Action { row, col }))
            .filter(|&action| self.get(action) == Cell::Empty)
    }

    /// The player whose move is next.
    ///
    /// # Errors
    ///
    /// Returns `IllegalQuery` when the board is terminal (no one is to move)
    /// or when the mark counts cannot arise from alternating play.
    pub fn player(&self) -> Result<Player> {
        if self.is_terminal() {
            return Err(Error::illegal_query(
                "player",
                format!("called on terminal board '{}'", self.encode()),
            ));
        }

        let count = self.mark_counts();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(Error::illegal_query(
                "player",
                format!(
                    "called on unreachable board '{}' (X={}, O={}; X must equal O or lead by one)",
                    self.encode(),
                    count.x,
                    count.o
                ),
            ))
        }
    }

    /// Legal actions in fixed row-major order, empty when the game is over
    pub fn actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_cells().collect()
    }

    /// Apply an action for the player to move and return the new board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAction` if the cell is already occupied and
    /// `IllegalQuery` if the game is already decided.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board> {
        if self.get(action) != Cell::Empty {
            return Err(Error::InvalidAction {
                row: action.row,
                col: action.col,
                reason: "cell is already occupied".to_string(),
            });
        }

        if self.is_terminal() {
            return Err(Error::illegal_query(
                "result",
                format!("called on decided board '{}'", self.encode()),
            ));
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.player()?.to_cell();
        Ok(next)
    }

    /// Check if a player has three marks in any line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);
        match (x_wins, o_wins) {
            (true, _) => Some(Player::X),
            (false, true) => Some(Player::O),
            (false, false) => None,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_cells().next().is_none()
    }

    /// Final score from X's perspective: +1 X won, -1 O won, 0 draw.
    ///
    /// # Errors
    ///
    /// Returns `IllegalQuery` on a non-terminal board.
    pub fn utility(&self) -> Result<i32> {
        if !self.is_terminal() {
            return Err(Error::illegal_query(
                "utility",
                format!("called on non-terminal board '{}'", self.encode()),
            ));
        }

        Ok(match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        })
    }

    /// Compact nine-character encoding in row-major order
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < Self::SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
