//! Game record: a starting board plus the actions applied to it

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still open
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game continuing from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play an action for the player to move
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.player()?;
        let next = current.result(action)?;

        self.moves.push(Move { action, player });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(self.initial, |board, m| board.result(m.action))
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of boards, starting with the initial one
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);

        for m in &self.moves {
            board = board.result(m.action)?;
            states.push(board);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(index: usize) -> Action {
        Action::from_index(index).unwrap()
    }

    #[test]
    fn test_play_records_players() {
        let mut game = Game::new();
        game.play(action(4)).unwrap();
        game.play(action(0)).unwrap();

        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.current_state().unwrap().encode(), "O...X....");
        assert_eq!(game.state_sequence().unwrap().len(), 3);
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_outcome_recorded_and_game_closed() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.play(action(index)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(action(8)), Err(Error::GameOver)));
    }

    #[test]
    fn test_illegal_action_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(action(4)).unwrap();

        assert!(matches!(
            game.play(action(4)),
            Err(Error::InvalidAction { .. })
        ));
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_from_terminal_board() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        let game = Game::from_board(board);
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }
}
