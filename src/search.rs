//! Exhaustive adversarial search over the Tic-Tac-Toe game tree
//!
//! Two strategies are provided:
//! - [`Strategy::Minimax`]: plain mutually recursive max/min over every line of play
//! - [`Strategy::AlphaBeta`]: the same search with alpha-beta pruning
//!
//! Both always search to terminal states, so values are exact. X maximizes,
//! O minimizes, and among equally good actions the first one in row-major
//! order is chosen, which makes both strategies return the same action.
//!
//! Searches keep no state between calls; each call returns its own
//! [`SearchStats`].

pub mod alpha_beta;
pub mod minimax;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    tictactoe::{Action, Board, Player},
};

/// Search algorithm used to pick an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plain minimax, every node of the game tree is visited
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "plain" => Ok(Strategy::Minimax),
            "alpha-beta" | "alpha_beta" | "alphabeta" | "ab" => Ok(Strategy::AlphaBeta),
            _ => Err(Error::ParseStrategy {
                input: s.to_string(),
                expected: "minimax, alpha-beta".to_string(),
            }),
        }
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included
    pub nodes: u64,
    /// Times a node stopped expanding its actions early
    pub cutoffs: u64,
}

/// Value of a node together with the action that attains it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub action: Option<Action>,
}

impl Evaluation {
    /// Evaluation of a terminal board
    pub fn terminal(value: i32) -> Self {
        Evaluation {
            value,
            action: None,
        }
    }
}

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Optimal action for the player to move, `None` on a terminal board
    pub action: Option<Action>,
    /// Exact game value from X's perspective
    pub value: i32,
    pub strategy: Strategy,
    pub stats: SearchStats,
}

/// An action with the exact value of the board it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
    pub is_optimal: bool,
}

/// Search the board with the given strategy.
///
/// # Errors
///
/// Returns `IllegalQuery` if the board cannot arise from legal play, since no
/// player can be assigned the move.
pub fn search(board: &Board, strategy: Strategy) -> Result<SearchOutcome> {
    let mut stats = SearchStats::default();

    let evaluation = if board.is_terminal() {
        stats.nodes += 1;
        Evaluation::terminal(board.utility()?)
    } else {
        match (board.player()?, strategy) {
            (Player::X, Strategy::Minimax) => minimax::max_value(board, &mut stats)?,
            (Player::O, Strategy::Minimax) => minimax::min_value(board, &mut stats)?,
            (Player::X, Strategy::AlphaBeta) => {
                alpha_beta::max_value(board, i32::MIN, i32::MAX, &mut stats)?
            }
            (Player::O, Strategy::AlphaBeta) => {
                alpha_beta::min_value(board, i32::MIN, i32::MAX, &mut stats)?
            }
        }
    };

    debug!(
        board = %board.encode(),
        %strategy,
        value = evaluation.value,
        action = ?evaluation.action,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search complete"
    );

    Ok(SearchOutcome {
        action: evaluation.action,
        value: evaluation.value,
        strategy,
        stats,
    })
}

/// The optimal action for the player to move, `None` if the game is over.
///
/// Uses alpha-beta pruning; see [`search`] for the plain variant and
/// statistics.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{minimax, tictactoe::{Action, Board}};
///
/// // X completes the top row
/// let board = Board::from_string("XX./OO./...").unwrap();
/// assert_eq!(minimax(&board).unwrap(), Some(Action::new(0, 2).unwrap()));
/// ```
pub fn minimax(board: &Board) -> Result<Option<Action>> {
    Ok(search(board, Strategy::AlphaBeta)?.action)
}

/// Exact game value of the board from X's perspective
pub fn evaluate(board: &Board, strategy: Strategy) -> Result<i32> {
    Ok(search(board, strategy)?.value)
}

/// Every legal action with its exact value, in row-major order.
///
/// Actions whose value equals the best achievable one for the player to move
/// are flagged with `is_optimal`. Returns an empty list on a terminal board.
pub fn optimal_actions(board: &Board) -> Result<Vec<ActionValue>> {
    if board.is_terminal() {
        return Ok(Vec::new());
    }

    let player = board.player()?;
    let mut scored = Vec::new();
    for action in board.actions() {
        let value = evaluate(&board.result(action)?, Strategy::AlphaBeta)?;
        scored.push((action, value));
    }

    let values = scored.iter().map(|&(_, value)| value);
    let best = match player {
        Player::X => values.max(),
        Player::O => values.min(),
    };

    Ok(scored
        .into_iter()
        .map(|(action, value)| ActionValue {
            action,
            value,
            is_optimal: Some(value) == best,
        })
        .collect())
}
