//! Plain minimax: every line of play is explored to the end

use super::{Evaluation, SearchStats};
use crate::{error::Result, tictactoe::Board};

/// Best value X (the maximizer) can force from this board
pub fn max_value(board: &Board, stats: &mut SearchStats) -> Result<Evaluation> {
    stats.nodes += 1;
    if board.is_terminal() {
        return Ok(Evaluation::terminal(board.utility()?));
    }

    let mut best = Evaluation {
        value: i32::MIN,
        action: None,
    };
    for action in board.actions() {
        let reply = min_value(&board.result(action)?, stats)?;
        if reply.value > best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }
    }

    Ok(best)
}

/// Best value O (the minimizer) can force from this board
pub fn min_value(board: &Board, stats: &mut SearchStats) -> Result<Evaluation> {
    stats.nodes += 1;
    if board.is_terminal() {
        return Ok(Evaluation::terminal(board.utility()?));
    }

    let mut best = Evaluation {
        value: i32::MAX,
        action: None,
    };
    for action in board.actions() {
        let reply = max_value(&board.result(action)?, stats)?;
        if reply.value < best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Action;

    #[test]
    fn test_full_tree_node_count() {
        let mut stats = SearchStats::default();
        let best = max_value(&Board::new(), &mut stats).unwrap();

        assert_eq!(best.value, 0);
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_first_optimal_action_wins_ties() {
        // X wins at (0,2) and at (2,0); row-major order prefers (0,2)
        let board = Board::from_string("XX./XOO/.O.").unwrap();
        let mut stats = SearchStats::default();
        let best = max_value(&board, &mut stats).unwrap();

        assert_eq!(best.value, 1);
        assert_eq!(best.action, Some(Action::new(0, 2).unwrap()));
    }

    #[test]
    fn test_min_value_on_terminal_board() {
        let board = Board::from_string("OOO/XX./X..").unwrap();
        let mut stats = SearchStats::default();
        let best = min_value(&board, &mut stats).unwrap();
        assert_eq!(best, Evaluation::terminal(-1));
        assert_eq!(stats.nodes, 1);
    }
}
