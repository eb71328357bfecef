//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value the maximizer can already guarantee on the path to
//! this node and `beta` the value the minimizer can already guarantee. Bounds
//! are only ever passed down into child calls; a node returns its value and
//! action, never updated bounds.
//!
//! When the true value of a node lies inside `(alpha, beta)` the returned
//! value is exact. Otherwise it is a bound on the correct side of the window,
//! which is all the ancestors need to ignore the node. The root is searched
//! with the full window, so its value is always exact.

use tracing::trace;

use super::{Evaluation, SearchStats};
use crate::{error::Result, tictactoe::Board};

pub fn max_value(
    board: &Board,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> Result<Evaluation> {
    stats.nodes += 1;
    if board.is_terminal() {
        return Ok(Evaluation::terminal(board.utility()?));
    }

    let mut best = Evaluation {
        value: i32::MIN,
        action: None,
    };
    for action in board.actions() {
        let reply = min_value(&board.result(action)?, alpha, beta, stats)?;
        if reply.value > best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }

        // The minimizing ancestor already has something at least this good
        if best.value >= beta {
            stats.cutoffs += 1;
            trace!(board = %board.encode(), value = best.value, beta, "beta cutoff");
            return Ok(best);
        }
        alpha = alpha.max(best.value);
    }

    Ok(best)
}

pub fn min_value(
    board: &Board,
    alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> Result<Evaluation> {
    stats.nodes += 1;
    if board.is_terminal() {
        return Ok(Evaluation::terminal(board.utility()?));
    }

    let mut best = Evaluation {
        value: i32::MAX,
        action: None,
    };
    for action in board.actions() {
        let reply = max_value(&board.result(action)?, alpha, beta, stats)?;
        if reply.value < best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }

        if best.value <= alpha {
            stats.cutoffs += 1;
            trace!(board = %board.encode(), value = best.value, alpha, "alpha cutoff");
            return Ok(best);
        }
        beta = beta.min(best.value);
    }

    Ok(best)
}
