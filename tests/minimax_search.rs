//! Optimal play and agreement between the plain and pruned searches

use tictactoe_minimax::{
    Action, Board, GameOutcome, Strategy, evaluate, minimax, optimal_actions, result, search,
};

fn at(row: usize, col: usize) -> Action {
    Action::new(row, col).unwrap()
}

#[test]
fn empty_board_is_a_draw() {
    let board = Board::new();
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        assert_eq!(evaluate(&board, strategy).unwrap(), 0);
    }

    // Every opening holds the draw
    let scored = optimal_actions(&board).unwrap();
    assert_eq!(scored.len(), 9);
    assert!(scored.iter().all(|s| s.value == 0 && s.is_optimal));
}

#[test]
fn optimal_play_from_empty_board_ends_in_draw() {
    let mut board = Board::new();
    while let Some(action) = minimax(&board).unwrap() {
        board = result(&board, action).unwrap();
    }
    assert_eq!(GameOutcome::of(&board), Some(GameOutcome::Draw));
}

#[test]
fn x_takes_immediate_win() {
    // X . X
    // O O .
    // . . .
    let board = Board::from_string("X.X/OO./...").unwrap();
    assert_eq!(minimax(&board).unwrap(), Some(at(0, 1)));
}

#[test]
fn x_prefers_winning_over_blocking() {
    // X . O
    // O O .
    // X X .
    // O threatens (1,2) but X completes the bottom row first
    let board = Board::from_string("X.O/OO./XX.").unwrap();
    assert_eq!(minimax(&board).unwrap(), Some(at(2, 2)));
}

#[test]
fn o_blocks_immediate_threat() {
    // X X .
    // . O .
    // . . .
    let board = Board::from_string("XX./.O./...").unwrap();
    assert_eq!(minimax(&board).unwrap(), Some(at(0, 2)));

    // Column threat
    let board = Board::from_string("X../X../.O.").unwrap();
    assert_eq!(minimax(&board).unwrap(), Some(at(2, 0)));
}

#[test]
fn o_answers_corner_opening_with_center() {
    // Any edge or corner reply other than the center loses to a corner opening
    let board = Board::from_string("X../.../...").unwrap();
    let scored = optimal_actions(&board).unwrap();
    let optimal: Vec<Action> = scored
        .iter()
        .filter(|s| s.is_optimal)
        .map(|s| s.action)
        .collect();
    assert_eq!(optimal, vec![at(1, 1)]);
    assert_eq!(minimax(&board).unwrap(), Some(at(1, 1)));
}

#[test]
fn pruned_search_agrees_on_every_reachable_board() {
    let boards = Board::reachable_boards();
    let mut open = 0;

    for board in boards {
        let plain = search(&board, Strategy::Minimax).unwrap();
        let pruned = search(&board, Strategy::AlphaBeta).unwrap();

        assert_eq!(plain.value, pruned.value, "value differs on {}", board.encode());
        assert_eq!(
            plain.action,
            pruned.action,
            "action differs on {}",
            board.encode()
        );
        assert!(pruned.stats.nodes <= plain.stats.nodes);

        if !board.is_terminal() {
            open += 1;
            let chosen = plain.action.expect("open board has an action");
            let scored = optimal_actions(&board).unwrap();
            // The chosen action is the first optimal one in row-major order
            let first_optimal = scored.iter().find(|s| s.is_optimal).unwrap();
            assert_eq!(first_optimal.action, chosen);
            assert_eq!(first_optimal.value, plain.value);
        }
    }

    assert_eq!(open, 4520);
}

#[test]
fn pruning_reduces_work_from_empty_board() {
    let plain = search(&Board::new(), Strategy::Minimax).unwrap();
    let pruned = search(&Board::new(), Strategy::AlphaBeta).unwrap();

    assert_eq!(plain.stats.nodes, 549_946);
    assert_eq!(plain.stats.cutoffs, 0);
    assert!(pruned.stats.cutoffs > 0);
    assert!(pruned.stats.nodes < plain.stats.nodes / 2);
    assert_eq!(plain.action, Some(at(0, 0)));
    assert_eq!(pruned.action, Some(at(0, 0)));
}
