//! Selfplay command - Let the engine play both sides to the end

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{
        config::{OutputFormat, SearchArgs, SearchConfig},
        output::{print_board, print_json, print_kv, print_section},
    },
    search::search,
    tictactoe::{Board, Game, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself from a position")]
pub struct SelfplayArgs {
    /// Starting board, empty when omitted
    pub board: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Play optimal moves for both sides until the game ends
pub fn play_out(start: Board, config: &SearchConfig) -> Result<Game> {
    let mut game = Game::from_board(start);

    while game.outcome.is_none() {
        let board = game.current_state()?;
        let action = search(&board, config.strategy)?
            .action
            .with_context(|| format!("no action returned for open board '{}'", board.encode()))?;
        debug!(board = %board.encode(), %action, "selfplay move");
        game.play(action)?;
    }

    Ok(game)
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let config = SearchConfig::from(&args.search);
    let start = match args.board.as_deref() {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };

    let game = play_out(start, &config)?;

    match config.format {
        OutputFormat::Json => print_json(&game)?,
        OutputFormat::Text => print_game(&game)?,
    }

    Ok(())
}

fn print_game(game: &Game) -> Result<()> {
    print_section("Selfplay");
    let states = game.state_sequence()?;
    print_board(&states[0]);

    for (m, board) in game.moves.iter().zip(&states[1..]) {
        println!("\n  {} plays {}", m.player, m.action);
        print_board(board);
    }

    println!();
    let result = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Result", &result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Strategy;

    #[test]
    fn test_selfplay_from_empty_board_draws() {
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let config = SearchConfig {
                strategy,
                ..SearchConfig::default()
            };
            let game = play_out(Board::new(), &config).unwrap();
            assert_eq!(game.outcome, Some(GameOutcome::Draw));
            assert_eq!(game.moves.len(), 9);
        }
    }

    #[test]
    fn test_selfplay_from_terminal_board_is_empty() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let game = play_out(board, &SearchConfig::default()).unwrap();
        assert!(game.moves.is_empty());
        assert_eq!(game.outcome, Some(GameOutcome::Win(crate::tictactoe::Player::X)));
    }
}
