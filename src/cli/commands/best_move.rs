//! Best-move command - Compute the optimal action for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::{OutputFormat, SearchArgs, SearchConfig},
        output::{describe_value, print_board, print_json, print_kv, print_section},
    },
    search::{SearchOutcome, search},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal action for a position")]
pub struct BestMoveArgs {
    /// Board in row-major order, '.' for empty (e.g. "X.O/.X./...")
    pub board: String,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Serialize)]
struct BestMoveReport {
    board: String,
    to_move: Option<Player>,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let config = SearchConfig::from(&args.search);
    let board = Board::from_string(&args.board)?;
    let outcome = search(&board, config.strategy)?;

    info!(
        board = %board.encode(),
        strategy = %config.strategy,
        nodes = outcome.stats.nodes,
        "best move computed"
    );

    let report = BestMoveReport {
        board: board.encode(),
        to_move: board.player().ok(),
        outcome,
    };

    match config.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&board, &report),
    }

    Ok(())
}

fn print_report(board: &Board, report: &BestMoveReport) {
    print_section("Best Move");
    print_board(board);
    println!();

    match (report.to_move, report.outcome.action) {
        (Some(player), Some(action)) => {
            print_kv("To move", &player.to_string());
            print_kv("Action", &action.to_string());
        }
        _ => print_kv("Status", "game over"),
    }
    print_kv(
        "Value",
        &format!(
            "{} ({})",
            report.outcome.value,
            describe_value(report.outcome.value)
        ),
    );
    print_kv("Strategy", &report.outcome.strategy.to_string());
    print_kv("Nodes", &report.outcome.stats.nodes.to_string());
    print_kv("Cutoffs", &report.outcome.stats.cutoffs.to_string());
}
