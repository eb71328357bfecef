//! Analyze command - Exact value of every legal action in a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::OutputFormat,
        output::{describe_value, print_board, print_json, print_kv, print_section},
    },
    search::{ActionValue, optimal_actions},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the exact value of every legal action")]
pub struct AnalyzeArgs {
    /// Board in row-major order, '.' for empty (e.g. "X.O/.X./...")
    pub board: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct AnalysisReport {
    board: String,
    to_move: Option<Player>,
    actions: Vec<ActionValue>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let report = AnalysisReport {
        board: board.encode(),
        to_move: if board.is_terminal() {
            None
        } else {
            Some(board.player()?)
        },
        actions: optimal_actions(&board)?,
    };

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&board, &report),
    }

    Ok(())
}

fn print_report(board: &Board, report: &AnalysisReport) {
    print_section("Position Analysis");
    print_board(board);
    println!();

    let Some(player) = report.to_move else {
        print_kv("Status", "game over");
        return;
    };
    print_kv("To move", &player.to_string());
    println!();

    for scored in &report.actions {
        println!(
            "  {:8} {:>2}  {:7}{}",
            scored.action.to_string(),
            scored.value,
            describe_value(scored.value),
            if scored.is_optimal { "  *" } else { "" }
        );
    }
}
