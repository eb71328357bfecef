//! Shared configuration types for CLI commands

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::Strategy;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable board and tables
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

/// Configuration for commands that run a search
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search algorithm
    pub strategy: Strategy,

    /// Output format
    pub format: OutputFormat,
}

/// Command-line flags shared by the search commands
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search strategy (minimax, alpha-beta)
    #[arg(long, short = 's', default_value_t = Strategy::AlphaBeta)]
    pub strategy: Strategy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<&SearchArgs> for SearchConfig {
    fn from(args: &SearchArgs) -> Self {
        SearchConfig {
            strategy: args.strategy,
            format: args.format,
        }
    }
}
