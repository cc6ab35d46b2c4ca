//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::{Marker, Opponent};

/// Noughts - tic-tac-toe against a provably optimal opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an exhaustive negamax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches in the terminal
    Play {
        /// Who plays O: human, random or optimal
        #[arg(short, long)]
        opponent: Option<Opponent>,

        /// Name of the X player
        #[arg(long)]
        name_a: Option<String>,

        /// Name of the O player
        #[arg(long)]
        name_b: Option<String>,

        /// Ply cap for the optimal opponent
        #[arg(long)]
        depth: Option<u8>,

        /// Print the renderer snapshot as JSON after every move
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Nine cells, e.g. "x.o/.x./..o"
        board: String,

        /// Side to move (inferred from marker counts when omitted)
        #[arg(short, long)]
        side: Option<Marker>,

        /// Ply cap for the search
        #[arg(long)]
        depth: Option<u8>,
    },

    /// Classify a board as in progress, won or drawn
    Classify {
        /// Nine cells, e.g. "xxx/oo./..."
        board: String,
    },
}
