//! Noughts - unified CLI
//!
//! Play tic-tac-toe in the terminal or query the engine directly.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::analysis::{best_move_report, classify_report};
use noughts::cli::{Cli, Command};
use noughts::{GameConfig, Terminal};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The log filter lives in the config, so tracing starts after loading.
    let config = GameConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(
        path = %cli.config.display(),
        found = cli.config.exists(),
        opponent = %config.opponent(),
        player_a = %config.player_a(),
        player_b = %config.player_b(),
        search_depth = ?config.search_depth(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Play {
            opponent,
            name_a,
            name_b,
            depth,
            json,
        } => run_play(config.with_overrides(opponent, name_a, name_b, depth), json),
        Command::BestMove { board, side, depth } => {
            for line in best_move_report(&board, side, depth).context("Failed to parse board")? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Classify { board } => {
            println!("{}", classify_report(&board).context("Failed to parse board")?);
            Ok(())
        }
    }
}

/// Run interactive matches on stdin/stdout
#[instrument(skip(config), fields(opponent = %config.opponent()))]
fn run_play(config: GameConfig, json: bool) -> Result<()> {
    info!("Starting terminal session");
    let mut session = config.session();
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout()).with_json(json);
    terminal.run(&mut session, &mut rand::thread_rng())?;

    let [a, b] = session.players();
    info!(
        a_wins = a.wins,
        b_wins = b.wins,
        draws = session.draws(),
        "Session finished"
    );
    Ok(())
}
