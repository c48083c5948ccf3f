//! Play Othello against the computer in a terminal.

use clap::Parser;
use flank_othello::Player;
use flank_player::connectors::{LineInput, TerminalRenderer};
use flank_player::{Pruning, Searcher, Session, SEARCH_DEPTH};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Othello against a minimax opponent. Enter moves as a column letter and a row digit ("D3").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plies the computer searches ahead.
    #[arg(short, long, default_value_t = SEARCH_DEPTH, value_parser = clap::value_parser!(u8).range(1..=10))]
    depth: u8,

    /// The color you play. Black moves first.
    #[arg(long, default_value_t = Player::Black)]
    human: Player,

    /// Search every node instead of pruning with alpha-beta. Same moves, slower.
    #[arg(long)]
    exhaustive: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let pruning = if args.exhaustive {
        Pruning::Exhaustive
    } else {
        Pruning::AlphaBeta
    };
    let searcher = Searcher::new(args.depth).with_pruning(pruning);
    info!(depth = args.depth, ?pruning, human = %args.human, "starting game");

    let input = LineInput::new(io::stdin().lock(), io::stdout());
    let renderer = TerminalRenderer::new(io::stdout());
    let mut session = Session::new(args.human, searcher, input, renderer);

    session.run()?;
    Ok(())
}
