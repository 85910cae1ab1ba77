//! othello-rs: play Othello in the terminal.
//!
//! ## Usage
//!
//! - `othello-rs` - Interactive console (same as `othello-rs play`)
//! - `othello-rs autoplay` - Watch a random game play itself out
//!
//! Set `RUST_LOG=debug` to see rejected moves and passes on stderr.

use std::io::{self, BufReader};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello_rs::autoplay::Autoplay;
use othello_rs::console::Console;
use othello_rs::game::{Game, Rules};
use othello_rs::render::{RenderSink, TextSink};

/// othello-rs: two-player Othello with random autoplay
#[derive(Parser)]
#[command(name = "othello-rs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: Options,
}

#[derive(Subcommand)]
enum Commands {
    /// Play at the console, two players taking turns
    Play,
    /// Let random moves play a whole game
    Autoplay,
}

#[derive(Args)]
struct Options {
    /// End-of-game rules
    #[arg(long, value_enum, default_value_t = RulesArg::Classic, global = true)]
    rules: RulesArg,

    /// Seed for autoplay move choice (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Delay between autoplay moves, in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    interval_ms: u64,
}

#[derive(Copy, Clone, ValueEnum)]
enum RulesArg {
    /// Game ends when the board is full or a colour is wiped out
    Classic,
    /// Players pass when stuck; game ends when nobody can move
    Standard,
}

impl From<RulesArg> for Rules {
    fn from(arg: RulesArg) -> Self {
        match arg {
            RulesArg::Classic => Rules::Classic,
            RulesArg::Standard => Rules::Standard,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.options;

    let autoplay = match opts.seed {
        Some(seed) => Autoplay::with_seed(seed),
        None => Autoplay::from_entropy(),
    }
    .interval(Duration::from_millis(opts.interval_ms));
    let rules = Rules::from(opts.rules);

    match cli.command {
        Some(Commands::Autoplay) => run_autoplay(rules, autoplay),
        Some(Commands::Play) | None => {
            let mut console = Console::new(rules, autoplay, TextSink::new(io::stdout()), io::stdout());
            console.run(BufReader::new(io::stdin()))
        }
    }
}

fn run_autoplay(rules: Rules, mut autoplay: Autoplay) -> Result<()> {
    let mut game = Game::new(rules);
    let mut sink = TextSink::new(io::stdout());
    sink.render(game.board(), &game.legal_moves())
        .context("failed to render board")?;
    sink.show_status(&game.status_line())
        .context("failed to show status")?;
    autoplay
        .run(&mut game, &mut sink)
        .context("autoplay failed")?;
    Ok(())
}
