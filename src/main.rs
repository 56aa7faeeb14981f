//! Goban: play Go in the terminal.
//!
//! ## Usage
//!
//! - `goban` / `goban play` - Two players take turns at the console
//! - `goban selfplay` - Watch two random players
//! - `goban gtp` - Start a GTP server for GUI integration
//!
//! Initial stones are given with `--white A1,B2 --black C3`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use goban::board::Board;
use goban::constants::DEFAULT_SIZE;
use goban::game::{Game, GameResult};
use goban::gtp::GtpEngine;
use goban::player::{ConsolePlayer, RandomPlayer};

/// Goban: a Go board engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug messages to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the console, both colours typed in turn
    Play(Setup),
    /// Let two random players play each other
    Selfplay {
        #[command(flatten)]
        setup: Setup,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size: 9, 13 or 19
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Seed for generated moves
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct Setup {
    /// Board size: 9, 13 or 19
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Initial white stones, e.g. `A1,B2`
    #[arg(long, value_delimiter = ',')]
    white: Vec<String>,
    /// Initial black stones, e.g. `C3,D4`
    #[arg(long, value_delimiter = ',')]
    black: Vec<String>,
}

impl Setup {
    fn board(&self) -> Result<Board> {
        Board::from_notation(self.size, self.white.as_slice(), self.black.as_slice())
            .context("invalid initial position")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Some(Commands::Play(setup)) => run_console(setup.board()?),
        None => run_console(Board::default()),
        Some(Commands::Selfplay { setup, seed }) => run_selfplay(setup.board()?, seed),
        Some(Commands::Gtp { size, seed }) => {
            let board = Board::empty(size).context("invalid board size")?;
            let mut engine = GtpEngine::with_game(Game::new(board), random_player(seed));
            engine
                .run(io::stdin().lock(), io::stdout().lock())
                .context("GTP session failed")
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}

fn random_player(seed: Option<u64>) -> RandomPlayer {
    seed.map_or_else(RandomPlayer::new, RandomPlayer::with_seed)
}

fn print_standing(game: &Game) {
    println!("{}", game.result().score);
    println!("{}", game.board());
}

fn announce(result: &GameResult) {
    println!("{}", result.score);
    if result.white_wins {
        println!("White wins.");
    } else {
        println!("Black wins.");
    }
}

fn run_console(board: Board) -> Result<()> {
    let mut game = Game::new(board);
    let mut console = ConsolePlayer::new(io::stdin().lock(), io::stdout());
    print_standing(&game);

    while !game.is_over() {
        game.play_turn(&mut console)?;
        print_standing(&game);
    }
    announce(&game.result());
    Ok(())
}

fn run_selfplay(board: Board, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(board);
    let mut black = random_player(seed);
    let mut white = random_player(seed.map(|s| s.wrapping_add(1)));

    let result = game.run(&mut black, &mut white);
    println!("{}", game.board());
    println!("{} turns played", result.moves);
    announce(&result);
    Ok(())
}
