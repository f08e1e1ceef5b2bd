mod game;
mod parse;
mod ui;

use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info};
use othello_core::player::Player;

use crate::game::GameState;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

/// Play Othello in the terminal.
#[derive(Parser, Debug)]
#[command(name = "othello", version)]
struct Cli {
    /// Moves to replay before play starts, e.g. "d3c3c4"
    #[arg(long, value_name = "TRANSCRIPT")]
    moves: Option<String>,

    /// Starting position: 64 cells from a1 to h8 using X, O and -
    #[arg(long, value_name = "CELLS")]
    position: Option<String>,

    /// Side to move in the starting position
    #[arg(long, value_enum, default_value = "black")]
    side: Side,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Do not mark legal moves on the board
    #[arg(long)]
    no_hints: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Cli::parse();
    init_logger(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let game = setup_game(&args).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });

    let options = ui::Options {
        hints: !args.no_hints,
    };
    if let Err(err) = ui::ui_loop(game, options) {
        eprintln!("Terminal error: {err}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn setup_game(args: &Cli) -> Result<GameState, String> {
    let mut game = match &args.position {
        Some(position) => GameState::from_position(position, args.side.into())
            .map_err(|e| format!("Invalid position: {e}"))?,
        None => GameState::new(),
    };

    if let Some(moves) = &args.moves {
        let squares = parse::parse_move_string(moves)?;
        game.replay(&squares)?;
        info!("replayed {} moves", squares.len());
    }

    Ok(game)
}
