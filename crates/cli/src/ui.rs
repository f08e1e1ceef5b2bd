//! Interactive line-based front end.

use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};

use othello_core::player::Player;
use othello_core::square::Square;

use crate::game::{self, GameState};
use crate::parse::{self, Command};

/// Display settings for the interactive loop.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Mark the legal moves of the side to move on the board
    pub hints: bool,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Redraw,
    Prompt,
    Quit,
}

/// Runs the prompt until the user quits or input ends.
pub fn ui_loop(mut game: GameState, options: Options) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    print_help();
    let mut redraw = true;

    loop {
        if redraw {
            game.print(options.hints);
            println!();
            if game.is_game_over() {
                println!("{}\n", game::game_over_message(game.score()));
            }
        }

        let prompt = match game.side_to_move() {
            _ if game.is_game_over() => "> ",
            Player::Black => "X> ",
            Player::White => "O> ",
        };

        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    redraw = false;
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                println!();

                match parse::parse_command(&line) {
                    Ok(command) => match execute(&mut game, command) {
                        Flow::Redraw => redraw = true,
                        Flow::Prompt => redraw = false,
                        Flow::Quit => break,
                    },
                    Err(e) => {
                        println!("{e}\n");
                        redraw = false;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        }
    }

    Ok(())
}

fn execute(game: &mut GameState, command: Command) -> Flow {
    debug!("command: {command:?}");
    match command {
        Command::Place(sq) => place(game, sq),
        Command::Pass => {
            if game.is_game_over() {
                println!("The game is over. Type 'new' to start again.\n");
                return Flow::Prompt;
            }
            let result = game.pass();
            println!("{}\n", game::pass_result_message(&result));
            if result.passed {
                Flow::Redraw
            } else {
                Flow::Prompt
            }
        }
        Command::New => {
            game.reset();
            Flow::Redraw
        }
        Command::Moves => {
            let moves = game.legal_moves();
            if moves.is_empty() {
                println!("No legal moves.\n");
            } else {
                let list: Vec<String> = moves.iter().map(Square::to_string).collect();
                println!("Legal moves: {}\n", list.join(" "));
            }
            Flow::Prompt
        }
        Command::Board => Flow::Redraw,
        Command::Help => {
            print_help();
            Flow::Prompt
        }
        Command::Quit => Flow::Quit,
    }
}

fn place(game: &mut GameState, sq: Square) -> Flow {
    if game.is_game_over() {
        println!("The game is over. Type 'new' to start again.\n");
        return Flow::Prompt;
    }

    let result = game.play(sq);
    if let Some(message) = game::place_result_message(sq, &result) {
        println!("{message}\n");
    }
    if result.placed {
        Flow::Redraw
    } else {
        Flow::Prompt
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <square>   place a disc, e.g. d3");
    println!("  pass       pass when you have no legal move");
    println!("  moves      list legal moves");
    println!("  board      redraw the board");
    println!("  new        start a new game");
    println!("  help       show this help");
    println!("  quit       exit");
    println!();
}
