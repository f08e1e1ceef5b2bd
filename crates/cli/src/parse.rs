//! Parsing helpers for interactive commands and move transcripts.

use othello_core::square::Square;

/// A command typed at the game prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a disc on a square
    Place(Square),
    /// Pass the turn
    Pass,
    /// Start a new game
    New,
    /// List legal moves for the side to move
    Moves,
    /// Redraw the board
    Board,
    /// Show the command summary
    Help,
    /// Leave the program
    Quit,
}

/// Parses one line of user input into a [`Command`].
///
/// Keywords are case-insensitive. Anything that is not a keyword is read as a
/// square in algebraic notation.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let command = match input.to_ascii_lowercase().as_str() {
        "pass" | "p" => Command::Pass,
        "new" | "reset" => Command::New,
        "moves" | "hint" => Command::Moves,
        "board" | "b" => Command::Board,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Place(
            input
                .parse::<Square>()
                .map_err(|e| format!("Unknown command '{input}': {e}"))?,
        ),
    };
    Ok(command)
}

/// Parses a concatenated move string like "d3c3c4" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in algebraic notation.
pub fn parse_move_string(input: &str) -> Result<Vec<Square>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if !input.is_ascii() {
        return Err("Move string must be ASCII".to_string());
    }
    if !input.len().is_multiple_of(2) {
        return Err("Input length must be even (each move is 2 characters)".to_string());
    }

    let mut moves = Vec::new();
    for i in (0..input.len()).step_by(2) {
        let move_str = &input[i..i + 2];
        match move_str.parse::<Square>() {
            Ok(sq) => moves.push(sq),
            Err(_) => {
                return Err(format!(
                    "Invalid square at position {}: '{move_str}'",
                    (i / 2) + 1
                ));
            }
        }
    }
    Ok(moves)
}
