//! Game state management for the Othello CLI.
//!
//! This module provides the `GameState` struct which wraps the core
//! game state and adds terminal display capabilities.

use std::fmt::Write;

use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::game_state::{self, PassResult, PlaceResult, Score};
use othello_core::player::Player;
use othello_core::square::Square;

/// A game as seen by the terminal front end.
///
/// This is a thin wrapper around the core `GameState` that remembers the last
/// placement and renders the board with colors.
pub struct GameState {
    core: game_state::GameState,
    last_move: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
            last_move: None,
        }
    }

    /// Creates a game from a textual position.
    ///
    /// # Arguments
    /// * `position` - 64 cells from a1 to h8 using `X`, `O` and `-`
    /// * `side_to_move` - Which player moves next
    pub fn from_position(position: &str, side_to_move: Player) -> Result<Self, String> {
        let board = Board::from_string(position).map_err(|e| e.to_string())?;
        Ok(Self {
            core: game_state::GameState::from_board(board, side_to_move),
            last_move: None,
        })
    }

    /// Plays a sequence of moves, stopping at the first illegal one.
    pub fn replay(&mut self, moves: &[Square]) -> Result<(), String> {
        for (i, &sq) in moves.iter().enumerate() {
            if !self.play(sq).placed {
                return Err(format!("Illegal move #{}: {sq}", i + 1));
            }
        }
        Ok(())
    }

    /// Attempts a placement for the side to move.
    pub fn play(&mut self, sq: Square) -> PlaceResult {
        let result = self.core.attempt_place(sq);
        if result.placed {
            self.last_move = Some(sq);
        }
        result
    }

    /// Attempts to pass the turn of the side to move.
    pub fn pass(&mut self) -> PassResult {
        self.core.attempt_pass()
    }

    /// Discards the game and starts from the initial position.
    pub fn reset(&mut self) {
        self.core.reset();
        self.last_move = None;
    }

    pub fn side_to_move(&self) -> Player {
        self.core.active_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_over()
    }

    pub fn score(&self) -> Score {
        self.core.score()
    }

    /// Returns the legal moves of the side to move, in board order.
    pub fn legal_moves(&self) -> Vec<Square> {
        if self.core.is_over() {
            return Vec::new();
        }
        self.core.legal_moves(self.side_to_move()).iter().collect()
    }

    /// Renders the board with colors, turn indicator and disc counts.
    ///
    /// # Arguments
    /// * `hints` - Mark the legal moves of the side to move
    pub fn render(&self, hints: bool) -> String {
        let board = self.core.board();
        let side_to_move = self.side_to_move();
        let game_over = self.core.is_over();
        let legal = self.core.legal_moves(side_to_move);
        let score = self.core.score();

        let mut out = String::new();
        out.push_str("      a   b   c   d   e   f   g   h\n");
        out.push_str("    ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8 {
            let _ = write!(out, "  {} │", row + 1);

            for col in 0..8 {
                let sq = Square::from_usize_unchecked(row * 8 + col);
                let is_hint = hints && !game_over && legal.contains(sq);
                let is_last_move = Some(sq) == self.last_move;

                let symbol = match board.disc_at(sq) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if is_hint => " · ".bright_cyan(),
                    Disc::Empty => "   ".normal(),
                };
                let _ = write!(out, "{symbol}│");
            }

            // Side information
            match row {
                2 if !game_over => {
                    let player_info = match side_to_move {
                        Player::Black => "Black's turn (X)".bright_green(),
                        Player::White => "White's turn (O)".bright_yellow(),
                    };
                    let _ = write!(out, "   {player_info}");
                }
                3 => {
                    let _ = write!(out, "   Black: {}", format!("{:2}", score.black).bright_green());
                }
                4 => {
                    let _ = write!(out, "   White: {}", format!("{:2}", score.white).bright_yellow());
                }
                6 if game_over => {
                    let _ = write!(out, "   {}", outcome_text(score));
                }
                7 if game_over => {
                    let _ = write!(out, "   {}", "*** Game Over ***".bright_red());
                }
                _ => {}
            }
            out.push('\n');

            if row < 7 {
                out.push_str("    ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        out.push_str("    └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        out
    }

    /// Prints the board to the terminal.
    pub fn print(&self, hints: bool) {
        print!("{}", self.render(hints));
    }
}

fn outcome_text(score: Score) -> colored::ColoredString {
    match score.outcome() {
        game_state::Outcome::Win(Player::Black) => "Black wins!".bright_green(),
        game_state::Outcome::Win(Player::White) => "White wins!".bright_yellow(),
        game_state::Outcome::Draw => "Draw".bright_cyan(),
    }
}

/// Message shown when `passer` gives up the turn.
pub fn pass_message(passer: Player) -> String {
    format!("{passer} passes. {}'s turn.", passer.opponent())
}

/// Message describing a placement attempt on `sq`, if there is anything to report.
pub fn place_result_message(sq: Square, result: &PlaceResult) -> Option<String> {
    if !result.placed {
        return Some(format!("Illegal move: {sq}"));
    }
    // After a forced pass the side that just moved keeps the turn.
    result
        .summary
        .pass_occurred
        .then(|| pass_message(result.summary.active_player.opponent()))
}

/// Message describing a pass attempt.
pub fn pass_result_message(result: &PassResult) -> String {
    if result.passed {
        pass_message(result.summary.active_player.opponent())
    } else {
        "Cannot pass: legal moves are available".to_string()
    }
}

/// Message shown once the game has ended.
pub fn game_over_message(score: Score) -> String {
    format!(
        "Game over! {}! (Black: {}, White: {})",
        score.outcome(),
        score.black,
        score.white
    )
}
