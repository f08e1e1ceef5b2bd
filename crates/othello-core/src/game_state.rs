//! Game state management for Othello.
//!
//! This module provides the `GameState` struct, the turn controller of the
//! engine. It validates and applies placements, switches the side to move,
//! forces passes when the side to move is stuck, and detects the end of the
//! game. Every transition is atomic: a rejected placement or pass leaves the
//! state untouched and is reported through the returned result rather than as
//! an error.

use std::fmt;

use log::{debug, trace};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::flip::{self, FlipSet};
use crate::player::Player;
use crate::square::Square;

/// Lifecycle of a game. `Over` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InPlay,
    Over,
}

/// Result of a finished (or hypothetically finished) game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Disc tally of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// The side with more discs wins; equal counts are a draw.
    pub fn outcome(self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Total number of discs on the board.
    pub fn total(self) -> u32 {
        self.black + self.white
    }
}

/// State summary reported after a placement or pass attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub active_player: Player,
    pub black_count: u32,
    pub white_count: u32,
    pub is_over: bool,
    /// The side due to move had no legal placement and was passed over automatically.
    pub pass_occurred: bool,
    /// Final result, present once the game is over.
    pub outcome: Option<Outcome>,
}

/// Result of [`GameState::attempt_place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceResult {
    pub placed: bool,
    /// Captured squares in evaluation order; empty when the placement was rejected.
    pub flipped: FlipSet,
    pub summary: TurnSummary,
}

/// Result of [`GameState::attempt_pass`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassResult {
    pub passed: bool,
    pub summary: TurnSummary,
}

/// Read-only view of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active_player: Player,
    pub is_over: bool,
    pub black_count: u32,
    pub white_count: u32,
}

/// Represents the state of an Othello game.
///
/// The board is owned exclusively by the game and only changes through
/// [`attempt_place`](Self::attempt_place), [`attempt_pass`](Self::attempt_pass)
/// and [`reset`](Self::reset). Independent games can coexist as separate values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    active_player: Player,
    phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::Black,
            phase: Phase::InPlay,
        }
    }

    /// Creates a game from an arbitrary position.
    ///
    /// The game starts out over if the board is full or neither player can
    /// move. No pass is applied automatically, so a position where only the
    /// opponent of `active_player` can move waits for an explicit
    /// [`attempt_pass`](Self::attempt_pass).
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `active_player` - Which player moves next
    pub fn from_board(board: Board, active_player: Player) -> Self {
        let finished = board.is_full()
            || (!flip::has_legal_move(&board, active_player)
                && !flip::has_legal_move(&board, active_player.opponent()));
        Self {
            board,
            active_player,
            phase: if finished { Phase::Over } else { Phase::InPlay },
        }
    }

    /// Discards the current game and restores the initial position.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Returns every square where `player` could place a disc on the current board.
    ///
    /// This is a pure query on the board; it does not consider whose turn it
    /// is or whether the game is over.
    pub fn legal_moves(&self, player: Player) -> Bitboard {
        flip::legal_moves(&self.board, player)
    }

    /// Returns the disc count for both players.
    pub fn score(&self) -> Score {
        let (black, white) = self.board.count_discs();
        Score { black, white }
    }

    /// Returns the final result once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| self.score().outcome())
    }

    /// Returns a read-only snapshot of the game.
    pub fn current_state(&self) -> Snapshot {
        let score = self.score();
        Snapshot {
            board: self.board,
            active_player: self.active_player,
            is_over: self.is_over(),
            black_count: score.black,
            white_count: score.white,
        }
    }

    /// Places a disc for the active player.
    ///
    /// The placement is applied only if the game is in play, `sq` is empty and
    /// the move captures at least one disc. Otherwise nothing changes and the
    /// result has `placed == false`.
    ///
    /// On success the captured discs are flipped, the turn passes to the
    /// opponent, and the end-of-turn rules run: a full board ends the game, a
    /// stuck opponent is passed over, and a position where nobody can move
    /// ends the game.
    pub fn attempt_place(&mut self, sq: Square) -> PlaceResult {
        if self.is_over() {
            trace!("placement on {sq} rejected: game is over");
            return self.rejected_place();
        }

        let player = self.active_player;
        let flipped = flip::flips(&self.board, sq, player);
        if flipped.is_empty() {
            trace!("placement on {sq} rejected: illegal for {player}");
            return self.rejected_place();
        }

        self.board.apply_move(sq, player, &flipped);
        self.active_player = player.opponent();
        debug!("{player} plays {sq}, flipping {} disc(s)", flipped.len());

        let pass_occurred = if self.board.is_full() {
            self.finish();
            false
        } else {
            self.end_of_turn()
        };

        PlaceResult {
            placed: true,
            flipped,
            summary: self.summary(pass_occurred),
        }
    }

    /// Passes the turn of the active player.
    ///
    /// Allowed only while the game is in play, the active player has no legal
    /// placement and the opponent has at least one. Otherwise nothing changes
    /// and the result has `passed == false`.
    pub fn attempt_pass(&mut self) -> PassResult {
        let player = self.active_player;
        let allowed = !self.is_over()
            && !flip::has_legal_move(&self.board, player)
            && flip::has_legal_move(&self.board, player.opponent());
        if !allowed {
            trace!("pass by {player} rejected");
            return PassResult {
                passed: false,
                summary: self.summary(false),
            };
        }

        self.active_player = player.opponent();
        debug!("{player} passes");
        let pass_occurred = self.end_of_turn();

        PassResult {
            passed: true,
            summary: self.summary(pass_occurred),
        }
    }

    /// Runs after every applied placement or pass, with the turn already
    /// handed to the next player.
    ///
    /// # Returns
    ///
    /// `true` if the next player had to be passed over.
    fn end_of_turn(&mut self) -> bool {
        let next = self.active_player;
        if flip::has_legal_move(&self.board, next) {
            return false;
        }

        let waiting = next.opponent();
        if flip::has_legal_move(&self.board, waiting) {
            debug!("{next} has no legal move and passes; {waiting} to move");
            self.active_player = waiting;
            return true;
        }

        self.finish();
        false
    }

    fn finish(&mut self) {
        self.phase = Phase::Over;
        let score = self.score();
        debug!(
            "game over: {} (Black: {}, White: {})",
            score.outcome(),
            score.black,
            score.white
        );
    }

    fn summary(&self, pass_occurred: bool) -> TurnSummary {
        let score = self.score();
        TurnSummary {
            active_player: self.active_player,
            black_count: score.black,
            white_count: score.white,
            is_over: self.is_over(),
            pass_occurred,
            outcome: self.outcome(),
        }
    }

    fn rejected_place(&self) -> PlaceResult {
        PlaceResult {
            placed: false,
            flipped: FlipSet::new(),
            summary: self.summary(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.active_player(), Player::Black);
        assert_eq!(game.phase(), Phase::InPlay);
        assert_eq!(game.score(), Score { black: 2, white: 2 });
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_first_move_d3() {
        let mut game = GameState::new();
        let result = game.attempt_place(Square::D3);

        assert!(result.placed);
        assert_eq!(result.flipped.as_slice(), &[Square::D4]);
        assert_eq!(result.summary.active_player, Player::White);
        assert_eq!(result.summary.black_count, 4);
        assert_eq!(result.summary.white_count, 1);
        assert!(!result.summary.is_over);
        assert!(!result.summary.pass_occurred);
        assert_eq!(result.summary.outcome, None);

        let b = game.board();
        for (row, col) in [(2, 3), (3, 3), (3, 4), (4, 3)] {
            assert_eq!(b.cell_at(row, col), Ok(Disc::Black));
        }
        assert_eq!(b.cell_at(4, 4), Ok(Disc::White));
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut game = GameState::new();
        let before = game.clone();

        for sq in [Square::A1, Square::D4, Square::E4, Square::E3, Square::None] {
            let result = game.attempt_place(sq);
            assert!(!result.placed);
            assert!(result.flipped.is_empty());
            assert_eq!(result.summary.active_player, Player::Black);
            assert_eq!(game, before);
        }
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        assert_eq!(game.active_player(), Player::Black);

        assert!(game.attempt_place(Square::D3).placed);
        assert_eq!(game.active_player(), Player::White);

        assert!(game.attempt_place(Square::C3).placed);
        assert_eq!(game.active_player(), Player::Black);
    }

    #[test]
    fn test_pass_rejected_when_moves_exist() {
        let mut game = GameState::new();
        let result = game.attempt_pass();
        assert!(!result.passed);
        assert_eq!(result.summary.active_player, Player::Black);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_pass_when_stuck() {
        // White cannot capture anything; Black can take b1 with c1.
        let position = board(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        );

        let mut white_to_move = GameState::from_board(position, Player::White);
        assert_eq!(white_to_move.phase(), Phase::InPlay);
        let result = white_to_move.attempt_pass();
        assert!(result.passed);
        assert!(!result.summary.pass_occurred);
        assert_eq!(result.summary.active_player, Player::Black);
        assert_eq!(*white_to_move.board(), position);

        let mut black_to_move = GameState::from_board(position, Player::Black);
        let before = black_to_move.clone();
        assert!(!black_to_move.attempt_pass().passed);
        assert_eq!(black_to_move, before);
    }

    #[test]
    fn test_forced_pass_after_move() {
        // After c1, White's only disc (b8) is pinned against the corner and
        // cannot capture, while Black can still play c8.
        let position = board(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             XO------",
        );
        let mut game = GameState::from_board(position, Player::Black);

        let result = game.attempt_place(Square::C1);
        assert!(result.placed);
        assert!(result.summary.pass_occurred);
        assert!(!result.summary.is_over);
        assert_eq!(result.summary.active_player, Player::Black);
        assert_eq!(game.active_player(), Player::Black);
        assert!(game.legal_moves(Player::Black).contains(Square::C8));
    }

    #[test]
    fn test_game_over_when_nobody_can_move() {
        let position = board(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        );
        let mut game = GameState::from_board(position, Player::Black);

        let result = game.attempt_place(Square::C1);
        assert!(result.placed);
        assert!(result.summary.is_over);
        assert!(!result.summary.pass_occurred);
        assert_eq!(result.summary.outcome, Some(Outcome::Win(Player::Black)));
        assert_eq!(game.score(), Score { black: 3, white: 0 });
        assert_eq!(game.phase(), Phase::Over);
    }

    #[test]
    fn test_over_rejects_everything() {
        let position = board(&"X".repeat(64));
        let mut game = GameState::from_board(position, Player::White);
        assert!(game.is_over());

        let before = game.clone();
        assert!(!game.attempt_place(Square::A1).placed);
        assert!(!game.attempt_pass().passed);
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_board_scenario() {
        let position = board(&format!("{}{}", "X".repeat(40), "O".repeat(24)));
        let game = GameState::from_board(position, Player::Black);

        let state = game.current_state();
        assert!(state.is_over);
        assert_eq!((state.black_count, state.white_count), (40, 24));
        assert_eq!(game.outcome(), Some(Outcome::Win(Player::Black)));
    }

    #[test]
    fn test_score_outcome() {
        assert_eq!(
            Score { black: 30, white: 34 }.outcome(),
            Outcome::Win(Player::White)
        );
        assert_eq!(Score { black: 32, white: 32 }.outcome(), Outcome::Draw);
        assert_eq!(Score { black: 32, white: 32 }.total(), 64);
        assert_eq!(Outcome::Win(Player::White).to_string(), "White wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        game.attempt_place(Square::D3);
        game.attempt_place(Square::C3);
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_current_state() {
        let mut game = GameState::new();
        game.attempt_place(Square::F5);
        let state = game.current_state();
        assert_eq!(state.board, *game.board());
        assert_eq!(state.active_player, Player::White);
        assert!(!state.is_over);
        assert_eq!((state.black_count, state.white_count), (4, 1));
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        let mut game = GameState::new();

        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";

        let mut passes = 0;
        for (i, chunk) in moves_str.as_bytes().chunks(2).enumerate() {
            let move_str = std::str::from_utf8(chunk).unwrap();
            let square = move_str
                .parse::<Square>()
                .unwrap_or_else(|_| panic!("Failed to parse move #{}: {}", i + 1, move_str));

            let result = game.attempt_place(square);
            assert!(result.placed, "Move #{} ({}) was rejected", i + 1, move_str);
            if result.summary.pass_occurred {
                passes += 1;
            }
        }

        assert!(game.is_over(), "Game should be over after all moves");
        assert_eq!(game.score(), Score { black: 57, white: 7 });
        assert_eq!(game.outcome(), Some(Outcome::Win(Player::Black)));
        assert!(game.board().is_full());
        assert!(passes > 0, "The record contains at least one forced pass");
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut game = GameState::new();

        while !game.is_over() {
            let moves = game.legal_moves(game.active_player());
            let first_move = moves.iter().next().expect("in-play side must have a move");
            assert!(game.attempt_place(first_move).placed);
        }

        let nobody_can_move = game.legal_moves(Player::Black).is_empty()
            && game.legal_moves(Player::White).is_empty();
        assert!(game.board().is_full() || nobody_can_move);
        assert_eq!(game.score().total(), game.board().occupied().count());
    }
}
