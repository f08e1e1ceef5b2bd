use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::game_state::{GameState, Outcome};
use othello_core::player::Player;
use othello_core::square::Square;

#[test]
fn test_black_opens_d3() {
    let mut game = GameState::new();
    let sq = Square::from_row_col(2, 3).unwrap();
    assert!(game.legal_moves(Player::Black).contains(sq));

    let result = game.attempt_place(sq);
    assert!(result.placed);
    assert_eq!(result.flipped.as_slice(), &[Square::D4]);

    let board = game.board();
    for (row, col) in [(2, 3), (3, 3), (3, 4), (4, 3)] {
        assert_eq!(board.cell_at(row, col), Ok(Disc::Black), "({row}, {col})");
    }
    assert_eq!(board.cell_at(4, 4), Ok(Disc::White));
    assert_eq!(board.count_discs(), (4, 1));
    assert_eq!(game.active_player(), Player::White);
}

#[test]
fn test_stuck_white_may_pass_but_black_may_not() {
    let position = Board::from_string(
        "--------\
         --------\
         --------\
         --------\
         --------\
         --------\
         ------OX\
         --------",
    )
    .unwrap();
    assert!(othello_core::flip::legal_moves(&position, Player::White).is_empty());
    assert!(!othello_core::flip::legal_moves(&position, Player::Black).is_empty());

    let mut white = GameState::from_board(position, Player::White);
    let result = white.attempt_pass();
    assert!(result.passed);
    assert_eq!(white.active_player(), Player::Black);
    assert_eq!(*white.board(), position);

    let mut black = GameState::from_board(position, Player::Black);
    let result = black.attempt_pass();
    assert!(!result.passed);
    assert_eq!(black.active_player(), Player::Black);
    assert_eq!(*black.board(), position);
}

#[test]
fn test_full_board_majority_wins() {
    let cells = format!("{}{}", "XO".repeat(20), "O".repeat(24));
    let position = Board::from_string(&cells).unwrap();
    let game = GameState::from_board(position, Player::Black);

    let state = game.current_state();
    assert!(state.is_over);
    assert_eq!((state.black_count, state.white_count), (20, 44));
    assert_eq!(game.outcome(), Some(Outcome::Win(Player::White)));
}

#[test]
fn test_full_board_draw() {
    let position = Board::from_string(&"XO".repeat(32)).unwrap();
    let game = GameState::from_board(position, Player::White);
    assert!(game.is_over());
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.outcome(), Some(game.score().outcome()));
}

#[test]
fn test_last_empty_square_ends_game() {
    // Filling h8 captures g8 and leaves no empty square.
    let mut cells = "X".repeat(61);
    cells.push_str("XO-");
    let position = Board::from_string(&cells).unwrap();
    let mut game = GameState::from_board(position, Player::Black);
    assert!(!game.is_over());

    let result = game.attempt_place(Square::H8);
    assert!(result.placed);
    assert_eq!(result.flipped.as_slice(), &[Square::G8]);
    assert!(result.summary.is_over);
    assert_eq!(result.summary.outcome, Some(Outcome::Win(Player::Black)));
    assert_eq!((result.summary.black_count, result.summary.white_count), (64, 0));
}

#[test]
fn test_games_are_independent() {
    let mut first = GameState::new();
    let second = GameState::new();
    first.attempt_place(Square::C4);
    assert_ne!(first, second);
    assert_eq!(second.current_state().black_count, 2);
}
