//! Capture (flip) calculation and legal move enumeration.
//!
//! Legality is decided by ray casting: from an empty square, each of the eight
//! directions is walked over a contiguous run of opponent discs, and the run is
//! captured when it is closed by a disc of the moving player. A move is legal
//! exactly when it captures at least one disc. Enumerating legal moves is the
//! same check repeated over the 64 squares.

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::player::Player;
use crate::square::{BOARD_SIZE, Square};

/// The eight unit direction vectors as `(row delta, column delta)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Upper bound on the discs a single move can capture.
///
/// Reached on the four centre squares: 5 + 5 orthogonally and 2 + 2 + 2 + 3
/// diagonally.
pub const MAX_FLIPS: usize = 19;

/// Ordered capture set of one placement.
///
/// Squares are grouped by direction in [`DIRECTIONS`] order and, within a
/// direction, listed from nearest to farthest.
pub type FlipSet = ArrayVec<Square, MAX_FLIPS>;

/// Calculates which opponent discs would be flipped by `player` placing a disc on `sq`.
///
/// # Arguments
///
/// * `board` - The position to evaluate. It is never modified.
/// * `sq` - The candidate square.
/// * `player` - The player about to move.
///
/// # Returns
///
/// The captured squares. The set is empty if `sq` is occupied, is
/// `Square::None`, or the placement captures in no direction, i.e. if the move
/// is illegal.
pub fn flips(board: &Board, sq: Square, player: Player) -> FlipSet {
    let mut flipped = FlipSet::new();
    if sq == Square::None || !board.is_square_empty(sq) {
        return flipped;
    }

    let own = Disc::from(player);
    let opponent = Disc::from(player.opponent());

    for &(d_row, d_col) in &DIRECTIONS {
        let mut run = ArrayVec::<Square, { BOARD_SIZE - 1 }>::new();
        let mut cursor = sq.offset(d_row, d_col);
        while let Some(next) = cursor {
            if board.disc_at(next) != opponent {
                break;
            }
            run.push(next);
            cursor = next.offset(d_row, d_col);
        }

        // Falling off the board or stopping on an empty square leaves `run` unanchored.
        if !run.is_empty() && cursor.is_some_and(|end| board.disc_at(end) == own) {
            flipped.extend(run);
        }
    }

    flipped
}

/// Checks whether `player` may place a disc on `sq`.
#[inline]
pub fn is_legal(board: &Board, sq: Square, player: Player) -> bool {
    !flips(board, sq, player).is_empty()
}

/// Returns every square where `player` has a legal placement.
pub fn legal_moves(board: &Board, player: Player) -> Bitboard {
    Square::iter()
        .filter(|&sq| is_legal(board, sq, player))
        .collect()
}

/// Checks whether `player` has at least one legal placement.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Square::iter().any(|sq| is_legal(board, sq, player))
}
