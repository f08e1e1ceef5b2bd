//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::player::Player;
use crate::square::{Square, SquareError, TOTAL_SQUARES};

/// An 8x8 Othello board.
///
/// The board holds one bitboard per colour. A square is black, white or empty
/// depending on which set contains it; the two sets never intersect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - White discs on D4 (3,3) and E5 (4,4)
    /// - Black discs on E4 (3,4) and D5 (4,3)
    fn default() -> Self {
        Board {
            black: Bitboard::from(Square::E4) | Bitboard::from(Square::D5),
            white: Bitboard::from(Square::D4) | Bitboard::from(Square::E5),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs at all.
    pub fn empty() -> Board {
        Board {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Creates a `Board` from one bitboard per colour.
    ///
    /// # Panics
    ///
    /// Panics if a square is claimed by both colours.
    pub fn from_bitboards(black: impl Into<Bitboard>, white: impl Into<Bitboard>) -> Board {
        let black = black.into();
        let white = white.into();
        assert!(
            (black & white).is_empty(),
            "Black and white discs overlap: {:#018x}",
            (black & white).bits()
        );
        Board { black, white }
    }

    /// Creates a `Board` from its text form.
    ///
    /// The string holds 64 cells from A1 to H8 in row order, using `X` for
    /// Black, `O` for White and `-` for empty squares. Whitespace is ignored so
    /// the output of [`Board`]'s `Display` impl parses back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidChar`] on an unknown cell character and
    /// [`BoardError::InvalidLength`] if there are not exactly 64 cells.
    pub fn from_string(board_string: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut cells = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(BoardError::InvalidChar(c))?;
            if cells < TOTAL_SQUARES {
                if let Some(player) = disc.owner() {
                    board.place(Square::from_usize_unchecked(cells), player);
                }
            }
            cells += 1;
        }
        if cells != TOTAL_SQUARES {
            return Err(BoardError::InvalidLength(cells));
        }
        Ok(board)
    }

    /// Re-initializes the board to the starting position.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Gets the disc at a square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Gets the disc at zero-based `(row, col)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::OutOfRange`] if either coordinate is outside 0-7.
    /// Callers that filter through the move evaluator never hit this.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Disc, SquareError> {
        Ok(self.disc_at(Square::from_row_col(row, col)?))
    }

    /// Places a disc of `player`'s colour on an empty square.
    ///
    /// This is a plain write: no captures are evaluated or applied.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied.
    pub fn place(&mut self, sq: Square, player: Player) {
        assert!(
            self.is_square_empty(sq),
            "Board::place called on occupied square {sq}"
        );
        match player {
            Player::Black => self.black = self.black.set(sq),
            Player::White => self.white = self.white.set(sq),
        }
    }

    /// Places a disc for `player` and turns every square in `flipped` to
    /// `player`'s colour.
    ///
    /// The caller is responsible for `flipped` being the capture set of the
    /// move; see [`crate::flip::flips`].
    ///
    /// # Panics
    ///
    /// Panics if `sq` is occupied or a square in `flipped` does not hold an
    /// opponent disc. Both checks run before the board is touched.
    pub fn apply_move(&mut self, sq: Square, player: Player, flipped: &[Square]) {
        let captured: Bitboard = flipped.iter().copied().collect();
        assert!(
            self.is_square_empty(sq),
            "Board::apply_move called on occupied square {sq}"
        );
        assert_eq!(
            captured & self.discs(player.opponent()),
            captured,
            "Flip set contains squares without an opponent disc"
        );

        self.place(sq, player);
        match player {
            Player::Black => {
                self.white = self.white & !captured;
                self.black |= captured;
            }
            Player::White => {
                self.black = self.black & !captured;
                self.white |= captured;
            }
        }
    }

    /// Returns the set of squares holding `player`'s discs.
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Returns the set of occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Returns the set of empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// Returns the disc counts as `(black, white)`.
    #[inline]
    pub fn count_discs(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Returns the number of empty squares.
    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.empty_squares().count()
    }

    /// Checks whether every square holds a disc.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_squares().is_empty()
    }

    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }
}

/// Rows are separated by newlines; `X` is Black, `O` is White and `-` is empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::iter() {
            if sq.index() > 0 && sq.col() == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.disc_at(sq).to_char())?;
        }
        Ok(())
    }
}

/// Error type for parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The text did not describe exactly 64 cells
    InvalidLength(usize),
    /// A cell character other than `X`, `O` or `-`
    InvalidChar(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength(n) => {
                write!(f, "Invalid board length: expected 64 cells, found {n}")
            }
            BoardError::InvalidChar(c) => {
                write!(f, "Invalid cell '{c}': must be 'X', 'O' or '-'")
            }
        }
    }
}

impl std::error::Error for BoardError {}
