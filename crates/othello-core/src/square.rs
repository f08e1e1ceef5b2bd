use std::fmt;
use std::str::FromStr;

/// A square on the Othello board, ranging from A1 to H8.
///
/// Squares are addressed either by algebraic name (file a-h, rank 1-8) or by
/// zero-based `(row, col)` coordinates, where the row is the rank minus one and
/// the column is the file:
///
/// ```text
///      A  B  C  D  E  F  G  H
/// 1   00 01 02 03 04 05 06 07    row 0
/// 2   08 09 10 11 12 13 14 15    row 1
/// 3   16 17 18 19 20 21 22 23    row 2
/// 4   24 25 26 27 28 29 30 31    row 3
/// 5   32 33 34 35 36 37 38 39    row 4
/// 6   40 41 42 43 44 45 46 47    row 5
/// 7   48 49 50 51 52 53 54 55    row 6
/// 8   56 57 58 59 60 61 62 63    row 7
/// ```
///
/// `Square::None` stands for "no square" and is never a valid board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
    None,
}

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;
/// Number of playable squares.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[rustfmt::skip]
const ALL_SQUARES: [Square; TOTAL_SQUARES + 1] = [
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    Square::None,
];

impl Square {
    /// Returns a `u64` with the single bit of this square set.
    ///
    /// A1 maps to `0x1` and H8 to `0x8000000000000000`.
    #[inline]
    pub fn bit(self) -> u64 {
        debug_assert!(
            (self as usize) < TOTAL_SQUARES,
            "Index out of bounds for Square enum. self: {self:?}"
        );
        1 << self as u8
    }

    /// Returns the index of the square (0-63, 64 for `Square::None`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square` without range checking beyond a debug assertion.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to convert (0-63 for board squares, 64 for `None`).
    ///
    /// # Returns
    ///
    /// The corresponding `Square` variant.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index <= TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        ALL_SQUARES[index]
    }

    /// Creates a `Square` from zero-based `(row, col)` coordinates.
    ///
    /// # Arguments
    ///
    /// * `row` - The row (0-7), where row 0 is rank 1.
    /// * `col` - The column (0-7), where column 0 is file A.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::OutOfRange`] if either coordinate is outside 0-7.
    pub fn from_row_col(row: usize, col: usize) -> Result<Square, SquareError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(SquareError::OutOfRange { row, col });
        }
        Ok(Self::from_usize_unchecked(row * BOARD_SIZE + col))
    }

    /// Returns the row of this square (0-7).
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn row(self) -> usize {
        assert!(self != Square::None, "Square::row called on Square::None");
        self.index() / BOARD_SIZE
    }

    /// Returns the column of this square (0-7).
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn col(self) -> usize {
        assert!(self != Square::None, "Square::col called on Square::None");
        self.index() % BOARD_SIZE
    }

    /// Steps one square along a direction vector.
    ///
    /// # Arguments
    ///
    /// * `d_row` - Row delta.
    /// * `d_col` - Column delta.
    ///
    /// # Returns
    ///
    /// The neighbouring square, or `None` if the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Square::from_row_col(row, col).ok()
    }

    /// Returns an iterator over all 64 board squares from A1 to H8.
    ///
    /// `Square::None` is not included.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES[..TOTAL_SQUARES].iter().copied()
    }
}

// We want Square::None as the default value, not the first variant (A1)
// which would be chosen by #[derive(Default)]
#[allow(clippy::derivable_impls)]
impl Default for Square {
    fn default() -> Self {
        Square::None
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
    /// Row or column outside 0-7
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'd3')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
            SquareError::OutOfRange { row, col } => {
                write!(f, "Invalid coordinate ({row}, {col}): must be within 0-7")
            }
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a square in algebraic notation (e.g., "d3").
    ///
    /// Both uppercase and lowercase files are accepted and surrounding
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Square::from_row_col(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Square::None {
            return write!(f, "None");
        }

        let file = self.col() as u8 + b'a';
        let rank = self.row() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}
