use crate::player::Player;

/// The content of a single cell on the board.
///
/// * `Empty` - No disc on the cell.
/// * `Black` - A black disc.
/// * `White` - A white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a disc from its character representation.
    ///
    /// # Returns
    ///
    /// `Some(Disc)` for `'-'`, `'X'` or `'O'`, `None` for any other character.
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' => Some(Disc::Empty),
            'X' => Some(Disc::Black),
            'O' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the player owning this disc, or `None` for an empty cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Disc::Black => Some(Player::Black),
            Disc::White => Some(Player::White),
            Disc::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }
}

impl From<Player> for Disc {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Disc::Black,
            Player::White => Disc::White,
        }
    }
}
