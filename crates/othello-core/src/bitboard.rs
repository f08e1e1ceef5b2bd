//! Bitboard set of squares.
//!
//! This module provides a [`Bitboard`] type that represents a set of squares on
//! the 64-square board using a single `u64`, where each bit corresponds to a
//! square (bit 0 = A1, bit 63 = H8). It backs both the board occupancy and the
//! legal move sets returned by the move evaluator.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a new bitboard with the bit at the given square set.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bit())
    }

    /// Checks if the bitboard contains the given square.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bit() != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    ///
    /// # Returns
    ///
    /// The number of squares in the set (0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a new bitboard with the least significant bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_usize_unchecked(
                self.0.trailing_zeros() as usize,
            ))
        }
    }

    /// Returns an iterator over all squares in the set, from A1 towards H8.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// Conversion trait implementations

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Bitboard(sq.bit())
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

// Iterator support

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

/// Iterator over the squares of a [`Bitboard`] in ascending index order.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let square = self.bitboard.lsb_square()?;
        self.bitboard = self.bitboard.clear_lsb();
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_contains() {
        let mut board = Bitboard::EMPTY;

        board = board.set(Square::A1);
        assert!(board.contains(Square::A1));
        assert!(!board.contains(Square::A2));

        board = board.set(Square::H8);
        assert!(board.contains(Square::A1));
        assert!(board.contains(Square::H8));
        assert_eq!(board.count(), 2);
        assert_eq!(board.set(Square::H8), board);
    }

    #[test]
    fn test_iter_order() {
        let board: Bitboard = [Square::H8, Square::D3, Square::A1].into_iter().collect();
        let squares: Vec<Square> = board.iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::D3, Square::H8]);
        assert_eq!(board.iter().len(), 3);
    }

    #[test]
    fn test_empty_and_complement() {
        assert!(Bitboard::EMPTY.is_empty());
        assert_eq!(Bitboard::EMPTY.iter().next(), None);
        assert_eq!((!Bitboard::EMPTY).count(), 64);
        assert_eq!(Bitboard::from(u64::MAX).lsb_square(), Some(Square::A1));
        assert_eq!(Bitboard::from(Square::H8).lsb_square(), Some(Square::H8));
    }

    #[test]
    fn test_operators() {
        let a = Bitboard::from(Square::A1) | Bitboard::from(Square::B1);
        let b = Bitboard::from(Square::B1) | Bitboard::from(Square::C1);
        assert_eq!(a & b, Bitboard::from(Square::B1));
        assert_eq!((a | b).count(), 3);

        let mut c = a;
        c &= b;
        assert_eq!(c, Bitboard::from(Square::B1));
        c |= Bitboard::from(Square::H8);
        assert_eq!(c.bits(), Square::B1.bit() | Square::H8.bit());
    }
}
