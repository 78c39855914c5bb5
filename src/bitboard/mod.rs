//! Provides a representation of the pieces on the board
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Moves and Attacks
//! Bitboards are useful for quickly computing the moves or attacks available to a piece based
//! on its location and the occupied squares. In addition to the [`BitBoard`](struct.BitBoard.html)
//! type, this module provides functions to compute moves and attacks for every piece type. The
//! attack tables are built once, on first use, and shared for the life of the process.
//!
//! ```rust
//! use xiangqi::Square;
//! use xiangqi::bitboard::{BitBoard, rook_attacks};
//!
//! let occ = BitBoard::from(Square::A4) | Square::C0.into();
//! let mut attacks = rook_attacks(Square::A0, occ);
//! assert_eq!(attacks.pop(), Some(Square::B0));
//! assert_eq!(attacks.pop(), Some(Square::C0));
//! assert_eq!(attacks.pop(), Some(Square::A1));
//! assert_eq!(attacks.pop(), Some(Square::A2));
//! assert_eq!(attacks.pop(), Some(Square::A3));
//! assert_eq!(attacks.pop(), Some(Square::A4));
//! assert_eq!(attacks.pop(), None);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryInto;
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use super::*;

mod attacks;
pub use attacks::*;

/// Both palaces: the 3x3 zones where kings and advisors are confined
pub(crate) const PALACE: BitBoard = BitBoard((0x70381C << 64) | 0xE07038);

const FILE_A: u128 = (0x20100 << 64) | 0x8040_2010_0804_0201;
const RANK_0: u128 = 0x1FF;

const FILE_C: u128 = FILE_A << 2;
const FILE_E: u128 = FILE_A << 4;
const FILE_G: u128 = FILE_A << 6;
const FILE_I: u128 = FILE_A << 8;
const PAWN_FILES: u128 = FILE_A | FILE_C | FILE_E | FILE_G | FILE_I;

const fn rank(r: usize) -> u128 {
    RANK_0 << (9 * r)
}

/// The two halves of the board: `HALF[0]` is ranks 0 through 4, `HALF[1]` ranks 5 through 9
pub(crate) const HALF: [BitBoard; 2] = [
    BitBoard(rank(0) | rank(1) | rank(2) | rank(3) | rank(4)),
    BitBoard(rank(5) | rank(6) | rank(7) | rank(8) | rank(9)),
];

/// Every square a bishop of either side may occupy
pub(crate) const BISHOP_ZONE: BitBoard = BitBoard(
    ((FILE_A | FILE_E | FILE_I) & (rank(2) | rank(7)))
        | ((FILE_C | FILE_G) & (rank(0) | rank(4) | rank(5) | rank(9))),
);

/// Every square a pawn of the given side may occupy: the enemy half, plus the
/// alternate files of the two ranks before the river
pub(crate) const PAWN_ZONE: [BitBoard; 2] = [
    BitBoard(HALF[1].0 | ((rank(3) | rank(4)) & PAWN_FILES)),
    BitBoard(HALF[0].0 | ((rank(5) | rank(6)) & PAWN_FILES)),
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// A `BitBoard` is a set of [`Square`](../enum.Square.html)s stored in a 128-bit integer, of
/// which the low 90 bits are used. Bit `rank * 9 + file` corresponds to the square on that
/// rank and file, so `a0` is bit zero and `i9` is bit 89.
///
/// `BitBoard` implements the bit-wise logic operators `|`, `&`, `^`, `!` and their assignment
/// forms, plus `-` for set difference. It also has the methods typical for sets, such as
/// `insert`, `remove`, `len` and `contains`, and implements `IntoIterator` over its squares in
/// ascending order. Since it is a plain 128-bit value it is `Copy`, and there is no need for
/// borrowing iterators.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct BitBoard(u128);

impl BitBoard {
    /// Creates a new, empty bitboard
    pub fn new() -> BitBoard {
        Default::default()
    }

    /// Returns the number of squares in the bitboard
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the number of squares in the bitboard, optimized for sparse boards
    ///
    /// Takes one iteration per set bit rather than a full population count, which wins
    /// when at most a handful of pieces of one type remain.
    pub fn count_few(self) -> usize {
        let mut bits = self.0;
        let mut count = 0;
        while bits != 0 {
            bits &= bits - 1;
            count += 1;
        }
        count
    }

    /// Returns `true` if the bitboard is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        !(self & sq.into()).is_empty()
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: BitBoard) -> bool {
        !(self & other).is_empty()
    }

    /// Returns `true` if `self` does not intersect `other`
    pub fn is_disjoint(self, other: BitBoard) -> bool {
        (self & other).is_empty()
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Removes a square from the bitboard if it is present
    pub fn remove(&mut self, sq: Square) {
        *self &= !BitBoard::from(sq);
    }

    /// Removes the lowest square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        if self.0 > 0 {
            // get the least significant bit
            let sq: Square = (self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE");
            // clear the least significant bit
            self.0 &= self.0 - 1;

            Some(sq)
        } else {
            None
        }
    }

    /// Returns the square that would be removed by a pop command
    pub fn peek(self) -> Option<Square> {
        if self.0 > 0 {
            Some((self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE"))
        } else {
            None
        }
    }

    /// Toggles a square in the bitboard
    pub fn toggle(&mut self, sq: Square) {
        *self ^= sq.into();
    }

    /// Returns the bitboard mirrored across the middle of the board, so rank 0 becomes
    /// rank 9 while every file keeps its place
    ///
    /// Used to switch between the two sides' perspectives.
    pub fn mirror(self) -> BitBoard {
        const SEQ1: u128 = 0x0000_1FFF_FFFF_FFFF;
        const SEQ2: u128 = (0x0000_0000_0000_00FF << 64) | 0x8000_0000_07FC_0000;
        const SEQ3: u128 = 0x7FFF_E000_0003_FFFF;
        const SEQ4: u128 = (0x0000_0000_0001_FF00 << 64) | 0x003F_E00F_F800_01FF;

        let mut v = self.0;
        v = ((v & SEQ1) << 45) | ((v >> 45) & SEQ1);
        let fixed = v & SEQ2;
        v = ((v & SEQ3) << 27) | ((v >> 27) & SEQ3);
        v = ((v & SEQ4) << 9) | ((v >> 9) & SEQ4);
        BitBoard(v | fixed)
    }

    /// Returns the bitboard mirrored across the central file, so file `a` becomes file `i`
    /// while every rank keeps its place
    ///
    /// Used only to canonicalize the board orientation for move indexing, never for play.
    pub fn flip_files(self) -> BitBoard {
        const SEQ1: u128 = (0x0000_0000_0020_1008 << 64) | 0x0402_0100_8040_2010;
        const SEQ2: u128 = (0x0000_0000_03C1_E0F0 << 64) | 0x783C_1E0F_0783_C1E0;
        const SEQ3: u128 = (0x0000_0000_0319_8CC6 << 64) | 0x6331_98CC_6633_198C;
        const SEQ4: u128 = (0x0000_0000_0295_4AA5 << 64) | 0x52A9_54AA_552A_954A;

        let mut v = self.0;
        let fixed = v & SEQ1;
        v = ((v & SEQ2) >> 5) | ((v << 5) & SEQ2);
        v = ((v & SEQ3) >> 2) | ((v << 2) & SEQ3);
        v = ((v & SEQ4) >> 1) | ((v << 1) & SEQ4);
        BitBoard(v | fixed)
    }
}

impl ops::Not for BitBoard {
    type Output = Self;

    fn not(self) -> Self::Output {
        BitBoard(!self.0)
    }
}

impl ops::BitAnd for BitBoard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for BitBoard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for BitBoard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for BitBoard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for BitBoard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

impl ops::Sub for BitBoard {
    type Output = Self;

    /// Set difference: the squares of `self` not present in `rhs`
    fn sub(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 & !rhs.0)
    }
}

impl ops::SubAssign for BitBoard {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard({:#x})", self.0)
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::UpperHex for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u128> for BitBoard {
    fn from(val: u128) -> BitBoard {
        BitBoard(val)
    }
}

impl From<Square> for BitBoard {
    fn from(sq: Square) -> BitBoard {
        BitBoard(1 << sq as u32)
    }
}

impl From<File> for BitBoard {
    fn from(f: File) -> BitBoard {
        BitBoard(FILE_A << f as u32)
    }
}

impl From<Rank> for BitBoard {
    fn from(r: Rank) -> BitBoard {
        BitBoard(RANK_0 << (9 * r as u32))
    }
}

impl From<IntoIter> for BitBoard {
    fn from(iter: IntoIter) -> BitBoard {
        iter.0
    }
}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for BitBoard {
    /// If converting from `bitboard::IntoIter`, use `BitBoard::from()` instead as that is faster
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = BitBoard::new();

        for sq in iter {
            bd.insert(sq);
        }

        bd
    }
}

impl Extend<Square> for BitBoard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `BitBoard`, in ascending order
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(BitBoard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_operations() {
        assert_eq!(BitBoard::new(), BitBoard(0));
        assert_eq!(BitBoard::new(), Default::default());
        assert_eq!(BitBoard::new().len(), 0);
        assert!(BitBoard::new().is_empty());

        let mut bd = BitBoard::new();
        bd.insert(Square::A0);
        bd.insert(Square::E4);
        bd.insert(Square::I9);
        assert_eq!(bd.len(), 3);
        assert_eq!(bd.count_few(), 3);
        assert!(bd.contains(Square::E4));
        assert!(!bd.contains(Square::E5));

        bd.remove(Square::E4);
        assert_eq!(bd.len(), 2);
        assert!(bd.intersects(Square::A0.into()));
        assert!(bd.is_disjoint(Square::E4.into()));

        assert_eq!(bd - BitBoard::from(Square::A0), Square::I9.into());
    }

    #[test]
    fn iteration_is_ascending() {
        let bd = BitBoard::from(Square::I9) | Square::A0.into() | Square::E4.into();
        let squares: Vec<_> = bd.into_iter().collect();
        assert_eq!(squares, vec![Square::A0, Square::E4, Square::I9]);
        assert_eq!(bd.into_iter().len(), 3);
    }

    #[test]
    fn file_and_rank_bitboards() {
        for i in 0..File::COUNT {
            let f = File::try_from(i).unwrap();
            let bd = BitBoard::from(f);
            assert_eq!(bd.len(), Rank::COUNT);
            for sq in bd {
                assert_eq!(sq.file(), f);
            }
        }
        for i in 0..Rank::COUNT {
            let r = Rank::try_from(i).unwrap();
            let bd = BitBoard::from(r);
            assert_eq!(bd.len(), File::COUNT);
            for sq in bd {
                assert_eq!(sq.rank(), r);
            }
        }
    }

    #[test]
    fn mirror_flips_ranks() {
        for i in 0..Square::COUNT {
            let sq = Square::try_from(i).unwrap();
            assert_eq!(BitBoard::from(sq).mirror(), BitBoard::from(sq.flip_rank()));
        }

        let bd = BitBoard::from(Square::B0) | Square::C7.into();
        assert_eq!(bd.mirror().mirror(), bd);
    }

    #[test]
    fn flip_files_flips_files() {
        for i in 0..Square::COUNT {
            let sq = Square::try_from(i).unwrap();
            assert_eq!(BitBoard::from(sq).flip_files(), BitBoard::from(sq.flip_file()));
        }
    }

    #[test]
    fn zone_masks_are_consistent() {
        assert_eq!(PALACE.len(), 18);
        assert_eq!(HALF[0].len(), 45);
        assert_eq!(HALF[1].len(), 45);
        assert!(HALF[0].is_disjoint(HALF[1]));
        assert_eq!(BISHOP_ZONE.len(), 14);
        assert_eq!(PAWN_ZONE[0].len(), 45 + 10);
        assert_eq!(PAWN_ZONE[1].len(), 45 + 10);
        assert!(PALACE.contains(Square::E1));
        assert!(PALACE.contains(Square::E8));
        assert!(!PALACE.contains(Square::C1));
    }
}
