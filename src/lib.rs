//! A rules engine for Xiangqi (Chinese chess)
//!
//! The board is 9 files by 10 ranks. Seven piece types move under distinct
//! blocking rules, kings and advisors are confined to their palaces, and the
//! game is adjudicated under a repetition rule that distinguishes perpetual
//! check, perpetual chase and benign repetition.
//!
//! The main types are [`Board`](struct.Board.html), which holds a single
//! position and generates moves, and [`PositionHistory`](struct.PositionHistory.html),
//! which records a game and judges repetitions.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]

use std::ops;
use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;
use error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
///
/// Red is conventionally rendered as White in FEN strings, so `White` is the side which
/// moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use xiangqi::Color;
    /// assert_eq!(!Color::White, Color::Black);
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(ParseColorError),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl TryFrom<usize> for Color {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Color>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of a Xiangqi piece
///
/// The discriminants fix the order used by every per-piece table in the crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Piece {
    Rook = 0,
    Advisor = 1,
    Cannon = 2,
    Pawn = 3,
    Knight = 4,
    Bishop = 5,
    King = 6,
}

impl Piece {
    /// The number of piece types
    pub const COUNT: usize = Piece::King as usize + 1;
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Rook => "R",
            Piece::Advisor => "A",
            Piece::Cannon => "C",
            Piece::Pawn => "P",
            Piece::Knight => "N",
            Piece::Bishop => "B",
            Piece::King => "K",
        }.fmt(f)
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R"|"r" => Ok(Piece::Rook),
            "A"|"a" => Ok(Piece::Advisor),
            "C"|"c" => Ok(Piece::Cannon),
            "P"|"p" => Ok(Piece::Pawn),
            "N"|"n" => Ok(Piece::Knight),
            "B"|"b" => Ok(Piece::Bishop),
            "K"|"k" => Ok(Piece::King),
            _       => Err(ParsePieceError),
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Rook
    }
}

impl TryFrom<usize> for Piece {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Piece>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Piece> for usize {
    fn from(value: Piece) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled from left to right from `White`'s perspective as
/// `A` through `I`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7, I = 8,
}

impl File {
    /// The number of files
    pub const COUNT: usize = File::I as usize + 1;
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            File::A => "a",
            File::B => "b",
            File::C => "c",
            File::D => "d",
            File::E => "e",
            File::F => "f",
            File::G => "g",
            File::H => "h",
            File::I => "i",
        }.fmt(f)
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a"|"A" => Ok(File::A),
            "b"|"B" => Ok(File::B),
            "c"|"C" => Ok(File::C),
            "d"|"D" => Ok(File::D),
            "e"|"E" => Ok(File::E),
            "f"|"F" => Ok(File::F),
            "g"|"G" => Ok(File::G),
            "h"|"H" => Ok(File::H),
            "i"|"I" => Ok(File::I),
            _       => Err(ParseFileError),
        }
    }
}

impl Default for File {
    fn default() -> Self {
        File::A
    }
}

impl TryFrom<usize> for File {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, labeled from nearest to farthest from `White`'s perspective
/// as `R0` through `R9`.
///
/// Ranks 0 through 4 are `White`'s half of the board; the river runs between ranks 4 and 5.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    R0 = 0, R1 = 1, R2 = 2, R3 = 3, R4 = 4, R5 = 5, R6 = 6, R7 = 7, R8 = 8, R9 = 9,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = Rank::R9 as usize + 1;

    /// Returns the rank mirrored across the middle of the board, so `R0` becomes `R9`
    pub fn flip(self) -> Rank {
        Rank::try_from(Rank::COUNT - 1 - self as usize).expect("INFALLIBLE")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::R0 => "0",
            Rank::R1 => "1",
            Rank::R2 => "2",
            Rank::R3 => "3",
            Rank::R4 => "4",
            Rank::R5 => "5",
            Rank::R6 => "6",
            Rank::R7 => "7",
            Rank::R8 => "8",
            Rank::R9 => "9",
        }.fmt(f)
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Rank::R0),
            "1" => Ok(Rank::R1),
            "2" => Ok(Rank::R2),
            "3" => Ok(Rank::R3),
            "4" => Ok(Rank::R4),
            "5" => Ok(Rank::R5),
            "6" => Ok(Rank::R6),
            "7" => Ok(Rank::R7),
            "8" => Ok(Rank::R8),
            "9" => Ok(Rank::R9),
            _   => Err(ParseRankError),
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::R0
    }
}

impl TryFrom<usize> for Rank {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, labeled using the `File` and `Rank` as coordinates.
///
/// The discriminant is `rank * 9 + file`, the bit position the square occupies in a
/// [`BitBoard`](bitboard/struct.BitBoard.html).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Square {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A0 =  0, B0 =  1, C0 =  2, D0 =  3, E0 =  4, F0 =  5, G0 =  6, H0 =  7, I0 =  8,
    A1 =  9, B1 = 10, C1 = 11, D1 = 12, E1 = 13, F1 = 14, G1 = 15, H1 = 16, I1 = 17,
    A2 = 18, B2 = 19, C2 = 20, D2 = 21, E2 = 22, F2 = 23, G2 = 24, H2 = 25, I2 = 26,
    A3 = 27, B3 = 28, C3 = 29, D3 = 30, E3 = 31, F3 = 32, G3 = 33, H3 = 34, I3 = 35,
    A4 = 36, B4 = 37, C4 = 38, D4 = 39, E4 = 40, F4 = 41, G4 = 42, H4 = 43, I4 = 44,
    A5 = 45, B5 = 46, C5 = 47, D5 = 48, E5 = 49, F5 = 50, G5 = 51, H5 = 52, I5 = 53,
    A6 = 54, B6 = 55, C6 = 56, D6 = 57, E6 = 58, F6 = 59, G6 = 60, H6 = 61, I6 = 62,
    A7 = 63, B7 = 64, C7 = 65, D7 = 66, E7 = 67, F7 = 68, G7 = 69, H7 = 70, I7 = 71,
    A8 = 72, B8 = 73, C8 = 74, D8 = 75, E8 = 76, F8 = 77, G8 = 78, H8 = 79, I8 = 80,
    A9 = 81, B9 = 82, C9 = 83, D9 = 84, E9 = 85, F9 = 86, G9 = 87, H9 = 88, I9 = 89,
}

impl Square {
    /// The number of squares
    pub const COUNT: usize = Square::I9 as usize + 1;

    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(rank as usize * File::COUNT + file as usize).expect("INFALLIBLE")
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        File::try_from(self as usize % File::COUNT).expect("INFALLIBLE")
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        Rank::try_from(self as usize / File::COUNT).expect("INFALLIBLE")
    }

    /// Returns the square mirrored across the middle of the board, keeping its file
    ///
    /// # Example
    /// ```
    /// use xiangqi::Square;
    /// assert_eq!(Square::A0.flip_rank(), Square::A9);
    /// assert_eq!(Square::E4.flip_rank(), Square::E5);
    /// ```
    pub fn flip_rank(self) -> Square {
        Square::from_coord(self.file(), self.rank().flip())
    }

    /// Returns the square mirrored across the central file, keeping its rank
    pub fn flip_file(self) -> Square {
        let file = File::try_from(File::COUNT - 1 - self.file() as usize).expect("INFALLIBLE");
        Square::from_coord(file, self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.file().to_string() + &self.rank().to_string()).fmt(f)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c: Vec<_> = s.chars().collect();
        if c.len() == 2 {
            Ok(Square::from_coord(c[0].to_string().parse()?, c[1].to_string().parse()?))
        } else {
            Err(ParseSquareError)
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::A0
    }
}

impl TryFrom<usize> for Square {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod bitboard;

mod moves;
pub use moves::{Move, Transform};

mod board;
pub use board::Board;

mod game;
pub use game::{GameResult, Position, PositionHistory};

pub mod variations;

pub mod error;


#[cfg(test)]
mod piece_tests {
    use std::convert::TryFrom;
    use super::Piece;

    #[test]
    fn display_trait_works() {
        assert_eq!(format!("{}", Piece::Rook), "R");
        assert_eq!(format!("{}", Piece::Advisor), "A");
        assert_eq!(format!("{}", Piece::Cannon), "C");
        assert_eq!(format!("{}", Piece::Pawn), "P");
        assert_eq!(format!("{}", Piece::Knight), "N");
        assert_eq!(format!("{}", Piece::Bishop), "B");
        assert_eq!(format!("{}", Piece::King), "K");
    }

    #[test]
    fn fromstr_trait_works() {
        for p in vec![ Piece::Rook, Piece::Advisor, Piece::Cannon, Piece::Pawn,
                       Piece::Knight, Piece::Bishop, Piece::King ] {
            assert_eq!(p.to_string().parse::<Piece>().unwrap(), p);
            assert_eq!(p.to_string().to_lowercase().parse::<Piece>().unwrap(), p);
        }
        assert!("X".parse::<Piece>().is_err());
        assert!("x".parse::<Piece>().is_err());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        for i in 0..Piece::COUNT {
            let p = Piece::try_from(i).unwrap();
            assert_eq!(p as usize, i);
            assert_eq!(usize::from(p), i);
        }
        assert!(Piece::try_from(Piece::COUNT).is_err());
    }
}

#[cfg(test)]
mod file_tests {
    use std::convert::TryFrom;
    use super::File;

    #[test]
    fn display_and_fromstr_traits_match() {
        for i in 0..File::COUNT {
            let f = File::try_from(i).unwrap();
            assert_eq!(f.to_string().parse::<File>().unwrap(), f);
            assert_eq!(f.to_string().to_uppercase().parse::<File>().unwrap(), f);
        }
        assert!("j".parse::<File>().is_err());
        assert!("x".parse::<File>().is_err());
    }

    #[test]
    fn default_is_file_a() {
        assert_eq!(File::A, Default::default());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        for i in 0..File::COUNT {
            let f = File::try_from(i).unwrap();
            assert_eq!(f as usize, i);
            assert_eq!(usize::from(f), i);
        }
        assert!(File::try_from(File::COUNT).is_err());
    }
}

#[cfg(test)]
mod rank_tests {
    use std::convert::TryFrom;
    use super::Rank;

    #[test]
    fn display_and_fromstr_traits_match() {
        for i in 0..Rank::COUNT {
            let r = Rank::try_from(i).unwrap();
            assert_eq!(format!("{}", r), i.to_string());
            assert_eq!(r.to_string().parse::<Rank>().unwrap(), r);
        }
        assert!("x".parse::<Rank>().is_err());
    }

    #[test]
    fn flip_mirrors_the_board() {
        assert_eq!(Rank::R0.flip(), Rank::R9);
        assert_eq!(Rank::R4.flip(), Rank::R5);
        assert_eq!(Rank::R9.flip(), Rank::R0);
        for i in 0..Rank::COUNT {
            let r = Rank::try_from(i).unwrap();
            assert_eq!(r.flip().flip(), r);
        }
    }

    #[test]
    fn default_is_rank_0() {
        assert_eq!(Rank::R0, Default::default());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        for i in 0..Rank::COUNT {
            let r = Rank::try_from(i).unwrap();
            assert_eq!(r as usize, i);
            assert_eq!(usize::from(r), i);
        }
        assert!(Rank::try_from(Rank::COUNT).is_err());
    }
}
