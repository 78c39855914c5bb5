//! Provides types for moves and their neural-network encoding
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use super::*;
use crate::bitboard::{self, BitBoard, HALF};
use crate::error::ParseMoveError;

/// The number of moves with a distinct policy index
pub const NUM_MOVE_INDICES: usize = 2062;

/// A move, stored as a from-square and a to-square
///
/// Moves are oriented for the side making them: the mover's back rank is rank 0. A move
/// by the second player must have its ranks flipped to obtain board coordinates, which
/// [`parse`](#method.parse) and [`text`](#method.text) do on demand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Move(u16);

impl Move {
    /// Creates a new `Move` from `from` to `to`
    pub fn new(from: Square, to: Square) -> Move {
        Move((from as u16) << 7 | to as u16)
    }

    /// The origin square
    pub fn from_sq(self) -> Square {
        Square::try_from(((self.0 >> 7) & 0x7f) as usize).expect("INFALLIBLE")
    }

    /// The destination square
    pub fn to_sq(self) -> Square {
        Square::try_from((self.0 & 0x7f) as usize).expect("INFALLIBLE")
    }

    /// The raw 14-bit encoding, `from << 7 | to`
    pub fn packed(self) -> u16 {
        self.0
    }

    /// Returns the move with the ranks of both squares flipped
    pub fn flip_ranks(self) -> Move {
        Move::new(self.from_sq().flip_rank(), self.to_sq().flip_rank())
    }

    /// Returns the move with the files of both squares flipped
    pub fn flip_files(self) -> Move {
        Move::new(self.from_sq().flip_file(), self.to_sq().flip_file())
    }

    /// Parses a move in coordinate notation, such as `h2e2`
    ///
    /// `black` indicates the move is made by the second player, whose moves are flipped
    /// into the mover's orientation.
    pub fn parse(s: &str, black: bool) -> Result<Move, ParseMoveError> {
        let mv: Move = s.parse()?;
        Ok(if black { mv.flip_ranks() } else { mv })
    }

    /// The move in coordinate notation
    ///
    /// `black` indicates the move is made by the second player, flipping it back into
    /// board coordinates.
    pub fn text(self, black: bool) -> String {
        if black { self.flip_ranks() } else { self }.to_string()
    }

    /// The move's policy index, after applying `transform` to both squares
    pub fn index(self, transform: Transform) -> u16 {
        let mv = match transform {
            Transform::Identity => self,
            Transform::FlipFiles => self.flip_files(),
        };
        MOVE_TO_IDX[mv.0 as usize]
    }

    /// The move a policy index stands for, with `transform` undone
    ///
    /// # Panics
    /// Panics if `index >= NUM_MOVE_INDICES`.
    pub fn from_index(index: usize, transform: Transform) -> Move {
        let mv = IDX_TO_MOVE[index];
        match transform {
            Transform::Identity => mv,
            Transform::FlipFiles => mv.flip_files(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from_sq(), self.to_sq())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        lazy_static! {
            static ref MOVE_RE: Regex = Regex::new("^[a-i][0-9][a-i][0-9]$").expect("INFALLIBLE");
        }

        if s.len() != 4 {
            return Err(ParseMoveError::WrongSize);
        }
        if !MOVE_RE.is_match(s) {
            return Err(ParseMoveError::BadSquare);
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        Ok(Move::new(from, to))
    }
}

/// A symmetry applied to moves before policy-index lookup
///
/// The board is symmetric under file reflection, so a position and its file-mirrored twin
/// can share network evaluations by transforming the moves accordingly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transform {
    /// No transformation
    Identity,
    /// Reflect both squares across the central file
    FlipFiles,
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::Identity
    }
}

/// Builds the policy-index move list
///
/// From-squares are visited file-major. For each, the destinations are the rook slides
/// along its rank and file, the knight leaps, and for the mover's own advisor and bishop
/// squares the legal advisor steps and bishop jumps, all sorted file-major. The resulting
/// order is the fixed convention the network's policy head is trained against.
fn build_move_list() -> Vec<Move> {
    let advisor_squares: BitBoard =
        [Square::D0, Square::F0, Square::E1, Square::D2, Square::F2].iter().copied().collect();
    let empty = BitBoard::new();
    let file_major = |s: &Square| (s.file() as usize, s.rank() as usize);

    let mut from_squares: Vec<Square> =
        (0..Square::COUNT).map(|i| Square::try_from(i).expect("INFALLIBLE")).collect();
    from_squares.sort_by_key(file_major);

    let mut moves = Vec::with_capacity(NUM_MOVE_INDICES);
    for from in from_squares {
        let mut dest = bitboard::rook_attacks(from, empty) | bitboard::knight_attacks(from, empty);
        if advisor_squares.contains(from) {
            dest |= bitboard::advisor_attacks(from) & HALF[0];
        }
        if (bitboard::BISHOP_ZONE & HALF[0]).contains(from) {
            dest |= bitboard::bishop_attacks(from, empty);
        }

        let mut dest: Vec<Square> = dest.into_iter().collect();
        dest.sort_by_key(file_major);
        moves.extend(dest.into_iter().map(|to| Move::new(from, to)));
    }

    debug_assert_eq!(moves.len(), NUM_MOVE_INDICES);
    moves
}

lazy_static! {
    static ref IDX_TO_MOVE: Vec<Move> = build_move_list();
    static ref MOVE_TO_IDX: Vec<u16> = {
        let mut table = vec![0; 128*128];
        for (i, mv) in IDX_TO_MOVE.iter().enumerate() {
            table[mv.0 as usize] = i as u16;
        }
        table
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_round_trips() {
        let mv = Move::new(Square::H2, Square::E2);
        assert_eq!(mv.from_sq(), Square::H2);
        assert_eq!(mv.to_sq(), Square::E2);
        assert_eq!(mv.packed(), (Square::H2 as u16) << 7 | Square::E2 as u16);
    }

    #[test]
    fn coordinate_notation() {
        assert_eq!("h2e2".parse::<Move>(), Ok(Move::new(Square::H2, Square::E2)));
        assert_eq!(Move::new(Square::B0, Square::C2).to_string(), "b0c2");

        assert!("h2e".parse::<Move>().is_err());
        assert!("h2e2e".parse::<Move>().is_err());
        assert!("j2e2".parse::<Move>().is_err());
    }

    #[test]
    fn black_moves_flip_ranks() {
        let mv = Move::parse("h7e7", true).unwrap();
        assert_eq!(mv, Move::new(Square::H2, Square::E2));
        assert_eq!(mv.text(true), "h7e7");
        assert_eq!(mv.text(false), "h2e2");
    }

    #[test]
    fn move_list_and_indices() {
        assert_eq!(IDX_TO_MOVE.len(), NUM_MOVE_INDICES);

        // the list starts with the a-file rook slides from a0
        assert_eq!(Move::from_index(0, Transform::Identity), Move::new(Square::A0, Square::A1));
        assert_eq!(Move::from_index(8, Transform::Identity), Move::new(Square::A0, Square::A9));
        assert_eq!(Move::from_index(9, Transform::Identity), Move::new(Square::A0, Square::B0));
        // knight leap a0b2 sorts between the b- and c-file destinations
        assert_eq!(Move::from_index(10, Transform::Identity), Move::new(Square::A0, Square::B2));

        for i in 0..NUM_MOVE_INDICES {
            let mv = Move::from_index(i, Transform::Identity);
            assert_eq!(mv.index(Transform::Identity) as usize, i);
        }
    }

    #[test]
    fn flipped_indices_invert() {
        for i in 0..NUM_MOVE_INDICES {
            let mv = Move::from_index(i, Transform::FlipFiles);
            assert_eq!(mv.index(Transform::FlipFiles) as usize, i);
        }

        // e-file moves are unchanged by the file flip
        let mv = Move::new(Square::E0, Square::E1);
        assert_eq!(mv.index(Transform::FlipFiles), mv.index(Transform::Identity));
        // a-file slides map to i-file slides
        let mv = Move::new(Square::A0, Square::A9);
        let flipped = Move::new(Square::I0, Square::I9);
        assert_eq!(mv.index(Transform::FlipFiles), flipped.index(Transform::Identity));
    }
}
