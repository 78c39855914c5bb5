//! Defines the error types used throughout the crate
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string cannot be parsed as a `Color`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse string as a color".fmt(f)
    }
}

impl std::error::Error for ParseColorError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string cannot be parsed as a `Piece`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse string as a piece".fmt(f)
    }
}

impl std::error::Error for ParsePieceError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string cannot be parsed as a `File`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseFileError;

impl fmt::Display for ParseFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse string as a file".fmt(f)
    }
}

impl std::error::Error for ParseFileError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string cannot be parsed as a `Rank`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseRankError;

impl fmt::Display for ParseRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse string as a rank".fmt(f)
    }
}

impl std::error::Error for ParseRankError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string cannot be parsed as a `Square`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse string as a square".fmt(f)
    }
}

impl std::error::Error for ParseSquareError { }

impl From<ParseFileError> for ParseSquareError {
    fn from(_: ParseFileError) -> Self {
        ParseSquareError
    }
}

impl From<ParseRankError> for ParseSquareError {
    fn from(_: ParseRankError) -> Self {
        ParseSquareError
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when an integer is out of range for the target type
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromIntError;

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "integer out of range".fmt(f)
    }
}

impl std::error::Error for TryFromIntError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when move text is rejected
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Move text is not exactly four characters
    WrongSize,
    /// A coordinate is not a valid square
    BadSquare,
    /// The from-square holds no piece of the side to move
    NoPieceToMove,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseMoveError::*;

        let reason = match self {
            WrongSize => "wrong move size",
            BadSquare => "bad square",
            NoPieceToMove => "no piece to move",
        };
        write!(f, "invalid move ({})", reason)
    }
}

impl std::error::Error for ParseMoveError { }

impl From<ParseSquareError> for ParseMoveError {
    fn from(_: ParseSquareError) -> Self {
        ParseMoveError::BadSquare
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a FEN string is rejected
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseFenError {
    /// Nothing but whitespace where a board was expected
    Empty,
    /// More than ten ranks in the board field
    TooManyRanks,
    /// A rank describes more than nine files
    TooManyFiles,
    /// A character is neither a digit, a separator, nor a piece letter
    InvalidPiece,
    /// A piece lands outside the board
    PieceOutOfBoard,
    /// An advisor is placed outside its palace
    AdvisorNotInPalace,
    /// A king is placed outside its palace
    KingNotInPalace,
    /// A pawn is placed somewhere no pawn can reach
    PawnInWrongPlace,
    /// A bishop is placed off its seven home squares
    BishopInWrongPlace,
    /// Missing king or multiple kings of the same color
    KingCount,
    /// A field is not followed by a space
    SpaceExpected,
    /// The side-to-move field is not `w` or `b`
    InvalidSideToMove,
    /// The halfmove-clock field is not a number
    BadHalfMoveClock,
    /// The fullmove-number field is not a number
    BadMoveNumber,
    /// Trailing characters after the last field
    ExtraCharacters,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseFenError::*;

        let reason = match self {
            Empty => "empty board field",
            TooManyRanks => "too many ranks",
            TooManyFiles => "too many files",
            InvalidPiece => "invalid character as piece",
            PieceOutOfBoard => "piece out of board",
            AdvisorNotInPalace => "advisor not in palace",
            KingNotInPalace => "king not in palace",
            PawnInWrongPlace => "pawn in wrong place",
            BishopInWrongPlace => "bishop in wrong place",
            KingCount => "missing king or multiple kings of the same color",
            SpaceExpected => "space expected between fields",
            InvalidSideToMove => "invalid side to move",
            BadHalfMoveClock => "bad halfmove clock",
            BadMoveNumber => "bad total moves",
            ExtraCharacters => "extra characters",
        };
        write!(f, "bad fen string ({})", reason)
    }
}

impl std::error::Error for ParseFenError { }

impl From<ParsePieceError> for ParseFenError {
    fn from(_: ParsePieceError) -> Self {
        ParseFenError::InvalidPiece
    }
}

impl From<ParseColorError> for ParseFenError {
    fn from(_: ParseColorError) -> Self {
        ParseFenError::InvalidSideToMove
    }
}
