//! Provides the board representation and move generation
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::fmt;
use lazy_static::lazy_static;
use super::*;
use crate::bitboard::{self, BitBoard, PALACE, HALF, BISHOP_ZONE, PAWN_ZONE};
use crate::error::{ParseFenError, ParseMoveError};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The pieces on the board, seen from the side to move
///
/// The board is always oriented for the side to move: "our" pieces advance toward rank 9,
/// and after every move the board is [mirrored](#method.mirror) so the other side becomes
/// "us". The `flipped` flag records whether that perspective differs from the absolute
/// one, which is all that distinguishes the second player.
///
/// Besides the piece sets the board carries a per-square piece identifier, assigned when a
/// position is set up and moved along with each piece. The identifiers let repeated
/// positions report *which* pieces are being chased, as required by the perpetual-chase
/// rules, as a bitmask that is comparable across repetitions of the same position.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    our_pieces: BitBoard,
    their_pieces: BitBoard,
    rooks: BitBoard,
    advisors: BitBoard,
    cannons: BitBoard,
    pawns: BitBoard,
    knights: BitBoard,
    bishops: BitBoard,
    our_king: Square,
    their_king: Square,
    flipped: bool,
    id_board: [u8; Square::COUNT],
}

lazy_static! {
    static ref STARTPOS: Board = Board::from_fen(Board::STARTPOS_FEN).expect("INFALLIBLE");
}

impl Board {
    /// The FEN string for the standard starting position
    pub const STARTPOS_FEN: &'static str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

    /// Returns the standard starting position
    pub fn startpos() -> Board {
        *STARTPOS
    }

    /// Creates a board from the piece-placement and side-to-move fields of `fen`
    ///
    /// Later fields are validated but otherwise ignored; use
    /// [`Position::from_fen`](struct.Position.html#method.from_fen) to keep the move
    /// counters. Trailing fields may be omitted, in which case it is the first player's
    /// move.
    pub fn from_fen(fen: &str) -> Result<Board, ParseFenError> {
        Board::from_fen_with_counters(fen).map(|(board, _, _)| board)
    }

    /// Creates a board from `fen` along with its halfmove clock and fullmove number
    pub(crate) fn from_fen_with_counters(fen: &str) -> Result<(Board, u32, u32), ParseFenError> {
        let mut board = Board::default();
        let mut rule50_ply = 0;
        let mut moves = 1;

        let s = fen.as_bytes();
        let mut pos = 0;

        // skips spaces, and reports whether the end of the string was reached
        fn skip_whitespace(s: &[u8], pos: &mut usize) -> bool {
            while *pos < s.len() && s[*pos] == b' ' {
                *pos += 1;
            }
            *pos == s.len()
        }
        fn expect_space(s: &[u8], pos: &mut usize) -> Result<bool, ParseFenError> {
            if *pos < s.len() && s[*pos] != b' ' {
                return Err(ParseFenError::SpaceExpected);
            }
            Ok(skip_whitespace(s, pos))
        }

        if skip_whitespace(s, &mut pos) {
            return Err(ParseFenError::Empty);
        }

        // Parse the piece placement.
        let mut rank = Rank::R9;
        let mut file = 0;
        let mut our_kings = 0;
        let mut their_kings = 0;
        while pos < s.len() {
            let c = s[pos] as char;
            if c == ' ' {
                break;
            }
            pos += 1;
            if c == '/' {
                if rank == Rank::R0 {
                    return Err(ParseFenError::TooManyRanks);
                }
                rank = Rank::try_from(rank as usize - 1).expect("INFALLIBLE");
                file = 0;
                continue;
            }
            if let Some(d) = c.to_digit(10) {
                file += d as usize;
                if file > File::COUNT {
                    return Err(ParseFenError::TooManyFiles);
                }
                continue;
            }
            let piece: Piece = c.to_string().parse()?;
            if file >= File::COUNT {
                return Err(ParseFenError::PieceOutOfBoard);
            }
            let sq = Square::from_coord(File::try_from(file).expect("INFALLIBLE"), rank);
            let theirs = c.is_ascii_lowercase();
            match piece {
                Piece::Advisor if !PALACE.contains(sq) => {
                    return Err(ParseFenError::AdvisorNotInPalace);
                }
                Piece::King if !PALACE.contains(sq) => {
                    return Err(ParseFenError::KingNotInPalace);
                }
                Piece::Pawn if !PAWN_ZONE[theirs as usize].contains(sq) => {
                    return Err(ParseFenError::PawnInWrongPlace);
                }
                Piece::Bishop if !BISHOP_ZONE.contains(sq) => {
                    return Err(ParseFenError::BishopInWrongPlace);
                }
                _ => {}
            }
            if piece == Piece::King {
                if theirs {
                    their_kings += 1;
                } else {
                    our_kings += 1;
                }
            }
            board.put_piece(sq, piece, theirs);
            file += 1;
        }
        if our_kings != 1 || their_kings != 1 {
            return Err(ParseFenError::KingCount);
        }
        if skip_whitespace(s, &mut pos) {
            return Ok((board, rule50_ply, moves));
        }

        // Number the pieces for chase detection, each side from zero in square order.
        let mut our = 0;
        let mut their = 0;
        for sq in board.our_pieces | board.their_pieces {
            board.id_board[sq as usize] = if board.our_pieces.contains(sq) {
                our += 1;
                our - 1
            } else {
                their += 1;
                their - 1
            };
        }

        // Parse the side to move.
        let side: Color = (s[pos] as char).to_ascii_lowercase().to_string().parse()?;
        pos += 1;
        if side == Color::Black {
            board.mirror();
        }
        if expect_space(s, &mut pos)? {
            return Ok((board, rule50_ply, moves));
        }

        // Skip the castling and en-passant fields, meaningless here but kept for
        // compatibility with standard FEN.
        if s[pos] == b'-' {
            pos += 1;
        }
        if expect_space(s, &mut pos)? {
            return Ok((board, rule50_ply, moves));
        }
        if s[pos] == b'-' {
            pos += 1;
        }
        if expect_space(s, &mut pos)? {
            return Ok((board, rule50_ply, moves));
        }

        // Parse the halfmove clock and the fullmove number.
        fn parse_int(fen: &str, pos: &mut usize, err: ParseFenError) -> Result<u32, ParseFenError> {
            let end = fen[*pos..].find(' ').map_or(fen.len(), |i| *pos + i);
            let num = fen[*pos..end].parse().map_err(|_| err)?;
            *pos = end;
            Ok(num)
        }
        rule50_ply = parse_int(fen, &mut pos, ParseFenError::BadHalfMoveClock)?;
        if expect_space(s, &mut pos)? {
            return Ok((board, rule50_ply, moves));
        }
        moves = parse_int(fen, &mut pos, ParseFenError::BadMoveNumber)?;
        if !expect_space(s, &mut pos)? {
            return Err(ParseFenError::ExtraCharacters);
        }

        Ok((board, rule50_ply, moves))
    }

    fn put_piece(&mut self, sq: Square, piece: Piece, theirs: bool) {
        if theirs {
            self.their_pieces.insert(sq);
        } else {
            self.our_pieces.insert(sq);
        }
        match piece {
            Piece::Rook => self.rooks.insert(sq),
            Piece::Advisor => self.advisors.insert(sq),
            Piece::Cannon => self.cannons.insert(sq),
            Piece::Pawn => self.pawns.insert(sq),
            Piece::Knight => self.knights.insert(sq),
            Piece::Bishop => self.bishops.insert(sq),
            Piece::King => {
                if theirs {
                    self.their_king = sq;
                } else {
                    self.our_king = sq;
                }
            }
        }
    }

    /// The squares occupied by the side to move
    pub fn ours(self) -> BitBoard {
        self.our_pieces
    }

    /// The squares occupied by the opponent
    pub fn theirs(self) -> BitBoard {
        self.their_pieces
    }

    /// The squares occupied by rooks of either side
    pub fn rooks(self) -> BitBoard {
        self.rooks
    }

    /// The squares occupied by advisors of either side
    pub fn advisors(self) -> BitBoard {
        self.advisors
    }

    /// The squares occupied by cannons of either side
    pub fn cannons(self) -> BitBoard {
        self.cannons
    }

    /// The squares occupied by pawns of either side
    pub fn pawns(self) -> BitBoard {
        self.pawns
    }

    /// The squares occupied by knights of either side
    pub fn knights(self) -> BitBoard {
        self.knights
    }

    /// The squares occupied by bishops of either side
    pub fn bishops(self) -> BitBoard {
        self.bishops
    }

    /// The squares occupied by the two kings
    pub fn kings(self) -> BitBoard {
        BitBoard::from(self.our_king) | self.their_king.into()
    }

    /// The square of the king of the side to move
    pub fn our_king(self) -> Square {
        self.our_king
    }

    /// The square of the opponent's king
    pub fn their_king(self) -> Square {
        self.their_king
    }

    /// Returns `true` if the board is oriented for the second player
    pub fn flipped(self) -> bool {
        self.flipped
    }

    fn occupied(self) -> BitBoard {
        self.our_pieces | self.their_pieces
    }

    fn piece_bb(self, piece: Piece) -> BitBoard {
        match piece {
            Piece::Rook => self.rooks,
            Piece::Advisor => self.advisors,
            Piece::Cannon => self.cannons,
            Piece::Pawn => self.pawns,
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops,
            Piece::King => self.kings(),
        }
    }

    fn piece_at(self, sq: Square) -> Option<Piece> {
        if !self.occupied().contains(sq) {
            None
        } else if self.rooks.contains(sq) {
            Some(Piece::Rook)
        } else if self.advisors.contains(sq) {
            Some(Piece::Advisor)
        } else if self.cannons.contains(sq) {
            Some(Piece::Cannon)
        } else if self.pawns.contains(sq) {
            Some(Piece::Pawn)
        } else if self.knights.contains(sq) {
            Some(Piece::Knight)
        } else if self.bishops.contains(sq) {
            Some(Piece::Bishop)
        } else {
            Some(Piece::King)
        }
    }

    /// Reverses the board's perspective, making the opponent the side to move
    ///
    /// The piece identifiers are kept in absolute orientation and are not touched.
    pub fn mirror(&mut self) {
        self.our_pieces = self.our_pieces.mirror();
        self.their_pieces = self.their_pieces.mirror();
        std::mem::swap(&mut self.our_pieces, &mut self.their_pieces);
        self.rooks = self.rooks.mirror();
        self.advisors = self.advisors.mirror();
        self.cannons = self.cannons.mirror();
        self.pawns = self.pawns.mirror();
        self.knights = self.knights.mirror();
        self.bishops = self.bishops.mirror();
        self.our_king = self.our_king.flip_rank();
        self.their_king = self.their_king.flip_rank();
        std::mem::swap(&mut self.our_king, &mut self.their_king);
        self.flipped = !self.flipped;
    }

    /// Generates all moves that follow the movement rules, ignoring king safety
    pub fn pseudolegal_moves(&self) -> Vec<Move> {
        let occupied = self.occupied();
        let mut result = Vec::with_capacity(60);
        for source in self.our_pieces {
            let attacks = if self.rooks.contains(source) {
                bitboard::rook_attacks(source, occupied) - self.our_pieces
            } else if self.advisors.contains(source) {
                bitboard::advisor_attacks(source) - self.our_pieces
            } else if self.cannons.contains(source) {
                // quiet moves slide like a rook; captures need a hurdle
                (bitboard::rook_attacks(source, occupied) - occupied)
                    | (bitboard::cannon_attacks(source, occupied) & self.their_pieces)
            } else if self.pawns.contains(source) {
                bitboard::pawn_attacks(source) - self.our_pieces
            } else if self.knights.contains(source) {
                bitboard::knight_attacks(source, occupied) - self.our_pieces
            } else if self.bishops.contains(source) {
                bitboard::bishop_attacks(source, occupied) - self.our_pieces
            } else {
                bitboard::king_attacks(source) - self.our_pieces
            };
            for destination in attacks {
                result.push(Move::new(source, destination));
            }
        }
        result
    }

    /// Generates all legal moves
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut result = self.pseudolegal_moves();
        result.retain(|&m| self.is_legal(m));
        result
    }

    /// Applies a move for the side to move, returning `true` if it captured a piece
    ///
    /// The move must be pseudolegal. The board keeps its orientation; call
    /// [`mirror`](#method.mirror) afterwards to pass the turn.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        debug_assert!(self.our_pieces.contains(mv.from_sq()), "no piece on {}", mv.from_sq());
        let from = mv.from_sq();
        let to = mv.to_sq();

        self.our_pieces.remove(from);
        self.our_pieces.insert(to);

        let capture = self.their_pieces.contains(to);
        if capture {
            self.their_pieces.remove(to);
            self.rooks.remove(to);
            self.advisors.remove(to);
            self.cannons.remove(to);
            self.pawns.remove(to);
            self.knights.remove(to);
            self.bishops.remove(to);
        }

        if from == self.our_king {
            self.our_king = to;
            debug_assert!(self.is_valid(), "move {} broke the board", mv);
            return capture;
        }

        let move_piece = |bb: &mut BitBoard| {
            if bb.contains(from) {
                bb.remove(from);
                bb.insert(to);
            }
        };
        move_piece(&mut self.rooks);
        move_piece(&mut self.advisors);
        move_piece(&mut self.cannons);
        move_piece(&mut self.pawns);
        move_piece(&mut self.knights);
        move_piece(&mut self.bishops);

        // The identifier board stays in absolute orientation.
        let (from, to) = if self.flipped {
            (from.flip_rank(), to.flip_rank())
        } else {
            (from, to)
        };
        self.id_board[to as usize] = self.id_board[from as usize];
        self.id_board[from as usize] = 0;

        debug_assert!(self.is_valid(), "move {} broke the board", mv);
        capture
    }

    /// Checks that each occupied square belongs to exactly one piece set
    fn is_valid(&self) -> bool {
        let all = self.occupied();
        let bbs = [
            self.rooks,
            self.advisors,
            self.cannons,
            self.pawns,
            self.knights,
            self.bishops,
            self.kings(),
        ];

        let union = bbs.iter().fold(BitBoard::new(), |a, &b| a | b);
        if all | union != all {
            return false;
        }

        for i in 0..bbs.len() {
            for j in i + 1..bbs.len() {
                if bbs[i].intersects(bbs[j]) {
                    return false;
                }
            }
        }

        true
    }

    /// The pieces giving check to a king on `ksq`, given the occupancy `occupied`
    ///
    /// `our` selects whose king is examined; the checkers returned belong to the other
    /// side. Advisors, bishops and kings cannot give check and are not considered, except
    /// that the facing-kings rule is handled separately by [`is_legal`](#method.is_legal).
    fn checkers_to(&self, ksq: Square, occupied: BitBoard, our: bool) -> BitBoard {
        let mut checkers = bitboard::rook_attacks(ksq, occupied) & self.rooks;
        checkers |= bitboard::cannon_attacks(ksq, occupied) & self.cannons;
        checkers |= bitboard::pawn_attacks_to(ksq, our) & self.pawns;
        checkers |= bitboard::knight_attacks_to(ksq, occupied) & self.knights;
        checkers & if our { self.their_pieces } else { self.our_pieces }
    }

    /// Returns `true` if the king of the side to move is in check
    pub fn is_under_check(&self) -> bool {
        !self.checkers_to(self.our_king, self.occupied(), true).is_empty()
    }

    /// The opponent pieces that could capture on `sq`
    fn recaptures_to(&self, sq: Square) -> BitBoard {
        let occupied = self.occupied();
        let mut attackers = bitboard::rook_attacks(sq, occupied) & self.rooks;
        attackers |= bitboard::advisor_attacks(sq) & self.advisors;
        attackers |= bitboard::cannon_attacks(sq, occupied) & self.cannons;
        attackers |= bitboard::pawn_attacks_to(sq, true) & self.pawns;
        attackers |= bitboard::knight_attacks_to(sq, occupied) & self.knights;
        attackers |= bitboard::bishop_attacks(sq, occupied) & self.bishops;
        attackers |= bitboard::king_attacks(sq) & self.their_king.into();
        attackers & self.their_pieces
    }

    /// Returns `true` if the pseudolegal move `mv` leaves no king exposed
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_move(mv, true)
    }

    /// `our` selects which side is making the move
    fn is_legal_move(&self, mv: Move, our: bool) -> bool {
        let mut occupied = self.occupied();
        occupied.remove(mv.from_sq());
        occupied.insert(mv.to_sq());

        let (our_king, their_king) = if our {
            (self.our_king, self.their_king)
        } else {
            (self.their_king, self.our_king)
        };

        // The two kings may never face each other on an open file.
        let ksq = if our_king == mv.from_sq() { mv.to_sq() } else { our_king };
        if bitboard::rook_attacks(ksq, occupied).contains(their_king) {
            return false;
        }

        if ksq != our_king {
            return self.checkers_to(ksq, occupied, our).is_empty();
        }

        // A capture may remove the checker itself.
        let mut checkers = self.checkers_to(ksq, occupied, our);
        checkers.remove(mv.to_sq());
        checkers.is_empty()
    }

    /// The chase bit for the piece on `to`, addressed in absolute orientation
    fn make_chase(&self, to: Square) -> u16 {
        let to = if self.flipped { to.flip_rank() } else { to };
        1 << self.id_board[to as usize]
    }

    /// Accumulates the chases by pieces of `attacker_type` into `chase`
    fn add_chase(&self, attacker_type: Piece, chase: &mut u16) {
        let attacker = self.piece_bb(attacker_type);
        let occupied = self.occupied();
        for from in attacker & self.our_pieces {
            let mut attacks = match attacker_type {
                Piece::Rook => bitboard::rook_attacks(from, occupied),
                Piece::Advisor => bitboard::advisor_attacks(from),
                Piece::Cannon => bitboard::cannon_attacks(from, occupied),
                Piece::Knight => bitboard::knight_attacks(from, occupied),
                Piece::Bishop => bitboard::bishop_attacks(from, occupied),
                Piece::Pawn | Piece::King => BitBoard::new(),
            } & self.their_pieces;

            // Checks are not chases, and pawns still in their own half are fair game.
            attacks -= self.kings() | (self.pawns & HALF[1]);

            // Attacking a stronger piece chases it no matter how it is protected.
            let candidates = match attacker_type {
                Piece::Knight | Piece::Cannon => attacks & self.rooks,
                Piece::Advisor | Piece::Bishop => {
                    attacks & (self.rooks | self.knights | self.cannons)
                }
                _ => BitBoard::new(),
            };
            attacks -= candidates;
            for to in candidates {
                if self.is_legal(Move::new(from, to)) {
                    *chase |= self.make_chase(to);
                }
            }

            // Everything else counts only while it has no legal recapture.
            for to in attacks {
                let m = Move::new(from, to);
                if !self.is_legal(m) {
                    continue;
                }

                let mut after = *self;
                after.apply_move(m);
                let mut true_chase = true;
                for s in after.recaptures_to(to) {
                    if after.is_legal_move(Move::new(s, to), false) {
                        true_chase = false;
                        break;
                    }
                }
                if !true_chase {
                    continue;
                }

                // A mutual attack between equal pieces is no chase, unless the
                // attacked piece is pinned or its knight's return leap is blocked.
                if attacker.contains(to) {
                    let symmetric = attacker_type == Piece::Knight
                        && !bitboard::knight_attacks(to, occupied).contains(from);
                    if symmetric || !self.is_legal_move(Move::new(to, from), false) {
                        *chase |= self.make_chase(to);
                    }
                } else {
                    *chase |= self.make_chase(to);
                }
            }
        }
    }

    /// The pieces of the opponent that the side to move is chasing, as an identifier mask
    pub fn us_chased(&self) -> u16 {
        let mut chase = 0;

        // Kings and pawns may chase without restriction.
        self.add_chase(Piece::Rook, &mut chase);
        self.add_chase(Piece::Advisor, &mut chase);
        self.add_chase(Piece::Cannon, &mut chase);
        self.add_chase(Piece::Knight, &mut chase);
        self.add_chase(Piece::Bishop, &mut chase);

        chase
    }

    /// The pieces of the side to move that the opponent is chasing, as an identifier mask
    pub fn them_chased(&self) -> u16 {
        let mut board = *self;
        board.mirror();
        board.us_chased()
    }

    /// Returns `false` if neither side can possibly deliver mate
    ///
    /// Without pawns, rooks and knights, cannons need helper pieces to mate: a bare
    /// cannon cannot mate against advisors unless bishops can serve as a mount. The
    /// borderline cases test whether any move actually mates immediately.
    pub fn has_mating_material(&self) -> bool {
        if !self.pawns.is_empty() || !self.rooks.is_empty() || !self.knights.is_empty() {
            return true;
        }

        #[derive(PartialEq)]
        enum DrawLevel {
            None,
            Direct,
            Mate,
        }

        let level = (|| {
            if self.cannons.is_empty() {
                return DrawLevel::Direct;
            }

            if self.cannons.count_few() == 1 {
                let (cannon_side, other_side) = if (self.our_pieces & self.cannons).is_empty() {
                    (self.their_pieces, self.our_pieces)
                } else {
                    (self.our_pieces, self.their_pieces)
                };
                if (self.advisors & cannon_side).is_empty() {
                    match (self.advisors & other_side).count_few() {
                        0 => return DrawLevel::Direct,
                        1 => {
                            return if (self.bishops & cannon_side).is_empty() {
                                DrawLevel::Direct
                            } else {
                                DrawLevel::Mate
                            };
                        }
                        _ => {
                            if (self.bishops & cannon_side).is_empty() {
                                return DrawLevel::Mate;
                            }
                        }
                    }
                }
            }

            if (self.cannons & self.our_pieces).count_few() == 1
                && (self.cannons & self.their_pieces).count_few() == 1
                && self.advisors.is_empty()
            {
                return if self.bishops.is_empty() {
                    DrawLevel::Direct
                } else {
                    DrawLevel::Mate
                };
            }

            DrawLevel::None
        })();

        match level {
            DrawLevel::None => true,
            DrawLevel::Direct => false,
            DrawLevel::Mate => {
                for m in self.legal_moves() {
                    let mut after = *self;
                    after.apply_move(m);
                    after.mirror();
                    if after.legal_moves().is_empty() {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Parses move text in coordinate notation into a move for the side to move
    ///
    /// The text is given in absolute board coordinates; for the second player it is
    /// flipped into the board's orientation.
    pub fn parse_move(&self, move_str: &str) -> Result<Move, ParseMoveError> {
        let mv: Move = move_str.parse()?;
        let mv = if self.flipped { mv.flip_ranks() } else { mv };
        if !self.our_pieces.contains(mv.from_sq()) {
            return Err(ParseMoveError::NoPieceToMove);
        }
        Ok(mv)
    }

    /// The piece-placement and side-to-move fields of the board's FEN
    pub fn fen(&self) -> String {
        let mut board = *self;
        let black_to_move = board.flipped;
        if black_to_move {
            board.mirror();
        }

        let mut result = String::new();
        for r in (0..Rank::COUNT).rev() {
            let rank = Rank::try_from(r).expect("INFALLIBLE");
            let mut empty = 0;
            for f in 0..File::COUNT {
                let file = File::try_from(f).expect("INFALLIBLE");
                let sq = Square::from_coord(file, rank);
                if let Some(piece) = board.piece_at(sq) {
                    if empty > 0 {
                        result += &empty.to_string();
                        empty = 0;
                    }
                    let letter = piece.to_string();
                    if board.their_pieces.contains(sq) {
                        result += &letter.to_lowercase();
                    } else {
                        result += &letter;
                    }
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                result += &empty.to_string();
            }
            if r > 0 {
                result += "/";
            }
        }
        result += if black_to_move { " b" } else { " w" };
        result
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            our_pieces: BitBoard::new(),
            their_pieces: BitBoard::new(),
            rooks: BitBoard::new(),
            advisors: BitBoard::new(),
            cannons: BitBoard::new(),
            pawns: BitBoard::new(),
            knights: BitBoard::new(),
            bishops: BitBoard::new(),
            our_king: Square::A0,
            their_king: Square::A0,
            flipped: false,
            id_board: [0; Square::COUNT],
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fen().fmt(f)
    }
}
