//! Provides game state tracking and the repetition rules
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::ops;
use std::str::FromStr;
use log::debug;
use super::*;
use crate::error::ParseFenError;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The result of a game
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// The game is still in progress
    Undecided,
    /// The first player won
    WhiteWon,
    /// The game is drawn
    Draw,
    /// The second player won
    BlackWon,
}

impl ops::Neg for GameResult {
    type Output = GameResult;

    fn neg(self) -> GameResult {
        match self {
            GameResult::WhiteWon => GameResult::BlackWon,
            GameResult::BlackWon => GameResult::WhiteWon,
            other => other,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Undecided => "*",
            GameResult::WhiteWon => "1-0",
            GameResult::Draw => "1/2-1/2",
            GameResult::BlackWon => "0-1",
        }
        .fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A snapshot of the game at one ply
///
/// A `Position` is a [`Board`](struct.Board.html) plus the counters the game rules need:
/// the no-capture halfmove clock, the ply index, both sides' running check streaks, and
/// the number of times the position has already occurred. Positions are immutable; a new
/// one is derived from its parent by [`make_move`](#method.make_move).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    rule50_ply: u32,
    repetitions: u32,
    cycle_length: usize,
    // consecutive plies the respective side has spent in check
    us_check: u32,
    them_check: u32,
    ply_count: u32,
}

impl Position {
    /// Creates a position from a board and the counters that cannot be derived from it
    pub fn new(board: Board, rule50_ply: u32, game_ply: u32) -> Position {
        Position {
            board,
            rule50_ply,
            repetitions: 0,
            cycle_length: 0,
            us_check: 0,
            them_check: 0,
            ply_count: game_ply,
        }
    }

    /// Creates a position from a FEN string
    pub fn from_fen(fen: &str) -> Result<Position, ParseFenError> {
        let (board, rule50_ply, moves) = Board::from_fen_with_counters(fen)?;
        let game_ply = 2 * moves.saturating_sub(1) + board.flipped() as u32;
        Ok(Position::new(board, rule50_ply, game_ply))
    }

    /// Derives the position after `mv`, seen from the other side
    ///
    /// The halfmove clock advances on quiet moves and resets on captures. A side that has
    /// given more than ten consecutive checks stops advancing the clock, so that
    /// perpetual checks cannot run it to the no-progress draw.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut board = self.board;
        let mut rule50_ply = self.rule50_ply;
        let mut us_check = self.them_check;
        let mut them_check = self.us_check;

        let is_zeroing = board.apply_move(mv);
        board.mirror();
        let mut advance_clock = true;
        if board.is_under_check() {
            them_check += 1;
            advance_clock = them_check <= 10;
        }
        if advance_clock {
            if us_check > 10 && self.board.is_under_check() {
                us_check += 1;
            } else {
                rule50_ply += 1;
            }
        }
        if is_zeroing {
            rule50_ply = 0;
            us_check = 0;
            them_check = 0;
        }

        Position {
            board,
            rule50_ply,
            repetitions: 0,
            cycle_length: 0,
            us_check,
            them_check,
            ply_count: self.ply_count + 1,
        }
    }

    /// The board, oriented for the side to move
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of plies since the last capture
    pub fn rule50_ply(&self) -> u32 {
        self.rule50_ply
    }

    /// The number of plies since the start of the game
    pub fn game_ply(&self) -> u32 {
        self.ply_count
    }

    /// How many earlier identical positions the history holds since the last capture
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// The number of plies between this position and its most recent earlier occurrence
    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    /// Returns `true` if it is the second player's move
    pub fn is_black_to_move(&self) -> bool {
        self.board.flipped()
    }

    /// The position as a FEN string
    pub fn fen(&self) -> String {
        let fullmove = (self.ply_count + if self.is_black_to_move() { 1 } else { 2 }) / 2;
        format!("{} - - {} {}", self.board.fen(), self.rule50_ply, fullmove)
    }
}

impl FromStr for Position {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Position, ParseFenError> {
        Position::from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fen().fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The sequence of positions of a game, with the repetition bookkeeping
///
/// The history owns every position since the game's starting point and is the only way to
/// detect repetitions, since each appended position is compared against its predecessors
/// of the same parity. The repetition rules are asymmetric: a repetition forced by
/// perpetual check or perpetual chase loses, while mutual or harmless repetitions draw.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    positions: Vec<Position>,
}

impl PositionHistory {
    /// Creates a new, empty history
    pub fn new() -> PositionHistory {
        Default::default()
    }

    /// Clears the history and starts over from `board`
    pub fn reset(&mut self, board: Board, rule50_ply: u32, game_ply: u32) {
        self.positions.clear();
        self.positions.push(Position::new(board, rule50_ply, game_ply));
    }

    /// Clears the history and starts over from `pos`
    pub fn reset_to(&mut self, pos: Position) {
        self.positions.clear();
        self.positions.push(pos);
    }

    /// The number of positions in the history
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the history holds no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The latest position
    ///
    /// # Panics
    /// Panics if the history is empty.
    pub fn last(&self) -> &Position {
        self.positions.last().expect("position history is empty")
    }

    /// Returns `true` if it is the second player's move
    pub fn is_black_to_move(&self) -> bool {
        self.last().is_black_to_move()
    }

    /// Appends the position reached by `mv` and computes its repetition count
    pub fn append(&mut self, mv: Move) {
        let pos = self.last().make_move(mv);
        self.positions.push(pos);
        let (repetitions, cycle_length) = self.compute_last_move_repetitions();
        let last = self.positions.last_mut().expect("INFALLIBLE");
        last.repetitions = repetitions;
        last.cycle_length = cycle_length;
    }

    /// Removes the latest position
    pub fn pop(&mut self) {
        self.positions.pop();
    }

    /// Scans backward for an earlier occurrence of the latest position
    ///
    /// Only positions with the same side to move are compared, and the scan stops at the
    /// last zeroing move, since no repetition can straddle a capture.
    fn compute_last_move_repetitions(&self) -> (u32, usize) {
        let last = self.last();
        if last.rule50_ply < 4 {
            return (0, 0);
        }

        let mut idx = self.positions.len() as isize - 5;
        while idx >= 0 {
            let pos = &self.positions[idx as usize];
            if pos.board == last.board {
                return (1 + pos.repetitions, self.positions.len() - 1 - idx as usize);
            }
            if pos.rule50_ply < 2 {
                return (0, 0);
            }
            idx -= 2;
        }
        (0, 0)
    }

    /// Returns `true` if any position since the last capture has repeated
    pub fn did_repeat_since_last_zeroing_move(&self) -> bool {
        for pos in self.positions.iter().rev() {
            if pos.repetitions > 0 {
                return true;
            }
            if pos.rule50_ply == 0 {
                return false;
            }
        }
        false
    }

    /// Judges a repetition under the perpetual check and chase rules
    ///
    /// Walks the cycle back to the earlier occurrence of the latest position, keeping
    /// track of whether either side checked on every one of its plies, and which enemy
    /// pieces either side chased on every one of its plies. A side that forced the
    /// repetition by perpetual check loses; failing that, a side that forced it by
    /// perpetually chasing the same piece loses; mutual offenses and innocent
    /// repetitions draw. The result is from the perspective of the side to move in the
    /// latest position being the second player.
    ///
    /// # Panics
    /// Panics if the latest position is not actually a repetition, which indicates a bug
    /// in the caller.
    pub fn rule_judge(&self) -> GameResult {
        let positions = &self.positions;
        let last = self.last();
        if last.rule50_ply < 4 {
            return GameResult::Undecided;
        }

        let n = positions.len();
        let mut check_them = last.board.is_under_check();
        let mut check_us = positions[n - 2].board.is_under_check();
        let mut chase_them = last.board.them_chased() & !positions[n - 2].board.us_chased();
        let mut chase_us =
            positions[n - 2].board.them_chased() & !positions[n - 3].board.us_chased();

        let mut idx = n as isize - 3;
        while idx >= 0 {
            let i = idx as usize;
            let pos = &positions[i];
            if pos.board.is_under_check() {
                chase_them = 0;
                chase_us = 0;
            } else {
                check_them = false;
            }

            if pos.board == last.board && pos.repetitions == 0 {
                let result = if check_them || check_us {
                    if !check_us {
                        GameResult::BlackWon
                    } else if !check_them {
                        GameResult::WhiteWon
                    } else {
                        GameResult::Draw
                    }
                } else if chase_them != 0 || chase_us != 0 {
                    if chase_us == 0 {
                        GameResult::BlackWon
                    } else if chase_them == 0 {
                        GameResult::WhiteWon
                    } else {
                        GameResult::Draw
                    }
                } else {
                    GameResult::Draw
                };
                debug!(
                    "repetition over {} plies judged {} (checks {}/{}, chases {:#x}/{:#x})",
                    n - 1 - i,
                    result,
                    check_them,
                    check_us,
                    chase_them,
                    chase_us,
                );
                return result;
            }

            if i >= 1 {
                if positions[i - 1].board.is_under_check() {
                    chase_them = 0;
                    chase_us = 0;
                } else {
                    check_us = false;
                }
                chase_them &= pos.board.them_chased() & !positions[i - 1].board.us_chased();
                if i >= 2 {
                    chase_us &=
                        positions[i - 1].board.them_chased() & !positions[i - 2].board.us_chased();
                }
            }
            idx -= 2;
        }

        panic!("judging a non-repetition move sequence");
    }

    /// Determines whether the game has ended at the latest position, and how
    ///
    /// A side with no legal moves loses, whether mated or stalemated. A second
    /// repetition invokes the [`rule_judge`](#method.rule_judge); dead material or 120
    /// plies without a capture draw.
    pub fn compute_game_result(&self) -> GameResult {
        let board = self.last().board();
        if board.legal_moves().is_empty() {
            return if self.is_black_to_move() {
                GameResult::WhiteWon
            } else {
                GameResult::BlackWon
            };
        }

        if self.last().repetitions() >= 2 {
            let result = self.rule_judge();
            return if self.is_black_to_move() { result } else { -result };
        }
        if !board.has_mating_material() {
            return GameResult::Draw;
        }
        if self.last().rule50_ply() >= 120 {
            return GameResult::Draw;
        }

        GameResult::Undecided
    }
}

impl ops::Index<usize> for PositionHistory {
    type Output = Position;

    fn index(&self, idx: usize) -> &Position {
        &self.positions[idx]
    }
}
