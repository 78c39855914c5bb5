//! Tests FEN handling and the repetition adjudication rules
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod rules {
    use xiangqi::{Board, GameResult, Position, PositionHistory};

    /// Builds a history from a FEN and a sequence of moves in coordinate notation
    fn make_history(fen: &str, moves: &[&str]) -> PositionHistory {
        let board = Board::from_fen(fen).unwrap();
        let mut history = PositionHistory::new();
        history.reset(board, 2, 30);
        for mv in moves {
            let mv = history.last().board().parse_move(mv).unwrap();
            history.append(mv);
        }
        history
    }

    #[test]
    fn fens_round_trip() {
        let fens = [
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1",
            "r1ba1a3/4kn3/2n1b4/pNp1p1p1p/4c4/6P2/P1P2R2P/1CcC5/9/2BAKAB2 w - - 1 1",
            "1cbak4/9/n2a5/2p1p3p/5cp2/2n2N3/6PCP/3AB4/2C6/3A1K1N1 w - - 0 1",
            "5a3/3k5/3aR4/9/5r3/5n3/9/3A1A3/5K3/2BC2B2 w - - 2 30",
            "CRN1k1b2/3ca4/4ba3/9/2nr5/9/9/4B4/4A4/4KA3 w - - 1 8",
            "R1N1k1b2/9/3aba3/9/2nr5/2B6/9/4B4/4A4/4KA3 w - - 0 10",
            "C1nNk4/9/9/9/9/9/n1pp5/B3C4/9/3A1K3 w - - 0 1",
            "4ka3/4a4/9/9/4N4/p8/9/4C3c/7n1/2BK5 w - - 0 1",
        ];
        for fen in &fens {
            let pos = Position::from_fen(fen).unwrap();
            assert_eq!(&pos.fen(), fen);
        }
    }

    #[test]
    fn compute_last_move_repetitions_1() {
        let history = make_history(
            "3k5/9/9/6c2/9/9/9/6R2/9/5K3 b",
            &["g6h6", "g2h2", "h6g6", "h2g2"],
        );
        assert_eq!(history.last().repetitions(), 1);
    }

    #[test]
    fn compute_last_move_repetitions_2() {
        let history = make_history(
            "3k5/9/9/6c2/9/9/9/6R2/9/5K3 b",
            &["g6h6", "g2h2", "h6g6", "h2g2", "g6h6", "g2h2", "h6g6", "h2g2"],
        );
        assert_eq!(history.last().repetitions(), 2);
    }

    #[test]
    fn did_repeat_since_last_zeroing_move_current() {
        let history = make_history(
            "3k5/9/9/6rC1/9/9/9/6R2/9/5K3 b - - 2 30",
            &["g6h6", "g2h2", "h6g6", "h2g2", "g6h6"],
        );
        assert!(history.did_repeat_since_last_zeroing_move());
    }

    #[test]
    fn did_repeat_since_last_zeroing_move_before() {
        let history = make_history(
            "3k5/9/9/6rC1/9/9/9/5R3/9/5K3 b - - 2 30",
            &["g6h6", "f2h2", "h6g6", "h2g2", "g6h6", "g2h2"],
        );
        assert!(history.did_repeat_since_last_zeroing_move());
    }

    #[test]
    fn did_repeat_since_last_zeroing_move_older() {
        let history = make_history(
            "3k5/9/9/6rC1/9/9/9/5R3/9/5K3 b - - 2 30",
            &["g6b6", "f2b2", "b6h6", "b2h2", "h6g6", "h2g2", "g6h6", "g2h2"],
        );
        assert!(history.did_repeat_since_last_zeroing_move());
    }

    #[test]
    fn did_repeat_since_last_zeroing_move_before_zero() {
        let history = make_history(
            "3k5/9/9/6rC1/9/9/9/6R2/9/5K3 b - - 2 30",
            &["g6f6", "g2f2", "f6g6", "f2g2", "g6h6", "g2h2"],
        );
        assert!(!history.did_repeat_since_last_zeroing_move());
    }

    #[test]
    fn did_repeat_since_last_zeroing_move_never_repeated() {
        let history = make_history("3k5/9/9/6rC1/9/9/9/6R2/9/5K3 b - - 2 30", &["g6c6", "g2f2"]);
        assert!(!history.did_repeat_since_last_zeroing_move());
    }

    #[test]
    fn rule_judge_white_chase() {
        let history = make_history(
            "3k5/9/9/6c2/9/9/9/6R2/9/5K3 b - - 2 30",
            &["g6h6", "g2h2", "h6g6", "h2g2"],
        );
        assert_eq!(history.rule_judge(), GameResult::BlackWon);
    }

    #[test]
    fn rule_judge_black_chase() {
        let history = make_history(
            "3k5/9/7r1/9/9/9/9/6C2/9/5K3 b - - 2 30",
            &["h7g7", "g2h2", "g7h7", "h2g2"],
        );
        assert_eq!(history.rule_judge(), GameResult::WhiteWon);

        let history = make_history(
            "1rbakabnr/9/2n6/p1p3p1p/c8/4C4/P1P1P1PcP/1C2B1N2/3N5/R2AKABR1 w",
            &["a0c0", "a5c5", "c0a0", "c5a5"],
        );
        assert_eq!(history.rule_judge(), GameResult::BlackWon);
    }

    #[test]
    fn rule_judge_white_check() {
        let history = make_history(
            "3k5/9/9/9/9/9/9/3R5/9/5K3 b - - 2 30",
            &["d9e9", "d2e2", "e9d9", "e2d2"],
        );
        assert_eq!(history.rule_judge(), GameResult::BlackWon);
    }

    #[test]
    fn rule_judge_black_check() {
        let history = make_history(
            "3k5/9/4r4/9/9/9/9/9/9/5K3 b - - 2 30",
            &["e7f7", "f0e0", "f7e7", "e0f0"],
        );
        assert_eq!(history.rule_judge(), GameResult::WhiteWon);
    }

    #[test]
    fn rule_judge_draw() {
        let history = make_history(
            "3k5/9/6r2/9/9/9/9/9/6R2/5K3 b - - 2 30",
            &["g7h7", "g1h1", "h7g7", "h1g1"],
        );
        assert_eq!(history.rule_judge(), GameResult::Draw);

        let history = make_history(
            "4c4/3k5/4b3b/9/9/2B4N1/4p4/3A5/2p1A4/5K3 w - - 2 30",
            &["h4g2", "e3f3", "g2h4", "f3e3"],
        );
        assert_eq!(history.rule_judge(), GameResult::Draw);

        let history = make_history(
            "3k5/9/9/9/9/9/9/9/1r2ARn2/4K4 b",
            &["b1b0", "e1d0", "b0b1", "d0e1"],
        );
        assert_eq!(history.rule_judge(), GameResult::Draw);
    }

    #[test]
    fn perpetual_check_loses_the_game() {
        let history = make_history(
            "3k5/9/9/9/9/9/9/3R5/9/5K3 b - - 2 30",
            &["d9e9", "d2e2", "e9d9", "e2d2", "d9e9", "d2e2", "e9d9", "e2d2"],
        );
        assert_eq!(history.last().repetitions(), 2);
        // the white rook forced the repetition by checking on every move
        assert_eq!(history.compute_game_result(), GameResult::BlackWon);
    }

    #[test]
    fn mating_material() {
        let material = |fen: &str| Board::from_fen(fen).unwrap().has_mating_material();
        assert!(material(Board::STARTPOS_FEN));
        assert!(!material("3k5/9/9/9/9/9/9/9/9/5K3 w - - 0 1"));
        assert!(!material("3k5/4a4/9/9/9/9/9/9/4A4/3A1K3 w - - 0 1"));
        assert!(!material("3k5/4a4/9/9/9/9/9/5A3/4A4/2B2K3 w - - 0 1"));
        assert!(material("3k5/4a4/9/9/9/9/9/5A3/R3A4/2B2K3 w - - 0 1"));
        assert!(material("3k5/4a4/8c/9/9/9/9/5A3/4A4/2B2K3 w - - 0 1"));
        assert!(material("3k5/4a4/9/9/9/9/9/N4A3/4A2N1/2B2K3 w - - 0 1"));
    }

    #[test]
    fn invalid_fens_are_rejected() {
        for fen in &[
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P2PP1P1P/1C5C1/9/RNBAKABNR w",
            "rrnbakabnr/9/1c5c1/p3p1p1p/3p5/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w",
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/6A2/RNBAK1BNR w",
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/6B2/RNBAKA1NR w",
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/6K2/RNBA1ABNR w",
        ] {
            assert!(Board::from_fen(fen).is_err(), "invalid fen accepted: {}", fen);
        }
    }
}
