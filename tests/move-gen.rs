//! Tests the move generator
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod move_gen {
    use xiangqi::Board;
    use xiangqi::variations;

    mod startpos {
        use super::count;

        const FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 44); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 1920); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 79666); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 3290240); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 133312995); }
    }

    mod position_002 {
        use super::count;

        const FEN: &str =
            "r1ba1a3/4kn3/2n1b4/pNp1p1p1p/4c4/6P2/P1P2R2P/1CcC5/9/2BAKAB2 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 38); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 1128); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 43929); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 1339047); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 53112976); }
    }

    mod position_003 {
        use super::count;

        const FEN: &str =
            "1cbak4/9/n2a5/2p1p3p/5cp2/2n2N3/6PCP/3AB4/2C6/3A1K1N1 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 7); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 281); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 8620); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 326201); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 10369923); }
    }

    mod position_004 {
        use super::count;

        const FEN: &str = "5a3/3k5/3aR4/9/5r3/5n3/9/3A1A3/5K3/2BC2B2 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 25); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 424); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 9850); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 202884); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 4739553); }
    }

    mod position_005 {
        use super::count;

        const FEN: &str = "CRN1k1b2/3ca4/4ba3/9/2nr5/9/9/4B4/4A4/4KA3 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 28); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 516); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 14808); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 395483); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 11842230); }
    }

    mod position_006 {
        use super::count;

        const FEN: &str = "R1N1k1b2/9/3aba3/9/2nr5/2B6/9/4B4/4A4/4KA3 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 21); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 364); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 7626); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 162837); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 3500505); }
    }

    mod position_007 {
        use super::count;

        const FEN: &str = "C1nNk4/9/9/9/9/9/n1pp5/B3C4/9/3A1K3 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 28); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 222); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 6241); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 64971); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 1914306); }
    }

    mod position_008 {
        use super::count;

        const FEN: &str = "4ka3/4a4/9/9/4N4/p8/9/4C3c/7n1/2BK5 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 23); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 345); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 8124); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 149272); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 3513104); }
    }

    mod position_009 {
        use super::count;

        const FEN: &str = "2b1ka3/9/b3N4/4n4/9/9/9/4C4/2p6/2BK5 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 21); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 195); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 3883); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 48060); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 933096); }
    }

    mod position_010 {
        use super::count;

        const FEN: &str =
            "1C2ka3/9/C1Nab1n2/p3p3p/6p2/9/P3P3P/3AB4/3p2c2/c1BAK4 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 30); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 830); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 22787); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 649866); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 17920736); }
    }

    mod position_011 {
        use super::count;

        const FEN: &str = "CnN1k1b2/c3a4/4ba3/9/2nr5/9/9/4C4/4A4/4KA3 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 19); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 583); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 11714); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 376467); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 8148177); }
    }

    #[test]
    fn mirrored_startpos_counts_match() {
        let fen = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR b - - 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(variations::count(&board, 1), 44);
        assert_eq!(variations::count(&board, 2), 1920);
    }

    #[test]
    fn partial_fens_generate_moves() {
        for fen in &[
            "rnbakabnr//1c5c1/p1p1p1p1p///P1P1P1P1P/1C2K2C1",
            "    rnbakabnr//1c5c1/p1p1p1p1p///P1P1P1P1P/1C2K2C1    w   ",
        ] {
            let board = Board::from_fen(fen).unwrap();
            assert_eq!(board.pseudolegal_moves().len(), 28);
        }
    }

    fn count(fen: &str, depth: usize) -> usize {
        println!("\n{}", fen);
        let board = Board::from_fen(fen).unwrap();

        let count = variations::print(&board, depth);
        println!("Depth {} total:\t{:12}", depth, count);

        count
    }
}
