mod common;
use common::*;

#[cfg(test)]
mod select
{
    use std::time::Duration;

    use super::*;
    use fivemind::prelude::*;

    /// Black has four in a row at (7,3) to (7,6), open at both ends.
    fn open_four() -> Board
    {
        let mut board = Board::default();
        for col in 3..7
        {
            board.place(Move::new(7, col), Player::Black);
        }
        board
    }

    #[test]
    fn empty_board_starts_in_the_centre()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = Board::default();

        assert_eq!(find_best_move(&mut board, Player::Black, 1, &token), Some(Move::new(7, 7)));
        assert!(board.is_empty());
    }

    #[test]
    fn completes_an_open_four()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let winning = [Move::new(7, 2), Move::new(7, 7)];

        for depth in 1..=2
        {
            let mut board = open_four();
            let mv = find_best_move(&mut board, Player::Black, depth, &token);

            assert!(mv.is_some_and(|mv| winning.contains(&mv)), "depth {} chose {:?}", depth, mv);
            assert_eq!(board, open_four());
        }
    }

    #[test]
    fn blocks_a_four_it_cannot_outrun()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = templates::board_from_rows(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "..oxxxx........",
            "......o........",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
        ]);

        // Black threatens (7,7); White has nothing faster.
        let mv = find_best_move(&mut board, Player::White, 2, &token);
        assert_eq!(mv, Some(Move::new(7, 7)));
    }

    #[test]
    fn cancelled_search_reports_no_move()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        token.cancel();

        let mut board = open_four();
        assert_eq!(find_best_move(&mut board, Player::Black, 3, &token), None);
        assert_eq!(board, open_four());
    }

    #[test]
    fn full_board_has_no_move()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = templates::filled_board(5);

        assert_eq!(find_best_move(&mut board, Player::White, 2, &token), None);
    }

    #[test]
    fn depth_zero_still_moves()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = open_four();

        let mv = find_best_move(&mut board, Player::Black, 0, &token);
        assert!(mv.is_some_and(|mv| board.is_vacant(mv)));
    }

    #[test]
    fn evaluator_searches_to_a_fixed_depth()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut evaluator = evaluators::AlphaBetaEvaluator::new(Options::default());
        let mut board = open_four();

        let mv = evaluator.best_move(&mut board, Player::Black, SearchArgs::Depth(2), &token);
        assert!(mv.is_some_and(|mv| mv == Move::new(7, 2) || mv == Move::new(7, 7)));
        assert_eq!(board, open_four());
    }

    #[test]
    fn evaluator_deepens_under_a_time_limit()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let options = Options {
            max_depth: 2,
            ..Default::default()
        };
        let mut evaluator = evaluators::AlphaBetaEvaluator::new(options);
        let mut board = open_four();

        let mv = evaluator.best_move(&mut board, Player::Black, SearchArgs::Time(Duration::from_secs(60)), &token);
        assert!(mv.is_some_and(|mv| mv == Move::new(7, 2) || mv == Move::new(7, 7)));
    }

    #[test]
    fn evaluator_gives_up_when_cancelled()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        token.cancel();
        let mut evaluator = evaluators::AlphaBetaEvaluator::new(Options::default());
        let mut board = open_four();

        let mv = evaluator.best_move(&mut board, Player::Black, SearchArgs::Time(Duration::from_secs(1)), &token);
        assert_eq!(mv, None);
        assert_eq!(board, open_four());
    }
}
