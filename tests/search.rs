mod common;
use common::*;

#[cfg(test)]
mod search
{
    use std::{thread, time::Duration};

    use super::*;
    use fivemind::prelude::*;

    #[test]
    fn pruning_matches_plain_minimax()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();

        for seed in 0..6
        {
            for (size, stones, depth) in [(7, 3, 3), (9, 5, 2), (15, 8, 2)]
            {
                let mut board = templates::random_board(size, stones, seed);
                let before = board.clone();

                for maximizing in [true, false]
                {
                    let expected = templates::minimax(&mut board, depth, maximizing, Player::Black);
                    let actual = search(&mut board, depth, maximizing, WORST, BEST, Player::Black, &token);

                    assert_eq!(actual, Ok(expected), "seed {} depth {} maximizing {}:\n{}", seed, depth, maximizing, board);
                    assert_eq!(board, before);
                }
            }
        }
    }

    #[test]
    fn depth_zero_is_the_static_evaluation()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = templates::random_board(15, 10, 3);

        for perspective in Player::all()
        {
            let expected = evaluate_board(&board, perspective);
            assert_eq!(search(&mut board, 0, true, WORST, BEST, perspective, &token), Ok(expected));
            assert_eq!(search(&mut board, 0, false, WORST, BEST, perspective, &token), Ok(expected));
        }
    }

    #[test]
    fn finished_games_are_not_searched()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = Board::default();
        for col in 3..8
        {
            board.place(Move::new(7, col), Player::White);
        }
        board.place(Move::new(8, 4), Player::Black);

        let mut search = Search::new(Player::White, &token, defaults::RADIUS);
        let score = search.alpha_beta(&mut board, 3, false, WORST, BEST);

        assert_eq!(score, Ok(evaluate_board(&board, Player::White)));
        assert_eq!(search.stats, SearchStats { stems: 0, leaves: 1, cutoffs: 0 });

        let mut full = templates::filled_board(5);
        let expected = evaluate_board(&full, Player::Black);
        assert_eq!(search_full(&mut full, &token), Ok(expected));
    }

    fn search_full(board: &mut Board, token: &CancelToken) -> Result<Score>
    {
        search(board, 2, true, WORST, BEST, Player::Black, token)
    }

    #[test]
    fn cancelled_token_stops_before_any_move()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        token.cancel();

        let mut board = templates::random_board(15, 9, 11);
        let before = board.clone();

        let mut search = Search::new(Player::Black, &token, defaults::RADIUS);
        let result = search.alpha_beta(&mut board, 3, true, WORST, BEST);

        assert_eq!(result.map_err(|err| err.kind), Err(Kind::Cancelled));
        assert_eq!(search.stats, SearchStats::default());
        assert_eq!(board, before);
    }

    #[test]
    fn cancellation_mid_search_restores_the_board()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = templates::random_board(15, 12, 5);
        let before = board.clone();

        let result = thread::scope(|s| {
            let canceller = token.clone();
            s.spawn(move || {
                thread::sleep(Duration::from_millis(20));
                canceller.cancel();
            });

            search(&mut board, 5, true, WORST, BEST, Player::White, &token)
        });

        assert!(result.is_err_and(|err| err.is_cancelled()), "the search was not cut off by its token");
        assert_eq!(board, before);
    }

    #[test]
    fn pruning_cuts_siblings()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = templates::random_board(15, 8, 2);

        let mut search = Search::new(Player::Black, &token, defaults::RADIUS);
        let score = search.alpha_beta(&mut board, 3, true, WORST, BEST);

        assert!(score.is_ok());
        assert!(search.stats.cutoffs > 0);
        assert!(search.stats.stems > 0);
        assert!(search.stats.leaves > search.stats.stems);
    }

    #[test]
    fn zero_radius_still_finds_neighbours()
    {
        let _setup = setup::setup();
        let token = CancelToken::new();
        let mut board = Board::default();
        board.place(Move::new(7, 7), Player::Black);

        let mut search = Search::new(Player::White, &token, 0);
        let score = search.alpha_beta(&mut board, 2, true, WORST, BEST).unwrap();
        assert!(score > WORST);

        let evaluator_options = Options { radius: 0, ..Options::default() };
        let mut evaluator = evaluators::AlphaBetaEvaluator::new(evaluator_options);
        let mv = evaluator.best_move(&mut board, Player::White, SearchArgs::Depth(2), &token);
        assert!(mv.is_some_and(|mv| mv.distance(&Move::new(7, 7)) == 1), "{:?}", mv);
    }
}
