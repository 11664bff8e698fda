use std::time::Instant;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// An evaluator based on alpha-beta search over pattern-scored positions.
///
/// Depth-limited requests run one search. Timed requests deepen one ply at a time and keep the deepest
/// completed answer; the caller enforces the deadline by cancelling the token.
pub struct AlphaBetaEvaluator
{
    options: Options,
}

impl Evaluator for AlphaBetaEvaluator
{
    fn best_move(&mut self, board: &mut Board, player: Player, args: SearchArgs, token: &CancelToken) -> Option<Move>
    {
        let start_time = Instant::now();
        let mut stats = SearchStats::default();
        let mut best = None;
        let mut reached = 0;

        for depth in args.depths(self.options.max_depth)
        {
            let mut search = Search::new(player, token, self.options.radius);
            let outcome = search.best_move(board, depth);
            stats += search.stats;

            match outcome
            {
                | Ok(Some(found)) =>
                {
                    best = Some(found);
                    reached = depth;
                }
                | Ok(None) => break,
                | Err(err) =>
                {
                    log::debug!("abandoned depth {}: {}", depth, err);
                    break;
                }
            }
        }

        let time_elapsed = start_time.elapsed().as_secs_f64().max(f64::EPSILON);
        match best
        {
            | Some((mv, score)) => log::debug!("found {: ^7}: scored {: >10}", mv.to_string(), score),
            | None => log::debug!("found no move"),
        }
        log::debug!("took {: >3.1}s and reached depth {}", time_elapsed, reached);
        log::debug!("visited {:09}  stems ({: >8} N/s)", stats.stems, (stats.stems as f64 / time_elapsed).floor() as u64);
        log::debug!("visited {:09} leaves ({: >8} N/s)", stats.leaves, (stats.leaves as f64 / time_elapsed).floor() as u64);
        log::debug!("pruned  {:09} sibling lists", stats.cutoffs);

        best.map(|(mv, _)| mv)
    }

    fn new(options: Options) -> Self
    {
        AlphaBetaEvaluator { options }
    }
}
