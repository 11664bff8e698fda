use std::cmp::Reverse;

use crate::prelude::*;

/// Scores a position by depth-limited minimax with alpha-beta pruning.
///
/// `perspective` is the side whose evaluation is maximized; `maximizing` says whether that side places the next
/// stone. Fails with `Kind::Cancelled` as soon as `token` is seen to be cancelled. Whether it succeeds or not, the
/// board holds exactly the same stones afterwards as before.
pub fn search(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    alpha: Score,
    beta: Score,
    perspective: Player,
    token: &CancelToken,
) -> Result<Score>
{
    Search::new(perspective, token, defaults::RADIUS).alpha_beta(board, depth, maximizing, alpha, beta)
}

#[derive(Debug)]
/// The state of one search: who it is for, how wide it looks, when to stop, and how much it has done.
pub struct Search<'a>
{
    pub(super) perspective: Player,
    pub(super) radius:      usize,
    pub stats:              SearchStats,
    token:                  &'a CancelToken,
}

impl<'a> Search<'a>
{
    /// Creates a search on behalf of `perspective`, considering moves within `radius` of the stones.
    ///
    /// A radius below 1 would leave no candidates beside the stones, so it is raised to 1.
    pub fn new(perspective: Player, token: &'a CancelToken, radius: usize) -> Self
    {
        Search {
            perspective,
            radius: radius.max(1),
            stats: SearchStats::default(),
            token,
        }
    }

    /// Performs alpha-beta search.
    pub fn alpha_beta(&mut self, board: &mut Board, depth: u32, maximizing: bool, alpha: Score, beta: Score) -> Result<Score>
    {
        self.ensure_running()?;

        if depth == 0 || board.is_terminal()
        {
            self.stats.leaves += 1;
            return Ok(evaluate_board(board, self.perspective));
        }

        self.stats.stems += 1;

        let (mut alpha, mut beta) = (alpha, beta);
        let current = if maximizing { self.perspective } else { self.perspective.flip() };
        let mut best = if maximizing { WORST } else { BEST };

        for mv in self.ordered_moves(board, current, maximizing)
        {
            self.ensure_running()?;

            board.place(mv, current);
            let result = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta);
            board.clear(mv);
            let score = result?;

            if maximizing
            {
                best = best.max(score);
                alpha = alpha.max(best);
                if best >= beta
                {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            else
            {
                best = best.min(score);
                beta = beta.min(best);
                if best <= alpha
                {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        // With no candidates this is still the sentinel, which only happens on a full board.
        Ok(best)
    }

    /// Fails with the cancellation signal once the token is set.
    pub(super) fn ensure_running(&self) -> Result<()>
    {
        if self.token.is_cancelled()
        {
            Err(Error::cancelled())
        }
        else
        {
            Ok(())
        }
    }

    /// Orders the candidates by the static evaluation after playing each, best for `current` first.
    fn ordered_moves(&self, board: &mut Board, current: Player, maximizing: bool) -> Vec<Move>
    {
        let mut scored = candidates(board, self.radius)
            .into_iter()
            .map(|mv| {
                board.place(mv, current);
                let score = evaluate_board(board, self.perspective);
                board.clear(mv);
                (mv, score)
            })
            .collect::<Vec<(Move, Score)>>();

        // Stable, so equal scores keep the generator's row-major order.
        if maximizing
        {
            scored.sort_by_key(|(_, score)| Reverse(*score));
        }
        else
        {
            scored.sort_by_key(|(_, score)| *score);
        }

        scored.into_iter().map(|(mv, _)| mv).collect()
    }
}
