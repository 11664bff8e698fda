use crate::prelude::*;

/// Finds the best move for `player`, looking `max_depth` plies ahead including the move itself.
///
/// Returns `None` if the search is cancelled, or if there is nowhere to play.
pub fn find_best_move(board: &mut Board, player: Player, max_depth: u32, token: &CancelToken) -> Option<Move>
{
    let mut search = Search::new(player, token, defaults::RADIUS);
    match search.best_move(board, max_depth)
    {
        | Ok(best) => best.map(|(mv, _)| mv),
        | Err(err) =>
        {
            log::debug!("abandoned move selection: {}", err);
            None
        }
    }
}

impl Search<'_>
{
    /// Tries every candidate as the next stone for this search's player, and keeps the one that searches best.
    ///
    /// Ties go to the earliest candidate. Fails only with the cancellation signal, in which case no partial
    /// result is reported.
    pub fn best_move(&mut self, board: &mut Board, max_depth: u32) -> Result<Option<(Move, Score)>>
    {
        let moves = candidates(board, self.radius);
        let Some(&first) = moves.first()
        else
        {
            return Ok(None);
        };

        let mut best: Option<(Move, Score)> = None;

        for mv in moves
        {
            self.ensure_running()?;

            // The ply after our stone belongs to the opponent.
            board.place(mv, self.perspective);
            let result = self.alpha_beta(board, max_depth.saturating_sub(1), false, WORST, BEST);
            board.clear(mv);
            let score = result?;

            log::trace!("candidate {} scored {}", mv, score);

            if score > best.map_or(WORST, |(_, best_score)| best_score)
            {
                best = Some((mv, score));
            }
        }

        Ok(Some(best.unwrap_or((first, WORST))))
    }
}
