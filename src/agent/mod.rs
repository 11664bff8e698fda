use crate::prelude::*;

pub mod candidates;
pub mod data;
pub mod evaluate;
pub mod evaluators;
pub mod patterns;
pub mod scalars;
pub mod search;
pub mod searchargs;
pub mod select;
pub mod token;

pub use candidates::candidates;
pub use data::SearchStats;
pub use evaluate::{evaluate_board, stone_score};
pub use patterns::{line_sample, score_line, Code, LineSample};
pub use scalars::*;
pub use search::{search, Search};
pub use searchargs::SearchArgs;
pub use select::find_best_move;
pub use token::CancelToken;

/// A policy by which we can pick the best continuation for a player.
pub trait Evaluator: Send
{
    /// Returns the best move for `player` on the given board, or `None` if the search was cancelled before it
    /// produced one or there is nowhere to play.
    ///
    /// The board is a private copy for the evaluator's trial moves; it is restored before this returns.
    fn best_move(&mut self, board: &mut Board, player: Player, args: SearchArgs, token: &CancelToken) -> Option<Move>;

    /// Returns a new evaluator. Evaluators are instanced so that they can support internal state.
    fn new(options: Options) -> Self
    where
        Self: Sized;
}
