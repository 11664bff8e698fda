use crate::prelude::*;

pub mod consts
{
    /// How many cells a line sample reaches out from its centre in each sense.
    pub const REACH: usize = 4;

    /// The length of a line sample: the reach behind, the centre, and the reach ahead.
    pub const SAMPLE_LENGTH: usize = 2 * REACH + 1;
}

use consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// What one cell of a line sample holds, relative to the stone the sample is centred on.
pub enum Code
{
    Empty    = 0,
    Own      = 1,
    Opponent = 2,
    Edge     = 3,
}

/// The nine cells along one axis through a stone, centred on that stone.
pub type LineSample = [Code; SAMPLE_LENGTH];

use Code::{Edge as W, Empty as E, Opponent as X, Own as S};

/// The tactical shapes, strongest first. A sample scores as the first tier with any shape in it.
const LADDER: [(Score, &[&[Code]]); 7] = [
    (FIVE, &[&[S, S, S, S, S]]),
    (OPEN_FOUR, &[&[E, S, S, S, S, E]]),
    (GAPPED_FOUR, &[
        &[E, S, S, S, S, X],
        &[E, S, S, S, S, W],
        &[X, S, S, S, S, E],
        &[W, S, S, S, S, E],
        &[S, E, S, S, S],
        &[S, S, E, S, S],
        &[S, S, S, E, S],
    ]),
    (OPEN_THREE, &[&[E, S, S, S, E]]),
    (GAPPED_THREE, &[
        &[E, S, S, S, X],
        &[X, S, S, S, E],
        &[E, S, S, S, W],
        &[W, S, S, S, E],
        &[S, E, S, S],
        &[S, S, E, S],
    ]),
    (OPEN_TWO, &[&[E, S, S, E]]),
    (GAPPED_TWO, &[&[E, S, S, X], &[X, S, S, E], &[E, S, S, W], &[W, S, S, E]]),
];

/// Samples the line through `mv` along `direction`, coding each cell relative to `owner`.
///
/// The centre cell is coded as it stands on the board; evaluation only samples around `owner`'s own stones.
pub fn line_sample(board: &Board, mv: Move, direction: Direction, owner: Player) -> LineSample
{
    let (dr, dc) = direction.delta();
    std::array::from_fn(|i| {
        let offset = i as isize - REACH as isize;
        match board.at(mv.row as isize + dr * offset, mv.col as isize + dc * offset)
        {
            | None => Code::Edge,
            | Some(None) => Code::Empty,
            | Some(Some(player)) if player == owner => Code::Own,
            | Some(Some(_)) => Code::Opponent,
        }
    })
}

/// Scores a line sample by the strongest shape it contains, or 0 if it contains none.
pub fn score_line(sample: &LineSample) -> Score
{
    LADDER
        .iter()
        .find(|(_, shapes)| shapes.iter().any(|shape| contains(sample, shape)))
        .map_or(0, |(score, _)| *score)
}

/// Whether the shape appears as a contiguous window of the sample.
fn contains(sample: &LineSample, shape: &[Code]) -> bool
{
    sample.windows(shape.len()).any(|window| window == shape)
}
