/// A signed evaluation; higher favours the side the evaluation was made for.
///
/// Wide enough to sum fives over every stone of a full 25x25 board.
pub type Score = i64;

pub mod consts
{
    use super::Score;

    /// Five in a row.
    pub const FIVE: Score = 10_000_000;

    /// Four with both ends open; cannot be stopped with a single move.
    pub const OPEN_FOUR: Score = 100_000;

    /// Four with one end blocked, or with a single internal gap.
    pub const GAPPED_FOUR: Score = 10_000;

    /// Three with both ends open.
    pub const OPEN_THREE: Score = 1_000;

    /// Three with one end blocked, or broken by a gap.
    pub const GAPPED_THREE: Score = 100;

    /// Two with both ends open.
    pub const OPEN_TWO: Score = 10;

    /// Two with one end blocked.
    pub const GAPPED_TWO: Score = 1;

    /// The starting point of a maximizing node; stands in for negative infinity.
    pub const WORST: Score = Score::MIN;

    /// The starting point of a minimizing node; stands in for positive infinity.
    pub const BEST: Score = Score::MAX;
}

pub use consts::*;
