use crate::prelude::*;

pub mod defaults
{
    pub use crate::game::board::consts::SIZE as BOARD_SIZE;

    /// How many king steps from an existing stone a candidate move may lie.
    pub const RADIUS: usize = 2;

    /// The default number of plies to search, counting the move being chosen.
    pub const DEPTH: u32 = 3;

    /// The deepest a timed search will go before giving up on deepening.
    pub const MAX_DEPTH: u32 = 6;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The options applied to the engine.
pub struct Options
{
    /// The side length of new boards.
    pub board_size: usize,

    /// The search radius around existing stones.
    pub radius: usize,

    /// The depth of an untimed search.
    pub depth: u32,

    /// The depth cap for a timed search.
    pub max_depth: u32,
}

impl Default for Options
{
    fn default() -> Self
    {
        Options {
            board_size: defaults::BOARD_SIZE,
            radius:     defaults::RADIUS,
            depth:      defaults::DEPTH,
            max_depth:  defaults::MAX_DEPTH,
        }
    }
}

impl Options
{
    /// Ensures the engine can actually run with these options.
    pub fn validate(&self) -> Result<()>
    {
        let (min_size, max_size) = (board::consts::MIN_SIZE, board::consts::MAX_SIZE);
        if !(min_size..=max_size).contains(&self.board_size)
        {
            let err_msg = format!("Board size must be between {} and {}, not {}.", min_size, max_size, self.board_size);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        // With no radius there are no candidates next to the stones, and the search has nothing to choose from.
        if self.radius == 0
        {
            return Err(Error::new(Kind::InvalidOption, "The search radius must be at least 1.".into()));
        }

        if self.depth > self.max_depth
        {
            let err_msg = format!("The default depth {} is deeper than the maximum depth {}.", self.depth, self.max_depth);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(())
    }
}
