use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A zero-based (row, column) intersection on which a stone is placed.
///
/// A move in a vacuum is only syntactically valid; whether it is on the board and empty depends on the board.
pub struct Move
{
    pub row: usize,
    pub col: usize,
}

impl Move
{
    pub const fn new(row: usize, col: usize) -> Self
    {
        Move { row, col }
    }

    /// The Chebyshev (king-step) distance between two intersections.
    pub fn distance(&self, other: &Move) -> usize
    {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Move
{
    fn from((row, col): (usize, usize)) -> Self
    {
        Move::new(row, col)
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<row>[0-9]{1,2}),(?<col>[0-9]{1,2})$").unwrap();
        let Some(caps) = re.captures(s.trim())
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        // Both groups are one or two digits, so these cannot overflow.
        let row = caps["row"].parse::<usize>().map_err(|_| Error::for_parse::<Self>(s.into()))?;
        let col = caps["col"].parse::<usize>().map_err(|_| Error::for_parse::<Self>(s.into()))?;

        Ok(Move::new(row, col))
    }
}
