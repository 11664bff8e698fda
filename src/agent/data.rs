use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Node counts gathered during a search, for logging.
pub struct SearchStats
{
    /// Interior nodes, which generated and ordered their moves.
    pub stems:   u64,
    /// Nodes scored statically, at the depth limit or a finished game.
    pub leaves:  u64,
    /// Sibling loops abandoned on an alpha or beta cutoff.
    pub cutoffs: u64,
}

impl SearchStats
{
    pub fn nodes(&self) -> u64
    {
        self.stems + self.leaves
    }
}

impl AddAssign for SearchStats
{
    fn add_assign(&mut self, rhs: Self)
    {
        self.stems += rhs.stems;
        self.leaves += rhs.leaves;
        self.cutoffs += rhs.cutoffs;
    }
}
