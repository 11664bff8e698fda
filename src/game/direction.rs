#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One of the four axes along which a row of stones can form.
///
/// Each axis is walked in its positive sense; lines are always sampled in both senses.
pub enum Direction
{
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction
{
    #[inline]
    /// Returns every axis.
    pub const fn all() -> [Direction; 4]
    {
        [Self::Horizontal, Self::Vertical, Self::Diagonal, Self::AntiDiagonal]
    }

    #[inline]
    /// The (row, column) step of one cell along this axis.
    pub const fn delta(&self) -> (isize, isize)
    {
        match self
        {
            | Self::Horizontal => (0, 1),
            | Self::Vertical => (1, 0),
            | Self::Diagonal => (1, 1),
            | Self::AntiDiagonal => (1, -1),
        }
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Horizontal => "horizontal",
            | Self::Vertical => "vertical",
            | Self::Diagonal => "diagonal",
            | Self::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}
