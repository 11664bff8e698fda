use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of gomoku. Black always moves first.
pub enum Player
{
    Black = 0,
    White = 1,
}

impl Player
{
    /// Returns both players in turn order.
    pub const fn all() -> [Player; 2]
    {
        [Self::Black, Self::White]
    }

    /// Gets the opponent of this player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Black => Self::White,
            | Self::White => Self::Black,
        }
    }

    // Returns the short name for this player, as used on the printed board.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::Black => "x",
            | Self::White => "o",
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Black => "Black",
            | Self::White => "White",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Black" | "b" | "x" => Ok(Self::Black),
            | "White" | "w" | "o" => Ok(Self::White),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
