use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    NotStarted,
    InProgress,
    Draw,
    BlackWins,
    WhiteWins,
}

impl GameState
{
    /// Whether the game has been decided.
    pub fn is_over(&self) -> bool
    {
        matches!(self, Self::Draw | Self::BlackWins | Self::WhiteWins)
    }

    /// The state reached when the given player completes a five.
    pub fn won_by(player: Player) -> Self
    {
        match player
        {
            | Player::Black => Self::BlackWins,
            | Player::White => Self::WhiteWins,
        }
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::NotStarted => "NotStarted",
            | Self::InProgress => "InProgress",
            | Self::Draw => "Draw",
            | Self::BlackWins => "BlackWins",
            | Self::WhiteWins => "WhiteWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "NotStarted" => Ok(Self::NotStarted),
            | "InProgress" => Ok(Self::InProgress),
            | "Draw" => Ok(Self::Draw),
            | "BlackWins" => Ok(Self::BlackWins),
            | "WhiteWins" => Ok(Self::WhiteWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
