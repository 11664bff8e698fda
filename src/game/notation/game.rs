use itertools::Itertools;
use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid game string.
///
/// A game string reads `size;state;Player[turn];move;move;...`, for example `15;InProgress;White[2];7,7`.
/// The header is redundant with the moves; loading a game string into a `Game` replays the moves and checks
/// that the header agrees.
pub struct GameString(String);

impl FromStr for GameString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^[0-9]{1,2};[A-Za-z]+;(Black|White)\[[0-9]+\](;[0-9]{1,2},[0-9]{1,2})*$").unwrap();
        if !re.is_match(s.trim())
        {
            return Err(Error::for_parse::<Self>(s.into()));
        }

        Ok(GameString(s.trim().to_owned()))
    }
}

impl AsRef<str> for GameString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for GameString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl From<&Game> for GameString
{
    fn from(game: &Game) -> Self
    {
        let header = format!("{};{};{}[{}]", game.board().size(), game.state(), game.to_move(), game.turn());
        let moves = game.history().iter().map(|mv| format!(";{}", mv)).join("");
        GameString(header + &moves)
    }
}

impl TryFrom<&GameString> for Game
{
    type Error = Error;
    fn try_from(value: &GameString) -> std::result::Result<Self, Self::Error>
    {
        let base = Error::for_parse::<GameString>(value.0.clone());
        let mut parts = value.0.split(';');

        // The syntax was already checked, so the header is always present.
        let (Some(size), Some(state), Some(turn_str)) = (parts.next(), parts.next(), parts.next())
        else
        {
            return Err(base);
        };

        let size = size.parse::<usize>().map_err(|_| Error::for_parse::<usize>(size.into()).chain(base.clone()))?;
        let state = state.parse::<GameState>().map_err(|err| err.chain(base.clone()))?;

        let Some((player, turn)) = turn_str.strip_suffix(']').and_then(|s| s.split_once('['))
        else
        {
            return Err(base);
        };
        let player = player.parse::<Player>().map_err(|err| err.chain(base.clone()))?;
        let turn = turn.parse::<usize>().map_err(|_| Error::for_parse::<usize>(turn.into()).chain(base.clone()))?;

        let mut game = Game::new(size).map_err(|err| err.chain(base.clone()))?;
        for mv_str in parts
        {
            let mv = mv_str.parse::<Move>().map_err(|err| err.chain(base.clone()))?;
            game.play(mv).map_err(|err| err.chain(base.clone()))?;
        }

        if game.state() != state
        {
            return Err(Error::mismatch(state, game.state()).chain(base));
        }
        if game.to_move() != player
        {
            return Err(Error::mismatch(player, game.to_move()).chain(base));
        }
        if game.turn() != turn
        {
            return Err(Error::mismatch(turn, game.turn()).chain(base));
        }

        Ok(game)
    }
}

impl FromStr for Game
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        Game::try_from(&s.parse::<GameString>()?)
    }
}

impl std::fmt::Display for Game
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", GameString::from(self))
    }
}
