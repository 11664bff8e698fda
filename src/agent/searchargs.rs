use std::{ops::RangeInclusive, time::Duration};

use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How long an evaluator may think: a fixed number of plies, or a wall-clock budget that it fills by deepening.
pub enum SearchArgs
{
    Time(Duration),
    Depth(u32),
}

impl SearchArgs
{
    /// The depths an evaluator searches, in order.
    ///
    /// A fixed depth is searched once. A timed search deepens from one ply up to `max_depth` and is cut off by
    /// its token wherever the clock runs out.
    pub fn depths(&self, max_depth: u32) -> RangeInclusive<u32>
    {
        match self
        {
            | Self::Depth(d) => *d..=*d,
            | Self::Time(_) => max_depth.min(1)..=max_depth,
        }
    }

    /// Reads `depth <plies>` or `time <hh:mm:ss>`.
    ///
    /// Fixed depths beyond `max_depth` are refused, not clamped.
    pub fn parse(args: &[&str], max_depth: u32) -> Result<SearchArgs>
    {
        let base = Error::for_parse::<Self>(args.join(" "));

        match args
        {
            | ["depth", plies] => Self::parse_depth(plies, max_depth),
            | ["time", clock] => Self::parse_clock(clock).map_err(|err| err.chain(base)),
            | _ =>
            {
                let err = Error::new(Kind::ParseError, "Expected 'depth <plies>' or 'time <hh:mm:ss>'.".into());
                Err(err.chain(base))
            }
        }
    }
}

impl SearchArgs
{
    fn parse_depth(plies: &str, max_depth: u32) -> Result<SearchArgs>
    {
        let depth = plies.parse::<u32>().map_err(|_| Error::for_parse::<u32>(plies.into()))?;
        if depth > max_depth
        {
            let err_msg = format!("Cannot search {} plies; the deepest allowed is {}.", depth, max_depth);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(SearchArgs::Depth(depth))
    }

    fn parse_clock(clock: &str) -> Result<SearchArgs>
    {
        // Minutes and seconds are bounded by the pattern itself.
        let re = Regex::new(r"^(?<h>[0-9]{2,3}):(?<m>[0-5][0-9]):(?<s>[0-5][0-9])$").unwrap();
        let Some(caps) = re.captures(clock)
        else
        {
            return Err(Error::new(Kind::InvalidTime, format!("'{}' is not of the form hh:mm:ss.", clock)));
        };

        let seconds = ["h", "m", "s"]
            .iter()
            .zip([3600, 60, 1])
            .map(|(unit, scale)| caps[*unit].parse::<u64>().unwrap_or_default() * scale)
            .sum::<u64>();

        if seconds == 0
        {
            return Err(Error::new(Kind::InvalidTime, "A timed search needs at least one second.".into()));
        }

        Ok(SearchArgs::Time(Duration::from_secs(seconds)))
    }
}
