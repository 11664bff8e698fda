use itertools::Itertools;

use super::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let stones = self.stones().map(|(mv, player)| format!("{}{}", player.short(), mv)).join(" ");
        write!(f, "Board {{ size: {}, stones: [{}] }}", self.size, stones)
    }

    /// Pretty print, as a grid with row and column indices.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let header = (0..self.size).map(|col| format!("{: >2}", col)).join("");
        write!(f, "   {}", header)?;

        for row in 0..self.size
        {
            let cells = (0..self.size)
                .map(|col| match self.get(Move::new(row, col))
                {
                    | Some(player) => format!(" {}", player.short()),
                    | None => " .".into(),
                })
                .join("");
            write!(f, "\n{: >2} {}", row, cells)?;
        }

        Ok(())
    }
}
