use super::*;

impl Board
{
    /// Determines whether the stone at `mv`, assumed to be `player`'s, is part of a row of five or more.
    ///
    /// Each axis is counted outward from `mv` in both senses until the board edge or a cell that is not
    /// `player`'s stone.
    pub fn check_win(&self, mv: Move, player: Player) -> bool
    {
        Direction::all().into_iter().any(|direction| self.run_length(mv, direction, player) >= WIN_LENGTH)
    }

    /// Determines whether any stone on the board completes a row of five.
    ///
    /// This scans every stone, so it costs a full pass over the board.
    pub fn has_five(&self) -> bool
    {
        self.winner().is_some()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool
    {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether the game on this board is over, by a five or by a full board.
    pub fn is_terminal(&self) -> bool
    {
        self.has_five() || self.is_full()
    }

    /// Finds a player with a row of five, if any.
    pub fn winner(&self) -> Option<Player>
    {
        self.stones().find(|(mv, player)| self.check_win(*mv, *player)).map(|(_, player)| player)
    }

    /// The length of `player`'s contiguous run through `mv` along one axis, counting `mv` itself.
    fn run_length(&self, mv: Move, direction: Direction, player: Player) -> usize
    {
        let count = |sense: isize| {
            (1..)
                .map_while(|distance| self.step(mv, direction, sense * distance))
                .take_while(|next| self.get(*next) == Some(player))
                .count()
        };

        1 + count(1) + count(-1)
    }
}
