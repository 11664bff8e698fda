use crate::prelude::*;

mod checks;
mod printers;
mod state;

pub use state::GameState;

pub mod consts
{
    /// The standard gomoku board is 15 by 15.
    pub const SIZE: usize = 15;

    /// Anything smaller cannot fit a five along a diagonal with room to block it.
    pub const MIN_SIZE: usize = 5;

    /// Keeps move notation to two digits per coordinate.
    pub const MAX_SIZE: usize = 25;

    /// The number of stones in a winning row.
    pub const WIN_LENGTH: usize = 5;
}

use consts::*;

#[derive(Clone, PartialEq, Eq, Hash)]
/// A square grid in which every cell is either empty or holds one player's stone.
///
/// The search mutates a board in place with `place` and `clear`; callers that need the
/// authoritative board to stay readable during a search hand the engine a clone.
pub struct Board
{
    /// Row-major cells; `None` is an empty intersection.
    cells: Vec<Option<Player>>,

    /// The side length of the grid.
    size: usize,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new(SIZE)
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.pretty(f)
    }
}

impl Board
{
    /// Reads the cell at a signed coordinate.
    ///
    /// Returns `None` when the coordinate lies off the board, and `Some(cell)` otherwise.
    #[inline]
    pub fn at(&self, row: isize, col: isize) -> Option<Option<Player>>
    {
        self.contains(row, col).then(|| self.cells[row as usize * self.size + col as usize])
    }

    /// The centre intersection, where the first stone of a game belongs.
    pub fn center(&self) -> Move
    {
        Move::new(self.size / 2, self.size / 2)
    }

    /// Empties the given cell; the undo half of a trial placement.
    #[inline]
    pub fn clear(&mut self, mv: Move)
    {
        debug_assert!(self.get(mv).is_some(), "clearing the empty cell {}", mv);
        let index = self.index(mv);
        self.cells[index] = None;
    }

    /// Whether a signed coordinate lies on this board.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool
    {
        0 <= row && 0 <= col && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Reads the cell addressed by a move, which must be on the board.
    #[inline]
    pub fn get(&self, mv: Move) -> Option<Player>
    {
        self.cells[self.index(mv)]
    }

    /// Whether the board has no stones at all.
    pub fn is_empty(&self) -> bool
    {
        self.cells.iter().all(Option::is_none)
    }

    /// Whether the move addresses an empty cell on this board.
    pub fn is_vacant(&self, mv: Move) -> bool
    {
        self.within(mv) && self.get(mv).is_none()
    }

    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Board
    {
        Board {
            cells: vec![None; size * size],
            size,
        }
    }

    /// Puts a stone on an empty cell; the make half of a trial placement.
    #[inline]
    pub fn place(&mut self, mv: Move, player: Player)
    {
        debug_assert!(self.within(mv), "placing off the board at {}", mv);
        debug_assert!(self.get(mv).is_none(), "placing onto the occupied cell {}", mv);
        let index = self.index(mv);
        self.cells[index] = Some(player);
    }

    /// The side length of the grid.
    #[inline]
    pub fn size(&self) -> usize
    {
        self.size
    }

    /// Walks `distance` cells from a move along an axis, if that stays on the board.
    pub fn step(&self, mv: Move, direction: Direction, distance: isize) -> Option<Move>
    {
        let (dr, dc) = direction.delta();
        let (row, col) = (mv.row as isize + dr * distance, mv.col as isize + dc * distance);
        self.contains(row, col).then(|| Move::new(row as usize, col as usize))
    }

    /// Counts the stones on the board.
    pub fn stone_count(&self) -> usize
    {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates every stone on the board in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Move, Player)> + '_
    {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|player| (self.unindex(i), player)))
    }

    /// Iterates every empty cell in row-major order.
    pub fn vacancies(&self) -> impl Iterator<Item = Move> + '_
    {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.unindex(i))
    }

    /// Whether the move lies on this board.
    #[inline]
    pub fn within(&self, mv: Move) -> bool
    {
        mv.row < self.size && mv.col < self.size
    }
}

impl Board
{
    #[inline]
    fn index(&self, mv: Move) -> usize
    {
        mv.row * self.size + mv.col
    }

    #[inline]
    fn unindex(&self, i: usize) -> Move
    {
        Move::new(i / self.size, i % self.size)
    }
}
