use itertools::iproduct;

use crate::prelude::*;

/// Finds the moves worth searching: every empty cell within `radius` king steps of some stone.
///
/// On an empty board the only candidate is the centre. The result is deduplicated and in row-major order.
pub fn candidates(board: &Board, radius: usize) -> Vec<Move>
{
    if board.is_empty()
    {
        return vec![board.center()];
    }

    let size = board.size();
    let reach = radius as isize;
    let mut frontier = vec![false; size * size];

    for (mv, _) in board.stones()
    {
        for (dr, dc) in iproduct!(-reach..=reach, -reach..=reach)
        {
            let (row, col) = (mv.row as isize + dr, mv.col as isize + dc);
            if board.at(row, col) == Some(None)
            {
                frontier[row as usize * size + col as usize] = true;
            }
        }
    }

    frontier
        .iter()
        .enumerate()
        .filter(|(_, near)| **near)
        .map(|(i, _)| Move::new(i / size, i % size))
        .collect()
}
