use crate::prelude::*;

/// Scores the board for `perspective`: the shapes around its stones minus the shapes around the opponent's.
///
/// Every stone contributes the line it sits on in each of the four directions, so a row of five stones
/// counts its five once per stone.
pub fn evaluate_board(board: &Board, perspective: Player) -> Score
{
    board
        .stones()
        .map(|(mv, owner)| {
            let score = stone_score(board, mv, owner);
            if owner == perspective { score } else { -score }
        })
        .sum()
}

/// Sums the shapes through one stone over all four directions, from its owner's point of view.
pub fn stone_score(board: &Board, mv: Move, owner: Player) -> Score
{
    Direction::all()
        .into_iter()
        .map(|direction| score_line(&line_sample(board, mv, direction, owner)))
        .sum()
}
