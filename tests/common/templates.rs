use fivemind::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builds a board from rows of `x` (Black), `o` (White) and `.` (empty).
pub fn board_from_rows(rows: &[&str]) -> Board
{
    let mut board = Board::new(rows.len());
    for (row, line) in rows.iter().enumerate()
    {
        assert_eq!(line.len(), rows.len(), "row {} is not {} cells wide", row, rows.len());
        for (col, cell) in line.chars().enumerate()
        {
            match cell
            {
                | 'x' => board.place(Move::new(row, col), Player::Black),
                | 'o' => board.place(Move::new(row, col), Player::White),
                | _ =>
                {}
            }
        }
    }
    board
}

/// Fills a board so that no row of any axis holds more than two stones of one colour.
pub fn filled_board(size: usize) -> Board
{
    let mut board = Board::new(size);
    for row in 0..size
    {
        for col in 0..size
        {
            let player = if (col / 2 + row) % 2 == 0 { Player::Black } else { Player::White };
            board.place(Move::new(row, col), player);
        }
    }
    board
}

/// Places `stones` stones at random, alternating colours starting with Black, reproducibly for a seed.
pub fn random_board(size: usize, stones: usize, seed: u64) -> Board
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size);
    let mut player = Player::Black;

    while board.stone_count() < stones
    {
        let mv = Move::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if board.is_vacant(mv)
        {
            board.place(mv, player);
            player = player.flip();
        }
    }
    board
}

/// Plain minimax over the same candidates and leaves as the engine's search, with no pruning or ordering.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool, perspective: Player) -> Score
{
    if depth == 0 || board.is_terminal()
    {
        return evaluate_board(board, perspective);
    }

    let current = if maximizing { perspective } else { perspective.flip() };
    let mut best = if maximizing { WORST } else { BEST };

    for mv in candidates(board, defaults::RADIUS)
    {
        board.place(mv, current);
        let score = minimax(board, depth - 1, !maximizing, perspective);
        board.clear(mv);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}

/// Turns nine digit codes into a line sample.
pub fn sample(codes: [u8; 9]) -> LineSample
{
    codes.map(|code| match code
    {
        | 0 => Code::Empty,
        | 1 => Code::Own,
        | 2 => Code::Opponent,
        | 3 => Code::Edge,
        | _ => panic!("{} is not a line code", code),
    })
}
