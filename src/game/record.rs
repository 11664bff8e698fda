use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A game in progress: the board, and the moves that produced it.
///
/// Unlike the raw `Board`, a game validates every move it is given and knows whose turn it is.
pub struct Game
{
    board:   Board,
    history: Vec<Move>,
}

impl Default for Game
{
    fn default() -> Self
    {
        Game {
            board:   Board::default(),
            history: Vec::new(),
        }
    }
}

impl Game
{
    /// Gets the board of this game.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Ensures a move is legal in the current position, or returns an error explaining why it isn't.
    pub fn check(&self, mv: Move) -> Result<()>
    {
        let state = self.state();
        if state.is_over()
        {
            return Err(Error::new(Kind::GameOver, format!("The game has already ended ({}).", state)));
        }

        if !self.board.within(mv)
        {
            let err_msg = format!("{} is off the {}x{} board.", mv, self.board.size(), self.board.size());
            return Err(Error::new(Kind::OutOfBounds, err_msg));
        }

        if let Some(player) = self.board.get(mv)
        {
            return Err(Error::new(Kind::Occupied, format!("{} already holds a {} stone.", mv, player)));
        }

        Ok(())
    }

    /// The moves played so far, oldest first.
    pub fn history(&self) -> &[Move]
    {
        &self.history
    }

    /// The last move played, if any.
    pub fn last_move(&self) -> Option<Move>
    {
        self.history.last().copied()
    }

    /// Creates an unstarted game on an empty board of the given size.
    pub fn new(size: usize) -> Result<Game>
    {
        if !(board::consts::MIN_SIZE..=board::consts::MAX_SIZE).contains(&size)
        {
            let err_msg = format!(
                "Board size must be between {} and {}, not {}.",
                board::consts::MIN_SIZE,
                board::consts::MAX_SIZE,
                size
            );
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(Game {
            board:   Board::new(size),
            history: Vec::new(),
        })
    }

    /// Plays the given move for the player to move, if possible.
    ///
    /// Returns the state of the game after the move.
    pub fn play(&mut self, mv: Move) -> Result<GameState>
    {
        self.check(mv)?;

        let player = self.to_move();
        self.board.place(mv, player);
        self.history.push(mv);

        Ok(self.state())
    }

    /// Gets the state of the game.
    ///
    /// Play stops at the first five, so only the last move can have won.
    pub fn state(&self) -> GameState
    {
        let Some(last) = self.last_move()
        else
        {
            return GameState::NotStarted;
        };

        let mover = self.to_move().flip();
        if self.board.check_win(last, mover)
        {
            GameState::won_by(mover)
        }
        else if self.board.is_full()
        {
            GameState::Draw
        }
        else
        {
            GameState::InProgress
        }
    }

    /// The player whose stone the next move places.
    pub fn to_move(&self) -> Player
    {
        if self.history.len() % 2 == 0
        {
            Player::Black
        }
        else
        {
            Player::White
        }
    }

    /// The one-based number of the move about to be played.
    pub fn turn(&self) -> usize
    {
        self.history.len() + 1
    }

    /// Takes back the given number of moves.
    pub fn undo(&mut self, n: usize) -> Result<()>
    {
        if n > self.history.len()
        {
            let err_msg = format!("Cannot undo {} moves with only {} played.", n, self.history.len());
            return Err(Error::new(Kind::TooManyUndos, err_msg));
        }

        for _ in 0..n
        {
            if let Some(mv) = self.history.pop()
            {
                self.board.clear(mv);
            }
        }

        Ok(())
    }
}
