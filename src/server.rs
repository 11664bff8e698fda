use std::{
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use itertools::Itertools;

use crate::prelude::*;

/// How often the dispatcher checks whether a timed search has finished early.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = defaults::BOARD_SIZE)]
    /// side length of new boards
    pub board_size: usize,

    #[arg(short, long, default_value_t = defaults::RADIUS)]
    /// how far from existing stones to look for moves
    pub radius: usize,

    #[arg(short, long, default_value_t = defaults::DEPTH)]
    /// plies to search when bestmove is given no limit
    pub depth: u32,

    #[arg(short, long, default_value_t = defaults::MAX_DEPTH)]
    /// deepest ply a timed search may reach
    pub max_depth: u32,
}

impl From<&ServerOptions> for Options
{
    fn from(value: &ServerOptions) -> Self
    {
        Options {
            board_size: value.board_size,
            radius:     value.radius,
            depth:      value.depth,
            max_depth:  value.max_depth,
        }
    }
}

/// A line-protocol front end that owns the authoritative game and hands searches to a worker.
pub struct Server<E: Evaluator>
{
    options:   Options,
    game:      Option<Game>,
    evaluator: E,
}

impl<E: Evaluator> Server<E>
{
    /// Creates a new server with the given capabilities, refusing options the engine cannot run with.
    pub fn new(options: ServerOptions) -> Result<Self>
    {
        let options = Options::from(&options);
        options.validate()?;

        Ok(Server {
            options,
            game: None,
            evaluator: E::new(options),
        })
    }

    /// Answers a single command line, returning the full response including its `ok` footer.
    ///
    /// Recoverable errors are reported inside the response; only fatal ones are returned as errors.
    pub fn respond(&mut self, line: &str) -> Result<String>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = args.first().copied().unwrap_or("");
        let args = args.get(1..).unwrap_or_default();

        match self.apply(cmd, args)
        {
            | Ok(body) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                Ok(Self::ok(body))
            }
            | Err(err) => match err.fatal()
            {
                | true => Err(err),
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    Ok(Self::ok(format!("err\n{}", err)))
                }
            },
        }
    }

    /// Runs the server until `exit` or the end of input.
    pub fn run(&mut self) -> Result<()>
    {
        let mut cmdstr = String::new();

        loop
        {
            cmdstr.clear();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                return Ok(());
            }

            match self.respond(&cmdstr)
            {
                | Ok(response) =>
                {
                    println!("{}", response);
                    if cmdstr.trim() == "exit"
                    {
                        return Ok(());
                    }
                }
                | Err(err) =>
                {
                    println!("err\n{}\nok", err);
                    return Err(err);
                }
            }
        }
    }
}

impl<E: Evaluator> Server<E>
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<String>
    {
        match cmd
        {
            | "" => Ok(String::new()),
            | "bestmove" => self.best_move(args),
            | "board" => self.board(),
            | "candidates" => self.candidates(),
            | "exit" => Ok(String::new()),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        }
    }

    /// Returns the best move available in this position (for the player to move).
    ///
    /// The search runs on a worker thread over a snapshot of the board, so the game itself is never touched.
    /// A timed search is cut off by cancelling its token once the deadline passes.
    fn best_move(&mut self, args: &[&str]) -> Result<String>
    {
        let search_args = match args
        {
            | [] => SearchArgs::Depth(self.options.depth),
            | _ => SearchArgs::parse(args, self.options.max_depth)?,
        };

        let game = self.game.as_ref().ok_or_else(|| Error::empty(Kind::GameNotStarted))?;
        let state = game.state();
        if state.is_over()
        {
            return Err(Error::new(Kind::GameOver, format!("The game has already ended ({}).", state)));
        }

        let player = game.to_move();
        let mut snapshot = game.board().clone();
        let token = CancelToken::new();
        let evaluator = &mut self.evaluator;

        let outcome = thread::scope(|s| {
            let worker = s.spawn(|| evaluator.best_move(&mut snapshot, player, search_args, &token));

            if let SearchArgs::Time(limit) = search_args
            {
                let deadline = Instant::now() + limit;
                while !worker.is_finished() && Instant::now() < deadline
                {
                    thread::sleep(POLL_INTERVAL);
                }
                token.cancel();
            }

            worker.join()
        });

        let Ok(mv) = outcome
        else
        {
            let err = Error::new(Kind::InternalError, "The search worker panicked.".into());
            return Err(Error::holy_shit(err));
        };

        log::info!("bestmove for {}: {}", player, mv.map_or("none".into(), |mv| mv.to_string()));
        Ok(mv.map_or("none".into(), |mv| mv.to_string()))
    }

    /// Pretty-prints the current board.
    fn board(&self) -> Result<String>
    {
        let game = self.ensure_started()?;
        Ok(format!("{}", game.board()))
    }

    /// Lists the moves the engine would consider in this position.
    fn candidates(&self) -> Result<String>
    {
        let game = self.ensure_started()?;
        Ok(candidates(game.board(), self.options.radius).iter().join(";"))
    }

    /// Ensures there is a game loaded on this server.
    fn ensure_started(&self) -> Result<&Game>
    {
        match self.game.as_ref()
        {
            | Some(g) => Ok(g),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a game loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Game>
    {
        match self.game.as_mut()
        {
            | Some(g) => Ok(g),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Identifies the server.
    fn info(&self) -> Result<String>
    {
        Ok(format!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
    }

    /// Creates a new game, either empty with the given (or default) size, or loaded from a game string.
    fn new_game(&mut self, args: &[&str]) -> Result<String>
    {
        let game = match args
        {
            | [] => Game::new(self.options.board_size)?,
            | [size] if size.chars().all(|c| c.is_ascii_digit()) =>
            {
                let size = size.parse::<usize>().map_err(|_| Error::for_parse::<usize>((*size).into()))?;
                Game::new(size)?
            }
            | _ => args.join(" ").parse::<Game>()?,
        };

        let gamestr = GameString::from(&game);
        self.game = Some(game);
        Ok(gamestr.to_string())
    }

    /// Prints the ok footer under a response body.
    fn ok(body: String) -> String
    {
        if body.is_empty()
        {
            "ok".into()
        }
        else
        {
            format!("{}\nok", body)
        }
    }

    /// Plays the given move on the current game, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<String>
    {
        let [mv_str] = args
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide exactly one move, as row,col.".into()));
        };

        let mv = mv_str.parse::<Move>()?;
        let game = self.ensure_started_mut()?;
        let state = game.play(mv)?;

        if state.is_over()
        {
            log::info!("game over: {}", state);
        }
        Ok(GameString::from(&*game).to_string())
    }

    /// Undoes the given number of moves on the current game.
    fn undo(&mut self, args: &[&str]) -> Result<String>
    {
        let n = match args
        {
            | [] => 1,
            | [n, ..] => n.parse::<usize>().map_err(|_| Error::for_parse::<usize>((*n).into()))?,
        };

        let game = self.ensure_started_mut()?;
        game.undo(n)?;

        Ok(GameString::from(&*game).to_string())
    }

    /// Gets all of the legal moves in this position.
    fn valid_moves(&self) -> Result<String>
    {
        let game = self.ensure_started()?;
        if game.state().is_over()
        {
            return Ok("none".into());
        }

        let movelist = game.board().vacancies().join(";");
        Ok(if movelist.is_empty() { "none".into() } else { movelist })
    }
}
