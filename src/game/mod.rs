pub mod board;
pub mod direction;
pub(crate) mod notation;
pub mod player;
pub mod record;

pub use board::{Board, GameState};
pub use direction::Direction;
pub use notation::types::*;
pub use player::Player;
pub use record::Game;
