pub mod agent;
pub(crate) mod error;
pub mod game;
pub mod options;
pub(crate) mod server;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        game::*,
        options::*,
        server::{Server, ServerOptions},
    };
}
