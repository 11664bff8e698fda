pub mod scores;

pub use scores::{consts::*, Score};
