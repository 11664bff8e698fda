mod alphabeta;

pub use alphabeta::AlphaBetaEvaluator;
