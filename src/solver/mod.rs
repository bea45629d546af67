//! Mastermind solving algorithms
//!
//! One solving loop parameterized by a guess selection strategy.

mod config;
mod engine;
pub mod inference;
pub mod minimax;
mod oracle;
pub mod strategy;

pub use config::{
    ConfigError, DEFAULT_EXPLORATORY_TURNS, StrategyConfig, StrategyKind, TieBreak,
};
pub use engine::{ObserveError, Outcome, Solver, Status, TurnRecord, Turns, run, run_with};
pub use oracle::{CacheCapacity, MemoOracle};
pub use strategy::{
    ConstrainedStrategy, InferenceStrategy, MinimaxStrategy, RandomStrategy, SearchView, Strategy,
    StrategyType,
};
