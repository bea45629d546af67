//! Scored inference over recorded premises
//!
//! Ranks candidates by how closely they reproduce the feedback history.

mod calculator;
mod selector;

pub use calculator::calculate_score;
pub use selector::select_best_guess;
