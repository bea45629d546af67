//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization over the whole code space.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback, max_remaining_within};
pub use selector::select_best_guess;
