//! Core domain types for Mastermind
//!
//! Symbols, codes, rules and the feedback oracle. Everything here is pure:
//! no randomness, no I/O.

mod alphabet;
mod code;
mod feedback;
mod rules;
mod space;

pub use alphabet::{Alphabet, CLASSIC_COLORS, MAX_SYMBOLS, Symbol};
pub use code::{Code, CodeDisplay, CodeError};
pub use feedback::{Feedback, FeedbackOracle, Premise, PureOracle};
pub use rules::{MAX_CODE_LENGTH, MAX_SPACE_SIZE, Rules, RulesError};
pub use space::{filter, generate_all, is_consistent, refine};
