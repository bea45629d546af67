//! Mastermind Solver
//!
//! A Mastermind code breaker: exact feedback scoring, candidate filtering,
//! a clause store, and four guess selection strategies driven by one
//! solving loop.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Alphabet, Code, Feedback, Rules};
//! use mastermind_solver::solver::{Status, StrategyConfig, StrategyKind, run};
//!
//! let rules = Rules::new(Alphabet::letters(6).unwrap(), 4).unwrap();
//!
//! // Score a guess
//! let secret = rules.parse_code("AABC").unwrap();
//! let guess = rules.parse_code("ABCD").unwrap();
//! assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(1, 2));
//!
//! // Solve from scratch
//! let config = StrategyConfig::new(StrategyKind::ScoredInference).with_seed(7);
//! let outcome = run(&secret, &rules, config).unwrap();
//! assert_eq!(outcome.status, Status::Solved);
//! ```

// Core domain types
pub mod core;

// Clause store over position literals
pub mod constraint;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
