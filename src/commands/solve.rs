//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, Rules};
use crate::solver::{Solver, Status, StrategyConfig, TurnRecord};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    /// Stop after this many turns even if unsolved
    pub max_turns: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: None,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub status: Status,
    pub secret: Code,
    pub turns: Vec<TurnRecord>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Status::Solved
    }
}

/// Solve a specific secret with the given rules and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret cannot be parsed under the rules
/// - The strategy configuration is invalid for the rules
pub fn solve_code(
    config: &SolveConfig,
    rules: &Rules,
    strategy: StrategyConfig,
) -> Result<SolveResult, String> {
    let secret = rules
        .parse_code(&config.secret)
        .map_err(|e| format!("Invalid secret: {e}"))?;

    let mut solver = Solver::new(rules, strategy).map_err(|e| e.to_string())?;
    let limit = config.max_turns.unwrap_or(usize::MAX);
    let turns: Vec<TurnRecord> = solver.play(&secret).take(limit).collect();

    Ok(SolveResult {
        status: solver.status(),
        secret,
        turns,
    })
}
