//! Clause store built from zero-black feedback
//!
//! Only one rule is encoded: a guess with no black pegs rules out every one of
//! its symbols at the position it was played. Feedback with black pegs adds
//! nothing, so this layer prunes less than the full premise filter does.

use super::{Clause, Literal};
use crate::core::{Code, Feedback};

/// Conjunction of clauses every live code must satisfy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    clauses: Vec<Clause>,
}

impl ConstraintStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clauses implied by one observation
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::constraint::ConstraintStore;
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::from_indices(&[0, 1, 2, 3]);
    /// assert_eq!(ConstraintStore::derive_clauses(&guess, Feedback::new(0, 2)).len(), 4);
    /// assert!(ConstraintStore::derive_clauses(&guess, Feedback::new(1, 2)).is_empty());
    /// ```
    #[must_use]
    pub fn derive_clauses(guess: &Code, feedback: Feedback) -> Vec<Clause> {
        if feedback.black() > 0 {
            return Vec::new();
        }

        guess
            .symbols()
            .iter()
            .enumerate()
            .map(|(position, &symbol)| Clause::single(Literal::is_not(position, symbol)))
            .collect()
    }

    /// Add a clause unless an identical one is already stored
    ///
    /// Returns whether the clause was new.
    pub fn add(&mut self, clause: Clause) -> bool {
        if self.clauses.contains(&clause) {
            return false;
        }
        self.clauses.push(clause);
        true
    }

    /// Derive and store the clauses for an observation
    ///
    /// Returns how many new clauses were added.
    pub fn add_observation(&mut self, guess: &Code, feedback: Feedback) -> usize {
        Self::derive_clauses(guess, feedback)
            .into_iter()
            .filter(|clause| self.add(clause.clone()))
            .count()
    }

    #[must_use]
    pub fn satisfies(&self, code: &Code) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied_by(code))
    }

    /// Drop every code that violates a stored clause
    pub fn retain_satisfying(&self, codes: &mut Vec<Code>) {
        if !self.clauses.is_empty() {
            codes.retain(|code| self.satisfies(code));
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
