//! Lightweight clausal constraints
//!
//! A narrow special case of CNF: literals pin or exclude one symbol at one
//! position, clauses are disjunctions of literals, and the store requires all
//! clauses to hold. There is no resolution or search here.

mod literal;
mod store;

pub use literal::{Clause, ConstraintError, Literal};
pub use store::ConstraintStore;
