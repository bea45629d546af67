//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::config::{StrategyConfig, StrategyKind, TieBreak};
use crate::constraint::ConstraintStore;
use crate::core::{Code, FeedbackOracle, Premise};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Everything a strategy may look at when choosing a guess
#[derive(Debug, Clone, Copy)]
pub struct SearchView<'a> {
    /// Codes still consistent with every premise
    pub remaining: &'a [Code],
    /// Every code under the rules, in enumeration order
    pub full_space: &'a [Code],
    pub premises: &'a [Premise],
    pub constraints: &'a ConstraintStore,
    /// 1-based turn being played
    pub turn: usize,
}

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` if there are no remaining candidates to choose from.
    fn select_guess<O, R>(&self, view: &SearchView<'_>, oracle: &mut O, rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Random(RandomStrategy),
    Inference(InferenceStrategy),
    Constrained(ConstrainedStrategy),
    Minimax(MinimaxStrategy),
}

impl StrategyType {
    /// Build the strategy a configuration asks for
    #[must_use]
    pub const fn from_config(config: &StrategyConfig) -> Self {
        match config.strategy {
            StrategyKind::RandomExploratory => Self::Random(RandomStrategy),
            StrategyKind::ScoredInference => Self::Inference(InferenceStrategy {
                tie_break: config.tie_break,
            }),
            StrategyKind::ConstraintFiltered => Self::Constrained(ConstrainedStrategy {
                tie_break: config.tie_break,
            }),
            StrategyKind::Minimax => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::RandomExploratory,
            Self::Inference(_) => StrategyKind::ScoredInference,
            Self::Constrained(_) => StrategyKind::ConstraintFiltered,
            Self::Minimax(_) => StrategyKind::Minimax,
        }
    }
}

impl Strategy for StrategyType {
    fn select_guess<O, R>(&self, view: &SearchView<'_>, oracle: &mut O, rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Self::Random(s) => s.select_guess(view, oracle, rng),
            Self::Inference(s) => s.select_guess(view, oracle, rng),
            Self::Constrained(s) => s.select_guess(view, oracle, rng),
            Self::Minimax(s) => s.select_guess(view, oracle, rng),
        }
    }
}

/// Random strategy
///
/// Uniformly random remaining candidate. Used on its own or for the
/// exploratory opening turns of the other strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<O, R>(&self, view: &SearchView<'_>, _oracle: &mut O, rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        view.remaining.choose(rng).cloned()
    }
}

/// Scored inference strategy
///
/// Picks the remaining candidate whose hypothetical feedback best matches
/// every recorded premise.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceStrategy {
    pub tie_break: TieBreak,
}

impl Strategy for InferenceStrategy {
    fn select_guess<O, R>(&self, view: &SearchView<'_>, oracle: &mut O, rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates: Vec<&Code> = view.remaining.iter().collect();
        let (best, score) =
            super::inference::select_best_guess(&candidates, view.premises, oracle, self.tie_break, rng)?;
        trace!(turn = view.turn, guess = %best, score, "inference pick");
        Some(best.clone())
    }
}

/// Clause-filtered inference strategy
///
/// Narrows the remaining candidates with the clause store before scoring.
/// Falls back to all remaining candidates when no code passes the clauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedStrategy {
    pub tie_break: TieBreak,
}

impl Strategy for ConstrainedStrategy {
    fn select_guess<O, R>(&self, view: &SearchView<'_>, oracle: &mut O, rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let mut candidates: Vec<&Code> = view
            .remaining
            .iter()
            .filter(|code| view.constraints.satisfies(code))
            .collect();

        if candidates.is_empty() {
            trace!(turn = view.turn, "no candidate satisfies the clauses, scoring all");
            candidates = view.remaining.iter().collect();
        }

        let (best, score) =
            super::inference::select_best_guess(&candidates, view.premises, oracle, self.tie_break, rng)?;
        trace!(
            turn = view.turn,
            guess = %best,
            score,
            clauses = view.constraints.len(),
            "constrained pick"
        );
        Some(best.clone())
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates,
/// searching the full code space.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<O, R>(&self, view: &SearchView<'_>, oracle: &mut O, _rng: &mut R) -> Option<Code>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        if view.remaining.is_empty() {
            return None;
        }

        let (best, worst) =
            super::minimax::select_best_guess(view.full_space, view.remaining, oracle)?;
        trace!(turn = view.turn, guess = %best, worst, "minimax pick");
        Some(best.clone())
    }
}
