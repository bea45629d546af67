//! Solver configuration

use super::CacheCapacity;
use crate::core::{Code, CodeError, Rules, RulesError};
use std::fmt;
use std::str::FromStr;

/// Random turns played before inference strategies take over
pub const DEFAULT_EXPLORATORY_TURNS: usize = 3;

/// Which guess selection algorithm drives the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Uniformly random consistent candidate every turn
    RandomExploratory,
    /// Candidate with the lowest feedback mismatch against all premises
    ScoredInference,
    /// Scored inference over candidates that pass the clause store
    ConstraintFiltered,
    /// Guess minimizing the worst-case number of remaining candidates
    Minimax,
}

impl StrategyKind {
    pub const ALL: [Self; 4] = [
        Self::RandomExploratory,
        Self::ScoredInference,
        Self::ConstraintFiltered,
        Self::Minimax,
    ];

    /// Create a strategy kind from its name
    ///
    /// Supported names: "random", "inference", "constraint", "minimax", plus
    /// a few aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "random" | "explore" | "exploratory" => Some(Self::RandomExploratory),
            "inference" | "scored" | "logical" => Some(Self::ScoredInference),
            "constraint" | "cnf" | "constrained" => Some(Self::ConstraintFiltered),
            "minimax" | "maxmin" => Some(Self::Minimax),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomExploratory => "random",
            Self::ScoredInference => "inference",
            Self::ConstraintFiltered => "constraint",
            Self::Minimax => "minimax",
        }
    }

    /// Whether runs with this strategy maintain a clause store
    #[must_use]
    pub const fn uses_constraints(self) -> bool {
        matches!(self, Self::ConstraintFiltered)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown strategy '{s}' (expected random, inference, constraint or minimax)")
        })
    }
}

/// How equally scored guesses are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Earliest in enumeration order
    #[default]
    First,
    /// Uniformly random among the best, using the run's RNG
    Random,
}

/// Everything that shapes one solving run besides the rules and the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    pub strategy: StrategyKind,
    /// Turns played with random candidates before `strategy` takes over
    pub initial_exploratory_turns: usize,
    /// Guess used on turn 1 instead of any selection
    pub fixed_opening: Option<Code>,
    pub seed: u64,
    pub tie_break: TieBreak,
    pub cache: CacheCapacity,
}

impl StrategyConfig {
    /// Configuration with the usual defaults for a strategy
    ///
    /// The inference strategies open with [`DEFAULT_EXPLORATORY_TURNS`]
    /// random turns; random and minimax play start straight away.
    #[must_use]
    pub fn new(strategy: StrategyKind) -> Self {
        let initial_exploratory_turns = match strategy {
            StrategyKind::ScoredInference | StrategyKind::ConstraintFiltered => {
                DEFAULT_EXPLORATORY_TURNS
            }
            StrategyKind::RandomExploratory | StrategyKind::Minimax => 0,
        };

        Self {
            strategy,
            initial_exploratory_turns,
            fixed_opening: None,
            seed: 0,
            tie_break: TieBreak::default(),
            cache: CacheCapacity::default(),
        }
    }

    /// Defaults for a strategy, plus the classic opening for minimax play
    #[must_use]
    pub fn for_rules(strategy: StrategyKind, rules: &Rules) -> Self {
        let config = Self::new(strategy);
        if strategy == StrategyKind::Minimax {
            config.with_opening(rules.classic_opening())
        } else {
            config
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_exploratory_turns(mut self, turns: usize) -> Self {
        self.initial_exploratory_turns = turns;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<Code>) -> Self {
        self.fixed_opening = opening;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheCapacity) -> Self {
        self.cache = cache;
        self
    }

    /// Check the configuration against a rule set
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpening` if the opening guess is not a
    /// valid code under `rules`.
    pub fn validate(&self, rules: &Rules) -> Result<(), ConfigError> {
        if let Some(opening) = &self.fixed_opening {
            rules.check(opening).map_err(ConfigError::InvalidOpening)?;
        }
        Ok(())
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new(StrategyKind::ScoredInference)
    }
}

/// Error type for configurations rejected before the first turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Rules(RulesError),
    InvalidOpening(CodeError),
    InvalidSecret(CodeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(e) => write!(f, "Invalid rules: {e}"),
            Self::InvalidOpening(e) => write!(f, "Invalid opening guess: {e}"),
            Self::InvalidSecret(e) => write!(f, "Invalid secret: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rules(e) => Some(e),
            Self::InvalidOpening(e) | Self::InvalidSecret(e) => Some(e),
        }
    }
}

impl From<RulesError> for ConfigError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!(StrategyKind::from_name("MAXMIN"), Some(StrategyKind::Minimax));
        assert!("entropy".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn per_strategy_defaults() {
        assert_eq!(
            StrategyConfig::new(StrategyKind::ScoredInference).initial_exploratory_turns,
            3
        );
        assert_eq!(
            StrategyConfig::new(StrategyKind::Minimax).initial_exploratory_turns,
            0
        );
        assert_eq!(StrategyConfig::default().strategy, StrategyKind::ScoredInference);
        assert_eq!(StrategyConfig::default().tie_break, TieBreak::First);
    }

    #[test]
    fn minimax_gets_classic_opening() {
        let rules = Rules::default();
        let config = StrategyConfig::for_rules(StrategyKind::Minimax, &rules);
        assert_eq!(config.fixed_opening, rules.classic_opening());

        let config = StrategyConfig::for_rules(StrategyKind::ScoredInference, &rules);
        assert_eq!(config.fixed_opening, None);
    }

    #[test]
    fn builder_methods() {
        let config = StrategyConfig::new(StrategyKind::RandomExploratory)
            .with_seed(42)
            .with_exploratory_turns(2)
            .with_tie_break(TieBreak::Random)
            .with_cache(CacheCapacity::Disabled);

        assert_eq!(config.seed, 42);
        assert_eq!(config.initial_exploratory_turns, 2);
        assert_eq!(config.tie_break, TieBreak::Random);
        assert_eq!(config.cache, CacheCapacity::Disabled);
    }

    #[test]
    fn validate_rejects_bad_opening() {
        let rules = Rules::default();
        let config = StrategyConfig::new(StrategyKind::Minimax)
            .with_opening(Some(Code::from_indices(&[0, 1])));

        assert!(matches!(
            config.validate(&rules),
            Err(ConfigError::InvalidOpening(CodeError::InvalidLength { .. }))
        ));

        let config = config.with_opening(Some(Code::from_indices(&[0, 1, 2, 3, 9])));
        assert!(matches!(
            config.validate(&rules),
            Err(ConfigError::InvalidOpening(CodeError::SymbolOutOfRange { .. }))
        ));
    }
}
