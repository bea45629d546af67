//! Turn-by-turn solving loop
//!
//! A [`Solver`] owns everything one run needs: the candidate set, the premise
//! history, the clause store, the feedback cache and the RNG. Nothing is shared
//! between runs.

use super::config::{ConfigError, StrategyConfig, StrategyKind};
use super::oracle::MemoOracle;
use super::strategy::{RandomStrategy, SearchView, Strategy, StrategyType};
use crate::constraint::ConstraintStore;
use crate::core::{Code, CodeError, Feedback, Premise, Rules, filter, generate_all, refine};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// The last observed feedback was all black
    Solved,
    /// No code is consistent with the premises
    Exhausted,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Solved => write!(f, "solved"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// One observed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// 1-based
    pub turn: usize,
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Status after this turn
    pub status: Status,
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub guesses: Vec<Code>,
    pub premises: Vec<Premise>,
    pub turns: usize,
}

/// Error type for feedback the solver cannot accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserveError {
    /// The guess is not a valid code under the rules
    InvalidGuess(CodeError),
    /// No pair of codes can produce this feedback
    ImpossibleFeedback(Feedback),
    /// The run already ended
    Finished(Status),
}

impl fmt::Display for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::ImpossibleFeedback(feedback) => {
                write!(f, "Feedback '{feedback}' cannot occur for this code length")
            }
            Self::Finished(status) => write!(f, "The game is already {status}"),
        }
    }
}

impl std::error::Error for ObserveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::ImpossibleFeedback(_) | Self::Finished(_) => None,
        }
    }
}

/// Mastermind solver
///
/// Drives the Guessing, Observing and Filtering phases of one game. Use
/// [`next_guess`](Self::next_guess) and [`observe`](Self::observe) when the
/// feedback comes from outside, or [`step`](Self::step) and
/// [`play`](Self::play) for self-play against a known secret.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Feedback, Rules};
/// use mastermind_solver::solver::{Solver, Status, StrategyConfig, StrategyKind};
///
/// let rules = Rules::new(Alphabet::letters(4).unwrap(), 3).unwrap();
/// let config = StrategyConfig::new(StrategyKind::ScoredInference);
/// let mut solver = Solver::new(&rules, config).unwrap();
///
/// let guess = solver.next_guess().unwrap();
/// let record = solver.observe(guess, Feedback::new(3, 0)).unwrap();
/// assert_eq!(record.status, Status::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    rules: Rules,
    config: StrategyConfig,
    strategy: StrategyType,
    full_space: Vec<Code>,
    remaining: Vec<Code>,
    constraints: ConstraintStore,
    premises: Vec<Premise>,
    guesses: Vec<Code>,
    pending: Option<Code>,
    status: Status,
    oracle: MemoOracle,
    rng: StdRng,
}

impl Solver {
    /// Create a solver for a fresh game
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpening` if the configured opening is not
    /// a valid code under `rules`.
    pub fn new(rules: &Rules, config: StrategyConfig) -> Result<Self, ConfigError> {
        config.validate(rules)?;

        let full_space = generate_all(rules.alphabet().len(), rules.code_length());
        debug!(
            strategy = %config.strategy,
            space = full_space.len(),
            seed = config.seed,
            "new solver"
        );

        Ok(Self {
            rules: rules.clone(),
            strategy: StrategyType::from_config(&config),
            remaining: full_space.clone(),
            full_space,
            constraints: ConstraintStore::new(),
            premises: Vec::new(),
            guesses: Vec::new(),
            pending: None,
            status: Status::InProgress,
            oracle: MemoOracle::new(rules.alphabet().len(), config.cache),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        })
    }

    /// Create a solver over symbols given by name
    ///
    /// # Errors
    /// Returns `ConfigError::Rules` for an invalid alphabet or code length,
    /// and `ConfigError::InvalidOpening` as for [`new`](Self::new).
    pub fn from_names<I, S>(
        names: I,
        code_length: usize,
        config: StrategyConfig,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules = Rules::from_names(names, code_length)?;
        Self::new(&rules, config)
    }

    /// Suggest the guess for the next turn
    ///
    /// Calling this again before [`observe`](Self::observe) returns the same
    /// guess. Returns `None` once the game is solved or exhausted.
    pub fn next_guess(&mut self) -> Option<Code> {
        if self.status.is_terminal() {
            return None;
        }
        if let Some(pending) = &self.pending {
            return Some(pending.clone());
        }
        if self.remaining.is_empty() {
            self.status = Status::Exhausted;
            return None;
        }

        let turn = self.premises.len() + 1;
        let guess = self.select(turn)?;
        self.pending = Some(guess.clone());
        Some(guess)
    }

    fn select(&mut self, turn: usize) -> Option<Code> {
        if turn == 1
            && let Some(opening) = &self.config.fixed_opening
        {
            return Some(opening.clone());
        }

        // Nothing left to learn
        if let [only] = self.remaining.as_slice() {
            return Some(only.clone());
        }

        let view = SearchView {
            remaining: &self.remaining,
            full_space: &self.full_space,
            premises: &self.premises,
            constraints: &self.constraints,
            turn,
        };

        if turn <= self.config.initial_exploratory_turns {
            RandomStrategy.select_guess(&view, &mut self.oracle, &mut self.rng)
        } else {
            self.strategy
                .select_guess(&view, &mut self.oracle, &mut self.rng)
        }
    }

    /// Record the feedback for a guess and narrow the candidates
    ///
    /// The guess does not have to be the one [`next_guess`](Self::next_guess)
    /// suggested.
    ///
    /// # Errors
    /// Returns an error if the guess is not a valid code, the feedback cannot
    /// occur for the code length, or the game has already ended.
    pub fn observe(&mut self, guess: Code, feedback: Feedback) -> Result<TurnRecord, ObserveError> {
        if self.status.is_terminal() {
            return Err(ObserveError::Finished(self.status));
        }
        self.rules.check(&guess).map_err(ObserveError::InvalidGuess)?;
        let length = self.rules.code_length();
        if !feedback.is_possible(length) {
            return Err(ObserveError::ImpossibleFeedback(feedback));
        }

        self.pending = None;
        let turn = self.premises.len() + 1;
        let candidates_before = self.remaining.len();
        let premise = Premise::new(guess.clone(), feedback);

        if feedback.is_perfect(length) {
            self.remaining = vec![guess.clone()];
            self.status = Status::Solved;
        } else {
            refine(&mut self.remaining, &premise, &mut self.oracle);
            if self.config.strategy.uses_constraints() {
                self.constraints.add_observation(&guess, feedback);
                self.constraints.retain_satisfying(&mut self.remaining);
            }
            if self.remaining.is_empty() {
                self.status = Status::Exhausted;
            }
        }

        self.guesses.push(guess.clone());
        self.premises.push(premise);

        debug!(
            turn,
            guess = %guess,
            feedback = %feedback,
            before = candidates_before,
            after = self.remaining.len(),
            "turn"
        );
        match self.status {
            Status::Solved => info!(turns = turn, secret = %guess, "solved"),
            Status::Exhausted => warn!(turns = turn, "no candidate fits the feedback history"),
            Status::InProgress => {}
        }

        Ok(TurnRecord {
            turn,
            guess,
            feedback,
            candidates_before,
            candidates_after: self.remaining.len(),
            status: self.status,
        })
    }

    /// Play one self-play turn against `secret`
    ///
    /// Returns `None` once the game has ended, or if `secret` does not fit the
    /// rules and yields feedback the solver rejects.
    pub fn step(&mut self, secret: &Code) -> Option<TurnRecord> {
        let guess = self.next_guess()?;
        let feedback = Feedback::calculate(secret, &guess);
        match self.observe(guess, feedback) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(secret = %secret, error = %e, "self-play stopped");
                None
            }
        }
    }

    /// Iterate over self-play turns until the game ends
    ///
    /// Stopping early (e.g. with `take`) leaves the solver in progress.
    pub fn play<'s>(&'s mut self, secret: &'s Code) -> Turns<'s> {
        Turns {
            solver: self,
            secret,
        }
    }

    /// Take back the last observed turn
    ///
    /// Candidates and clauses are rebuilt from the remaining premises.
    pub fn undo(&mut self) -> Option<Premise> {
        let premise = self.premises.pop()?;
        self.guesses.pop();
        self.pending = None;
        self.remaining = filter(&self.full_space, &self.premises, &mut self.oracle);
        self.constraints = ConstraintStore::new();
        if self.config.strategy.uses_constraints() {
            for earlier in &self.premises {
                self.constraints.add_observation(&earlier.guess, earlier.feedback);
            }
        }
        self.status = if self.remaining.is_empty() {
            Status::Exhausted
        } else {
            Status::InProgress
        };
        debug!(turn = self.premises.len(), "undo");
        Some(premise)
    }

    /// Start a new game with the same rules and configuration
    ///
    /// The RNG is reseeded, so a reset solver repeats its first game. The
    /// feedback cache is kept.
    pub fn reset(&mut self) {
        self.remaining.clone_from(&self.full_space);
        self.constraints = ConstraintStore::new();
        self.premises.clear();
        self.guesses.clear();
        self.pending = None;
        self.status = Status::InProgress;
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Codes still consistent with every premise
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.remaining
    }

    #[must_use]
    pub fn full_space(&self) -> &[Code] {
        &self.full_space
    }

    #[must_use]
    pub fn premises(&self) -> &[Premise] {
        &self.premises
    }

    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// Number of observed turns
    #[must_use]
    pub fn turn(&self) -> usize {
        self.premises.len()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    #[must_use]
    pub const fn oracle(&self) -> &MemoOracle {
        &self.oracle
    }

    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        Outcome {
            status: self.status,
            turns: self.premises.len(),
            guesses: self.guesses,
            premises: self.premises,
        }
    }
}

/// Self-play iterator returned by [`Solver::play`]
#[derive(Debug)]
pub struct Turns<'s> {
    solver: &'s mut Solver,
    secret: &'s Code,
}

impl Iterator for Turns<'_> {
    type Item = TurnRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.solver.step(self.secret)
    }
}

/// Solve `secret` from scratch
///
/// # Errors
/// Returns `ConfigError` if the secret or the opening guess is not a valid
/// code under `rules`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code, Rules};
/// use mastermind_solver::solver::{Status, StrategyConfig, StrategyKind, run};
///
/// let rules = Rules::new(Alphabet::letters(6).unwrap(), 4).unwrap();
/// let secret = rules.parse_code("AABC").unwrap();
/// let config = StrategyConfig::for_rules(StrategyKind::Minimax, &rules);
///
/// let outcome = run(&secret, &rules, config).unwrap();
/// assert_eq!(outcome.status, Status::Solved);
/// assert_eq!(outcome.guesses.last(), Some(&secret));
/// ```
pub fn run(secret: &Code, rules: &Rules, config: StrategyConfig) -> Result<Outcome, ConfigError> {
    run_with(secret, rules, config, |_| {})
}

/// Solve `secret` from scratch, reporting every turn to `on_turn`
///
/// # Errors
/// Returns `ConfigError` if the secret or the opening guess is not a valid
/// code under `rules`.
pub fn run_with<F>(
    secret: &Code,
    rules: &Rules,
    config: StrategyConfig,
    mut on_turn: F,
) -> Result<Outcome, ConfigError>
where
    F: FnMut(&TurnRecord),
{
    rules.check(secret).map_err(ConfigError::InvalidSecret)?;

    let mut solver = Solver::new(rules, config)?;
    for record in solver.play(secret) {
        on_turn(&record);
    }
    Ok(solver.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, PureOracle, RulesError};
    use crate::solver::TieBreak;
    use crate::solver::inference::calculate_score;

    fn six_by_four() -> Rules {
        Rules::new(Alphabet::letters(6).unwrap(), 4).unwrap()
    }

    fn small() -> Rules {
        Rules::new(Alphabet::letters(4).unwrap(), 3).unwrap()
    }

    #[test]
    fn every_strategy_solves_aabc() {
        let rules = six_by_four();
        let secret = rules.parse_code("AABC").unwrap();

        for kind in StrategyKind::ALL {
            let config = StrategyConfig::for_rules(kind, &rules).with_seed(11);
            let outcome = run(&secret, &rules, config).unwrap();

            assert_eq!(outcome.status, Status::Solved, "{kind}");
            assert!(outcome.turns <= rules.space_size(), "{kind}");
            assert_eq!(outcome.guesses.last(), Some(&secret), "{kind}");
            assert_eq!(
                outcome.premises.last().map(|p| p.feedback),
                Some(Feedback::new(4, 0)),
                "{kind}"
            );
        }
    }

    #[test]
    fn minimax_opens_with_configured_guess() {
        let rules = six_by_four();
        let secret = rules.parse_code("FEDC").unwrap();
        let config = StrategyConfig::for_rules(StrategyKind::Minimax, &rules);
        let mut solver = Solver::new(&rules, config).unwrap();

        let first = solver.step(&secret).unwrap();
        assert_eq!(first.guess, Code::from_indices(&[0, 0, 1, 1]));
        assert_eq!(first.feedback, Feedback::new(0, 0));
        assert_eq!(first.candidates_after, 256);
    }

    #[test]
    fn seeded_random_runs_repeat() {
        let rules = six_by_four();
        let secret = rules.parse_code("DFAB").unwrap();
        let config = StrategyConfig::new(StrategyKind::RandomExploratory)
            .with_exploratory_turns(3)
            .with_seed(42);

        let first = run(&secret, &rules, config.clone()).unwrap();
        let second = run(&secret, &rules, config).unwrap();
        assert_eq!(first.guesses, second.guesses);
        assert_eq!(first.status, Status::Solved);
    }

    #[test]
    fn random_tie_break_is_seeded_too() {
        let rules = six_by_four();
        let secret = rules.parse_code("CCEA").unwrap();
        let config = StrategyConfig::new(StrategyKind::ScoredInference)
            .with_tie_break(TieBreak::Random)
            .with_seed(5);

        let first = run(&secret, &rules, config.clone()).unwrap();
        let second = run(&secret, &rules, config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn inconsistent_premises_exhaust() {
        let rules = small();
        let mut solver = Solver::new(&rules, StrategyConfig::default()).unwrap();
        let aaa = Code::from_indices(&[0, 0, 0]);

        let first = solver.observe(aaa.clone(), Feedback::new(1, 0)).unwrap();
        assert_eq!(first.status, Status::InProgress);

        let second = solver.observe(aaa.clone(), Feedback::new(2, 0)).unwrap();
        assert_eq!(second.status, Status::Exhausted);
        assert_eq!(second.candidates_after, 0);

        assert_eq!(solver.next_guess(), None);
        assert_eq!(
            solver.observe(aaa, Feedback::new(0, 0)),
            Err(ObserveError::Finished(Status::Exhausted))
        );
        assert_eq!(solver.into_outcome().turns, 2);
    }

    #[test]
    fn candidate_counts_never_grow() {
        let rules = six_by_four();
        let secret = rules.parse_code("BFFA").unwrap();

        for kind in StrategyKind::ALL {
            let mut previous = rules.space_size();
            let config = StrategyConfig::for_rules(kind, &rules).with_seed(3);
            run_with(&secret, &rules, config, |record| {
                assert!(record.candidates_after <= record.candidates_before);
                assert!(record.candidates_before <= previous);
                previous = record.candidates_after;
            })
            .unwrap();
        }
    }

    #[test]
    fn secret_scores_zero_against_history() {
        let rules = six_by_four();
        let secret = rules.parse_code("ECAA").unwrap();
        let mut solver = Solver::new(&rules, StrategyConfig::default()).unwrap();

        let played = solver.play(&secret).take(3).count();
        assert_eq!(played, 3);
        assert_eq!(calculate_score(&secret, solver.premises(), &mut PureOracle), 0);
        assert!(solver.candidates().contains(&secret));
    }

    #[test]
    fn invalid_secret_and_opening_rejected() {
        let rules = small();

        let short = Code::from_indices(&[0, 1]);
        assert!(matches!(
            run(&short, &rules, StrategyConfig::default()),
            Err(ConfigError::InvalidSecret(CodeError::InvalidLength { .. }))
        ));

        let config = StrategyConfig::default().with_opening(Some(Code::from_indices(&[0, 1, 7])));
        assert!(matches!(
            Solver::new(&rules, config),
            Err(ConfigError::InvalidOpening(_))
        ));
    }

    #[test]
    fn bad_rules_rejected_by_name() {
        let config = StrategyConfig::default();

        let solver = Solver::from_names(["red", "blue", "green"], 2, config.clone()).unwrap();
        assert_eq!(solver.full_space().len(), 9);

        assert!(matches!(
            Solver::from_names(["red", "red"], 2, config.clone()),
            Err(ConfigError::Rules(RulesError::DuplicateSymbol(_)))
        ));
        assert!(matches!(
            Solver::from_names(["red", "blue"], 0, config),
            Err(ConfigError::Rules(RulesError::ZeroLength))
        ));
    }

    #[test]
    fn step_stops_on_rejected_feedback() {
        let rules = small();
        let opening = rules.parse_code("AAB").unwrap();
        let config = StrategyConfig::default().with_opening(Some(opening));
        let mut solver = Solver::new(&rules, config).unwrap();

        // One position too long: AAB against AACB scores 2 black 1 white
        let secret = Code::from_indices(&[0, 0, 2, 1]);
        assert_eq!(solver.step(&secret), None);
        assert_eq!(solver.turn(), 0);
        assert_eq!(solver.status(), Status::InProgress);
    }

    #[test]
    fn next_guess_is_stable_until_observed() {
        let rules = small();
        let mut solver = Solver::new(&rules, StrategyConfig::default().with_seed(9)).unwrap();

        let first = solver.next_guess();
        assert!(first.is_some());
        assert_eq!(solver.next_guess(), first);
        assert_eq!(solver.turn(), 0);
    }

    #[test]
    fn observe_accepts_any_valid_guess() {
        let rules = small();
        let mut solver = Solver::new(&rules, StrategyConfig::default()).unwrap();
        let _suggested = solver.next_guess();

        let own = Code::from_indices(&[3, 3, 2]);
        let record = solver.observe(own.clone(), Feedback::new(0, 0)).unwrap();
        assert_eq!(record.turn, 1);
        assert_eq!(solver.guesses(), &[own]);
        assert!(solver.candidates().iter().all(|c| c.count(crate::core::Symbol::new(3)) == 0));
    }

    #[test]
    fn observe_rejects_bad_input() {
        let rules = small();
        let mut solver = Solver::new(&rules, StrategyConfig::default()).unwrap();

        assert!(matches!(
            solver.observe(Code::from_indices(&[0, 1]), Feedback::new(0, 0)),
            Err(ObserveError::InvalidGuess(_))
        ));
        assert_eq!(
            solver.observe(Code::from_indices(&[0, 1, 2]), Feedback::new(2, 2)),
            Err(ObserveError::ImpossibleFeedback(Feedback::new(2, 2)))
        );
        assert_eq!(solver.turn(), 0);
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let rules = small();
        let config = StrategyConfig::new(StrategyKind::ConstraintFiltered);
        let mut solver = Solver::new(&rules, config).unwrap();

        solver
            .observe(Code::from_indices(&[0, 0, 1]), Feedback::new(0, 1))
            .unwrap();
        let after_first = solver.candidates().to_vec();
        let clauses_after_first = solver.constraints().len();

        solver
            .observe(Code::from_indices(&[2, 2, 2]), Feedback::new(0, 0))
            .unwrap();
        assert!(solver.candidates().len() < after_first.len());

        let undone = solver.undo().unwrap();
        assert_eq!(undone.guess, Code::from_indices(&[2, 2, 2]));
        assert_eq!(solver.candidates(), after_first.as_slice());
        assert_eq!(solver.constraints().len(), clauses_after_first);
        assert_eq!(solver.turn(), 1);
    }

    #[test]
    fn reset_replays_the_same_game() {
        let rules = six_by_four();
        let secret = rules.parse_code("AFCE").unwrap();
        let config = StrategyConfig::new(StrategyKind::RandomExploratory).with_seed(17);
        let mut solver = Solver::new(&rules, config).unwrap();

        let first: Vec<Code> = solver.play(&secret).map(|r| r.guess).collect();
        solver.reset();
        assert_eq!(solver.candidates().len(), rules.space_size());
        let second: Vec<Code> = solver.play(&secret).map(|r| r.guess).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn stopping_early_leaves_game_in_progress() {
        let rules = six_by_four();
        let secret = rules.parse_code("FFFE").unwrap();
        let config = StrategyConfig::default().with_exploratory_turns(0);
        let mut solver = Solver::new(&rules, config).unwrap();

        let turns = solver.play(&secret).take(1).count();
        assert_eq!(turns, 1);
        assert_eq!(solver.into_outcome().status, Status::InProgress);
    }
}
