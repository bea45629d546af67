//! Minimax-based guess selection strategy
//!
//! Selects the guess that minimizes the worst-case remaining candidates,
//! preferring guesses that could themselves be the secret.

use super::calculator::max_remaining_within;
use crate::core::{Code, FeedbackOracle};
use rustc_hash::FxHashSet;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every code in `guess_pool` is considered. Among guesses with the same
/// worst case, the earliest one that is also a candidate wins, otherwise the
/// earliest one overall. Returns the guess and its worst case, or `None` if
/// the guess pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, PureOracle, generate_all};
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool = generate_all(3, 2);
/// let candidates = vec![Code::from_indices(&[0, 1]), Code::from_indices(&[1, 0])];
///
/// let (best, worst) = select_best_guess(&pool, &candidates, &mut PureOracle).unwrap();
/// assert_eq!(worst, 1);
/// assert!(candidates.contains(best));
/// ```
pub fn select_best_guess<'a, O: FeedbackOracle + ?Sized>(
    guess_pool: &'a [Code],
    candidates: &[Code],
    oracle: &mut O,
) -> Option<(&'a Code, usize)> {
    let members: FxHashSet<&Code> = candidates.iter().collect();
    let mut best: Option<(&'a Code, usize, bool)> = None;

    for guess in guess_pool {
        let limit = best.map_or(usize::MAX, |(_, worst, _)| worst);
        let Some(worst) = max_remaining_within(guess, candidates, limit, oracle) else {
            continue;
        };
        let is_candidate = members.contains(guess);

        let improves = match best {
            None => true,
            Some((_, best_worst, best_is_candidate)) => {
                worst < best_worst || (worst == best_worst && is_candidate && !best_is_candidate)
            }
        };
        if improves {
            best = Some((guess, worst, is_candidate));

            // A candidate that isolates every code cannot be beaten
            if worst <= 1 && is_candidate {
                break;
            }
        }
    }

    best.map(|(guess, worst, _)| (guess, worst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PureOracle, generate_all};
    use crate::solver::minimax::calculate_max_remaining;

    fn code(indices: &[u8]) -> Code {
        Code::from_indices(indices)
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let pool = [code(&[3, 3]), code(&[0, 1])];
        let candidates = [code(&[0, 0]), code(&[1, 1]), code(&[0, 1])];

        let (best, max_remaining) = select_best_guess(&pool, &candidates, &mut PureOracle).unwrap();

        assert_eq!(best, &pool[1]);
        assert!(max_remaining < 3);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = [code(&[0, 1])];
        assert!(select_best_guess(&[], &candidates, &mut PureOracle).is_none());
    }

    #[test]
    fn prefers_candidates_on_ties() {
        // Both guesses split {AB, BA} into singletons; BA is a candidate, AC is not
        let candidates = [code(&[0, 1]), code(&[1, 0])];
        let pool = [code(&[0, 2]), code(&[1, 0])];

        let (best, worst) = select_best_guess(&pool, &candidates, &mut PureOracle).unwrap();
        assert_eq!(worst, 1);
        assert_eq!(best, &pool[1]);
    }

    #[test]
    fn ties_resolved_consistently() {
        let pool = generate_all(4, 3);
        let candidates: Vec<Code> = generate_all(4, 3).into_iter().step_by(5).collect();

        let first = select_best_guess(&pool, &candidates, &mut PureOracle);
        let second = select_best_guess(&pool, &candidates, &mut PureOracle);
        assert_eq!(first, second);
    }

    #[test]
    fn choice_is_never_worse_than_any_other_guess() {
        let pool = generate_all(4, 3);
        let secret = code(&[2, 0, 3]);
        let probe = code(&[0, 0, 1]);
        let feedback = crate::core::Feedback::calculate(&secret, &probe);
        let candidates: Vec<Code> = pool
            .iter()
            .filter(|c| crate::core::Feedback::calculate(c, &probe) == feedback)
            .cloned()
            .collect();

        let (best, worst) = select_best_guess(&pool, &candidates, &mut PureOracle).unwrap();
        assert_eq!(
            calculate_max_remaining(best, &candidates, &mut PureOracle),
            worst
        );
        for guess in &pool {
            assert!(worst <= calculate_max_remaining(guess, &candidates, &mut PureOracle));
        }
    }
}
