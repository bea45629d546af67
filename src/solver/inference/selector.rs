//! Lowest-score candidate selection

use super::calculator::calculate_score;
use crate::core::{Code, FeedbackOracle, Premise};
use crate::solver::TieBreak;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Select the candidate that best agrees with every premise
///
/// Returns the chosen candidate and its score, or `None` if there are no
/// candidates. With [`TieBreak::First`] the earliest minimum wins; with
/// [`TieBreak::Random`] one of the minima is drawn from `rng`.
pub fn select_best_guess<'a, O, R>(
    candidates: &[&'a Code],
    premises: &[Premise],
    oracle: &mut O,
    tie_break: TieBreak,
    rng: &mut R,
) -> Option<(&'a Code, u32)>
where
    O: FeedbackOracle + ?Sized,
    R: Rng + ?Sized,
{
    let scored: Vec<(&'a Code, u32)> = candidates
        .iter()
        .map(|&candidate| (candidate, calculate_score(candidate, premises, oracle)))
        .collect();

    let best = scored.iter().map(|&(_, score)| score).min()?;

    match tie_break {
        TieBreak::First => scored.into_iter().find(|&(_, score)| score == best),
        TieBreak::Random => {
            let tied: Vec<(&'a Code, u32)> = scored
                .into_iter()
                .filter(|&(_, score)| score == best)
                .collect();
            tied.choose(rng).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, PureOracle, generate_all};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn returns_none_without_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = select_best_guess(&[], &[], &mut PureOracle, TieBreak::First, &mut rng);
        assert!(result.is_none());
    }

    #[test]
    fn picks_zero_score_candidate() {
        let secret = Code::from_indices(&[1, 2, 0]);
        let guess = Code::from_indices(&[0, 1, 2]);
        let premises = vec![Premise::new(guess.clone(), Feedback::calculate(&secret, &guess))];

        // Unfiltered: the inconsistent codes score above zero
        let space = generate_all(3, 3);
        let refs: Vec<&Code> = space.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        let (best, score) =
            select_best_guess(&refs, &premises, &mut PureOracle, TieBreak::First, &mut rng)
                .unwrap();
        assert_eq!(score, 0);
        assert!(premises[0].admits(best, &mut PureOracle));
    }

    #[test]
    fn first_tie_break_is_enumeration_order() {
        let space = generate_all(3, 2);
        let refs: Vec<&Code> = space.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        // No premises: every code ties at zero
        let (best, _) =
            select_best_guess(&refs, &[], &mut PureOracle, TieBreak::First, &mut rng).unwrap();
        assert_eq!(best, &space[0]);
    }

    #[test]
    fn random_tie_break_is_seeded() {
        let space = generate_all(4, 3);
        let refs: Vec<&Code> = space.iter().collect();

        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_best_guess(&refs, &[], &mut PureOracle, TieBreak::Random, &mut rng)
                .map(|(code, _)| code.clone())
        };

        assert_eq!(pick(7), pick(7));
        assert!(pick(7).is_some());
    }
}
