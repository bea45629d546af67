//! Black/white feedback calculation
//!
//! Black counts positions where guess and secret agree. White counts symbols
//! shared by both codes but not in place: the multiset overlap minus black.

use super::Code;
use std::fmt;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    black: u8,
    white: u8,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// All positions correct
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.black as usize == length && self.white == 0
    }

    /// Whether this feedback can occur at all for codes of `length`
    #[inline]
    #[must_use]
    pub const fn is_possible(self, length: usize) -> bool {
        (self.black as usize + self.white as usize) <= length
            && !(self.black as usize + 1 == length && self.white == 1)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// The result does not depend on argument order.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::from_indices(&[0, 0, 1, 2]);
    /// let guess = Code::from_indices(&[0, 1, 0, 3]);
    ///
    /// // A in place, the other A and the B misplaced
    /// assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        let secret_symbols = secret.symbols();
        let guess_symbols = guess.symbols();

        let black = secret_symbols
            .iter()
            .zip(guess_symbols)
            .filter(|(s, g)| s == g)
            .count();

        // Each distinct guess symbol contributes its overlap once
        let overlap: usize = guess_symbols
            .iter()
            .enumerate()
            .filter(|&(i, symbol)| !guess_symbols[..i].contains(symbol))
            .map(|(_, &symbol)| secret.count(symbol).min(guess.count(symbol)))
            .sum();

        Self::new(black as u8, overlap.saturating_sub(black) as u8)
    }

    /// `|Δblack| + |Δwhite|` between two feedbacks
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> u32 {
        self.black.abs_diff(other.black) as u32 + self.white.abs_diff(other.white) as u32
    }

    /// Dense slot for counting feedback classes of codes with `length` positions
    #[inline]
    #[must_use]
    pub const fn slot(self, length: usize) -> usize {
        self.black as usize * (length + 1) + self.white as usize
    }

    /// Number of slots needed by [`Feedback::slot`]
    #[inline]
    #[must_use]
    pub const fn slot_count(length: usize) -> usize {
        (length + 1) * (length + 1)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse `"black white"`, also accepting `,` or `/` as separator
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .collect();

        let [black, white] = parts.as_slice() else {
            return Err(format!("Invalid feedback '{s}': expected two numbers"));
        };

        let parse = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| format!("Invalid feedback '{s}': '{part}' is not a peg count"))
        };

        Ok(Self::new(parse(*black)?, parse(*white)?))
    }
}

/// Something that can score a guess against a hypothetical secret
///
/// Lets the solver swap direct calculation for a memoized one without the
/// candidate filters or strategies knowing.
pub trait FeedbackOracle {
    fn evaluate(&mut self, secret: &Code, guess: &Code) -> Feedback;
}

/// Oracle that calculates every request from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct PureOracle;

impl FeedbackOracle for PureOracle {
    #[inline]
    fn evaluate(&mut self, secret: &Code, guess: &Code) -> Feedback {
        Feedback::calculate(secret, guess)
    }
}

/// One recorded observation: a guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Premise {
    pub guess: Code,
    pub feedback: Feedback,
}

impl Premise {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Whether `code` would have produced this premise's feedback
    pub fn admits<O: FeedbackOracle + ?Sized>(&self, code: &Code, oracle: &mut O) -> bool {
        oracle.evaluate(code, &self.guess) == self.feedback
    }
}
