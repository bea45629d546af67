//! Per-run feedback memoization
//!
//! Feedback is symmetric, so entries are keyed by the unordered pair of code
//! ranks. A cache belongs to exactly one solver and dies with it.

use crate::core::{Code, Feedback, FeedbackOracle};
use rustc_hash::FxHashMap;

/// How many feedback results a run may memoize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCapacity {
    /// Always calculate
    Disabled,
    /// Store up to this many entries, then stop inserting
    Bounded(usize),
    /// Store everything; memory grows with `|space|²` in the worst case
    Unbounded,
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self::Bounded(1 << 20)
    }
}

/// Feedback oracle with a bounded memo table
#[derive(Debug, Clone)]
pub struct MemoOracle {
    radix: usize,
    capacity: CacheCapacity,
    entries: FxHashMap<u64, Feedback>,
    hits: u64,
    misses: u64,
}

impl MemoOracle {
    /// Create an empty cache for codes over `radix` symbols
    #[must_use]
    pub fn new(radix: usize, capacity: CacheCapacity) -> Self {
        Self {
            radix,
            capacity,
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> CacheCapacity {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Forget every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    fn key(&self, a: &Code, b: &Code) -> u64 {
        let (a, b) = (a.rank(self.radix) as u64, b.rank(self.radix) as u64);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        (low << 32) | high
    }

    fn has_room(&self) -> bool {
        match self.capacity {
            CacheCapacity::Disabled => false,
            CacheCapacity::Bounded(limit) => self.entries.len() < limit,
            CacheCapacity::Unbounded => true,
        }
    }
}

impl FeedbackOracle for MemoOracle {
    fn evaluate(&mut self, secret: &Code, guess: &Code) -> Feedback {
        if self.capacity == CacheCapacity::Disabled {
            return Feedback::calculate(secret, guess);
        }

        let key = self.key(secret, guess);
        if let Some(&feedback) = self.entries.get(&key) {
            self.hits += 1;
            return feedback;
        }

        self.misses += 1;
        let feedback = Feedback::calculate(secret, guess);
        if self.has_room() {
            self.entries.insert(key, feedback);
        }
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(indices: &[u8]) -> Code {
        Code::from_indices(indices)
    }

    #[test]
    fn memoizes_both_argument_orders() {
        let mut oracle = MemoOracle::new(6, CacheCapacity::Unbounded);
        let a = code(&[0, 0, 1, 2]);
        let b = code(&[0, 1, 0, 3]);

        let first = oracle.evaluate(&a, &b);
        let second = oracle.evaluate(&b, &a);

        assert_eq!(first, Feedback::calculate(&a, &b));
        assert_eq!(first, second);
        assert_eq!(oracle.misses(), 1);
        assert_eq!(oracle.hits(), 1);
        assert_eq!(oracle.len(), 1);
    }

    #[test]
    fn bounded_cache_stops_growing() {
        let mut oracle = MemoOracle::new(6, CacheCapacity::Bounded(2));
        let probe = code(&[5, 5, 5, 5]);
        for i in 0..5u8 {
            let fb = oracle.evaluate(&code(&[i, i, i, i]), &probe);
            assert_eq!(fb, Feedback::new(0, 0));
        }
        assert_eq!(oracle.len(), 2);
        assert_eq!(oracle.misses(), 5);
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let mut oracle = MemoOracle::new(6, CacheCapacity::Disabled);
        let a = code(&[1, 2, 3]);
        assert_eq!(oracle.evaluate(&a, &a), Feedback::perfect(3));
        assert!(oracle.is_empty());
        assert_eq!(oracle.hits() + oracle.misses(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut oracle = MemoOracle::new(6, CacheCapacity::default());
        let a = code(&[1, 2, 3]);
        oracle.evaluate(&a, &a);
        oracle.evaluate(&a, &a);
        oracle.clear();
        assert!(oracle.is_empty());
        assert_eq!(oracle.hits(), 0);
        assert_eq!(oracle.misses(), 0);
    }
}
