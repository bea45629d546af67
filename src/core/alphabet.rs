//! Symbol alphabet
//!
//! Codes only store symbol indices; the alphabet owns the display names and
//! resolves user-facing names back to symbols.

use super::rules::RulesError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Largest alphabet a code can index into
pub const MAX_SYMBOLS: usize = u8::MAX as usize;

/// The classic six peg colors
pub const CLASSIC_COLORS: [&str; 6] = ["red", "yellow", "green", "blue", "pink", "brown"];

/// One symbol of an alphabet, stored as its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position of this symbol in its alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered, non-empty set of named symbols
///
/// Name lookup is case-insensitive, display keeps the names as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: Vec<String>,
    lookup: FxHashMap<String, Symbol>,
}

impl Alphabet {
    /// Build an alphabet from symbol names
    ///
    /// # Errors
    /// Returns `RulesError` if the list is empty, has more than
    /// [`MAX_SYMBOLS`] entries, or repeats a name (ignoring case).
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["red", "blue"]).unwrap();
    /// assert_eq!(alphabet.len(), 2);
    /// assert!(Alphabet::new(["red", "RED"]).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.into().trim().to_string())
            .collect();

        if names.is_empty() {
            return Err(RulesError::EmptyAlphabet);
        }
        if names.len() > MAX_SYMBOLS {
            return Err(RulesError::TooManySymbols(names.len()));
        }

        let mut lookup = FxHashMap::default();
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(RulesError::BlankSymbol(index));
            }
            if lookup
                .insert(name.to_lowercase(), Symbol(index as u8))
                .is_some()
            {
                return Err(RulesError::DuplicateSymbol(name.clone()));
            }
        }

        Ok(Self { names, lookup })
    }

    /// The six classic peg colors
    ///
    /// # Panics
    /// Will not panic - the palette is fixed and valid.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(CLASSIC_COLORS).expect("classic palette is valid")
    }

    /// Single-letter alphabet `A`, `B`, `C`, ... of the given size
    ///
    /// # Errors
    /// Returns `RulesError` if `count` is zero or exceeds 26.
    pub fn letters(count: usize) -> Result<Self, RulesError> {
        if count > 26 {
            return Err(RulesError::TooManySymbols(count));
        }
        Self::new((b'A'..b'A' + count as u8).map(|b| char::from(b).to_string()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name of a symbol, or `"?"` if it does not belong here
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> &str {
        self.names.get(symbol.index()).map_or("?", String::as_str)
    }

    /// Resolve a symbol by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.lookup.get(&name.trim().to_lowercase()).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        symbol.index() < self.names.len()
    }

    /// All symbols in alphabet order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(|index| Symbol(index as u8))
    }

    /// Whether every name is a single character, so codes can be written compactly
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.names.iter().all(|name| name.chars().count() == 1)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
