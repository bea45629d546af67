//! Code representation
//!
//! A Code is an immutable, fixed-length sequence of symbols. Secrets and
//! guesses are both Codes.

use super::{Alphabet, Symbol};
use std::fmt;

/// An ordered sequence of symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[Symbol]>);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, found: usize },
    UnknownSymbol(String),
    SymbolOutOfRange { position: usize, index: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Code must have exactly {expected} symbols, got {found}")
            }
            Self::UnknownSymbol(name) => write!(f, "Unknown symbol '{name}'"),
            Self::SymbolOutOfRange { position, index } => {
                write!(f, "Symbol #{index} at position {position} is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    pub fn new(symbols: impl Into<Box<[Symbol]>>) -> Self {
        Self(symbols.into())
    }

    /// Build a code from raw symbol indices
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::from_indices(&[0, 0, 1, 2]);
    /// assert_eq!(code.to_string(), "AABC");
    /// ```
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Self {
        Self(indices.iter().copied().map(Symbol::new).collect())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Get the symbol at a position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// How many times a symbol occurs
    #[inline]
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }

    /// Position of this code in lexicographic enumeration order
    ///
    /// The first position is most significant, so ranks match the order
    /// produced by [`crate::core::generate_all`].
    #[must_use]
    pub fn rank(&self, radix: usize) -> usize {
        self.0
            .iter()
            .fold(0, |acc, symbol| acc * radix + symbol.index())
    }

    /// Render with an alphabet's symbol names
    #[must_use]
    pub const fn display<'a>(&'a self, alphabet: &'a Alphabet) -> CodeDisplay<'a> {
        CodeDisplay {
            code: self,
            alphabet,
        }
    }
}

impl fmt::Display for Code {
    /// Letters `A`-`Z` by symbol index, `#n` beyond that
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0.iter() {
            match u8::try_from(symbol.index()) {
                Ok(index) if index < 26 => write!(f, "{}", char::from(b'A' + index))?,
                _ => write!(f, "#{}", symbol.index())?,
            }
        }
        Ok(())
    }
}

/// A code paired with the alphabet used to name its symbols
pub struct CodeDisplay<'a> {
    code: &'a Code,
    alphabet: &'a Alphabet,
}

impl fmt::Display for CodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.alphabet.is_compact() { "" } else { " " };
        for (i, &symbol) in self.code.symbols().iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            f.write_str(self.alphabet.name(symbol))?;
        }
        Ok(())
    }
}
