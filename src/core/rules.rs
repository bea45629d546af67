//! Game rules: which symbols exist and how long a code is

use super::{Alphabet, Code, CodeError, Feedback, Symbol};
use std::fmt;

/// Longest supported code
pub const MAX_CODE_LENGTH: usize = 32;

/// Largest code space the solver will enumerate
pub const MAX_SPACE_SIZE: usize = 1 << 24;

/// Error type for invalid rule sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    EmptyAlphabet,
    BlankSymbol(usize),
    DuplicateSymbol(String),
    TooManySymbols(usize),
    ZeroLength,
    LengthTooLarge(usize),
    SpaceTooLarge { symbols: usize, length: usize },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "Alphabet must contain at least one symbol"),
            Self::BlankSymbol(index) => write!(f, "Symbol #{} has an empty name", index + 1),
            Self::DuplicateSymbol(name) => write!(f, "Symbol '{name}' appears more than once"),
            Self::TooManySymbols(count) => write!(f, "Alphabet has too many symbols ({count})"),
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::LengthTooLarge(length) => write!(
                f,
                "Code length {length} exceeds the maximum of {MAX_CODE_LENGTH}"
            ),
            Self::SpaceTooLarge { symbols, length } => write!(
                f,
                "{symbols}^{length} codes is more than the {MAX_SPACE_SIZE} the solver can enumerate"
            ),
        }
    }
}

impl std::error::Error for RulesError {}

/// The alphabet and code length shared by every code in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    alphabet: Alphabet,
    code_length: usize,
    space_size: usize,
}

impl Rules {
    /// Create a rule set
    ///
    /// # Errors
    /// Returns `RulesError` if the length is zero or too large, or if the full
    /// code space would exceed [`MAX_SPACE_SIZE`].
    pub fn new(alphabet: Alphabet, code_length: usize) -> Result<Self, RulesError> {
        if code_length == 0 {
            return Err(RulesError::ZeroLength);
        }
        if code_length > MAX_CODE_LENGTH {
            return Err(RulesError::LengthTooLarge(code_length));
        }

        let symbols = alphabet.len();
        let space_size = u32::try_from(code_length)
            .ok()
            .and_then(|exp| symbols.checked_pow(exp))
            .filter(|&size| size <= MAX_SPACE_SIZE)
            .ok_or(RulesError::SpaceTooLarge {
                symbols,
                length: code_length,
            })?;

        Ok(Self {
            alphabet,
            code_length,
            space_size,
        })
    }

    /// Build rules from a list of symbol names
    ///
    /// # Errors
    /// Returns `RulesError` for an invalid alphabet or length.
    pub fn from_names<I, S>(names: I, code_length: usize) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Alphabet::new(names)?, code_length)
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number of distinct codes, `|alphabet|^length`
    #[inline]
    #[must_use]
    pub const fn space_size(&self) -> usize {
        self.space_size
    }

    /// Feedback for a correct guess under these rules
    #[inline]
    #[must_use]
    pub const fn perfect(&self) -> Feedback {
        Feedback::perfect(self.code_length)
    }

    /// Check that a code has the right length and only uses known symbols
    ///
    /// # Errors
    /// Returns `CodeError` describing the first violation.
    pub fn check(&self, code: &Code) -> Result<(), CodeError> {
        if code.len() != self.code_length {
            return Err(CodeError::InvalidLength {
                expected: self.code_length,
                found: code.len(),
            });
        }
        if let Some(position) = code
            .symbols()
            .iter()
            .position(|&symbol| !self.alphabet.contains(symbol))
        {
            return Err(CodeError::SymbolOutOfRange {
                position: position + 1,
                index: code.symbols()[position].index(),
            });
        }
        Ok(())
    }

    /// Parse a code written with this alphabet's names
    ///
    /// Names are separated by whitespace or commas. When every name is a
    /// single character the code may also be written as one word (`AABC`).
    ///
    /// # Errors
    /// Returns `CodeError` for unknown names or a wrong number of symbols.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::default();
    /// let code = rules.parse_code("red red yellow green blue").unwrap();
    /// assert_eq!(code.len(), 5);
    /// assert!(rules.parse_code("red red").is_err());
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let symbols: Vec<Symbol> = match tokens.as_slice() {
            [word] if self.alphabet.is_compact() && self.code_length > 1 => word
                .chars()
                .map(|c| self.lookup(&c.to_string()))
                .collect::<Result<_, _>>()?,
            _ => tokens
                .iter()
                .map(|token| self.lookup(token))
                .collect::<Result<_, _>>()?,
        };

        let code = Code::new(symbols);
        self.check(&code)?;
        Ok(code)
    }

    /// The fixed opening guess used by minimax play
    ///
    /// Five pegs open with `0 0 1 2 3` (red red yellow green blue on the
    /// classic palette), four pegs with `0 0 1 1`. Other shapes have none.
    #[must_use]
    pub fn classic_opening(&self) -> Option<Code> {
        let pattern: &[u8] = match (self.code_length, self.alphabet.len()) {
            (5, symbols) if symbols >= 4 => &[0, 0, 1, 2, 3],
            (4, symbols) if symbols >= 2 => &[0, 0, 1, 1],
            _ => return None,
        };
        Some(Code::from_indices(pattern))
    }

    fn lookup(&self, name: &str) -> Result<Symbol, CodeError> {
        self.alphabet
            .symbol(name)
            .ok_or_else(|| CodeError::UnknownSymbol(name.to_string()))
    }
}

impl Default for Rules {
    /// Six classic colors, five pegs
    fn default() -> Self {
        Self {
            alphabet: Alphabet::classic(),
            code_length: 5,
            space_size: 7776,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(count: usize, length: usize) -> Rules {
        Rules::new(Alphabet::letters(count).unwrap(), length).unwrap()
    }

    #[test]
    fn default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.code_length(), 5);
        assert_eq!(rules.alphabet().len(), 6);
        assert_eq!(rules.space_size(), 6usize.pow(5));
        assert_eq!(rules, Rules::new(Alphabet::classic(), 5).unwrap());
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            Rules::new(Alphabet::classic(), 0),
            Err(RulesError::ZeroLength)
        );
        assert_eq!(
            Rules::new(Alphabet::classic(), 40),
            Err(RulesError::LengthTooLarge(40))
        );
        assert!(matches!(
            Rules::new(Alphabet::letters(26).unwrap(), 10),
            Err(RulesError::SpaceTooLarge { symbols: 26, length: 10 })
        ));
    }

    #[test]
    fn parse_named_code() {
        let rules = Rules::default();
        let code = rules.parse_code("red, RED yellow green blue").unwrap();
        assert_eq!(code, Code::from_indices(&[0, 0, 1, 2, 3]));
    }

    #[test]
    fn parse_compact_code() {
        let rules = letters(6, 4);
        let code = rules.parse_code("AABC").unwrap();
        assert_eq!(code, Code::from_indices(&[0, 0, 1, 2]));
        assert_eq!(rules.parse_code("a a b c").unwrap(), code);
    }

    #[test]
    fn parse_errors() {
        let rules = Rules::default();
        assert_eq!(
            rules.parse_code("red red purple green blue"),
            Err(CodeError::UnknownSymbol("purple".to_string()))
        );
        assert_eq!(
            rules.parse_code("red red"),
            Err(CodeError::InvalidLength {
                expected: 5,
                found: 2
            })
        );
        assert!(letters(6, 4).parse_code("AAGB").is_err());
    }

    #[test]
    fn check_rejects_foreign_symbols() {
        let rules = letters(3, 2);
        assert!(rules.check(&Code::from_indices(&[0, 2])).is_ok());
        assert_eq!(
            rules.check(&Code::from_indices(&[0, 3])),
            Err(CodeError::SymbolOutOfRange {
                position: 2,
                index: 3
            })
        );
    }

    #[test]
    fn classic_openings() {
        assert_eq!(
            Rules::default().classic_opening(),
            Some(Code::from_indices(&[0, 0, 1, 2, 3]))
        );
        assert_eq!(
            letters(6, 4).classic_opening(),
            Some(Code::from_indices(&[0, 0, 1, 1]))
        );
        assert_eq!(letters(6, 3).classic_opening(), None);
    }
}
