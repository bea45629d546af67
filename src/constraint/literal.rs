//! Positional literals and clauses
//!
//! Text form is `Color(i, 'name')` or `~Color(i, 'name')` with 1-based
//! positions. Parsing never skips input: anything malformed is an error.

use crate::core::{Code, Rules, Symbol};
use std::fmt;

/// Error type for constraint text that cannot be turned into literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    Malformed(String),
    PositionOutOfRange { position: usize, length: usize },
    UnknownSymbol(String),
    EmptyClause,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(text) => write!(f, "Malformed literal '{text}'"),
            Self::PositionOutOfRange { position, length } => {
                write!(f, "Position {position} is outside 1..={length}")
            }
            Self::UnknownSymbol(name) => write!(f, "Unknown symbol '{name}' in literal"),
            Self::EmptyClause => write!(f, "Clause has no literals"),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// "Position `position` holds `symbol`", or its negation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub position: usize,
    pub symbol: Symbol,
    pub negated: bool,
}

impl Literal {
    /// Position (0-based) holds `symbol`
    #[must_use]
    pub const fn is(position: usize, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            negated: false,
        }
    }

    /// Position (0-based) does not hold `symbol`
    #[must_use]
    pub const fn is_not(position: usize, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            negated: true,
        }
    }

    /// Truth value under `code`; positions past the end are never true
    #[inline]
    #[must_use]
    pub fn holds_for(&self, code: &Code) -> bool {
        code.symbols()
            .get(self.position)
            .is_some_and(|&symbol| (symbol == self.symbol) != self.negated)
    }

    /// Parse `Color(3, 'red')` / `~Color(3, 'red')` against a rule set
    ///
    /// # Errors
    /// Returns `ConstraintError` for any text that is not exactly a literal
    /// over the rules' alphabet and positions.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::constraint::Literal;
    /// use mastermind_solver::core::{Rules, Symbol};
    ///
    /// let rules = Rules::default();
    /// let literal = Literal::parse("~Color(3, 'green')", &rules).unwrap();
    /// assert_eq!(literal, Literal::is_not(2, Symbol::new(2)));
    /// assert!(Literal::parse("~Colour(3, 'green')", &rules).is_err());
    /// ```
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, ConstraintError> {
        let malformed = || ConstraintError::Malformed(text.to_string());

        let trimmed = text.trim();
        let (negated, body) = match trimmed.strip_prefix('~') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let inner = body
            .strip_prefix("Color(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (position_text, name_text) = inner.split_once(',').ok_or_else(malformed)?;

        let position: usize = position_text.trim().parse().map_err(|_| malformed())?;
        let name = name_text.trim();
        let name = name
            .strip_prefix('\'')
            .and_then(|n| n.strip_suffix('\''))
            .or_else(|| name.strip_prefix('"').and_then(|n| n.strip_suffix('"')))
            .unwrap_or(name)
            .trim();
        if name.is_empty() {
            return Err(malformed());
        }

        let length = rules.code_length();
        if position == 0 || position > length {
            return Err(ConstraintError::PositionOutOfRange { position, length });
        }
        let symbol = rules
            .alphabet()
            .symbol(name)
            .ok_or_else(|| ConstraintError::UnknownSymbol(name.to_string()))?;

        Ok(Self {
            position: position - 1,
            symbol,
            negated,
        })
    }

    /// Render in text form using the rules' symbol names
    #[must_use]
    pub fn render(&self, rules: &Rules) -> String {
        format!(
            "{}Color({}, '{}')",
            if self.negated { "~" } else { "" },
            self.position + 1,
            rules.alphabet().name(self.symbol)
        )
    }
}

/// A disjunction of literals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    #[must_use]
    pub fn single(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// A clause satisfied when any of the literals holds
    ///
    /// # Errors
    /// Returns `ConstraintError::EmptyClause` when `literals` is empty, since
    /// such a clause could never be satisfied.
    pub fn any_of(literals: Vec<Literal>) -> Result<Self, ConstraintError> {
        if literals.is_empty() {
            return Err(ConstraintError::EmptyClause);
        }
        Ok(Self { literals })
    }

    /// Parse literals separated by `|`
    ///
    /// # Errors
    /// Returns the first literal's parse error, or `EmptyClause`.
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, ConstraintError> {
        let literals = text
            .split('|')
            .filter(|part| !part.trim().is_empty())
            .map(|part| Literal::parse(part, rules))
            .collect::<Result<Vec<_>, _>>()?;
        Self::any_of(literals)
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    #[must_use]
    pub fn is_satisfied_by(&self, code: &Code) -> bool {
        self.literals.iter().any(|literal| literal.holds_for(code))
    }

    #[must_use]
    pub fn render(&self, rules: &Rules) -> String {
        self.literals
            .iter()
            .map(|literal| literal.render(rules))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
