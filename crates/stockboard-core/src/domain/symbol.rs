use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 12;

/// Normalized ticker symbol.
///
/// Symbols are case-insensitive at the provider; they are normalized to
/// uppercase on construction so map keys and comparisons stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            if index == 0 && !ch.is_ascii_alphabetic() {
                return Err(ValidationError::SymbolInvalidStart { ch });
            }
            if !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '-') {
                return Err(ValidationError::SymbolInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        let symbol = Symbol::parse(" msft ").expect("symbol should parse");
        assert_eq!(symbol.as_str(), "MSFT");
    }

    #[test]
    fn accepts_class_share_notation() {
        let symbol = Symbol::parse("BRK-B").expect("symbol should parse");
        assert_eq!(symbol.as_str(), "BRK-B");
    }

    #[test]
    fn rejects_empty_and_invalid() {
        assert!(matches!(
            Symbol::parse("   "),
            Err(ValidationError::EmptySymbol)
        ));
        assert!(matches!(
            Symbol::parse("9APL"),
            Err(ValidationError::SymbolInvalidStart { .. })
        ));
        assert!(matches!(
            Symbol::parse("AA PL"),
            Err(ValidationError::SymbolInvalidChar { .. })
        ));
    }
}
