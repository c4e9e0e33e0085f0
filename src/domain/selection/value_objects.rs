// src/domain/selection/value_objects.rs
//
// Value objects for selection input.
//
// RULES:
// - Immutable
// - Validated on construction
// - No I/O

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Number of rows a bulk selection should cover.
///
/// Always non-negative. Raw user input goes through `FromStr`, which rejects
/// negative and non-numeric text before any page is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BulkSelectCount(usize);

impl BulkSelectCount {
    pub const ZERO: BulkSelectCount = BulkSelectCount(0);

    pub fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for BulkSelectCount {
    type Err = DomainError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidCount(format!("'{}' is not a whole number", trimmed)))?;

        if value < 0 {
            return Err(DomainError::InvalidCount(format!(
                "{} is negative",
                value
            )));
        }

        usize::try_from(value)
            .map(BulkSelectCount)
            .map_err(|_| DomainError::InvalidCount(format!("{} is too large", value)))
    }
}

impl From<usize> for BulkSelectCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl fmt::Display for BulkSelectCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_whole_numbers() {
        assert_eq!("25".parse::<BulkSelectCount>().unwrap().get(), 25);
        assert_eq!("  0 ".parse::<BulkSelectCount>().unwrap(), BulkSelectCount::ZERO);
    }

    #[test]
    fn test_rejects_negative() {
        let err = "-3".parse::<BulkSelectCount>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidCount(_)));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for input in ["", "abc", "2.5", "1e3"] {
            assert!(input.parse::<BulkSelectCount>().is_err(), "accepted {:?}", input);
        }
    }
}
