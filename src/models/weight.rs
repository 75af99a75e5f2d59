//! Weight model
//!
//! Body weight in whole kilograms, parsed from the form's free-text field.

use serde::{Deserialize, Serialize};

/// Body weight in kilograms. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(kg: u32) -> Self {
        Self(kg)
    }

    pub fn kg(&self) -> u32 {
        self.0
    }

    /// Parse weight text the way the form's text field does.
    ///
    /// Empty text, non-integers, values outside the 32-bit signed range and
    /// negative numbers all resolve to zero. A leading `+` is accepted;
    /// surrounding whitespace is not.
    pub fn parse_lenient(text: &str) -> Self {
        text.parse::<i32>()
            .ok()
            .and_then(|kg| u32::try_from(kg).ok())
            .map(Self)
            .unwrap_or(Self::ZERO)
    }
}

impl From<u32> for Weight {
    fn from(kg: u32) -> Self {
        Self(kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Weight::parse_lenient("70").kg(), 70);
        assert_eq!(Weight::parse_lenient("0").kg(), 0);
        assert_eq!(Weight::parse_lenient("+82").kg(), 82);
        assert_eq!(Weight::parse_lenient("2147483647").kg(), i32::MAX as u32);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(Weight::parse_lenient(""), Weight::ZERO);
        assert_eq!(Weight::parse_lenient("abc"), Weight::ZERO);
        assert_eq!(Weight::parse_lenient("70.5"), Weight::ZERO);
        assert_eq!(Weight::parse_lenient(" 70"), Weight::ZERO);
        assert_eq!(Weight::parse_lenient("70kg"), Weight::ZERO);
        assert_eq!(Weight::parse_lenient("2147483648"), Weight::ZERO);
    }

    #[test]
    fn test_parse_negative_is_zero() {
        assert_eq!(Weight::parse_lenient("-5"), Weight::ZERO);
    }
}
