//! Calorie estimate model
//!
//! The inputs handed to the estimator and the integer result it produces.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GenderCategory, IntensityLevel, Weight};

/// Estimated calories burned, truncated toward zero and saturated to the 32-bit range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalorieResult(i32);

impl CalorieResult {
    pub fn new(calories: i32) -> Self {
        Self(calories)
    }

    pub fn calories(&self) -> i32 {
        self.0
    }

    /// Text shown under the form
    pub fn display_text(&self) -> String {
        format!("Calories Burned: {}", self.0)
    }
}

impl fmt::Display for CalorieResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the estimator needs from the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieInputs {
    pub weight: Weight,
    pub gender: GenderCategory,
    pub intensity: IntensityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_result_is_zero() {
        assert_eq!(CalorieResult::default().calories(), 0);
        assert_eq!(CalorieResult::default().display_text(), "Calories Burned: 0");
    }

    #[test]
    fn test_default_inputs() {
        let inputs = CalorieInputs::default();
        assert_eq!(inputs.weight, Weight::ZERO);
        assert_eq!(inputs.gender, GenderCategory::Male);
        assert_eq!(inputs.intensity, IntensityLevel::Light);
    }
}
