//! Calorie estimator
//!
//! Estimates calories burned from body weight, gender category and activity
//! intensity:
//!
//! ```text
//! base     = 879 + 16.2 × weight_kg   (male)
//!          = 795 + 7.18 × weight_kg   (female)
//! calories = trunc(base × intensity_multiplier)
//! ```

use crate::models::{CalorieInputs, CalorieResult, GenderCategory, Weight};

const MALE_BASE_KCAL: f64 = 879.0;
const MALE_KCAL_PER_KG: f64 = 16.2;
const FEMALE_BASE_KCAL: f64 = 795.0;
const FEMALE_KCAL_PER_KG: f64 = 7.18;

/// Gender-specific base metabolic value before the intensity multiplier
pub fn base_metabolic_value(gender: GenderCategory, weight: Weight) -> f64 {
    let kg = weight.kg() as f64;
    match gender {
        GenderCategory::Male => MALE_BASE_KCAL + MALE_KCAL_PER_KG * kg,
        GenderCategory::Female => FEMALE_BASE_KCAL + FEMALE_KCAL_PER_KG * kg,
    }
}

/// Estimate calories burned. The product is truncated toward zero, not rounded.
pub fn estimate(gender: GenderCategory, weight: Weight, intensity_multiplier: f64) -> CalorieResult {
    let calories = base_metabolic_value(gender, weight) * intensity_multiplier;
    CalorieResult::new(calories.trunc() as i32)
}

/// Estimate from a full set of form inputs
pub fn estimate_inputs(inputs: &CalorieInputs) -> CalorieResult {
    estimate(inputs.gender, inputs.weight, inputs.intensity.multiplier())
}
