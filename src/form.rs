//! Calorie form session
//!
//! Holds the values currently shown on the form. The result is only
//! recomputed when [`CalorieForm::calculate`] is called; editing inputs
//! leaves the last result on screen.

use serde::Serialize;

use crate::estimator;
use crate::models::{CalorieInputs, CalorieResult, GenderCategory, IntensityLevel, Weight};

/// One form session
#[derive(Debug, Clone, Default)]
pub struct CalorieForm {
    weight_text: String,
    gender: GenderCategory,
    intensity: IntensityLevel,
    result: CalorieResult,
}

/// Snapshot of what the form shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub weight_text: String,
    pub weight_kg: u32,
    pub gender: GenderCategory,
    pub intensity: IntensityLevel,
    pub intensity_label: &'static str,
    pub intensity_multiplier: f64,
    pub calories_burned: i32,
    pub result_text: String,
}

impl CalorieForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weight field's text. Stored verbatim; parsing happens on read.
    pub fn set_weight_text(&mut self, text: impl Into<String>) {
        self.weight_text = text.into();
    }

    pub fn weight_text(&self) -> &str {
        &self.weight_text
    }

    pub fn weight(&self) -> Weight {
        Weight::parse_lenient(&self.weight_text)
    }

    pub fn select_gender(&mut self, gender: GenderCategory) {
        self.gender = gender;
    }

    pub fn gender(&self) -> GenderCategory {
        self.gender
    }

    pub fn select_intensity(&mut self, intensity: IntensityLevel) {
        self.intensity = intensity;
    }

    pub fn intensity(&self) -> IntensityLevel {
        self.intensity
    }

    pub fn inputs(&self) -> CalorieInputs {
        CalorieInputs {
            weight: self.weight(),
            gender: self.gender,
            intensity: self.intensity,
        }
    }

    /// Run the estimator on the current inputs and keep the result
    pub fn calculate(&mut self) -> CalorieResult {
        self.result = estimator::estimate_inputs(&self.inputs());
        self.result
    }

    pub fn result(&self) -> CalorieResult {
        self.result
    }

    pub fn result_text(&self) -> String {
        self.result.display_text()
    }

    pub fn view(&self) -> FormView {
        FormView {
            weight_text: self.weight_text.clone(),
            weight_kg: self.weight().kg(),
            gender: self.gender,
            intensity: self.intensity,
            intensity_label: self.intensity.label(),
            intensity_multiplier: self.intensity.multiplier(),
            calories_burned: self.result.calories(),
            result_text: self.result_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let form = CalorieForm::new();
        assert_eq!(form.weight_text(), "");
        assert_eq!(form.weight(), Weight::ZERO);
        assert_eq!(form.gender(), GenderCategory::Male);
        assert_eq!(form.intensity(), IntensityLevel::Light);
        assert_eq!(form.result().calories(), 0);
        assert_eq!(form.result_text(), "Calories Burned: 0");
    }

    #[test]
    fn test_calculate_male_light() {
        let mut form = CalorieForm::new();
        form.set_weight_text("70");
        assert_eq!(form.calculate().calories(), 2616);
        assert_eq!(form.result_text(), "Calories Burned: 2616");
    }

    #[test]
    fn test_calculate_with_empty_weight() {
        let mut form = CalorieForm::new();
        form.select_intensity(IntensityLevel::VeryHard);
        assert_eq!(form.calculate().calories(), 2021);
    }

    #[test]
    fn test_invalid_weight_text_is_kept_but_reads_as_zero() {
        let mut form = CalorieForm::new();
        form.set_weight_text("seventy");
        assert_eq!(form.weight_text(), "seventy");
        assert_eq!(form.weight(), Weight::ZERO);
    }

    #[test]
    fn test_result_does_not_follow_input_changes() {
        let mut form = CalorieForm::new();
        form.set_weight_text("70");
        form.calculate();

        form.select_gender(GenderCategory::Female);
        form.select_intensity(IntensityLevel::Hard);
        form.set_weight_text("60");
        assert_eq!(form.result().calories(), 2616);

        assert_eq!(form.calculate().calories(), 2451);
    }

    #[test]
    fn test_view_reflects_state() {
        let mut form = CalorieForm::new();
        form.set_weight_text("70");
        form.select_gender(GenderCategory::Female);
        form.calculate();

        let view = form.view();
        assert_eq!(view.weight_text, "70");
        assert_eq!(view.weight_kg, 70);
        assert_eq!(view.gender, GenderCategory::Female);
        assert_eq!(view.intensity_label, "Light");
        assert_eq!(view.intensity_multiplier, 1.30);
        assert_eq!(view.calories_burned, 1686);
        assert_eq!(view.result_text, "Calories Burned: 1686");
    }
}
