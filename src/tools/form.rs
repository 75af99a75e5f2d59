//! Calorie Form Tools
//!
//! Interaction handlers for the calorie form: edit weight, pick options,
//! press calculate, read the screen.

use serde::Serialize;
use thiserror::Error;

use crate::estimator;
use crate::form::{CalorieForm, FormView};
use crate::models::{CalorieInputs, GenderCategory, IntensityLevel, Weight};

/// Errors raised by form tools
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid gender: '{0}'. Valid values: male (m), female (f)")]
    UnknownGender(String),

    #[error("Invalid intensity: '{0}'. Valid values: light, usual, moderate, hard, very_hard")]
    UnknownIntensity(String),
}

pub type FormResult<T> = Result<T, FormError>;

// ============================================================================
// Response Structs
// ============================================================================

/// Response for set_weight
#[derive(Debug, Serialize)]
pub struct SetWeightResponse {
    pub weight_text: String,
    pub weight_kg: u32,
    /// Still the last calculated value; weight edits do not recalculate
    pub calories_burned: i32,
}

/// Response for select_gender and select_intensity
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub gender: GenderCategory,
    pub intensity: IntensityLevel,
    pub intensity_label: &'static str,
    pub intensity_multiplier: f64,
    pub calories_burned: i32,
}

/// One row of the intensity selector
#[derive(Debug, Serialize)]
pub struct IntensityLevelInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
    pub selected: bool,
}

/// Response for list_intensity_levels
#[derive(Debug, Serialize)]
pub struct ListIntensityLevelsResponse {
    pub levels: Vec<IntensityLevelInfo>,
    pub total: usize,
}

/// Response for calculate and estimate_calories
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub calories_burned: i32,
    pub result_text: String,
    pub inputs: CalorieInputs,
    pub base_metabolic_value: f64,
    pub intensity_multiplier: f64,
}

impl CalculateResponse {
    fn new(inputs: CalorieInputs) -> Self {
        let result = estimator::estimate_inputs(&inputs);
        Self {
            calories_burned: result.calories(),
            result_text: result.display_text(),
            inputs,
            base_metabolic_value: estimator::base_metabolic_value(inputs.gender, inputs.weight),
            intensity_multiplier: inputs.intensity.multiplier(),
        }
    }
}

// ============================================================================
// Tool Functions
// ============================================================================

pub fn get_form(form: &CalorieForm) -> FormView {
    form.view()
}

/// Replace the weight text. Never fails: unparsable text reads as 0 kg.
pub fn set_weight(form: &mut CalorieForm, text: &str) -> SetWeightResponse {
    form.set_weight_text(text);
    let weight = form.weight();

    if reads_as_zero_by_fallback(text) {
        tracing::debug!(text, "weight text is not a valid integer, reading as 0 kg");
    }

    SetWeightResponse {
        weight_text: form.weight_text().to_string(),
        weight_kg: weight.kg(),
        calories_burned: form.result().calories(),
    }
}

pub fn select_gender(form: &mut CalorieForm, name: &str) -> FormResult<SelectionResponse> {
    let gender = GenderCategory::from_str(name).ok_or_else(|| {
        tracing::warn!(name, "rejected gender selection");
        FormError::UnknownGender(name.to_string())
    })?;

    form.select_gender(gender);
    tracing::debug!(gender = gender.as_str(), "gender selected");
    Ok(selection_response(form))
}

pub fn select_intensity(form: &mut CalorieForm, name: &str) -> FormResult<SelectionResponse> {
    let intensity = IntensityLevel::from_str(name).ok_or_else(|| {
        tracing::warn!(name, "rejected intensity selection");
        FormError::UnknownIntensity(name.to_string())
    })?;

    form.select_intensity(intensity);
    tracing::debug!(intensity = intensity.as_str(), "intensity selected");
    Ok(selection_response(form))
}

pub fn list_intensity_levels(form: &CalorieForm) -> ListIntensityLevelsResponse {
    let levels: Vec<IntensityLevelInfo> = IntensityLevel::ALL
        .iter()
        .map(|level| IntensityLevelInfo {
            key: level.as_str(),
            label: level.label(),
            multiplier: level.multiplier(),
            selected: *level == form.intensity(),
        })
        .collect();

    let total = levels.len();
    ListIntensityLevelsResponse { levels, total }
}

/// Press the calculate button
pub fn calculate(form: &mut CalorieForm) -> CalculateResponse {
    let inputs = form.inputs();
    let result = form.calculate();
    tracing::info!(
        weight_kg = inputs.weight.kg(),
        gender = inputs.gender.as_str(),
        intensity = inputs.intensity.as_str(),
        calories = result.calories(),
        "calories calculated"
    );
    CalculateResponse::new(inputs)
}

/// Stateless estimate that leaves the form session untouched.
/// Gender defaults to male and intensity to light when omitted.
pub fn estimate_calories(
    weight_text: &str,
    gender: Option<&str>,
    intensity: Option<&str>,
) -> FormResult<CalculateResponse> {
    let gender = match gender {
        Some(name) => GenderCategory::from_str(name).ok_or_else(|| {
            tracing::warn!(name, "rejected gender in estimate");
            FormError::UnknownGender(name.to_string())
        })?,
        None => GenderCategory::default(),
    };
    let intensity = match intensity {
        Some(name) => IntensityLevel::from_str(name).ok_or_else(|| {
            tracing::warn!(name, "rejected intensity in estimate");
            FormError::UnknownIntensity(name.to_string())
        })?,
        None => IntensityLevel::default(),
    };

    Ok(CalculateResponse::new(CalorieInputs {
        weight: Weight::parse_lenient(weight_text),
        gender,
        intensity,
    }))
}

/// True when non-empty text only reads as 0 kg because it failed to parse
fn reads_as_zero_by_fallback(text: &str) -> bool {
    !text.is_empty() && text.parse::<i32>().map_or(true, |kg| kg < 0)
}

fn selection_response(form: &CalorieForm) -> SelectionResponse {
    SelectionResponse {
        gender: form.gender(),
        intensity: form.intensity(),
        intensity_label: form.intensity().label(),
        intensity_multiplier: form.intensity().multiplier(),
        calories_burned: form.result().calories(),
    }
}
