//! Intensity level model
//!
//! The five activity levels offered by the form, each with a fixed multiplier
//! applied to the base metabolic value.

use serde::{Deserialize, Serialize};

/// Activity intensity enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    #[default]
    Light,
    Usual,
    Moderate,
    Hard,
    VeryHard,
}

impl IntensityLevel {
    /// All levels in the order the selector lists them
    pub const ALL: [IntensityLevel; 5] = [
        IntensityLevel::Light,
        IntensityLevel::Usual,
        IntensityLevel::Moderate,
        IntensityLevel::Hard,
        IntensityLevel::VeryHard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Light => "light",
            IntensityLevel::Usual => "usual",
            IntensityLevel::Moderate => "moderate",
            IntensityLevel::Hard => "hard",
            IntensityLevel::VeryHard => "very_hard",
        }
    }

    /// Parse a level name. Case-insensitive; the space in "Very Hard" may be
    /// written as `_`, `-`, or left out.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match normalized.as_str() {
            "light" => Some(IntensityLevel::Light),
            "usual" => Some(IntensityLevel::Usual),
            "moderate" => Some(IntensityLevel::Moderate),
            "hard" => Some(IntensityLevel::Hard),
            "veryhard" => Some(IntensityLevel::VeryHard),
            _ => None,
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Light => "Light",
            IntensityLevel::Usual => "Usual",
            IntensityLevel::Moderate => "Moderate",
            IntensityLevel::Hard => "Hard",
            IntensityLevel::VeryHard => "Very Hard",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            IntensityLevel::Light => 1.30,
            IntensityLevel::Usual => 1.55,
            IntensityLevel::Moderate => 1.70,
            IntensityLevel::Hard => 2.00,
            IntensityLevel::VeryHard => 2.30,
        }
    }
}
