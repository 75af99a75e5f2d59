//! Gender category model
//!
//! Selects which base metabolic equation applies.

use serde::{Deserialize, Serialize};

/// Gender category enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderCategory {
    #[default]
    Male,
    Female,
}

impl GenderCategory {
    pub const ALL: [GenderCategory; 2] = [GenderCategory::Male, GenderCategory::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderCategory::Male => "male",
            GenderCategory::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(GenderCategory::Male),
            "female" | "f" => Some(GenderCategory::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GenderCategory::Male => "Male",
            GenderCategory::Female => "Female",
        }
    }
}
