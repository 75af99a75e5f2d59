//! Status Tool
//!
//! Runtime status of the calorie service and usage instructions for clients.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::form::CalorieForm;
use crate::models::{GenderCategory, IntensityLevel};

/// Form usage instructions for AI assistants
pub const FORM_INSTRUCTIONS: &str = r#"
# Calorie Form Instructions

The server holds one calorie form, the same one a user would see on screen:

| Field | Values | Default |
|-------|--------|---------|
| Weight (kg) | free text, whole kilograms | empty (reads as 0) |
| Gender | male, female | male |
| Activity Level | Light, Usual, Moderate, Hard, Very Hard | Light |
| Calories Burned | result of the last calculation | 0 |

## Workflow

1. `set_weight` with the weight text exactly as the user typed it
2. `select_gender` with `male` or `female`
3. `select_intensity` with one of the levels (see `list_intensity_levels`)
4. `calculate` to press the button and read the new result

`get_form` returns everything currently shown.

## Rules

- Weight text that is empty, negative, or not a whole number reads as 0 kg.
  It is not an error.
- Changing weight, gender or intensity does NOT update the result.
  Call `calculate` again.
- The result is truncated, never rounded.

## Formula

| Gender | Base |
|--------|------|
| Male | 879 + 16.2 x weight |
| Female | 795 + 7.18 x weight |

Calories = trunc(base x multiplier)

| Level | Multiplier |
|-------|------------|
| Light | 1.30 |
| Usual | 1.55 |
| Moderate | 1.70 |
| Hard | 2.00 |
| Very Hard | 2.30 |

## One-off Estimates

`estimate_calories` computes a value from its own arguments without touching
the form. Use it for "what if" questions.
"#;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Form session as seen by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub calculations_performed: u64,
    pub last_calories_burned: i32,
    pub gender: GenderCategory,
    pub intensity: IntensityLevel,
    pub weight_kg: u32,
}

/// Runtime status of the calorie service
#[derive(Debug, Clone, Serialize)]
pub struct CaloriesStatus {
    pub name: &'static str,
    pub version: &'static str,

    pub session: SessionStatus,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information for the status tool.
/// Shared between tool calls; the calculation counter is the only mutable part.
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    calculations: AtomicU64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            calculations: AtomicU64::new(0),
        }
    }

    /// Count one press of the calculate button
    pub fn record_calculation(&self) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn calculations_performed(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    pub fn get_status(&self, form: &CalorieForm) -> CaloriesStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CaloriesStatus {
            name: NAME,
            version: VERSION,
            session: SessionStatus {
                calculations_performed: self.calculations_performed(),
                last_calories_burned: form.result().calories(),
                gender: form.gender(),
                intensity: form.intensity(),
                weight_kg: form.weight().kg(),
            },
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("===============================================");
    eprintln!("  Calories - calorie burn estimator");
    eprintln!("  Version: {}", VERSION);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_current_process() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(&CalorieForm::new());
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.name, "calories");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(status.started_at.ends_with('Z'));
    }

    #[test]
    fn test_status_reports_session() {
        let tracker = StatusTracker::new();
        let mut form = CalorieForm::new();

        let status = tracker.get_status(&form);
        assert_eq!(status.session.calculations_performed, 0);
        assert_eq!(status.session.last_calories_burned, 0);
        assert_eq!(status.session.gender, GenderCategory::Male);
        assert_eq!(status.session.intensity, IntensityLevel::Light);

        form.set_weight_text("70");
        form.select_intensity(IntensityLevel::Hard);
        form.calculate();
        tracker.record_calculation();
        form.select_gender(GenderCategory::Female);

        let status = tracker.get_status(&form);
        assert_eq!(status.session.calculations_performed, 1);
        assert_eq!(status.session.last_calories_burned, 4026);
        assert_eq!(status.session.gender, GenderCategory::Female);
        assert_eq!(status.session.weight_kg, 70);
    }

    #[test]
    fn test_instructions_cover_every_level() {
        for label in ["Light", "Usual", "Moderate", "Hard", "Very Hard"] {
            assert!(FORM_INSTRUCTIONS.contains(label), "{}", label);
        }
    }
}
