//! Ephemeral slider state for the vitals-collection questions.
//!
//! A `VitalsSample` lives in the UI while the patient adjusts the sliders;
//! only the formatted summary ends up in the response store and transcript.

use serde::{Deserialize, Serialize};

use crate::metrics::{self, BmiReading, BpCategory};

/// Slider range for systolic pressure (mmHg).
pub const SYSTOLIC_RANGE: (u16, u16) = (70, 200);
/// Slider range for diastolic pressure (mmHg).
pub const DIASTOLIC_RANGE: (u16, u16) = (40, 130);
/// Slider range for weight (kg), stepped in 0.5 kg increments.
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
/// Slider range for height (cm).
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);

/// Live slider values for the blood-pressure and weight questions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalsSample {
    pub systolic: u16,
    pub diastolic: u16,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Default for VitalsSample {
    fn default() -> Self {
        Self {
            systolic: 120,
            diastolic: 80,
            weight_kg: 70.0,
            height_cm: 170.0,
        }
    }
}

impl VitalsSample {
    /// Blood-pressure category for the current slider values.
    pub fn bp_category(&self) -> BpCategory {
        metrics::bp_category(self.systolic, self.diastolic)
    }

    /// BMI reading for the current slider values.
    pub fn bmi(&self) -> BmiReading {
        metrics::bmi_category(self.weight_kg, self.height_cm)
    }

    /// Summary line injected after a blood-pressure submission.
    pub fn bp_summary(&self) -> String {
        format!(
            "BP: {}/{} mmHg ({})",
            self.systolic,
            self.diastolic,
            self.bp_category()
        )
    }

    /// Summary lines injected after a weight submission.
    pub fn weight_summary(&self) -> String {
        let reading = self.bmi();
        format!(
            "Weight: {}kg, Height: {}cm\nBMI: {} ({})",
            self.weight_kg, self.height_cm, reading.bmi, reading.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BmiCategory;

    #[test]
    fn defaults_match_slider_midpoints() {
        let sample = VitalsSample::default();
        assert_eq!(sample.systolic, 120);
        assert_eq!(sample.diastolic, 80);
        assert_eq!(sample.weight_kg, 70.0);
        assert_eq!(sample.height_cm, 170.0);
    }

    #[test]
    fn bp_summary_format() {
        let sample = VitalsSample {
            systolic: 135,
            diastolic: 88,
            ..Default::default()
        };
        assert_eq!(sample.bp_summary(), "BP: 135/88 mmHg (Stage 1 Hypertension)");
    }

    #[test]
    fn weight_summary_format() {
        let sample = VitalsSample::default();
        assert_eq!(sample.bmi().category, BmiCategory::NormalWeight);
        assert_eq!(
            sample.weight_summary(),
            "Weight: 70kg, Height: 170cm\nBMI: 24.2 (Normal weight)"
        );
    }
}
