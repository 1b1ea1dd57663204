//! Derived clinical metrics — BMI and blood-pressure categorization.
//!
//! Pure functions over slider-collected vitals. The results are injected
//! into the transcript as bot messages by the session engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        write!(f, "{label}")
    }
}

/// A computed BMI value (rounded to one decimal) with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Blood-pressure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpCategory {
    Normal,
    Elevated,
    Stage1Hypertension,
    Stage2Hypertension,
}

impl fmt::Display for BpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Normal => "Normal",
            Self::Elevated => "Elevated",
            Self::Stage1Hypertension => "Stage 1 Hypertension",
            Self::Stage2Hypertension => "Stage 2 Hypertension",
        };
        write!(f, "{label}")
    }
}

/// Compute BMI from weight (kg) and height (cm).
///
/// The value is rounded to one decimal first and the category taken from the
/// rounded value, matching how the product displays it. Thresholds are
/// inclusive going into the higher band (18.5 is normal weight, 25.0 is
/// overweight, 30.0 is obese).
pub fn bmi_category(weight_kg: f64, height_cm: f64) -> BmiReading {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    let bmi = (raw * 10.0).round() / 10.0;

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiReading { bmi, category }
}

/// Classify a blood-pressure reading.
///
/// Clauses are evaluated in this exact order; they overlap (e.g. 125/78
/// matches both the Elevated and Stage 1 conditions) and first match wins.
/// This reproduces the product's behavior verbatim.
pub fn bp_category(systolic: u16, diastolic: u16) -> BpCategory {
    if systolic < 120 && diastolic < 80 {
        BpCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BpCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BpCategory::Stage1Hypertension
    } else {
        BpCategory::Stage2Hypertension
    }
}
