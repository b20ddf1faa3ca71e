//! Built-in muscle presets

use crate::error::{ensure_finite, MuscleGenError, Result};
use crate::response::ResponseKind;
use serde::{Deserialize, Serialize};

/// Named starting point for a muscle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusclePreset {
    /// Display name
    pub name: String,

    /// Belly radius of the generated mesh
    pub radius: f64,

    /// Multiplier applied to the joint-to-joint distance
    pub length_multiplier: f64,

    /// Percentage of each end treated as tendon
    pub tendon_percent: f64,

    /// Which signal sign makes the muscle bulge
    pub response: ResponseKind,
}

/// Built-in preset table: (name, radius, length multiplier, tendon %, response)
const BUILTIN: [(&str, f64, f64, f64, ResponseKind); 6] = [
    ("Biceps", 0.42, 1.05, 18.0, ResponseKind::Flexor),
    ("Triceps", 0.35, 1.10, 15.0, ResponseKind::Extensor),
    ("Deltoid", 0.45, 0.95, 12.0, ResponseKind::Flexor),
    ("Pectoral", 0.50, 1.00, 8.0, ResponseKind::Flexor),
    ("Quadriceps", 0.55, 1.15, 20.0, ResponseKind::Flexor),
    ("Dual Biceps", 0.40, 1.05, 18.0, ResponseKind::Dual),
];

impl MusclePreset {
    /// Create a custom preset, checked against the editable ranges
    pub fn custom(
        name: impl Into<String>,
        radius: f64,
        length_multiplier: f64,
        tendon_percent: f64,
        response: ResponseKind,
    ) -> Result<Self> {
        let preset = Self {
            name: name.into(),
            radius,
            length_multiplier,
            tendon_percent,
            response,
        };
        preset.validate()?;
        Ok(preset)
    }

    /// Check the preset fields against their editable ranges
    pub fn validate(&self) -> Result<()> {
        check_range("radius", self.radius, 0.1, 1.2)?;
        check_range("length_multiplier", self.length_multiplier, 0.7, 1.5)?;
        check_range("tendon_percent", self.tendon_percent, 0.0, 40.0)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < min || value > max {
        return Err(MuscleGenError::invalid(
            name,
            value,
            format!("must be within [{}, {}]", min, max),
        ));
    }
    Ok(())
}

/// All built-in presets in display order
pub fn builtin_presets() -> Vec<MusclePreset> {
    BUILTIN
        .iter()
        .map(|&(name, radius, length_multiplier, tendon_percent, response)| MusclePreset {
            name: name.to_string(),
            radius,
            length_multiplier,
            tendon_percent,
            response,
        })
        .collect()
}

/// Look up a built-in preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Result<MusclePreset> {
    builtin_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| MuscleGenError::PresetNotFound(name.to_string()))
}
