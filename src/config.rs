//! Configuration file support for batch generation

use crate::error::{MuscleGenError, Result};
use crate::generator::MuscleSpec;
use crate::mesh::bulge::{DEFAULT_BULGE_FACTOR, DEFAULT_FALLOFF_EXPONENT};
use crate::mesh::types::{
    MeshProfile, DEFAULT_LONGITUDINAL_RINGS, DEFAULT_RADIAL_SEGMENTS, DEFAULT_SHAPE_EXPONENT,
};
use crate::preset::find_preset;
use crate::response::ResponseKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration for a single muscle
///
/// Either `preset` + `joint_distance`, or explicit `length` + `base_radius`.
/// Every other field overrides the preset (or the default) when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleConfig {
    /// Asset name (defaults to the preset name)
    pub name: Option<String>,

    /// Built-in preset to start from
    pub preset: Option<String>,

    /// Distance between the two joint heads (preset mode)
    pub joint_distance: Option<f64>,

    /// Explicit muscle length
    pub length: Option<f64>,

    /// Explicit belly radius
    pub base_radius: Option<f64>,

    /// Shape exponent of the radius profile (default 1.9)
    pub shape_exponent: Option<f64>,

    /// Vertices per ring (default 40)
    pub radial_segments: Option<usize>,

    /// Ring spans along the axis (default 26)
    pub longitudinal_rings: Option<usize>,

    /// Radial scale of the bulge target at the belly
    pub bulge_factor: Option<f64>,

    /// Longitudinal falloff exponent of the bulge
    pub falloff_exponent: Option<f64>,

    /// Response kind override
    pub response: Option<ResponseKind>,

    /// Tendon percentage override
    pub tendon_percent: Option<f64>,

    /// Output filename stem (optional, derived from the name if not specified)
    pub output_file: Option<String>,
}

impl MuscleConfig {
    /// Resolve this configuration into a validated generation spec
    pub fn to_spec(&self) -> Result<MuscleSpec> {
        let mut spec = match (&self.preset, self.length, self.base_radius) {
            (Some(preset), None, None) => {
                let preset = find_preset(preset)?;
                let distance = self.joint_distance.ok_or_else(|| {
                    MuscleGenError::ConfigError(format!(
                        "Preset '{}' requires joint_distance",
                        preset.name
                    ))
                })?;
                MuscleSpec::from_preset(&preset, distance)?
            }
            (None, Some(length), Some(base_radius)) => MuscleSpec {
                name: "Muscle".to_string(),
                profile: MeshProfile::with_defaults(length, base_radius)?,
                bulge_factor: DEFAULT_BULGE_FACTOR,
                falloff_exponent: DEFAULT_FALLOFF_EXPONENT,
                response: ResponseKind::Flexor,
                tendon_percent: 0.0,
            },
            _ => {
                return Err(MuscleGenError::ConfigError(
                    "Muscle needs either 'preset' or both 'length' and 'base_radius'".to_string(),
                ))
            }
        };

        if let Some(name) = &self.name {
            spec.name = name.clone();
        }
        spec.profile.shape_exponent = self.shape_exponent.unwrap_or(DEFAULT_SHAPE_EXPONENT);
        spec.profile.radial_segments = self.radial_segments.unwrap_or(DEFAULT_RADIAL_SEGMENTS);
        spec.profile.longitudinal_rings =
            self.longitudinal_rings.unwrap_or(DEFAULT_LONGITUDINAL_RINGS);
        spec.profile.validate()?;

        if let Some(bulge_factor) = self.bulge_factor {
            spec.bulge_factor = bulge_factor;
        }
        if let Some(falloff_exponent) = self.falloff_exponent {
            spec.falloff_exponent = falloff_exponent;
        }
        if let Some(response) = self.response {
            spec.response = response;
        }
        if let Some(tendon_percent) = self.tendon_percent {
            spec.tendon_percent = tendon_percent;
        }

        Ok(spec)
    }

    /// Output file stem for this muscle
    pub fn output_stem(&self, spec: &MuscleSpec) -> String {
        self.output_file
            .clone()
            .unwrap_or_else(|| sanitize_filename(&spec.name))
    }
}

/// Top-level configuration for generating a set of muscles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    /// Output directory for generated assets
    pub output_dir: String,

    /// Muscles to generate
    pub muscles: Vec<MuscleConfig>,
}

impl RigConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MuscleGenError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            MuscleGenError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            MuscleGenError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            MuscleGenError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve every muscle into a spec, failing on the first invalid entry
    pub fn specs(&self) -> Result<Vec<MuscleSpec>> {
        Ok(self.outputs()?.into_iter().map(|(spec, _)| spec).collect())
    }

    /// Resolve every muscle into a spec paired with its output file stem
    ///
    /// Two muscles writing to the same stem would overwrite each other's
    /// files, so a repeated stem is a configuration error.
    pub fn outputs(&self) -> Result<Vec<(MuscleSpec, String)>> {
        let mut seen = HashMap::new();
        let mut outputs = Vec::with_capacity(self.muscles.len());

        for (idx, muscle) in self.muscles.iter().enumerate() {
            let spec = muscle.to_spec()?;
            let stem = muscle.output_stem(&spec);
            if let Some(first) = seen.insert(stem.clone(), idx) {
                return Err(MuscleGenError::ConfigError(format!(
                    "Muscles {} and {} both write to '{}'; set a distinct name or output_file",
                    first, idx, stem
                )));
            }
            outputs.push((spec, stem));
        }

        Ok(outputs)
    }
}

/// Replace characters that are awkward in file names
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_config() {
        let config = MuscleConfig {
            preset: Some("Triceps".to_string()),
            joint_distance: Some(2.0),
            bulge_factor: Some(1.6),
            ..Default::default()
        };
        let spec = config.to_spec().unwrap();

        assert_eq!(spec.name, "Triceps");
        assert_eq!(spec.profile.length, 2.0 * 1.10);
        assert_eq!(spec.bulge_factor, 1.6);
        assert_eq!(spec.response, ResponseKind::Extensor);
        assert_eq!(spec.tendon_percent, 15.0);
    }

    #[test]
    fn test_explicit_config() {
        let json = r#"{
            "name": "Forearm",
            "length": 0.8,
            "base_radius": 0.2,
            "radial_segments": 12,
            "longitudinal_rings": 8,
            "response": "DUAL"
        }"#;
        let config: MuscleConfig = serde_json::from_str(json).unwrap();
        let spec = config.to_spec().unwrap();

        assert_eq!(spec.name, "Forearm");
        assert_eq!(spec.profile.radial_segments, 12);
        assert_eq!(spec.profile.shape_exponent, DEFAULT_SHAPE_EXPONENT);
        assert_eq!(spec.response, ResponseKind::Dual);
    }

    #[test]
    fn test_incomplete_config() {
        let preset_without_distance = MuscleConfig {
            preset: Some("Biceps".to_string()),
            ..Default::default()
        };
        assert!(preset_without_distance.to_spec().is_err());

        let radius_only = MuscleConfig {
            base_radius: Some(0.3),
            ..Default::default()
        };
        assert!(radius_only.to_spec().is_err());

        let bad_segments = MuscleConfig {
            length: Some(1.0),
            base_radius: Some(0.3),
            radial_segments: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            bad_segments.to_spec(),
            Err(MuscleGenError::InvalidParameter { name: "radial_segments", .. })
        ));
    }

    #[test]
    fn test_rig_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rig.json");
        let config = RigConfig {
            output_dir: "out".to_string(),
            muscles: vec![MuscleConfig {
                preset: Some("Deltoid".to_string()),
                joint_distance: Some(1.2),
                ..Default::default()
            }],
        };

        config.to_file(&path).unwrap();
        let loaded = RigConfig::from_file(&path).unwrap();

        assert_eq!(loaded.muscles, config.muscles);
        assert_eq!(loaded.specs().unwrap()[0].name, "Deltoid");
    }

    #[test]
    fn test_duplicate_output_stems_rejected() {
        let biceps = |distance| MuscleConfig {
            preset: Some("Biceps".to_string()),
            joint_distance: Some(distance),
            ..Default::default()
        };
        let config = RigConfig {
            output_dir: "out".to_string(),
            muscles: vec![biceps(1.0), biceps(2.0)],
        };

        assert!(matches!(
            config.specs(),
            Err(MuscleGenError::ConfigError(_))
        ));
        assert!(matches!(
            config.outputs(),
            Err(MuscleGenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_distinct_output_stems() {
        let config = RigConfig {
            output_dir: "out".to_string(),
            muscles: vec![
                MuscleConfig {
                    name: Some("Biceps L".to_string()),
                    preset: Some("Biceps".to_string()),
                    joint_distance: Some(1.0),
                    ..Default::default()
                },
                MuscleConfig {
                    preset: Some("Biceps".to_string()),
                    joint_distance: Some(2.0),
                    output_file: Some("biceps_right".to_string()),
                    ..Default::default()
                },
            ],
        };

        let outputs = config.outputs().unwrap();
        assert_eq!(outputs[0].1, "Biceps_L");
        assert_eq!(outputs[1].1, "biceps_right");
        assert_eq!(outputs[1].0.name, "Biceps");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Dual Biceps"), "Dual_Biceps");
        assert_eq!(sanitize_filename("arm/l.001"), "arm_l_001");
    }
}
