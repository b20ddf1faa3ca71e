//! Blend-weight response curves
//!
//! A host drives the bulge target with a scalar control signal, typically the
//! rotation difference between the two joints a muscle spans. The response
//! kind decides which sign of that signal makes the muscle bulge.

use crate::error::{MuscleGenError, Result};
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a muscle responds to the sign of its control signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseKind {
    /// Bulges on positive signal
    Flexor,
    /// Bulges on negative signal
    Extensor,
    /// Bulges on either sign
    Dual,
}

impl ResponseKind {
    /// All response kinds, in policy-table order
    pub const ALL: [ResponseKind; 3] = [
        ResponseKind::Flexor,
        ResponseKind::Extensor,
        ResponseKind::Dual,
    ];

    /// Map a raw control signal to an (unbounded above) blend weight
    pub fn weight(self, signal: f64) -> f64 {
        match self {
            ResponseKind::Flexor => signal.max(0.0),
            ResponseKind::Extensor => (-signal).max(0.0),
            ResponseKind::Dual => signal.abs(),
        }
    }

    /// Driver expression in terms of a signal variable named `a`
    pub fn expression(self) -> &'static str {
        match self {
            ResponseKind::Flexor => "max(a,0)",
            ResponseKind::Extensor => "max(-a,0)",
            ResponseKind::Dual => "abs(a)",
        }
    }

    /// Kind selected by a flexor/extensor toggle (`true` means extensor)
    pub fn from_extensor_flag(extensor: bool) -> Self {
        if extensor {
            ResponseKind::Extensor
        } else {
            ResponseKind::Flexor
        }
    }

    /// Upper-case name as used in presets and config files
    pub fn name(self) -> &'static str {
        match self {
            ResponseKind::Flexor => "FLEXOR",
            ResponseKind::Extensor => "EXTENSOR",
            ResponseKind::Dual => "DUAL",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResponseKind {
    type Err = MuscleGenError;

    fn from_str(s: &str) -> Result<Self> {
        ResponseKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                MuscleGenError::invalid("response", s, "expected FLEXOR, EXTENSOR or DUAL")
            })
    }
}

/// Blend weight for `signal` under `kind`
///
/// `FLEXOR(x) = max(x, 0)`, `EXTENSOR(x) = max(-x, 0)`, `DUAL(x) = |x|`.
/// Not clamped; see [`blend_weight`] for the `[0, 1]` form.
pub fn response_curve(signal: f64, kind: ResponseKind) -> f64 {
    kind.weight(signal)
}

/// Response weight clamped to `[0, 1]` for direct use as a shape blend
pub fn blend_weight(signal: f64, kind: ResponseKind) -> f64 {
    response_curve(signal, kind).clamp(0.0, 1.0)
}

/// Angle in radians between two joint orientations, in `[0, π]`
pub fn rotation_difference(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> f64 {
    a.angle_to(b)
}
