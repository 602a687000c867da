//! # Unit Types
//!
//! Room dimensions arrive either in meters or in feet. All downstream
//! quantities (volume, mass factor, required mass) are metric, so the only
//! conversion the engine performs is feet → meters on the linear dimensions.
//!
//! ## Example
//!
//! ```rust
//! use flood_core::units::{volume_m3, UnitSystem};
//!
//! let vol = volume_m3(10.0, 8.0, 3.0, &UnitSystem::Metric).unwrap();
//! assert_eq!(vol, 240.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Exact length of one international foot in meters
pub const FEET_TO_METERS: f64 = 0.3048;

// ============================================================================
// Unit System
// ============================================================================

/// Unit system flag carried by each room.
///
/// Deserializes from any string so that a single bad record does not reject a
/// whole project file. Unrecognized values are kept verbatim and reported as
/// [`CalcError::InvalidUnit`] when that room's volume is computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitSystem {
    /// Dimensions in meters
    #[default]
    Metric,
    /// Dimensions in feet
    Imperial,
    /// Anything else read from input
    Unrecognized(String),
}

impl UnitSystem {
    /// Short label for report headers
    pub fn as_str(&self) -> &str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Unrecognized(other) => other,
        }
    }
}

impl From<String> for UnitSystem {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "metric" => UnitSystem::Metric,
            "imperial" => UnitSystem::Imperial,
            _ => UnitSystem::Unrecognized(value),
        }
    }
}

impl From<UnitSystem> for String {
    fn from(units: UnitSystem) -> Self {
        units.as_str().to_string()
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Length and Volume Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * FEET_TO_METERS)
    }
}

impl CubicMeters {
    /// Volume of a rectangular enclosure
    pub fn of_box(length: Meters, width: Meters, height: Meters) -> Self {
        CubicMeters(length.0 * width.0 * height.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Volume
// ============================================================================

/// Room volume in cubic meters.
///
/// Each dimension is converted to meters first, then the product is taken.
/// Positivity is not checked: zero or negative dimensions produce a
/// non-positive volume.
///
/// # Errors
///
/// [`CalcError::InvalidUnit`] when `units` is not metric or imperial.
pub fn volume_m3(length: f64, width: f64, height: f64, units: &UnitSystem) -> CalcResult<f64> {
    let (length, width, height) = match units {
        UnitSystem::Metric => (Meters(length), Meters(width), Meters(height)),
        UnitSystem::Imperial => (Feet(length).into(), Feet(width).into(), Feet(height).into()),
        UnitSystem::Unrecognized(other) => return Err(CalcError::invalid_unit(other.clone())),
    };
    let vol = CubicMeters::of_box(length, width, height);
    Ok(vol.value())
}
