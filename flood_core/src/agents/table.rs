//! Agent Concentration Tables
//!
//! An [`AgentTable`] maps design concentration (%) to mass factor (kg/m³).
//! Halocarbon agents read it through [`AgentTable::interpolate`]; high
//! pressure CO2 reads it through [`AgentTable::exact`] and never
//! interpolates.
//!
//! ## Interpolation policy
//!
//! - target ≤ first breakpoint → first factor (no extrapolation)
//! - target ≥ last breakpoint → last factor
//! - otherwise linear between the first closed segment `[x0, x1]` that
//!   contains the target

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One row of an agent table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Design concentration (%)
    pub concentration_pct: f64,
    /// Agent mass per protected volume (kg/m³)
    pub factor_kg_m3: f64,
}

impl Breakpoint {
    pub const fn new(concentration_pct: f64, factor_kg_m3: f64) -> Self {
        Breakpoint {
            concentration_pct,
            factor_kg_m3,
        }
    }
}

/// Immutable concentration → mass-factor table, sorted ascending.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "concentration_pct": 6.25, "factor_kg_m3": 0.47 },
///   { "concentration_pct": 7.0,  "factor_kg_m3": 0.58 }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct AgentTable {
    points: Vec<Breakpoint>,
}

impl AgentTable {
    /// Build a table, sorting breakpoints by concentration.
    ///
    /// Empty tables are accepted here and rejected by [`interpolate`]
    /// so the fault is reported against the room that hits it.
    ///
    /// [`interpolate`]: AgentTable::interpolate
    pub fn new(mut points: Vec<Breakpoint>) -> Self {
        points.sort_by(|a, b| a.concentration_pct.total_cmp(&b.concentration_pct));
        AgentTable { points }
    }

    /// Build from `(concentration, factor)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        AgentTable::new(pairs.iter().map(|&(c, f)| Breakpoint::new(c, f)).collect())
    }

    /// Breakpoints in ascending concentration order
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mass factor at `concentration`, clamped to the table ends.
    ///
    /// # Errors
    ///
    /// [`CalcError::InterpolationRange`] when no segment brackets the
    /// target. With the clamp rules this only happens for an empty table or
    /// a NaN concentration.
    pub fn interpolate(&self, concentration: f64) -> CalcResult<f64> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(CalcError::interpolation_range(
                    concentration,
                    "agent table has no breakpoints",
                ))
            }
        };

        if concentration <= first.concentration_pct {
            return Ok(first.factor_kg_m3);
        }
        if concentration >= last.concentration_pct {
            return Ok(last.factor_kg_m3);
        }

        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if lo.concentration_pct <= concentration && concentration <= hi.concentration_pct {
                let span = hi.concentration_pct - lo.concentration_pct;
                return Ok(lo.factor_kg_m3
                    + (concentration - lo.concentration_pct) * (hi.factor_kg_m3 - lo.factor_kg_m3)
                        / span);
            }
        }

        Err(CalcError::interpolation_range(
            concentration,
            "no breakpoint pair brackets the design concentration",
        ))
    }

    /// Factor stored under exactly `concentration`, if any.
    pub fn exact(&self, concentration: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.concentration_pct == concentration)
            .map(|p| p.factor_kg_m3)
    }
}

impl From<Vec<Breakpoint>> for AgentTable {
    fn from(points: Vec<Breakpoint>) -> Self {
        AgentTable::new(points)
    }
}

impl From<AgentTable> for Vec<Breakpoint> {
    fn from(table: AgentTable) -> Self {
        table.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm200() -> AgentTable {
        AgentTable::from_pairs(&[(6.25, 0.47), (7.00, 0.58), (8.00, 0.70), (9.00, 0.85), (10.00, 1.00)])
    }

    fn novec() -> AgentTable {
        AgentTable::from_pairs(&[(4.5, 0.41), (5.0, 0.47), (5.5, 0.52), (6.0, 0.57), (6.5, 0.62), (7.0, 0.67)])
    }

    #[test]
    fn test_interpolate_between_breakpoints() {
        let factor = novec().interpolate(5.25).unwrap();
        assert!((factor - 0.495).abs() < 1e-12, "got {}", factor);
    }

    #[test]
    fn test_exact_breakpoint_hit() {
        assert_eq!(fm200().interpolate(7.0).unwrap(), 0.58);
        assert_eq!(fm200().interpolate(9.0).unwrap(), 0.85);
    }

    #[test]
    fn test_clamp_at_ends() {
        let table = fm200();
        assert_eq!(table.interpolate(5.0).unwrap(), 0.47);
        assert_eq!(table.interpolate(6.25).unwrap(), 0.47);
        assert_eq!(table.interpolate(12.0).unwrap(), 1.00);
        assert_eq!(table.interpolate(10.0).unwrap(), 1.00);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let table = AgentTable::from_pairs(&[(8.0, 0.70), (6.25, 0.47), (7.0, 0.58)]);
        let concs: Vec<f64> = table.breakpoints().iter().map(|p| p.concentration_pct).collect();
        assert_eq!(concs, vec![6.25, 7.0, 8.0]);
        assert!((table.interpolate(7.5).unwrap() - 0.64).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_table_clamps() {
        let table = AgentTable::from_pairs(&[(34.0, 0.612)]);
        assert_eq!(table.interpolate(20.0).unwrap(), 0.612);
        assert_eq!(table.interpolate(50.0).unwrap(), 0.612);
    }

    #[test]
    fn test_empty_table_is_range_error() {
        let err = AgentTable::new(Vec::new()).interpolate(7.0).unwrap_err();
        assert_eq!(err.error_code(), "INTERPOLATION_RANGE");
    }

    #[test]
    fn test_nan_concentration_is_range_error() {
        let err = fm200().interpolate(f64::NAN).unwrap_err();
        assert_eq!(err.error_code(), "INTERPOLATION_RANGE");
    }

    #[test]
    fn test_exact_lookup() {
        let table = AgentTable::from_pairs(&[(34.0, 0.612)]);
        assert_eq!(table.exact(34.0), Some(0.612));
        assert_eq!(table.exact(34.5), None);
    }

    #[test]
    fn test_deserialize_sorts() {
        let json = r#"[
            {"concentration_pct": 7.0, "factor_kg_m3": 0.58},
            {"concentration_pct": 6.25, "factor_kg_m3": 0.47}
        ]"#;
        let table: AgentTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.breakpoints()[0].concentration_pct, 6.25);
    }
}
