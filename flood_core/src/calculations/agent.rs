//! # Required Agent Calculation
//!
//! Required agent mass for one room:
//!
//! ```text
//! Halocarbon:  W = V × factor(C) × C_alt(h) × C_temp(T)
//! CO2:         W = V × factor     (exact table key, else 0.612)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use flood_core::agents::AgentCatalog;
//! use flood_core::calculations::agent::calculate;
//! use flood_core::room::Room;
//!
//! let catalog = AgentCatalog::standard();
//! let room = Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0);
//! let result = calculate(&room, &catalog).unwrap();
//! assert!((result.required_mass_kg - 139.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::agents::{AgentCatalog, AgentFamily, CO2_DEFAULT_FACTOR};
use crate::corrections::{altitude_correction, temperature_correction};
use crate::errors::CalcResult;
use crate::room::Room;

/// Results for one room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_mass_kg": 139.2,
///   "factor": 0.58,
///   "altitude_corr": 1.0,
///   "temp_corr": 1.0,
///   "volume_m3": 240.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    /// Agent mass to be stored (kg)
    pub required_mass_kg: f64,

    /// Mass factor at the design concentration (kg/m³)
    pub factor: f64,

    /// Altitude correction multiplier
    pub altitude_corr: f64,

    /// Temperature correction multiplier
    pub temp_corr: f64,

    /// Protected volume (m³)
    pub volume_m3: f64,
}

impl AgentResult {
    /// Result as the `(required, factor, altitude, temperature, volume)`
    /// tuple report collaborators consume
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.required_mass_kg,
            self.factor,
            self.altitude_corr,
            self.temp_corr,
            self.volume_m3,
        )
    }
}

/// Calculate the required agent mass for `room`.
///
/// # Errors
///
/// * [`CalcError::UnknownAgent`] - the room's agent is not in `catalog`
/// * [`CalcError::InvalidUnit`] - the room's unit flag is unrecognized
/// * [`CalcError::InterpolationRange`] - the agent's table is malformed
///
/// [`CalcError::UnknownAgent`]: crate::errors::CalcError::UnknownAgent
/// [`CalcError::InvalidUnit`]: crate::errors::CalcError::InvalidUnit
/// [`CalcError::InterpolationRange`]: crate::errors::CalcError::InterpolationRange
pub fn calculate(room: &Room, catalog: &AgentCatalog) -> CalcResult<AgentResult> {
    let agent = catalog.require(&room.agent)?;
    let volume_m3 = room.volume_m3()?;

    let result = match agent.family {
        AgentFamily::CarbonDioxide => {
            let factor = match agent.table.exact(room.design_concentration) {
                Some(factor) => factor,
                None => {
                    tracing::warn!(
                        room = %room.name,
                        concentration = room.design_concentration,
                        "no exact CO2 table entry, using default factor {}",
                        CO2_DEFAULT_FACTOR
                    );
                    CO2_DEFAULT_FACTOR
                }
            };
            AgentResult {
                required_mass_kg: volume_m3 * factor,
                factor,
                altitude_corr: 1.0,
                temp_corr: 1.0,
                volume_m3,
            }
        }
        AgentFamily::Halocarbon => {
            let factor = agent.table.interpolate(room.design_concentration)?;
            let altitude_corr = altitude_correction(room.altitude);
            let temp_corr = temperature_correction(room.temperature);
            AgentResult {
                required_mass_kg: volume_m3 * factor * altitude_corr * temp_corr,
                factor,
                altitude_corr,
                temp_corr,
                volume_m3,
            }
        }
    };

    tracing::debug!(
        room = %room.name,
        agent = %room.agent,
        required_kg = result.required_mass_kg,
        "agent quantity calculated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentDefinition, AgentTable, HIGH_PRESSURE_CO2, NOVEC_1230};
    use crate::errors::CalcError;
    use crate::units::UnitSystem;

    fn catalog() -> AgentCatalog {
        AgentCatalog::standard()
    }

    fn server_room() -> Room {
        Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0)
    }

    #[test]
    fn test_server_room_end_to_end() {
        let result = calculate(&server_room(), &catalog()).unwrap();
        assert_eq!(result.volume_m3, 240.0);
        assert_eq!(result.factor, 0.58);
        assert_eq!(result.altitude_corr, 1.0);
        assert_eq!(result.temp_corr, 1.0);
        assert!((result.required_mass_kg - 139.2).abs() < 1e-9);
    }

    #[test]
    fn test_halocarbon_corrections_applied() {
        let mut room = server_room();
        room.altitude = 1500.0;
        room.temperature = 30.0;
        let result = calculate(&room, &catalog()).unwrap();

        assert!(result.altitude_corr > 1.0);
        assert!((result.temp_corr - 1.13).abs() < 1e-12);
        let expected = 240.0 * 0.58 * result.altitude_corr * result.temp_corr;
        assert_eq!(result.required_mass_kg, expected);
    }

    #[test]
    fn test_novec_interpolated() {
        let room = Room::new("Lab", 5.0, 4.0, 3.0, 5.25, 0.0, 20.0).with_agent(NOVEC_1230);
        let result = calculate(&room, &catalog()).unwrap();
        assert!((result.factor - 0.495).abs() < 1e-12);
        assert!((result.required_mass_kg - 60.0 * 0.495).abs() < 1e-9);
    }

    #[test]
    fn test_co2_ignores_environment() {
        let base = Room::new("Archive", 10.0, 10.0, 4.0, 34.0, 0.0, 20.0).with_agent(HIGH_PRESSURE_CO2);
        let mut harsh = base.clone();
        harsh.altitude = 3000.0;
        harsh.temperature = 45.0;

        let a = calculate(&base, &catalog()).unwrap();
        let b = calculate(&harsh, &catalog()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.altitude_corr, 1.0);
        assert_eq!(a.temp_corr, 1.0);
        assert_eq!(a.factor, 0.612);
        assert_eq!(a.required_mass_kg, 400.0 * 0.612);
    }

    #[test]
    fn test_co2_exact_key_miss_uses_default() {
        let mut catalog = catalog();
        catalog.insert(AgentDefinition {
            name: HIGH_PRESSURE_CO2.to_string(),
            family: AgentFamily::CarbonDioxide,
            table: AgentTable::from_pairs(&[(34.0, 0.70), (50.0, 0.90)]),
            defaults: catalog.get(HIGH_PRESSURE_CO2).unwrap().defaults,
        });

        let hit = Room::new("A", 1.0, 1.0, 1.0, 50.0, 0.0, 20.0).with_agent(HIGH_PRESSURE_CO2);
        assert_eq!(calculate(&hit, &catalog).unwrap().factor, 0.90);

        // 42% lies between two keys but CO2 never interpolates
        let miss = Room::new("B", 1.0, 1.0, 1.0, 42.0, 0.0, 20.0).with_agent(HIGH_PRESSURE_CO2);
        assert_eq!(calculate(&miss, &catalog).unwrap().factor, CO2_DEFAULT_FACTOR);
    }

    #[test]
    fn test_unknown_agent() {
        let room = server_room().with_agent("Halon 1301");
        let err = calculate(&room, &catalog()).unwrap_err();
        assert_eq!(err, CalcError::unknown_agent("Halon 1301"));
    }

    #[test]
    fn test_invalid_unit() {
        let room = server_room().with_units(UnitSystem::Unrecognized("yards".to_string()));
        let err = calculate(&room, &catalog()).unwrap_err();
        assert_eq!(err, CalcError::invalid_unit("yards"));
    }

    #[test]
    fn test_malformed_table_surfaces() {
        let mut catalog = catalog();
        catalog.insert(AgentDefinition {
            name: "Empty".to_string(),
            family: AgentFamily::Halocarbon,
            table: AgentTable::new(Vec::new()),
            defaults: catalog.get(NOVEC_1230).unwrap().defaults,
        });
        let room = server_room().with_agent("Empty");
        let err = calculate(&room, &catalog).unwrap_err();
        assert_eq!(err.error_code(), "INTERPOLATION_RANGE");
    }

    #[test]
    fn test_deterministic() {
        let mut room = server_room().with_units(UnitSystem::Imperial);
        room.altitude = 812.5;
        room.temperature = 27.3;
        room.design_concentration = 8.4;
        let a = calculate(&room, &catalog()).unwrap();
        let b = calculate(&room, &catalog()).unwrap();
        assert_eq!(a.required_mass_kg.to_bits(), b.required_mass_kg.to_bits());
    }

    #[test]
    fn test_as_tuple_order() {
        let result = calculate(&server_room(), &catalog()).unwrap();
        let (req, factor, alt, temp, vol) = result.as_tuple();
        assert_eq!((factor, alt, temp, vol), (0.58, 1.0, 1.0, 240.0));
        assert_eq!(req, result.required_mass_kg);
    }
}
