//! # Room
//!
//! One protected enclosure. Rooms are plain data: the registry owns them and
//! the calculation and BOM stages read them without mutation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "ServerRoom",
//!   "length": 10.0,
//!   "width": 8.0,
//!   "height": 3.0,
//!   "units": "metric",
//!   "design_concentration": 7.0,
//!   "altitude": 0.0,
//!   "temperature": 20.0,
//!   "agent": "FM-200 (HFC-227ea)",
//!   "actuation_type": "Electrical",
//!   "oem": "Viking"
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::agents::{AgentDefinition, FM200};
use crate::bom::VIKING;
use crate::errors::CalcResult;
use crate::units::{volume_m3, UnitSystem};

/// How the suppression system is released.
///
/// Deserializes from any string, ignoring case and surrounding whitespace like
/// [`UnitSystem`]. Values other than the three known types are kept as
/// [`ActuationType::Other`] and select the electrical actuator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActuationType {
    #[default]
    Electrical,
    Pneumatic,
    Manual,
    Other(String),
}

impl ActuationType {
    pub fn as_str(&self) -> &str {
        match self {
            ActuationType::Electrical => "Electrical",
            ActuationType::Pneumatic => "Pneumatic",
            ActuationType::Manual => "Manual",
            ActuationType::Other(other) => other,
        }
    }
}

impl From<String> for ActuationType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "electrical" => ActuationType::Electrical,
            "pneumatic" => ActuationType::Pneumatic,
            "manual" => ActuationType::Manual,
            _ => ActuationType::Other(value),
        }
    }
}

impl From<&str> for ActuationType {
    fn from(value: &str) -> Self {
        ActuationType::from(value.to_string())
    }
}

impl From<ActuationType> for String {
    fn from(actuation: ActuationType) -> Self {
        actuation.as_str().to_string()
    }
}

impl fmt::Display for ActuationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_agent() -> String {
    FM200.to_string()
}

fn default_oem() -> String {
    VIKING.to_string()
}

/// A protected enclosure under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique key within a project
    pub name: String,

    /// Dimensions in the unit system given by `units`
    pub length: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default)]
    pub units: UnitSystem,

    /// Design concentration (%)
    pub design_concentration: f64,

    /// Site altitude (m above sea level)
    pub altitude: f64,

    /// Ambient temperature (°C)
    pub temperature: f64,

    /// Agent name, looked up in the agent catalog
    #[serde(default = "default_agent")]
    pub agent: String,

    /// Release method; only used for vendor BOM selection
    #[serde(default)]
    pub actuation_type: ActuationType,

    /// Hardware vendor; only used for vendor BOM selection
    #[serde(default = "default_oem")]
    pub oem: String,
}

impl Room {
    /// Create a metric FM-200 room with Viking electrical hardware.
    ///
    /// ```rust
    /// use flood_core::room::Room;
    ///
    /// let room = Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0);
    /// assert_eq!(room.volume_m3().unwrap(), 240.0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        design_concentration: f64,
        altitude: f64,
        temperature: f64,
    ) -> Self {
        Room {
            name: name.into(),
            length,
            width,
            height,
            units: UnitSystem::Metric,
            design_concentration,
            altitude,
            temperature,
            agent: default_agent(),
            actuation_type: ActuationType::Electrical,
            oem: default_oem(),
        }
    }

    /// Create a metric room pre-filled with the agent's default design
    /// concentration, temperature and altitude.
    pub fn with_agent_defaults(
        name: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        agent: &AgentDefinition,
    ) -> Self {
        let d = agent.defaults;
        Room::new(name, length, width, height, d.design_concentration, d.altitude, d.temperature)
            .with_agent(agent.name.clone())
    }

    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn with_actuation(mut self, actuation_type: impl Into<ActuationType>) -> Self {
        self.actuation_type = actuation_type.into();
        self
    }

    pub fn with_oem(mut self, oem: impl Into<String>) -> Self {
        self.oem = oem.into();
        self
    }

    /// Protected volume in cubic meters
    pub fn volume_m3(&self) -> CalcResult<f64> {
        volume_m3(self.length, self.width, self.height, &self.units)
    }
}
