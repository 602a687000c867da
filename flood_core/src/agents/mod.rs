//! # Agent Catalog
//!
//! Clean agent definitions: family, concentration table and the default
//! design inputs a new room is pre-filled with.
//!
//! ## Agents
//!
//! - **FM-200 (HFC-227ea)**: halocarbon, interpolated, vendor BOM catalogs
//! - **Novec 1230 (FK-5-1-12)**: halocarbon, interpolated, no vendor BOM
//! - **High Pressure CO2**: single-point table, exact lookup only
//!
//! ## Example
//!
//! ```rust
//! use flood_core::agents::{AgentCatalog, FM200};
//!
//! let catalog = AgentCatalog::standard();
//! let fm200 = catalog.get(FM200).unwrap();
//! assert_eq!(fm200.table.interpolate(7.0).unwrap(), 0.58);
//! ```

pub mod table;

pub use table::{AgentTable, Breakpoint};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// FM-200 agent name as it appears in project files
pub const FM200: &str = "FM-200 (HFC-227ea)";

/// Novec 1230 agent name as it appears in project files
pub const NOVEC_1230: &str = "Novec 1230 (FK-5-1-12)";

/// High pressure CO2 agent name as it appears in project files
pub const HIGH_PRESSURE_CO2: &str = "High Pressure CO2";

/// Mass factor used for CO2 when the design concentration is not a table key
pub const CO2_DEFAULT_FACTOR: f64 = 0.612;

/// How an agent's required mass is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentFamily {
    /// Interpolated factor with altitude and temperature corrections
    Halocarbon,
    /// Exact-key factor lookup, corrections fixed at 1.0
    CarbonDioxide,
}

impl AgentFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentFamily::Halocarbon => "Halocarbon",
            AgentFamily::CarbonDioxide => "Carbon Dioxide",
        }
    }
}

/// Default design inputs for a new room using this agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaults {
    /// Design concentration (%)
    pub design_concentration: f64,
    /// Ambient temperature (°C)
    pub temperature: f64,
    /// Site altitude (m above sea level)
    pub altitude: f64,
}

/// A registered agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Agent name, the key rooms refer to
    pub name: String,
    pub family: AgentFamily,
    pub table: AgentTable,
    pub defaults: AgentDefaults,
}

/// Ordered agent name → definition mapping.
///
/// Order is the registration order, which report collaborators use for
/// selection lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentCatalog {
    agents: Vec<AgentDefinition>,
}

impl AgentCatalog {
    /// Build a catalog. A later definition with the same name replaces the
    /// earlier one.
    pub fn new(definitions: impl IntoIterator<Item = AgentDefinition>) -> Self {
        let mut catalog = AgentCatalog::default();
        for def in definitions {
            catalog.insert(def);
        }
        catalog
    }

    /// The built-in FM-200, Novec 1230 and high pressure CO2 tables.
    pub fn standard() -> Self {
        let defaults = |design_concentration| AgentDefaults {
            design_concentration,
            temperature: 20.0,
            altitude: 0.0,
        };

        AgentCatalog::new([
            AgentDefinition {
                name: FM200.to_string(),
                family: AgentFamily::Halocarbon,
                table: AgentTable::from_pairs(&[
                    (6.25, 0.47),
                    (7.00, 0.58),
                    (8.00, 0.70),
                    (9.00, 0.85),
                    (10.00, 1.00),
                ]),
                defaults: defaults(7.0),
            },
            AgentDefinition {
                name: NOVEC_1230.to_string(),
                family: AgentFamily::Halocarbon,
                table: AgentTable::from_pairs(&[
                    (4.5, 0.41),
                    (5.0, 0.47),
                    (5.5, 0.52),
                    (6.0, 0.57),
                    (6.5, 0.62),
                    (7.0, 0.67),
                ]),
                defaults: defaults(5.0),
            },
            AgentDefinition {
                name: HIGH_PRESSURE_CO2.to_string(),
                family: AgentFamily::CarbonDioxide,
                table: AgentTable::from_pairs(&[(34.0, CO2_DEFAULT_FACTOR)]),
                defaults: defaults(34.0),
            },
        ])
    }

    /// Parse a catalog from a JSON array of agent definitions.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let defs: Vec<AgentDefinition> = serde_json::from_str(json)?;
        Ok(AgentCatalog::new(defs))
    }

    /// Add or replace a definition
    pub fn insert(&mut self, def: AgentDefinition) {
        match self.agents.iter_mut().find(|a| a.name == def.name) {
            Some(existing) => *existing = def,
            None => self.agents.push(def),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Look up an agent, failing with [`CalcError::UnknownAgent`].
    pub fn require(&self, name: &str) -> CalcResult<&AgentDefinition> {
        self.get(name).ok_or_else(|| CalcError::unknown_agent(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|a| a.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentDefinition> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// A design standard or manual cited by calculation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignReference {
    pub title: &'static str,
    pub url: &'static str,
}

/// References printed at the foot of calculation reports
pub const DESIGN_REFERENCES: [DesignReference; 3] = [
    DesignReference {
        title: "NFPA 2001 Standard",
        url: "https://www.nfpa.org/codes-and-standards/all-codes-and-standards/list-of-codes-and-standards/detail?code=2001",
    },
    DesignReference {
        title: "3M Novec 1230 Guide",
        url: "https://multimedia.3m.com/mws/media/753982O/3m-novec-1230-fire-protection-fluid-engineering-guide.pdf",
    },
    DesignReference {
        title: "Kidde CO2 Manual",
        url: "https://kidde-fenwal.com/Lists/TechnicalManuals/CO2_Total_Flooding_System_Design_Manual.pdf",
    },
];
