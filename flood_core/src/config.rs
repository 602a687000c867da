//! # Calculation Configuration
//!
//! The static tables the engine consults: the agent catalog and the vendor
//! registry. They are built once and never change for the life of the
//! process.
//!
//! ```rust
//! use flood_core::config::CalcConfig;
//!
//! let config = CalcConfig::standard();
//! assert_eq!(config.agents.len(), 3);
//! ```

use once_cell::sync::Lazy;

use crate::agents::AgentCatalog;
use crate::bom::{derive_bom, BomReport, OemRegistry};
use crate::calculations::{summarize, CalculationSummary};
use crate::room::Room;

static STANDARD: Lazy<CalcConfig> = Lazy::new(CalcConfig::default);

/// Agent tables plus vendor catalogs.
#[derive(Debug)]
pub struct CalcConfig {
    pub agents: AgentCatalog,
    pub oems: OemRegistry,
}

impl CalcConfig {
    /// Process-wide built-in configuration
    pub fn standard() -> &'static CalcConfig {
        &STANDARD
    }

    /// Built-in vendor catalogs with a caller-supplied agent catalog
    pub fn with_agents(agents: AgentCatalog) -> Self {
        CalcConfig {
            agents,
            oems: OemRegistry::standard(),
        }
    }

    /// Per-agent subtotals and grand total for `rooms`
    pub fn summarize<'a>(&self, rooms: impl IntoIterator<Item = &'a Room>) -> CalculationSummary {
        summarize(rooms, &self.agents)
    }

    /// Room-by-room and project BOMs for `rooms`
    pub fn bill_of_materials<'a>(&self, rooms: impl IntoIterator<Item = &'a Room>) -> BomReport {
        derive_bom(rooms, &self.agents, &self.oems)
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig::with_agents(AgentCatalog::standard())
    }
}
