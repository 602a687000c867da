//! # Bill of Materials
//!
//! Hardware selection for protected rooms. Each vendor is a [`BomProvider`]
//! registered by name in an [`OemRegistry`]. A room's BOM comes from the
//! provider named by `room.oem` when that vendor lists parts for the room's
//! agent. Otherwise it comes from the fallback vendor, or from the first
//! registered vendor for the agent when the fallback does not supply it.
//!
//! Only agents the registered vendors supply get a parts list. Every other
//! room gets a single placeholder line saying no BOM is defined.
//!
//! ## Example
//!
//! ```rust
//! use flood_core::bom::{derive_room_bom, OemRegistry};
//! use flood_core::room::Room;
//!
//! let oems = OemRegistry::standard();
//! let room = Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0);
//! let entry = derive_room_bom(&room, 139.2, &oems);
//! assert_eq!(entry.items[0].part_number, "889104");
//! ```

pub mod aggregate;
pub mod catalog;
pub mod hygood;
pub mod kidde;
pub mod report;
pub mod viking;

pub use aggregate::{aggregate, ProjectBom};
pub use catalog::VendorCatalog;
pub use report::{derive_bom, BomReport};

use serde::{Deserialize, Serialize};

use crate::room::{ActuationType, Room};

/// Viking vendor name
pub const VIKING: &str = "Viking";

/// Kidde vendor name
pub const KIDDE: &str = "Kidde";

/// Tyco Hygood vendor name
pub const TYCO_HYGOOD: &str = "Tyco Hygood";

/// One line of a parts list.
///
/// ## JSON Example
///
/// ```json
/// { "part_number": "889099", "description": "Viking FM-200 Cylinder", "qty": 1, "unit": "pcs" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomItem {
    pub part_number: String,
    pub description: String,
    /// `None` only on the "no BOM defined" placeholder line
    pub qty: Option<u32>,
    pub unit: String,
}

impl BomItem {
    /// A counted line in pieces
    pub fn pcs(part_number: impl Into<String>, description: impl Into<String>, qty: u32) -> Self {
        BomItem {
            part_number: part_number.into(),
            description: description.into(),
            qty: Some(qty),
            unit: "pcs".to_string(),
        }
    }

    /// Placeholder line for an agent with no vendor catalog
    pub fn undefined_for(agent: &str) -> Self {
        BomItem {
            part_number: "-".to_string(),
            description: format!("No BOM defined for {}.", agent),
            qty: None,
            unit: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.qty.is_none()
    }
}

/// One room's derived BOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEntry {
    pub room: String,
    /// The room's OEM as entered; `None` when no BOM is defined
    pub oem: Option<String>,
    /// Vendor whose parts are listed. Differs from `oem` after a fallback.
    pub vendor: Option<String>,
    pub agent: String,
    pub items: Vec<BomItem>,
}

impl BomEntry {
    /// Whether this entry lists vendor parts and so counts towards the
    /// project BOM
    pub fn is_vendor_bom(&self) -> bool {
        self.vendor.is_some()
    }
}

/// A vendor's hardware selection rules.
pub trait BomProvider: Send + Sync {
    /// Vendor name rooms refer to
    fn oem(&self) -> &str;

    /// Agent the vendor's parts are listed for
    fn agent(&self) -> &str;

    /// Parts for a room needing `required_kg` of agent. Every line has
    /// quantity 1.
    fn select(&self, required_kg: f64, actuation: &ActuationType) -> Vec<BomItem>;
}

/// Vendor name → provider mapping with a fallback vendor.
pub struct OemRegistry {
    providers: Vec<Box<dyn BomProvider>>,
    fallback: usize,
}

impl OemRegistry {
    /// Registry holding only `fallback`, which also answers for every
    /// unregistered vendor name
    pub fn with_fallback(fallback: impl BomProvider + 'static) -> Self {
        OemRegistry {
            providers: vec![Box::new(fallback)],
            fallback: 0,
        }
    }

    /// Viking (fallback), Kidde and Tyco Hygood FM-200 catalogs
    pub fn standard() -> Self {
        let mut registry = OemRegistry::with_fallback(viking::CATALOG);
        registry.register(kidde::CATALOG);
        registry.register(hygood::CATALOG);
        registry
    }

    /// Add a vendor, replacing any provider with the same name
    pub fn register(&mut self, provider: impl BomProvider + 'static) {
        let boxed: Box<dyn BomProvider> = Box::new(provider);
        match self.providers.iter().position(|p| p.oem() == boxed.oem()) {
            Some(idx) => self.providers[idx] = boxed,
            None => self.providers.push(boxed),
        }
    }

    pub fn get(&self, oem: &str) -> Option<&dyn BomProvider> {
        self.providers
            .iter()
            .find(|p| p.oem() == oem)
            .map(|p| p.as_ref())
    }

    pub fn fallback(&self) -> &dyn BomProvider {
        self.providers[self.fallback].as_ref()
    }

    /// Provider listing parts for `agent`, preferring the vendor named `oem`.
    ///
    /// A vendor named `oem` that lists another agent's parts is passed over.
    /// The fallback vendor answers next when it supplies `agent`, then the
    /// first registered vendor that does. `None` when no vendor supplies it.
    pub fn provider_for(&self, agent: &str, oem: &str) -> Option<&dyn BomProvider> {
        if let Some(named) = self.get(oem).filter(|p| p.agent() == agent) {
            return Some(named);
        }

        let fallback = self.fallback();
        let chosen = if fallback.agent() == agent {
            fallback
        } else {
            self.providers
                .iter()
                .map(|p| p.as_ref())
                .find(|p| p.agent() == agent)?
        };
        tracing::warn!(
            oem = %oem,
            agent = %agent,
            vendor = chosen.oem(),
            "OEM does not supply agent, using fallback vendor"
        );
        Some(chosen)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.oem())
    }
}

impl std::fmt::Debug for OemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OemRegistry")
            .field("providers", &self.names().collect::<Vec<_>>())
            .field("fallback", &self.fallback().oem())
            .finish()
    }
}

/// Derive one room's BOM from its required agent mass.
pub fn derive_room_bom(room: &Room, required_kg: f64, oems: &OemRegistry) -> BomEntry {
    let Some(provider) = oems.provider_for(&room.agent, &room.oem) else {
        return BomEntry {
            room: room.name.clone(),
            oem: None,
            vendor: None,
            agent: room.agent.clone(),
            items: vec![BomItem::undefined_for(&room.agent)],
        };
    };

    let items = provider.select(required_kg, &room.actuation_type);
    tracing::debug!(room = %room.name, vendor = provider.oem(), lines = items.len(), "BOM derived");

    BomEntry {
        room: room.name.clone(),
        oem: Some(room.oem.clone()),
        vendor: Some(provider.oem().to_string()),
        agent: room.agent.clone(),
        items,
    }
}
