//! Vendor Catalog Tables
//!
//! A [`VendorCatalog`] is the declarative form of one vendor's hardware
//! selection rules. Every built-in vendor is an instance of it; a vendor
//! whose rules do not fit this shape implements [`BomProvider`] directly.
//!
//! Selected parts, in order:
//!
//! 1. cylinder - smallest band whose `max_kg` ≥ required mass, else the
//!    oversize cylinder
//! 2. cylinder valve
//! 3. actuator for the actuation type (unrecognized → electrical)
//! 4. discharge parts (hose and/or nozzle)

use crate::bom::{BomItem, BomProvider};
use crate::room::ActuationType;

/// A catalog part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub part_number: &'static str,
    pub description: &'static str,
}

impl Part {
    pub const fn new(part_number: &'static str, description: &'static str) -> Self {
        Part {
            part_number,
            description,
        }
    }

    fn item(self) -> BomItem {
        BomItem::pcs(self.part_number, self.description, 1)
    }
}

/// Cylinder covering required masses up to and including `max_kg`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderBand {
    pub max_kg: f64,
    pub cylinder: Part,
}

impl CylinderBand {
    pub const fn new(max_kg: f64, part_number: &'static str, description: &'static str) -> Self {
        CylinderBand {
            max_kg,
            cylinder: Part::new(part_number, description),
        }
    }
}

/// Actuator parts by actuation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actuators {
    pub electrical: Part,
    pub pneumatic: Part,
    pub manual: Part,
}

/// One vendor's cylinder bands and fixed parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VendorCatalog {
    pub oem: &'static str,
    /// Agent these parts are listed for
    pub agent: &'static str,
    /// Ascending by `max_kg`
    pub cylinders: &'static [CylinderBand],
    /// Used when the required mass exceeds every band
    pub oversize_cylinder: Part,
    pub valve: Part,
    pub actuators: Actuators,
    pub discharge: &'static [Part],
}

impl VendorCatalog {
    pub fn cylinder_for(&self, required_kg: f64) -> Part {
        self.cylinders
            .iter()
            .find(|band| required_kg <= band.max_kg)
            .map(|band| band.cylinder)
            .unwrap_or(self.oversize_cylinder)
    }

    pub fn actuator_for(&self, actuation: &ActuationType) -> Part {
        match actuation {
            ActuationType::Electrical => self.actuators.electrical,
            ActuationType::Pneumatic => self.actuators.pneumatic,
            ActuationType::Manual => self.actuators.manual,
            ActuationType::Other(other) => {
                tracing::warn!(
                    oem = self.oem,
                    actuation = %other,
                    "unrecognized actuation type, using electrical actuator"
                );
                self.actuators.electrical
            }
        }
    }
}

impl BomProvider for VendorCatalog {
    fn oem(&self) -> &str {
        self.oem
    }

    fn agent(&self) -> &str {
        self.agent
    }

    fn select(&self, required_kg: f64, actuation: &ActuationType) -> Vec<BomItem> {
        let mut items = Vec::with_capacity(3 + self.discharge.len());
        items.push(self.cylinder_for(required_kg).item());
        items.push(self.valve.item());
        items.push(self.actuator_for(actuation).item());
        items.extend(self.discharge.iter().map(|p| p.item()));
        items
    }
}
