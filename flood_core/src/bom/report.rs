//! Project BOM report
//!
//! Derives every room's BOM and the aggregated project BOM. Rooms whose agent
//! quantity cannot be calculated are listed in `failures` and skipped.

use serde::{Deserialize, Serialize};

use crate::agents::AgentCatalog;
use crate::bom::{derive_room_bom, BomEntry, OemRegistry, ProjectBom};
use crate::calculations::agent::calculate;
use crate::calculations::RoomFailure;
use crate::room::Room;

/// Room-by-room BOMs plus the project total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomReport {
    /// One entry per successful room, in input order
    pub entries: Vec<BomEntry>,
    /// Sum over entries that list vendor parts
    pub project: ProjectBom,
    pub failures: Vec<RoomFailure>,
}

/// Derive BOMs for every room.
pub fn derive_bom<'a>(
    rooms: impl IntoIterator<Item = &'a Room>,
    catalog: &AgentCatalog,
    oems: &OemRegistry,
) -> BomReport {
    let mut report = BomReport::default();

    for room in rooms {
        match calculate(room, catalog) {
            Ok(result) => report
                .entries
                .push(derive_room_bom(room, result.required_mass_kg, oems)),
            Err(error) => {
                tracing::warn!(room = %room.name, code = error.error_code(), "BOM skipped: {}", error);
                report.failures.push(RoomFailure {
                    room: room.name.clone(),
                    error,
                });
            }
        }
    }

    for entry in report.entries.iter().filter(|e| e.is_vendor_bom()) {
        report.project.extend(&entry.items);
    }

    report
}
