//! Kidde FM-200 catalog

use crate::agents::FM200;
use crate::bom::catalog::{Actuators, CylinderBand, Part, VendorCatalog};
use crate::bom::KIDDE;

pub const CATALOG: VendorCatalog = VendorCatalog {
    oem: KIDDE,
    agent: FM200,
    cylinders: &[
        CylinderBand::new(40.0, "06-236204-001", "Kidde 40L FM-200 Cylinder"),
        CylinderBand::new(106.0, "06-236212-001", "Kidde 106L FM-200 Cylinder"),
    ],
    oversize_cylinder: Part::new("06-236214-001", "Kidde 180L FM-200 Cylinder"),
    valve: Part::new("06-236230-001", "Kidde FM-200 Valve"),
    actuators: Actuators {
        electrical: Part::new("06-236240-001", "Electrically Operated Actuator"),
        pneumatic: Part::new("06-236241-001", "Pneumatic Actuator"),
        manual: Part::new("06-236242-001", "Manual Actuator"),
    },
    discharge: &[Part::new("06-236250-001", "Discharge Nozzle")],
};
