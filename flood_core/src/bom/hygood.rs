//! Tyco Hygood FM-200 catalog
//!
//! Hygood ships a flexible discharge hose with each cylinder, so its BOM has
//! five lines where the other vendors have four.

use crate::agents::FM200;
use crate::bom::catalog::{Actuators, CylinderBand, Part, VendorCatalog};
use crate::bom::TYCO_HYGOOD;

pub const CATALOG: VendorCatalog = VendorCatalog {
    oem: TYCO_HYGOOD,
    agent: FM200,
    cylinders: &[
        CylinderBand::new(8.0, "303.205.015", "Hygood FM-200 8L Cylinder"),
        CylinderBand::new(16.0, "303.205.016", "Hygood FM-200 16L Cylinder"),
        CylinderBand::new(32.0, "303.205.017", "Hygood FM-200 32L Cylinder"),
        CylinderBand::new(52.0, "303.205.018", "Hygood FM-200 52L Cylinder"),
        CylinderBand::new(106.0, "303.205.019", "Hygood FM-200 106L Cylinder"),
        CylinderBand::new(147.0, "303.205.020", "Hygood FM-200 147L Cylinder"),
        CylinderBand::new(180.0, "303.205.021", "Hygood FM-200 180L Cylinder"),
    ],
    oversize_cylinder: Part::new("303.205.022", "Hygood FM-200 343L Cylinder"),
    valve: Part::new("302.209.002", "Cylinder Valve (2\u{201d} for 8-180L)"),
    actuators: Actuators {
        electrical: Part::new("304.205.010", "Electrical Actuator (Suppression Diode)"),
        pneumatic: Part::new("304.209.004", "Pneumatic Actuator"),
        manual: Part::new("304.209.002", "Manual Actuator"),
    },
    discharge: &[
        Part::new("306.207.003", "Flexible Discharge Hose (2\u{201d})"),
        Part::new("306.205.005", "Discharge Nozzle (typical)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::BomProvider;
    use crate::room::ActuationType;

    #[test]
    fn test_cylinder_bands() {
        let cases = [
            (0.5, "303.205.015"),
            (8.0, "303.205.015"),
            (12.0, "303.205.016"),
            (32.0, "303.205.017"),
            (50.0, "303.205.018"),
            (100.0, "303.205.019"),
            (147.0, "303.205.020"),
            (175.0, "303.205.021"),
            (181.0, "303.205.022"),
        ];
        for (kg, part) in cases {
            assert_eq!(CATALOG.cylinder_for(kg).part_number, part, "at {} kg", kg);
        }
    }

    #[test]
    fn test_five_line_bom() {
        let items = CATALOG.select(60.0, &ActuationType::Pneumatic);
        let parts: Vec<&str> = items.iter().map(|i| i.part_number.as_str()).collect();
        assert_eq!(
            parts,
            vec!["303.205.019", "302.209.002", "304.209.004", "306.207.003", "306.205.005"]
        );
    }
}
