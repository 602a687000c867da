//! Viking FM-200 catalog

use crate::agents::FM200;
use crate::bom::catalog::{Actuators, CylinderBand, Part, VendorCatalog};
use crate::bom::VIKING;

const CYLINDER: &str = "Viking FM-200 Cylinder";

pub const CATALOG: VendorCatalog = VendorCatalog {
    oem: VIKING,
    agent: FM200,
    cylinders: &[
        CylinderBand::new(52.0, "889099", CYLINDER),
        CylinderBand::new(106.0, "889101", CYLINDER),
        CylinderBand::new(147.0, "889104", CYLINDER),
        CylinderBand::new(180.0, "910509", CYLINDER),
    ],
    oversize_cylinder: Part::new("910510", CYLINDER),
    valve: Part::new("07-235068-001", "Cylinder Valve"),
    actuators: Actuators {
        electrical: Part::new("07-235070-001", "Electrically Operated Actuator"),
        pneumatic: Part::new("07-235070-002", "Pneumatic Actuator"),
        manual: Part::new("07-235070-003", "Manual Actuator"),
    },
    discharge: &[Part::new("07-235098-001", "Discharge Nozzle")],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::BomProvider;
    use crate::room::ActuationType;

    fn parts(kg: f64, actuation: ActuationType) -> Vec<String> {
        CATALOG
            .select(kg, &actuation)
            .into_iter()
            .map(|i| i.part_number)
            .collect()
    }

    #[test]
    fn test_cylinder_bands() {
        assert_eq!(CATALOG.cylinder_for(10.0).part_number, "889099");
        assert_eq!(CATALOG.cylinder_for(52.0).part_number, "889099");
        assert_eq!(CATALOG.cylinder_for(52.01).part_number, "889101");
        assert_eq!(CATALOG.cylinder_for(139.2).part_number, "889104");
        assert_eq!(CATALOG.cylinder_for(180.0).part_number, "910509");
        assert_eq!(CATALOG.cylinder_for(500.0).part_number, "910510");
    }

    #[test]
    fn test_item_shape() {
        assert_eq!(
            parts(40.0, ActuationType::Electrical),
            vec!["889099", "07-235068-001", "07-235070-001", "07-235098-001"]
        );
    }

    #[test]
    fn test_actuators() {
        assert_eq!(parts(40.0, ActuationType::Pneumatic)[2], "07-235070-002");
        assert_eq!(parts(40.0, ActuationType::Manual)[2], "07-235070-003");
        assert_eq!(parts(40.0, ActuationType::from("Hydraulic"))[2], "07-235070-001");
    }
}
