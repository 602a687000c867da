//! Project BOM aggregation
//!
//! Merges room BOMs into one parts list keyed by part number. For each part:
//!
//! - `qty` is the sum of every contributing quantity
//! - `description` and `unit` come from the last contributor
//!
//! Descriptions are not checked for consistency across contributors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bom::BomItem;

/// Aggregated parts list, keyed by part number.
///
/// Iteration is in part-number order; callers should not rely on any
/// particular order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectBom {
    parts: BTreeMap<String, BomItem>,
}

impl ProjectBom {
    pub fn new() -> Self {
        ProjectBom::default()
    }

    /// Merge one item into the accumulator for its part number
    pub fn add(&mut self, item: &BomItem) {
        match self.parts.get_mut(&item.part_number) {
            Some(acc) => {
                acc.qty = Some(acc.qty.unwrap_or(0).saturating_add(item.qty.unwrap_or(0)));
                acc.description = item.description.clone();
                acc.unit = item.unit.clone();
            }
            None => {
                self.parts.insert(item.part_number.clone(), item.clone());
            }
        }
    }

    pub fn extend<'a>(&mut self, items: impl IntoIterator<Item = &'a BomItem>) {
        for item in items {
            self.add(item);
        }
    }

    pub fn get(&self, part_number: &str) -> Option<&BomItem> {
        self.parts.get(part_number)
    }

    pub fn items(&self) -> impl Iterator<Item = &BomItem> {
        self.parts.values()
    }

    pub fn into_items(self) -> Vec<BomItem> {
        self.parts.into_values().collect()
    }

    /// Number of distinct part numbers
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Merge several room BOMs into one project BOM.
pub fn aggregate<'a, L>(lists: impl IntoIterator<Item = L>) -> ProjectBom
where
    L: IntoIterator<Item = &'a BomItem>,
{
    let mut project = ProjectBom::new();
    for list in lists {
        project.extend(list);
    }
    project
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_by_part_number() {
        let a = vec![
            BomItem::pcs("889099", "Viking FM-200 Cylinder", 1),
            BomItem::pcs("07-235068-001", "Cylinder Valve", 1),
        ];
        let b = vec![
            BomItem::pcs("889099", "Viking FM-200 Cylinder", 1),
            BomItem::pcs("07-235098-001", "Discharge Nozzle", 2),
        ];

        let project = aggregate([&a, &b]);
        assert_eq!(project.len(), 3);
        assert_eq!(project.get("889099").unwrap().qty, Some(2));
        assert_eq!(project.get("07-235068-001").unwrap().qty, Some(1));
        assert_eq!(project.get("07-235098-001").unwrap().qty, Some(2));
    }

    #[test]
    fn test_last_description_wins() {
        let a = vec![BomItem::pcs("X-1", "First description", 1)];
        let b = vec![BomItem {
            part_number: "X-1".to_string(),
            description: "Second description".to_string(),
            qty: Some(3),
            unit: "ea".to_string(),
        }];

        let project = aggregate([&a, &b]);
        let item = project.get("X-1").unwrap();
        assert_eq!(item.description, "Second description");
        assert_eq!(item.unit, "ea");
        assert_eq!(item.qty, Some(4));
    }

    #[test]
    fn test_quantity_saturates() {
        let a = vec![BomItem::pcs("X-1", "Part", u32::MAX)];
        let b = vec![BomItem::pcs("X-1", "Part", 5)];
        let project = aggregate([&a, &b]);
        assert_eq!(project.get("X-1").unwrap().qty, Some(u32::MAX));
    }

    #[test]
    fn test_empty_input() {
        let lists: Vec<Vec<BomItem>> = Vec::new();
        assert!(aggregate(&lists).is_empty());
    }
}
