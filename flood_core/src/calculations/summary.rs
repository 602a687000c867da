//! # Project Calculation Summary
//!
//! Runs the per-room calculation over a set of rooms and groups the results
//! by agent. A room that fails is recorded in `failures` and the remaining
//! rooms are still calculated.

use serde::{Deserialize, Serialize};

use crate::agents::AgentCatalog;
use crate::calculations::agent::{calculate, AgentResult};
use crate::errors::CalcError;
use crate::room::Room;

/// One room's successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCalculation {
    pub room: String,
    pub design_concentration: f64,
    pub result: AgentResult,
}

/// All successful rooms for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentGroup {
    pub agent: String,
    pub rooms: Vec<RoomCalculation>,
    /// Sum of `required_mass_kg` over `rooms`
    pub subtotal_kg: f64,
}

/// A room that could not be processed, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomFailure {
    pub room: String,
    pub error: CalcError,
}

/// Calculation results for a whole project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationSummary {
    /// Groups in order of each agent's first appearance
    pub groups: Vec<AgentGroup>,
    /// Sum of all group subtotals
    pub grand_total_kg: f64,
    pub failures: Vec<RoomFailure>,
}

impl CalculationSummary {
    /// Group for `agent`, if any room using it succeeded
    pub fn group(&self, agent: &str) -> Option<&AgentGroup> {
        self.groups.iter().find(|g| g.agent == agent)
    }

    /// Result for the named room, if it succeeded
    pub fn room(&self, name: &str) -> Option<&RoomCalculation> {
        self.groups
            .iter()
            .flat_map(|g| g.rooms.iter())
            .find(|r| r.room == name)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Calculate every room and group the results by agent.
pub fn summarize<'a>(
    rooms: impl IntoIterator<Item = &'a Room>,
    catalog: &AgentCatalog,
) -> CalculationSummary {
    let mut summary = CalculationSummary::default();

    for room in rooms {
        let result = match calculate(room, catalog) {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(room = %room.name, code = error.error_code(), "room calculation failed: {}", error);
                summary.failures.push(RoomFailure {
                    room: room.name.clone(),
                    error,
                });
                continue;
            }
        };

        let idx = match summary.groups.iter().position(|g| g.agent == room.agent) {
            Some(idx) => idx,
            None => {
                summary.groups.push(AgentGroup {
                    agent: room.agent.clone(),
                    rooms: Vec::new(),
                    subtotal_kg: 0.0,
                });
                summary.groups.len() - 1
            }
        };

        let group = &mut summary.groups[idx];
        group.subtotal_kg += result.required_mass_kg;
        group.rooms.push(RoomCalculation {
            room: room.name.clone(),
            design_concentration: room.design_concentration,
            result,
        });
    }

    summary.grand_total_kg = summary
        .groups
        .iter()
        .fold(0.0, |total, g| total + g.subtotal_kg);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{FM200, HIGH_PRESSURE_CO2};

    #[test]
    fn test_grouping_and_totals() {
        let catalog = AgentCatalog::standard();
        let rooms = vec![
            Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0),
            Room::new("Archive", 10.0, 10.0, 4.0, 34.0, 0.0, 20.0).with_agent(HIGH_PRESSURE_CO2),
            Room::new("UPS", 5.0, 4.0, 3.0, 7.0, 0.0, 20.0),
        ];

        let summary = summarize(&rooms, &catalog);
        assert!(!summary.has_failures());

        let agents: Vec<&str> = summary.groups.iter().map(|g| g.agent.as_str()).collect();
        assert_eq!(agents, vec![FM200, HIGH_PRESSURE_CO2]);

        let fm200 = summary.group(FM200).unwrap();
        assert_eq!(fm200.rooms.len(), 2);
        assert!((fm200.subtotal_kg - (139.2 + 34.8)).abs() < 1e-9);

        let co2 = summary.group(HIGH_PRESSURE_CO2).unwrap();
        assert!((co2.subtotal_kg - 244.8).abs() < 1e-9);

        assert!((summary.grand_total_kg - (174.0 + 244.8)).abs() < 1e-9);
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let catalog = AgentCatalog::standard();
        let rooms = vec![
            Room::new("Good", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0),
            Room::new("Bad", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0).with_agent("Halon 1301"),
            Room::new("AlsoGood", 5.0, 4.0, 3.0, 7.0, 0.0, 20.0),
        ];

        let summary = summarize(&rooms, &catalog);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].room, "Bad");
        assert_eq!(summary.failures[0].error, CalcError::unknown_agent("Halon 1301"));
        assert!(summary.room("Good").is_some());
        assert!(summary.room("AlsoGood").is_some());
        assert!(summary.room("Bad").is_none());
    }

    #[test]
    fn test_empty_project() {
        let summary = summarize(&Vec::<Room>::new(), &AgentCatalog::standard());
        assert!(summary.groups.is_empty());
        assert_eq!(summary.grand_total_kg, 0.0);
        assert!(summary.grand_total_kg.is_sign_positive());

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"grand_total_kg\":0.0"), "{}", json);
    }

    #[test]
    fn test_all_rooms_failed_total_is_zero() {
        let rooms = vec![Room::new("Bad", 1.0, 1.0, 1.0, 7.0, 0.0, 20.0).with_agent("Halon 1301")];
        let summary = summarize(&rooms, &AgentCatalog::standard());
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.grand_total_kg.is_sign_positive());
    }
}
