//! # Agent Quantity Calculations
//!
//! Each calculation follows the pattern:
//!
//! - input: a [`Room`](crate::room::Room) plus the agent catalog
//! - `*Result` - JSON-serializable results
//! - pure function returning `CalcResult<*Result>`
//!
//! ## Available Calculations
//!
//! - [`agent`] - Required agent mass for one room
//! - [`summary`] - Per-agent subtotals and grand total for a set of rooms

pub mod agent;
pub mod summary;

// Re-export commonly used types
pub use agent::{calculate, AgentResult};
pub use summary::{summarize, AgentGroup, CalculationSummary, RoomCalculation, RoomFailure};
