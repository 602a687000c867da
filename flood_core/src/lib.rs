//! # flood_core - Clean Agent Flooding Calculation Engine
//!
//! `flood_core` estimates the mass of clean fire-suppression agent needed to
//! flood protected rooms and derives the matching vendor bill of materials.
//! All inputs and outputs are JSON-serializable so editors, importers and
//! report generators can sit on top of it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculation is a pure function of a room and the
//!   static configuration; only the room registry holds state
//! - **Reproducible**: identical inputs give bit-identical outputs
//! - **Isolated failures**: one bad room never aborts a project-wide run
//!
//! ## Quick Start
//!
//! ```rust
//! use flood_core::config::CalcConfig;
//! use flood_core::project::Project;
//! use flood_core::room::Room;
//!
//! let mut project = Project::new("John Engineer", "25-001", "Acme Data");
//! project.add_room(Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0)).unwrap();
//!
//! let config = CalcConfig::standard();
//! let summary = config.summarize(&project.rooms);
//! assert!((summary.grand_total_kg - 139.2).abs() < 1e-9);
//!
//! let bom = config.bill_of_materials(&project.rooms);
//! assert_eq!(bom.project.get("889104").unwrap().qty, Some(1));
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit system flag and volume in cubic meters
//! - [`agents`] - Agent catalog, concentration tables, interpolation
//! - [`corrections`] - Altitude and temperature correction factors
//! - [`calculations`] - Required agent mass per room and per project
//! - [`bom`] - Vendor catalogs, BOM derivation and aggregation
//! - [`registry`] - Room collection with unique names
//! - [`project`] - Project container and metadata
//! - [`config`] - Static agent and vendor configuration
//! - [`errors`] - Structured error types

pub mod agents;
pub mod bom;
pub mod calculations;
pub mod config;
pub mod corrections;
pub mod errors;
pub mod project;
pub mod registry;
pub mod room;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use agents::{AgentCatalog, AgentFamily, AgentTable};
pub use bom::{BomEntry, BomItem, BomProvider, BomReport, OemRegistry, ProjectBom};
pub use calculations::{AgentResult, CalculationSummary};
pub use config::CalcConfig;
pub use errors::{CalcError, CalcResult};
pub use project::{Project, ProjectMetadata};
pub use registry::RoomRegistry;
pub use room::{ActuationType, Room};
pub use units::UnitSystem;
