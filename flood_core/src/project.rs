//! # Project Data Structures
//!
//! The `Project` struct is the root container collaborators load, edit and
//! save. It serializes to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! └── rooms: RoomRegistry (unique room names, insertion order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use flood_core::project::Project;
//! use flood_core::room::Room;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Data Centers");
//! project.add_room(Room::new("ServerRoom", 10.0, 8.0, 3.0, 7.0, 0.0, 20.0)).unwrap();
//!
//! let json = project.to_json().unwrap();
//! let reloaded = flood_core::project::Project::from_json(&json).unwrap();
//! assert_eq!(reloaded.rooms.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::registry::RoomRegistry;
use crate::room::Room;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Protected rooms. Deserialization rejects duplicate names.
    #[serde(default)]
    pub rooms: RoomRegistry,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flood_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            rooms: RoomRegistry::new(),
        }
    }

    /// Add a room, failing on a duplicate name.
    pub fn add_room(&mut self, room: Room) -> CalcResult<()> {
        self.rooms.add(room)?;
        self.touch();
        Ok(())
    }

    /// Remove rooms by name. Returns how many were removed.
    pub fn remove_room(&mut self, name: &str) -> usize {
        let removed = self.rooms.remove(name);
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Remove every room
    pub fn clear_rooms(&mut self) {
        if !self.rooms.is_empty() {
            self.rooms.clear();
            self.touch();
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
