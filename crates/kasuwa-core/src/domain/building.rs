//! Building domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kasuwa_shared::constants::DEFAULT_BUILDING_STATUS;

use super::Shop;

/// A structure within a market containing shops.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Building {
    pub id: Uuid,
    pub market_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Building name must not be empty"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: String,

    #[validate(length(max = 1000, message = "Summary too long"))]
    pub summary: String,

    /// Free-form condition marker; `"working"` on creation. The known
    /// values are listed in `kasuwa_shared::constants` but not enforced.
    pub status: String,

    /// Populated on direct building fetches; empty when the building is
    /// nested inside a market aggregate.
    #[serde(default)]
    pub shops: Vec<Shop>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBuilding {
    #[validate(length(min = 1, max = 100, message = "Building name must not be empty"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: String,

    #[validate(length(max = 1000, message = "Summary too long"))]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildingPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
}

impl Building {
    pub fn new(market_id: Uuid, new: &NewBuilding) -> Result<Self, validator::ValidationErrors> {
        let building = Self {
            id: Uuid::new_v4(),
            market_id,
            name: new.name.trim().to_string(),
            description: new.description.trim().to_string(),
            summary: new.summary.trim().to_string(),
            status: DEFAULT_BUILDING_STATUS.to_string(),
            shops: Vec::new(),
            created_at: Utc::now(),
            modified_at: None,
        };

        building.validate()?;
        Ok(building)
    }

    /// Copies only the supplied fields onto the building.
    pub fn apply(&mut self, patch: BuildingPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.validate()?;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}
