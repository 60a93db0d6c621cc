//! In-memory building map and hallway registry

use theia_common::{Error, Hallway, HallwayStatus, MapStatus, MapUpdate, Result};
use tracing::{debug, info};

/// Map state for the single building this process serves
pub struct MapRegistry {
    map: MapStatus,
    hallways: Vec<Hallway>,
}

impl Default for MapRegistry {
    fn default() -> Self {
        Self::new(MapStatus::default(), seed_hallways())
    }
}

impl MapRegistry {
    /// Create a registry with the given starting state
    pub fn new(map: MapStatus, hallways: Vec<Hallway>) -> Self {
        Self { map, hallways }
    }

    /// Current map snapshot
    pub fn get_map(&self) -> MapStatus {
        self.map.clone()
    }

    /// Replace the map record wholesale.
    /// Fails with invalid-request if the update names a different building.
    pub fn update_map(&mut self, update: MapUpdate) -> Result<MapStatus> {
        if update.building != self.map.building {
            debug!(
                "Rejected map update for building {} (serving {})",
                update.building, self.map.building
            );
            return Err(Error::invalid_request("Unknown building"));
        }

        self.map = MapStatus::from(update);

        info!(
            "Map for {} now at version {} with {} blocked nodes",
            self.map.building,
            self.map.version,
            self.map.blocked_nodes.len()
        );
        Ok(self.map.clone())
    }

    /// All hallways in stored order
    pub fn list_hallways(&self) -> Vec<Hallway> {
        self.hallways.clone()
    }

    /// Look up a single hallway
    pub fn get_hallway(&self, id: i64) -> Result<Hallway> {
        self.hallways
            .iter()
            .find(|h| h.id() == id)
            .cloned()
            .ok_or_else(|| Error::not_found("hallway not found"))
    }

    /// Set a hallway's status by replacing the stored record with an updated copy.
    /// The status is validated before the id is looked up.
    pub fn update_hallway(&mut self, id: i64, status: &str) -> Result<Hallway> {
        let status: HallwayStatus = status.parse()?;

        let slot = self
            .hallways
            .iter_mut()
            .find(|h| h.id() == id)
            .ok_or_else(|| Error::not_found("hallway not found"))?;

        let updated = slot.with_status(status);
        *slot = updated.clone();

        info!("Hallway {} ({}) is now {}", id, updated.name(), status);
        Ok(updated)
    }
}

/// Hallways known at startup
pub fn seed_hallways() -> Vec<Hallway> {
    vec![
        Hallway::new(1, "North Connector", HallwayStatus::Available),
        Hallway::new(2, "Atrium Passage", HallwayStatus::UnderConstruction),
        Hallway::new(3, "South Wing Link", HallwayStatus::Available),
    ]
}
