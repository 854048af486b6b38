use crate::encounter::{EntityRegistry, Leaderboard, SessionWindow, snapshot};
use crate::state::info::ZoneInfo;
use hashbrown::HashSet;

/// Pure storage for session state.
/// Routing logic lives in EventProcessor.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    pub registry: EntityRegistry,
    pub window: SessionWindow,
    pub current_zone: ZoneInfo,
    /// Zones whose arrival does not reset the session
    rest_zones: HashSet<String>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rest_zones<I, S>(rest_zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rest_zones: rest_zones.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_rest_zone(&self, zone_name: &str) -> bool {
        self.rest_zones.contains(zone_name)
    }

    /// Discard all entities and the session window. The zone record and
    /// rest-zone configuration survive.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.window.clear();
    }

    pub fn snapshot(&self) -> Leaderboard {
        snapshot(&self.registry, &self.window)
    }
}
