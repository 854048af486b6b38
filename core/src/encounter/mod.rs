mod entity_info;
pub mod metrics;
mod pets;
mod registry;
mod window;

pub use entity_info::Entity;
pub use metrics::{AbilityDamage, Leaderboard, LeaderboardRow, snapshot};
pub use registry::EntityRegistry;
pub use window::SessionWindow;
