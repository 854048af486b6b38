pub mod combat_log;
pub mod context;
pub mod encounter;
pub mod game_data;
pub mod signal_processor;
pub mod state;

// Re-exports for convenience
pub use combat_log::*;
pub use context::watcher as directory_watcher;
pub use encounter::{AbilityDamage, Entity, EntityRegistry, Leaderboard, LeaderboardRow, SessionWindow};
pub use game_data::*;
pub use signal_processor::{EventProcessor, GameSignal};
pub use state::SessionCache;
