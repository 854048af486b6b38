pub mod cache;
pub mod info;

pub use cache::SessionCache;
pub use info::ZoneInfo;
