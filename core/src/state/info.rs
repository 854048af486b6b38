/// Zone the log last reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneInfo {
    pub zone_name: String,
    /// Incremented on every session reset. Rest-zone transitions leave it alone.
    pub generation: u64,
}
