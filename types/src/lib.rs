//! Shared configuration types for tally
//!
//! Serializable types shared between the engine (tally-core) and the
//! terminal front end (tally-cli). Kept free of heavy dependencies.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Bar colors for each class, keyed the same way the meter groups spec ids.
pub mod class_colors {
    use super::Color;

    pub const DEATH_KNIGHT: Color = [196, 30, 58, 255];
    pub const DEMON_HUNTER: Color = [163, 48, 201, 255];
    pub const DRUID: Color = [255, 124, 10, 255];
    pub const EVOKER: Color = [51, 147, 127, 255];
    pub const HUNTER: Color = [170, 211, 114, 255];
    pub const MAGE: Color = [63, 199, 235, 255];
    pub const MONK: Color = [0, 255, 152, 255];
    pub const PALADIN: Color = [244, 140, 186, 255];
    pub const PRIEST: Color = [255, 255, 255, 255];
    pub const ROGUE: Color = [255, 244, 104, 255];
    pub const SHAMAN: Color = [0, 112, 221, 255];
    pub const WARLOCK: Color = [135, 136, 238, 255];
    pub const WARRIOR: Color = [198, 155, 109, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_refresh_interval_ms() -> u64 {
    3000
}

fn default_idle_interval_ms() -> u64 {
    5000
}

// ─────────────────────────────────────────────────────────────────────────────
// Log Format
// ─────────────────────────────────────────────────────────────────────────────

/// Column layout revision of the combat log being read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Current retail client, advanced combat logging on
    #[default]
    Retail,
    /// Clients that did not yet write `baseAmount` after the damage amount
    PreBaseAmount,
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `WoWCombatLog*.txt` files
    #[serde(default)]
    pub log_directory: String,

    /// Zone names whose ZONE_CHANGE does not reset the meter.
    /// Typically the hub city players port to right after a pull.
    #[serde(default)]
    pub rest_zones: Vec<String>,

    /// Pause between full passes while the log keeps growing.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Pause while the log is unchanged or missing.
    #[serde(default = "default_idle_interval_ms")]
    pub idle_interval_ms: u64,

    /// Year used for legacy timestamps that omit it (`M/D HH:MM:SS.fff`).
    /// Falls back to the current local year.
    #[serde(default)]
    pub default_year: Option<i32>,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_log_directory(String::new())
    }
}

impl AppConfig {
    /// Create a new AppConfig with the specified log directory.
    /// Other fields use their default values.
    pub fn with_log_directory(log_directory: String) -> Self {
        Self {
            log_directory,
            rest_zones: Vec::new(),
            refresh_interval_ms: default_refresh_interval_ms(),
            idle_interval_ms: default_idle_interval_ms(),
            default_year: None,
            log_format: LogFormat::default(),
        }
    }
}
