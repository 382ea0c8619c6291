//! Game tunables and the bug kind table
//!
//! Loaded once at startup; defaults match the shipped balance. The kind
//! table and palette are compile-time data, like the level catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::state::BugKind;

/// Externally-loaded gameplay constants.
///
/// Velocities are px per tick and accelerations px per tick squared; only
/// timers are in milliseconds of logical time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Downward acceleration applied to the player every tick.
    pub gravity: f32,
    /// Initial jump velocity (negative = up).
    pub jump_power: f32,
    /// Horizontal run speed.
    pub player_speed: f32,
    /// Sprint length per level (logical ms).
    pub sprint_duration_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            gravity: 0.8,
            jump_power: -15.0,
            player_speed: 5.0,
            sprint_duration_ms: 120_000.0,
        }
    }
}

impl GameConfig {
    /// Load config from a JSON file, falling back to defaults if the file is
    /// missing or unparseable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Config {} unparseable ({err}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

/// Per-kind bug tuning: point value and particle color.
#[derive(Debug, Clone, Copy)]
pub struct BugKindConfig {
    pub kind: BugKind,
    pub points: u32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Static kind table, indexed by [`bug_config`].
pub const BUG_KINDS: [BugKindConfig; 3] = [
    BugKindConfig { kind: BugKind::Common, points: 1, color: 0xff4444 },
    BugKindConfig { kind: BugKind::Flying, points: 2, color: 0x44ff44 },
    BugKindConfig { kind: BugKind::Critical, points: 10, color: 0xffaa00 },
];

/// Look up the config entry for a bug kind.
pub fn bug_config(kind: BugKind) -> &'static BugKindConfig {
    let index = match kind {
        BugKind::Common => 0,
        BugKind::Flying => 1,
        BugKind::Critical => 2,
    };
    &BUG_KINDS[index]
}

/// Debris color for collapsing platforms (matches the false-platform fill).
pub const FALSE_PLATFORM_COLOR: u32 = 0x9f4a4a;
