//! Bug Hunt - a timed bug-collecting platformer
//!
//! This crate is the simulation core only. Core modules:
//! - `sim`: deterministic simulation (physics, collision, effects)
//! - `level`: static level catalog
//! - `game`: state machine, command interface, render snapshots
//! - `score`: points, time bonus, rating ladder
//! - `highscores`: top-10 leaderboard
//! - `persistence`: best-effort JSON storage
//! - `config`: externally loaded tunables
//!
//! Rendering, input devices and UI wiring live outside the crate: the engine
//! consumes a three-button input snapshot each tick and hands back an
//! immutable render snapshot. All clocks are logical: they advance only while
//! the simulation ticks, so pausing freezes every timer at once.

pub mod config;
pub mod game;
pub mod highscores;
pub mod level;
pub mod persistence;
pub mod score;
pub mod sim;

pub use game::{Game, Phase};
pub use highscores::HighScores;

/// Fixed engine constants (level-independent, not exposed to config)
pub mod consts {
    /// Logical tick length for a 60 Hz driver (ms).
    pub const TICK_DT_MS: f32 = 1000.0 / 60.0;

    /// Player hitbox size
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// The run cycle advances a frame every 200 ms of accumulated time
    pub const PLAYER_ANIM_FRAME_MS: f32 = 200.0;
    pub const PLAYER_ANIM_FRAMES: u8 = 4;

    /// Bug hitbox size (square)
    pub const BUG_HITBOX: f32 = 16.0;
    /// Idle wiggle phase advance per ms
    pub const BUG_ANIM_RATE: f32 = 0.01;
    /// Flying bug float phase advance per ms
    pub const FLOAT_PHASE_RATE: f32 = 0.005;
    /// Flying bug vertical bob amplitude (px)
    pub const FLOAT_AMPLITUDE: f32 = 5.0;

    /// Horizontal damping per tick when no direction is held
    pub const FRICTION: f32 = 0.8;
    /// How far below the canvas bottom counts as falling out of the level
    pub const FALL_OUT_MARGIN: f32 = 100.0;

    /// Delay between stepping on a false platform and it going away
    pub const BREAK_DELAY_MS: f32 = 300.0;
    /// Lifetime of the collapse shake/fade visual record
    pub const BREAK_VISUAL_MS: f32 = 500.0;
    /// Debris burst when a platform starts collapsing
    pub const BREAK_PARTICLES: usize = 10;
    pub const BREAK_PARTICLE_LIFE_MS: f32 = 1000.0;
    /// Spark burst when a bug is collected
    pub const COLLECT_PARTICLES: usize = 5;
    pub const COLLECT_PARTICLE_LIFE_MS: f32 = 800.0;
    /// Downward acceleration applied to particles each tick
    pub const PARTICLE_GRAVITY: f32 = 0.2;

    /// Gate collisions are ignored this long after a level loads, so a spawn
    /// point near the gate cannot complete the level instantly.
    pub const WIN_GRACE_MS: f32 = 500.0;
}
