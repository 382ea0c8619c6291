//! Live per-level simulation state
//!
//! Everything here is deep-copied from the immutable level catalog at load
//! time and replaced wholesale on reset or quit. No module-level globals;
//! the orchestrator owns one `SimState` and threads it through the tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use crate::config::GameConfig;
use crate::consts::*;
use crate::level::{BugDef, LevelDef, PlatformDef};

/// Bug variety; point values and colors come from the config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BugKind {
    Common,
    Flying,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Solid,
    /// Looks solid, collapses shortly after being landed on.
    False,
}

/// The player character. Exactly one per run; mutated only by the physics
/// step and the collision resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Run-cycle frame, 0..4. Render-only.
    pub anim_frame: u8,
    pub anim_time_ms: f32,
}

impl Player {
    pub fn spawn(start: Vec2) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            on_ground: false,
            anim_frame: 0,
            anim_time_ms: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A platform instance. `False` platforms go Intact -> breaking -> broken;
/// once broken they are out of collision and snapshots for the rest of the
/// level life.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    pub breaking: bool,
    pub broken: bool,
    /// Counts down from `BREAK_DELAY_MS` once `breaking` is set. Logical ms,
    /// so pausing the game pauses the collapse.
    pub break_timer_ms: f32,
}

impl Platform {
    fn from_def(def: &PlatformDef) -> Self {
        Self {
            rect: def.rect,
            kind: def.kind,
            breaking: false,
            broken: false,
            break_timer_ms: 0.0,
        }
    }
}

/// A collectible. Collection is irreversible per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    pub pos: Vec2,
    pub kind: BugKind,
    pub collected: bool,
    /// Idle wiggle phase. Render-only.
    pub anim_phase: f32,
    /// Flying bugs bob on a sine of this phase.
    pub float_offset: f32,
}

impl Bug {
    fn from_def(def: &BugDef) -> Self {
        Self {
            pos: Vec2::new(def.x, def.y),
            kind: def.kind,
            collected: false,
            anim_phase: 0.0,
            float_offset: 0.0,
        }
    }

    /// Vertical display offset. The base `pos` never moves; the hitbox has
    /// to track the drawn position, not the spawn row.
    pub fn float_dy(&self) -> f32 {
        match self.kind {
            BugKind::Flying => self.float_offset.sin() * FLOAT_AMPLITUDE,
            _ => 0.0,
        }
    }

    /// Current collision box, float offset applied.
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y + self.float_dy(), BUG_HITBOX, BUG_HITBOX)
    }
}

/// A visual spark or debris fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life_ms: f32,
    pub initial_life_ms: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl Particle {
    /// Render alpha, fading linearly over the particle's life.
    pub fn alpha(&self) -> f32 {
        (self.life_ms / self.initial_life_ms).max(0.0)
    }
}

/// Shake/fade record pushed when a false platform starts collapsing. Lives
/// `BREAK_VISUAL_MS`, independent of the platform's own broken delay.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakingPlatform {
    pub rect: Rect,
    pub timer_ms: f32,
}

impl BreakingPlatform {
    /// Render alpha for the fade-out.
    pub fn alpha(&self) -> f32 {
        (self.timer_ms / BREAK_VISUAL_MS).max(0.0)
    }
}

/// Live state for one level attempt.
#[derive(Debug, Clone)]
pub struct SimState {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub bugs: Vec<Bug>,
    pub gate: Rect,
    pub particles: Vec<Particle>,
    pub breaking: Vec<BreakingPlatform>,
    /// Sprint countdown; the level is lost when it reaches zero.
    pub sprint_left_ms: f32,
    /// Logical time since load; gates the win check.
    pub time_in_level_ms: f32,
    /// Points collected this level.
    pub score: u32,
    /// Bugs collected this level.
    pub bugs_collected: u32,
    /// Seeded RNG for particle spawn velocities.
    pub rng: Pcg32,
}

impl SimState {
    /// Build live entities from an immutable catalog entry. Always a deep
    /// copy; a reset is just another `load`.
    pub fn load(def: &LevelDef, config: &GameConfig, seed: u64) -> Self {
        Self {
            player: Player::spawn(def.player_start),
            platforms: def.platforms.iter().map(Platform::from_def).collect(),
            bugs: def.bugs.iter().map(Bug::from_def).collect(),
            gate: def.gate,
            particles: Vec::new(),
            breaking: Vec::new(),
            sprint_left_ms: config.sprint_duration_ms,
            time_in_level_ms: 0.0,
            score: 0,
            bugs_collected: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
