//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and
//! deterministic:
//! - Logical time only (ms handed in per tick, no wall clocks)
//! - Seeded RNG only
//! - Stable iteration order over the entity arrays
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::{ResolveOutcome, resolve};
pub use geom::{Rect, intersects};
pub use state::{
    BreakingPlatform, Bug, BugKind, Particle, Platform, PlatformKind, Player, SimState,
};
pub use tick::{TickInput, TickOutcome, advance};
