//! Per-tick simulation advance
//!
//! The orchestrator calls [`advance`] once per frame while the game is
//! playing. Every duration in here is a logical-ms countdown fed by `dt`:
//! a paused game simply stops calling this, and the sprint clock, collapse
//! delays and particle lifetimes all stop with it.

use super::collision;
use super::state::{BugKind, SimState};
use crate::config::GameConfig;
use crate::consts::*;

/// Logical input for one tick, sampled before the physics step. The
/// device-specific key/touch mapping lives outside the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// What one tick produced, for the state machine to act on.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Sprint timer ran out before any simulation work this tick.
    pub timed_out: bool,
    /// Player fell past the bottom of the world.
    pub fell_out: bool,
    /// Player overlapped the release gate.
    pub reached_gate: bool,
    /// Kinds collected this tick, in pickup order.
    pub collected: Vec<BugKind>,
    /// False platforms that started collapsing this tick.
    pub platforms_broken: u32,
}

/// Advance the live level state by one tick of `dt` logical ms.
pub fn advance(sim: &mut SimState, input: &TickInput, dt: f32, config: &GameConfig) -> TickOutcome {
    // Timer first: an exhausted sprint skips the whole tick, freezing the
    // run's numbers at their pre-tick values.
    sim.sprint_left_ms -= dt;
    if sim.sprint_left_ms <= 0.0 {
        return TickOutcome { timed_out: true, ..Default::default() };
    }
    sim.time_in_level_ms += dt;

    step_player(sim, input, dt, config);
    animate_bugs(sim, dt);

    let resolved = collision::resolve(sim);
    update_effects(sim, dt);

    let fell_out = sim.player.pos.y > config.canvas_height + FALL_OUT_MARGIN;

    TickOutcome {
        timed_out: false,
        fell_out,
        reached_gate: resolved.reached_gate,
        collected: resolved.collected,
        platforms_broken: resolved.platforms_broken,
    }
}

/// Integrate player motion from input, gravity and friction.
fn step_player(sim: &mut SimState, input: &TickInput, dt: f32, config: &GameConfig) {
    let player = &mut sim.player;

    if input.move_left {
        player.vel.x = -config.player_speed;
    } else if input.move_right {
        player.vel.x = config.player_speed;
    } else {
        // Exponential damping toward zero, never hard-zeroed.
        player.vel.x *= FRICTION;
    }

    if input.jump && player.on_ground {
        player.vel.y = config.jump_power;
        player.on_ground = false;
    }

    // Gravity accumulates even while grounded; the landing snap zeroes it
    // again in the collision pass.
    player.vel.y += config.gravity;

    player.pos += player.vel;
    player.pos.x = player.pos.x.clamp(0.0, config.canvas_width - PLAYER_WIDTH);

    player.anim_time_ms += dt;
    if player.anim_time_ms > PLAYER_ANIM_FRAME_MS {
        player.anim_frame = (player.anim_frame + 1) % PLAYER_ANIM_FRAMES;
        player.anim_time_ms = 0.0;
    }
}

/// Advance idle/float phases on uncollected bugs. Render-facing, except that
/// the float phase shifts the Flying hitbox.
fn animate_bugs(sim: &mut SimState, dt: f32) {
    for bug in sim.bugs.iter_mut().filter(|b| !b.collected) {
        bug.anim_phase += dt * BUG_ANIM_RATE;
        if bug.kind == BugKind::Flying {
            bug.float_offset += dt * FLOAT_PHASE_RATE;
        }
    }
}

/// Particles, collapse visuals and the delayed broken transition.
fn update_effects(sim: &mut SimState, dt: f32) {
    for particle in &mut sim.particles {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life_ms -= dt;
    }
    sim.particles.retain(|p| p.life_ms > 0.0);

    for record in &mut sim.breaking {
        record.timer_ms -= dt;
    }
    sim.breaking.retain(|r| r.timer_ms > 0.0);

    // The broken flag lands a fixed delay after the landing that started the
    // collapse, whether or not the player is still anywhere near it.
    for platform in &mut sim.platforms {
        if platform.breaking && !platform.broken {
            platform.break_timer_ms -= dt;
            if platform.break_timer_ms <= 0.0 {
                platform.broken = true;
            }
        }
    }
}
