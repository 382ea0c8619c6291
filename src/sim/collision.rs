//! Player-vs-world collision resolution
//!
//! Runs after the physics step each tick. One ground determination per
//! tick: `on_ground` is cleared on entry and only a landing in the same
//! pass sets it back, so there is never stale ground state.

use glam::Vec2;
use rand::Rng;

use super::geom::intersects;
use super::state::{BreakingPlatform, BugKind, Particle, PlatformKind, SimState};
use crate::config::{self, FALSE_PLATFORM_COLOR};
use crate::consts::*;

/// What the resolver observed this tick.
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    /// Player overlapped the release gate. The win itself is decided by the
    /// state machine, which also applies the post-load grace window.
    pub reached_gate: bool,
    /// Kinds collected this tick, in pickup order.
    pub collected: Vec<BugKind>,
    /// False platforms that started collapsing this tick.
    pub platforms_broken: u32,
}

/// Resolve player-vs-platform, player-vs-bug and the gate overlap.
pub fn resolve(sim: &mut SimState) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    sim.player.on_ground = false;
    resolve_platforms(sim, &mut outcome);
    resolve_bugs(sim, &mut outcome);
    outcome.reached_gate = intersects(&sim.player.rect(), &sim.gate);

    outcome
}

fn resolve_platforms(sim: &mut SimState, outcome: &mut ResolveOutcome) {
    // Indexed loop: starting a collapse spawns particles through &mut sim.
    for i in 0..sim.platforms.len() {
        if sim.platforms[i].broken {
            continue;
        }
        if !intersects(&sim.player.rect(), &sim.platforms[i].rect) {
            continue;
        }

        let rect = sim.platforms[i].rect;
        if sim.player.vel.y > 0.0 && sim.player.pos.y < rect.y {
            // Landing: falling with the top edge above the platform top.
            sim.player.pos.y = rect.y - PLAYER_HEIGHT;
            sim.player.vel.y = 0.0;
            sim.player.on_ground = true;

            if sim.platforms[i].kind == PlatformKind::False && !sim.platforms[i].breaking {
                start_collapse(sim, i);
                outcome.platforms_broken += 1;
            }
        } else {
            // Side hit: push out along x and kill horizontal motion.
            if sim.player.pos.x < rect.x {
                sim.player.pos.x = rect.x - PLAYER_WIDTH;
            } else {
                sim.player.pos.x = rect.right();
            }
            sim.player.vel.x = 0.0;
        }
    }
}

/// Flip a false platform to `breaking` (at most once per level life) and
/// push the visual record plus a debris burst.
fn start_collapse(sim: &mut SimState, index: usize) {
    let rect = sim.platforms[index].rect;
    sim.platforms[index].breaking = true;
    sim.platforms[index].break_timer_ms = BREAK_DELAY_MS;
    sim.breaking.push(BreakingPlatform { rect, timer_ms: BREAK_VISUAL_MS });

    for _ in 0..BREAK_PARTICLES {
        let pos = Vec2::new(rect.x + sim.rng.random_range(0.0..rect.w), rect.y);
        let vel = Vec2::new(
            sim.rng.random_range(-2.0..2.0),
            -sim.rng.random_range(0.0..5.0),
        );
        sim.particles.push(Particle {
            pos,
            vel,
            life_ms: BREAK_PARTICLE_LIFE_MS,
            initial_life_ms: BREAK_PARTICLE_LIFE_MS,
            color: FALSE_PLATFORM_COLOR,
        });
    }

    log::debug!("false platform at ({}, {}) collapsing", rect.x, rect.y);
}

fn resolve_bugs(sim: &mut SimState, outcome: &mut ResolveOutcome) {
    let player_rect = sim.player.rect();

    for i in 0..sim.bugs.len() {
        if sim.bugs[i].collected {
            continue;
        }
        if !intersects(&player_rect, &sim.bugs[i].hitbox()) {
            continue;
        }

        sim.bugs[i].collected = true;
        sim.bugs_collected += 1;

        let kind = sim.bugs[i].kind;
        let kind_config = config::bug_config(kind);
        sim.score += kind_config.points;
        outcome.collected.push(kind);

        let center = sim.bugs[i].pos + Vec2::splat(BUG_HITBOX / 2.0);
        for _ in 0..COLLECT_PARTICLES {
            let vel = Vec2::new(
                sim.rng.random_range(-3.0..3.0),
                -sim.rng.random_range(0.0..8.0),
            );
            sim.particles.push(Particle {
                pos: center,
                vel,
                life_ms: COLLECT_PARTICLE_LIFE_MS,
                initial_life_ms: COLLECT_PARTICLE_LIFE_MS,
                color: kind_config.color,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::level::{BugDef, LevelDef, PlatformDef};
    use crate::sim::geom::Rect;
    use std::f32::consts::FRAC_PI_2;

    static ONE_SOLID: [PlatformDef; 1] = [PlatformDef {
        rect: Rect::new(0.0, 550.0, 200.0, 50.0),
        kind: PlatformKind::Solid,
    }];
    static ONE_FALSE: [PlatformDef; 1] = [PlatformDef {
        rect: Rect::new(0.0, 550.0, 200.0, 50.0),
        kind: PlatformKind::False,
    }];
    static ONE_FLYER: [BugDef; 1] = [BugDef { x: 50.0, y: 300.0, kind: BugKind::Flying }];
    static ONE_COMMON: [BugDef; 1] = [BugDef { x: 50.0, y: 300.0, kind: BugKind::Common }];
    static NO_BUGS: [BugDef; 0] = [];
    static NO_PLATFORMS: [PlatformDef; 0] = [];

    fn test_level(platforms: &'static [PlatformDef], bugs: &'static [BugDef]) -> LevelDef {
        LevelDef {
            name: "test",
            difficulty: "test",
            platforms,
            bugs,
            gate: Rect::new(9000.0, 9000.0, 10.0, 10.0),
            player_start: Vec2::new(50.0, 400.0),
        }
    }

    fn sim_with(platforms: &'static [PlatformDef], bugs: &'static [BugDef]) -> SimState {
        SimState::load(&test_level(platforms, bugs), &GameConfig::default(), 7)
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let mut sim = sim_with(&ONE_SOLID, &NO_BUGS);
        sim.player.pos = Vec2::new(50.0, 530.0);
        sim.player.vel = Vec2::new(0.0, 8.0);

        resolve(&mut sim);

        assert_eq!(sim.player.pos.y, 550.0 - PLAYER_HEIGHT);
        assert_eq!(sim.player.vel.y, 0.0);
        assert!(sim.player.on_ground);
    }

    #[test]
    fn test_side_hit_pushes_out_and_stops() {
        static WALL: [PlatformDef; 1] = [PlatformDef {
            rect: Rect::new(100.0, 100.0, 50.0, 50.0),
            kind: PlatformKind::Solid,
        }];
        let mut sim = sim_with(&WALL, &NO_BUGS);

        // Approaching from the left, top edge below the platform top
        sim.player.pos = Vec2::new(80.0, 110.0);
        sim.player.vel = Vec2::new(5.0, 0.0);
        resolve(&mut sim);
        assert_eq!(sim.player.pos.x, 100.0 - PLAYER_WIDTH);
        assert_eq!(sim.player.vel.x, 0.0);
        assert!(!sim.player.on_ground);

        // Approaching from the right
        sim.player.pos = Vec2::new(140.0, 110.0);
        sim.player.vel = Vec2::new(-5.0, 0.0);
        resolve(&mut sim);
        assert_eq!(sim.player.pos.x, 150.0);
        assert_eq!(sim.player.vel.x, 0.0);
    }

    #[test]
    fn test_broken_platform_ignored() {
        let mut sim = sim_with(&ONE_SOLID, &NO_BUGS);
        sim.platforms[0].broken = true;
        sim.player.pos = Vec2::new(50.0, 530.0);
        sim.player.vel = Vec2::new(0.0, 8.0);

        resolve(&mut sim);

        // Falls straight through
        assert!(!sim.player.on_ground);
        assert_eq!(sim.player.pos.y, 530.0);
    }

    #[test]
    fn test_false_platform_collapse_triggers_once() {
        let mut sim = sim_with(&ONE_FALSE, &NO_BUGS);
        sim.player.pos = Vec2::new(50.0, 530.0);
        sim.player.vel = Vec2::new(0.0, 8.0);

        let outcome = resolve(&mut sim);
        assert_eq!(outcome.platforms_broken, 1);
        assert!(sim.platforms[0].breaking);
        assert!(!sim.platforms[0].broken);
        assert_eq!(sim.platforms[0].break_timer_ms, BREAK_DELAY_MS);
        assert_eq!(sim.breaking.len(), 1);
        assert_eq!(sim.particles.len(), BREAK_PARTICLES);

        // Landing again while breaking must not re-trigger
        sim.player.pos = Vec2::new(50.0, 530.0);
        sim.player.vel = Vec2::new(0.0, 8.0);
        let outcome = resolve(&mut sim);
        assert_eq!(outcome.platforms_broken, 0);
        assert_eq!(sim.breaking.len(), 1);
        assert_eq!(sim.particles.len(), BREAK_PARTICLES);
    }

    #[test]
    fn test_flying_bug_hitbox_uses_float_offset() {
        let mut sim = sim_with(&NO_PLATFORMS, &ONE_FLYER);
        // sin = 1: hitbox sits at y 305..321
        sim.bugs[0].float_offset = FRAC_PI_2;

        // Player bottom at 304.9: overlaps the unadjusted spawn row
        // (300..316) but not the floated hitbox.
        sim.player.pos = Vec2::new(45.0, 304.9 - PLAYER_HEIGHT);
        let outcome = resolve(&mut sim);
        assert!(!sim.bugs[0].collected);
        assert!(outcome.collected.is_empty());

        // A little lower and the floated hitbox is reached
        sim.player.pos.y += 0.2;
        let outcome = resolve(&mut sim);
        assert!(sim.bugs[0].collected);
        assert_eq!(outcome.collected, vec![BugKind::Flying]);
    }

    #[test]
    fn test_collection_is_idempotent() {
        let mut sim = sim_with(&NO_PLATFORMS, &ONE_COMMON);
        sim.player.pos = Vec2::new(45.0, 295.0);

        let outcome = resolve(&mut sim);
        assert_eq!(outcome.collected, vec![BugKind::Common]);
        assert_eq!(sim.score, 1);
        assert_eq!(sim.bugs_collected, 1);
        assert_eq!(sim.particles.len(), COLLECT_PARTICLES);

        // Still overlapping; nothing happens twice
        let outcome = resolve(&mut sim);
        assert!(outcome.collected.is_empty());
        assert_eq!(sim.score, 1);
        assert_eq!(sim.bugs_collected, 1);
        assert_eq!(sim.particles.len(), COLLECT_PARTICLES);
    }

    #[test]
    fn test_gate_overlap_reported() {
        let mut sim = sim_with(&NO_PLATFORMS, &NO_BUGS);
        assert!(!resolve(&mut sim).reached_gate);

        sim.player.pos = Vec2::new(8995.0, 8995.0);
        assert!(resolve(&mut sim).reached_gate);
    }
}
