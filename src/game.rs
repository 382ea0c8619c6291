//! Game state machine and command interface
//!
//! Owns the run: which level is loaded, how the phases transition, and what
//! the outside world (UI, renderer, storage) gets to see. The simulation
//! itself lives in `sim` and is advanced one tick at a time from here.
//!
//! Commands arrive synchronously from the UI layer; commands that make no
//! sense in the current phase are ignored. Quitting drops the live state
//! wholesale, which also cancels any pending platform collapse: there are
//! no timers outside the state being dropped.

use thiserror::Error;

use crate::config::GameConfig;
use crate::consts::*;
use crate::level::{self, LEVEL_COUNT, LevelDef};
use crate::score;
use crate::sim::geom::Rect;
use crate::sim::state::{BreakingPlatform, BugKind, Particle, Platform, Player, SimState};
use crate::sim::tick::{self, TickInput};

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    LevelSelect,
    Playing,
    Paused,
    LevelComplete,
    GameOver { victory: bool },
    Leaderboard,
}

/// Commands that cannot be honored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Requested level index is outside the catalog.
    #[error("level {0} does not exist")]
    LevelNotFound(u32),
}

/// Facts the core reports outward, drained by the driver each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A bug was picked up (feedback/haptics hook).
    BugCollected { kind: BugKind, points: u32 },
    /// A false platform started collapsing.
    PlatformBroken,
    /// Level finished. The unlock collaborator should open `level + 1`.
    LevelCompleted { level: u32, score: u32 },
    /// The run is over; candidate entry for the leaderboard collaborator.
    RunEnded {
        final_score: u32,
        bugs_collected: u32,
        levels_reached: u32,
        victory: bool,
    },
}

/// Cross-level run accounting. Fully reset by `start_level`; the per-level
/// half of the state lives in `SimState` and is replaced on every load.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// 1-based index of the level currently loaded (0 = no run).
    pub level_index: u32,
    /// Score banked from completed levels.
    pub banked_score: u32,
    /// Bugs banked from completed levels.
    pub banked_bugs: u32,
    /// Levels completed this run.
    pub levels_completed: u32,
}

/// A bug as the renderer should draw it, float offset applied.
#[derive(Debug, Clone, Copy)]
pub struct BugView {
    pub x: f32,
    pub y: f32,
    pub kind: BugKind,
    pub anim_phase: f32,
}

/// Immutable render-ready view of the live simulation. Broken platforms and
/// collected bugs are already filtered out.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub level_index: u32,
    pub level_name: &'static str,
    pub player: &'a Player,
    pub platforms: Vec<&'a Platform>,
    pub bugs: Vec<BugView>,
    pub gate: &'a Rect,
    pub particles: &'a [Particle],
    pub breaking: &'a [BreakingPlatform],
    pub sprint_left_ms: f32,
    pub score: u32,
    pub bugs_collected: u32,
}

/// The orchestrator. One instance per game session.
pub struct Game {
    config: GameConfig,
    phase: Phase,
    run: RunState,
    sim: Option<SimState>,
    events: Vec<GameEvent>,
    /// Seed for the next level load; advanced per load so retries differ.
    next_seed: u64,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            phase: Phase::Menu,
            run: RunState::default(),
            sim: None,
            events: Vec::new(),
            next_seed: seed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Drain events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation by one tick of `dt` logical ms. A no-op in
    /// every phase but `Playing`, so pausing freezes the sprint clock, the
    /// collapse delays and the particle lifetimes all at once.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        let outcome = tick::advance(sim, input, dt, &self.config);
        let grace_elapsed = sim.time_in_level_ms >= WIN_GRACE_MS;

        for kind in &outcome.collected {
            self.events.push(GameEvent::BugCollected {
                kind: *kind,
                points: score::bug_points(*kind),
            });
        }
        for _ in 0..outcome.platforms_broken {
            self.events.push(GameEvent::PlatformBroken);
        }

        if outcome.timed_out || outcome.fell_out {
            self.end_run_lost();
            return;
        }
        if outcome.reached_gate && grace_elapsed {
            self.complete_level();
        }
    }

    /// Read-only view for the renderer. `None` outside a live level.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        let sim = self.sim.as_ref()?;
        let level_name = level::level(self.run.level_index).map(|d| d.name).unwrap_or("");
        Some(Snapshot {
            phase: self.phase,
            level_index: self.run.level_index,
            level_name,
            player: &sim.player,
            platforms: sim.platforms.iter().filter(|p| !p.broken).collect(),
            bugs: sim
                .bugs
                .iter()
                .filter(|b| !b.collected)
                .map(|b| BugView {
                    x: b.pos.x,
                    y: b.pos.y + b.float_dy(),
                    kind: b.kind,
                    anim_phase: b.anim_phase,
                })
                .collect(),
            gate: &sim.gate,
            particles: &sim.particles,
            breaking: &sim.breaking,
            sprint_left_ms: sim.sprint_left_ms,
            score: self.run.banked_score + sim.score,
            bugs_collected: self.run.banked_bugs + sim.bugs_collected,
        })
    }

    // --- commands (UI boundary) ---

    /// Start a fresh run at level `index`. Resets all run state.
    pub fn start_level(&mut self, index: u32) -> Result<(), CommandError> {
        let def = level::level(index).ok_or(CommandError::LevelNotFound(index))?;
        if !matches!(self.phase, Phase::Menu | Phase::LevelSelect | Phase::GameOver { .. }) {
            log::debug!("start_level({index}) ignored in {:?}", self.phase);
            return Ok(());
        }
        self.run = RunState { level_index: index, ..RunState::default() };
        self.load(def);
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
        }
    }

    /// Reload the current level. Banked score from earlier levels is kept;
    /// only the per-level state resets.
    pub fn restart_level(&mut self) -> Result<(), CommandError> {
        if !matches!(self.phase, Phase::Playing | Phase::Paused | Phase::GameOver { .. }) {
            return Ok(());
        }
        let index = self.run.level_index;
        let def = level::level(index).ok_or(CommandError::LevelNotFound(index))?;
        self.load(def);
        Ok(())
    }

    /// Move on from a completed level to the next one.
    pub fn advance_level(&mut self) -> Result<(), CommandError> {
        if self.phase != Phase::LevelComplete {
            return Ok(());
        }
        let next = self.run.level_index + 1;
        let def = level::level(next).ok_or(CommandError::LevelNotFound(next))?;
        self.run.level_index = next;
        self.load(def);
        Ok(())
    }

    /// Abandon the run from any phase. Dropping the live state cancels any
    /// pending collapse; nothing can mutate a freshly loaded level later.
    pub fn quit_to_menu(&mut self) {
        self.sim = None;
        self.run = RunState::default();
        self.phase = Phase::Menu;
    }

    pub fn show_level_select(&mut self) {
        if self.phase == Phase::Menu {
            self.phase = Phase::LevelSelect;
        }
    }

    pub fn show_leaderboard(&mut self) {
        if matches!(self.phase, Phase::Menu | Phase::GameOver { .. }) {
            self.phase = Phase::Leaderboard;
        }
    }

    pub fn back_to_menu(&mut self) {
        if matches!(self.phase, Phase::Leaderboard | Phase::LevelSelect) {
            self.phase = Phase::Menu;
        }
    }

    // --- internal transitions ---

    fn load(&mut self, def: &LevelDef) {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        self.sim = Some(SimState::load(def, &self.config, seed));
        self.phase = Phase::Playing;
        log::info!(
            "level {} \"{}\" loaded ({})",
            self.run.level_index,
            def.name,
            def.difficulty
        );
    }

    /// Gate reached: bank the level score and either show the interstitial
    /// or, on the final level, end the run victorious.
    fn complete_level(&mut self) {
        let Some(sim) = self.sim.take() else { return };

        let level_score = score::level_score(sim.score, sim.sprint_left_ms);
        self.run.banked_score += level_score;
        self.run.banked_bugs += sim.bugs_collected;
        self.run.levels_completed += 1;
        self.events.push(GameEvent::LevelCompleted {
            level: self.run.level_index,
            score: level_score,
        });
        log::info!("level {} complete: {} points", self.run.level_index, level_score);

        if self.run.level_index >= LEVEL_COUNT {
            self.finish_run(self.run.banked_score, self.run.banked_bugs, true);
        } else {
            self.phase = Phase::LevelComplete;
        }
    }

    /// Timer exhausted or player fell out. Collected points still count;
    /// the time bonus does not.
    fn end_run_lost(&mut self) {
        let (level_points, level_bugs) = self
            .sim
            .take()
            .map(|s| (s.score, s.bugs_collected))
            .unwrap_or((0, 0));
        let final_score = self.run.banked_score + level_points;
        let bugs = self.run.banked_bugs + level_bugs;
        self.finish_run(final_score, bugs, false);
    }

    fn finish_run(&mut self, final_score: u32, bugs_collected: u32, victory: bool) {
        self.sim = None;
        self.phase = Phase::GameOver { victory };
        self.events.push(GameEvent::RunEnded {
            final_score,
            bugs_collected,
            levels_reached: self.run.level_index,
            victory,
        });
        log::info!(
            "run over (victory: {victory}): score {final_score}, rating {}",
            score::rating(final_score).as_str()
        );
    }
}
