//! Bug Hunt headless demo driver
//!
//! Runs a scripted sprint with no renderer attached and prints the outcome.
//! Exercises the full engine end to end: level load, physics, collapse,
//! scoring, unlock and leaderboard plumbing.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use bug_hunt::config::GameConfig;
use bug_hunt::consts::TICK_DT_MS;
use bug_hunt::game::{Game, GameEvent, Phase};
use bug_hunt::highscores::HighScoreEntry;
use bug_hunt::persistence::FileStore;
use bug_hunt::score;
use bug_hunt::sim::TickInput;

fn main() {
    env_logger::init();
    log::info!("bug-hunt headless demo starting");

    let config = GameConfig::load(Path::new("config.json"));
    let store = FileStore::new(".bug-hunt");
    let mut scores = store.load_scores();
    let mut unlocks = store.load_unlocks();

    let mut game = Game::new(config, 2024);
    game.start_level(1).expect("level 1 exists");

    let mut ticks: u64 = 0;
    // Generous upper bound; the sprint timer ends the run long before this
    let max_ticks: u64 = 360_000;

    loop {
        match game.phase() {
            Phase::Playing => {
                game.tick(&scripted_input(ticks), TICK_DT_MS);
                ticks += 1;
            }
            Phase::LevelComplete => {
                game.advance_level().expect("next level exists");
            }
            _ => break,
        }

        for event in game.take_events() {
            match event {
                GameEvent::BugCollected { kind, points } => {
                    log::info!("collected {kind:?} (+{points})");
                }
                GameEvent::PlatformBroken => {
                    log::debug!("a platform gave way");
                }
                GameEvent::LevelCompleted { level, score } => {
                    unlocks.unlock(level + 1);
                    log::info!("level {level} done, {score} points");
                }
                GameEvent::RunEnded { final_score, bugs_collected, levels_reached, victory } => {
                    println!("run over after {ticks} ticks (victory: {victory})");
                    println!(
                        "  score: {final_score}  bugs: {bugs_collected}  levels: {levels_reached}"
                    );
                    println!("  rating: {}", score::rating(final_score).as_str());

                    if scores.qualifies(final_score) {
                        let rank = scores.add(HighScoreEntry {
                            name: "autopilot".to_string(),
                            score: final_score,
                            bugs: bugs_collected,
                            levels: levels_reached,
                            timestamp: now_ms(),
                        });
                        if let Some(rank) = rank {
                            println!("  new high score, rank {rank}");
                        }
                    }
                }
            }
        }

        if ticks > max_ticks {
            log::warn!("demo tick cap exceeded, bailing out");
            break;
        }
    }

    store.save_scores(&scores);
    store.save_unlocks(&unlocks);
}

/// A simple bot: run right, hop periodically. Not a winning strategy; the
/// point is to drive every subsystem, not to beat the level.
fn scripted_input(ticks: u64) -> TickInput {
    TickInput {
        move_left: false,
        move_right: true,
        jump: ticks % 24 == 0,
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
