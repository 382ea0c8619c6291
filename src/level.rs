//! Static level catalog
//!
//! Levels are fixed data compiled into the binary. Nothing here is ever
//! mutated: `SimState::load` deep-copies a definition into live entities,
//! so a reset can never inherit a previous run's broken platforms or
//! collected bugs.

use glam::Vec2;

use crate::sim::geom::Rect;
use crate::sim::state::{BugKind, PlatformKind};

/// Platform template.
#[derive(Debug, Clone, Copy)]
pub struct PlatformDef {
    pub rect: Rect,
    pub kind: PlatformKind,
}

/// Bug template. Hitbox size is fixed; see `consts::BUG_HITBOX`.
#[derive(Debug, Clone, Copy)]
pub struct BugDef {
    pub x: f32,
    pub y: f32,
    pub kind: BugKind,
}

/// One catalog entry. Levels are indexed 1-based; see [`level`].
#[derive(Debug)]
pub struct LevelDef {
    pub name: &'static str,
    pub difficulty: &'static str,
    pub platforms: &'static [PlatformDef],
    pub bugs: &'static [BugDef],
    pub gate: Rect,
    pub player_start: Vec2,
}

const fn solid(x: f32, y: f32, w: f32, h: f32) -> PlatformDef {
    PlatformDef { rect: Rect::new(x, y, w, h), kind: PlatformKind::Solid }
}

const fn collapsing(x: f32, y: f32, w: f32, h: f32) -> PlatformDef {
    PlatformDef { rect: Rect::new(x, y, w, h), kind: PlatformKind::False }
}

const fn bug(x: f32, y: f32, kind: BugKind) -> BugDef {
    BugDef { x, y, kind }
}

/// Total number of levels in the catalog.
pub const LEVEL_COUNT: u32 = 3;

static LEVEL_1_PLATFORMS: [PlatformDef; 7] = [
    solid(0.0, 550.0, 200.0, 50.0),
    solid(250.0, 450.0, 100.0, 20.0),
    collapsing(400.0, 350.0, 80.0, 20.0),
    solid(550.0, 300.0, 120.0, 20.0),
    solid(700.0, 200.0, 100.0, 20.0),
    collapsing(200.0, 250.0, 60.0, 20.0),
    solid(500.0, 150.0, 80.0, 20.0),
];

static LEVEL_1_BUGS: [BugDef; 7] = [
    bug(100.0, 500.0, BugKind::Common),
    bug(300.0, 400.0, BugKind::Common),
    bug(450.0, 300.0, BugKind::Flying),
    bug(600.0, 250.0, BugKind::Common),
    bug(750.0, 150.0, BugKind::Critical),
    bug(150.0, 200.0, BugKind::Flying),
    bug(350.0, 100.0, BugKind::Common),
];

static LEVEL_2_PLATFORMS: [PlatformDef; 8] = [
    solid(0.0, 560.0, 150.0, 40.0),
    collapsing(200.0, 480.0, 80.0, 20.0),
    solid(330.0, 420.0, 100.0, 20.0),
    collapsing(480.0, 350.0, 70.0, 20.0),
    solid(600.0, 280.0, 110.0, 20.0),
    solid(450.0, 200.0, 80.0, 20.0),
    collapsing(300.0, 150.0, 60.0, 20.0),
    solid(120.0, 120.0, 90.0, 20.0),
];

static LEVEL_2_BUGS: [BugDef; 7] = [
    bug(230.0, 440.0, BugKind::Common),
    bug(360.0, 380.0, BugKind::Flying),
    bug(500.0, 310.0, BugKind::Common),
    bug(640.0, 240.0, BugKind::Critical),
    bug(470.0, 160.0, BugKind::Common),
    bug(330.0, 110.0, BugKind::Flying),
    bug(140.0, 80.0, BugKind::Critical),
];

static LEVEL_3_PLATFORMS: [PlatformDef; 10] = [
    solid(0.0, 560.0, 120.0, 40.0),
    collapsing(170.0, 490.0, 70.0, 20.0),
    collapsing(300.0, 420.0, 70.0, 20.0),
    solid(430.0, 360.0, 90.0, 20.0),
    collapsing(570.0, 290.0, 70.0, 20.0),
    solid(700.0, 220.0, 100.0, 20.0),
    collapsing(560.0, 150.0, 60.0, 20.0),
    solid(400.0, 100.0, 80.0, 20.0),
    collapsing(250.0, 160.0, 60.0, 20.0),
    solid(100.0, 220.0, 80.0, 20.0),
];

static LEVEL_3_BUGS: [BugDef; 8] = [
    bug(200.0, 450.0, BugKind::Common),
    bug(330.0, 380.0, BugKind::Flying),
    bug(460.0, 320.0, BugKind::Common),
    bug(600.0, 250.0, BugKind::Flying),
    bug(740.0, 180.0, BugKind::Critical),
    bug(590.0, 110.0, BugKind::Critical),
    bug(430.0, 60.0, BugKind::Flying),
    bug(130.0, 180.0, BugKind::Common),
];

static LEVELS: [LevelDef; LEVEL_COUNT as usize] = [
    LevelDef {
        name: "Onboarding",
        difficulty: "Junior",
        platforms: &LEVEL_1_PLATFORMS,
        bugs: &LEVEL_1_BUGS,
        gate: Rect::new(750.0, 120.0, 60.0, 80.0),
        player_start: Vec2::new(50.0, 500.0),
    },
    LevelDef {
        name: "Integration Hell",
        difficulty: "Middle",
        platforms: &LEVEL_2_PLATFORMS,
        bugs: &LEVEL_2_BUGS,
        gate: Rect::new(20.0, 40.0, 60.0, 80.0),
        player_start: Vec2::new(40.0, 510.0),
    },
    LevelDef {
        name: "Release Day",
        difficulty: "Senior",
        platforms: &LEVEL_3_PLATFORMS,
        bugs: &LEVEL_3_BUGS,
        gate: Rect::new(720.0, 60.0, 60.0, 80.0),
        player_start: Vec2::new(30.0, 510.0),
    },
];

/// Look up a level by its 1-based index.
pub fn level(index: u32) -> Option<&'static LevelDef> {
    if index == 0 {
        return None;
    }
    LEVELS.get(index as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_one_based() {
        assert!(level(0).is_none());
        assert!(level(1).is_some());
        assert!(level(LEVEL_COUNT).is_some());
        assert!(level(LEVEL_COUNT + 1).is_none());
    }

    #[test]
    fn test_first_level_layout() {
        let def = level(1).unwrap();
        assert_eq!(def.name, "Onboarding");
        assert_eq!(def.platforms.len(), 7);
        assert_eq!(def.bugs.len(), 7);
        assert_eq!(def.platforms[0].rect, Rect::new(0.0, 550.0, 200.0, 50.0));
        assert_eq!(def.gate, Rect::new(750.0, 120.0, 60.0, 80.0));
        assert_eq!(def.player_start, Vec2::new(50.0, 500.0));
    }

    #[test]
    fn test_catalog_shape() {
        for index in 1..=LEVEL_COUNT {
            let def = level(index).unwrap();
            assert!(!def.name.is_empty());
            assert!(!def.platforms.is_empty());
            assert!(def.platforms.len() <= 15);
            assert!(!def.bugs.is_empty());
            // Levels are authored without overlapping platforms
            for (i, a) in def.platforms.iter().enumerate() {
                for b in &def.platforms[i + 1..] {
                    assert!(!crate::sim::geom::intersects(&a.rect, &b.rect));
                }
            }
        }
    }

    #[test]
    fn test_every_level_has_a_critical_bug() {
        for index in 1..=LEVEL_COUNT {
            let def = level(index).unwrap();
            assert!(def.bugs.iter().any(|b| b.kind == BugKind::Critical));
        }
    }
}
