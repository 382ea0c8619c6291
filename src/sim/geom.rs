//! Axis-aligned rectangle geometry
//!
//! Everything in the world is an AABB. The overlap test is exact (open
//! intervals, no epsilon): the landing snap elsewhere relies on touching
//! edges not counting as overlap.

use glam::Vec2;

/// An axis-aligned rectangle, origin at top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect with its origin at `pos`.
    pub fn at(pos: Vec2, w: f32, h: f32) -> Self {
        Self { x: pos.x, y: pos.y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Open-interval AABB overlap test. Pure; no side effects.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
