//! Axis-aligned rectangle geometry
//!
//! Positions are the top-left corner in world units, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Rectangle of `size` centered on this one's center
    pub fn centered(&self, size: Vec2) -> Rect {
        Rect::from_pos_size(self.center() - size / 2.0, size)
    }

    /// See [`super::collision::overlaps`]
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        super::collision::overlaps(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_max() {
        let r = Rect::new(10.0, 20.0, 50.0, 30.0);
        assert_eq!(r.center(), Vec2::new(35.0, 35.0));
        assert_eq!(r.max(), Vec2::new(60.0, 50.0));
    }

    #[test]
    fn test_centered_muzzle() {
        // 10x10 muzzle on a 50x50 actor at the origin sits at (20, 20)
        let actor = Rect::new(0.0, 0.0, 50.0, 50.0);
        let muzzle = actor.centered(Vec2::splat(10.0));
        assert_eq!(muzzle, Rect::new(20.0, 20.0, 10.0, 10.0));
    }
}
