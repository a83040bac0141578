//! Projectile storage and per-tick advancement
//!
//! Projectiles are kept in spawn order. That order is what the oracle sees
//! and what breaks ties when two projectiles reach the opponent on the same
//! tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A live projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Scalar speed along `dir`
    pub speed: f32,
    /// Unit travel direction (+x for every projectile fired today)
    pub dir: Vec2,
}

impl Projectile {
    #[inline]
    pub fn advance(&mut self) {
        self.rect.pos += self.dir * self.speed;
    }
}

/// A projectile reached the opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileHit {
    /// Index in spawn order at the time of the hit
    pub index: usize,
    pub rect: Rect,
}

/// Ordered collection of live projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileStore {
    projectiles: Vec<Projectile>,
    size: Vec2,
    speed: f32,
}

impl ProjectileStore {
    pub fn new(size: f32, speed: f32) -> Self {
        Self {
            projectiles: Vec::new(),
            size: Vec2::splat(size),
            speed,
        }
    }

    /// Fire a projectile from the center of `origin`, travelling +x
    pub fn spawn(&mut self, origin: Rect) {
        self.projectiles.push(Projectile {
            rect: origin.centered(self.size),
            speed: self.speed,
            dir: Vec2::X,
        });
    }

    /// Advance every projectile one tick, dropping those past `bounds_width`.
    ///
    /// Stops at the first projectile (in spawn order) that overlaps
    /// `opponent`; projectiles after it are not advanced this tick.
    pub fn advance_and_prune(
        &mut self,
        bounds_width: f32,
        opponent: Rect,
    ) -> Option<ProjectileHit> {
        let mut i = 0;
        while i < self.projectiles.len() {
            let projectile = &mut self.projectiles[i];
            projectile.advance();

            if projectile.rect.x() > bounds_width {
                // Order must be preserved, so no swap_remove
                self.projectiles.remove(i);
                continue;
            }

            if projectile.rect.overlaps(&opponent) {
                return Some(ProjectileHit {
                    index: i,
                    rect: projectile.rect,
                });
            }

            i += 1;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    /// Top-left positions in spawn order
    pub fn positions(&self) -> Vec<Vec2> {
        self.projectiles.iter().map(|p| p.rect.pos).collect()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.projectiles.iter().map(|p| p.rect).collect()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}
