//! Built-in chase oracle
//!
//! Same rules as the reference decision script: dodge projectiles that are
//! closing in on the opponent's row, otherwise close the larger gap to the
//! player.

use super::DecisionOracle;
use super::wire::DecisionRequest;
use crate::sim::Decision;

/// Vertical distance within which a projectile counts as "on our row"
pub const DODGE_ROW_BAND: f32 = 30.0;
/// Horizontal distance within which a projectile is worth dodging
pub const DODGE_RANGE: f32 = 200.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseOracle;

impl ChaseOracle {
    pub fn decide_for(request: &DecisionRequest) -> Decision {
        let [px, py] = request.player;
        let [ex, ey] = request.enemy;

        let threatened = request.bullets.iter().any(|&[bx, by]| {
            (by - ey).abs() < DODGE_ROW_BAND && (bx - ex).abs() < DODGE_RANGE && bx < ex
        });
        if threatened {
            return if py < ey { Decision::Down } else { Decision::Up };
        }

        let dx = px - ex;
        let dy = py - ey;
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Decision::Right } else { Decision::Left }
        } else if dy > 0.0 {
            Decision::Down
        } else {
            Decision::Up
        }
    }
}

impl DecisionOracle for ChaseOracle {
    fn decide(&mut self, request: &DecisionRequest) -> Decision {
        Self::decide_for(request)
    }
}
