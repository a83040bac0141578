//! Simulation tunables
//!
//! Every field has a default matching the classic arena; a JSON file may
//! override any subset of them.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Actors ===
    /// Side length of the avatar and opponent squares
    pub actor_size: f32,
    pub avatar_start: Vec2,
    pub opponent_start: Vec2,
    /// Per-axis displacement per held direction
    pub avatar_speed: f32,

    // === Projectiles ===
    pub projectile_size: f32,
    pub projectile_speed: f32,
    /// Ticks between shots
    pub fire_cooldown_ticks: u32,

    // === Opponent ===
    /// Oracle is consulted on ticks where `tick % poll_interval_ticks == 0`
    pub poll_interval_ticks: u64,
    pub opponent_base_speed: f32,
    /// Added to the opponent speed per elapsed tick
    pub opponent_speed_ramp: f32,

    // === Pacing ===
    /// Wall-clock budget per frame; zero runs unpaced
    pub frame_budget_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            actor_size: ACTOR_SIZE,
            avatar_start: Vec2::new(AVATAR_START.0, AVATAR_START.1),
            opponent_start: Vec2::new(OPPONENT_START.0, OPPONENT_START.1),
            avatar_speed: AVATAR_SPEED,

            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            fire_cooldown_ticks: FIRE_COOLDOWN_TICKS,

            poll_interval_ticks: POLL_INTERVAL_TICKS,
            opponent_base_speed: OPPONENT_BASE_SPEED,
            opponent_speed_ramp: OPPONENT_SPEED_RAMP,

            frame_budget_ms: FRAME_BUDGET_MS,
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tunables that would stall projectiles, shrink the opponent's
    /// speed over time, or collapse the arena.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("actor_size", self.actor_size)?;
        positive("projectile_size", self.projectile_size)?;
        positive("projectile_speed", self.projectile_speed)?;
        non_negative("avatar_speed", self.avatar_speed)?;
        non_negative("opponent_base_speed", self.opponent_base_speed)?;
        non_negative("opponent_speed_ramp", self.opponent_speed_ramp)?;
        finite("avatar_start", self.avatar_start)?;
        finite("opponent_start", self.opponent_start)?;
        Ok(())
    }

    /// Opponent displacement for a poll happening at `elapsed_ticks`
    pub fn opponent_speed(&self, elapsed_ticks: u64) -> f32 {
        self.opponent_base_speed + elapsed_ticks as f32 * self.opponent_speed_ramp
    }

    /// Poll interval, with zero clamped to every tick
    pub fn effective_poll_interval(&self) -> u64 {
        self.poll_interval_ticks.max(1)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or more, got {}", value),
        })
    }
}

fn finite(field: &'static str, value: Vec2) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite, got {}", value),
        })
    }
}
