//! Arena Duel - a two-actor arena shooter
//!
//! Core modules:
//! - `sim`: Simulation state, per-tick update, projectiles and collision
//! - `oracle`: Decision oracle clients (external process, async worker, built-in)
//! - `presentation`: Presentation adapter seam and a headless adapter
//! - `runner`: Frame-paced driver tying the simulation to a presenter
//! - `config`: Data-driven tunables

pub mod config;
pub mod error;
pub mod oracle;
pub mod presentation;
pub mod runner;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, OracleError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Avatar and opponent are square
    pub const ACTOR_SIZE: f32 = 50.0;
    pub const AVATAR_START: (f32, f32) = (100.0, 100.0);
    pub const OPPONENT_START: (f32, f32) = (600.0, 300.0);
    /// Per-axis displacement per held direction key
    pub const AVATAR_SPEED: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// 20 ticks = ~0.33s at 60 Hz
    pub const FIRE_COOLDOWN_TICKS: u32 = 20;

    /// Oracle is consulted every N ticks
    pub const POLL_INTERVAL_TICKS: u64 = 10;
    /// Opponent displacement per poll = base + elapsed_ticks * ramp
    pub const OPPONENT_BASE_SPEED: f32 = 20.0;
    pub const OPPONENT_SPEED_RAMP: f32 = 1.0 / 1000.0;

    /// ~60 FPS
    pub const FRAME_BUDGET_MS: u64 = 16;
}
