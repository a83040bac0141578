//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed tick, no wall-clock time
//! - Stable iteration order (projectiles in spawn order)
//! - No rendering or platform dependencies
//!
//! The only outside call is the oracle consulted on poll ticks.

pub mod collision;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use projectile::{Projectile, ProjectileHit, ProjectileStore};
pub use rect::Rect;
pub use state::{Actor, Decision, GamePhase, GameState, Outcome, Snapshot};
pub use tick::{PollSchedule, TickInput, tick};
