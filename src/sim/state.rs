//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::ProjectileStore;
use super::rect::Rect;
use crate::config::SimConfig;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A projectile hit the opponent
    Win,
    /// The opponent touched the avatar
    Lose,
    /// The user asked to quit
    Quit,
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal; ticking an ended game does nothing
    Ended(Outcome),
}

/// Opponent movement chosen by the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Decision {
    /// No movement (also the fallback for anything unrecognized)
    #[default]
    Stay,
    Left,
    Right,
    Up,
    Down,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Stay => "stay",
            Decision::Left => "left",
            Decision::Right => "right",
            Decision::Up => "up",
            Decision::Down => "down",
        }
    }

    /// Map an oracle token to a decision; unknown tokens are `None`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "stay" => Some(Decision::Stay),
            "left" => Some(Decision::Left),
            "right" => Some(Decision::Right),
            "up" => Some(Decision::Up),
            "down" => Some(Decision::Down),
            _ => None,
        }
    }

    /// Displacement for one application at `speed` (screen y grows downward)
    pub fn displacement(&self, speed: f32) -> Vec2 {
        match self {
            Decision::Stay => Vec2::ZERO,
            Decision::Left => Vec2::new(-speed, 0.0),
            Decision::Right => Vec2::new(speed, 0.0),
            Decision::Up => Vec2::new(0.0, -speed),
            Decision::Down => Vec2::new(0.0, speed),
        }
    }
}

/// Avatar or opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
}

impl Actor {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            rect: Rect::from_pos_size(pos, Vec2::splat(size)),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.rect.pos += delta;
    }

    /// Once fully past one edge, reappear just beyond the opposite edge
    pub fn wrap(&mut self, arena: Vec2) {
        let size = self.rect.size;
        let pos = &mut self.rect.pos;

        if pos.x + size.x < 0.0 {
            pos.x = arena.x;
        }
        if pos.x > arena.x {
            pos.x = -size.x;
        }
        if pos.y + size.y < 0.0 {
            pos.y = arena.y;
        }
        if pos.y > arena.y {
            pos.y = -size.y;
        }
    }
}

/// Read-only view handed to the presenter each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub avatar: Rect,
    pub opponent: Rect,
    pub projectiles: Vec<Rect>,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Ticks elapsed since start
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub avatar: Actor,
    pub opponent: Actor,
    /// Live projectiles (spawn order)
    pub projectiles: ProjectileStore,
    /// Ticks until the avatar may fire again
    pub fire_cooldown: u32,
    /// Fire control state on the previous tick, for edge detection
    pub fire_held_last_tick: bool,
    /// Most recent oracle decision
    pub last_decision: Decision,
}

impl GameState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            time_ticks: 0,
            phase: GamePhase::Running,
            avatar: Actor::new(config.avatar_start, config.actor_size),
            opponent: Actor::new(config.opponent_start, config.actor_size),
            projectiles: ProjectileStore::new(config.projectile_size, config.projectile_speed),
            fire_cooldown: 0,
            fire_held_last_tick: false,
            last_decision: Decision::Stay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Ended(outcome) => Some(outcome),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            avatar: self.avatar.rect,
            opponent: self.opponent.rect,
            projectiles: self.projectiles.rects(),
        }
    }
}
