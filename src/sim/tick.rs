//! Fixed-step simulation tick
//!
//! Order within a tick: quit, avatar movement, wraparound, oracle poll,
//! firing, projectiles, avatar/opponent contact.

use glam::Vec2;

use super::state::{GamePhase, GameState, Outcome};
use crate::config::SimConfig;
use crate::oracle::{DecisionOracle, DecisionRequest};

/// Input state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire control held (shots fire on the press, not while held)
    pub fire: bool,
    /// Window close / quit request
    pub quit: bool,
}

/// Decides on which ticks the oracle is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    interval: u64,
}

impl PollSchedule {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.effective_poll_interval())
    }

    /// Polls land on tick 0, N, 2N, ...
    #[inline]
    pub fn is_due(&self, tick: u64) -> bool {
        tick % self.interval == 0
    }
}

/// Advance the game by one tick.
///
/// The oracle is consulted when `schedule` is due. Returns the outcome on the
/// tick the run ends. Once ended, further calls do nothing and return `None`.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    config: &SimConfig,
    schedule: &PollSchedule,
    oracle: &mut dyn DecisionOracle,
) -> Option<Outcome> {
    if !state.is_running() {
        return None;
    }

    let outcome = step(state, input, config, schedule, oracle);
    state.time_ticks += 1;

    if let Some(outcome) = outcome {
        state.phase = GamePhase::Ended(outcome);
    }
    outcome
}

fn step(
    state: &mut GameState,
    input: &TickInput,
    config: &SimConfig,
    schedule: &PollSchedule,
    oracle: &mut dyn DecisionOracle,
) -> Option<Outcome> {
    if input.quit {
        log::info!("Quit requested");
        return Some(Outcome::Quit);
    }

    // Avatar movement; diagonals are not normalized
    let speed = config.avatar_speed;
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    state.avatar.translate(delta);
    state
        .avatar
        .wrap(Vec2::new(config.arena_width, config.arena_height));

    // Opponent only moves on poll ticks
    if schedule.is_due(state.time_ticks) {
        let speed = config.opponent_speed(state.time_ticks);
        let request = DecisionRequest::from_state(state);
        let decision = oracle.decide(&request);
        log::debug!(
            "Oracle decision at tick {}: {}",
            state.time_ticks,
            decision.as_str()
        );

        state.last_decision = decision;
        state.opponent.translate(decision.displacement(speed));
    }

    // Fire on the press edge only
    if state.fire_cooldown == 0 && input.fire && !state.fire_held_last_tick {
        state.projectiles.spawn(state.avatar.rect);
        state.fire_cooldown = config.fire_cooldown_ticks;
    }
    state.fire_cooldown = state.fire_cooldown.saturating_sub(1);
    state.fire_held_last_tick = input.fire;

    if let Some(hit) = state
        .projectiles
        .advance_and_prune(config.arena_width, state.opponent.rect)
    {
        log::info!(
            "Player wins: projectile {} hit opponent at ({}, {})",
            hit.index,
            hit.rect.x(),
            hit.rect.y()
        );
        return Some(Outcome::Win);
    }

    if state.avatar.rect.overlaps(&state.opponent.rect) {
        log::info!("Game over: player collided with opponent");
        return Some(Outcome::Lose);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Decision;
    use std::cell::Cell;

    fn stay(_: &DecisionRequest) -> Decision {
        Decision::Stay
    }

    /// Tick with the schedule the config describes
    fn run_tick(
        state: &mut GameState,
        input: &TickInput,
        config: &SimConfig,
        oracle: &mut dyn DecisionOracle,
    ) -> Option<Outcome> {
        tick(state, input, config, &PollSchedule::from_config(config), oracle)
    }

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_quit_ends_run() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(
            run_tick(&mut state, &quit, &config, &mut stay),
            Some(Outcome::Quit)
        );
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Quit));

        // Ended is terminal
        assert_eq!(
            run_tick(&mut state, &TickInput::default(), &config, &mut stay),
            None
        );
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Quit));
    }

    #[test]
    fn test_diagonal_movement_not_normalized() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        let input = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        run_tick(&mut state, &input, &config, &mut stay);
        assert_eq!(state.avatar.pos(), Vec2::new(105.0, 95.0));

        // Opposite keys cancel out
        let input = TickInput {
            up: true,
            down: true,
            ..Default::default()
        };
        run_tick(&mut state, &input, &config, &mut stay);
        assert_eq!(state.avatar.pos(), Vec2::new(105.0, 95.0));
    }

    #[test]
    fn test_wraparound_same_tick() {
        let config = SimConfig {
            avatar_start: Vec2::new(-46.0, 200.0),
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        // -46 - 5 = -51: fully off the left edge
        run_tick(&mut state, &left, &config, &mut stay);
        assert_eq!(state.avatar.pos(), Vec2::new(800.0, 200.0));
    }

    #[test]
    fn test_oracle_polled_on_schedule() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        let current = Cell::new(0u64);
        let mut polled_at = Vec::new();
        let mut oracle = |_: &DecisionRequest| {
            polled_at.push(current.get());
            Decision::Stay
        };
        for t in 0..25 {
            current.set(t);
            run_tick(&mut state, &TickInput::default(), &config, &mut oracle);
        }
        drop(oracle);
        assert_eq!(polled_at, vec![0, 10, 20]);
    }

    #[test]
    fn test_opponent_frozen_between_polls() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        let mut up = |_: &DecisionRequest| Decision::Up;

        run_tick(&mut state, &TickInput::default(), &config, &mut up);
        assert_eq!(state.opponent.pos(), Vec2::new(600.0, 280.0));
        for _ in 1..10 {
            run_tick(&mut state, &TickInput::default(), &config, &mut up);
            assert_eq!(state.opponent.pos(), Vec2::new(600.0, 280.0));
        }
        // Tick 10: speed = 20 + 10/1000
        run_tick(&mut state, &TickInput::default(), &config, &mut up);
        assert!((state.opponent.pos().y - (280.0 - 20.01)).abs() < 1e-3);
        assert_eq!(state.last_decision, Decision::Up);
    }

    #[test]
    fn test_custom_poll_interval() {
        let config = SimConfig {
            poll_interval_ticks: 3,
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        let mut calls = 0;
        let mut oracle = |_: &DecisionRequest| {
            calls += 1;
            Decision::Stay
        };
        for _ in 0..9 {
            run_tick(&mut state, &TickInput::default(), &config, &mut oracle);
        }
        drop(oracle);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_schedule_passed_in_drives_polls() {
        let config = SimConfig::default();
        let schedule = PollSchedule::new(4);
        let mut state = GameState::new(&config);
        let mut calls = 0;
        let mut oracle = |_: &DecisionRequest| {
            calls += 1;
            Decision::Stay
        };
        for _ in 0..12 {
            tick(&mut state, &TickInput::default(), &config, &schedule, &mut oracle);
        }
        drop(oracle);
        // Ticks 0, 4, 8 despite the config's interval of 10
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_schedule_zero_interval_polls_every_tick() {
        let schedule = PollSchedule::new(0);
        assert!((0..5).all(|t| schedule.is_due(t)));
        let schedule = PollSchedule::new(10);
        assert!(schedule.is_due(0) && schedule.is_due(20));
        assert!(!schedule.is_due(15));
    }

    #[test]
    fn test_fire_cooldown() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);

        run_tick(&mut state, &fire(), &config, &mut stay);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.fire_cooldown, 19);

        // Release and press again while cooling down: nothing
        for _ in 0..5 {
            run_tick(&mut state, &TickInput::default(), &config, &mut stay);
            run_tick(&mut state, &fire(), &config, &mut stay);
        }
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.fire_cooldown, 9);

        // Let it run out; cooldown stops at zero
        for _ in 0..30 {
            run_tick(&mut state, &TickInput::default(), &config, &mut stay);
        }
        assert_eq!(state.fire_cooldown, 0);

        run_tick(&mut state, &fire(), &config, &mut stay);
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_holding_fire_shoots_once() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        for _ in 0..60 {
            run_tick(&mut state, &fire(), &config, &mut stay);
        }
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_projectile_hit_wins_exactly_once() {
        // Avatar on the opponent's row, far to the left
        let config = SimConfig {
            avatar_start: Vec2::new(0.0, 300.0),
            ..Default::default()
        };
        let mut state = GameState::new(&config);

        let mut wins = Vec::new();
        for t in 0..400u64 {
            let input = if t == 0 { fire() } else { TickInput::default() };
            if let Some(outcome) = run_tick(&mut state, &input, &config, &mut stay) {
                wins.push((t, outcome));
            }
        }

        // Muzzle x = 20, +5 per tick from tick 0: 20 + 5 * 115 = 595 is the
        // first position whose right edge (605) passes the opponent's left (600)
        assert_eq!(wins, vec![(114, Outcome::Win)]);
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Win));
    }

    #[test]
    fn test_projectile_off_row_misses() {
        let config = SimConfig {
            avatar_start: Vec2::new(0.0, 0.0),
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        run_tick(&mut state, &fire(), &config, &mut stay);
        for _ in 0..200 {
            assert_eq!(
                run_tick(&mut state, &TickInput::default(), &config, &mut stay),
                None
            );
        }
        // Left through the right edge
        assert!(state.projectiles.is_empty());
        assert!(state.is_running());
    }

    #[test]
    fn test_contact_loses_with_projectiles_in_flight() {
        let config = SimConfig {
            avatar_start: Vec2::new(0.0, 0.0),
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        run_tick(&mut state, &fire(), &config, &mut stay);
        assert_eq!(state.projectiles.len(), 1);

        state.avatar.rect.pos = state.opponent.pos();
        assert_eq!(
            run_tick(&mut state, &TickInput::default(), &config, &mut stay),
            Some(Outcome::Lose)
        );
        assert_eq!(state.outcome(), Some(Outcome::Lose));
    }

    #[test]
    fn test_oracle_sees_state_before_fire() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        let mut seen = Vec::new();
        let mut oracle = |request: &DecisionRequest| {
            seen.push(request.clone());
            Decision::Stay
        };
        run_tick(&mut state, &fire(), &config, &mut oracle);
        drop(oracle);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].player, [100.0, 100.0]);
        assert_eq!(seen[0].enemy, [600.0, 300.0]);
        assert!(seen[0].bullets.is_empty());
    }
}
