//! Frame-paced driver
//!
//! [`Simulation`] bundles everything a tick needs; [`run`] feeds it input
//! from a [`Presenter`] and paces frames to the configured budget.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::oracle::DecisionOracle;
use crate::presentation::Presenter;
use crate::sim::{GameState, Outcome, PollSchedule, Snapshot, TickInput, tick};

/// Simulation context: config, state, poll schedule and the oracle that
/// drives the opponent
pub struct Simulation {
    config: SimConfig,
    state: GameState,
    schedule: PollSchedule,
    oracle: Box<dyn DecisionOracle>,
}

impl Simulation {
    pub fn new(config: SimConfig, oracle: Box<dyn DecisionOracle>) -> Self {
        let state = GameState::new(&config);
        let schedule = PollSchedule::from_config(&config);
        Self {
            config,
            state,
            schedule,
            oracle,
        }
    }

    /// Replace the poll schedule derived from the config
    pub fn with_schedule(mut self, schedule: PollSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tick(&mut self, input: &TickInput) -> Option<Outcome> {
        tick(
            &mut self.state,
            input,
            &self.config,
            &self.schedule,
            self.oracle.as_mut(),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.config.frame_budget_ms)
    }
}

/// Run until the game ends, drawing every tick including the final one
pub fn run(sim: &mut Simulation, presenter: &mut dyn Presenter) -> Outcome {
    let budget = sim.frame_budget();
    log::info!("Simulation starting ({:?} per frame)", budget);

    loop {
        let frame_start = Instant::now();

        let input = presenter.poll_input();
        let outcome = sim.tick(&input);
        presenter.present(&sim.snapshot());

        if let Some(outcome) = outcome {
            log::info!(
                "Simulation ended after {} ticks: {:?}",
                sim.state().time_ticks,
                outcome
            );
            return outcome;
        }

        if let Some(remaining) = budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
