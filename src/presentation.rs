//! Presentation adapter seam
//!
//! A presenter supplies input once per tick and draws the snapshot the
//! simulation hands back. Window and renderer handles belong to the
//! presenter, never to the simulation.

use crate::sim::{Rect, Snapshot, TickInput};

pub const WINDOW_TITLE: &str = "SmartBot Arena";
/// Logical window size
pub const WINDOW_SIZE: (u32, u32) = (800, 600);

/// RGBA colors for game elements
pub mod colors {
    pub const BACKGROUND: [u8; 4] = [30, 30, 30, 255];
    pub const OPPONENT: [u8; 4] = [255, 0, 0, 255];
    pub const AVATAR: [u8; 4] = [0, 255, 0, 255];
    pub const PROJECTILE: [u8; 4] = [255, 255, 0, 255];
}

/// One filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: [u8; 4],
}

/// Fill commands in paint order (opponent, avatar, projectiles) over a
/// [`colors::BACKGROUND`] clear
pub fn draw_list(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.projectiles.len() + 2);
    commands.push(DrawCommand {
        rect: snapshot.opponent,
        color: colors::OPPONENT,
    });
    commands.push(DrawCommand {
        rect: snapshot.avatar,
        color: colors::AVATAR,
    });
    commands.extend(snapshot.projectiles.iter().map(|&rect| DrawCommand {
        rect,
        color: colors::PROJECTILE,
    }));
    commands
}

pub trait Presenter {
    /// Input state for the coming tick
    fn poll_input(&mut self) -> TickInput;

    /// Draw one frame
    fn present(&mut self, snapshot: &Snapshot);
}

/// Scripted input for running without a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputScript {
    /// Directions held for the whole run (`fire` and `quit` are ignored)
    pub hold: TickInput,
    /// Press fire on every Nth tick, releasing in between. Values below 2
    /// count as 2: fire needs a released tick before the next press.
    pub fire_every: Option<u64>,
    /// Request quit once this many ticks have run
    pub max_ticks: Option<u64>,
}

impl InputScript {
    pub fn input_for(&self, tick: u64) -> TickInput {
        TickInput {
            fire: self.fire_every.is_some_and(|n| tick % n.max(2) == 0),
            quit: self.max_ticks.is_some_and(|max| tick >= max),
            ..self.hold
        }
    }
}

/// Window-less presenter that replays an [`InputScript`] and logs frames
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    script: InputScript,
    ticks: u64,
    frames: u64,
    last_frame: Option<Snapshot>,
}

impl HeadlessPresenter {
    pub fn new(script: InputScript) -> Self {
        log::info!(
            "{} (headless, {}x{})",
            WINDOW_TITLE,
            WINDOW_SIZE.0,
            WINDOW_SIZE.1
        );
        Self {
            script,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Snapshot> {
        self.last_frame.as_ref()
    }
}

impl Presenter for HeadlessPresenter {
    fn poll_input(&mut self) -> TickInput {
        let input = self.script.input_for(self.ticks);
        self.ticks += 1;
        input
    }

    fn present(&mut self, snapshot: &Snapshot) {
        if log::log_enabled!(log::Level::Trace) {
            for command in draw_list(snapshot) {
                log::trace!(
                    "tick {} fill {:?} at ({}, {}) {}x{}",
                    snapshot.tick,
                    command.color,
                    command.rect.x(),
                    command.rect.y(),
                    command.rect.w(),
                    command.rect.h()
                );
            }
        }
        self.frames += 1;
        self.last_frame = Some(snapshot.clone());
    }
}
