//! Game loop controller
//!
//! Owns the run state machine (`Idle -> Running -> Stopped`) and the three
//! periodic tasks that drive a run:
//! - refresh: scroll, collide, score and cull obstacles
//! - spawn: add a pair every `spawn_multiplier` refresh periods
//! - flight: advance the flyer's trajectory
//!
//! Time is simulated. The host calls `advance` with elapsed wall time (or any
//! other clock) and due tasks fire in time order, each running to
//! completion. Ties fire in the order refresh, spawn, flight.

use std::time::Duration;

use thiserror::Error;

use super::flyer::Flyer;
use super::obstacle::{ObstacleFactory, ObstaclePair};
use super::state::{GameState, RunState, Snapshot, StopReason};
use super::tick::{ObstacleRules, RefreshOutcome, flight_tick, refresh_obstacles, spawn_obstacle};
use super::timer::IntervalTimer;
use crate::platform::{InputEvent, InputGate};
use crate::renderer::RenderSurface;
use crate::settings::{ConfigError, Settings};

/// Lifecycle misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoopError {
    #[error("run can only start from Idle (currently {0:?})")]
    NotIdle(RunState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Refresh,
    Spawn,
    Flight,
}

/// A single run of the game
pub struct GameLoop<S: RenderSurface> {
    rules: ObstacleRules,
    state: GameState,
    run_state: RunState,
    stop_reason: Option<StopReason>,
    input: InputGate,
    surface: S,
    /// Simulated time since construction
    now: Duration,
    refresh_timer: IntervalTimer,
    spawn_timer: IntervalTimer,
    flight_timer: IntervalTimer,
}

impl<S: RenderSurface> GameLoop<S> {
    /// Create a run with default settings and the given base refresh interval
    pub fn new(refresh_interval: Duration, surface: S) -> Result<Self, ConfigError> {
        Self::with_settings(Settings::with_refresh_interval(refresh_interval), surface)
    }

    /// Create a run from explicit settings
    pub fn with_settings(settings: Settings, surface: S) -> Result<Self, ConfigError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("New run with seed: {}", seed);

        let factory = ObstacleFactory::new(settings.spawn_offset, settings.gap_size, seed);
        Ok(Self {
            rules: ObstacleRules::from(&settings),
            state: GameState::new(factory),
            run_state: RunState::Idle,
            stop_reason: None,
            input: InputGate::default(),
            surface,
            now: Duration::ZERO,
            refresh_timer: IntervalTimer::new(settings.refresh_interval),
            spawn_timer: IntervalTimer::new(settings.spawn_interval()),
            flight_timer: IntervalTimer::new(settings.flight_interval),
        })
    }

    /// Begin the run: start both ticks, spawn the first pair, enable input
    /// and flap once
    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.run_state != RunState::Idle {
            return Err(LoopError::NotIdle(self.run_state));
        }
        self.run_state = RunState::Running;

        self.refresh_timer.start(self.now);
        // Spawn fires once right away, then on its regular period
        spawn_obstacle(&mut self.state, &mut self.surface);
        self.spawn_timer.start(self.now);

        self.input.set_enabled(true);
        self.flap();

        log::info!(
            "Run started (refresh {:?}, spawn {:?})",
            self.refresh_timer.period(),
            self.spawn_timer.period()
        );
        Ok(())
    }

    /// End the run from outside. No-op unless running.
    pub fn stop(&mut self) {
        self.stop_with(StopReason::External);
    }

    fn stop_with(&mut self, reason: StopReason) {
        if self.run_state != RunState::Running {
            return;
        }
        self.refresh_timer.cancel();
        self.spawn_timer.cancel();
        self.flight_timer.cancel();
        self.input.set_enabled(false);
        self.state.flyer.stop();

        self.run_state = RunState::Stopped;
        self.stop_reason = Some(reason);
        log::info!(
            "Run stopped after {:?}: {:?}, score {}",
            self.now,
            reason,
            self.state.score.value()
        );
    }

    /// Route a host input event. Returns true if it caused a flap.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if !self.input.admits(event) {
            return false;
        }
        self.flap();
        true
    }

    fn flap(&mut self) {
        self.state.flyer.flap();
        self.flight_timer.start(self.now);
    }

    /// Move the simulated clock forward by `dt`, firing every due task
    pub fn advance(&mut self, dt: Duration) {
        if self.run_state != RunState::Running {
            return;
        }
        let deadline = self.now.saturating_add(dt);

        while let Some((due, task)) = self.next_task(deadline) {
            self.now = due;
            self.fire(task);
            if self.run_state != RunState::Running {
                return;
            }
        }
        self.now = deadline;
    }

    /// Earliest task due at or before `deadline`
    fn next_task(&self, deadline: Duration) -> Option<(Duration, Task)> {
        [
            (&self.refresh_timer, Task::Refresh),
            (&self.spawn_timer, Task::Spawn),
            (&self.flight_timer, Task::Flight),
        ]
        .into_iter()
        .filter_map(|(timer, task)| timer.due_by(deadline).map(|due| (due, task)))
        // min_by_key keeps the first of equal keys
        .min_by_key(|(due, _)| *due)
    }

    fn fire(&mut self, task: Task) {
        match task {
            Task::Refresh => {
                self.refresh_timer.reschedule();
                let outcome = refresh_obstacles(&mut self.state, &self.rules, &mut self.surface);
                if let RefreshOutcome::Collision(id) = outcome {
                    self.stop_with(StopReason::Obstacle(id));
                }
            }
            Task::Spawn => {
                self.spawn_timer.reschedule();
                spawn_obstacle(&mut self.state, &mut self.surface);
            }
            Task::Flight => {
                self.flight_timer.reschedule();
                if let Some(hit) = flight_tick(&mut self.state, &mut self.surface) {
                    self.stop_with(StopReason::Boundary(hit));
                }
            }
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn score(&self) -> u32 {
        self.state.score.value()
    }

    pub fn flyer(&self) -> &Flyer {
        &self.state.flyer
    }

    /// Active pairs in spawn order
    pub fn obstacles(&self) -> &[ObstaclePair] {
        &self.state.obstacles
    }

    pub fn input_enabled(&self) -> bool {
        self.input.is_enabled()
    }

    /// Simulated time consumed by the run
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            run_state: self.run_state,
            stop_reason: self.stop_reason,
            elapsed_ms: self.now.as_millis() as u64,
            score: self.state.score.value(),
            flyer: self.state.flyer.clone(),
            obstacles: self.state.obstacles.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
