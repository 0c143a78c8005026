//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed ticks on a simulated clock only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the collaborator traits

pub mod collision;
pub mod flyer;
pub mod game_loop;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::rects_overlap;
pub use flyer::{BoundaryHit, Flight, Flyer};
pub use game_loop::{GameLoop, LoopError};
pub use obstacle::{Barrier, BarrierPosition, ObstacleFactory, ObstaclePair};
pub use rect::Rect;
pub use state::{GameState, RunState, Score, Snapshot, StopReason};
pub use tick::{ObstacleRules, RefreshOutcome, flight_tick, refresh_obstacles, spawn_obstacle};
pub use timer::IntervalTimer;
