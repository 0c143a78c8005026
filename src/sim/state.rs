//! Run state and core simulation types

use serde::{Deserialize, Serialize};

use super::flyer::{BoundaryHit, Flyer};
use super::obstacle::{ObstacleFactory, ObstaclePair};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Constructed, not started yet
    Idle,
    /// Ticks are firing
    Running,
    /// Run ended; terminal
    Stopped,
}

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// `stop()` called from outside
    External,
    /// Flyer left the field
    Boundary(BoundaryHit),
    /// Flyer hit the obstacle pair with this id
    Obstacle(u32),
}

/// Passed-pair counter; only ever goes up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub(crate) fn increment(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// Everything the simulation mutates during a run
#[derive(Debug, Clone)]
pub struct GameState {
    pub flyer: Flyer,
    /// Active pairs in spawn order (newest last)
    pub obstacles: Vec<ObstaclePair>,
    pub score: Score,
    pub factory: ObstacleFactory,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(factory: ObstacleFactory) -> Self {
        Self {
            flyer: Flyer::new(),
            obstacles: Vec::new(),
            score: Score::default(),
            factory,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Serializable view of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub run_state: RunState,
    pub stop_reason: Option<StopReason>,
    pub elapsed_ms: u64,
    pub score: u32,
    pub flyer: Flyer,
    pub obstacles: Vec<ObstaclePair>,
}
