//! Render surface collaborator
//!
//! The simulation never draws. It reports every visible state change to a
//! `RenderSurface`, which owns the visual representation and any formatting
//! of positions (percent strings, pixels, terminal cells).

use crate::sim::ObstaclePair;

/// Receives one notification per visible state mutation
pub trait RenderSurface {
    /// A new pair entered the field
    fn obstacle_created(&mut self, pair: &ObstaclePair);
    /// A pair scrolled to a new offset
    fn obstacle_moved(&mut self, id: u32, offset: f32);
    /// A pair left the field
    fn obstacle_removed(&mut self, id: u32);
    /// The flyer moved to a new vertical position
    fn flyer_moved(&mut self, position: f32);
    /// The score changed
    fn score_changed(&mut self, score: u32);
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn obstacle_created(&mut self, _pair: &ObstaclePair) {}
    fn obstacle_moved(&mut self, _id: u32, _offset: f32) {}
    fn obstacle_removed(&mut self, _id: u32) {}
    fn flyer_moved(&mut self, _position: f32) {}
    fn score_changed(&mut self, _score: u32) {}
}

/// A recorded surface notification
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    CreateObstacle {
        id: u32,
        offset: f32,
        top_height: f32,
        bottom_height: f32,
    },
    MoveObstacle {
        id: u32,
        offset: f32,
    },
    RemoveObstacle {
        id: u32,
    },
    MoveFlyer {
        position: f32,
    },
    Score(u32),
}

/// Surface that records every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&SurfaceCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl RenderSurface for RecordingSurface {
    fn obstacle_created(&mut self, pair: &ObstaclePair) {
        self.commands.push(SurfaceCommand::CreateObstacle {
            id: pair.id,
            offset: pair.offset,
            top_height: pair.top.height,
            bottom_height: pair.bottom.height,
        });
    }

    fn obstacle_moved(&mut self, id: u32, offset: f32) {
        self.commands.push(SurfaceCommand::MoveObstacle { id, offset });
    }

    fn obstacle_removed(&mut self, id: u32) {
        self.commands.push(SurfaceCommand::RemoveObstacle { id });
    }

    fn flyer_moved(&mut self, position: f32) {
        self.commands.push(SurfaceCommand::MoveFlyer { position });
    }

    fn score_changed(&mut self, score: u32) {
        self.commands.push(SurfaceCommand::Score(score));
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn obstacle_created(&mut self, pair: &ObstaclePair) {
        (**self).obstacle_created(pair);
    }

    fn obstacle_moved(&mut self, id: u32, offset: f32) {
        (**self).obstacle_moved(id, offset);
    }

    fn obstacle_removed(&mut self, id: u32) {
        (**self).obstacle_removed(id);
    }

    fn flyer_moved(&mut self, position: f32) {
        (**self).flyer_moved(position);
    }

    fn score_changed(&mut self, score: u32) {
        (**self).score_changed(score);
    }
}
