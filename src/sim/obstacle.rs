//! Obstacle pairs and their factory
//!
//! A pair is a top and a bottom barrier sharing one horizontal offset, with a
//! fixed vertical gap between them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::rects_overlap;
use super::rect::Rect;
use crate::consts::*;

/// Which side of the gap a barrier closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarrierPosition {
    Top,
    Bottom,
}

/// One half of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub position: BarrierPosition,
    /// Height in percent of the field
    pub height: f32,
}

impl Barrier {
    pub fn new(position: BarrierPosition, height: f32) -> Self {
        Self { position, height }
    }

    /// Collision box for this barrier at the parent's offset
    pub fn rect(&self, offset: f32) -> Rect {
        let right = offset + BARRIER_WIDTH;
        match self.position {
            BarrierPosition::Top => Rect::new(offset, FIELD_MIN, right, FIELD_MIN + self.height),
            BarrierPosition::Bottom => {
                Rect::new(offset, FIELD_MAX - self.height, right, FIELD_MAX)
            }
        }
    }

    pub fn collides_with(&self, offset: f32, target: &Rect) -> bool {
        rects_overlap(&self.rect(offset), target)
    }
}

/// A top/bottom barrier pair scrolling toward the flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge, in percent of field width
    pub offset: f32,
    pub top: Barrier,
    pub bottom: Barrier,
    /// Set once the pair has counted toward the score
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(id: u32, offset: f32, top_height: f32, bottom_height: f32) -> Self {
        Self {
            id,
            offset,
            top: Barrier::new(BarrierPosition::Top, top_height),
            bottom: Barrier::new(BarrierPosition::Bottom, bottom_height),
            scored: false,
        }
    }

    /// Vertical space left open between the barriers
    pub fn gap_size(&self) -> f32 {
        FIELD_MAX - self.top.height - self.bottom.height
    }

    /// Vertical center of the gap
    pub fn gap_center(&self) -> f32 {
        self.top.height + self.gap_size() / 2.0
    }

    /// Check collision between either barrier and the target box
    pub fn collides_with(&self, target: &Rect) -> bool {
        self.top.collides_with(self.offset, target) || self.bottom.collides_with(self.offset, target)
    }
}

/// Produces obstacle pairs with a randomly placed gap of fixed size
#[derive(Debug, Clone)]
pub struct ObstacleFactory {
    offset: f32,
    gap_size: f32,
    rng: Pcg32,
}

impl ObstacleFactory {
    /// `gap_size` must lie in (0, 100); `Settings::validate` enforces it.
    pub fn new(offset: f32, gap_size: f32, seed: u64) -> Self {
        Self {
            offset,
            gap_size,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a pair at the factory's offset
    pub fn create(&mut self, id: u32) -> ObstaclePair {
        let max = FIELD_MAX - self.gap_size;
        let top_height = self.rng.random::<f32>() * max;
        let bottom_height = FIELD_MAX - self.gap_size - top_height;

        ObstaclePair::new(id, self.offset, top_height, bottom_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_barrier_rects() {
        let top = Barrier::new(BarrierPosition::Top, 30.0);
        assert_eq!(top.rect(60.0), Rect::new(60.0, 0.0, 70.0, 30.0));

        let bottom = Barrier::new(BarrierPosition::Bottom, 25.0);
        assert_eq!(bottom.rect(60.0), Rect::new(60.0, 75.0, 70.0, 100.0));
    }

    #[test]
    fn test_pair_gap() {
        let pair = ObstaclePair::new(1, 110.0, 30.0, 50.0);
        assert!((pair.gap_size() - 20.0).abs() < 1e-4);
        assert!((pair.gap_center() - 40.0).abs() < 1e-4);
        assert!(!pair.scored);
    }

    #[test]
    fn test_pair_collision() {
        // Gap spans 30..50
        let mut pair = ObstaclePair::new(1, FLYER_LEFT, 30.0, 50.0);

        // Inside the gap
        let in_gap = Rect::new(FLYER_LEFT, 40.0, FLYER_LEFT + 5.0, 45.0);
        assert!(!pair.collides_with(&in_gap));

        // Clipping the top barrier
        let high = Rect::new(FLYER_LEFT, 28.0, FLYER_LEFT + 5.0, 33.0);
        assert!(pair.collides_with(&high));

        // Touching the bottom barrier's top edge
        let low = Rect::new(FLYER_LEFT, 45.0, FLYER_LEFT + 5.0, 50.0);
        assert!(pair.collides_with(&low));

        // Pair scrolled out of the flyer's column
        pair.offset = FLYER_LEFT - BARRIER_WIDTH - 1.0;
        assert!(!pair.collides_with(&high));
    }

    #[test]
    fn test_factory_spawns_at_offset() {
        let mut factory = ObstacleFactory::new(SPAWN_OFFSET, GAP_SIZE, 42);
        let pair = factory.create(7);
        assert_eq!(pair.id, 7);
        assert_eq!(pair.offset, SPAWN_OFFSET);
        assert!(!pair.scored);
        assert!(pair.top.height >= 0.0 && pair.top.height <= 100.0 - GAP_SIZE);
    }

    #[test]
    fn test_factory_is_deterministic() {
        let mut a = ObstacleFactory::new(SPAWN_OFFSET, GAP_SIZE, 12345);
        let mut b = ObstacleFactory::new(SPAWN_OFFSET, GAP_SIZE, 12345);
        for id in 0..10 {
            assert_eq!(a.create(id).top.height, b.create(id).top.height);
        }
    }

    proptest! {
        #[test]
        fn prop_heights_fill_field(gap in 0.5f32..99.5, seed in any::<u64>()) {
            let mut factory = ObstacleFactory::new(SPAWN_OFFSET, gap, seed);
            for id in 0..8 {
                let pair = factory.create(id);
                let total = pair.top.height + gap + pair.bottom.height;
                prop_assert!((total - 100.0).abs() < 1e-3);
                prop_assert!(pair.top.height >= 0.0);
                prop_assert!(pair.bottom.height >= -1e-3);
            }
        }
    }
}
