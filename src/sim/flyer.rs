//! Flyer motion model
//!
//! A flap does not add velocity. It restarts a scripted trajectory from the
//! current position: a sharp rise followed by a gravity-like fall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::flight_rise;

/// Which field bound the flyer crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryHit {
    /// Position reached 0 or less
    Top,
    /// Position reached 100 or more
    Bottom,
}

/// Trajectory started by the latest flap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Position at the moment of the flap
    pub origin: f32,
    /// Flight time since the flap
    pub elapsed: f32,
}

impl Flight {
    /// Position along this trajectory after `elapsed` flight time
    pub fn position(&self) -> f32 {
        self.origin - flight_rise(self.elapsed)
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    position: f32,
    flight: Option<Flight>,
}

impl Default for Flyer {
    fn default() -> Self {
        Self {
            position: FLYER_START,
            flight: None,
        }
    }
}

impl Flyer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance of the flyer's top edge from the top of the field
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Restart the trajectory from the current position
    pub fn flap(&mut self) {
        self.flight = Some(Flight {
            origin: self.position,
            elapsed: 0.0,
        });
    }

    /// Halt the trajectory. The position stays where it is.
    pub fn stop(&mut self) {
        self.flight = None;
    }

    /// Advance one flight tick
    ///
    /// The new position is always applied; a crossed bound is reported after.
    pub fn advance(&mut self) -> Option<BoundaryHit> {
        let flight = self.flight.as_mut()?;
        flight.elapsed += FLIGHT_STEP;
        self.position = flight.position();

        if self.position <= FIELD_MIN {
            Some(BoundaryHit::Top)
        } else if self.position >= FIELD_MAX {
            Some(BoundaryHit::Bottom)
        } else {
            None
        }
    }

    /// Collision box at the flyer's fixed column
    pub fn bounding_box(&self) -> Rect {
        Rect::from_origin_size(
            Vec2::new(FLYER_LEFT, self.position),
            Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
        )
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: f32) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_mid_field_and_idle() {
        let mut flyer = Flyer::new();
        assert_eq!(flyer.position(), FLYER_START);
        assert!(!flyer.is_flying());
        // Not flying - advancing does nothing
        assert_eq!(flyer.advance(), None);
        assert_eq!(flyer.position(), FLYER_START);
    }

    #[test]
    fn test_flap_origin_is_current_position() {
        let mut flyer = Flyer::new();
        flyer.set_position(37.5);
        flyer.flap();
        let flight = flyer.flight().copied().unwrap();
        assert_eq!(flight.origin, 37.5);
        assert_eq!(flight.elapsed, 0.0);
        // Trajectory at t=0 is the pre-flap position
        assert_eq!(flight.position(), 37.5);
    }

    #[test]
    fn test_rise_then_fall() {
        let mut flyer = Flyer::new();
        flyer.flap();

        // t = 0.5: rise = -0.1 + 2.0 = 1.9
        flyer.advance();
        assert!((flyer.position() - 48.1).abs() < 1e-4);

        // Apex at t = 5 (10 ticks): rise = -10 + 20 = 10
        for _ in 0..9 {
            flyer.advance();
        }
        assert!((flyer.position() - 40.0).abs() < 1e-4);

        // Back at the origin at t = 10
        for _ in 0..10 {
            flyer.advance();
        }
        assert!((flyer.position() - 50.0).abs() < 1e-4);

        // Then keeps falling
        flyer.advance();
        assert!(flyer.position() > 50.0);
    }

    #[test]
    fn test_reflap_resets_timer() {
        let mut flyer = Flyer::new();
        flyer.flap();
        for _ in 0..4 {
            flyer.advance();
        }
        let mid_air = flyer.position();
        flyer.flap();
        let flight = flyer.flight().copied().unwrap();
        assert_eq!(flight.origin, mid_air);
        assert_eq!(flight.elapsed, 0.0);
    }

    #[test]
    fn test_bottom_bound_reported() {
        let mut flyer = Flyer::new();
        flyer.set_position(99.0);
        flyer.flap();
        let mut hit = None;
        for _ in 0..100 {
            hit = flyer.advance();
            if hit.is_some() {
                break;
            }
        }
        assert_eq!(hit, Some(BoundaryHit::Bottom));
        assert!(flyer.position() >= FIELD_MAX);
    }

    #[test]
    fn test_top_bound_reported() {
        let mut flyer = Flyer::new();
        flyer.set_position(1.0);
        flyer.flap();
        // First tick rises by 1.9 - crosses 0
        assert_eq!(flyer.advance(), Some(BoundaryHit::Top));
        assert!(flyer.position() <= FIELD_MIN);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut flyer = Flyer::new();
        flyer.flap();
        flyer.advance();
        let frozen = flyer.position();
        flyer.stop();
        flyer.stop();
        assert!(!flyer.is_flying());
        assert_eq!(flyer.advance(), None);
        assert_eq!(flyer.position(), frozen);
    }

    #[test]
    fn test_bounding_box_follows_position() {
        let mut flyer = Flyer::new();
        flyer.set_position(20.0);
        let bbox = flyer.bounding_box();
        assert_eq!(bbox.left(), FLYER_LEFT);
        assert_eq!(bbox.top(), 20.0);
        assert_eq!(bbox.bottom(), 20.0 + FLYER_HEIGHT);
    }
}
