//! Per-tick simulation steps
//!
//! Obstacle lifecycle (spawn, scroll, collide, score, cull) and the flyer's
//! flight step. The game loop decides when each runs.

use super::flyer::BoundaryHit;
use super::state::GameState;
use crate::renderer::RenderSurface;
use crate::settings::Settings;

/// Horizontal rules applied on every refresh tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRules {
    pub scroll_step: f32,
    pub scoring_threshold: f32,
    pub removal_threshold: f32,
}

impl From<&Settings> for ObstacleRules {
    fn from(settings: &Settings) -> Self {
        Self {
            scroll_step: settings.scroll_step,
            scoring_threshold: settings.scoring_threshold,
            removal_threshold: settings.removal_threshold,
        }
    }
}

/// Result of one refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Every pair processed, no collision
    Clear,
    /// The flyer hit the pair with this id; later pairs were not processed
    Collision(u32),
}

/// Append a freshly generated pair at the spawn offset
pub fn spawn_obstacle<S: RenderSurface>(state: &mut GameState, surface: &mut S) -> u32 {
    let id = state.next_entity_id();
    let pair = state.factory.create(id);
    log::debug!(
        "Spawned pair {} (top {:.1}, bottom {:.1})",
        id,
        pair.top.height,
        pair.bottom.height
    );
    surface.obstacle_created(&pair);
    state.obstacles.push(pair);
    id
}

/// Scroll, collide, score and cull every active pair in spawn order
///
/// Removals are applied after the scan, so no pair is skipped or visited
/// twice.
pub fn refresh_obstacles<S: RenderSurface>(
    state: &mut GameState,
    rules: &ObstacleRules,
    surface: &mut S,
) -> RefreshOutcome {
    let flyer_box = state.flyer.bounding_box();
    let mut removed = Vec::new();
    let mut outcome = RefreshOutcome::Clear;

    for pair in state.obstacles.iter_mut() {
        if pair.offset <= rules.removal_threshold {
            removed.push(pair.id);
            continue;
        }

        pair.offset -= rules.scroll_step;
        surface.obstacle_moved(pair.id, pair.offset);

        if pair.collides_with(&flyer_box) {
            outcome = RefreshOutcome::Collision(pair.id);
            break;
        }

        if pair.offset <= rules.scoring_threshold && !pair.scored {
            pair.scored = true;
            let score = state.score.increment();
            log::debug!("Pair {} passed, score {}", pair.id, score);
            surface.score_changed(score);
        }
    }

    if !removed.is_empty() {
        state.obstacles.retain(|pair| !removed.contains(&pair.id));
        for id in removed {
            log::debug!("Pair {} left the field", id);
            surface.obstacle_removed(id);
        }
    }

    outcome
}

/// Advance the flyer one flight step
pub fn flight_tick<S: RenderSurface>(state: &mut GameState, surface: &mut S) -> Option<BoundaryHit> {
    if !state.flyer.is_flying() {
        return None;
    }
    let hit = state.flyer.advance();
    surface.flyer_moved(state.flyer.position());
    hit
}
