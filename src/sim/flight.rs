//! Ball-in-flight trajectories
//!
//! A pass is a straight line toward where the receiver stood at launch; a
//! shot is a quadratic Bezier arc toward the rim. Neither affects gameplay
//! while airborne beyond suspending the shooter and gating new attempts -
//! the outcome of a shot is decided only once, when the flight completes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::court::Rect;
use super::state::{ActorId, Team};
use crate::consts::*;

/// Evaluate a quadratic Bezier at `t`
#[inline]
pub fn qbezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}

/// A pass on its way to a receiver
///
/// The destination point is fixed at launch; the receiver is not re-tracked
/// while the ball travels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassFlight {
    /// Current ball position
    pub pos: Vec2,
    /// Who receives the ball on arrival
    pub to: ActorId,
    /// Displacement per tick
    pub vel: Vec2,
    /// Ticks until arrival
    pub ticks_left: u32,
}

impl PassFlight {
    pub fn new(from: Vec2, to: ActorId, dest: Vec2, ticks: u32) -> Self {
        let ticks = ticks.max(1);
        Self {
            pos: from,
            to,
            vel: (dest - from) / ticks as f32,
            ticks_left: ticks,
        }
    }

    /// Advance one tick; returns true when the ball has arrived
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.ticks_left -= 1;
        self.ticks_left == 0
    }
}

/// A shot arcing toward a hoop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotFlight {
    pub shooter: ActorId,
    /// The side that scores if the shot falls
    pub scoring_team: Team,
    pub elapsed: u32,
    pub total: u32,
    start: Vec2,
    ctrl: Vec2,
    end: Vec2,
}

impl ShotFlight {
    /// Launch a shot from the shooter's current position toward a hoop
    pub fn new(shooter: ActorId, shooter_rect: &Rect, hoop: &Rect, ticks: u32) -> Self {
        let start = shooter_rect.center();
        let target = hoop.center();
        let ctrl = Vec2::new(
            (start.x + target.x) / 2.0,
            (start.y + target.y) / 2.0 - SHOT_ARC_HEIGHT,
        );
        Self {
            shooter,
            scoring_team: shooter.team(),
            elapsed: 0,
            total: ticks.max(1),
            start,
            ctrl,
            end: target + Vec2::new(RIM_OFFSET_X, 0.0),
        }
    }

    /// Elapsed fraction of the flight, capped at 1
    #[inline]
    pub fn t(&self) -> f32 {
        (self.elapsed as f32 / self.total as f32).min(1.0)
    }

    /// Advance one tick; returns true once the flight is complete
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        self.elapsed >= self.total
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Ball position along the arc for rendering
    pub fn ball_pos(&self) -> Vec2 {
        qbezier(self.start, self.ctrl, self.end, self.t())
    }
}
