//! Court geometry and bounded motion
//!
//! Actors and hoops are axis-aligned boxes in screen space (origin top-left,
//! y grows downward). Every positional update is clamped so a box never
//! leaves the court.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// An axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// AABB overlap test (shared edges do not count as overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// Center-to-center distance between two boxes
#[inline]
pub fn distance(a: &Rect, b: &Rect) -> f32 {
    (a.center() - b.center()).length()
}

/// Invalid court geometry
#[derive(Debug, Error)]
pub enum CourtError {
    #[error("court must have positive area, got {width}x{height}")]
    ZeroArea { width: f32, height: f32 },
    #[error("hoop at ({x}, {y}) extends outside the court")]
    HoopOutOfBounds { x: f32, y: f32 },
}

/// The playing field: a fixed rectangle with a hoop zone at each end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    /// The opponents' target (they attack leftward)
    pub left_hoop: Rect,
    /// The team's target
    pub right_hoop: Rect,
}

impl Court {
    /// Build a court with the standard hoop layout, validating geometry
    pub fn new(width: f32, height: f32) -> Result<Self, CourtError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CourtError::ZeroArea { width, height });
        }
        let hoop_y = height / 2.0 - HOOP_HEIGHT / 2.0;
        let court = Self {
            width,
            height,
            left_hoop: Rect::new(LEFT_HOOP_X, hoop_y, HOOP_WIDTH, HOOP_HEIGHT),
            right_hoop: Rect::new(width - 70.0, hoop_y, HOOP_WIDTH, HOOP_HEIGHT),
        };
        for hoop in [&court.left_hoop, &court.right_hoop] {
            if !court.contains(hoop) {
                return Err(CourtError::HoopOutOfBounds {
                    x: hoop.pos.x,
                    y: hoop.pos.y,
                });
            }
        }
        Ok(court)
    }

    /// The standard 900x540 court
    pub fn standard() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
            left_hoop: Rect::new(
                LEFT_HOOP_X,
                COURT_HEIGHT / 2.0 - HOOP_HEIGHT / 2.0,
                HOOP_WIDTH,
                HOOP_HEIGHT,
            ),
            right_hoop: Rect::new(
                RIGHT_HOOP_X,
                COURT_HEIGHT / 2.0 - HOOP_HEIGHT / 2.0,
                HOOP_WIDTH,
                HOOP_HEIGHT,
            ),
        }
    }

    /// Clamp a box so it lies fully inside the court
    pub fn clamp_rect(&self, r: &mut Rect) {
        r.pos.x = r.pos.x.clamp(0.0, self.width - r.size.x);
        r.pos.y = r.pos.y.clamp(0.0, self.height - r.size.y);
    }

    /// Whether a box lies fully inside the court
    pub fn contains(&self, r: &Rect) -> bool {
        r.pos.x >= 0.0
            && r.pos.y >= 0.0
            && r.pos.x + r.size.x <= self.width
            && r.pos.y + r.size.y <= self.height
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::standard()
    }
}

/// Step `actor` along `delta` at `speed` units per tick.
///
/// The shared seek primitive: unit vector scaled by speed, truncated toward
/// zero on each axis, then clamped into the court. The denominator is held
/// at 1 minimum so a zero delta is a no-op rather than a division by zero.
pub fn advance(court: &Court, actor: &mut Rect, delta: Vec2, speed: i32) {
    let d = delta.length().max(1.0);
    let step = delta * speed as f32 / d;
    actor.pos += Vec2::new(step.x.trunc(), step.y.trunc());
    court.clamp_rect(actor);
}

/// [`advance`] with per-axis integer jitter in [-jitter, jitter], applied
/// before truncation (pursuit wobble for defenders)
pub fn advance_jittered<R: Rng>(
    court: &Court,
    actor: &mut Rect,
    delta: Vec2,
    speed: i32,
    jitter: i32,
    rng: &mut R,
) {
    let d = delta.length().max(1.0);
    let step = delta * speed as f32 / d;
    let jx = rng.random_range(-jitter..=jitter) as f32;
    let jy = rng.random_range(-jitter..=jitter) as f32;
    actor.pos += Vec2::new((step.x + jx).trunc(), (step.y + jy).trunc());
    court.clamp_rect(actor);
}
