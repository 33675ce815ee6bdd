//! Fastbreak - a 2v2 arcade basketball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (possession, AI movement, shot/steal
//!   resolution, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and raw input live outside this crate: the core
//! consumes [`sim::TickInput`] intents and exposes a read-only
//! [`sim::RenderSnapshot`] each tick.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 900.0;
    pub const COURT_HEIGHT: f32 = 540.0;

    /// Hoop zones - left is the opponents' target, right is the team's
    pub const HOOP_WIDTH: f32 = 20.0;
    pub const HOOP_HEIGHT: f32 = 100.0;
    pub const LEFT_HOOP_X: f32 = 50.0;
    pub const RIGHT_HOOP_X: f32 = COURT_WIDTH - 70.0;

    /// Actor bounding-box sizes
    pub const PLAYER_SIZE: f32 = 28.0;
    pub const TEAMMATE_SIZE: f32 = 24.0;
    pub const DEFENDER_SIZE: f32 = 28.0;

    /// Shot flight duration in ticks
    pub const SHOT_FLIGHT_TICKS: u32 = 36;
    /// Height of the shot arc's control point above the midpoint
    pub const SHOT_ARC_HEIGHT: f32 = 130.0;
    /// Horizontal offset of the shot's landing point from hoop center
    pub const RIM_OFFSET_X: f32 = -6.0;

    /// Default pass flight duration in ticks
    pub const PASS_FLIGHT_TICKS: u32 = 18;

    /// Margin from the court edges for the teammate's roam targets
    pub const ROAM_MARGIN: f32 = 80.0;
}
