//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Injected RNG only - no ambient randomness
//! - No rendering or platform dependencies
//!
//! Per-tick order: drain input, advance cooldowns and rage decay, advance
//! the pass/shot flight, move the player, teammate and defenders, resolve
//! steal contests, resolve a completed shot, emit the render snapshot.

pub mod actions;
pub mod court;
pub mod flight;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use court::{Court, CourtError, Rect};
pub use flight::{PassFlight, ShotFlight};
pub use snapshot::{ActorView, BallVisual, Hud, RenderSnapshot};
pub use state::{ActorId, GameState, Outcome, Possession, Team};
pub use tick::{TickInput, tick};
