//! Data-driven game balance
//!
//! Every gameplay knob that is not court geometry lives here, with the
//! compiled-in defaults as `Default`. A tuning file is plain JSON with any
//! subset of the fields; construction rejects values that would break the
//! simulation's invariants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{role} speed bounds [{min}, {max}] are inverted or non-positive")]
    BadSpeedBounds { role: &'static str, min: i32, max: i32 },
    #[error("{role} speed {value} outside [{min}, {max}]")]
    SpeedOutOfRange {
        role: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("rage loss threshold {threshold} outside [0, {max}]")]
    BadLossThreshold { threshold: i32, max: i32 },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read tuning file: {0}")]
    Io(#[from] std::io::Error),
}

/// Gameplay balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Default player speed (units per tick)
    pub player_speed: i32,
    /// Default teammate speed
    pub teammate_speed: i32,
    /// Default defender speed
    pub defender_speed: i32,
    /// Bounds for runtime player speed adjustment
    pub player_speed_min: i32,
    pub player_speed_max: i32,
    /// Bounds for runtime AI speed adjustment (teammate and defenders)
    pub ai_speed_min: i32,
    pub ai_speed_max: i32,

    /// Distance to a hoop inside which AI actors attempt shots
    pub shoot_range: f32,
    /// Maximum distance for a player steal attempt
    pub steal_range: f32,
    /// Ticks between player steal attempts
    pub steal_cooldown: u32,
    /// Maximum distance at which the teammate answers a call for the ball
    pub call_range: f32,
    /// Ticks between call-for-ball attempts
    pub call_cooldown: u32,
    /// Ticks between teammate shot attempts
    pub teammate_shot_cooldown: u32,

    /// Upper bound of the rage meter
    pub rage_max: i32,
    /// Rage level at which the session is lost
    pub rage_loss_threshold: i32,
    /// Live ticks per point of passive rage decay
    pub rage_decay_ticks: u32,

    /// Score + kindness total that wins the session
    pub win_target: i32,

    /// Freeze the simulation into decision mode whenever the player
    /// gains possession
    pub freeze_on_possession: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5,
            teammate_speed: 4,
            defender_speed: 3,
            player_speed_min: 1,
            player_speed_max: 15,
            ai_speed_min: 2,
            ai_speed_max: 12,

            shoot_range: 90.0,
            steal_range: 36.0,
            steal_cooldown: 20,
            call_range: 360.0,
            call_cooldown: 45,
            teammate_shot_cooldown: 45,

            rage_max: 100,
            rage_loss_threshold: 50,
            rage_decay_ticks: 75,

            win_target: 20,

            freeze_on_possession: true,
        }
    }
}

impl Tuning {
    /// Check construction-time invariants, failing fast on a config that
    /// would break the simulation.
    pub fn validate(&self) -> Result<(), TuningError> {
        let speed_bounds = [
            ("player", self.player_speed_min, self.player_speed_max),
            ("ai", self.ai_speed_min, self.ai_speed_max),
        ];
        for (role, min, max) in speed_bounds {
            if min <= 0 || min > max {
                return Err(TuningError::BadSpeedBounds { role, min, max });
            }
        }

        let speeds = [
            (
                "player",
                self.player_speed,
                self.player_speed_min,
                self.player_speed_max,
            ),
            (
                "teammate",
                self.teammate_speed,
                self.ai_speed_min,
                self.ai_speed_max,
            ),
            (
                "defender",
                self.defender_speed,
                self.ai_speed_min,
                self.ai_speed_max,
            ),
        ];
        for (role, value, min, max) in speeds {
            if value < min || value > max {
                return Err(TuningError::SpeedOutOfRange { role, value, min, max });
            }
        }

        let positives = [
            ("shoot_range", self.shoot_range),
            ("steal_range", self.steal_range),
            ("call_range", self.call_range),
            ("steal_cooldown", self.steal_cooldown as f32),
            ("call_cooldown", self.call_cooldown as f32),
            ("teammate_shot_cooldown", self.teammate_shot_cooldown as f32),
            ("rage_max", self.rage_max as f32),
            ("rage_decay_ticks", self.rage_decay_ticks as f32),
            ("win_target", self.win_target as f32),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        if self.rage_loss_threshold < 0 || self.rage_loss_threshold > self.rage_max {
            return Err(TuningError::BadLossThreshold {
                threshold: self.rage_loss_threshold,
                max: self.rage_max,
            });
        }

        Ok(())
    }

    /// Parse and validate a tuning from JSON text
    pub fn from_json(text: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: &std::path::Path) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
