//! Render-facing view of the simulation
//!
//! Built once per tick and handed to whatever draws the game. Everything is
//! serializable so an out-of-process renderer or analysis tool can consume
//! snapshots as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::court::Rect;
use super::state::{ActorId, GameState, Outcome, Possession};

/// An actor reduced to what the renderer needs: a circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub center: Vec2,
    pub radius: f32,
}

/// Where the ball should be drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BallVisual {
    /// Resting on an actor
    Held(ActorId),
    /// A pass at this position
    Pass(Vec2),
    /// A shot at this point along its arc
    Shot(Vec2),
    /// Momentarily unowned (terminal states only)
    Free,
}

/// HUD scalars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: i32,
    pub opp_score: i32,
    pub kindness: i32,
    pub rage: i32,
    pub rage_max: i32,
    pub player_speed: i32,
    pub win_target: i32,
    pub message: String,
}

/// One tick's read-only view of the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub actors: [ActorView; 4],
    pub left_hoop: Rect,
    pub right_hoop: Rect,
    pub ball: BallVisual,
    pub hud: Hud,
    pub paused: bool,
    pub decision: bool,
    pub outcome: Option<Outcome>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let actor_view = |id: ActorId| {
            let r = state.rect(id);
            ActorView {
                id,
                center: r.center(),
                radius: r.size.x / 2.0,
            }
        };
        let ball = match &state.possession {
            Possession::Held(id) => BallVisual::Held(*id),
            Possession::PassInFlight(pass) => BallVisual::Pass(pass.pos),
            Possession::ShotInFlight(shot) => BallVisual::Shot(shot.ball_pos()),
            Possession::Loose => BallVisual::Free,
        };
        Self {
            actors: [
                actor_view(ActorId::Player),
                actor_view(ActorId::Teammate),
                actor_view(ActorId::Defender1),
                actor_view(ActorId::Defender2),
            ],
            left_hoop: state.court.left_hoop,
            right_hoop: state.court.right_hoop,
            ball,
            hud: Hud {
                score: state.score,
                opp_score: state.opp_score,
                kindness: state.kindness,
                rage: state.rage,
                rage_max: state.tuning.rage_max,
                player_speed: state.player_speed,
                win_target: state.tuning.win_target,
                message: state.message.clone(),
            },
            paused: state.paused,
            decision: state.decision,
            outcome: state.outcome,
        }
    }
}
