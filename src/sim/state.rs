//! Game state and core simulation types
//!
//! A single owned [`GameState`] aggregate holds every entity and session
//! counter; the tick loop takes it by exclusive reference. Possession is one
//! tagged value, so two simultaneous ball holders are unrepresentable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::court::{self, Court, Rect};
use super::flight::{PassFlight, ShotFlight};
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// The four actors on the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorId {
    Player,
    Teammate,
    Defender1,
    Defender2,
}

/// Which side an actor plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// The player and the AI teammate; they attack the right hoop
    Home,
    /// The two AI defenders; they attack the left hoop
    Away,
}

impl ActorId {
    pub fn team(self) -> Team {
        match self {
            ActorId::Player | ActorId::Teammate => Team::Home,
            ActorId::Defender1 | ActorId::Defender2 => Team::Away,
        }
    }

    pub fn is_defender(self) -> bool {
        self.team() == Team::Away
    }

    /// Defender for a pair index (0 or 1)
    pub fn defender(index: usize) -> ActorId {
        if index == 0 {
            ActorId::Defender1
        } else {
            ActorId::Defender2
        }
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Score + kindness reached the win target
    Won,
    /// Rage reached the loss threshold
    Lost,
}

/// Who controls the ball, or that it is in the air
///
/// `Loose` only appears transiently while an outcome is being resolved, or
/// as the resting state when game-over interrupts a hand-off.
#[derive(Debug, Clone, PartialEq)]
pub enum Possession {
    Held(ActorId),
    PassInFlight(PassFlight),
    ShotInFlight(ShotFlight),
    Loose,
}

impl Possession {
    pub fn holder(&self) -> Option<ActorId> {
        match self {
            Possession::Held(id) => Some(*id),
            _ => None,
        }
    }

    pub fn shot(&self) -> Option<&ShotFlight> {
        match self {
            Possession::ShotInFlight(shot) => Some(shot),
            _ => None,
        }
    }

    /// Whether a pass or shot is airborne
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            Possession::PassInFlight(_) | Possession::ShotInFlight(_)
        )
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub court: Court,

    // Entities
    pub player: Rect,
    pub teammate: Rect,
    /// The defender pair; role swaps exchange the indices
    pub defenders: [Rect; 2],

    // Runtime speeds (reset to the tuning defaults)
    pub player_speed: i32,
    pub teammate_speed: i32,
    pub defender_speed: i32,

    pub possession: Possession,

    // Session counters
    pub score: i32,
    pub opp_score: i32,
    pub kindness: i32,
    pub rage: i32,
    rage_decay_tick: u32,
    pub teammate_shot_cooldown: u32,
    pub steal_cooldown: u32,
    pub call_cooldown: u32,

    // Mode flags
    pub paused: bool,
    /// Ball frozen on the player, awaiting a Shoot/Pass choice
    pub decision: bool,
    pub outcome: Option<Outcome>,

    /// Last notable event, for the HUD
    pub message: String,

    // Off-ball drift targets (top-left coordinates, like spawn points)
    pub player_target: Vec2,
    pub teammate_target: Vec2,

    pub time_ticks: u64,
}

fn spawn_player() -> Rect {
    Rect::new(150.0, COURT_HEIGHT / 2.0, PLAYER_SIZE, PLAYER_SIZE)
}

fn spawn_teammate() -> Rect {
    Rect::new(250.0, COURT_HEIGHT / 2.0 - 60.0, TEAMMATE_SIZE, TEAMMATE_SIZE)
}

fn spawn_defenders() -> [Rect; 2] {
    [
        Rect::new(COURT_WIDTH - 200.0, COURT_HEIGHT / 2.0, DEFENDER_SIZE, DEFENDER_SIZE),
        Rect::new(
            COURT_WIDTH - 250.0,
            COURT_HEIGHT / 2.0 - 60.0,
            DEFENDER_SIZE,
            DEFENDER_SIZE,
        ),
    ]
}

impl GameState {
    /// Create a fresh session, failing fast on invalid tuning
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let player_speed = tuning.player_speed;
        let teammate_speed = tuning.teammate_speed;
        let defender_speed = tuning.defender_speed;
        let mut state = Self {
            tuning,
            court: Court::standard(),
            player: spawn_player(),
            teammate: spawn_teammate(),
            defenders: spawn_defenders(),
            player_speed,
            teammate_speed,
            defender_speed,
            possession: Possession::Loose,
            score: 0,
            opp_score: 0,
            kindness: 0,
            rage: 0,
            rage_decay_tick: 0,
            teammate_shot_cooldown: 0,
            steal_cooldown: 0,
            call_cooldown: 0,
            paused: false,
            decision: false,
            outcome: None,
            message: String::new(),
            player_target: Vec2::ZERO,
            teammate_target: Vec2::ZERO,
            time_ticks: 0,
        };
        state.hard_reset();
        Ok(state)
    }

    /// Create a session with the default tuning
    pub fn with_defaults() -> Self {
        // default tuning always validates; new() only fails on bad tuning
        match Self::new(Tuning::default()) {
            Ok(state) => state,
            Err(_) => unreachable!("default tuning is valid"),
        }
    }

    pub fn rect(&self, id: ActorId) -> &Rect {
        match id {
            ActorId::Player => &self.player,
            ActorId::Teammate => &self.teammate,
            ActorId::Defender1 => &self.defenders[0],
            ActorId::Defender2 => &self.defenders[1],
        }
    }

    /// The hoop a team scores on
    pub fn scoring_hoop(&self, team: Team) -> &Rect {
        match team {
            Team::Home => &self.court.right_hoop,
            Team::Away => &self.court.left_hoop,
        }
    }

    /// Distance from a box to the nearest defender
    pub fn nearest_defender_distance(&self, r: &Rect) -> f32 {
        let d0 = court::distance(r, &self.defenders[0]);
        let d1 = court::distance(r, &self.defenders[1]);
        d0.min(d1)
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Restore every field to its session default and give the player the
    /// ball (entering decision mode). Total and idempotent from any state.
    pub fn hard_reset(&mut self) {
        self.player_speed = self.tuning.player_speed;
        self.teammate_speed = self.tuning.teammate_speed;
        self.defender_speed = self.tuning.defender_speed;

        self.player = spawn_player();
        self.teammate = spawn_teammate();
        self.defenders = spawn_defenders();
        self.player_target = self.player.pos;
        self.teammate_target = self.teammate.pos;

        self.score = 0;
        self.opp_score = 0;
        self.kindness = 0;
        self.rage = 0;
        self.rage_decay_tick = 0;
        self.teammate_shot_cooldown = 0;
        self.steal_cooldown = 0;
        self.call_cooldown = 0;

        self.possession = Possession::Loose;
        self.paused = false;
        self.decision = false;
        self.outcome = None;
        self.message = "Reset.".into();
        self.time_ticks = 0;

        log::info!("hard reset");
        self.give_ball_to(ActorId::Player);
    }

    /// Hand the ball to an actor. No-op once the session is over. Entering
    /// player possession freezes the game into decision mode when the
    /// freeze-on-possession policy is active.
    pub fn give_ball_to(&mut self, who: ActorId) {
        if self.game_over() {
            return;
        }
        self.possession = Possession::Held(who);
        if who == ActorId::Player && self.tuning.freeze_on_possession {
            self.enter_decision();
        }
    }

    /// Launch a pass from one actor toward another's current center
    pub fn start_pass(&mut self, from: ActorId, to: ActorId, ticks: u32) {
        let origin = self.rect(from).center();
        let dest = self.rect(to).center();
        self.possession = Possession::PassInFlight(PassFlight::new(origin, to, dest, ticks));
        self.message = "Passing...".into();
    }

    pub fn enter_decision(&mut self) {
        self.decision = true;
        self.message = "Your ball. Choose: Shoot or Pass.".into();
    }

    pub fn exit_decision(&mut self) {
        self.decision = false;
    }

    /// Move the rage meter and re-check the loss condition. Clamped to
    /// [0, rage_max]; a no-op once the session is over.
    pub fn adjust_rage(&mut self, delta: i32, note: &str) {
        if self.game_over() {
            return;
        }
        let old = self.rage;
        self.rage = (self.rage + delta).clamp(0, self.tuning.rage_max);
        self.message = format!("{note} Rage {old}->{}.", self.rage);
        self.check_rage_loss();
    }

    fn check_rage_loss(&mut self) {
        if self.outcome.is_none() && self.rage >= self.tuning.rage_loss_threshold {
            self.outcome = Some(Outcome::Lost);
            self.paused = true;
            self.decision = false;
            self.message = "You lost! Too much rage.".into();
            log::info!("session lost at rage {}", self.rage);
        }
    }

    /// Re-check the win condition after a score or kindness change
    pub fn check_win(&mut self) {
        if self.outcome.is_none() && self.score + self.kindness >= self.tuning.win_target {
            self.outcome = Some(Outcome::Won);
            self.paused = true;
            self.decision = false;
            self.message = "You win!".into();
            log::info!(
                "session won: score {} + kindness {}",
                self.score,
                self.kindness
            );
        }
    }

    /// Passive rage decay: -1 per `rage_decay_ticks` live ticks while the
    /// meter is above zero. The counter only advances while rage > 0.
    pub fn decay_rage(&mut self) {
        if self.rage > 0 {
            self.rage_decay_tick += 1;
            if self.rage_decay_tick >= self.tuning.rage_decay_ticks {
                self.rage = (self.rage - 1).max(0);
                self.rage_decay_tick = 0;
            }
        }
    }

    /// Adjust all speeds by a delta, clamped to their role bounds
    pub fn adjust_speed(&mut self, delta: i32) {
        let t = &self.tuning;
        self.player_speed =
            (self.player_speed + delta).clamp(t.player_speed_min, t.player_speed_max);
        self.teammate_speed = (self.teammate_speed + delta).clamp(t.ai_speed_min, t.ai_speed_max);
        self.defender_speed = (self.defender_speed + delta).clamp(t.ai_speed_min, t.ai_speed_max);
        self.message = format!(
            "Speeds -> Player:{}  Teammate:{}  Defenders:{}",
            self.player_speed, self.teammate_speed, self.defender_speed
        );
    }

    /// Toggle pause; ignored once the session is over
    pub fn toggle_pause(&mut self) {
        if self.game_over() {
            return;
        }
        self.paused = !self.paused;
        self.message = if self.paused {
            "Paused.".into()
        } else {
            "Resumed!".into()
        };
    }
}
