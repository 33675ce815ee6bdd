//! Probabilistic action resolution
//!
//! The contest formulas are pure: they turn distances into probabilities
//! and leave the actual draw to the caller's RNG, so outcomes stay
//! deterministic under a seeded source and the formulas can be tested
//! exactly.

use super::court::{self, Rect};
use super::state::{ActorId, Team};

/// Radius inside which a defender contests a shot
pub const CONTEST_RADIUS: f32 = 80.0;
/// Radius inside which a defender can block a player shot
pub const BLOCK_RADIUS: f32 = 60.0;
/// Radius inside which a defender pressures a passer or receiver
pub const PRESSURE_RADIUS: f32 = 60.0;

#[inline]
fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Probability that a shot falls, from shooter-to-hoop distance and
/// defensive pressure.
///
/// Base drops linearly from 0.85 over the 40..240 distance band; the
/// nearest defender inside [`CONTEST_RADIUS`] takes up to another 0.35.
/// Result clamped to [0.05, 0.95].
pub fn shot_make_probability(shooter: &Rect, hoop: &Rect, defenders: [&Rect; 2]) -> f32 {
    let d = (shooter.center() - hoop.center()).length();
    let base = 0.85 - clamp01((d - 40.0) / 200.0) * 0.65;
    let closest = court::distance(shooter, defenders[0]).min(court::distance(shooter, defenders[1]));
    let contest = clamp01((CONTEST_RADIUS - closest) / CONTEST_RADIUS);
    (base - 0.35 * contest).clamp(0.05, 0.95)
}

/// Probability that a player shot is blocked at release. Only consulted
/// when the nearest defender is inside [`BLOCK_RADIUS`].
pub fn block_probability(defender_distance: f32) -> f32 {
    0.02 + clamp01((BLOCK_RADIUS - defender_distance) / BLOCK_RADIUS) * 0.25
}

/// Probability that a player steal succeeds at the given distance.
/// Linear falloff across the steal range, clamped to [0.10, 0.45].
pub fn steal_probability(distance: f32, steal_range: f32) -> f32 {
    (0.45 - (distance / steal_range.max(1.0)) * 0.35).clamp(0.10, 0.45)
}

/// The teammate's willingness to answer a call for the ball.
///
/// Base falls from 0.85 over the 60..300 distance band; a defender within
/// [`PRESSURE_RADIUS`] of the passer and/or the receiver each shave 0.25
/// (the penalties stack). Clamped to [0.10, 0.90].
pub fn call_compliance_probability(
    distance: f32,
    passer_pressure: f32,
    receiver_pressure: f32,
) -> f32 {
    let base = 0.85 - clamp01((distance - 60.0) / 240.0) * 0.50;
    let mut penalty = 0.0;
    if passer_pressure < PRESSURE_RADIUS {
        penalty += 0.25;
    }
    if receiver_pressure < PRESSURE_RADIUS {
        penalty += 0.25;
    }
    (base - penalty).clamp(0.10, 0.90)
}

/// Rebound pool after a miss: six entries biased toward the team that was
/// defending the shot.
pub fn rebound_pool(shooting_team: Team) -> [ActorId; 6] {
    match shooting_team {
        Team::Home => [
            ActorId::Defender1,
            ActorId::Defender2,
            ActorId::Player,
            ActorId::Teammate,
            ActorId::Defender1,
            ActorId::Defender2,
        ],
        Team::Away => [
            ActorId::Player,
            ActorId::Teammate,
            ActorId::Player,
            ActorId::Teammate,
            ActorId::Defender1,
            ActorId::Defender2,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn rect_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 28.0, 28.0)
    }

    /// Place a 28x28 box so its center-to-center distance to `from` is `d`
    fn rect_at_distance(from: &Rect, d: f32) -> Rect {
        let c = from.center() + Vec2::new(d, 0.0);
        Rect::new(c.x - 14.0, c.y - 14.0, 28.0, 28.0)
    }

    #[test]
    fn test_point_blank_uncontested_shot_is_085() {
        let hoop = Rect::new(830.0, 220.0, 20.0, 100.0);
        let shooter = rect_at_distance(&hoop, 40.0);
        let far = rect_at(0.0, 0.0);
        let p = shot_make_probability(&shooter, &hoop, [&far, &far]);
        assert!((p - 0.85).abs() < 1e-4, "p = {p}");
    }

    #[test]
    fn test_deep_contested_shot_floors_at_005() {
        let hoop = Rect::new(830.0, 220.0, 20.0, 100.0);
        let shooter = rect_at_distance(&hoop, 260.0);
        // defender on top of the shooter: full contest
        let p = shot_make_probability(&shooter, &hoop, [&shooter, &shooter]);
        assert!((p - 0.05).abs() < 1e-4, "p = {p}");
    }

    #[test]
    fn test_make_probability_never_leaves_bounds() {
        let hoop = Rect::new(830.0, 220.0, 20.0, 100.0);
        for d in [0.0, 40.0, 100.0, 240.0, 800.0] {
            let shooter = rect_at_distance(&hoop, d);
            for def_d in [0.0, 30.0, 80.0, 400.0] {
                let def = rect_at_distance(&shooter, def_d);
                let p = shot_make_probability(&shooter, &hoop, [&def, &def]);
                assert!((0.05..=0.95).contains(&p), "p = {p} at d={d}, def={def_d}");
            }
        }
    }

    #[test]
    fn test_block_probability_rises_with_proximity() {
        assert!((block_probability(60.0) - 0.02).abs() < 1e-6);
        assert!((block_probability(0.0) - 0.27).abs() < 1e-6);
        assert!(block_probability(10.0) > block_probability(50.0));
    }

    #[test]
    fn test_steal_at_max_range_is_010() {
        let p = steal_probability(36.0, 36.0);
        assert!((p - 0.10).abs() < 1e-6, "p = {p}");
    }

    #[test]
    fn test_steal_point_blank_caps_at_045() {
        let p = steal_probability(0.0, 36.0);
        assert!((p - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_call_compliance_close_and_open_is_085() {
        let p = call_compliance_probability(60.0, 200.0, 200.0);
        assert!((p - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_call_compliance_penalties_stack() {
        let open = call_compliance_probability(60.0, 200.0, 200.0);
        let one = call_compliance_probability(60.0, 30.0, 200.0);
        let both = call_compliance_probability(60.0, 30.0, 30.0);
        assert!((open - one - 0.25).abs() < 1e-6);
        assert!((one - both - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_call_compliance_floors_at_010() {
        // far and doubled pressure would go negative without the clamp
        let p = call_compliance_probability(360.0, 0.0, 0.0);
        assert!((p - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_rebound_pool_biases_defending_team() {
        let pool = rebound_pool(Team::Home);
        let defender_entries = pool.iter().filter(|id| id.is_defender()).count();
        assert_eq!(pool.len(), 6);
        assert_eq!(defender_entries, 4);

        let pool = rebound_pool(Team::Away);
        let home_entries = pool.iter().filter(|id| !id.is_defender()).count();
        assert_eq!(home_entries, 4);
    }
}
