//! Probability calculation utilities for play resolution
//!
//! All functions are pure - they take ratings and situation as input and
//! return probabilities or yardage adjustments. The resolver samples them.

use crate::models::{DefenseCall, PassDepth, RunKind};

// ============================================================================
// Baselines
// ============================================================================

pub const SUCCESS_MIN: f32 = 0.3;
pub const SUCCESS_MAX: f32 = 0.7;

pub const BASE_SACK_CHANCE: f32 = 0.05;
pub const BASE_RUN_EXPLOSIVE_CHANCE: f32 = 0.10;
pub const BASE_PASS_EXPLOSIVE_CHANCE: f32 = 0.08;
pub const BASE_INTERCEPTION_CHANCE: f32 = 0.03;

/// 성공 확률 기본값: 0.5 + (공격 - 수비) / 100, clamped to [0.3, 0.7]
#[inline]
pub fn success_probability(offense_strength: f32, defense_strength: f32) -> f32 {
    (0.5 + (offense_strength - defense_strength) / 100.0).clamp(SUCCESS_MIN, SUCCESS_MAX)
}

/// Field goal make probability from yards to the goal line and kicker rating.
///
/// The distance curve is clamped to [0.3, 0.95] before the kicker scale, so a
/// weak kicker can fall below the floor.
#[inline]
pub fn field_goal_probability(distance_to_goal: i32, kicker_overall: f32) -> f32 {
    let curve = (0.9 - (distance_to_goal as f32 - 20.0) / 30.0).clamp(0.3, 0.95);
    (curve * kicker_overall / 100.0).clamp(0.0, 1.0)
}

// ============================================================================
// Defensive call modifiers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefenseModifiers {
    pub sack: f32,
    pub run_yards: i32,
    pub pass_yards: i32,
    pub big_play: f32,
    pub interception: f32,
    /// Extra loss on a stuffed run.
    pub stop_loss: i32,
}

impl DefenseModifiers {
    pub fn for_call(call: DefenseCall) -> Self {
        match call {
            DefenseCall::Man => Self::default(),
            DefenseCall::Blitz => Self {
                sack: 0.10,
                run_yards: 2,
                pass_yards: -2,
                big_play: 0.10,
                interception: 0.0,
                stop_loss: -2,
            },
            DefenseCall::Zone => Self {
                sack: 0.0,
                run_yards: -1,
                pass_yards: -3,
                big_play: -0.05,
                interception: 0.02,
                stop_loss: 0,
            },
        }
    }
}

// ============================================================================
// Play subtype profiles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunProfile {
    pub yard_bonus: i32,
    /// Multiplier on the explosive-run chance.
    pub variance: f32,
}

pub fn run_profile(kind: RunKind) -> RunProfile {
    match kind {
        RunKind::Inside => RunProfile { yard_bonus: 1, variance: 0.8 },
        RunKind::Outside => RunProfile { yard_bonus: -1, variance: 1.5 },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassProfile {
    pub completion_adj: f32,
    pub yard_bonus: i32,
    /// Multiplier on explosive and interception chances.
    pub risk: f32,
}

pub fn pass_profile(depth: PassDepth) -> PassProfile {
    match depth {
        PassDepth::Short => PassProfile { completion_adj: 0.15, yard_bonus: -2, risk: 0.5 },
        PassDepth::Medium => PassProfile { completion_adj: 0.0, yard_bonus: 0, risk: 1.0 },
        PassDepth::Long => PassProfile { completion_adj: -0.15, yard_bonus: 10, risk: 1.8 },
    }
}

#[inline]
pub fn sack_chance(mods: &DefenseModifiers) -> f32 {
    (BASE_SACK_CHANCE + mods.sack).clamp(0.0, 1.0)
}

#[inline]
pub fn completion_probability(success: f32, profile: &PassProfile) -> f32 {
    (success + profile.completion_adj).clamp(0.05, 0.95)
}

#[inline]
pub fn run_explosive_chance(profile: &RunProfile, mods: &DefenseModifiers) -> f32 {
    (BASE_RUN_EXPLOSIVE_CHANCE * profile.variance + mods.big_play).clamp(0.0, 1.0)
}

#[inline]
pub fn pass_explosive_chance(profile: &PassProfile, mods: &DefenseModifiers) -> f32 {
    (BASE_PASS_EXPLOSIVE_CHANCE * profile.risk + mods.big_play).clamp(0.0, 1.0)
}

#[inline]
pub fn interception_chance(profile: &PassProfile, mods: &DefenseModifiers) -> f32 {
    (BASE_INTERCEPTION_CHANCE * profile.risk + mods.interception).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_probability_clamped() {
        assert!((success_probability(70.0, 70.0) - 0.5).abs() < 0.001);
        assert!((success_probability(80.0, 70.0) - 0.6).abs() < 0.001);
        assert!((success_probability(99.0, 40.0) - SUCCESS_MAX).abs() < 0.001);
        assert!((success_probability(40.0, 99.0) - SUCCESS_MIN).abs() < 0.001);
    }

    #[test]
    fn test_field_goal_probability_curve() {
        // 20 yards out with a perfect kicker: 0.9
        assert!((field_goal_probability(20, 100.0) - 0.9).abs() < 0.001);
        // Very close kicks cap at 0.95 before the kicker scale
        assert!((field_goal_probability(5, 100.0) - 0.95).abs() < 0.001);
        // Long kicks floor at 0.3 before the kicker scale
        assert!((field_goal_probability(60, 100.0) - 0.3).abs() < 0.001);
        // Default kicker (70) scales the curve
        assert!((field_goal_probability(20, 70.0) - 0.63).abs() < 0.001);
    }

    #[test]
    fn test_longer_kicks_are_harder() {
        assert!(field_goal_probability(15, 80.0) > field_goal_probability(30, 80.0));
    }

    #[test]
    fn test_defense_modifier_table() {
        let blitz = DefenseModifiers::for_call(DefenseCall::Blitz);
        assert!((blitz.sack - 0.10).abs() < 0.001);
        assert_eq!(blitz.run_yards, 2);
        assert_eq!(blitz.pass_yards, -2);
        assert!((blitz.big_play - 0.10).abs() < 0.001);

        let zone = DefenseModifiers::for_call(DefenseCall::Zone);
        assert_eq!(zone.run_yards, -1);
        assert_eq!(zone.pass_yards, -3);
        assert!((zone.big_play + 0.05).abs() < 0.001);
        assert!((zone.interception - 0.02).abs() < 0.001);

        assert_eq!(DefenseModifiers::for_call(DefenseCall::Man), DefenseModifiers::default());
    }

    #[test]
    fn test_long_passes_riskier_than_short() {
        let mods = DefenseModifiers::default();
        let short = pass_profile(PassDepth::Short);
        let long = pass_profile(PassDepth::Long);
        assert!(interception_chance(&long, &mods) > interception_chance(&short, &mods));
        assert!(pass_explosive_chance(&long, &mods) > pass_explosive_chance(&short, &mods));
        assert!(completion_probability(0.5, &short) > completion_probability(0.5, &long));
    }

    #[test]
    fn test_zone_never_produces_negative_chances() {
        let zone = DefenseModifiers::for_call(DefenseCall::Zone);
        let inside = run_profile(RunKind::Inside);
        assert!(run_explosive_chance(&inside, &zone) >= 0.0);
        assert!(sack_chance(&zone) >= 0.0);
    }
}
