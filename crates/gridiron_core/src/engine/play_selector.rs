//! Play Selector
//!
//! Situation-driven play calling for sides without a queued human call.

use rand::Rng;

use super::game_state::{GameState, TeamState};
use crate::models::{DefenseCall, PassDepth, PlayType, RunKind};

/// Field positions from which a fourth-down kick is always attempted.
pub const FIELD_GOAL_RANGE: std::ops::RangeInclusive<i32> = 70..=85;
/// Fourth down short of midfield is always a punt.
pub const PUNT_LINE: i32 = 50;
/// Longest fourth-down distance worth going for.
pub const GO_FOR_IT_DISTANCE: i32 = 3;

/// Choose the offensive play for the team on the clock.
pub fn select_offensive_play<R: Rng + ?Sized>(
    team: &TeamState,
    _state: &GameState,
    rng: &mut R,
) -> PlayType {
    match team.down {
        4 => fourth_down_play(team, rng),
        3 => scrimmage_play(0.7, rng),
        _ => scrimmage_play(0.6, rng),
    }
}

/// Computer defenses play man coverage; blitz and zone come from human calls.
pub fn select_defensive_call(_team: &TeamState, _state: &GameState) -> DefenseCall {
    DefenseCall::Man
}

fn fourth_down_play<R: Rng + ?Sized>(team: &TeamState, rng: &mut R) -> PlayType {
    if FIELD_GOAL_RANGE.contains(&team.field_position) {
        PlayType::FieldGoal
    } else if team.field_position < PUNT_LINE {
        PlayType::Punt
    } else if team.distance <= GO_FOR_IT_DISTANCE {
        scrimmage_play(0.5, rng)
    } else {
        PlayType::Punt
    }
}

fn scrimmage_play<R: Rng + ?Sized>(pass_weight: f32, rng: &mut R) -> PlayType {
    if rng.gen::<f32>() < pass_weight {
        PlayType::Pass(pass_depth(rng))
    } else {
        PlayType::Run(run_kind(rng))
    }
}

fn run_kind<R: Rng + ?Sized>(rng: &mut R) -> RunKind {
    if rng.gen::<f32>() < 0.6 {
        RunKind::Inside
    } else {
        RunKind::Outside
    }
}

fn pass_depth<R: Rng + ?Sized>(rng: &mut R) -> PassDepth {
    let roll = rng.gen::<f32>();
    if roll < 0.3 {
        PassDepth::Short
    } else if roll < 0.7 {
        PassDepth::Medium
    } else {
        PassDepth::Long
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> GameState {
        GameState::new(Team::new(1, "Home", vec![]), Team::new(2, "Away", vec![]))
    }

    fn select_at(state: &mut GameState, down: u8, distance: i32, field_position: i32, seed: u64) -> PlayType {
        state.home.down = down;
        state.home.distance = distance;
        state.home.field_position = field_position;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        select_offensive_play(&state.home, state, &mut rng)
    }

    #[test]
    fn test_fourth_down_in_range_always_kicks() {
        let mut state = state();
        for seed in 0..50 {
            for distance in [1, 3, 10, 20] {
                assert_eq!(select_at(&mut state, 4, distance, 78, seed), PlayType::FieldGoal);
            }
        }
        assert_eq!(select_at(&mut state, 4, 8, 70, 0), PlayType::FieldGoal);
        assert_eq!(select_at(&mut state, 4, 8, 85, 0), PlayType::FieldGoal);
    }

    #[test]
    fn test_fourth_down_own_territory_punts() {
        let mut state = state();
        for seed in 0..50 {
            assert_eq!(select_at(&mut state, 4, 1, 49, seed), PlayType::Punt);
        }
    }

    #[test]
    fn test_fourth_and_long_past_midfield_punts() {
        let mut state = state();
        for seed in 0..50 {
            assert_eq!(select_at(&mut state, 4, 7, 60, seed), PlayType::Punt);
        }
    }

    #[test]
    fn test_fourth_and_short_past_midfield_goes_for_it() {
        let mut state = state();
        let mut runs = 0;
        let mut passes = 0;
        for seed in 0..400 {
            match select_at(&mut state, 4, 2, 60, seed) {
                PlayType::Run(_) => runs += 1,
                PlayType::Pass(_) => passes += 1,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(runs > 120 && passes > 120, "runs={runs} passes={passes}");
    }

    #[test]
    fn test_third_down_passes_more_than_first() {
        let mut state = state();
        let passes = |state: &mut GameState, down: u8| {
            (0..2000u64)
                .filter(|&seed| matches!(select_at(state, down, 10, 40, seed), PlayType::Pass(_)))
                .count()
        };
        let first = passes(&mut state, 1);
        let third = passes(&mut state, 3);
        assert!((1050..=1350).contains(&first), "first down passes = {first}");
        assert!((1250..=1550).contains(&third), "third down passes = {third}");
    }

    #[test]
    fn test_early_downs_never_kick() {
        let mut state = state();
        for down in 1..=3 {
            for seed in 0..100 {
                let play = select_at(&mut state, down, 10, 80, seed);
                assert!(matches!(play, PlayType::Run(_) | PlayType::Pass(_)));
            }
        }
    }

    #[test]
    fn test_default_defense_is_man() {
        let state = state();
        assert_eq!(select_defensive_call(&state.away, &state), DefenseCall::Man);
    }
}
