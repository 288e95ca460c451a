//! Outcome Resolver
//!
//! Turns a chosen play and defensive call into a [`PlayResult`]. Resolution
//! reads the two teams and samples the injected random source; it never
//! mutates game state. Touchdowns, safeties and turnovers on downs are
//! decided later by the possession manager from the yardage produced here.

use rand::seq::SliceRandom;
use rand::Rng;

use super::game_state::{GameState, TeamState};
use super::probability::{
    self, completion_probability, field_goal_probability, interception_chance,
    pass_explosive_chance, pass_profile, run_explosive_chance, run_profile, sack_chance,
    DefenseModifiers,
};
use crate::models::{
    DefenseCall, PassDepth, PlayOutcome, PlayParticipants, PlayResult, PlayType, PlayerId, RunKind,
};

/// Resolve a play for the team currently in possession.
pub fn resolve<R: Rng + ?Sized>(
    state: &GameState,
    play: PlayType,
    call: DefenseCall,
    rng: &mut R,
) -> PlayResult {
    resolve_for(state.offense(), state.defense(), play, call, rng)
}

/// Resolve a play between two explicit team states.
pub fn resolve_for<R: Rng + ?Sized>(
    offense: &TeamState,
    defense: &TeamState,
    play: PlayType,
    call: DefenseCall,
    rng: &mut R,
) -> PlayResult {
    let result = match play {
        PlayType::Run(kind) => resolve_run(offense, defense, kind, call, rng),
        PlayType::Pass(depth) => resolve_pass(offense, defense, depth, call, rng),
        PlayType::FieldGoal => resolve_field_goal(offense, call, rng),
        PlayType::Punt => resolve_punt(offense, call, rng),
    };
    debug_assert_eq!(result.play, play);
    result
}

fn resolve_run<R: Rng + ?Sized>(
    offense: &TeamState,
    defense: &TeamState,
    kind: RunKind,
    call: DefenseCall,
    rng: &mut R,
) -> PlayResult {
    let mods = DefenseModifiers::for_call(call);
    let profile = run_profile(kind);
    let success =
        probability::success_probability(offense.strength.offense, defense.strength.run_defense);
    let carrier = offense.depth.lead_rusher();

    let mut explosive = false;
    let yards = if rng.gen::<f32>() < success {
        if rng.gen::<f32>() < run_explosive_chance(&profile, &mods) {
            explosive = true;
            rng.gen_range(10..=25)
        } else {
            rng.gen_range(2..=8) + profile.yard_bonus + mods.run_yards
        }
    } else {
        rng.gen_range(-2..=3) + mods.stop_loss
    };

    let direction = match kind {
        RunKind::Inside => "inside",
        RunKind::Outside => "outside",
    };
    let message = format!(
        "{} runs {} {}",
        player_label(offense, carrier, "RB"),
        direction,
        yardage_phrase(yards)
    );

    PlayResult {
        play: PlayType::Run(kind),
        defense: call,
        outcome: PlayOutcome::Gain,
        snap_outcome: PlayOutcome::Gain,
        yards,
        message,
        participants: PlayParticipants { ball_carrier: carrier, ..Default::default() },
        explosive,
    }
}

fn resolve_pass<R: Rng + ?Sized>(
    offense: &TeamState,
    defense: &TeamState,
    depth: PassDepth,
    call: DefenseCall,
    rng: &mut R,
) -> PlayResult {
    let mods = DefenseModifiers::for_call(call);
    let profile = pass_profile(depth);
    let passer = offense.depth.quarterback;
    let qb = player_label(offense, passer, "QB");

    if rng.gen::<f32>() < sack_chance(&mods) {
        let yards: i32 = -rng.gen_range(5..=10);
        return PlayResult {
            play: PlayType::Pass(depth),
            defense: call,
            outcome: PlayOutcome::Sack,
            snap_outcome: PlayOutcome::Sack,
            yards,
            message: format!("{} sacked {}", qb, yardage_phrase(yards)),
            participants: PlayParticipants { passer, ..Default::default() },
            explosive: false,
        };
    }

    let target = offense.depth.receivers.choose(rng).copied();
    let receiver = player_label(offense, target, "WR");
    let participants = PlayParticipants { passer, target, ..Default::default() };
    let depth_label = match depth {
        PassDepth::Short => "short",
        PassDepth::Medium => "medium",
        PassDepth::Long => "deep",
    };

    let success =
        probability::success_probability(offense.strength.offense, defense.strength.pass_defense);
    if rng.gen::<f32>() >= completion_probability(success, &profile) {
        return PlayResult {
            play: PlayType::Pass(depth),
            defense: call,
            outcome: PlayOutcome::Incomplete,
            snap_outcome: PlayOutcome::Incomplete,
            yards: 0,
            message: format!("{} pass {} incomplete, intended for {}", qb, depth_label, receiver),
            participants,
            explosive: false,
        };
    }

    if rng.gen::<f32>() < interception_chance(&profile, &mods) {
        return PlayResult {
            play: PlayType::Pass(depth),
            defense: call,
            outcome: PlayOutcome::Turnover,
            snap_outcome: PlayOutcome::Turnover,
            yards: 0,
            message: format!("{} pass {} INTERCEPTED", qb, depth_label),
            participants,
            explosive: false,
        };
    }

    let mut explosive = false;
    let yards = if rng.gen::<f32>() < pass_explosive_chance(&profile, &mods) {
        explosive = true;
        rng.gen_range(20..=50)
    } else {
        (rng.gen_range(5..=15) + profile.yard_bonus + mods.pass_yards).max(0)
    };

    PlayResult {
        play: PlayType::Pass(depth),
        defense: call,
        outcome: PlayOutcome::Gain,
        snap_outcome: PlayOutcome::Gain,
        yards,
        message: format!(
            "{} pass {} complete to {} {}",
            qb,
            depth_label,
            receiver,
            yardage_phrase(yards)
        ),
        participants,
        explosive,
    }
}

fn resolve_field_goal<R: Rng + ?Sized>(
    offense: &TeamState,
    call: DefenseCall,
    rng: &mut R,
) -> PlayResult {
    let distance = offense.yards_to_goal();
    let kicker = offense.depth.kicker;
    let make = rng.gen::<f32>() < field_goal_probability(distance, offense.strength.kicker);
    // Spot of the kick is seven yards behind the line, plus ten for the end zone.
    let kick_length = distance + 17;
    let label = player_label(offense, kicker, "K");

    let (outcome, message) = if make {
        (PlayOutcome::FieldGoal, format!("{}-yard field goal by {} is GOOD", kick_length, label))
    } else {
        (
            PlayOutcome::FieldGoalMiss,
            format!("{}-yard field goal by {} is NO GOOD", kick_length, label),
        )
    };

    PlayResult {
        play: PlayType::FieldGoal,
        defense: call,
        outcome,
        snap_outcome: outcome,
        yards: 0,
        message,
        participants: PlayParticipants { kicker, ..Default::default() },
        explosive: false,
    }
}

fn resolve_punt<R: Rng + ?Sized>(offense: &TeamState, call: DefenseCall, rng: &mut R) -> PlayResult {
    let yards = rng.gen_range(35..=50);
    PlayResult {
        play: PlayType::Punt,
        defense: call,
        outcome: PlayOutcome::Punt,
        snap_outcome: PlayOutcome::Punt,
        yards,
        message: format!("{} punts {} yards", offense.team.name, yards),
        participants: PlayParticipants::default(),
        explosive: false,
    }
}

fn player_label(team: &TeamState, id: Option<PlayerId>, fallback: &str) -> String {
    id.and_then(|id| team.team.player(id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn yardage_phrase(yards: i32) -> String {
    match yards {
        0 => "for no gain".to_string(),
        1 => "for 1 yard".to_string(),
        y if y > 0 => format!("for {} yards", y),
        -1 => "for a loss of 1 yard".to_string(),
        y => format!("for a loss of {} yards", -y),
    }
}
