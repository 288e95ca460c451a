//! Gridiron CLI support
//!
//! Team/config loading and output formatting for the `gridiron` binary.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use gridiron_core::{EngineConfig, GameEvent, GameResult, Team, TeamSide, Tempo};

/// Read a team snapshot (id, name, roster) from a JSON file.
pub fn load_team(path: &Path) -> Result<Team> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file: {}", path.display()))?;
    let mut team: Team = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse team JSON: {}", path.display()))?;
    if team.abbr.is_empty() {
        team = Team::new(team.id, team.name, team.roster);
    }
    Ok(team)
}

/// Config file (if any), then the tempo flag on top.
pub fn load_config(path: Option<&Path>, tempo: Option<Tempo>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(tempo) = tempo {
        config.tempo = tempo;
    }
    config.validate().context("Invalid engine config")?;
    Ok(config)
}

/// One JSON object per line.
pub fn write_events<W: Write>(out: &mut W, events: &[GameEvent]) -> Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Plain-text final score, line score and team totals.
pub fn box_score(result: &GameResult, home: &Team, away: &Team) -> String {
    let mut out = String::new();
    let label = |team: &Team| if team.abbr.is_empty() { team.name.clone() } else { team.abbr.clone() };
    let (home_label, away_label) = (label(home), label(away));

    let _ = writeln!(out, "{:<6} {:>3} {:>3} {:>3} {:>3}  {:>4}", "", "Q1", "Q2", "Q3", "Q4", "T");
    for (side, name, total) in [
        (TeamSide::Away, &away_label, result.away_score),
        (TeamSide::Home, &home_label, result.home_score),
    ] {
        let q = result.quarter_scores[side.index()];
        let _ = writeln!(out, "{:<6} {:>3} {:>3} {:>3} {:>3}  {:>4}", name, q[0], q[1], q[2], q[3], total);
    }
    let _ = writeln!(out);

    let (a, h) = (result.team_stats(TeamSide::Away), result.team_stats(TeamSide::Home));
    let _ = writeln!(out, "{:<14} {:>6} {:>6}", "", away_label, home_label);
    for (title, away, home) in [
        ("Plays", a.plays as i32, h.plays as i32),
        ("Total yards", a.total_yards, h.total_yards),
        ("Rushing", a.rushing_yards, h.rushing_yards),
        ("Passing", a.passing_yards, h.passing_yards),
        ("First downs", a.first_downs as i32, h.first_downs as i32),
        ("Turnovers", a.turnovers as i32, h.turnovers as i32),
        ("Sacks taken", a.sacks_taken as i32, h.sacks_taken as i32),
        ("Drives", a.drives as i32, h.drives as i32),
    ] {
        let _ = writeln!(out, "{:<14} {:>6} {:>6}", title, away, home);
    }

    if result.forced_end {
        let _ = writeln!(out, "\n(game ended early: play ceiling reached)");
    }
    out
}
