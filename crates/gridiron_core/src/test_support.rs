//! Roster fixtures shared by unit tests.

use crate::models::{Player, PlayerId, Position, Team};

/// A full 22-man roster plus specialists, all rated `overall`.
pub fn team(id: u32, name: &str, overall: u8) -> Team {
    use Position::*;
    let layout = [
        (QB, 1),
        (RB, 2),
        (WR, 3),
        (TE, 1),
        (OL, 5),
        (DL, 4),
        (LB, 3),
        (CB, 2),
        (S, 2),
        (K, 1),
        (P, 1),
    ];
    let mut roster = Vec::new();
    let mut next: PlayerId = id * 100;
    for (position, count) in layout {
        for n in 0..count {
            next += 1;
            roster.push(Player {
                id: next,
                name: format!("{} {}{}", name, position, n + 1),
                position,
                overall,
            });
        }
    }
    Team::new(id, name, roster)
}
