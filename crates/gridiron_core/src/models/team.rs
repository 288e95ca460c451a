use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster identifier for a player.
pub type PlayerId = u32;

/// Which side of the scoreboard a team sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// Momentum sign: positive favors Home.
    #[inline]
    pub const fn momentum_sign(self) -> i32 {
        match self {
            TeamSide::Home => 1,
            TeamSide::Away => -1,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }
}

/// Deserialized through [`FromStr`], so roster files may use common aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    CB,
    S,
    K,
    P,
}

impl Position {
    pub fn is_skill(self) -> bool {
        matches!(self, Position::QB | Position::RB | Position::WR | Position::TE)
    }

    pub fn is_front_seven(self) -> bool {
        matches!(self, Position::DL | Position::LB)
    }

    pub fn is_secondary(self) -> bool {
        matches!(self, Position::CB | Position::S)
    }

    pub fn is_receiver(self) -> bool {
        matches!(self, Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::K => "K",
            Position::P => "P",
        };
        f.write_str(s)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" | "FB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "OL" | "OT" | "OG" | "C" => Ok(Position::OL),
            "DL" | "DE" | "DT" => Ok(Position::DL),
            "LB" | "OLB" | "MLB" => Ok(Position::LB),
            "CB" => Ok(Position::CB),
            "S" | "FS" | "SS" => Ok(Position::S),
            "K" => Ok(Position::K),
            "P" => Ok(Position::P),
            other => Err(format!("Invalid position: {}", other)),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "pos")]
    pub position: Position,
    #[serde(rename = "ovr")]
    pub overall: u8,
}

/// Read-only team snapshot handed in by the roster layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub abbr: String,
    #[serde(default)]
    pub roster: Vec<Player>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, roster: Vec<Player>) -> Self {
        let name = name.into();
        let abbr = name.chars().filter(|c| c.is_ascii_alphabetic()).take(3).collect::<String>();
        Self { id, name, abbr: abbr.to_ascii_uppercase(), roster }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Mean overall of players matching `filter`, or `None` when the group is empty.
    pub fn group_strength(&self, filter: impl Fn(Position) -> bool) -> Option<f32> {
        let (sum, count) = self
            .roster
            .iter()
            .filter(|p| filter(p.position))
            .fold((0u32, 0u32), |(sum, count), p| (sum + p.overall as u32, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum as f32 / count as f32)
        }
    }
}

/// Position-group ratings resolved once per game.
///
/// Empty groups collapse to the configured default strength here, so the
/// resolver never has to reason about missing rosters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamStrength {
    pub offense: f32,
    pub run_defense: f32,
    pub pass_defense: f32,
    pub kicker: f32,
}

impl TeamStrength {
    pub fn from_team(team: &Team, default_strength: f32) -> Self {
        Self {
            offense: team.group_strength(Position::is_skill).unwrap_or(default_strength),
            run_defense: team.group_strength(Position::is_front_seven).unwrap_or(default_strength),
            pass_defense: team.group_strength(Position::is_secondary).unwrap_or(default_strength),
            kicker: team.group_strength(|p| p == Position::K).unwrap_or(default_strength),
        }
    }

}

/// Cached starters used for stat attribution and play messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthChart {
    pub quarterback: Option<PlayerId>,
    pub running_backs: Vec<PlayerId>,
    pub receivers: Vec<PlayerId>,
    pub kicker: Option<PlayerId>,
}

impl DepthChart {
    pub fn from_team(team: &Team) -> Self {
        let ordered = |filter: &dyn Fn(Position) -> bool| -> Vec<PlayerId> {
            let mut players: Vec<&Player> =
                team.roster.iter().filter(|p| filter(p.position)).collect();
            // Stable sort keeps roster order among equal ratings.
            players.sort_by(|a, b| b.overall.cmp(&a.overall));
            players.into_iter().map(|p| p.id).collect()
        };

        Self {
            quarterback: ordered(&|p| p == Position::QB).first().copied(),
            running_backs: ordered(&|p| p == Position::RB),
            receivers: ordered(&Position::is_receiver),
            kicker: ordered(&|p| p == Position::K).first().copied(),
        }
    }

    /// Lead running back, falling back to the quarterback.
    pub fn lead_rusher(&self) -> Option<PlayerId> {
        self.running_backs.first().copied().or(self.quarterback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, position: Position, overall: u8) -> Player {
        Player { id, name: format!("P{}", id), position, overall }
    }

    #[test]
    fn test_team_side_opponent() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
        assert_eq!(TeamSide::Home.momentum_sign(), 1);
        assert_eq!(TeamSide::Away.momentum_sign(), -1);
    }

    #[test]
    fn test_group_strength_defaults_when_empty() {
        let team = Team::new(1, "Empty", vec![]);
        let strength = TeamStrength::from_team(&team, 70.0);
        assert_eq!(
            strength,
            TeamStrength { offense: 70.0, run_defense: 70.0, pass_defense: 70.0, kicker: 70.0 }
        );
    }

    #[test]
    fn test_group_strength_means() {
        let team = Team::new(
            1,
            "Test",
            vec![
                player(1, Position::QB, 80),
                player(2, Position::WR, 60),
                player(3, Position::DL, 90),
                player(4, Position::LB, 70),
                player(5, Position::CB, 50),
            ],
        );
        let strength = TeamStrength::from_team(&team, 70.0);
        assert!((strength.offense - 70.0).abs() < 0.001);
        assert!((strength.run_defense - 80.0).abs() < 0.001);
        assert!((strength.pass_defense - 50.0).abs() < 0.001);
        assert!((strength.kicker - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_depth_chart_orders_by_overall() {
        let team = Team::new(
            1,
            "Test",
            vec![
                player(1, Position::QB, 60),
                player(2, Position::QB, 85),
                player(3, Position::RB, 70),
                player(4, Position::RB, 75),
                player(5, Position::TE, 65),
                player(6, Position::WR, 90),
            ],
        );
        let chart = DepthChart::from_team(&team);
        assert_eq!(chart.quarterback, Some(2));
        assert_eq!(chart.running_backs, vec![4, 3]);
        assert_eq!(chart.receivers, vec![6, 5]);
        assert_eq!(chart.kicker, None);
        assert_eq!(chart.lead_rusher(), Some(4));
    }

    #[test]
    fn test_lead_rusher_falls_back_to_qb() {
        let team = Team::new(1, "Test", vec![player(9, Position::QB, 70)]);
        assert_eq!(DepthChart::from_team(&team).lead_rusher(), Some(9));
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("hb".parse::<Position>().unwrap(), Position::RB);
        assert_eq!("FS".parse::<Position>().unwrap(), Position::S);
        assert!("XX".parse::<Position>().is_err());
    }

    #[test]
    fn test_roster_json_accepts_position_aliases() {
        let json = r#"[{"id":1,"name":"A","pos":"hb","ovr":70},{"id":2,"name":"B","pos":"SS","ovr":65}]"#;
        let roster: Vec<Player> = serde_json::from_str(json).unwrap();
        assert_eq!(roster[0].position, Position::RB);
        assert_eq!(roster[1].position, Position::S);
        assert_eq!(serde_json::to_value(&roster[0]).unwrap()["pos"], "RB");
        assert!(serde_json::from_str::<Player>(r#"{"id":3,"name":"C","pos":"XX","ovr":50}"#).is_err());
    }

    #[test]
    fn test_team_roster_json_shape() {
        let json = r#"{"id":1,"name":"Home Team","abbr":"HOM","roster":[{"pos":"QB","id":10,"name":"QB1","ovr":77}]}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.roster[0].position, Position::QB);
        assert_eq!(team.roster[0].overall, 77);
    }
}
