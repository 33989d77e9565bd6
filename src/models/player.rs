//! Player identity and statistic block.

use serde::{Deserialize, Serialize};

/// Numeric player identifier.
pub type PlayerId = u32;

/// One player's identity and season statistics.
///
/// Records are supplied from outside and never mutated by the
/// calculation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatRecord {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    /// Position code, e.g. "ST", "CAM", "CB"
    pub position: String,
    pub age: u32,
    pub nationality: String,
    /// Display height, e.g. "1.85 m"
    pub height: String,
    /// Display weight, e.g. "80 kg"
    pub weight: String,
    pub preferred_foot: String,
    /// Display market value, e.g. "€180M"
    pub market_value: String,
    /// Image reference (URL or asset path)
    #[serde(default)]
    pub image: String,
    pub stats: StatBlock,
}

impl PlayerStatRecord {
    /// First character of each name part, used as an avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// First word of the name, used as a short display label.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Position group derived from the position code.
    pub fn position_group(&self) -> PositionGroup {
        PositionGroup::from_code(&self.position)
    }
}

/// Season statistics for a player.
///
/// Percentage fields (`shot_accuracy`, `pass_accuracy`, `cross_accuracy`,
/// `dribbling_success_rate`) are stored as supplied and are not required to
/// agree with the ratio of the corresponding raw counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBlock {
    // General
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub minutes: u32,
    pub starts: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub rating: f64,

    // Shooting
    pub shots: u32,
    pub shots_on_target: u32,
    pub shots_off_target: u32,
    pub shots_blocked: u32,
    pub shot_accuracy: f64,

    // Passing
    pub passes: u32,
    pub passes_completed: u32,
    pub pass_accuracy: f64,
    pub key_passes: u32,
    pub through_balls: u32,
    pub long_balls: u32,
    pub crosses: u32,
    pub cross_accuracy: f64,

    // Dribbling
    pub dribbles: u32,
    pub dribbles_successful: u32,
    pub dribbles_attempted: u32,
    pub dribbling_success_rate: f64,
    pub touches: u32,
    pub touches_in_box: u32,

    // Defending
    pub tackles: u32,
    pub tackles_won: u32,
    pub interceptions: u32,
    pub clearances: u32,
    pub blocks: u32,
    pub duels_won: u32,
    pub duels_lost: u32,
    pub aerial_duels_won: u32,
    pub aerial_duels_lost: u32,

    // Physical
    /// Kilometres
    pub distance_covered: f64,
    pub sprints: u32,
    /// km/h
    pub top_speed: f64,

    // Discipline and set pieces
    pub fouls_committed: u32,
    pub fouls_drawn: u32,
    pub offsides: u32,
    pub penalties: u32,
    pub penalties_scored: u32,
    pub penalties_missed: u32,
    pub big_chances_created: u32,
    pub big_chances_missed: u32,
}

/// Broad grouping of position codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionGroup {
    Striker,
    Winger,
    AttackingMidfielder,
    CentreBack,
    Other,
}

impl PositionGroup {
    /// Classify a position code. Unknown codes map to `Other`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "ST" => PositionGroup::Striker,
            "RW" | "LW" => PositionGroup::Winger,
            "CAM" => PositionGroup::AttackingMidfielder,
            "CB" => PositionGroup::CentreBack,
            _ => PositionGroup::Other,
        }
    }
}

impl std::fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionGroup::Striker => write!(f, "Striker"),
            PositionGroup::Winger => write!(f, "Winger"),
            PositionGroup::AttackingMidfielder => write!(f, "Attacking Midfielder"),
            PositionGroup::CentreBack => write!(f, "Centre Back"),
            PositionGroup::Other => write!(f, "Other"),
        }
    }
}

/// One entry of an externally supplied recent-form series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPoint {
    #[serde(rename = "match")]
    pub match_number: u32,
    pub rating: f64,
    pub goals: u32,
    pub assists: u32,
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;

    #[test]
    fn test_initials() {
        let player = record(1, "Kylian Mbappé Lottin", StatBlock::default());
        assert_eq!(player.initials(), "KML");
    }

    #[test]
    fn test_short_name() {
        let player = record(1, "Erling Haaland", StatBlock::default());
        assert_eq!(player.short_name(), "Erling");

        let mononym = record(2, "Rodri", StatBlock::default());
        assert_eq!(mononym.short_name(), "Rodri");
    }

    #[test]
    fn test_position_group_from_code() {
        assert_eq!(PositionGroup::from_code("ST"), PositionGroup::Striker);
        assert_eq!(PositionGroup::from_code("LW"), PositionGroup::Winger);
        assert_eq!(PositionGroup::from_code("RW"), PositionGroup::Winger);
        assert_eq!(PositionGroup::from_code("CAM"), PositionGroup::AttackingMidfielder);
        assert_eq!(PositionGroup::from_code("CB"), PositionGroup::CentreBack);
        assert_eq!(PositionGroup::from_code("GK"), PositionGroup::Other);
    }

    #[test]
    fn test_record_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Erling Haaland",
            "team": "Manchester City",
            "position": "ST",
            "age": 24,
            "nationality": "Norway",
            "height": "1.94 m",
            "weight": "88 kg",
            "preferredFoot": "Left",
            "marketValue": "€180M",
            "stats": { "goals": 27, "matches": 31, "shotsOnTarget": 60, "topSpeed": 36.2 }
        }"#;

        let player: PlayerStatRecord = serde_json::from_str(json).unwrap();
        assert_eq!(player.preferred_foot, "Left");
        assert_eq!(player.stats.goals, 27);
        assert_eq!(player.stats.shots_on_target, 60);
        assert_eq!(player.stats.top_speed, 36.2);
        assert_eq!(player.stats.assists, 0);
        assert!(player.image.is_empty());
    }

    #[test]
    fn test_form_point_uses_match_key() {
        let point = FormPoint {
            match_number: 3,
            rating: 7.8,
            goals: 0,
            assists: 2,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["match"], 3);
    }
}
