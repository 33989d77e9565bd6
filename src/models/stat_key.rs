//! Closed set of statistic identifiers.
//!
//! Every consumer addresses statistics through [`StatKey`] instead of
//! string lookups. Each key is bound to a typed accessor on [`StatBlock`].

use serde::{Deserialize, Serialize};

use super::StatBlock;

/// Accessor reading one statistic from a block.
pub type StatAccessor = fn(&StatBlock) -> f64;

/// Identifier for a single field of [`StatBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKey {
    Goals,
    Assists,
    Matches,
    Minutes,
    Starts,
    YellowCards,
    RedCards,
    Rating,
    Shots,
    ShotsOnTarget,
    ShotsOffTarget,
    ShotsBlocked,
    ShotAccuracy,
    Passes,
    PassesCompleted,
    PassAccuracy,
    KeyPasses,
    ThroughBalls,
    LongBalls,
    Crosses,
    CrossAccuracy,
    Dribbles,
    DribblesSuccessful,
    DribblesAttempted,
    DribblingSuccessRate,
    Touches,
    TouchesInBox,
    Tackles,
    TacklesWon,
    Interceptions,
    Clearances,
    Blocks,
    DuelsWon,
    DuelsLost,
    AerialDuelsWon,
    AerialDuelsLost,
    DistanceCovered,
    Sprints,
    TopSpeed,
    FoulsCommitted,
    FoulsDrawn,
    Offsides,
    Penalties,
    PenaltiesScored,
    PenaltiesMissed,
    BigChancesCreated,
    BigChancesMissed,
}

impl StatKey {
    /// Every statistic, in block order.
    pub const ALL: [StatKey; 47] = [
        StatKey::Goals,
        StatKey::Assists,
        StatKey::Matches,
        StatKey::Minutes,
        StatKey::Starts,
        StatKey::YellowCards,
        StatKey::RedCards,
        StatKey::Rating,
        StatKey::Shots,
        StatKey::ShotsOnTarget,
        StatKey::ShotsOffTarget,
        StatKey::ShotsBlocked,
        StatKey::ShotAccuracy,
        StatKey::Passes,
        StatKey::PassesCompleted,
        StatKey::PassAccuracy,
        StatKey::KeyPasses,
        StatKey::ThroughBalls,
        StatKey::LongBalls,
        StatKey::Crosses,
        StatKey::CrossAccuracy,
        StatKey::Dribbles,
        StatKey::DribblesSuccessful,
        StatKey::DribblesAttempted,
        StatKey::DribblingSuccessRate,
        StatKey::Touches,
        StatKey::TouchesInBox,
        StatKey::Tackles,
        StatKey::TacklesWon,
        StatKey::Interceptions,
        StatKey::Clearances,
        StatKey::Blocks,
        StatKey::DuelsWon,
        StatKey::DuelsLost,
        StatKey::AerialDuelsWon,
        StatKey::AerialDuelsLost,
        StatKey::DistanceCovered,
        StatKey::Sprints,
        StatKey::TopSpeed,
        StatKey::FoulsCommitted,
        StatKey::FoulsDrawn,
        StatKey::Offsides,
        StatKey::Penalties,
        StatKey::PenaltiesScored,
        StatKey::PenaltiesMissed,
        StatKey::BigChancesCreated,
        StatKey::BigChancesMissed,
    ];

    /// Statistics shown in the detailed comparison table, in display order.
    pub const TABLE: [StatKey; 19] = [
        StatKey::Goals,
        StatKey::Assists,
        StatKey::Shots,
        StatKey::ShotsOnTarget,
        StatKey::ShotAccuracy,
        StatKey::Passes,
        StatKey::PassAccuracy,
        StatKey::KeyPasses,
        StatKey::Dribbles,
        StatKey::DribblingSuccessRate,
        StatKey::Tackles,
        StatKey::Interceptions,
        StatKey::DuelsWon,
        StatKey::AerialDuelsWon,
        StatKey::DistanceCovered,
        StatKey::TopSpeed,
        StatKey::FoulsDrawn,
        StatKey::BigChancesCreated,
        StatKey::Rating,
    ];

    /// The typed accessor bound to this key.
    pub fn accessor(self) -> StatAccessor {
        match self {
            StatKey::Goals => |s| f64::from(s.goals),
            StatKey::Assists => |s| f64::from(s.assists),
            StatKey::Matches => |s| f64::from(s.matches),
            StatKey::Minutes => |s| f64::from(s.minutes),
            StatKey::Starts => |s| f64::from(s.starts),
            StatKey::YellowCards => |s| f64::from(s.yellow_cards),
            StatKey::RedCards => |s| f64::from(s.red_cards),
            StatKey::Rating => |s| s.rating,
            StatKey::Shots => |s| f64::from(s.shots),
            StatKey::ShotsOnTarget => |s| f64::from(s.shots_on_target),
            StatKey::ShotsOffTarget => |s| f64::from(s.shots_off_target),
            StatKey::ShotsBlocked => |s| f64::from(s.shots_blocked),
            StatKey::ShotAccuracy => |s| s.shot_accuracy,
            StatKey::Passes => |s| f64::from(s.passes),
            StatKey::PassesCompleted => |s| f64::from(s.passes_completed),
            StatKey::PassAccuracy => |s| s.pass_accuracy,
            StatKey::KeyPasses => |s| f64::from(s.key_passes),
            StatKey::ThroughBalls => |s| f64::from(s.through_balls),
            StatKey::LongBalls => |s| f64::from(s.long_balls),
            StatKey::Crosses => |s| f64::from(s.crosses),
            StatKey::CrossAccuracy => |s| s.cross_accuracy,
            StatKey::Dribbles => |s| f64::from(s.dribbles),
            StatKey::DribblesSuccessful => |s| f64::from(s.dribbles_successful),
            StatKey::DribblesAttempted => |s| f64::from(s.dribbles_attempted),
            StatKey::DribblingSuccessRate => |s| s.dribbling_success_rate,
            StatKey::Touches => |s| f64::from(s.touches),
            StatKey::TouchesInBox => |s| f64::from(s.touches_in_box),
            StatKey::Tackles => |s| f64::from(s.tackles),
            StatKey::TacklesWon => |s| f64::from(s.tackles_won),
            StatKey::Interceptions => |s| f64::from(s.interceptions),
            StatKey::Clearances => |s| f64::from(s.clearances),
            StatKey::Blocks => |s| f64::from(s.blocks),
            StatKey::DuelsWon => |s| f64::from(s.duels_won),
            StatKey::DuelsLost => |s| f64::from(s.duels_lost),
            StatKey::AerialDuelsWon => |s| f64::from(s.aerial_duels_won),
            StatKey::AerialDuelsLost => |s| f64::from(s.aerial_duels_lost),
            StatKey::DistanceCovered => |s| s.distance_covered,
            StatKey::Sprints => |s| f64::from(s.sprints),
            StatKey::TopSpeed => |s| s.top_speed,
            StatKey::FoulsCommitted => |s| f64::from(s.fouls_committed),
            StatKey::FoulsDrawn => |s| f64::from(s.fouls_drawn),
            StatKey::Offsides => |s| f64::from(s.offsides),
            StatKey::Penalties => |s| f64::from(s.penalties),
            StatKey::PenaltiesScored => |s| f64::from(s.penalties_scored),
            StatKey::PenaltiesMissed => |s| f64::from(s.penalties_missed),
            StatKey::BigChancesCreated => |s| f64::from(s.big_chances_created),
            StatKey::BigChancesMissed => |s| f64::from(s.big_chances_missed),
        }
    }

    /// Read this statistic from a block.
    pub fn value(self, stats: &StatBlock) -> f64 {
        (self.accessor())(stats)
    }

    /// True for statistics stored as a 0-100 percentage.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            StatKey::ShotAccuracy
                | StatKey::PassAccuracy
                | StatKey::CrossAccuracy
                | StatKey::DribblingSuccessRate
        )
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StatKey::Goals => "Goals",
            StatKey::Assists => "Assists",
            StatKey::Matches => "Matches",
            StatKey::Minutes => "Minutes Played",
            StatKey::Starts => "Starts",
            StatKey::YellowCards => "Yellow Cards",
            StatKey::RedCards => "Red Cards",
            StatKey::Rating => "Rating",
            StatKey::Shots => "Total Shots",
            StatKey::ShotsOnTarget => "Shots on Target",
            StatKey::ShotsOffTarget => "Shots off Target",
            StatKey::ShotsBlocked => "Shots Blocked",
            StatKey::ShotAccuracy => "Shot Accuracy (%)",
            StatKey::Passes => "Total Passes",
            StatKey::PassesCompleted => "Passes Completed",
            StatKey::PassAccuracy => "Pass Accuracy (%)",
            StatKey::KeyPasses => "Key Passes",
            StatKey::ThroughBalls => "Through Balls",
            StatKey::LongBalls => "Long Balls",
            StatKey::Crosses => "Crosses",
            StatKey::CrossAccuracy => "Cross Accuracy (%)",
            StatKey::Dribbles => "Successful Dribbles",
            StatKey::DribblesSuccessful => "Dribbles Successful",
            StatKey::DribblesAttempted => "Dribbles Attempted",
            StatKey::DribblingSuccessRate => "Dribbling Success (%)",
            StatKey::Touches => "Touches",
            StatKey::TouchesInBox => "Box Touches",
            StatKey::Tackles => "Tackles",
            StatKey::TacklesWon => "Tackles Won",
            StatKey::Interceptions => "Interceptions",
            StatKey::Clearances => "Clearances",
            StatKey::Blocks => "Blocks",
            StatKey::DuelsWon => "Duels Won",
            StatKey::DuelsLost => "Duels Lost",
            StatKey::AerialDuelsWon => "Aerial Duels Won",
            StatKey::AerialDuelsLost => "Aerial Duels Lost",
            StatKey::DistanceCovered => "Distance Covered (km)",
            StatKey::Sprints => "Sprints",
            StatKey::TopSpeed => "Top Speed (km/h)",
            StatKey::FoulsCommitted => "Fouls Committed",
            StatKey::FoulsDrawn => "Fouls Drawn",
            StatKey::Offsides => "Offsides",
            StatKey::Penalties => "Penalties",
            StatKey::PenaltiesScored => "Penalties Scored",
            StatKey::PenaltiesMissed => "Penalties Missed",
            StatKey::BigChancesCreated => "Big Chances Created",
            StatKey::BigChancesMissed => "Big Chances Missed",
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
