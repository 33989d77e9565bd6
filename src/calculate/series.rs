//! Chart series for the comparison view.
//!
//! Each row carries one statistic with a value per player, indexed by the
//! player's position in the comparison set.

use serde::Serialize;

use super::normalize::normalize;
use crate::models::{ComparisonSet, StatKey};

/// One statistic across all compared players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRow {
    pub stat: &'static str,
    pub values: Vec<f64>,
}

/// Statistics of the bar chart, with their axis labels.
pub const BAR_STATS: [(StatKey, &str); 6] = [
    (StatKey::Goals, "Goals"),
    (StatKey::Assists, "Assists"),
    (StatKey::ShotAccuracy, "Shot Accuracy (%)"),
    (StatKey::PassAccuracy, "Pass Accuracy (%)"),
    (StatKey::DribblingSuccessRate, "Dribbling (%)"),
    (StatKey::TopSpeed, "Top Speed"),
];

/// Axes of the radar chart, with their labels.
pub const RADAR_STATS: [(StatKey, &str); 5] = [
    (StatKey::Goals, "Goals"),
    (StatKey::Assists, "Assists"),
    (StatKey::Rating, "Rating"),
    (StatKey::PassAccuracy, "Pass Accuracy"),
    (StatKey::Dribbles, "Dribbling"),
];

/// Raw values for the bar chart.
pub fn bar_series(set: &ComparisonSet) -> Vec<SeriesRow> {
    BAR_STATS
        .iter()
        .map(|&(stat, label)| SeriesRow {
            stat: label,
            values: set.values(stat),
        })
        .collect()
}

/// Normalized 0-100 values for the radar chart.
pub fn radar_series(set: &ComparisonSet) -> Vec<SeriesRow> {
    RADAR_STATS
        .iter()
        .map(|&(stat, label)| SeriesRow {
            stat: label,
            values: normalize(stat, &set.values(stat)),
        })
        .collect()
}
