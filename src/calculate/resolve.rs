//! Per-statistic winner and draw resolution.

use serde::Serialize;

use crate::models::{ComparisonError, ComparisonSet, StatKey};

/// Label shown instead of a player name when the best value is shared.
pub const DRAW_LABEL: &str = "Draw";

/// Winner of one statistic across a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    /// Best value in the set
    pub max_value: f64,
    /// Position of the winning player, `None` on a draw
    pub winner_index: Option<usize>,
    /// More than one player holds the best value
    pub is_draw: bool,
}

/// Resolve the winner of a single statistic.
///
/// The winner is the first position holding the maximum. When the maximum
/// is held by more than one position the result is a draw with no winner.
pub fn resolve_values(values: &[f64]) -> Resolution {
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let holders = values.iter().filter(|v| **v == max_value).count();
    let is_draw = holders > 1;
    let winner_index = if is_draw {
        None
    } else {
        values.iter().position(|v| *v == max_value)
    };

    Resolution {
        max_value: if values.is_empty() { 0.0 } else { max_value },
        winner_index,
        is_draw,
    }
}

/// One row of the detailed comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub stat: StatKey,
    pub label: &'static str,
    /// Raw values in player order
    pub values: Vec<f64>,
    pub winner_index: Option<usize>,
    pub is_draw: bool,
    /// Short name of the winner, or "Draw"
    pub winner_label: String,
}

/// Resolve one statistic across a comparison set.
pub fn resolve_stat(set: &ComparisonSet, stat: StatKey) -> StatComparison {
    let values = set.values(stat);
    let resolution = resolve_values(&values);
    let winner_label = match resolution.winner_index {
        Some(i) => set.players()[i].short_name().to_string(),
        None => DRAW_LABEL.to_string(),
    };

    StatComparison {
        stat,
        label: stat.label(),
        values,
        winner_index: resolution.winner_index,
        is_draw: resolution.is_draw,
        winner_label,
    }
}

/// Rows of the detailed comparison table, one per statistic in [`StatKey::TABLE`].
pub fn resolve_table(set: &ComparisonSet) -> Vec<StatComparison> {
    StatKey::TABLE
        .iter()
        .map(|stat| resolve_stat(set, *stat))
        .collect()
}

/// Statistics shown head to head, with their icon tags.
pub const HEAD_TO_HEAD: [(StatKey, &str, &str); 6] = [
    (StatKey::Goals, "Goals", "⚽"),
    (StatKey::Assists, "Assists", "🎯"),
    (StatKey::ShotAccuracy, "Shot Accuracy (%)", "🏹"),
    (StatKey::PassAccuracy, "Pass Accuracy (%)", "⚡"),
    (StatKey::Dribbles, "Successful Dribbles", "🏃"),
    (StatKey::Tackles, "Tackles", "🛡️"),
];

/// One statistic compared between exactly two players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHeadRow {
    pub stat: StatKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub values: [f64; 2],
    /// Bar widths in percent of the pairwise max
    pub shares: [f64; 2],
}

/// Each value's share of the pairwise maximum, in percent.
///
/// The denominator is floored at 1 so a zero maximum never divides by zero.
/// Shares are independent and do not sum to 100.
pub fn pairwise_shares(a: f64, b: f64) -> [f64; 2] {
    let denominator = a.max(b).max(1.0);
    [a / denominator * 100.0, b / denominator * 100.0]
}

/// Head-to-head rows for a two-player comparison.
pub fn head_to_head(set: &ComparisonSet) -> Result<Vec<HeadToHeadRow>, ComparisonError> {
    let (first, second) = set.pair()?;

    Ok(HEAD_TO_HEAD
        .iter()
        .map(|&(stat, label, icon)| {
            let values = [stat.value(&first.stats), stat.value(&second.stats)];
            HeadToHeadRow {
                stat,
                label,
                icon,
                values,
                shares: pairwise_shares(values[0], values[1]),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::fixtures::record;
    use crate::models::{PlayerStatRecord, StatBlock};

    fn player(id: u32, name: &str, goals: u32, shots: u32) -> PlayerStatRecord {
        record(
            id,
            name,
            StatBlock {
                goals,
                shots,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_resolve_draw() {
        let r = resolve_values(&[5.0, 5.0]);
        assert!(r.is_draw);
        assert_eq!(r.winner_index, None);
    }

    #[test]
    fn test_resolve_winner() {
        let r = resolve_values(&[7.0, 3.0]);
        assert!(!r.is_draw);
        assert_eq!(r.winner_index, Some(0));
        assert_eq!(r.max_value, 7.0);
    }

    #[test]
    fn test_resolve_last_position_wins() {
        let r = resolve_values(&[2.0, 2.0, 5.0]);
        assert!(!r.is_draw);
        assert_eq!(r.winner_index, Some(2));
    }

    #[test]
    fn test_shared_non_max_is_not_draw() {
        let r = resolve_values(&[1.0, 1.0, 4.0, 2.0]);
        assert!(!r.is_draw);
        assert_eq!(r.winner_index, Some(2));
    }

    #[test]
    fn test_three_way_draw() {
        let r = resolve_values(&[0.0, 0.0, 0.0]);
        assert!(r.is_draw);
        assert_eq!(r.winner_index, None);
    }

    #[test]
    fn test_resolve_empty() {
        let r = resolve_values(&[]);
        assert!(!r.is_draw);
        assert_eq!(r.winner_index, None);
        assert_eq!(r.max_value, 0.0);
    }

    #[test]
    fn test_resolve_stat_labels_winner() {
        let set = ComparisonSet::new(vec![
            player(1, "Erling Haaland", 10, 20),
            player(2, "Harry Kane", 4, 10),
        ])
        .unwrap();

        let row = resolve_stat(&set, StatKey::Goals);
        assert_eq!(row.values, vec![10.0, 4.0]);
        assert_eq!(row.winner_index, Some(0));
        assert_eq!(row.winner_label, "Erling");
        assert_eq!(row.label, "Goals");
    }

    #[test]
    fn test_resolve_stat_draw_label() {
        let set = ComparisonSet::new(vec![
            player(1, "Erling Haaland", 3, 20),
            player(2, "Harry Kane", 3, 10),
        ])
        .unwrap();

        let row = resolve_stat(&set, StatKey::Goals);
        assert!(row.is_draw);
        assert_eq!(row.winner_label, DRAW_LABEL);
    }

    #[test]
    fn test_resolve_table_order() {
        let set = ComparisonSet::new(vec![
            player(1, "A", 1, 2),
            player(2, "B", 2, 1),
            player(3, "C", 0, 0),
        ])
        .unwrap();

        let table = resolve_table(&set);
        let stats: Vec<_> = table.iter().map(|r| r.stat).collect();
        assert_eq!(stats, StatKey::TABLE.to_vec());
        assert!(table.iter().all(|r| r.values.len() == 3));
        assert_eq!(table[0].winner_index, Some(1));
        assert_eq!(table[2].winner_index, Some(0));
    }

    #[test]
    fn test_pairwise_shares() {
        assert_eq!(pairwise_shares(10.0, 5.0), [100.0, 50.0]);
        assert_eq!(pairwise_shares(0.0, 0.0), [0.0, 0.0]);
        assert_eq!(pairwise_shares(0.5, 0.0), [50.0, 0.0]);
    }

    #[test]
    fn test_head_to_head_rows() {
        let set = ComparisonSet::new(vec![
            player(1, "Erling Haaland", 10, 20),
            player(2, "Harry Kane", 4, 10),
        ])
        .unwrap();

        let rows = head_to_head(&set).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].icon, "⚽");
        assert_eq!(rows[0].values, [10.0, 4.0]);
        assert_eq!(rows[0].shares, [100.0, 40.0]);
        // Both players have zero assists
        assert_eq!(rows[1].shares, [0.0, 0.0]);
    }

    #[test]
    fn test_head_to_head_requires_two() {
        let set = ComparisonSet::new(vec![
            player(1, "A", 1, 1),
            player(2, "B", 1, 1),
            player(3, "C", 1, 1),
        ])
        .unwrap();

        assert_eq!(
            head_to_head(&set).unwrap_err(),
            ComparisonError::HeadToHeadRequiresTwo(3)
        );
    }
}
