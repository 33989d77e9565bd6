//! Statistics calculation engine.
//!
//! Computes derived metrics from supplied player records:
//! - Per-match rates and guarded ratios
//! - 0-100 normalization for radar-style comparison
//! - Per-statistic winner/draw resolution
//! - Chart series for comparison views

pub mod normalize;
pub mod resolve;
pub mod series;
pub mod view;

use serde::Serialize;

use crate::models::{PlayerStatRecord, StatBlock, StatKey};

pub use normalize::{normalize, NormalizationPolicy};
pub use resolve::{
    head_to_head, resolve_stat, resolve_table, resolve_values, HeadToHeadRow, StatComparison,
};
pub use series::{bar_series, radar_series, SeriesRow};
pub use view::{ComparisonView, PlayerDetailView};

/// Rate of a season total per match played. Zero when no matches were played.
pub fn per_match_rate(total: f64, matches: f64) -> f64 {
    if matches == 0.0 {
        0.0
    } else {
        total / matches
    }
}

/// Ratio as a percentage. Zero when the denominator is zero.
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Value as a percentage of a fixed cap, clamped to 0-100 for bar display.
pub fn scaled_percent(value: f64, cap: f64) -> f64 {
    ratio_percent(value, cap).clamp(0.0, 100.0)
}

/// Goals per shot, in percent. Zero when no shots were taken.
pub fn goal_success_rate(stats: &StatBlock) -> f64 {
    ratio_percent(stats.goals.into(), stats.shots.into())
}

/// Tackles won per tackle, in percent. Zero when no tackles were made.
pub fn tackle_success_rate(stats: &StatBlock) -> f64 {
    ratio_percent(stats.tackles_won.into(), stats.tackles.into())
}

/// Shots on target per shot, recomputed from counters.
///
/// Independent of the stored `shot_accuracy`, which may disagree.
pub fn shot_accuracy_from_counts(stats: &StatBlock) -> f64 {
    ratio_percent(stats.shots_on_target.into(), stats.shots.into())
}

/// Completed passes per pass, recomputed from counters.
///
/// Independent of the stored `pass_accuracy`, which may disagree.
pub fn pass_accuracy_from_counts(stats: &StatBlock) -> f64 {
    ratio_percent(stats.passes_completed.into(), stats.passes.into())
}

/// Headline numbers of the single-player view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub minutes: u32,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
    pub minutes_per_match: f64,
    /// Goals plus assists
    pub goal_contributions: u64,
    pub goal_contributions_per_match: f64,
    pub goal_success_rate: f64,
    pub tackle_success_rate: f64,
}

impl PlayerSummary {
    pub fn from_stats(stats: &StatBlock) -> Self {
        let matches = f64::from(stats.matches);
        let goal_contributions = u64::from(stats.goals) + u64::from(stats.assists);

        Self {
            goals: stats.goals,
            assists: stats.assists,
            matches: stats.matches,
            minutes: stats.minutes,
            goals_per_match: per_match_rate(stats.goals.into(), matches),
            assists_per_match: per_match_rate(stats.assists.into(), matches),
            minutes_per_match: per_match_rate(stats.minutes.into(), matches),
            goal_contributions,
            goal_contributions_per_match: per_match_rate(goal_contributions as f64, matches),
            goal_success_rate: goal_success_rate(stats),
            tackle_success_rate: tackle_success_rate(stats),
        }
    }
}

/// Where a detail bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarGroup {
    Attack,
    Defense,
}

/// One progress bar of the single-player view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailBar {
    pub group: BarGroup,
    pub label: &'static str,
    /// Displayed value
    pub value: f64,
    /// Bar width, 0-100
    pub percent: f64,
}

/// Attack-panel counters drawn against a fixed cap.
const ATTACK_BARS: [(StatKey, &str, f64); 3] = [
    (StatKey::BigChancesCreated, "Big Chances Created", 100.0),
    (StatKey::TouchesInBox, "Box Touches", 300.0),
    (StatKey::KeyPasses, "Key Passes", 100.0),
];

/// Defense-panel counters drawn against a fixed cap.
const DEFENSE_BARS: [(StatKey, &str, f64); 3] = [
    (StatKey::AerialDuelsWon, "Aerial Duels Won", 200.0),
    (StatKey::Interceptions, "Interceptions", 100.0),
    (StatKey::Clearances, "Clearances", 300.0),
];

fn rate_bar(group: BarGroup, label: &'static str, rate: f64) -> DetailBar {
    DetailBar {
        group,
        label,
        value: rate,
        percent: rate.clamp(0.0, 100.0),
    }
}

fn capped_bars<'a>(
    group: BarGroup,
    stats: &'a StatBlock,
    bars: &'a [(StatKey, &'static str, f64)],
) -> impl Iterator<Item = DetailBar> + 'a {
    bars.iter().map(move |&(stat, label, cap)| {
        let value = stat.value(stats);
        DetailBar {
            group,
            label,
            value,
            percent: scaled_percent(value, cap),
        }
    })
}

/// Progress bars for the attack and defense panels, in display order.
pub fn detail_bars(stats: &StatBlock) -> Vec<DetailBar> {
    let mut bars = vec![rate_bar(
        BarGroup::Attack,
        "Goal Success Rate",
        goal_success_rate(stats),
    )];
    bars.extend(capped_bars(BarGroup::Attack, stats, &ATTACK_BARS));
    bars.push(rate_bar(
        BarGroup::Defense,
        "Tackle Success Rate",
        tackle_success_rate(stats),
    ));
    bars.extend(capped_bars(BarGroup::Defense, stats, &DEFENSE_BARS));
    bars
}

/// Derived metrics for every player of a set, in order.
pub fn summaries(players: &[PlayerStatRecord]) -> Vec<PlayerSummary> {
    players
        .iter()
        .map(|p| PlayerSummary::from_stats(&p.stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_per_match_rate() {
        assert_eq!(per_match_rate(10.0, 4.0), 2.5);
        assert_eq!(per_match_rate(7.0, 0.0), 0.0);
        assert_eq!(per_match_rate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio_percent() {
        assert!((ratio_percent(1.0, 3.0) - 33.333).abs() < 0.001);
        assert_close(ratio_percent(5.0, 10.0), 50.0);
        assert_eq!(ratio_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio_percent_property() {
        for n in [0.0, 1.0, 7.5, 120.0] {
            for d in [0.5, 1.0, 3.0, 250.0] {
                assert!((ratio_percent(n, d) - n / d * 100.0).abs() < 1e-9);
            }
            assert_eq!(ratio_percent(n, 0.0), 0.0);
        }
    }

    #[test]
    fn test_scaled_percent_clamps() {
        assert_eq!(scaled_percent(50.0, 100.0), 50.0);
        assert_eq!(scaled_percent(450.0, 300.0), 100.0);
        assert_eq!(scaled_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_goal_success_rate() {
        let a = StatBlock {
            goals: 10,
            shots: 20,
            ..Default::default()
        };
        let b = StatBlock {
            goals: 4,
            shots: 10,
            ..Default::default()
        };
        assert_close(goal_success_rate(&a), 50.0);
        assert_close(goal_success_rate(&b), 40.0);
    }

    #[test]
    fn test_goal_contributions_past_u32_max() {
        let stats = StatBlock {
            goals: u32::MAX,
            assists: 1,
            matches: 3,
            ..Default::default()
        };

        let summary = PlayerSummary::from_stats(&stats);
        assert_eq!(summary.goal_contributions, u64::from(u32::MAX) + 1);
        assert_close(
            summary.goal_contributions_per_match,
            (u64::from(u32::MAX) + 1) as f64 / 3.0,
        );
    }

    #[test]
    fn test_success_rates_zero_without_attempts() {
        let stats = StatBlock {
            goals: 3,
            tackles_won: 2,
            ..Default::default()
        };
        assert_eq!(goal_success_rate(&stats), 0.0);
        assert_eq!(tackle_success_rate(&stats), 0.0);
    }

    #[test]
    fn test_stored_and_derived_accuracy_independent() {
        let stats = StatBlock {
            shots: 10,
            shots_on_target: 4,
            shot_accuracy: 55.0,
            passes: 200,
            passes_completed: 150,
            pass_accuracy: 90.0,
            ..Default::default()
        };
        assert_close(shot_accuracy_from_counts(&stats), 40.0);
        assert_close(pass_accuracy_from_counts(&stats), 75.0);
        assert_eq!(StatKey::ShotAccuracy.value(&stats), 55.0);
    }

    #[test]
    fn test_summary() {
        let stats = StatBlock {
            goals: 20,
            assists: 5,
            matches: 25,
            minutes: 2000,
            shots: 80,
            tackles: 10,
            tackles_won: 7,
            ..Default::default()
        };

        let summary = PlayerSummary::from_stats(&stats);
        assert_close(summary.goals_per_match, 0.8);
        assert_close(summary.assists_per_match, 0.2);
        assert_eq!(summary.minutes_per_match, 80.0);
        assert_eq!(summary.goal_contributions, 25);
        assert_eq!(summary.goal_contributions_per_match, 1.0);
        assert_close(summary.goal_success_rate, 25.0);
        assert_close(summary.tackle_success_rate, 70.0);
    }

    #[test]
    fn test_summary_zero_matches() {
        let stats = StatBlock {
            goals: 3,
            ..Default::default()
        };

        let summary = PlayerSummary::from_stats(&stats);
        assert_eq!(summary.goals_per_match, 0.0);
        assert_eq!(summary.minutes_per_match, 0.0);
        assert!(summary.goal_contributions_per_match.is_finite());
    }

    #[test]
    fn test_detail_bars_layout() {
        let stats = StatBlock {
            goals: 5,
            shots: 20,
            touches_in_box: 150,
            key_passes: 140,
            tackles: 4,
            tackles_won: 1,
            clearances: 30,
            ..Default::default()
        };

        let bars = detail_bars(&stats);
        let labels: Vec<_> = bars.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![
                "Goal Success Rate",
                "Big Chances Created",
                "Box Touches",
                "Key Passes",
                "Tackle Success Rate",
                "Aerial Duels Won",
                "Interceptions",
                "Clearances",
            ]
        );

        assert_close(bars[0].percent, 25.0);
        assert_close(bars[2].percent, 50.0);
        // Over the cap
        assert_eq!(bars[3].value, 140.0);
        assert_eq!(bars[3].percent, 100.0);
        assert_eq!(bars[4].group, BarGroup::Defense);
        assert_close(bars[4].percent, 25.0);
        assert_close(bars[7].percent, 10.0);
    }
}
