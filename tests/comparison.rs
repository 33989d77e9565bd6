//! End-to-end checks over the public API: records in, views and snapshot out.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use player_compare::calculate::{
    goal_success_rate, normalize, per_match_rate, ratio_percent, resolve_stat, resolve_values,
    ComparisonView,
};
use player_compare::export::{export_snapshot, ComparisonSnapshot, FixedClock};
use player_compare::models::{ComparisonError, ComparisonSet, PlayerStatRecord, StatKey};

fn player(id: u32, name: &str, team: &str, stats: serde_json::Value) -> PlayerStatRecord {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "team": team,
        "position": "ST",
        "age": 27,
        "nationality": "Norway",
        "height": "1.94 m",
        "weight": "88 kg",
        "preferredFoot": "Left",
        "marketValue": "€180M",
        "stats": stats,
    }))
    .unwrap()
}

fn set_of(players: Vec<PlayerStatRecord>) -> ComparisonSet {
    ComparisonSet::new(players).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_ratio_percent_properties() {
    for (n, d) in [(1.0, 3.0), (10.0, 20.0), (7.0, -2.0), (0.0, 5.0), (250.0, 4.0)] {
        assert_close(ratio_percent(n, d), n / d * 100.0);
    }
    assert_eq!(ratio_percent(12.0, 0.0), 0.0);
    assert_eq!(ratio_percent(0.0, 0.0), 0.0);
}

#[test]
fn test_per_match_rate_properties() {
    for (t, m) in [(10.0, 4.0), (3.0, 9.0), (0.0, 1.0), (2700.0, 30.0)] {
        assert_close(per_match_rate(t, m), t / m);
    }
    assert_eq!(per_match_rate(17.0, 0.0), 0.0);
}

#[test]
fn test_goal_success_scenario() {
    let set = set_of(vec![
        player(1, "Player A", "Alpha", json!({ "goals": 10, "shots": 20 })),
        player(2, "Player B", "Beta", json!({ "goals": 4, "shots": 10 })),
    ]);

    let rates: Vec<f64> = set
        .players()
        .iter()
        .map(|p| goal_success_rate(&p.stats))
        .collect();
    assert_close(rates[0], 50.0);
    assert_close(rates[1], 40.0);

    let goals = resolve_stat(&set, StatKey::Goals);
    assert_eq!(goals.winner_index, Some(0));
    assert!(!goals.is_draw);
    assert_eq!(goals.winner_label, "Player");
}

#[test]
fn test_three_player_normalization_scenario() {
    let set = set_of(vec![
        player(1, "Ana Silva", "Alpha", json!({ "goals": 2 })),
        player(2, "Bea Costa", "Beta", json!({ "goals": 2 })),
        player(3, "Cleo Dias", "Gamma", json!({ "goals": 5 })),
    ]);

    let values = set.values(StatKey::Goals);
    let normalized = normalize(StatKey::Goals, &values);
    assert_eq!(normalized.len(), 3);
    assert_close(normalized[0], 40.0);
    assert_close(normalized[1], 40.0);
    assert_eq!(normalized[2], 100.0);

    let goals = resolve_stat(&set, StatKey::Goals);
    assert_eq!(goals.winner_index, Some(2));
    assert!(!goals.is_draw);
    assert_eq!(goals.winner_label, "Cleo");

    let view = ComparisonView::build(&set);
    assert!(view.head_to_head.is_none());
    assert_eq!(view.table.len(), 19);
}

#[test]
fn test_two_player_draw_scenario() {
    let set = set_of(vec![
        player(1, "Ana Silva", "Alpha", json!({ "goals": 3 })),
        player(2, "Bea Costa", "Beta", json!({ "goals": 3 })),
    ]);

    let goals = resolve_stat(&set, StatKey::Goals);
    assert!(goals.is_draw);
    assert_eq!(goals.winner_index, None);
    assert_eq!(goals.winner_label, "Draw");

    let view = ComparisonView::build(&set);
    let rows = view.head_to_head.unwrap();
    assert_eq!(rows[0].shares, [100.0, 100.0]);
}

#[test]
fn test_resolver_on_raw_values() {
    let draw = resolve_values(&[5.0, 5.0]);
    assert!(draw.is_draw);
    assert_eq!(draw.winner_index, None);

    let win = resolve_values(&[7.0, 3.0]);
    assert!(!win.is_draw);
    assert_eq!(win.winner_index, Some(0));
}

#[test]
fn test_normalize_bounds() {
    let zeros = normalize(StatKey::Dribbles, &[0.0, 0.0, 0.0]);
    assert_eq!(zeros, vec![0.0, 0.0, 0.0]);

    let scaled = normalize(StatKey::Assists, &[1.0, 9.0, 4.0, 0.0]);
    assert_eq!(scaled[1], 100.0);
    assert!(scaled.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn test_export_round_trip() {
    let set = set_of(vec![
        player(
            9,
            "Erling Haaland",
            "Manchester City",
            json!({ "goals": 27, "shots": 98, "rating": 8.5, "shotAccuracy": 62.5, "topSpeed": 36.0 }),
        ),
        player(
            10,
            "Kylian Mbappé",
            "Real Madrid",
            json!({ "goals": 24, "assists": 8, "rating": 8.25, "passAccuracy": 84.5 }),
        ),
    ]);
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());

    let export = export_snapshot(&set, &clock);
    assert_eq!(
        export.filename,
        "comparison_Erling_Haaland_vs_Kylian_Mbappé.json"
    );

    let text = export.document.to_json_pretty().unwrap();
    let parsed: ComparisonSnapshot = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.kind, "player_comparison");
    assert_eq!(parsed.timestamp, "2024-05-01T12:30:00.000Z");
    assert_eq!(parsed.players.len(), 2);
    for (exported, original) in parsed.players.iter().zip(set.players()) {
        assert_eq!(exported.name, original.name);
        assert_eq!(exported.team, original.team);
        assert_eq!(exported.position, original.position);
        assert_eq!(exported.stats, original.stats);
    }
}

#[test]
fn test_single_player_is_not_a_comparison() {
    let result = ComparisonSet::new(vec![player(1, "Solo", "Alpha", json!({}))]);
    assert_eq!(result.unwrap_err(), ComparisonError::TooFewPlayers(1));
}
