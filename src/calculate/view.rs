//! Assembled outputs handed to rendering collaborators.

use serde::Serialize;

use super::resolve::{head_to_head, resolve_table, HeadToHeadRow, StatComparison};
use super::series::{bar_series, radar_series, SeriesRow};
use super::{detail_bars, summaries, DetailBar, PlayerSummary};
use crate::models::{ComparisonSet, FormPoint, PlayerId, PlayerStatRecord, PositionGroup};

/// Identity columns of a compared player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerHeader {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: String,
    pub position_group: PositionGroup,
    pub initials: String,
    pub rating: f64,
}

impl From<&PlayerStatRecord> for PlayerHeader {
    fn from(player: &PlayerStatRecord) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            position_group: player.position_group(),
            initials: player.initials(),
            rating: player.stats.rating,
        }
    }
}

/// Everything the comparison screen renders, in player order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub players: Vec<PlayerHeader>,
    pub summaries: Vec<PlayerSummary>,
    pub bar_series: Vec<SeriesRow>,
    pub radar_series: Vec<SeriesRow>,
    pub table: Vec<StatComparison>,
    /// Present only for a two-player comparison
    pub head_to_head: Option<Vec<HeadToHeadRow>>,
}

impl ComparisonView {
    pub fn build(set: &ComparisonSet) -> Self {
        Self {
            players: set.players().iter().map(PlayerHeader::from).collect(),
            summaries: summaries(set.players()),
            bar_series: bar_series(set),
            radar_series: radar_series(set),
            table: resolve_table(set),
            head_to_head: head_to_head(set).ok(),
        }
    }
}

/// Everything the single-player screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDetailView {
    pub player: PlayerStatRecord,
    pub position_group: PositionGroup,
    pub initials: String,
    pub summary: PlayerSummary,
    pub bars: Vec<DetailBar>,
    /// Recent form, passed through as supplied
    pub recent_form: Vec<FormPoint>,
}

impl PlayerDetailView {
    pub fn build(player: &PlayerStatRecord, recent_form: Vec<FormPoint>) -> Self {
        Self {
            player: player.clone(),
            position_group: player.position_group(),
            initials: player.initials(),
            summary: PlayerSummary::from_stats(&player.stats),
            bars: detail_bars(&player.stats),
            recent_form,
        }
    }
}
