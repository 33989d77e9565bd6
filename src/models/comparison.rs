//! Comparison set: an ordered group of players compared side by side.

use thiserror::Error;

use super::{PlayerStatRecord, StatKey};

/// Minimum number of players in a comparison.
pub const MIN_COMPARISON_PLAYERS: usize = 2;

/// Errors raised when assembling a comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("A comparison needs at least {MIN_COMPARISON_PLAYERS} players, got {0}")]
    TooFewPlayers(usize),

    #[error("Head-to-head needs exactly 2 players, got {0}")]
    HeadToHeadRequiresTwo(usize),
}

/// An ordered sequence of at least two players.
///
/// Position in the set is the identity used by every derived output.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSet {
    players: Vec<PlayerStatRecord>,
}

impl ComparisonSet {
    /// Build a comparison set, keeping the caller's order.
    pub fn new(players: Vec<PlayerStatRecord>) -> Result<Self, ComparisonError> {
        if players.len() < MIN_COMPARISON_PLAYERS {
            return Err(ComparisonError::TooFewPlayers(players.len()));
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[PlayerStatRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Raw values of one statistic, in player order.
    pub fn values(&self, stat: StatKey) -> Vec<f64> {
        let accessor = stat.accessor();
        self.players.iter().map(|p| accessor(&p.stats)).collect()
    }

    /// The two players of a head-to-head comparison.
    pub fn pair(&self) -> Result<(&PlayerStatRecord, &PlayerStatRecord), ComparisonError> {
        match self.players.as_slice() {
            [a, b] => Ok((a, b)),
            other => Err(ComparisonError::HeadToHeadRequiresTwo(other.len())),
        }
    }
}
