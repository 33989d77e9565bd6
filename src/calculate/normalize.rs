//! Normalization of a statistic onto a 0-100 scale.

use serde::Serialize;

use crate::models::StatKey;

/// Upper bound of the normalized scale.
pub const SCALE_MAX: f64 = 100.0;

/// Upper bound of a player rating.
pub const RATING_SCALE: f64 = 10.0;

/// Rule mapping raw values onto the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "scale")]
pub enum NormalizationPolicy {
    /// `value / max(values) * 100`, all zeros when the max is zero.
    MaxRelative,
    /// `value / scale * 100`, independent of the other players.
    FixedScale(f64),
    /// Value is already a percentage.
    Identity,
}

impl NormalizationPolicy {
    /// Policy for a statistic.
    ///
    /// Rating uses its fixed 0-10 scale, stored percentages pass through,
    /// every counter is compared against the best player in the set.
    pub fn for_stat(stat: StatKey) -> Self {
        match stat {
            StatKey::Rating => NormalizationPolicy::FixedScale(RATING_SCALE),
            s if s.is_percentage() => NormalizationPolicy::Identity,
            _ => NormalizationPolicy::MaxRelative,
        }
    }

    /// Apply the policy to one statistic's values, preserving order.
    pub fn apply(self, values: &[f64]) -> Vec<f64> {
        match self {
            NormalizationPolicy::MaxRelative => {
                let max = values.iter().copied().fold(0.0_f64, f64::max);
                if max <= 0.0 {
                    return vec![0.0; values.len()];
                }
                values.iter().map(|v| clamp_scale(v / max * SCALE_MAX)).collect()
            }
            NormalizationPolicy::FixedScale(scale) => {
                if scale <= 0.0 {
                    return vec![0.0; values.len()];
                }
                values
                    .iter()
                    .map(|v| clamp_scale(v / scale * SCALE_MAX))
                    .collect()
            }
            NormalizationPolicy::Identity => values.iter().map(|v| clamp_scale(*v)).collect(),
        }
    }
}

/// Normalize a statistic's values across a comparison set.
pub fn normalize(stat: StatKey, values: &[f64]) -> Vec<f64> {
    NormalizationPolicy::for_stat(stat).apply(values)
}

fn clamp_scale(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, SCALE_MAX)
    }
}
