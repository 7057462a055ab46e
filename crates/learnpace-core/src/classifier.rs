//! Threshold classification of a pace score into a [`PaceCategory`].
//!
//! Bands are checked in declaration order and the first band containing the
//! score wins. A score that falls in no band resolves to [`DEFAULT_CATEGORY`].

use crate::model::PaceCategory;
use crate::scorer::PaceScore;

/// A closed score interval `[min, max]` mapped to a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceBand {
    pub category: PaceCategory,
    pub min: f64,
    pub max: f64,
}

impl PaceBand {
    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Pace bands in matching order.
///
/// The interval between 0.33 and 0.34 is covered by no band and falls through
/// to the default.
pub const PACE_BANDS: [PaceBand; 3] = [
    PaceBand {
        category: PaceCategory::Slow,
        min: 0.0,
        max: 0.33,
    },
    PaceBand {
        category: PaceCategory::Medium,
        min: 0.34,
        max: 0.66,
    },
    PaceBand {
        category: PaceCategory::Fast,
        min: 0.67,
        max: 1.0,
    },
];

/// Category assigned to scores outside every band.
pub const DEFAULT_CATEGORY: PaceCategory = PaceCategory::Medium;

/// Return the first band containing `score`, if any.
pub fn matching_band(score: PaceScore) -> Option<&'static PaceBand> {
    PACE_BANDS.iter().find(|band| band.contains(score.value()))
}

/// Classify a pace score.
pub fn classify(score: PaceScore) -> PaceCategory {
    match matching_band(score) {
        Some(band) => band.category,
        None => {
            tracing::debug!(
                score = score.value(),
                fallback = %DEFAULT_CATEGORY,
                "score matched no pace band"
            );
            DEFAULT_CATEGORY
        }
    }
}
