//! Pace scoring: normalize three signal groups and combine them into one score.
//!
//! - time efficiency = clamp(expected / actual, 0, 1)
//! - accuracy        = mean(quiz_scores) / 100
//! - engagement      = mean(engagement_metrics) / 100
//!
//! The composite is the weighted sum of the three, using [`PaceWeights`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{CompletionTime, StudentPerformanceRecord};
use crate::statistics::mean;

/// Lower bound of the time efficiency score.
pub const TIME_SCORE_FLOOR: f64 = 0.0;
/// Upper bound of the time efficiency score. Finishing early earns no bonus.
pub const TIME_SCORE_CEILING: f64 = 1.0;

/// Default weight of the time efficiency signal.
pub const DEFAULT_TIME_WEIGHT: f64 = 0.3;
/// Default weight of the quiz accuracy signal.
pub const DEFAULT_ACCURACY_WEIGHT: f64 = 0.5;
/// Default weight of the engagement signal.
pub const DEFAULT_ENGAGEMENT_WEIGHT: f64 = 0.2;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative weights of the three signals in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceWeights {
    #[serde(default = "default_time_weight")]
    pub time: f64,
    #[serde(default = "default_accuracy_weight")]
    pub accuracy: f64,
    #[serde(default = "default_engagement_weight")]
    pub engagement: f64,
}

fn default_time_weight() -> f64 {
    DEFAULT_TIME_WEIGHT
}
fn default_accuracy_weight() -> f64 {
    DEFAULT_ACCURACY_WEIGHT
}
fn default_engagement_weight() -> f64 {
    DEFAULT_ENGAGEMENT_WEIGHT
}

impl Default for PaceWeights {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME_WEIGHT,
            accuracy: DEFAULT_ACCURACY_WEIGHT,
            engagement: DEFAULT_ENGAGEMENT_WEIGHT,
        }
    }
}

impl PaceWeights {
    /// Weights must be finite, non-negative, and sum to 1.0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("time", self.time),
            ("accuracy", self.accuracy),
            ("engagement", self.engagement),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {value}"
                )));
            }
        }
        let sum = self.time + self.accuracy + self.engagement;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Composite pace score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaceScore(f64);

impl PaceScore {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for PaceScore {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// The normalized signals behind a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub time: f64,
    pub accuracy: f64,
    pub engagement: f64,
    pub composite: PaceScore,
}

/// Time efficiency in [0, 1]. Callers must have validated `actual > 0`.
pub fn time_efficiency(completion_time: &CompletionTime) -> f64 {
    (completion_time.expected / completion_time.actual).clamp(TIME_SCORE_FLOOR, TIME_SCORE_CEILING)
}

/// Scores performance records with a fixed set of weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceScorer {
    weights: PaceWeights,
}

impl PaceScorer {
    /// Build a scorer, rejecting weights that are negative or do not sum to 1.0.
    pub fn new(weights: PaceWeights) -> Result<Self, ValidationError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &PaceWeights {
        &self.weights
    }

    /// Validate the record and compute each normalized signal plus the composite.
    pub fn breakdown(
        &self,
        record: &StudentPerformanceRecord,
    ) -> Result<ScoreBreakdown, ValidationError> {
        record.validate()?;

        let time = time_efficiency(&record.completion_time);
        let accuracy = mean(&record.quiz_scores) / 100.0;
        let engagement = mean(&record.engagement_metrics) / 100.0;

        let composite = (time * self.weights.time
            + accuracy * self.weights.accuracy
            + engagement * self.weights.engagement)
            .clamp(0.0, 1.0);

        tracing::debug!(time, accuracy, engagement, composite, "scored record");

        Ok(ScoreBreakdown {
            time,
            accuracy,
            engagement,
            composite: PaceScore(composite),
        })
    }

    /// Compute the composite pace score of a record.
    pub fn score(&self, record: &StudentPerformanceRecord) -> Result<PaceScore, ValidationError> {
        self.breakdown(record).map(|b| b.composite)
    }
}

/// Score a record with the default weights.
pub fn score(record: &StudentPerformanceRecord) -> Result<PaceScore, ValidationError> {
    PaceScorer::default().score(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expected: f64, actual: f64, quiz: &[f64], engagement: &[f64]) -> StudentPerformanceRecord {
        StudentPerformanceRecord::new(
            CompletionTime::new(expected, actual),
            quiz.to_vec(),
            engagement.to_vec(),
        )
    }

    #[test]
    fn time_efficiency_is_capped_at_one() {
        assert_eq!(time_efficiency(&CompletionTime::new(120.0, 60.0)), 1.0);
    }

    #[test]
    fn time_efficiency_for_slow_completion() {
        assert!((time_efficiency(&CompletionTime::new(30.0, 120.0)) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn time_efficiency_zero_expected() {
        assert_eq!(time_efficiency(&CompletionTime::new(0.0, 10.0)), 0.0);
    }

    #[test]
    fn sample_student_breakdown() {
        let r = record(60.0, 55.0, &[85.0, 90.0, 88.0, 92.0], &[90.0, 85.0, 95.0]);
        let b = PaceScorer::default().breakdown(&r).unwrap();
        assert_eq!(b.time, 1.0);
        assert!((b.accuracy - 0.8875).abs() < 1e-12);
        assert!((b.engagement - 0.90).abs() < 1e-12);
        assert!(
            (b.composite.value() - 0.92375).abs() < 1e-9,
            "expected 0.92375, got {}",
            b.composite.value()
        );
    }

    #[test]
    fn zero_actual_time_is_an_error_not_nan() {
        let r = record(60.0, 0.0, &[50.0], &[50.0]);
        let err = score(&r).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonPositiveDuration {
                field: "completion_time.actual",
                ..
            }
        ));
    }

    #[test]
    fn empty_quiz_scores_is_an_error() {
        let r = record(60.0, 60.0, &[], &[50.0]);
        assert_eq!(
            score(&r),
            Err(ValidationError::EmptySequence {
                field: "quiz_scores"
            })
        );
    }

    #[test]
    fn score_stays_in_unit_interval_and_is_idempotent() {
        let cases = [
            record(0.0, 1.0, &[0.0], &[0.0]),
            record(500.0, 1.0, &[100.0, 100.0], &[100.0]),
            record(45.0, 90.0, &[10.0, 55.5, 99.0], &[0.0, 100.0]),
            record(1.0, 1000.0, &[33.3], &[66.6, 12.0]),
        ];
        for r in &cases {
            let first = score(r).unwrap();
            let second = score(r).unwrap();
            assert_eq!(first, second);
            assert!((0.0..=1.0).contains(&first.value()), "out of range: {first:?}");
        }
    }

    #[test]
    fn perfect_and_zero_records_hit_the_bounds() {
        let best = score(&record(60.0, 30.0, &[100.0], &[100.0])).unwrap();
        assert!((best.value() - 1.0).abs() < 1e-12);
        let worst = score(&record(0.0, 30.0, &[0.0], &[0.0])).unwrap();
        assert_eq!(worst.value(), 0.0);
    }

    #[test]
    fn custom_weights_change_the_composite() {
        let scorer = PaceScorer::new(PaceWeights {
            time: 0.0,
            accuracy: 1.0,
            engagement: 0.0,
        })
        .unwrap();
        let r = record(10.0, 100.0, &[40.0, 60.0], &[100.0]);
        assert!((scorer.score(&r).unwrap().value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_must_sum_to_one() {
        let err = PaceScorer::new(PaceWeights {
            time: 0.3,
            accuracy: 0.3,
            engagement: 0.3,
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWeights(_)));
    }

    #[test]
    fn negative_weight_rejected() {
        let weights = PaceWeights {
            time: -0.1,
            accuracy: 0.9,
            engagement: 0.2,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn default_weights_are_valid() {
        assert!(PaceWeights::default().validate().is_ok());
    }
}
