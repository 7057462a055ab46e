//! Analysis entry point: score → classify → recommend, plus an accuracy summary.
//!
//! This is the only layer that reads the wall clock. Everything below it is a
//! pure function of the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::error::ValidationError;
use crate::model::{PaceCategory, RecommendationBundle, StudentPerformanceRecord};
use crate::recommender::recommend;
use crate::scorer::PaceScorer;
use crate::statistics::mean;

/// Outcome of analyzing one student's performance in one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub student_id: String,
    pub course_id: String,
    /// Classified pace.
    pub learning_pace: PaceCategory,
    /// Mean raw quiz percentage (0–100). Reporting only, not used for classification.
    pub accuracy: f64,
    /// Recommendations for `learning_pace`.
    pub recommendations: RecommendationBundle,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
}

/// Runs analyses with a configured scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    scorer: PaceScorer,
}

impl Analyzer {
    pub fn new(scorer: PaceScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &PaceScorer {
        &self.scorer
    }

    /// Analyze a record, stamping the result with the current time.
    pub fn analyze(
        &self,
        student_id: &str,
        course_id: &str,
        record: &StudentPerformanceRecord,
    ) -> Result<AnalysisResult, ValidationError> {
        self.analyze_at(student_id, course_id, record, Utc::now())
    }

    /// Analyze a record with an explicit timestamp.
    pub fn analyze_at(
        &self,
        student_id: &str,
        course_id: &str,
        record: &StudentPerformanceRecord,
        timestamp: DateTime<Utc>,
    ) -> Result<AnalysisResult, ValidationError> {
        let score = self.scorer.score(record)?;
        let learning_pace = classify(score);
        let recommendations = *recommend(learning_pace);
        let accuracy = mean(&record.quiz_scores);

        tracing::debug!(
            student_id,
            course_id,
            score = score.value(),
            pace = %learning_pace,
            "analyzed student"
        );

        Ok(AnalysisResult {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            learning_pace,
            accuracy,
            recommendations,
            timestamp,
        })
    }
}

/// Analyze a record with the default weights.
pub fn analyze(
    student_id: &str,
    course_id: &str,
    record: &StudentPerformanceRecord,
) -> Result<AnalysisResult, ValidationError> {
    Analyzer::default().analyze(student_id, course_id, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompletionTime;
    use crate::recommender::{FAST_BUNDLE, SLOW_BUNDLE};
    use chrono::TimeZone;

    fn sample_record() -> StudentPerformanceRecord {
        StudentPerformanceRecord::new(
            CompletionTime::new(60.0, 55.0),
            vec![85.0, 90.0, 88.0, 92.0],
            vec![90.0, 85.0, 95.0],
        )
    }

    #[test]
    fn sample_student_is_fast() {
        let result = analyze("STU001", "COURSE101", &sample_record()).unwrap();
        assert_eq!(result.student_id, "STU001");
        assert_eq!(result.course_id, "COURSE101");
        assert_eq!(result.learning_pace, PaceCategory::Fast);
        assert!((result.accuracy - 88.75).abs() < 1e-9);
        assert_eq!(result.recommendations, FAST_BUNDLE);
    }

    #[test]
    fn accuracy_is_raw_percentage_not_normalized() {
        let record = StudentPerformanceRecord::new(
            CompletionTime::new(10.0, 100.0),
            vec![20.0, 30.0],
            vec![10.0],
        );
        let result = analyze("s", "c", &record).unwrap();
        assert!((result.accuracy - 25.0).abs() < 1e-9);
        assert_eq!(result.learning_pace, PaceCategory::Slow);
        assert_eq!(result.recommendations, SLOW_BUNDLE);
    }

    #[test]
    fn analyze_at_uses_given_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let result = Analyzer::default()
            .analyze_at("STU001", "COURSE101", &sample_record(), ts)
            .unwrap();
        assert_eq!(result.timestamp, ts);
    }

    #[test]
    fn invalid_record_propagates_validation_error() {
        let mut record = sample_record();
        record.completion_time.actual = 0.0;
        let err = analyze("s", "c", &record).unwrap_err();
        assert_eq!(err.field(), Some("completion_time.actual"));
    }

    #[test]
    fn response_json_shape() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let result = Analyzer::default()
            .analyze_at("STU001", "COURSE101", &sample_record(), ts)
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["student_id"], "STU001");
        assert_eq!(json["learning_pace"], "fast");
        assert_eq!(json["accuracy"], 88.75);
        assert_eq!(json["recommendations"]["content_type"], "advanced");
        assert_eq!(json["timestamp"], "2025-03-01T12:00:00Z");
    }
}
