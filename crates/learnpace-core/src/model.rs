//! Core data model types for learnpace.
//!
//! A [`StudentPerformanceRecord`] is the raw input; a [`PaceCategory`] is the
//! classified output; a [`RecommendationBundle`] is what the category maps to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Expected and actual time spent on a unit of work, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionTime {
    /// Time the course author expects the unit to take.
    pub expected: f64,
    /// Time the student actually took. Used as a divisor.
    pub actual: f64,
}

impl CompletionTime {
    pub fn new(expected: f64, actual: f64) -> Self {
        Self { expected, actual }
    }

    /// Check that both durations are finite, `expected >= 0` and `actual > 0`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.expected.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "completion_time.expected",
            });
        }
        if !self.actual.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "completion_time.actual",
            });
        }
        if self.expected < 0.0 {
            return Err(ValidationError::NegativeDuration {
                field: "completion_time.expected",
                value: self.expected,
            });
        }
        if self.actual <= 0.0 {
            return Err(ValidationError::NonPositiveDuration {
                field: "completion_time.actual",
                value: self.actual,
            });
        }
        Ok(())
    }
}

/// Raw performance signals for one student in one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPerformanceRecord {
    /// Expected vs. actual completion time.
    pub completion_time: CompletionTime,
    /// Quiz results as percentages, in the order they were taken.
    pub quiz_scores: Vec<f64>,
    /// Engagement measurements as percentages.
    pub engagement_metrics: Vec<f64>,
}

impl StudentPerformanceRecord {
    pub fn new(
        completion_time: CompletionTime,
        quiz_scores: Vec<f64>,
        engagement_metrics: Vec<f64>,
    ) -> Self {
        Self {
            completion_time,
            quiz_scores,
            engagement_metrics,
        }
    }

    /// Validate every field, failing on the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.completion_time.validate()?;
        validate_percentages("quiz_scores", &self.quiz_scores)?;
        validate_percentages("engagement_metrics", &self.engagement_metrics)?;
        Ok(())
    }
}

fn validate_percentages(field: &'static str, values: &[f64]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptySequence { field });
    }
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field });
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::PercentageOutOfRange {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}

/// Discrete learning pace of a student relative to expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceCategory {
    Slow,
    Medium,
    Fast,
}

impl PaceCategory {
    /// All categories, slowest first.
    pub const ALL: [PaceCategory; 3] = [PaceCategory::Slow, PaceCategory::Medium, PaceCategory::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaceCategory::Slow => "slow",
            PaceCategory::Medium => "medium",
            PaceCategory::Fast => "fast",
        }
    }
}

impl fmt::Display for PaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(PaceCategory::Slow),
            "medium" => Ok(PaceCategory::Medium),
            "fast" => Ok(PaceCategory::Fast),
            other => Err(format!("unknown pace category: {other}")),
        }
    }
}

/// How much depth the delivered content goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Detailed,
    Balanced,
    Advanced,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Detailed => write!(f, "detailed"),
            ContentType::Balanced => write!(f, "balanced"),
            ContentType::Advanced => write!(f, "advanced"),
        }
    }
}

/// Volume and difficulty of practice exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeExercises {
    More,
    Standard,
    Challenging,
}

impl fmt::Display for PracticeExercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticeExercises::More => write!(f, "more"),
            PracticeExercises::Standard => write!(f, "standard"),
            PracticeExercises::Challenging => write!(f, "challenging"),
        }
    }
}

/// Whether supplementary resources are offered.
///
/// Serialized as `true`, `false`, or the string `"optional"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraResources {
    Included,
    Excluded,
    Optional,
}

impl fmt::Display for ExtraResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraResources::Included => write!(f, "true"),
            ExtraResources::Excluded => write!(f, "false"),
            ExtraResources::Optional => write!(f, "optional"),
        }
    }
}

impl Serialize for ExtraResources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExtraResources::Included => serializer.serialize_bool(true),
            ExtraResources::Excluded => serializer.serialize_bool(false),
            ExtraResources::Optional => serializer.serialize_str("optional"),
        }
    }
}

impl<'de> Deserialize<'de> for ExtraResources {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(ExtraResources::Included),
            Raw::Flag(false) => Ok(ExtraResources::Excluded),
            Raw::Label(label) if label.eq_ignore_ascii_case("optional") => {
                Ok(ExtraResources::Optional)
            }
            Raw::Label(other) => Err(serde::de::Error::custom(format!(
                "expected true, false or \"optional\", got \"{other}\""
            ))),
        }
    }
}

/// Recommended length of a study session. Serialized as `"<n> min"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SessionDuration {
    minutes: u32,
}

impl SessionDuration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}

impl From<SessionDuration> for String {
    fn from(duration: SessionDuration) -> Self {
        duration.to_string()
    }
}

impl TryFrom<String> for SessionDuration {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let number = trimmed
            .strip_suffix("min")
            .map(str::trim_end)
            .unwrap_or(trimmed);
        number
            .parse::<u32>()
            .map(Self::from_minutes)
            .map_err(|_| format!("invalid session duration: {value}"))
    }
}

/// Content-delivery parameters associated with a pace category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub content_type: ContentType,
    pub extra_resources: ExtraResources,
    pub practice_exercises: PracticeExercises,
    pub session_duration: SessionDuration,
}

impl RecommendationBundle {
    /// Field name / value pairs in declaration order, for display.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("content_type", self.content_type.to_string()),
            ("extra_resources", self.extra_resources.to_string()),
            ("practice_exercises", self.practice_exercises.to_string()),
            ("session_duration", self.session_duration.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> StudentPerformanceRecord {
        StudentPerformanceRecord::new(
            CompletionTime::new(60.0, 55.0),
            vec![85.0, 90.0, 88.0, 92.0],
            vec![90.0, 85.0, 95.0],
        )
    }

    #[test]
    fn pace_category_display_and_parse() {
        assert_eq!(PaceCategory::Slow.to_string(), "slow");
        assert_eq!("FAST".parse::<PaceCategory>().unwrap(), PaceCategory::Fast);
        assert_eq!(" medium ".parse::<PaceCategory>().unwrap(), PaceCategory::Medium);
        assert!("turbo".parse::<PaceCategory>().is_err());
    }

    #[test]
    fn pace_category_orders_slowest_first() {
        assert!(PaceCategory::Slow < PaceCategory::Medium);
        assert!(PaceCategory::Medium < PaceCategory::Fast);
    }

    #[test]
    fn valid_record_passes() {
        assert!(valid_record().validate().is_ok());
    }

    #[test]
    fn zero_actual_time_rejected() {
        let mut record = valid_record();
        record.completion_time.actual = 0.0;
        let err = record.validate().unwrap_err();
        assert_eq!(err.field(), Some("completion_time.actual"));
        assert!(matches!(err, ValidationError::NonPositiveDuration { .. }));
    }

    #[test]
    fn negative_expected_time_rejected() {
        let mut record = valid_record();
        record.completion_time.expected = -5.0;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::NegativeDuration { .. })
        ));
    }

    #[test]
    fn zero_expected_time_allowed() {
        let mut record = valid_record();
        record.completion_time.expected = 0.0;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn empty_sequences_rejected() {
        let mut record = valid_record();
        record.quiz_scores.clear();
        assert_eq!(
            record.validate(),
            Err(ValidationError::EmptySequence {
                field: "quiz_scores"
            })
        );

        let mut record = valid_record();
        record.engagement_metrics.clear();
        assert_eq!(
            record.validate(),
            Err(ValidationError::EmptySequence {
                field: "engagement_metrics"
            })
        );
    }

    #[test]
    fn out_of_range_percentage_reports_index() {
        let mut record = valid_record();
        record.engagement_metrics[1] = 101.0;
        assert_eq!(
            record.validate(),
            Err(ValidationError::PercentageOutOfRange {
                field: "engagement_metrics",
                index: 1,
                value: 101.0,
            })
        );
    }

    #[test]
    fn nan_percentage_rejected() {
        let mut record = valid_record();
        record.quiz_scores.push(f64::NAN);
        assert_eq!(
            record.validate(),
            Err(ValidationError::NonFinite {
                field: "quiz_scores"
            })
        );
    }

    #[test]
    fn extra_resources_serde() {
        assert_eq!(serde_json::to_string(&ExtraResources::Included).unwrap(), "true");
        assert_eq!(serde_json::to_string(&ExtraResources::Excluded).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&ExtraResources::Optional).unwrap(),
            "\"optional\""
        );
        let parsed: ExtraResources = serde_json::from_str("\"optional\"").unwrap();
        assert_eq!(parsed, ExtraResources::Optional);
        assert!(serde_json::from_str::<ExtraResources>("\"sometimes\"").is_err());
    }

    #[test]
    fn session_duration_serde() {
        let duration = SessionDuration::from_minutes(45);
        assert_eq!(serde_json::to_string(&duration).unwrap(), "\"45 min\"");
        let parsed: SessionDuration = serde_json::from_str("\"30min\"").unwrap();
        assert_eq!(parsed.minutes(), 30);
        assert!(serde_json::from_str::<SessionDuration>("\"half an hour\"").is_err());
    }

    #[test]
    fn record_deserializes_integer_percentages() {
        let json = r#"{
            "completion_time": {"expected": 60, "actual": 55},
            "quiz_scores": [85, 90, 88, 92],
            "engagement_metrics": [90, 85, 95]
        }"#;
        let record: StudentPerformanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, valid_record());
    }
}
