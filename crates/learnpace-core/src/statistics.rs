//! Averages and cohort-level aggregate statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::model::PaceCategory;

/// Arithmetic mean of `values`; `0.0` for an empty slice.
///
/// Scoring validates non-emptiness before calling this, so the empty case
/// only arises for aggregate statistics over an empty cohort.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Aggregate statistics across a set of analysis results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohortStats {
    /// Number of analyzed students.
    pub total: usize,
    /// Number of students per pace category.
    pub per_pace: BTreeMap<PaceCategory, usize>,
    /// Mean of the raw accuracy percentages.
    pub mean_accuracy: f64,
    /// Per-course statistics.
    pub per_course: BTreeMap<String, CourseStats>,
}

/// Statistics for a single course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    /// Number of analyzed students in this course.
    pub students: usize,
    /// Number of students per pace category.
    pub per_pace: BTreeMap<PaceCategory, usize>,
    /// Mean raw accuracy percentage in this course.
    pub mean_accuracy: f64,
}

impl CohortStats {
    /// Share of students in `pace`, in [0, 1].
    pub fn pace_share(&self, pace: PaceCategory) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.per_pace.get(&pace).copied().unwrap_or(0) as f64 / self.total as f64
    }
}

/// Compute cohort statistics from analysis results.
pub fn compute_cohort_stats(results: &[AnalysisResult]) -> CohortStats {
    let mut per_pace = BTreeMap::new();
    let mut course_accuracies: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut per_course: BTreeMap<String, CourseStats> = BTreeMap::new();

    for r in results {
        *per_pace.entry(r.learning_pace).or_insert(0) += 1;

        let course = per_course.entry(r.course_id.clone()).or_default();
        course.students += 1;
        *course.per_pace.entry(r.learning_pace).or_insert(0) += 1;
        course_accuracies
            .entry(r.course_id.clone())
            .or_default()
            .push(r.accuracy);
    }

    for (course_id, accuracies) in &course_accuracies {
        if let Some(course) = per_course.get_mut(course_id) {
            course.mean_accuracy = mean(accuracies);
        }
    }

    let accuracies: Vec<f64> = results.iter().map(|r| r.accuracy).collect();

    CohortStats {
        total: results.len(),
        per_pace,
        mean_accuracy: mean(&accuracies),
        per_course,
    }
}
