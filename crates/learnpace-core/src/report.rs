//! Analysis report types with JSON persistence and pace change detection.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::AnalysisResult;
use crate::model::PaceCategory;
use crate::statistics::{compute_cohort_stats, CohortStats};

/// A batch of analysis results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Individual analysis results.
    pub results: Vec<AnalysisResult>,
    /// Aggregate statistics.
    pub summary: CohortStats,
}

impl AnalysisReport {
    /// Build a report from results, computing the cohort summary.
    pub fn new(results: Vec<AnalysisResult>) -> Self {
        let summary = compute_cohort_stats(&results);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            results,
            summary,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against a baseline to find students whose pace changed.
    ///
    /// Results are keyed by (student_id, course_id). If a key appears more than
    /// once in a report, the latest timestamp wins.
    pub fn compare(&self, baseline: &AnalysisReport) -> PaceChangeReport {
        let baseline_paces = latest_by_student(baseline);
        let current_paces = latest_by_student(self);

        let mut slowed_down = Vec::new();
        let mut sped_up = Vec::new();
        let mut unchanged = 0usize;
        let mut new_students = 0usize;

        for (key, current) in &current_paces {
            let Some(previous) = baseline_paces.get(key) else {
                new_students += 1;
                continue;
            };
            let change = PaceChange {
                student_id: key.0.clone(),
                course_id: key.1.clone(),
                baseline_pace: previous.learning_pace,
                current_pace: current.learning_pace,
                accuracy_delta: current.accuracy - previous.accuracy,
            };
            if current.learning_pace < previous.learning_pace {
                slowed_down.push(change);
            } else if current.learning_pace > previous.learning_pace {
                sped_up.push(change);
            } else {
                unchanged += 1;
            }
        }

        let removed_students = baseline_paces
            .keys()
            .filter(|k| !current_paces.contains_key(*k))
            .count();

        PaceChangeReport {
            slowed_down,
            sped_up,
            unchanged,
            new_students,
            removed_students,
        }
    }
}

fn latest_by_student(report: &AnalysisReport) -> BTreeMap<(String, String), &AnalysisResult> {
    let mut map: BTreeMap<(String, String), &AnalysisResult> = BTreeMap::new();
    for r in &report.results {
        let key = (r.student_id.clone(), r.course_id.clone());
        match map.get(&key) {
            Some(existing) if existing.timestamp >= r.timestamp => {}
            _ => {
                map.insert(key, r);
            }
        }
    }
    map
}

/// Result of comparing two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceChangeReport {
    /// Students whose pace category went down.
    pub slowed_down: Vec<PaceChange>,
    /// Students whose pace category went up.
    pub sped_up: Vec<PaceChange>,
    /// Students with the same pace in both reports.
    pub unchanged: usize,
    /// Students in current but not baseline.
    pub new_students: usize,
    /// Students in baseline but not current.
    pub removed_students: usize,
}

/// A change of pace category for one student in one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceChange {
    pub student_id: String,
    pub course_id: String,
    pub baseline_pace: PaceCategory,
    pub current_pace: PaceCategory,
    /// Change in raw accuracy percentage points.
    pub accuracy_delta: f64,
}

impl PaceChangeReport {
    /// Format the change report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} slowed down, {} sped up, {} unchanged\n\n",
            self.slowed_down.len(),
            self.sped_up.len(),
            self.unchanged
        ));

        for (title, changes) in [("Slowed down", &self.slowed_down), ("Sped up", &self.sped_up)] {
            if changes.is_empty() {
                continue;
            }
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Student | Course | Baseline | Current | Accuracy Δ |\n");
            md.push_str("|---------|--------|----------|---------|------------|\n");
            for c in changes {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {:+.2} |\n",
                    c.student_id, c.course_id, c.baseline_pace, c.current_pace, c.accuracy_delta
                ));
            }
            md.push('\n');
        }

        md
    }

    /// Returns true if any student slowed down.
    pub fn has_slowdowns(&self) -> bool {
        !self.slowed_down.is_empty()
    }
}
