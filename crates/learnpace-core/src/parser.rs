//! Student record file parser.
//!
//! Loads analysis requests from TOML or JSON files and directories, and
//! validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{CompletionTime, StudentPerformanceRecord};

/// One student/course pair to analyze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub student_id: String,
    pub course_id: String,
    #[serde(flatten)]
    pub record: StudentPerformanceRecord,
}

/// On-disk layout of a record file.
#[derive(Debug, Serialize, Deserialize)]
struct RecordFile {
    #[serde(default)]
    students: Vec<AnalysisRequest>,
}

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Toml,
    Json,
}

impl RecordFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(RecordFormat::Toml),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }
}

/// Parse a single record file.
pub fn parse_records(path: &Path) -> Result<Vec<AnalysisRequest>> {
    let format = RecordFormat::from_path(path).with_context(|| {
        format!(
            "unsupported record file extension (expected .toml or .json): {}",
            path.display()
        )
    })?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record file: {}", path.display()))?;

    parse_records_str(&content, format, path)
}

/// Parse record file contents (useful for testing).
pub fn parse_records_str(
    content: &str,
    format: RecordFormat,
    source_path: &Path,
) -> Result<Vec<AnalysisRequest>> {
    let parsed: RecordFile = match format {
        RecordFormat::Toml => toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?,
        RecordFormat::Json => serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?,
    };

    Ok(parsed.students)
}

/// A record file that could not be parsed during a directory load.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    /// Parse error with its full context chain.
    pub error: String,
}

/// Requests loaded from a file or directory, plus any files that failed to parse.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub requests: Vec<AnalysisRequest>,
    pub skipped: Vec<SkippedFile>,
}

impl LoadedRecords {
    /// Return the requests, or fail if any file was skipped.
    pub fn into_complete(self) -> Result<Vec<AnalysisRequest>> {
        match self.skipped.as_slice() {
            [] => Ok(self.requests),
            [first, ..] => anyhow::bail!(
                "{} record file(s) failed to parse, first: {}: {}",
                self.skipped.len(),
                first.path.display(),
                first.error
            ),
        }
    }
}

/// Recursively load all record files from a directory.
///
/// Files that fail to parse are collected in [`LoadedRecords::skipped`] and
/// logged; the caller decides whether that is fatal.
pub fn load_record_directory(dir: &Path) -> Result<LoadedRecords> {
    let mut loaded = LoadedRecords::default();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            let nested = load_record_directory(&path)?;
            loaded.requests.extend(nested.requests);
            loaded.skipped.extend(nested.skipped);
        } else if RecordFormat::from_path(&path).is_some() {
            match parse_records(&path) {
                Ok(mut parsed) => loaded.requests.append(&mut parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                    loaded.skipped.push(SkippedFile {
                        error: format!("{e:#}"),
                        path,
                    });
                }
            }
        }
    }

    Ok(loaded)
}

/// Load requests from a file or a directory.
///
/// A single file that fails to parse is an error.
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    if path.is_dir() {
        load_record_directory(path)
    } else {
        Ok(LoadedRecords {
            requests: parse_records(path)?,
            skipped: Vec::new(),
        })
    }
}

/// A warning from request validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// `student_id/course_id` of the offending request.
    pub request: String,
    /// Warning message.
    pub message: String,
}

/// Validate requests for problems that would make analysis fail or mislead.
pub fn validate_requests(requests: &[AnalysisRequest]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for req in requests {
        let key = format!("{}/{}", req.student_id, req.course_id);

        if !seen.insert((req.student_id.as_str(), req.course_id.as_str())) {
            warnings.push(ValidationWarning {
                request: key.clone(),
                message: "duplicate student/course pair".into(),
            });
        }

        if req.student_id.trim().is_empty() {
            warnings.push(ValidationWarning {
                request: key.clone(),
                message: "student_id is empty".into(),
            });
        }

        if let Err(e) = req.record.validate() {
            warnings.push(ValidationWarning {
                request: key.clone(),
                message: e.to_string(),
            });
        } else if req.record.completion_time.expected == 0.0 {
            warnings.push(ValidationWarning {
                request: key,
                message: "expected completion time is 0, time efficiency will always be 0".into(),
            });
        }
    }

    warnings
}

/// The demo student used by `learnpace init` and the examples.
pub fn sample_request() -> AnalysisRequest {
    AnalysisRequest {
        student_id: "STU001".into(),
        course_id: "COURSE101".into(),
        record: StudentPerformanceRecord::new(
            CompletionTime::new(60.0, 55.0),
            vec![85.0, 90.0, 88.0, 92.0],
            vec![90.0, 85.0, 95.0],
        ),
    }
}

/// Render requests in the TOML record file layout.
pub fn to_toml_string(requests: &[AnalysisRequest]) -> Result<String> {
    let file = RecordFile {
        students: requests.to_vec(),
    };
    toml::to_string_pretty(&file).context("failed to serialize records")
}
