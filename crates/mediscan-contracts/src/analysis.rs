//! Types shared by the symptom-check and report-upload views.
//!
//! Both views drive the same three-phase analyzer and reveal a constant
//! payload once it completes. None of the payload is derived from the input.

use serde::{Deserialize, Serialize};

/// Phase of an analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Analyzing,
    Done,
}

// ── Symptom analysis ──────────────────────────────────────────────────────────

/// Risk band attached to a suggested condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// A condition suggested by the symptom analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub condition: String,
    /// Match probability as a whole percentage (0–100).
    pub probability: u8,
    pub risk: RiskLevel,
    pub description: String,
}

/// Everything revealed when a symptom analysis completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub conditions: Vec<ConditionMatch>,
    pub recommendations: Vec<String>,
}

// ── Report extraction ─────────────────────────────────────────────────────────

/// Where an extracted value sits relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Normal,
    High,
    Low,
}

impl ResultStatus {
    pub fn label(self) -> &'static str {
        match self {
            ResultStatus::Normal => "normal",
            ResultStatus::High => "high",
            ResultStatus::Low => "low",
        }
    }
}

/// One row of the extracted-data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRow {
    pub parameter: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: ResultStatus,
}

/// Row counts per status, shown above the extracted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub normal: usize,
    pub high: usize,
    pub low: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Tally the rows by status.
    pub fn tally(rows: &[ExtractedRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            match row.status {
                ResultStatus::Normal => acc.normal += 1,
                ResultStatus::High => acc.high += 1,
                ResultStatus::Low => acc.low += 1,
            }
            acc.total += 1;
            acc
        })
    }
}

/// Everything revealed when a report analysis completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub rows: Vec<ExtractedRow>,
    pub insights: Vec<String>,
}

impl ExtractionReport {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.rows)
    }
}

/// A user-chosen local file. Only its name and size are ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in mebibytes with two decimals, e.g. "1.50 MB".
    pub fn size_mb(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}
