//! Read-only records displayed on the overview page and in side panels.

use serde::{Deserialize, Serialize};

use crate::analysis::{ResultStatus, RiskLevel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub patient_id: String,
    pub age: String,
    pub gender: String,
    pub blood_type: String,
    pub height: String,
}

/// A single vital-sign card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vital {
    pub label: String,
    pub value: String,
    pub unit: String,
    /// Badge text, e.g. "Normal" or "Optimal".
    pub badge: String,
    /// Change note, e.g. "-2 from avg".
    pub trend: String,
}

/// One point of a chart series. `label` is the x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub subtitle: String,
    pub points: Vec<SeriesPoint>,
}

/// A report in the "recent health reports" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub kind: String,
    pub status: String,
}

/// The AI summary banner on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub risk: RiskLevel,
    pub narrative: String,
    pub health_score: String,
    pub activity_level: String,
    pub trend: String,
}

/// Everything the overview page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub greeting: String,
    pub profile: PatientProfile,
    pub summary: HealthSummary,
    pub vitals: Vec<Vital>,
    pub heart_rate: ChartSeries,
    pub blood_sugar: ChartSeries,
    pub recent_reports: Vec<ReportRecord>,
}

/// A past symptom analysis shown beside the symptom form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAnalysis {
    pub date: String,
    pub condition: String,
    pub risk: RiskLevel,
}

/// A past upload shown beside the report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousUpload {
    pub name: String,
    pub date: String,
    pub status: ResultStatus,
}
