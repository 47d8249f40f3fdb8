//! Overview dashboard records.

use mediscan_contracts::{
    analysis::RiskLevel,
    overview::{
        ChartSeries, HealthSummary, Overview, PatientProfile, ReportRecord, SeriesPoint, Vital,
    },
};

const HEART_RATE: [(&str, f64); 7] = [
    ("00:00", 72.0),
    ("04:00", 68.0),
    ("08:00", 75.0),
    ("12:00", 82.0),
    ("16:00", 78.0),
    ("20:00", 74.0),
    ("23:59", 70.0),
];

const BLOOD_SUGAR: [(&str, f64); 7] = [
    ("Mon", 95.0),
    ("Tue", 102.0),
    ("Wed", 88.0),
    ("Thu", 94.0),
    ("Fri", 98.0),
    ("Sat", 92.0),
    ("Sun", 90.0),
];

fn series(title: &str, subtitle: &str, points: &[(&str, f64)]) -> ChartSeries {
    ChartSeries {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        points: points
            .iter()
            .map(|(label, value)| SeriesPoint {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
    }
}

fn vital(label: &str, value: &str, unit: &str, badge: &str, trend: &str) -> Vital {
    Vital {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        badge: badge.to_string(),
        trend: trend.to_string(),
    }
}

fn report(id: u32, name: &str, date: &str, kind: &str, status: &str) -> ReportRecord {
    ReportRecord {
        id,
        name: name.to_string(),
        date: date.to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
    }
}

/// The sample patient.
pub fn patient_profile() -> PatientProfile {
    PatientProfile {
        name: "Sarah Johnson".to_string(),
        patient_id: "MDS-2024-1847".to_string(),
        age: "32 years".to_string(),
        gender: "Female".to_string(),
        blood_type: "A+".to_string(),
        height: "165 cm".to_string(),
    }
}

/// Everything the overview page shows.
pub fn overview() -> Overview {
    Overview {
        greeting: "Welcome back, Sarah!".to_string(),
        profile: patient_profile(),
        summary: HealthSummary {
            risk: RiskLevel::Low,
            narrative: "Based on your recent health data and vital signs, your overall health \
                        status is good. Your heart rate and blood pressure are within normal ranges."
                .to_string(),
            health_score: "87/100".to_string(),
            activity_level: "Moderate".to_string(),
            trend: "Improving".to_string(),
        },
        vitals: vec![
            vital("Heart Rate", "72", "bpm", "Normal", "-2 from avg"),
            vital("Blood Pressure", "120/80", "mmHg", "Optimal", "Stable"),
            vital("Blood Sugar", "90", "mg/dL", "Normal", "+5 from avg"),
            vital("BMI", "22.4", "kg/m²", "Healthy", "-0.3 change"),
        ],
        heart_rate: series("Heart Rate Trend", "Last 24 hours", &HEART_RATE),
        blood_sugar: series("Blood Sugar", "Weekly average", &BLOOD_SUGAR),
        recent_reports: vec![
            report(1, "Blood Test Report", "2025-10-20", "Laboratory", "Completed"),
            report(2, "X-Ray Chest", "2025-10-15", "Radiology", "Completed"),
            report(3, "ECG Report", "2025-10-10", "Cardiology", "Reviewed"),
        ],
    }
}
