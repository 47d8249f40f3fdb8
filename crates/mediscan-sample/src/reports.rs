//! Report-upload payloads.
//!
//! The uploaded file is never opened; `extraction_result` is the same for
//! every file.

use mediscan_contracts::{
    analysis::{ExtractedRow, ExtractionReport, ResultStatus},
    overview::PreviousUpload,
};

/// File extensions the picker offers.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

const EXTRACTED: [(&str, &str, &str, &str, ResultStatus); 8] = [
    ("Hemoglobin", "14.5", "g/dL", "12.0-16.0", ResultStatus::Normal),
    ("RBC Count", "4.8", "million/μL", "4.5-5.5", ResultStatus::Normal),
    ("WBC Count", "9.2", "thousand/μL", "4.0-11.0", ResultStatus::Normal),
    ("Platelet Count", "280", "thousand/μL", "150-450", ResultStatus::Normal),
    ("Glucose (Fasting)", "105", "mg/dL", "70-100", ResultStatus::High),
    ("Total Cholesterol", "195", "mg/dL", "<200", ResultStatus::Normal),
    ("HDL Cholesterol", "45", "mg/dL", ">40", ResultStatus::Normal),
    ("LDL Cholesterol", "125", "mg/dL", "<100", ResultStatus::High),
];

/// The extracted-data table revealed when a report analysis completes.
pub fn extraction_result() -> ExtractionReport {
    ExtractionReport {
        rows: EXTRACTED
            .iter()
            .map(|(parameter, value, unit, range, status)| ExtractedRow {
                parameter: parameter.to_string(),
                value: value.to_string(),
                unit: unit.to_string(),
                reference_range: range.to_string(),
                status: *status,
            })
            .collect(),
        insights: vec![
            "Your fasting glucose (105 mg/dL) is slightly elevated. Consider reducing sugar \
             intake and monitoring regularly."
                .to_string(),
            "LDL cholesterol is higher than recommended. Increase fiber intake and consider \
             cardiovascular exercise."
                .to_string(),
            "Blood cell counts are within healthy ranges, indicating good overall blood health."
                .to_string(),
        ],
    }
}

pub fn supported_report_types() -> Vec<&'static str> {
    vec![
        "Blood Test",
        "Urine Analysis",
        "Lipid Profile",
        "Liver Function",
        "Kidney Function",
    ]
}

pub fn previous_uploads() -> Vec<PreviousUpload> {
    [
        ("Blood Test Oct 2025", "Oct 18, 2025", ResultStatus::Normal),
        ("Lipid Profile Sep 2025", "Sep 25, 2025", ResultStatus::High),
        ("Complete Blood Count", "Sep 10, 2025", ResultStatus::Normal),
    ]
    .into_iter()
    .map(|(name, date, status)| PreviousUpload {
        name: name.to_string(),
        date: date.to_string(),
        status,
    })
    .collect()
}
