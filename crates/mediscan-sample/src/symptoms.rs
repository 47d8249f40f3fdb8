//! Symptom-check payloads.
//!
//! `analysis_result` is returned unconditionally: the symptom text is never
//! inspected.

use mediscan_contracts::{
    analysis::{ConditionMatch, RiskLevel, SymptomReport},
    overview::RecentAnalysis,
};

/// Text produced by the simulated voice capture.
pub const VOICE_TRANSCRIPT: &str =
    "I have been experiencing headache, mild fever, and runny nose for the past 2 days";

fn condition(name: &str, probability: u8, risk: RiskLevel, description: &str) -> ConditionMatch {
    ConditionMatch {
        condition: name.to_string(),
        probability,
        risk,
        description: description.to_string(),
    }
}

/// The three-condition result revealed when a symptom analysis completes.
pub fn analysis_result() -> SymptomReport {
    SymptomReport {
        conditions: vec![
            condition(
                "Common Cold",
                78,
                RiskLevel::Low,
                "A viral infection affecting the upper respiratory tract",
            ),
            condition(
                "Seasonal Allergies",
                65,
                RiskLevel::Low,
                "Allergic reaction to environmental allergens",
            ),
            condition(
                "Viral Fever",
                42,
                RiskLevel::Medium,
                "Fever caused by viral infection",
            ),
        ],
        recommendations: vec![
            "Get adequate rest and stay hydrated".to_string(),
            "Monitor your temperature regularly".to_string(),
            "If symptoms persist for more than 3 days, consult a healthcare provider".to_string(),
        ],
    }
}

/// Tips shown beside the symptom form.
pub fn tips() -> Vec<&'static str> {
    vec![
        "Include when symptoms started",
        "Mention symptom severity (mild, moderate, severe)",
        "List all symptoms you're experiencing",
        "Include any relevant medical history",
    ]
}

pub fn recent_analyses() -> Vec<RecentAnalysis> {
    [
        ("Oct 18, 2025", "Headache & Fatigue", RiskLevel::Low),
        ("Oct 10, 2025", "Stomach Pain", RiskLevel::Medium),
        ("Oct 02, 2025", "Joint Pain", RiskLevel::Low),
    ]
    .into_iter()
    .map(|(date, condition, risk)| RecentAnalysis {
        date: date.to_string(),
        condition: condition.to_string(),
        risk,
    })
    .collect()
}

pub const DISCLAIMER: &str = "This AI analysis is for informational purposes only and should not \
replace professional medical advice. Always consult with a qualified healthcare provider.";
