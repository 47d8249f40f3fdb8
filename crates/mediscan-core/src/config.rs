//! Runtime configuration.
//!
//! `MediscanConfig` is read from an optional TOML file. Every key has a
//! default, so an empty document (or no file at all) yields the stock delays
//! and layout threshold:
//!
//! ```toml
//! [timing]
//! symptom_analysis_ms = 2000
//! report_analysis_ms = 2500
//! chat_reply_ms = 2000
//! voice_capture_ms = 3000
//!
//! [layout]
//! sidebar_min_width_px = 700
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use mediscan_contracts::error::{MediscanError, MediscanResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediscanConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Fixed latencies of the simulated work, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_symptom_analysis_ms")]
    pub symptom_analysis_ms: u64,

    #[serde(default = "default_report_analysis_ms")]
    pub report_analysis_ms: u64,

    #[serde(default = "default_chat_reply_ms")]
    pub chat_reply_ms: u64,

    #[serde(default = "default_voice_capture_ms")]
    pub voice_capture_ms: u64,
}

fn default_symptom_analysis_ms() -> u64 {
    2000
}

fn default_report_analysis_ms() -> u64 {
    2500
}

fn default_chat_reply_ms() -> u64 {
    2000
}

fn default_voice_capture_ms() -> u64 {
    3000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            symptom_analysis_ms: default_symptom_analysis_ms(),
            report_analysis_ms: default_report_analysis_ms(),
            chat_reply_ms: default_chat_reply_ms(),
            voice_capture_ms: default_voice_capture_ms(),
        }
    }
}

impl TimingConfig {
    pub fn symptom_analysis(&self) -> Duration {
        Duration::from_millis(self.symptom_analysis_ms)
    }

    pub fn report_analysis(&self) -> Duration {
        Duration::from_millis(self.report_analysis_ms)
    }

    pub fn chat_reply(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }

    pub fn voice_capture(&self) -> Duration {
        Duration::from_millis(self.voice_capture_ms)
    }

    /// The longest configured delay.
    pub fn longest(&self) -> Duration {
        [
            self.symptom_analysis(),
            self.report_analysis(),
            self.chat_reply(),
            self.voice_capture(),
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewports at least this wide get the persistent sidebar.
    #[serde(default = "default_sidebar_min_width_px")]
    pub sidebar_min_width_px: u32,
}

fn default_sidebar_min_width_px() -> u32 {
    700
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_min_width_px: default_sidebar_min_width_px(),
        }
    }
}

impl MediscanConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `MediscanError::ConfigError` if the document is malformed or a
    /// key has the wrong type.
    pub fn from_toml_str(s: &str) -> MediscanResult<Self> {
        toml::from_str(s).map_err(|e| MediscanError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> MediscanResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MediscanError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> MediscanResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_delays() {
        let config = MediscanConfig::default();
        assert_eq!(config.timing.symptom_analysis(), Duration::from_millis(2000));
        assert_eq!(config.timing.report_analysis(), Duration::from_millis(2500));
        assert_eq!(config.timing.chat_reply(), Duration::from_millis(2000));
        assert_eq!(config.timing.voice_capture(), Duration::from_millis(3000));
        assert_eq!(config.timing.longest(), Duration::from_millis(3000));
        assert_eq!(config.layout.sidebar_min_width_px, 700);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = MediscanConfig::from_toml_str("").unwrap();
        assert_eq!(config, MediscanConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = MediscanConfig::from_toml_str(
            r#"
[timing]
chat_reply_ms = 50

[layout]
sidebar_min_width_px = 1024
"#,
        )
        .unwrap();

        assert_eq!(config.timing.chat_reply_ms, 50);
        assert_eq!(config.timing.symptom_analysis_ms, 2000);
        assert_eq!(config.timing.report_analysis_ms, 2500);
        assert_eq!(config.layout.sidebar_min_width_px, 1024);
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let err = MediscanConfig::from_toml_str("[timing]\nchat_reply_ms = \"soon\"\n").unwrap_err();
        assert!(matches!(err, MediscanError::ConfigError { .. }));
        assert!(err.to_string().contains("failed to parse config TOML"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = MediscanConfig::from_file(Path::new("/nonexistent/mediscan.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mediscan.toml"));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(MediscanConfig::load(None).unwrap(), MediscanConfig::default());
    }
}
