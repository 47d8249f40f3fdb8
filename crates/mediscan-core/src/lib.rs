//! # mediscan-core
//!
//! Headless interaction state for the MediScan health assistant.
//!
//! This crate provides:
//! - `Shell`, the session latch and page selector every view hangs off
//! - the per-view state (`LoginForm`, `SymptomCheck`, `ReportUpload`,
//!   `ChatLog`, `SettingsForm`) and the `Analyzer` state machine two of them share
//! - `Scheduler`, the delayed tasks standing in for network and AI latency
//! - `App`, the context object wiring them together on a `Clock`
//!
//! Nothing here draws anything; the terminal UI and the demo CLI are thin
//! front ends over `App`.

pub mod analyzer;
pub mod app;
pub mod chat;
pub mod config;
pub mod login;
pub mod report;
pub mod scheduler;
pub mod settings;
pub mod shell;
pub mod symptom;
pub mod traits;

pub use app::{App, TimerEvent};
pub use config::MediscanConfig;
