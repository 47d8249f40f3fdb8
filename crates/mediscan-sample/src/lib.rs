//! # mediscan-sample
//!
//! Sample data for the MediScan health assistant.
//!
//! Every record shown by the views lives here: the overview dashboard, the
//! constant analysis payloads, the seed chat transcript, and the settings
//! defaults. All of it is hardcoded and fictional. Nothing is derived from
//! user input and no external system is contacted.

pub mod chat;
pub mod overview;
pub mod reports;
pub mod settings;
pub mod symptoms;
