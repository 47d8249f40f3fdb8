//! # mediscan-contracts
//!
//! Shared types and error definitions for the MediScan health assistant.
//!
//! All crates in the workspace import from here. No interaction logic lives in
//! this crate, only data definitions and the error type.

pub mod analysis;
pub mod chat;
pub mod error;
pub mod overview;
pub mod page;
