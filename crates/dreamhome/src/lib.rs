//! Loan calculator and pre-approval service for the DreamHome real-estate portal.

pub mod config;
pub mod error;
pub mod format;
pub mod loans;
pub mod telemetry;
