//! # bootflow
//!
//! Headless host for the startup orchestrator. It plays the device side
//! (permission prompt, screens, fatal dialog) from configuration so a whole
//! startup sequence can run from the command line.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
