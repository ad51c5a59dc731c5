//! bootflow Application Orchestration Layer
//!
//! This crate contains the startup use cases and the orchestrator that drives
//! the startup state machine against its ports.

pub mod usecases;

pub use usecases::{StartupError, StartupOrchestrator, StartupOrchestratorDeps};
