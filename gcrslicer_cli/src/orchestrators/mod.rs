//! Command orchestrators
//!
//! Orchestrators coordinate between the CLI layer and the core resolver.

pub mod resolve_orchestrator;

pub use resolve_orchestrator::{ResolveOrchestrator, RunOptions, RunSummary};
