//! Bundle orchestration and coordination.
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and [`BundledArtifact`]

mod checksum;
mod orchestrator;

pub use orchestrator::{BundledArtifact, Bundler};
