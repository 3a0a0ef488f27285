//! Launcher generation (build mode).
//!
//! The [`Builder`] turns a shortcut descriptor into a launcher:
//!
//! 1. Maps the descriptor extension to an artifact name and kind
//! 2. Loads the descriptor fields
//! 3. Either recompiles this crate with the fields injected, or writes a
//!    shell script running the descriptor command
//! 4. Returns a [`GeneratedArtifact`] with size and checksum
//!
//! # Module Organization
//!
//! - [`artifact`] - Output naming and artifact records
//! - [`checksum`] - SHA-256 of generated artifacts
//! - [`codegen`] - Values injected into recompiled launchers
//! - [`orchestrator`] - The [`Builder`] itself
//! - [`resource`] - Transient icon resource script
//! - [`script`] - Shell script launchers
//! - [`tool_detection`] - Toolchain discovery

pub mod artifact;
pub mod checksum;
pub mod codegen;
pub mod orchestrator;
pub mod resource;
pub mod script;
pub mod tool_detection;

pub use artifact::{ArtifactKind, ArtifactPlan, GeneratedArtifact};
pub use orchestrator::Builder;
pub use tool_detection::Toolchain;
