//! Testing infrastructure for agdeck integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI invocation
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: deterministic sessions and activity samples

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
