//! Testing infrastructure for aroov controller and CLI tests.
//!
//! - `ScriptedGateway`: in-memory backend with queued, gateable responses
//! - `RecordingHost`: host services that record alerts, clipboard and navigation
//! - `fixtures`: sample records, wire payloads and page contexts
//! - `TestWorld`: isolated config directory for running the `aroov` binary

pub mod fixtures;
pub mod gateway;
pub mod host;
pub mod world;

pub use gateway::{Gate, RecordedRequest, ScriptedGateway};
pub use host::RecordingHost;
pub use world::{CliResult, TestWorld};
