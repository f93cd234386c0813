//! Lock-step co-simulation harness library.
//!
//! This crate implements a cycle-driven verification harness for a simulated
//! processor design with the following:
//! 1. **Bus:** A handshake-based memory responder serving burst reads and
//!    strobed writes over a five-channel valid/ready protocol.
//! 2. **Driver:** A two-phase clock driver that advances the design and wires
//!    its bus signals to the responder each cycle.
//! 3. **Verify:** A lock-step retirement comparator against an opaque
//!    reference instruction-set model, with an append-only trace log.
//! 4. **Runner:** A reset/run/drain state machine with halt, mismatch, and
//!    timeout terminal causes and stable exit-code derivation.
//!
//! The design and the reference model are consumed through the [`dut::Dut`]
//! and [`reference::ReferenceModel`] traits; their internals are out of scope.

/// Handshake bus responder and wire bundles.
pub mod bus;
/// Run configuration (defaults, JSON ingestion).
pub mod config;
/// Two-phase clock driver and bus wiring.
pub mod driver;
/// Design-under-test boundary trait and writeback probe.
pub mod dut;
/// Fatal error definitions.
pub mod error;
/// Flat binary image loading.
pub mod loader;
/// Memory image behind the responder.
pub mod memory;
/// Reference model boundary trait and retirement record.
pub mod reference;
/// Run controller state machine.
pub mod runner;
/// Retirement verifier and field checks.
pub mod verify;
/// Optional per-cycle signal recording.
pub mod wave;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Fatal harness error type.
pub use crate::error::HarnessError;
/// Top-level run controller; owns the design, responder, and reference model.
pub use crate::runner::{RunSummary, Runner, TerminalCause};
/// Per-comparison verdict returned by the verifier.
pub use crate::verify::Verdict;
