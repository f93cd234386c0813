//! Optional per-cycle signal recording.
//!
//! The clock driver can snapshot the post-settle signal state at both clock
//! phases and hand it to a recorder for offline inspection. Recording is not
//! required for correctness; file formats (VCD and friends) live behind this
//! trait, outside the harness.

use crate::bus::{BusRequest, BusResponse};
use crate::dut::WritebackProbe;

/// Post-settle signal snapshot taken at one clock phase.
#[derive(Debug, Clone, Default)]
pub struct SignalState {
    /// Clock level during this phase.
    pub clock: bool,
    /// Reset level during this phase.
    pub reset: bool,
    /// Design's outgoing bus request lines.
    pub request: BusRequest,
    /// Responder's outgoing response lines.
    pub response: BusResponse,
    /// Design's writeback-stage signals.
    pub writeback: WritebackProbe,
}

/// Sink for per-phase signal snapshots.
pub trait WaveRecorder {
    /// Records one snapshot at the given half-cycle timestamp.
    fn sample(&mut self, time: u64, state: &SignalState);

    /// Flushes any buffered output at end of run.
    fn finish(&mut self) {}
}

/// In-memory recorder; keeps every sample for later inspection.
#[derive(Debug, Default)]
pub struct BufferRecorder {
    samples: Vec<(u64, SignalState)>,
}

impl BufferRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded samples, oldest first.
    pub fn samples(&self) -> &[(u64, SignalState)] {
        &self.samples
    }
}

impl WaveRecorder for BufferRecorder {
    fn sample(&mut self, time: u64, state: &SignalState) {
        self.samples.push((time, state.clone()));
    }
}
