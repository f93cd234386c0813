//! Clock driver: advances the design one cycle and wires the bus.
//!
//! A cycle is two phases. The clock is driven high and the design settles;
//! between the two settles the responder's current outputs are written onto
//! the design's response inputs and the design's request outputs are fed to
//! the responder's per-cycle tick; then the clock is driven low and the
//! design settles again. Protocols that sample on a specific edge depend on
//! signals being stable within each phase, so this order is preserved exactly
//! and `tick` is exposed as a single atomic operation.

use crate::bus::BusResponder;
use crate::dut::Dut;
use crate::error::HarnessError;
use crate::wave::{SignalState, WaveRecorder};

/// Owns the design and the bus responder; advances both in lock step.
pub struct ClockDriver<D: Dut> {
    dut: D,
    responder: BusResponder,
    recorder: Option<Box<dyn WaveRecorder>>,
    reset: bool,
    cycle: u64,
    time: u64,
}

impl<D: Dut> ClockDriver<D> {
    /// Creates a driver around a design and responder, with reset deasserted.
    pub fn new(dut: D, responder: BusResponder) -> Self {
        Self {
            dut,
            responder,
            recorder: None,
            reset: false,
            cycle: 0,
            time: 0,
        }
    }

    /// Attaches a signal recorder; snapshots are taken at both clock phases.
    pub fn set_recorder(&mut self, recorder: Box<dyn WaveRecorder>) {
        self.recorder = Some(recorder);
    }

    /// Drives the design's reset input from the next tick onward.
    pub fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
        self.dut.set_reset(asserted);
    }

    /// Number of completed cycles, monotonically increasing.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Borrows the design.
    pub fn dut(&self) -> &D {
        &self.dut
    }

    /// Mutably borrows the design.
    pub fn dut_mut(&mut self) -> &mut D {
        &mut self.dut
    }

    /// Borrows the bus responder.
    pub fn responder(&self) -> &BusResponder {
        &self.responder
    }

    /// Mutably borrows the bus responder.
    pub fn responder_mut(&mut self) -> &mut BusResponder {
        &mut self.responder
    }

    /// Advances the design by exactly one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates a fatal responder error (out-of-range bus access).
    pub fn tick(&mut self) -> Result<(), HarnessError> {
        self.dut.set_clock(true);
        self.dut.eval();
        self.record(true);
        self.time += 1;

        self.dut.apply_bus(self.responder.response());
        let request = self.dut.bus_request();
        self.responder.tick(self.reset, &request)?;

        self.dut.set_clock(false);
        self.dut.eval();
        self.record(false);
        self.time += 1;

        self.cycle += 1;
        Ok(())
    }

    /// Flushes the recorder, if any.
    pub fn finish_recording(&mut self) {
        if let Some(recorder) = &mut self.recorder {
            recorder.finish();
        }
    }

    fn record(&mut self, clock: bool) {
        if self.recorder.is_none() {
            return;
        }
        let state = SignalState {
            clock,
            reset: self.reset,
            request: self.dut.bus_request(),
            response: self.responder.response().clone(),
            writeback: self.dut.writeback(),
        };
        if let Some(recorder) = &mut self.recorder {
            recorder.sample(self.time, &state);
        }
    }
}
