//! Design-under-test boundary.
//!
//! The simulated hardware is an opaque clocked black box. The harness only
//! needs to toggle its clock and reset, let it settle, exchange bus signals,
//! and observe its writeback and halt outputs; everything else about the
//! design is out of scope. Implementors typically wrap a generated RTL model.

use crate::bus::{BusRequest, BusResponse};

/// Design-side retirement signals sampled from the writeback stage each cycle.
///
/// `valid && !busy` marks a committed retirement; any other combination is a
/// pipeline bubble and is skipped by the verifier. Only the remaining fields
/// take part in comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritebackProbe {
    /// A retirement is visible this cycle.
    pub valid: bool,
    /// The visible retirement has not committed yet.
    pub busy: bool,
    /// Program counter of the retired instruction.
    pub pc: u32,
    /// Raw instruction word (trace only, not compared).
    pub inst: u32,
    /// The retirement raised an exception.
    pub expt: bool,
    /// Exception cause code, meaningful when `expt` is set.
    pub cause: u32,
    /// Register-file write enable.
    pub rf_wen: bool,
    /// Destination register index.
    pub rf_widx: u8,
    /// Value written to the destination register.
    pub rf_wdata: u32,
}

/// Clocked black-box interface to the simulated design.
///
/// The clock driver calls these in a fixed per-cycle order: `set_clock(true)`,
/// `eval`, bus exchange, `set_clock(false)`, `eval`. Signal reads between the
/// two settles observe the post-rising-edge state.
pub trait Dut {
    /// Drives the clock input high or low. Does not evaluate.
    fn set_clock(&mut self, level: bool);

    /// Drives the reset input.
    fn set_reset(&mut self, asserted: bool);

    /// Lets the design settle at the current input levels.
    fn eval(&mut self);

    /// Samples the outgoing bus request signals.
    fn bus_request(&self) -> BusRequest;

    /// Drives the incoming bus response signals.
    fn apply_bus(&mut self, resp: &BusResponse);

    /// Returns `Some(status)` while the design asserts its halt output.
    ///
    /// Status 0 is a successful run; nonzero is the design's failure code.
    fn halt(&self) -> Option<u32>;

    /// Samples the writeback-stage retirement signals.
    fn writeback(&self) -> WritebackProbe;
}
