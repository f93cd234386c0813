//! Run controller.
//!
//! Orchestrates one co-simulation run: reset, the tick/verify loop, terminal
//! condition detection, trace dump on failure, drain, and exit-code
//! derivation. The controller owns the clock driver (and through it the
//! design and the bus responder) and the reference model explicitly; there is
//! no process-wide state, so multiple runners can coexist independently.

use tracing::{error, info};

use crate::bus::BusResponder;
use crate::config::Config;
use crate::driver::ClockDriver;
use crate::dut::Dut;
use crate::error::HarnessError;
use crate::reference::ReferenceModel;
use crate::verify::{Verdict, Verifier};
use crate::wave::WaveRecorder;

/// Exit code reported for a run that ended on a retirement mismatch.
pub const MISMATCH_EXIT_CODE: i32 = 1;

/// Exit code reported for a run that hit the cycle ceiling.
///
/// Distinct from [`MISMATCH_EXIT_CODE`] so a caller can tell "design is
/// wrong" from "design never finished" without parsing logs.
pub const TIMEOUT_EXIT_CODE: i32 = 2;

/// Phase of the run state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Reset held asserted.
    Resetting,
    /// Main tick/verify loop.
    Running,
    /// Post-terminal flush ticks.
    Draining,
    /// Terminal.
    Done,
}

/// Mutually exclusive reason a run stopped. Terminal once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCause {
    /// The design asserted its halt output with the given status.
    Halted(u32),
    /// The verifier flagged a divergence on the named field.
    Mismatched(&'static str),
    /// The cycle ceiling was reached; the run is inconclusive.
    TimedOut,
}

impl TerminalCause {
    /// Derives the process exit status for this cause.
    ///
    /// Halt status 0 is success; a nonzero halt status is passed through as
    /// the failure code. Mismatch and timeout map to fixed distinct codes
    /// independent of any status value.
    pub fn exit_code(&self) -> i32 {
        match *self {
            TerminalCause::Halted(status) => status as i32,
            TerminalCause::Mismatched(_) => MISMATCH_EXIT_CODE,
            TerminalCause::TimedOut => TIMEOUT_EXIT_CODE,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Cycle count at the terminal decision (drain cycles excluded).
    pub cycles: u64,
    /// Why the run stopped.
    pub cause: TerminalCause,
    /// Derived process exit status.
    pub exit_code: i32,
}

/// Owns one co-simulation instance and drives it to completion.
pub struct Runner<D: Dut, R: ReferenceModel> {
    driver: ClockDriver<D>,
    reference: R,
    verifier: Verifier,
    phase: RunPhase,
    timeout_cycles: u64,
    reset_cycles: u32,
    drain_cycles: u32,
}

impl<D: Dut, R: ReferenceModel> Runner<D, R> {
    /// Creates a runner around a design and reference model.
    ///
    /// The bus responder and its memory image are built from `config`.
    pub fn new(dut: D, reference: R, config: &Config) -> Self {
        let responder = BusResponder::new(&config.memory);
        Self {
            driver: ClockDriver::new(dut, responder),
            reference,
            verifier: Verifier::new(),
            phase: RunPhase::Resetting,
            timeout_cycles: config.run.timeout_cycles,
            reset_cycles: config.run.reset_cycles,
            drain_cycles: config.run.drain_cycles,
        }
    }

    /// Loads the binary image into the bus memory and the reference model.
    ///
    /// Must happen before [`run`]; the image lands at the memory base.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ImageTooLarge`] when the image does not fit.
    ///
    /// [`run`]: Runner::run
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), HarnessError> {
        self.driver
            .responder_mut()
            .memory_mut()
            .load_at(0, image)?;
        self.reference.load_binary(image);
        Ok(())
    }

    /// Attaches a signal recorder to the clock driver.
    pub fn set_recorder(&mut self, recorder: Box<dyn WaveRecorder>) {
        self.driver.set_recorder(recorder);
    }

    /// Returns the current run phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Returns the accumulated comparison trace, oldest first.
    pub fn trace(&self) -> &[String] {
        self.verifier.log()
    }

    /// Borrows the clock driver (and through it the design and responder).
    pub fn driver(&self) -> &ClockDriver<D> {
        &self.driver
    }

    /// Mutably borrows the clock driver.
    pub fn driver_mut(&mut self) -> &mut ClockDriver<D> {
        &mut self.driver
    }

    /// Drives the run to completion and returns its summary.
    ///
    /// Holds reset for the configured cycles, then ticks and verifies until
    /// the design halts, the verifier fails, or the cycle ceiling is reached;
    /// in that priority order, checked once per cycle. On a mismatch the full
    /// trace log is dumped before the loop exits. A fixed number of drain
    /// cycles runs after any terminal condition.
    ///
    /// # Errors
    ///
    /// Propagates fatal configuration errors (out-of-range bus access).
    pub fn run(&mut self) -> Result<RunSummary, HarnessError> {
        self.phase = RunPhase::Resetting;
        self.driver.set_reset(true);
        for _ in 0..self.reset_cycles {
            self.driver.tick()?;
        }
        self.driver.set_reset(false);
        info!(reset_cycles = self.reset_cycles, "reset released");

        self.phase = RunPhase::Running;
        let cause = loop {
            self.driver.tick()?;

            let probe = self.driver.dut().writeback();
            if let Verdict::Fail(reason) = self.verifier.compare(&probe, &mut self.reference) {
                self.dump_trace();
                break TerminalCause::Mismatched(reason);
            }

            if let Some(status) = self.driver.dut().halt() {
                break TerminalCause::Halted(status);
            }

            if self.driver.cycle() >= self.timeout_cycles {
                break TerminalCause::TimedOut;
            }
        };
        let cycles = self.driver.cycle();

        self.phase = RunPhase::Draining;
        for _ in 0..self.drain_cycles {
            self.driver.tick()?;
        }
        self.driver.finish_recording();
        self.phase = RunPhase::Done;

        match cause {
            TerminalCause::Halted(status) => {
                info!(cycles, status, "simulation completed");
            }
            TerminalCause::Mismatched(reason) => {
                error!(cycles, reason, "retirement mismatch detected");
            }
            TerminalCause::TimedOut => {
                error!(cycles, "simulation terminated by timeout");
            }
        }

        Ok(RunSummary {
            cycles,
            cause,
            exit_code: cause.exit_code(),
        })
    }

    /// Prints every accumulated trace line with its sequence index.
    fn dump_trace(&self) {
        for (index, line) in self.verifier.log().iter().enumerate() {
            println!("index={}; {}", index, line);
        }
    }
}
