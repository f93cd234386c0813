//! Retirement verifier.
//!
//! Cross-checks each committed design retirement against the reference model,
//! field by field, accumulating a human-readable trace log for post-mortem
//! diagnosis. The verifier only produces verdicts; terminating the run is the
//! run controller's decision.

/// Ordered, named field-comparison predicates.
pub mod checks;

use crate::dut::WritebackProbe;
use crate::reference::{ReferenceModel, Retirement};

/// Outcome of one comparison cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Records matched, or no retirement was visible this cycle.
    Pass,
    /// First mismatching field, by check name.
    Fail(&'static str),
}

/// Lock-step retirement comparator with an append-only trace log.
#[derive(Debug, Default)]
pub struct Verifier {
    log: Vec<String>,
}

impl Verifier {
    /// Creates a verifier with an empty trace log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares the design's current retirement against the reference model.
    ///
    /// When the design does not report a visible, non-busy retirement this is
    /// a pipeline bubble: the reference is not stepped and the verdict is
    /// `Pass` without comparison. Otherwise the reference advances exactly one
    /// instruction, a trace line recording both records is appended
    /// regardless of the outcome, and the ordered field checks run with a
    /// first-mismatch-wins policy.
    pub fn compare<R: ReferenceModel + ?Sized>(
        &mut self,
        probe: &WritebackProbe,
        reference: &mut R,
    ) -> Verdict {
        if !probe.valid || probe.busy {
            return Verdict::Pass;
        }

        reference.execute();
        let expected = reference.trace_info();

        self.log.push(trace_line(probe, &expected));

        for check in &checks::FIELD_CHECKS {
            if (check.mismatch)(probe, &expected) {
                return Verdict::Fail(check.name);
            }
        }
        Verdict::Pass
    }

    /// Returns the accumulated trace lines, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

/// Formats one comparison as a single trace line with both records in full.
fn trace_line(probe: &WritebackProbe, expected: &Retirement) -> String {
    format!(
        "[ref] pc={:#x}, etype={:#x}, rf_wen={}, rf_widx={}, rf_wdata={:#x}; \
         [dut] valid={}, busy={}, pc={:#x}, inst={:#x}, etype={:#x}, \
         rf_wen={}, rf_widx={}, rf_wdata={:#x}",
        expected.pc,
        expected.etype,
        u8::from(expected.rf_wen),
        expected.rf_widx,
        expected.rf_wdata,
        u8::from(probe.valid),
        u8::from(probe.busy),
        probe.pc,
        probe.inst,
        probe.cause,
        u8::from(probe.rf_wen),
        probe.rf_widx,
        probe.rf_wdata,
    )
}
