//! Ordered field checks for retirement comparison.
//!
//! Each check is a named predicate over the (design, reference) retirement
//! pair; the verifier walks the table in order and the first mismatch wins.
//! Every predicate guards its own applicability, so each one is also correct
//! when called standalone, which keeps the first-failure-wins contract
//! auditable and independently testable per field.

use crate::dut::WritebackProbe;
use crate::reference::Retirement;

/// One named comparison predicate; returns `true` on mismatch.
pub struct FieldCheck {
    /// Tag reported in the failure verdict (e.g. `"pc"`).
    pub name: &'static str,
    /// Mismatch predicate over design and reference retirements.
    pub mismatch: fn(&WritebackProbe, &Retirement) -> bool,
}

/// Program counters must match exactly.
pub fn pc_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    reference.pc != dut.pc
}

/// Both sides must agree on whether an exception was raised at all.
pub fn exception_presence_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    dut.expt != reference.has_exception()
}

/// When either side faults, the exception kinds must be equal.
pub fn exception_kind_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    (dut.expt || reference.has_exception()) && reference.etype != dut.cause
}

/// Register-file write enables must match.
pub fn rf_wen_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    reference.rf_wen != dut.rf_wen
}

/// When write-enable is set, destination register indices must match.
pub fn rf_widx_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    reference.rf_wen && reference.rf_widx != dut.rf_widx
}

/// When the destination index is nonzero, the written values must match.
///
/// Index 0 is the architectural zero register and is exempt from value
/// comparison unconditionally. The check does not apply when the index
/// comparison itself already failed.
pub fn rf_wdata_mismatch(dut: &WritebackProbe, reference: &Retirement) -> bool {
    !rf_widx_mismatch(dut, reference)
        && reference.rf_widx != 0
        && reference.rf_wdata != dut.rf_wdata
}

/// The comparison table, in evaluation order.
pub const FIELD_CHECKS: [FieldCheck; 6] = [
    FieldCheck {
        name: "pc",
        mismatch: pc_mismatch,
    },
    FieldCheck {
        name: "exception-presence",
        mismatch: exception_presence_mismatch,
    },
    FieldCheck {
        name: "exception-kind",
        mismatch: exception_kind_mismatch,
    },
    FieldCheck {
        name: "rf_wen",
        mismatch: rf_wen_mismatch,
    },
    FieldCheck {
        name: "rf_widx",
        mismatch: rf_widx_mismatch,
    },
    FieldCheck {
        name: "rf_wdata",
        mismatch: rf_wdata_mismatch,
    },
];
