//! Reference instruction-set model boundary.
//!
//! The reference model is an opaque, deterministic ISA interpreter. The
//! harness steps it exactly once per observed design retirement (lock-step by
//! instruction count, not by cycle count) and reads back the retirement it
//! produced. Decode and execution internals are out of scope.

/// Exception code meaning "no exception" in a [`Retirement`].
pub const EXC_NONE: u32 = 0;

/// One committed instruction as reported by the reference model.
///
/// Ephemeral: it exists for the duration of one comparison, after which only
/// the serialized trace line is retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Retirement {
    /// Program counter of the retired instruction.
    pub pc: u32,
    /// Exception kind, [`EXC_NONE`] when the instruction did not fault.
    pub etype: u32,
    /// Register-file write enable.
    pub rf_wen: bool,
    /// Destination register index.
    pub rf_widx: u8,
    /// Value written to the destination register.
    pub rf_wdata: u32,
}

impl Retirement {
    /// Returns `true` when the retirement raised an exception.
    pub fn has_exception(&self) -> bool {
        self.etype != EXC_NONE
    }
}

/// Opaque reference model: load an image, step one instruction, report it.
pub trait ReferenceModel {
    /// Loads the flat binary image before cycle 0.
    fn load_binary(&mut self, image: &[u8]);

    /// Advances the model by exactly one instruction.
    fn execute(&mut self);

    /// Reports the retirement produced by the most recent [`execute`] call.
    ///
    /// [`execute`]: ReferenceModel::execute
    fn trace_info(&self) -> Retirement;
}
