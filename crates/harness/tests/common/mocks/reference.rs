//! Scripted reference-model double.
//!
//! Replays a fixed program of retirements, one per `execute` call, and
//! records how it was driven so tests can assert the lock-step contract.

use cosim_core::reference::{ReferenceModel, Retirement};

/// Deterministic canned reference model.
#[derive(Default)]
pub struct ScriptedReference {
    program: Vec<Retirement>,
    /// Number of `execute` calls so far.
    pub executed: usize,
    /// Bytes received through `load_binary`.
    pub image: Vec<u8>,
}

impl ScriptedReference {
    /// Creates a model that will retire `program` in order.
    pub fn new(program: Vec<Retirement>) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }
}

impl ReferenceModel for ScriptedReference {
    fn load_binary(&mut self, image: &[u8]) {
        self.image = image.to_vec();
    }

    fn execute(&mut self) {
        self.executed += 1;
    }

    fn trace_info(&self) -> Retirement {
        if self.executed == 0 {
            return Retirement::default();
        }
        self.program
            .get(self.executed - 1)
            .copied()
            .unwrap_or_default()
    }
}
