//! Test context wrapping a fully wired runner.

use cosim_core::config::Config;
use cosim_core::runner::Runner;

use crate::common::mocks::dut::ScriptedDut;
use crate::common::mocks::reference::ScriptedReference;

/// A runner over scripted components with a small, fast test configuration.
pub struct TestContext {
    pub runner: Runner<ScriptedDut, ScriptedReference>,
}

impl TestContext {
    /// Builds a context with a 64 KiB memory and a 1000-cycle ceiling.
    pub fn new(dut: ScriptedDut, reference: ScriptedReference) -> Self {
        Self::with_config(dut, reference, Self::config())
    }

    /// Builds a context with an explicit configuration.
    pub fn with_config(dut: ScriptedDut, reference: ScriptedReference, config: Config) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            runner: Runner::new(dut, reference, &config),
        }
    }

    /// Small test configuration: full-size memory is pointless here.
    pub fn config() -> Config {
        let mut config = Config::default();
        config.memory.size = 64 * 1024;
        config.run.timeout_cycles = 1000;
        config
    }
}
