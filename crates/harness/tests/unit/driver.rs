//! Clock driver tests.
//!
//! Each tick is one full clock cycle: a settle with the clock high, a bus
//! exchange, and a settle with the clock low. Responses therefore become
//! visible to the design one cycle after the request that caused them.

use std::cell::RefCell;
use std::rc::Rc;

use cosim_core::driver::ClockDriver;
use cosim_core::error::HarnessError;
use cosim_core::wave::{BufferRecorder, SignalState, WaveRecorder};
use pretty_assertions::assert_eq;

use crate::common::mocks::dut::ScriptedDut;
use crate::unit::bus::{read_request, responder};

fn driver(dut: ScriptedDut) -> ClockDriver<ScriptedDut> {
    ClockDriver::new(dut, responder(4096))
}

/// Recorder that mirrors its samples into a shared buffer the test keeps.
#[derive(Clone, Default)]
struct SharedRecorder {
    samples: Rc<RefCell<Vec<(u64, bool)>>>,
    finished: Rc<RefCell<bool>>,
}

impl WaveRecorder for SharedRecorder {
    fn sample(&mut self, time: u64, state: &SignalState) {
        self.samples.borrow_mut().push((time, state.clock));
    }

    fn finish(&mut self) {
        *self.finished.borrow_mut() = true;
    }
}

#[test]
fn tick_advances_one_cycle_with_two_settles() {
    let mut driver = driver(ScriptedDut::new());
    for _ in 0..3 {
        driver.tick().unwrap();
    }
    assert_eq!(driver.cycle(), 3);
    assert_eq!(driver.dut().eval_count, 6);
}

#[test]
fn reset_holds_the_design_while_cycles_still_count() {
    let mut driver = driver(ScriptedDut::new());
    driver.set_reset(true);
    for _ in 0..5 {
        driver.tick().unwrap();
    }
    assert_eq!(driver.dut().cycles_seen(), 0);

    driver.set_reset(false);
    driver.tick().unwrap();
    driver.tick().unwrap();
    assert_eq!(driver.dut().cycles_seen(), 2);
    assert_eq!(driver.cycle(), 7);
}

#[test]
fn response_reaches_the_design_one_cycle_after_the_request() {
    let dut = ScriptedDut::new().request_at(1, read_request(0x100, 1, 3, 0));
    let mut driver = driver(dut);
    driver
        .responder_mut()
        .memory_mut()
        .load_at(0x100, &0xAAAA_5555_AAAA_5555_u64.to_le_bytes())
        .unwrap();

    driver.tick().unwrap();
    assert!(driver.dut().responses.is_empty());

    driver.tick().unwrap();
    assert_eq!(driver.dut().responses.len(), 1);
    assert!(driver.dut().responses[0].r_valid);
    assert!(driver.dut().responses[0].r_last);
    assert_eq!(driver.dut().responses[0].r_data, 0xAAAA_5555_AAAA_5555);

    driver.tick().unwrap();
    assert_eq!(driver.dut().responses.len(), 1);
}

#[test]
fn fatal_bus_error_propagates_from_tick() {
    let dut = ScriptedDut::new().request_at(1, read_request(4096, 0, 3, 0));
    let mut driver = driver(dut);
    let err = driver.tick().unwrap_err();
    assert!(matches!(err, HarnessError::OutOfRange { .. }));
}

#[test]
fn recorder_samples_both_phases_of_every_cycle() {
    let recorder = SharedRecorder::default();
    let mut driver = driver(ScriptedDut::new());
    driver.set_recorder(Box::new(recorder.clone()));

    driver.tick().unwrap();
    driver.tick().unwrap();
    driver.finish_recording();

    assert_eq!(
        *recorder.samples.borrow(),
        vec![(0, true), (1, false), (2, true), (3, false)]
    );
    assert!(*recorder.finished.borrow());
}

#[test]
fn buffer_recorder_keeps_samples_in_order() {
    let mut recorder = BufferRecorder::new();
    recorder.sample(0, &SignalState::default());
    recorder.sample(1, &SignalState::default());
    assert_eq!(recorder.samples().len(), 2);
    assert_eq!(recorder.samples()[0].0, 0);
    assert_eq!(recorder.samples()[1].0, 1);
}
