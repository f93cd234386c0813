//! Configuration tests.

use cosim_core::config::Config;
use cosim_core::error::HarnessError;
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_the_fixed_testbench_parameters() {
    let config = Config::default();
    assert_eq!(config.run.timeout_cycles, 100_000);
    assert_eq!(config.run.reset_cycles, 5);
    assert_eq!(config.run.drain_cycles, 10);
    assert_eq!(config.memory.size, 128 * 1024 * 1024);
    assert_eq!(config.memory.base, 0);
    assert_eq!(config.memory.bus_width, 8);
}

#[test]
fn json_overrides_selected_fields() {
    let config = Config::from_json(
        r#"{
            "run": { "timeout_cycles": 5000 },
            "memory": { "size": 1048576 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.run.timeout_cycles, 5000);
    assert_eq!(config.run.reset_cycles, 5);
    assert_eq!(config.memory.size, 1_048_576);
    assert_eq!(config.memory.bus_width, 8);
}

#[test]
fn empty_object_yields_the_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.run.timeout_cycles, 100_000);
    assert_eq!(config.memory.size, 128 * 1024 * 1024);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = Config::from_json(r#"{ "run": { "timeout_cycles": "soon" } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}
