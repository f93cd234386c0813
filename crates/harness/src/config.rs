//! Configuration system for the co-simulation harness.
//!
//! This module defines all configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (memory size, bus width, run-loop cycle counts).
//! 2. **Structures:** Hierarchical config for the run loop and the bus memory.
//! 3. **Ingestion:** `serde` deserialization from JSON blobs, or `Config::default()`.

use serde::Deserialize;

use crate::error::HarnessError;

/// Default configuration constants for the harness.
///
/// These values apply whenever a field is not explicitly overridden.
mod defaults {
    /// Memory image capacity (128 MiB).
    ///
    /// Accepted bus transactions beyond `MEM_BASE + MEM_SIZE` abort the run.
    pub const MEM_SIZE: usize = 128 * 1024 * 1024;

    /// Base address of the memory image.
    ///
    /// The binary image is loaded here before cycle 0, and bus addresses are
    /// interpreted relative to this base.
    pub const MEM_BASE: u64 = 0;

    /// Bus data width in bytes (8 bytes = 64-bit data channel).
    ///
    /// Upper bound on the bytes moved by one read or write beat.
    pub const BUS_WIDTH: u64 = 8;

    /// Cycle ceiling after which a run is terminated as inconclusive.
    pub const TIMEOUT_CYCLES: u64 = 100_000;

    /// Cycles the design's reset input is held asserted before the run loop.
    pub const RESET_CYCLES: u32 = 5;

    /// Extra cycles ticked after the terminal condition, to flush in-flight
    /// side effects such as pending bus responses. Safety margin only.
    pub const DRAIN_CYCLES: u32 = 10;
}

/// Root configuration structure for a co-simulation run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cosim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.run.timeout_cycles, 100_000);
/// assert_eq!(config.memory.size, 128 * 1024 * 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use cosim_core::config::Config;
///
/// let json = r#"{
///     "run": { "timeout_cycles": 5000, "reset_cycles": 5, "drain_cycles": 10 },
///     "memory": { "size": 1048576, "base": 0, "bus_width": 8 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.run.timeout_cycles, 5000);
/// assert_eq!(config.memory.size, 1048576);
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Run-loop settings (reset, drain, timeout).
    #[serde(default)]
    pub run: RunConfig,
    /// Bus memory settings (capacity, base address, beat width).
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when the blob is not valid JSON or
    /// does not match the configuration schema.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Run-loop configuration: reset length, drain length, and the cycle ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Cycle ceiling; reaching it terminates the run with a timeout cause.
    #[serde(default = "RunConfig::default_timeout")]
    pub timeout_cycles: u64,

    /// Cycles to hold reset asserted before the verify loop starts.
    #[serde(default = "RunConfig::default_reset")]
    pub reset_cycles: u32,

    /// Cycles to keep ticking after the terminal condition.
    #[serde(default = "RunConfig::default_drain")]
    pub drain_cycles: u32,
}

impl RunConfig {
    /// Returns the default cycle ceiling.
    fn default_timeout() -> u64 {
        defaults::TIMEOUT_CYCLES
    }

    /// Returns the default reset hold length in cycles.
    fn default_reset() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Returns the default drain length in cycles.
    fn default_drain() -> u32 {
        defaults::DRAIN_CYCLES
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_cycles: defaults::TIMEOUT_CYCLES,
            reset_cycles: defaults::RESET_CYCLES,
            drain_cycles: defaults::DRAIN_CYCLES,
        }
    }
}

/// Bus memory configuration: capacity, base address, and data beat width.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Memory image capacity in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Base address of the memory image on the bus.
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u64,

    /// Bus data width in bytes (maximum bytes per beat).
    #[serde(default = "MemoryConfig::default_bus_width")]
    pub bus_width: u64,
}

impl MemoryConfig {
    /// Returns the default memory capacity in bytes.
    fn default_size() -> usize {
        defaults::MEM_SIZE
    }

    /// Returns the default memory base address.
    fn default_base() -> u64 {
        defaults::MEM_BASE
    }

    /// Returns the default bus data width in bytes.
    fn default_bus_width() -> u64 {
        defaults::BUS_WIDTH
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEM_SIZE,
            base: defaults::MEM_BASE,
            bus_width: defaults::BUS_WIDTH,
        }
    }
}
