//! Handshake-based bus memory responder and its wire bundles.

/// Clocked responder state machine serving the memory image.
pub mod responder;
/// Per-cycle request/response signal bundles.
pub mod signals;

pub use responder::BusResponder;
pub use signals::{BusRequest, BusResponse};
