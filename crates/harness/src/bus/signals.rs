//! Bus wire bundles exchanged with the design each cycle.
//!
//! The bus is a five-channel, valid/ready handshake protocol: read address
//! (`ar`), write address (`aw`), write data (`w`), read data (`r`), and write
//! acknowledge (`b`). A transfer on a channel is accepted only in a cycle
//! where both the valid and the ready side assert simultaneously.
//!
//! Address channels carry a transfer id, a beat size (`log2` of the bytes per
//! beat), and a burst length encoded as beats minus one. A burst shares one
//! address-phase transaction and is delivered as consecutive single-beat
//! responses, the final one flagged with `last`.

/// Request-side signals sampled from the design once per cycle.
///
/// Also carries the design's ready lines for the two response channels, since
/// response-beat consumption is itself a handshake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusRequest {
    /// Read address valid.
    pub ar_valid: bool,
    /// Read address (first beat).
    pub ar_addr: u64,
    /// Read transfer id.
    pub ar_id: u16,
    /// Read beat size, log2 of bytes per beat.
    pub ar_size: u8,
    /// Read burst length, beats minus one.
    pub ar_len: u8,

    /// Write address valid.
    pub aw_valid: bool,
    /// Write address (first beat).
    pub aw_addr: u64,
    /// Write transfer id.
    pub aw_id: u16,
    /// Write beat size, log2 of bytes per beat.
    pub aw_size: u8,
    /// Write burst length, beats minus one.
    pub aw_len: u8,

    /// Write data valid.
    pub w_valid: bool,
    /// Write data beat, low `2^size` bytes significant.
    pub w_data: u64,
    /// Byte strobe: bit `i` enables byte `i` of the beat.
    pub w_strb: u8,
    /// Set on the final data beat of a write burst.
    pub w_last: bool,

    /// Design is ready to accept a read data beat this cycle.
    pub r_ready: bool,
    /// Design is ready to accept a write acknowledge this cycle.
    pub b_ready: bool,
}

/// Response-side signals driven back into the design once per cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusResponse {
    /// Responder accepts a read address this cycle.
    pub ar_ready: bool,
    /// Responder accepts a write address this cycle.
    pub aw_ready: bool,
    /// Responder accepts a write data beat this cycle.
    pub w_ready: bool,

    /// Read data beat valid.
    pub r_valid: bool,
    /// Transfer id of the read beat.
    pub r_id: u16,
    /// Read data beat.
    pub r_data: u64,
    /// Set on the final beat of a read burst.
    pub r_last: bool,
    /// Read status code (0 = okay).
    pub r_resp: u8,

    /// Write acknowledge valid.
    pub b_valid: bool,
    /// Transfer id of the acknowledged write.
    pub b_id: u16,
    /// Write status code (0 = okay).
    pub b_resp: u8,
}

impl BusRequest {
    /// Total bytes covered by the read burst: `beats * beat_bytes`.
    pub fn ar_bytes(&self) -> u64 {
        (u64::from(self.ar_len) + 1) << self.ar_size
    }

    /// Total bytes covered by the write burst: `beats * beat_bytes`.
    pub fn aw_bytes(&self) -> u64 {
        (u64::from(self.aw_len) + 1) << self.aw_size
    }
}
