//! Bus memory responder.
//!
//! A registered-output, cycle-driven state machine that serves the design's
//! instruction/data memory over the five-channel handshake bus. It provides:
//! 1. **Acceptance:** Address and data channels are always ready (magic-memory
//!    style), so a transfer is accepted whenever the design asserts valid.
//! 2. **Ordering:** Responses for a given id are emitted in the order their
//!    requests were accepted; read bursts emit beats in increasing address
//!    order with `last` set exactly on the final beat, and bursts from
//!    different requests never interleave.
//! 3. **Write pairing:** Write-address and write-data acceptances are
//!    decoupled and paired strictly in submission order; one acknowledge is
//!    queued per write once all of its beats have arrived.
//!
//! Outputs are registered: a transfer accepted in cycle N is visible on the
//! response lines from cycle N+1, and a presented response beat is held until
//! the design asserts the matching ready.

use std::collections::VecDeque;

use tracing::trace;

use crate::bus::signals::{BusRequest, BusResponse};
use crate::config::MemoryConfig;
use crate::error::HarnessError;
use crate::memory::MemoryImage;

/// An accepted read burst, including its emission cursor.
struct ReadBurst {
    id: u16,
    offset: usize,
    beat_bytes: usize,
    beats: u16,
    next: u16,
}

/// An accepted write-address transaction awaiting data beats.
struct PendingWrite {
    id: u16,
    offset: usize,
    beat_bytes: usize,
    beats: u16,
    received: u16,
}

/// An accepted write-data beat not yet paired with its transaction.
struct WriteBeat {
    data: u64,
    strb: u8,
    last: bool,
}

/// Handshake bus responder backing the design's memory.
pub struct BusResponder {
    mem: MemoryImage,
    bus_width: u64,
    reads: VecDeque<ReadBurst>,
    writes: VecDeque<PendingWrite>,
    write_data: VecDeque<WriteBeat>,
    acks: VecDeque<u16>,
    resp: BusResponse,
}

impl BusResponder {
    /// Creates a responder with a zero-filled memory image per `config`.
    pub fn new(config: &MemoryConfig) -> Self {
        Self::with_memory(MemoryImage::new(config.size, config.base), config.bus_width)
    }

    /// Creates a responder around an existing memory image.
    pub fn with_memory(mem: MemoryImage, bus_width: u64) -> Self {
        Self {
            mem,
            bus_width,
            reads: VecDeque::new(),
            writes: VecDeque::new(),
            write_data: VecDeque::new(),
            acks: VecDeque::new(),
            resp: Self::idle_response(),
        }
    }

    /// Response bundle with all ready lines asserted and no valid outputs.
    fn idle_response() -> BusResponse {
        BusResponse {
            ar_ready: true,
            aw_ready: true,
            w_ready: true,
            ..BusResponse::default()
        }
    }

    /// Returns the response signals computed by the most recent tick.
    pub fn response(&self) -> &BusResponse {
        &self.resp
    }

    /// Returns a shared reference to the backing memory image.
    pub fn memory(&self) -> &MemoryImage {
        &self.mem
    }

    /// Returns a mutable reference to the backing memory image.
    pub fn memory_mut(&mut self) -> &mut MemoryImage {
        &mut self.mem
    }

    /// Advances the responder by one cycle.
    ///
    /// Consumes response beats the design accepted this cycle (its ready
    /// lines against our previously presented valids), accepts new requests,
    /// completes writes whose data is fully present, and computes the
    /// response bundle for the next cycle.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::OutOfRange`] when an accepted address phase
    /// covers bytes beyond the memory image; the run cannot continue.
    pub fn tick(&mut self, reset: bool, req: &BusRequest) -> Result<(), HarnessError> {
        if reset {
            self.reads.clear();
            self.writes.clear();
            self.write_data.clear();
            self.acks.clear();
            self.resp = Self::idle_response();
            return Ok(());
        }

        self.retire_presented(req);
        self.accept(req)?;
        self.complete_writes();
        self.resp = self.next_response();
        Ok(())
    }

    /// Consumes the response beats presented last tick that the design
    /// acknowledged with its ready lines this cycle.
    fn retire_presented(&mut self, req: &BusRequest) {
        if self.resp.r_valid && req.r_ready {
            // A presented read beat implies a front burst; anything else is a
            // responder bug.
            debug_assert!(self.reads.front().is_some());
            let finished = self.reads.front_mut().is_some_and(|burst| {
                burst.next += 1;
                burst.next == burst.beats
            });
            if finished {
                let _ = self.reads.pop_front();
            }
        }

        if self.resp.b_valid && req.b_ready {
            debug_assert!(!self.acks.is_empty());
            let _ = self.acks.pop_front();
        }
    }

    /// Accepts any address or data transfers the design offers this cycle.
    fn accept(&mut self, req: &BusRequest) -> Result<(), HarnessError> {
        if req.ar_valid {
            let offset = self.mem.check_range(req.ar_addr, req.ar_bytes())?;
            debug_assert!(1u64 << req.ar_size <= self.bus_width, "beat wider than bus");
            trace!(
                id = req.ar_id,
                addr = req.ar_addr,
                beats = u16::from(req.ar_len) + 1,
                "read burst accepted"
            );
            self.reads.push_back(ReadBurst {
                id: req.ar_id,
                offset,
                beat_bytes: 1 << req.ar_size,
                beats: u16::from(req.ar_len) + 1,
                next: 0,
            });
        }

        if req.aw_valid {
            let offset = self.mem.check_range(req.aw_addr, req.aw_bytes())?;
            debug_assert!(1u64 << req.aw_size <= self.bus_width, "beat wider than bus");
            trace!(
                id = req.aw_id,
                addr = req.aw_addr,
                beats = u16::from(req.aw_len) + 1,
                "write burst accepted"
            );
            self.writes.push_back(PendingWrite {
                id: req.aw_id,
                offset,
                beat_bytes: 1 << req.aw_size,
                beats: u16::from(req.aw_len) + 1,
                received: 0,
            });
        }

        if req.w_valid {
            self.write_data.push_back(WriteBeat {
                data: req.w_data,
                strb: req.w_strb,
                last: req.w_last,
            });
        }

        Ok(())
    }

    /// Pairs queued data beats with the oldest pending write transaction and
    /// queues one acknowledge per completed write.
    fn complete_writes(&mut self) {
        while let Some(write) = self.writes.front_mut() {
            let Some(beat) = self.write_data.pop_front() else {
                break;
            };

            let offset = write.offset + usize::from(write.received) * write.beat_bytes;
            self.mem
                .write_beat(offset, write.beat_bytes, beat.data, beat.strb);
            write.received += 1;

            let done = write.received == write.beats;
            debug_assert_eq!(beat.last, done, "write beat count disagrees with last flag");

            if done {
                self.acks.push_back(write.id);
                let _ = self.writes.pop_front();
            }
        }
    }

    /// Computes the response bundle to present next cycle.
    fn next_response(&self) -> BusResponse {
        let mut resp = Self::idle_response();

        if let Some(burst) = self.reads.front() {
            let offset = burst.offset + usize::from(burst.next) * burst.beat_bytes;
            resp.r_valid = true;
            resp.r_id = burst.id;
            resp.r_data = self.mem.read_beat(offset, burst.beat_bytes);
            resp.r_last = burst.next + 1 == burst.beats;
        }

        if let Some(&id) = self.acks.front() {
            resp.b_valid = true;
            resp.b_id = id;
        }

        resp
    }
}
