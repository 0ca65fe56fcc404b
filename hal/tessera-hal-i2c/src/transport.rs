//! Wire-style transaction buffering over a blocking I2C bus.
//!
//! The blocking [`I2c`] interface exposes whole-buffer writes and reads,
//! while [`BusTransport`] deals in byte-at-a-time transactions. This
//! adapter buffers queued bytes in fixed-capacity queues and flushes
//! them as single I2C operations on close.

use embedded_hal::i2c::I2c;
use heapless::{Deque, Vec};
use tessera_hal::{BusTransport, REGISTER_HEADER_LEN};

/// Capacity of the internal write and read queues.
pub const QUEUE_CAPACITY: usize = 64;

/// Default data-byte limit per transaction, the classic 32-byte wire
/// buffer found on most Arduino-class controllers.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Value returned when draining an empty read queue; a released I2C bus
/// floats high.
const IDLE_READ: u8 = 0xFF;

/// [`BusTransport`] over a blocking embedded-hal I2C bus.
///
/// Bytes queued with [`write_byte`](BusTransport::write_byte) go out as
/// one `I2c::write` when the transaction closes, and
/// [`request_bytes`](BusTransport::request_bytes) issues one `I2c::read`
/// into an internal queue.
///
/// The blocking `I2c` interface has no way to keep the bus claimed
/// between calls, so a held close still issues a stop condition on the
/// wire. Register devices that keep their address pointer across a stop
/// (the common case) are unaffected; devices that reset their pointer on
/// stop need a controller-native transport instead.
pub struct WireTransport<I2C> {
    i2c: I2C,
    target: u8,
    tx: Vec<u8, QUEUE_CAPACITY>,
    rx: Deque<u8, QUEUE_CAPACITY>,
    chunk_size: usize,
}

impl<I2C> WireTransport<I2C> {
    /// Wrap an I2C bus with the default 32-byte chunk limit.
    pub fn new(i2c: I2C) -> Self {
        Self::with_chunk_size(i2c, DEFAULT_CHUNK_SIZE)
    }

    /// Wrap an I2C bus with an explicit data-byte limit per transaction.
    ///
    /// The limit is clamped so an address header plus one chunk always
    /// fits the internal queue.
    pub fn with_chunk_size(i2c: I2C, chunk_size: usize) -> Self {
        Self {
            i2c,
            target: 0,
            tx: Vec::new(),
            rx: Deque::new(),
            chunk_size: chunk_size.min(QUEUE_CAPACITY - REGISTER_HEADER_LEN),
        }
    }

    /// Hand the I2C bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> BusTransport for WireTransport<I2C> {
    type Error = I2C::Error;

    fn begin_transaction(&mut self, address: u8) {
        self.target = address;
        self.tx.clear();
    }

    fn write_byte(&mut self, byte: u8) {
        // Bytes past the queue capacity are dropped, like a full wire
        // buffer; the engine never queues more than header + chunk.
        let _ = self.tx.push(byte);
    }

    fn end_transaction(&mut self, _release: bool) -> Result<(), Self::Error> {
        let result = self.i2c.write(self.target, &self.tx);
        self.tx.clear();
        result
    }

    fn request_bytes(&mut self, address: u8, count: u16) {
        self.rx.clear();
        if count == 0 {
            return;
        }

        let count = (count as usize).min(QUEUE_CAPACITY);
        let mut buf = [0u8; QUEUE_CAPACITY];
        if self.i2c.read(address, &mut buf[..count]).is_ok() {
            for &byte in &buf[..count] {
                let _ = self.rx.push_back(byte);
            }
        }
        // A failed read leaves the queue empty; callers observe it as
        // a short read.
    }

    fn bytes_available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(IDLE_READ)
    }

    fn max_chunk_size(&self) -> usize {
        self.chunk_size
    }
}
