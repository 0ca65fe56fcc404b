//! Chunked register transfer engine.
//!
//! Implements register-addressed reads and writes of arbitrary length on
//! top of a [`BusTransport`], splitting each logical transfer into
//! transactions the controller can actually carry.
//!
//! Writes stream through one open transaction per chunk; at every chunk
//! boundary the transaction is closed with the bus held and a new one is
//! opened at the advanced register address. Reads latch the register
//! address in a held transaction first, then request and drain the
//! payload chunk by chunk.

use tessera_hal::BusTransport;

use crate::retry::RetryPolicy;

/// Errors from register transfer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError<E> {
    /// The transport reported a failure closing a transaction.
    /// Carries the transport's error value unchanged.
    Bus(E),
    /// A read finished with fewer bytes than requested. The first `got`
    /// bytes of the caller's buffer are valid; the rest are untouched
    /// and must not be trusted.
    ShortRead {
        /// Bytes the caller asked for.
        expected: usize,
        /// Bytes actually drained from the bus.
        got: usize,
    },
    /// The device returned nothing for a single-byte read.
    NoData,
    /// The read address latch kept failing and the retry policy gave
    /// up. Carries the transport error from the final attempt.
    LatchFailed(E),
}

/// Split a 16-bit register address into its on-wire bytes, high first.
pub fn register_address_bytes(address: u16) -> [u8; 2] {
    address.to_be_bytes()
}

/// Register-addressed I/O for one device on a bounded bus transport.
///
/// Binds a transport handle to a 7-bit device address at construction;
/// both stay fixed for the life of the value. The transport is handed
/// back by [`release`](Self::release).
///
/// Transfers of any length are legal: the engine fragments them into
/// chunks of at most [`BusTransport::max_chunk_size`] data bytes, each
/// chunk re-targeting `base + bytes_already_transferred`.
pub struct RegisterIo<B> {
    bus: B,
    address: u8,
    retry: RetryPolicy,
}

impl<B> RegisterIo<B> {
    /// Bind a transport to a device address.
    ///
    /// The read address latch retries without bound by default; see
    /// [`with_retry_policy`](Self::with_retry_policy).
    pub fn new(bus: B, address: u8) -> Self {
        Self::with_retry_policy(bus, address, RetryPolicy::default())
    }

    /// Bind a transport to a device address with an explicit latch
    /// retry policy.
    pub fn with_retry_policy(bus: B, address: u8, retry: RetryPolicy) -> Self {
        Self { bus, address, retry }
    }

    /// The bound 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The active latch retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Hand the transport back.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: BusTransport> RegisterIo<B> {
    /// Probe whether the device answers on the bus.
    ///
    /// Issues a zero-length transaction (open, immediately close) and
    /// reports whether the close succeeded. No data moves; safe to call
    /// repeatedly. A failed probe is not retried.
    pub fn is_connected(&mut self) -> bool {
        self.bus.begin_transaction(self.address);
        self.bus.end_transaction(true).is_ok()
    }

    /// Write `data` starting at register `address`, chunking as needed.
    ///
    /// Each chunk carries its own address header so the device never has
    /// to auto-increment across a transaction boundary. The result of
    /// the final, bus-releasing close is the result of the operation;
    /// held closes between chunks are not checked. Empty `data` writes a
    /// lone address header, which confirms addressing without moving
    /// data.
    pub fn write_bytes(
        &mut self,
        address: u16,
        data: &[u8],
    ) -> Result<(), TransferError<B::Error>> {
        let chunk = self.bus.max_chunk_size().max(1);

        self.open_at(address);
        for (i, &byte) in data.iter().enumerate() {
            if i > 0 && i + 1 < data.len() && i % chunk == 0 {
                let _ = self.bus.end_transaction(false);
                self.open_at(address.wrapping_add(i as u16));
            }
            self.bus.write_byte(byte);
        }
        self.bus.end_transaction(true).map_err(TransferError::Bus)
    }

    /// Fill `buf` from registers starting at `address`, chunking as
    /// needed.
    ///
    /// Latches the register address in a held transaction first,
    /// retrying per the configured [`RetryPolicy`], then requests and
    /// drains the payload. A device that stops supplying bytes ends the
    /// transfer early with [`TransferError::ShortRead`]; the shortfall
    /// is reported, never re-latched.
    pub fn read_bytes(
        &mut self,
        address: u16,
        buf: &mut [u8],
    ) -> Result<(), TransferError<B::Error>> {
        self.latch_read_address(address)?;

        let chunk = self.bus.max_chunk_size().max(1);
        let total = buf.len();
        let mut offset = 0;

        if total > chunk {
            while offset < total {
                let want = chunk.min(total - offset);
                self.bus.request_bytes(self.address, want as u16);
                let filled = self.drain_available(buf, offset);
                if filled - offset < want {
                    // The device stopped supplying data; report the
                    // shortfall instead of requesting forever.
                    offset = filled;
                    break;
                }
                offset = filled;
            }
        } else {
            self.bus.request_bytes(self.address, total as u16);
            offset = self.drain_available(buf, offset);
        }

        if offset == total {
            Ok(())
        } else {
            Err(TransferError::ShortRead {
                expected: total,
                got: offset,
            })
        }
    }

    /// Read one byte from register `address`.
    ///
    /// The address goes out in its own released transaction, then a
    /// single byte is requested. An unresponsive device surfaces as
    /// [`TransferError::NoData`] rather than an idle-bus value.
    pub fn read_byte(&mut self, address: u16) -> Result<u8, TransferError<B::Error>> {
        self.open_at(address);
        // A NACK on this close shows up as an empty read queue below.
        let _ = self.bus.end_transaction(true);

        self.bus.request_bytes(self.address, 1);
        if self.bus.bytes_available() == 0 {
            return Err(TransferError::NoData);
        }
        Ok(self.bus.read_byte())
    }

    /// Write one byte to register `address` in a single transaction.
    pub fn write_byte(
        &mut self,
        address: u16,
        value: u8,
    ) -> Result<(), TransferError<B::Error>> {
        self.open_at(address);
        self.bus.write_byte(value);
        self.bus.end_transaction(true).map_err(TransferError::Bus)
    }

    /// Open a transaction and send the register address header.
    fn open_at(&mut self, address: u16) {
        self.bus.begin_transaction(self.address);
        let [high, low] = register_address_bytes(address);
        self.bus.write_byte(high);
        self.bus.write_byte(low);
    }

    /// Establish the read target address in a held transaction.
    fn latch_read_address(&mut self, address: u16) -> Result<(), TransferError<B::Error>> {
        let mut attempts = 0u32;
        loop {
            self.open_at(address);
            match self.bus.end_transaction(false) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    attempts += 1;
                    if self.retry.exhausted(attempts) {
                        return Err(TransferError::LatchFailed(e));
                    }
                }
            }
        }
    }

    /// Drain every available byte into `buf` starting at `offset`.
    /// Returns the new offset.
    fn drain_available(&mut self, buf: &mut [u8], mut offset: usize) -> usize {
        while self.bus.bytes_available() > 0 && offset < buf.len() {
            buf[offset] = self.bus.read_byte();
            offset += 1;
        }
        offset
    }
}
