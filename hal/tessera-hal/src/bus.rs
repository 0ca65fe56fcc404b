//! Bus transport abstractions
//!
//! Provides the capability a transfer engine needs from a byte-oriented
//! serial bus controller: bounded transactions that are opened, streamed
//! into, and closed with or without releasing the bus.

/// Number of register-address bytes sent at the head of every
/// data-bearing transaction, high byte first.
pub const REGISTER_HEADER_LEN: usize = 2;

/// Bounded-transaction bus master
///
/// Wraps a bus controller (I2C-class) that can carry at most
/// [`max_chunk_size`] data bytes per transaction. Transfers longer than
/// that limit have to be split across transactions by the caller; this
/// trait only exposes the per-transaction primitives.
///
/// Write path: [`begin_transaction`], any number of [`write_byte`] calls,
/// then [`end_transaction`]. Read path: [`request_bytes`] primes the
/// controller, [`bytes_available`] and [`read_byte`] drain what arrived.
///
/// All operations block until the controller finishes or errors; timeout
/// behavior is the implementation's concern.
///
/// [`max_chunk_size`]: Self::max_chunk_size
/// [`begin_transaction`]: Self::begin_transaction
/// [`write_byte`]: Self::write_byte
/// [`end_transaction`]: Self::end_transaction
/// [`request_bytes`]: Self::request_bytes
/// [`bytes_available`]: Self::bytes_available
/// [`read_byte`]: Self::read_byte
pub trait BusTransport {
    /// Error reported by a failed transaction close.
    ///
    /// Values are controller-defined (NACK, arbitration loss, timeout)
    /// and reach callers unchanged.
    type Error;

    /// Open a transaction addressed to a device.
    ///
    /// # Arguments
    /// * `address` - 7-bit device address
    fn begin_transaction(&mut self, address: u8);

    /// Queue one byte into the open transaction.
    fn write_byte(&mut self, byte: u8);

    /// Close the open transaction, clocking the queued bytes out.
    ///
    /// With `release == false` the bus stays owned, signaling that more
    /// transactions follow before another master may claim it.
    fn end_transaction(&mut self, release: bool) -> Result<(), Self::Error>;

    /// Ask the device at `address` for `count` bytes, making them
    /// available to [`read_byte`](Self::read_byte).
    fn request_bytes(&mut self, address: u8, count: u16);

    /// Number of requested bytes currently available for reading.
    fn bytes_available(&self) -> usize;

    /// Drain one requested byte.
    ///
    /// Draining past the available count returns the controller's
    /// idle-read value; check [`bytes_available`](Self::bytes_available)
    /// first.
    fn read_byte(&mut self) -> u8;

    /// Maximum number of data bytes one transaction can carry, not
    /// counting the [`REGISTER_HEADER_LEN`] address bytes sent ahead of
    /// them.
    fn max_chunk_size(&self) -> usize;
}
