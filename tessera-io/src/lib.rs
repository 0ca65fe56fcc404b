//! Chunked register transfers for bounded bus transports
//!
//! Serial bus controllers (I2C-class) cap how many bytes fit into one
//! transaction, while devices expose register files far larger than that
//! cap. This crate moves logical buffers of any length across such a bus:
//! writes are fragmented into bus-legal chunks, and chunked reads are
//! reassembled into the caller's buffer with exact byte accounting.
//!
//! Every data-bearing transaction opens with a 2-byte register address,
//! high byte first:
//!
//! ```text
//! ┌────────────┬───────────┬──────────────────────────┐
//! │ ADDR[15:8] │ ADDR[7:0] │ DATA (≤ chunk size limit)│
//! └────────────┴───────────┴──────────────────────────┘
//! ```
//!
//! Devices are not assumed to keep their internal address pointer alive
//! across transaction boundaries, so chunk `n` explicitly re-targets
//! `base_address + bytes_already_transferred`.
//!
//! # Usage
//!
//! ```ignore
//! use tessera_io::RegisterIo;
//!
//! let mut io = RegisterIo::new(transport, 0x50);
//! if !io.is_connected() {
//!     // device absent, bail out
//! }
//! io.write_bytes(0x1000, &firmware_page)?;
//! io.read_bytes(0x2000, &mut telemetry)?;
//! ```
//!
//! # Concurrency
//!
//! All operations are blocking and run to completion on the caller's
//! thread. `&mut self` keeps a single [`RegisterIo`] exclusive, but
//! nothing arbitrates the physical bus between engine instances:
//! interleaved chunked transfers from two instances on one bus corrupt
//! both. Serializing access to a shared bus is the caller's obligation.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod retry;
pub mod transfer;

#[cfg(test)]
mod mock_bus;

pub use retry::RetryPolicy;
pub use transfer::{register_address_bytes, RegisterIo, TransferError};

// Re-exported so transport implementors and engine callers agree on the
// per-transaction overhead.
pub use tessera_hal::REGISTER_HEADER_LEN;
