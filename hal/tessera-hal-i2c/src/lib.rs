//! embedded-hal I2C bus transport
//!
//! Implements the [`tessera_hal::BusTransport`] capability on top of any
//! blocking [`embedded_hal::i2c::I2c`] bus, so the transfer engine runs
//! unchanged against every chip HAL that speaks embedded-hal 1.0.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod transport;

pub use transport::{WireTransport, DEFAULT_CHUNK_SIZE, QUEUE_CAPACITY};
