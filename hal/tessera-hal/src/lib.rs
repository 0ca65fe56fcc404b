//! Tessera Hardware Abstraction Layer
//!
//! This crate defines the bus transport capability that the transfer
//! engine builds on. Controller-specific transports (embedded-hal I2C,
//! vendor peripherals, test doubles) implement the traits here, which
//! lets the same transfer logic run against any of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Device drivers (tessera-io callers)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-io (chunked transfer engine)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal-i2c, test transports, ...  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::BusTransport`] - Bounded-transaction bus master operations

#![no_std]
#![deny(unsafe_code)]

pub mod bus;

// Re-export key traits at crate root for convenience
pub use bus::{BusTransport, REGISTER_HEADER_LEN};
