#![no_std]
//! Two-wire bus transaction engine for the loopback bridge.
//!
//! The engine has three layers: a status/fault taxonomy shared between the
//! interrupt path and the supervising loop, a per-event read-transaction
//! state machine that captures the byte-wise ACK/NACK discipline of a
//! master-mode read, and [`BusMaster`], the endpoint object that runs one
//! transaction at a time over an async [`embedded_hal_async::i2c::I2c`]
//! controller. [`SimBus`] provides an in-memory loopback peripheral so the
//! whole engine can be exercised without hardware.

mod master;
mod sim;
mod status;
mod transaction;

pub use master::BusMaster;
pub use sim::{SimBus, SimError};
pub use status::{Fault, Status};
pub use transaction::{BusAction, BusEvent, ReadTransaction};
