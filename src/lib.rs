//! Platform-agnostic, async driver for the NXP MPL3115A2 barometric
//! pressure / altitude / temperature sensor, built on the
//! [`embedded-hal-async`](https://docs.rs/embedded-hal-async) I2C traits.
//!
//! The driver exposes physical-unit one-shot readings (pascals, meters/feet,
//! Celsius/Fahrenheit) on top of a typed register catalog covering the full
//! device map (0x00 - 0x2D). Mode and oversampling changes run the required
//! Standby/write/restore cycle automatically, and the data-ready poll loop is
//! bounded so a disconnected sensor surfaces as
//! [`Mpl3115a2Error::DeviceNotResponding`] instead of hanging forever.

#![no_std]
#![allow(async_fn_in_trait)]

pub mod bus;
pub mod config;
pub mod error;
pub mod register;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod units;

mod mpl3115a2;

pub use crate::error::Mpl3115a2Error;
pub use crate::mpl3115a2::{Mpl3115a2, Mpl3115a2Result, MPL3115A2_I2C_ADDRESS};
