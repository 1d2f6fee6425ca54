//! Errors that can occur when using the MPL3115A2 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with the MPL3115A2.
//! It is generic over the underlying bus error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the MPL3115A2 device.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mpl3115a2Error<BusError> {
    /// An error has occurred in the I2C driver
    Bus(BusError),

    /// Unable to communicate with the MPL3115A2
    ///
    /// Could possibly indicate an error with pin configuration and/or wiring,
    /// or a different device answering on the expected address.
    NotConnected,

    /// The data-ready flag never set within the polling bound after a
    /// one-shot conversion was triggered.
    ///
    /// Could possibly indicate a disconnected or faulty sensor, or polling
    /// without having enabled the event flags first.
    DeviceNotResponding,

    /// A caller-supplied configuration value is not representable on the
    /// device. Carries the offending value.
    InvalidConfiguration(u8),

    /// Reading from a register returned unexpected data. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),
}
