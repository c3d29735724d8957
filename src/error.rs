//! Errors that can occur when using the BMP280 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with BMP280.
//! It is generic over the underlying bus (spi/i2c) error type.

use core::fmt;
use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the BMP280 device.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp280Error<BusError> {
    /// An error has occurred in the SPI / I2C driver
    ///
    /// The transaction in progress did not complete. The driver never retries on its own.
    Bus(BusError),

    /// A configuration value does not fit the bit width of its register field.
    ///
    /// Nothing was written to the device and the cached configuration is unchanged, so it is safe
    /// to retry with a corrected value.
    ConfigRange(InvalidRegisterField),

    /// The device did not finish copying its trimming values from NVM after a reset.
    Timeout,
}

impl<BusError> From<InvalidRegisterField> for Bmp280Error<BusError> {
    fn from(field: InvalidRegisterField) -> Self {
        Bmp280Error::ConfigRange(field)
    }
}

impl<BusError: fmt::Debug> fmt::Display for Bmp280Error<BusError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bmp280Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Bmp280Error::ConfigRange(field) => write!(
                f,
                "value {} does not fit the {}-bit field at bit {} of register {:#04x}",
                field.value, field.width, field.bit_offset, field.register
            ),
            Bmp280Error::Timeout => write!(f, "timed out waiting for the NVM copy"),
        }
    }
}
