//! Blocking driver for the Bosch BMP280 barometric pressure and temperature sensor.
//!
//! The driver talks to the sensor over I2C or SPI through the `embedded-hal` 1.0 blocking traits.
//! On construction the device is soft reset, its factory calibration is read and the requested
//! [`config::Configuration`] is committed. Measurements are compensated with the double precision
//! formulas of the datasheet.
//!
//! ```rust,no_run
//! # use embedded_hal::i2c::I2c;
//! # use bmp280_rs::Bmp280Result;
//! use bmp280_rs::{Bmp280, SdoPinState};
//! use bmp280_rs::config::{Configuration, Preset};
//! use bmp280_rs::register::ctrl_meas::PowerMode;
//! # fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
//!
//! let config = Configuration::from_preset(Preset::WeatherMonitoring);
//! let mut device = Bmp280::new_i2c_with_configuration(i2c, SdoPinState::Low, config)?;
//!
//! // Forced mode performs one conversion and goes back to sleep
//! device.set_power_mode(PowerMode::Forced)?;
//! while device.is_measuring()? {}
//!
//! let measurement = device.read_measurement()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//! - `defmt`: log through `defmt` and derive `defmt::Format` on public types
//! - `log`: log through the `log` facade
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("features `defmt` and `log` are mutually exclusive");

// This mod MUST go first, so that the others see its macros.
mod fmt;

mod bmp280;
pub mod bus;
mod calibration;
pub mod config;
pub mod error;
pub mod register;

#[cfg(test)]
mod testing;

pub use bmp280::{Bmp280, Bmp280I2c, Bmp280Result, Bmp280Spi, Measurement, SdoPinState};
pub use calibration::CalibrationData;
pub use error::Bmp280Error;
