//! ### RESET - Soft reset (`0xE0`, 1 byte, Write-only)
//!
//! Writing `0xB6` resets the device using the complete power-on-reset procedure. Any other
//! value has no effect. Reading the register returns `0x00`.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::reset::{Reset, ResetCommand};
//!
//! device.write::<Reset>(&ResetCommand::SoftReset)?;
//!
//! # Ok(()) }
//! ```
//!
//! See also: [`crate::Bmp280::soft_reset()`], which also keeps the cached configuration in sync.
#![doc(alias = "RESET")]
use crate::register::{Reg, Writable};

/// Marker type for RESET (0xE0) register
pub struct Reset;
impl Reg for Reset { const ADDR: u8 = 0xE0; }

/// The payload for the RESET (0xE0) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCommand {
    /// Triggers a power-on reset.
    ///
    /// All user configuration settings are overwritten with their default state.
    SoftReset,
}

impl From<ResetCommand> for u8 {
    fn from(command: ResetCommand) -> u8 {
        match command {
            ResetCommand::SoftReset => 0xB6,
        }
    }
}

impl Writable for Reset {
    type In = ResetCommand;
    fn encode(v: &Self::In) -> u8 {
        (*v).into()
    }
}
