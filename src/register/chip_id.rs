//! ### ID - Chip identification number (`0xD0`, 1 byte, R)
//!
//! Contains the chip identification code, which will always be 0x58 for BMP280.
//!
//! ### Default values
//! 0x58
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::chip_id::ChipId;
//!
//! // Print chip id
//! let id = device.read::<ChipId>()?;
//! println!("{:#x}", id);
//!
//! # Ok(()) }
//! ```
#![doc(alias = "ID")]
use crate::register::{Readable, Reg};

/// The value of the ID register on every BMP280.
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Marker struct for the ID (0xD0) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`crate::Bmp280::read::<ChipId>()`] or the convenience method [`crate::Bmp280::chip_id`].
pub struct ChipId;
impl Reg for ChipId { const ADDR: u8 = 0xD0; }

impl Readable for ChipId {
    type Out = u8;
    fn decode(b: &[u8]) -> Self::Out {
        b[0]
    }
}
