//! Typed register catalog for the BMP280.
//!
//! Every register is a zero-sized marker type implementing [`Reg`] and, depending on its access
//! mode, [`Readable`] and/or [`Writable`]. Use them with [`crate::Bmp280::read`] and
//! [`crate::Bmp280::write`] for register-accurate access.
//!
//! | Marker                            | Address       | Length | Access |
//! |-----------------------------------|---------------|--------|--------|
//! | [`calibration::Calibration`]      | `0x88..=0x9F` | 24     | R      |
//! | [`chip_id::ChipId`]               | `0xD0`        | 1      | R      |
//! | [`reset::Reset`]                  | `0xE0`        | 1      | W      |
//! | [`status::Status`]                | `0xF3`        | 1      | R      |
//! | [`ctrl_meas::CtrlMeas`]           | `0xF4`        | 1      | R/W    |
//! | [`config::Config`]                | `0xF5`        | 1      | R/W    |
//! | [`data::PressureData`]            | `0xF7..=0xF9` | 3      | R      |
//! | [`data::TemperatureData`]         | `0xFA..=0xFC` | 3      | R      |

pub mod calibration;
pub mod chip_id;
pub mod config;
pub mod ctrl_meas;
pub mod data;
pub mod field;
pub mod reset;
pub mod status;

/// Largest number of consecutive registers read by a single marker (the calibration block).
pub const MAX_REG_BYTES: usize = 24;

/// A register field value that does not fit the field it was destined for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRegisterField {
    /// Address of the register holding the field.
    pub register: u8,
    /// The rejected value.
    pub value: u8,
    /// Position of the field's least significant bit.
    pub bit_offset: u8,
    /// Width of the field in bits.
    pub width: u8,
}

impl InvalidRegisterField {
    pub fn new(register: u8, value: u8, bit_offset: u8, width: u8) -> Self {
        Self { register, value, bit_offset, width }
    }
}

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    fn decode(b: &[u8]) -> Self::Out;
}

pub trait Writable: Reg {
    type In;
    fn encode(v: &Self::In) -> u8;
}
