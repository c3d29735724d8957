//! ### CTRL_MEAS - Measurement control (`0xF4`, 1 byte, R/W)
//!
//! Holds the temperature oversampling (`osrs_t`, bits 7:5), the pressure oversampling
//! (`osrs_p`, bits 4:2) and the power mode (`mode`, bits 1:0).
//!
//! ### Default values
//! 0x00 (both measurements skipped, Sleep mode)
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::ctrl_meas::{CtrlMeas, CtrlMeasFields, Oversampling, PowerMode};
//!
//! let current = device.read::<CtrlMeas>()?;
//! println!("{:?}", current.mode);
//!
//! // Bypasses the driver's cached configuration, prefer the setters on `Bmp280`.
//! device.write::<CtrlMeas>(&CtrlMeasFields {
//!     osrs_t: Oversampling::X1,
//!     osrs_p: Oversampling::X4,
//!     mode: PowerMode::Forced,
//! })?;
//! # Ok(()) }
//! ```
#![doc(alias = "CTRL_MEAS")]
use crate::register::field::Field;
use crate::register::{Readable, Reg, Writable};

/// Marker type for CTRL_MEAS (0xF4) register
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR: u8 = 0xF4; }

impl CtrlMeas {
    /// Power mode, bits 1:0
    pub const MODE: Field = Field::new(Self::ADDR, 0, 2);
    /// Pressure oversampling, bits 4:2
    pub const OSRS_P: Field = Field::new(Self::ADDR, 2, 3);
    /// Temperature oversampling, bits 7:5
    pub const OSRS_T: Field = Field::new(Self::ADDR, 5, 3);
}

/// The payload for the CTRL_MEAS (0xF4) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeasFields {
    pub osrs_t: Oversampling,
    pub osrs_p: Oversampling,
    pub mode: PowerMode,
}

impl Readable for CtrlMeas {
    type Out = CtrlMeasFields;

    fn decode(b: &[u8]) -> Self::Out {
        CtrlMeasFields {
            osrs_t: Oversampling::from(Self::OSRS_T.get(b[0])),
            osrs_p: Oversampling::from(Self::OSRS_P.get(b[0])),
            mode: PowerMode::from(Self::MODE.get(b[0])),
        }
    }
}

impl Writable for CtrlMeas {
    type In = CtrlMeasFields;

    fn encode(v: &Self::In) -> u8 {
        let value = Self::OSRS_T.set(0, v.osrs_t.into());
        let value = Self::OSRS_P.set(value, v.osrs_p.into());
        Self::MODE.set(value, v.mode.into())
    }
}

/// Power modes of the BMP280, see section 3.6 of the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// No measurements are performed. This is the default mode after power on reset.
    Sleep,
    /// A single measurement is performed, after which the device returns to Sleep mode.
    Forced,
    /// Measurements are performed continuously, separated by the configured standby time.
    Normal,
}

impl From<u8> for PowerMode {
    fn from(field: u8) -> Self {
        match field & 0b11 {
            0b00 => PowerMode::Sleep,
            0b01 | 0b10 => PowerMode::Forced,
            _ => PowerMode::Normal,
        }
    }
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> u8 {
        match mode {
            PowerMode::Sleep => 0b00,
            PowerMode::Forced => 0b01,
            PowerMode::Normal => 0b11,
        }
    }
}

/// Oversampling settings for `osrs_t` and `osrs_p`.
///
/// Setting a measurement to [`Oversampling::Skip`] disables it; its data register then holds `0x80000`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    Skip,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl Oversampling {
    /// Number of samples taken per measurement, `0` when skipped.
    pub fn samples(&self) -> u32 {
        match self {
            Oversampling::Skip => 0,
            Oversampling::X1 => 1,
            Oversampling::X2 => 2,
            Oversampling::X4 => 4,
            Oversampling::X8 => 8,
            Oversampling::X16 => 16,
        }
    }
}

impl From<u8> for Oversampling {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => Oversampling::Skip,
            0b001 => Oversampling::X1,
            0b010 => Oversampling::X2,
            0b011 => Oversampling::X4,
            0b100 => Oversampling::X8,
            // 0b110 and 0b111 behave like x16
            _ => Oversampling::X16,
        }
    }
}

impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> u8 {
        match oversampling {
            Oversampling::Skip => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b101,
        }
    }
}
