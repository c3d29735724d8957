//! ### CONFIG - Rate, filter and interface options (`0xF5`, 1 byte, R/W)
//!
//! Holds the standby time of Normal mode (`t_sb`, bits 7:5), the IIR filter coefficient
//! (`filter`, bits 4:2) and the 3-wire SPI enable bit (`spi3w_en`, bit 0).
//!
//! Writes to this register may be ignored by the device while in Normal mode, see section 5.4.6
//! of the datasheet.
//!
//! ### Default values
//! 0x00 (0.5 ms standby, filter off, 4-wire SPI)
#![doc(alias = "CONFIG")]
use crate::register::field::Field;
use crate::register::{Readable, Reg, Writable};

/// Marker type for CONFIG (0xF5) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0xF5; }

impl Config {
    /// 3-wire SPI enable, bit 0
    pub const SPI3W_EN: Field = Field::new(Self::ADDR, 0, 1);
    /// IIR filter coefficient, bits 4:2
    pub const FILTER: Field = Field::new(Self::ADDR, 2, 3);
    /// Standby time, bits 7:5
    pub const T_SB: Field = Field::new(Self::ADDR, 5, 3);
}

/// The payload for the CONFIG (0xF5) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    pub t_sb: StandbyTime,
    pub filter: IIRFilterCoefficient,
    pub spi3w_en: bool,
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Self::Out {
        ConfigFields {
            t_sb: StandbyTime::from(Self::T_SB.get(b[0])),
            filter: IIRFilterCoefficient::from(Self::FILTER.get(b[0])),
            spi3w_en: Self::SPI3W_EN.get(b[0]) != 0,
        }
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In) -> u8 {
        let value = Self::T_SB.set(0, v.t_sb.into());
        let value = Self::FILTER.set(value, v.filter.into());
        Self::SPI3W_EN.set(value, v.spi3w_en as u8)
    }
}

/// Inactive duration between two measurements in Normal mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyTime {
    /// 0.5 ms
    Ms0_5,
    /// 62.5 ms
    Ms62_5,
    /// 125 ms
    Ms125,
    /// 250 ms
    Ms250,
    /// 500 ms
    Ms500,
    /// 1000 ms
    Ms1000,
    /// 2000 ms
    Ms2000,
    /// 4000 ms
    Ms4000,
}

impl StandbyTime {
    /// The nominal standby duration in microseconds.
    pub fn duration_us(&self) -> u32 {
        match self {
            StandbyTime::Ms0_5 => 500,
            StandbyTime::Ms62_5 => 62_500,
            StandbyTime::Ms125 => 125_000,
            StandbyTime::Ms250 => 250_000,
            StandbyTime::Ms500 => 500_000,
            StandbyTime::Ms1000 => 1_000_000,
            StandbyTime::Ms2000 => 2_000_000,
            StandbyTime::Ms4000 => 4_000_000,
        }
    }
}

impl From<u8> for StandbyTime {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => StandbyTime::Ms0_5,
            0b001 => StandbyTime::Ms62_5,
            0b010 => StandbyTime::Ms125,
            0b011 => StandbyTime::Ms250,
            0b100 => StandbyTime::Ms500,
            0b101 => StandbyTime::Ms1000,
            0b110 => StandbyTime::Ms2000,
            _ => StandbyTime::Ms4000,
        }
    }
}

impl From<StandbyTime> for u8 {
    fn from(t_sb: StandbyTime) -> u8 {
        match t_sb {
            StandbyTime::Ms0_5 => 0b000,
            StandbyTime::Ms62_5 => 0b001,
            StandbyTime::Ms125 => 0b010,
            StandbyTime::Ms250 => 0b011,
            StandbyTime::Ms500 => 0b100,
            StandbyTime::Ms1000 => 0b101,
            StandbyTime::Ms2000 => 0b110,
            StandbyTime::Ms4000 => 0b111,
        }
    }
}

/// This enum holds all configurable IIR filter coefficients.
///
/// Read more about the IIR filter in the datasheet section 3.3.3
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IIRFilterCoefficient {
    /// Filter off
    Off,
    /// Filter coefficient is 2
    Coef2,
    /// Filter coefficient is 4
    Coef4,
    /// Filter coefficient is 8
    Coef8,
    /// Filter coefficient is 16
    Coef16,
}

impl From<u8> for IIRFilterCoefficient {
    fn from(field: u8) -> Self {
        match field & 0b111 {
            0b000 => IIRFilterCoefficient::Off,
            0b001 => IIRFilterCoefficient::Coef2,
            0b010 => IIRFilterCoefficient::Coef4,
            0b011 => IIRFilterCoefficient::Coef8,
            _ => IIRFilterCoefficient::Coef16,
        }
    }
}

impl From<IIRFilterCoefficient> for u8 {
    fn from(filter: IIRFilterCoefficient) -> u8 {
        match filter {
            IIRFilterCoefficient::Off => 0b000,
            IIRFilterCoefficient::Coef2 => 0b001,
            IIRFilterCoefficient::Coef4 => 0b010,
            IIRFilterCoefficient::Coef8 => 0b011,
            IIRFilterCoefficient::Coef16 => 0b100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_decode() {
        let reg = Config::decode(&[0b0000_0000]);
        assert_eq!(StandbyTime::Ms0_5, reg.t_sb);
        assert_eq!(IIRFilterCoefficient::Off, reg.filter);
        assert!(!reg.spi3w_en);

        let reg = Config::decode(&[0b0100_0100]);
        assert_eq!(StandbyTime::Ms125, reg.t_sb);
        assert_eq!(IIRFilterCoefficient::Coef2, reg.filter);

        let reg = Config::decode(&[0b1111_1101]);
        assert_eq!(StandbyTime::Ms4000, reg.t_sb);
        assert_eq!(IIRFilterCoefficient::Coef16, reg.filter);
        assert!(reg.spi3w_en);
    }

    #[test]
    fn config_encode() {
        assert_eq!(0b0100_0100, Config::encode(&ConfigFields {
            t_sb: StandbyTime::Ms125,
            filter: IIRFilterCoefficient::Coef2,
            spi3w_en: false,
        }));

        assert_eq!(0b1111_0001, Config::encode(&ConfigFields {
            t_sb: StandbyTime::Ms4000,
            filter: IIRFilterCoefficient::Coef16,
            spi3w_en: true,
        }));
    }

    #[test]
    fn standby_duration() {
        assert_eq!(500, StandbyTime::Ms0_5.duration_us());
        assert_eq!(62_500, StandbyTime::from(0b001).duration_us());
        assert_eq!(4_000_000, StandbyTime::from(0b111).duration_us());
    }
}
