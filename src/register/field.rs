//! Bit-field descriptors and range validation for the packed configuration registers.
//!
//! `CTRL_MEAS` (0xF4) and `CONFIG` (0xF5) each pack several settings into one byte. Before a
//! setting is committed, its value is checked against the width of its field with
//! [`Field::validate`]; a value that does not fit is rejected without touching the device.

use crate::register::InvalidRegisterField;

/// Location of a bit field inside a single register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub register: u8,
    pub offset: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        Self { register, offset, width }
    }

    /// The largest value the field can hold, `2^width - 1`.
    pub const fn max(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    const fn mask(&self) -> u8 {
        self.max() << self.offset
    }

    /// Checks that `value` lies within `[0, 2^width - 1]`.
    pub fn validate(&self, value: u8) -> Result<u8, InvalidRegisterField> {
        if value <= self.max() {
            Ok(value)
        } else {
            warn!(
                "value {} exceeds the {}-bit field at bit {} of {:#x}",
                value, self.width, self.offset, self.register
            );
            Err(InvalidRegisterField::new(self.register, value, self.offset, self.width))
        }
    }

    /// Extracts the field from a full register value.
    pub fn get(&self, register_value: u8) -> u8 {
        (register_value >> self.offset) & self.max()
    }

    /// Places `value` into the field of `register_value`, leaving the other bits untouched.
    ///
    /// Bits of `value` beyond the field width are discarded; call [`Field::validate`] first.
    pub fn set(&self, register_value: u8, value: u8) -> u8 {
        (register_value & !self.mask()) | ((value & self.max()) << self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BITS: Field = Field::new(0xF4, 0, 2);
    const THREE_BITS: Field = Field::new(0xF5, 5, 3);

    #[test]
    fn field_max() {
        assert_eq!(0b11, TWO_BITS.max());
        assert_eq!(0b111, THREE_BITS.max());
    }

    #[test]
    fn field_validate_accepts_full_range() {
        for value in 0..=3 {
            assert_eq!(Ok(value), TWO_BITS.validate(value));
        }
        for value in 0..=7 {
            assert_eq!(Ok(value), THREE_BITS.validate(value));
        }
    }

    #[test]
    fn field_validate_rejects_out_of_range() {
        assert_eq!(
            Err(InvalidRegisterField::new(0xF4, 4, 0, 2)),
            TWO_BITS.validate(4)
        );
        assert_eq!(
            Err(InvalidRegisterField::new(0xF5, 8, 5, 3)),
            THREE_BITS.validate(8)
        );
        assert!(THREE_BITS.validate(0xFF).is_err());
    }

    #[test]
    fn field_get_set() {
        assert_eq!(0b1110_0001, THREE_BITS.set(0b0000_0001, 0b111));
        assert_eq!(0b0000_0001, THREE_BITS.set(0b1110_0001, 0));
        assert_eq!(0b101, THREE_BITS.get(0b1011_1111));
        assert_eq!(0b10, TWO_BITS.get(0b1111_1110));
    }
}
