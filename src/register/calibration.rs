use crate::register::{Readable, Reg};

/// Marker struct for the factory trimming block (0x88 - 0x9F).
///
/// - **Length:** 24 bytes
/// - **Access:** Read-only
pub struct Calibration;
impl Reg for Calibration { const ADDR: u8 = 0x88; }

/// Raw trimming parameters as stored in NVM, see table 17 of the datasheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationNvm {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl Readable for Calibration {
    type Out = CalibrationNvm;

    const N: usize = 24;

    fn decode(b: &[u8]) -> Self::Out {
        let word = |i: usize| trim_word(b[i], b[i + 1]);

        CalibrationNvm {
            dig_t1: word(0),
            dig_t2: word(2) as i16,
            dig_t3: word(4) as i16,
            dig_p1: word(6),
            dig_p2: word(8) as i16,
            dig_p3: word(10) as i16,
            dig_p4: word(12) as i16,
            dig_p5: word(14) as i16,
            dig_p6: word(16) as i16,
            dig_p7: word(18) as i16,
            dig_p8: word(20) as i16,
            dig_p9: word(22) as i16,
        }
    }
}

/// Assembles a trimming word from its low (lower address) and high byte.
fn trim_word(low: u8, high: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_decode() {
        // Example trimming values from the datasheet, section 3.12
        let reg = Calibration::decode(&[
            0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B,
            0x27, 0x0B, 0x8C, 0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17,
        ]);

        assert_eq!(27504, reg.dig_t1);
        assert_eq!(26435, reg.dig_t2);
        assert_eq!(-1000, reg.dig_t3);
        assert_eq!(36477, reg.dig_p1);
        assert_eq!(-10685, reg.dig_p2);
        assert_eq!(3024, reg.dig_p3);
        assert_eq!(2855, reg.dig_p4);
        assert_eq!(140, reg.dig_p5);
        assert_eq!(-7, reg.dig_p6);
        assert_eq!(15500, reg.dig_p7);
        assert_eq!(-14600, reg.dig_p8);
        assert_eq!(6000, reg.dig_p9);
    }
}
