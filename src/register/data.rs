use crate::register::{Readable, Reg};

/// Marker struct for the PRESS_MSB, PRESS_LSB and PRESS_XLSB (0xF7 - 0xF9) registers.
///
/// Note that this will return the raw uncompensated measurement. So for most use cases
/// calling [`crate::Bmp280::read_pressure()`] is recommended as it will compensate the data for you.
///
/// - **Length:** 3 bytes
/// - **Access:** Read-only
pub struct PressureData;
impl Reg for PressureData { const ADDR: u8 = 0xF7; }

/// Marker struct for the TEMP_MSB, TEMP_LSB and TEMP_XLSB (0xFA - 0xFC) registers.
///
/// Note that this will return the raw uncompensated measurement. So for most use cases
/// calling [`crate::Bmp280::read_temperature()`] is recommended as it will compensate the data for you.
///
/// - **Length:** 3 bytes
/// - **Access:** Read-only
pub struct TemperatureData;
impl Reg for TemperatureData { const ADDR: u8 = 0xFA; }

impl Readable for PressureData {
    type Out = u32;

    const N: usize = 3;

    fn decode(b: &[u8]) -> Self::Out {
        raw_adc_value(b[0], b[1], b[2])
    }
}

impl Readable for TemperatureData {
    type Out = u32;

    const N: usize = 3;

    fn decode(b: &[u8]) -> Self::Out {
        raw_adc_value(b[0], b[1], b[2])
    }
}

/// Assembles the 20-bit ADC value from an MSB/LSB/XLSB register triplet.
fn raw_adc_value(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    (msb as u32) << 12 | (lsb as u32) << 4 | xlsb as u32
}
