//! Calibration coefficients and the floating point compensation formulas of the BMP280.
//!
//! The formulas follow section 8.1 of the datasheet ("Compensation formula in double precision
//! floating point"). Operation order and constants are kept as published, since reordering changes
//! the rounding of the result.

use crate::bus::Bus;
use crate::register::calibration::{Calibration, CalibrationNvm};
use crate::Bmp280Result;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationData {
    dig_t1: f64,
    dig_t2: f64,
    dig_t3: f64,
    dig_p1: f64,
    dig_p2: f64,
    dig_p3: f64,
    dig_p4: f64,
    dig_p5: f64,
    dig_p6: f64,
    dig_p7: f64,
    dig_p8: f64,
    dig_p9: f64,
}

impl CalibrationData {
    pub(crate) fn read<B: Bus>(bus: &mut B) -> Bmp280Result<Self, B::Error> {
        let nvm = bus.read::<Calibration>()?;
        debug!("calibration: T1={} P1={}", nvm.dig_t1, nvm.dig_p1);

        Ok(Self::from(nvm))
    }

    /// Computes the fine resolution temperature `t_fine` from a raw 20-bit temperature reading.
    ///
    /// Divide by 5120.0 to get degrees Celsius.
    pub fn compensate_temperature(&self, adc_t: u32) -> f64 {
        let adc_t = adc_t as f64;

        let var1 = (adc_t / 16384.0 - self.dig_t1 / 1024.0) * self.dig_t2;
        let var2 = (adc_t / 131072.0 - self.dig_t1 / 8192.0)
            * (adc_t / 131072.0 - self.dig_t1 / 8192.0)
            * self.dig_t3;

        var1 + var2
    }

    /// Computes the pressure in Pa from a raw 20-bit pressure reading and a `t_fine` produced by
    /// [`CalibrationData::compensate_temperature`].
    ///
    /// Returns `0.0` when the coefficients make the divisor vanish.
    pub fn compensate_pressure(&self, adc_p: u32, t_fine: f64) -> f64 {
        let mut var1 = t_fine / 2.0 - 64000.0;
        let mut var2 = var1 * var1 * self.dig_p6 / 32768.0;
        var2 += var1 * self.dig_p5 * 2.0;
        var2 = (var2 / 4.0) + (self.dig_p4 * 65536.0);
        var1 = (self.dig_p3 * var1 * var1 / 524288.0 + self.dig_p2 * var1) / 524288.0;
        var1 = (1.0 + var1 / 32768.0) * self.dig_p1;

        if var1 == 0.0 {
            warn!("pressure compensation divisor is zero");
            return 0.0;
        }

        let mut p = 1048576.0 - adc_p as f64;
        p = (p - (var2 / 4096.0)) * 6250.0 / var1;
        var1 = self.dig_p9 * p * p / 2147483648.0;
        var2 = p * self.dig_p8 / 32768.0;

        p + (var1 + var2 + self.dig_p7) / 16.0
    }
}

impl From<CalibrationNvm> for CalibrationData {
    fn from(nvm: CalibrationNvm) -> Self {
        Self {
            dig_t1: nvm.dig_t1 as f64,
            dig_t2: nvm.dig_t2 as f64,
            dig_t3: nvm.dig_t3 as f64,
            dig_p1: nvm.dig_p1 as f64,
            dig_p2: nvm.dig_p2 as f64,
            dig_p3: nvm.dig_p3 as f64,
            dig_p4: nvm.dig_p4 as f64,
            dig_p5: nvm.dig_p5 as f64,
            dig_p6: nvm.dig_p6 as f64,
            dig_p7: nvm.dig_p7 as f64,
            dig_p8: nvm.dig_p8 as f64,
            dig_p9: nvm.dig_p9 as f64,
        }
    }
}
