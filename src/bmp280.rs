use crate::bus::{Bus, I2c, Spi};
use crate::calibration::CalibrationData;
use crate::config::Configuration;
use crate::error::Bmp280Error;
use crate::register::chip_id::{ChipId, BMP280_CHIP_ID};
use crate::register::config::Config;
use crate::register::ctrl_meas::{CtrlMeas, Oversampling};
use crate::register::data::{PressureData, TemperatureData};
use crate::register::field::Field;
use crate::register::reset::{Reset, ResetCommand};
use crate::register::status::{Status, StatusFlags};
use crate::register::{Readable, Reg, Writable};
use embedded_hal::i2c::SevenBitAddress;

/// Type alias for a Bmp280 chip communicating over I2C
pub type Bmp280I2c<T> = Bmp280<I2c<T>>;

/// Type alias for a Bmp280 chip communicating over SPI
pub type Bmp280Spi<T> = Bmp280<Spi<T>>;

/// Main Bmp280 driver struct
///
/// Owns the bus for its whole lifetime. Dropping the driver drops the bus, use
/// [`Bmp280::release`] to get it back instead.
pub struct Bmp280<B> {
    bus: B,
    calibration_data: CalibrationData,
    config: Configuration,
    // Last committed CTRL_MEAS and CONFIG bytes, setters recompose from these.
    ctrl_meas: u8,
    config_reg: u8,
    t_fine: f64,
}

/// How many times STATUS is polled for the end of the NVM copy after a reset.
const NVM_COPY_POLLS: u8 = 32;

/// Type alias used to simplify return types throughout the driver
pub type Bmp280Result<T, BusError> = Result<T, Bmp280Error<BusError>>;

/// A compensated temperature and pressure pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Degrees Celsius
    pub temperature: f64,
    /// Pascal
    pub pressure: f64,
}

impl<T> Bmp280I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new Bmp280 driver instance with the default [`Configuration`] that
    /// communicates over I2C.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal::i2c::I2c;
    /// # use bmp280_rs::Bmp280Result;
    /// use bmp280_rs::{Bmp280, SdoPinState};
    /// # fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
    ///
    /// let mut device = Bmp280::new_i2c(i2c, SdoPinState::Low)?;
    /// let temperature = device.read_temperature()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(
        i2c: T,
        sdo_pin_state: SdoPinState,
    ) -> Bmp280Result<Self, <I2c<T> as Bus>::Error> {
        Self::new_i2c_with_configuration(i2c, sdo_pin_state, Configuration::default())
    }

    /// Constructs a new Bmp280 driver instance with a given configuration that communicates over
    /// I2C.
    pub fn new_i2c_with_configuration(
        i2c: T,
        sdo_pin_state: SdoPinState,
        config: Configuration,
    ) -> Bmp280Result<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, sdo_pin_state.into()), config)
    }
}

impl<T> Bmp280Spi<T>
where
    T: embedded_hal::spi::SpiDevice,
{
    /// Constructs a new Bmp280 driver instance with a given configuration that communicates over
    /// SPI (4-wire).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal::spi::SpiDevice;
    /// # use bmp280_rs::Bmp280Result;
    /// use bmp280_rs::Bmp280;
    /// use bmp280_rs::config::{Configuration, Preset};
    /// # fn demo<S: SpiDevice>(spi: S) -> Bmp280Result<(), S::Error> {
    ///
    /// let device = Bmp280::new_spi(spi, Configuration::from_preset(Preset::IndoorNavigation))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_spi(spi: T, config: Configuration) -> Bmp280Result<Self, <Spi<T> as Bus>::Error> {
        Self::new(Spi::new(spi), config)
    }
}

impl<B> Bmp280<B>
where
    B: Bus,
{
    /// Creates a new instance of the Bmp280 driver on any [`Bus`].
    ///
    /// This function will:
    /// - Perform a soft reset
    /// - Load calibration coefficients from NVM
    /// - Apply the given configuration
    ///
    /// If any step fails the bus is dropped and the error is returned.
    pub fn new(mut bus: B, config: Configuration) -> Bmp280Result<Self, B::Error> {
        debug!("soft reset");
        bus.write::<Reset>(&ResetCommand::SoftReset)?;

        // The datasheet specifies 2 ms start-up time, during which the trimming values are copied
        Self::wait_nvm_copy(&mut bus, NVM_COPY_POLLS)?;

        let calibration_data = CalibrationData::read(&mut bus)?;

        let mut device = Bmp280 {
            bus,
            calibration_data,
            config: Configuration::power_on_reset(),
            ctrl_meas: 0,
            config_reg: 0,
            t_fine: 0.0,
        };

        device.apply_configuration(&config)?;

        Ok(device)
    }

    /// Polls STATUS until `im_update` clears, at most `max_polls` times.
    ///
    /// Returns [`Bmp280Error::Timeout`] if the device is still copying NVM data afterwards.
    fn wait_nvm_copy(bus: &mut B, max_polls: u8) -> Bmp280Result<(), B::Error> {
        for _ in 0..max_polls {
            if !bus.read::<Status>()?.updating() {
                return Ok(());
            }
        }

        warn!("NVM copy still running after {} polls", max_polls);
        Err(Bmp280Error::Timeout)
    }

    /// Writes the whole configuration to CTRL_MEAS (0xF4) and CONFIG (0xF5), in that order.
    ///
    /// The cached configuration follows each register as soon as its write succeeds.
    pub fn apply_configuration(&mut self, config: &Configuration) -> Bmp280Result<(), B::Error> {
        let ctrl_meas = config.ctrl_meas();
        self.bus.write::<CtrlMeas>(&ctrl_meas)?;
        self.config.update_ctrl_meas(ctrl_meas);
        self.ctrl_meas = CtrlMeas::encode(&ctrl_meas);

        let fields = config.config();
        self.bus.write::<Config>(&fields)?;
        self.config.update_config(fields);
        self.config_reg = Config::encode(&fields);

        debug!(
            "configuration applied: ctrl_meas={:#x} config={:#x}",
            self.ctrl_meas,
            self.config_reg
        );

        Ok(())
    }

    /// Read a register (or fixed-size register block) using a **typed marker**.
    ///
    /// You pass a marker type from [`crate::register`] (e.g. `register::ctrl_meas::CtrlMeas`)
    /// and get back its decoded value (`R::Out`). The address and length come from `R::ADDR`
    /// and `R::N`.
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use bmp280_rs::{register, Bmp280, Bmp280Result};
    /// # use bmp280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
    /// let raw = device.read::<register::data::TemperatureData>()?;
    /// # Ok(()) }
    /// ```
    pub fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, B::Error> {
        self.bus.read::<R>()
    }

    /// Write a register using a **typed marker**.
    ///
    /// This is a direct write: the cached [`Configuration`] is not updated. Prefer the
    /// `set_*` methods for CTRL_MEAS and CONFIG.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), B::Error> {
        self.bus.write::<W>(v)
    }

    /// Reads the chip identification number from the ID (0xD0) register.
    pub fn chip_id(&mut self) -> Bmp280Result<u8, B::Error> {
        self.bus.read::<ChipId>()
    }

    /// Determines if a BMP280 answers by comparing its ID (0xD0) register with `0x58`.
    pub fn is_connected(&mut self) -> Bmp280Result<bool, B::Error> {
        Ok(self.chip_id()? == BMP280_CHIP_ID)
    }

    /// Triggers a soft reset.
    ///
    /// All user settings return to their power-on values, and so does the cached configuration.
    ///
    /// **Note:** This resets the chip to factory defaults, not to the configuration that was
    /// provided when constructing the driver.
    pub fn soft_reset(&mut self) -> Bmp280Result<(), B::Error> {
        self.bus.write::<Reset>(&ResetCommand::SoftReset)?;
        self.config = Configuration::power_on_reset();
        self.ctrl_meas = 0;
        self.config_reg = 0;

        Ok(())
    }

    /// Returns the status from the STATUS (0xF3) register.
    pub fn status(&mut self) -> Bmp280Result<StatusFlags, B::Error> {
        self.bus.read::<Status>()
    }

    /// Is a conversion running? (STATUS bit 3)
    pub fn is_measuring(&mut self) -> Bmp280Result<bool, B::Error> {
        Ok(self.status()?.measuring())
    }

    /// Is NVM data being copied to the image registers? (STATUS bit 0)
    pub fn is_updating(&mut self) -> Bmp280Result<bool, B::Error> {
        Ok(self.status()?.updating())
    }

    /// Sets the power mode, bits 1:0 of CTRL_MEAS (0xF4).
    ///
    /// Accepts a [`PowerMode`](crate::register::ctrl_meas::PowerMode) or a raw field value
    /// in `0..=3`.
    pub fn set_power_mode(&mut self, mode: impl Into<u8>) -> Bmp280Result<(), B::Error> {
        self.commit_ctrl_meas(CtrlMeas::MODE, mode.into())
    }

    /// Sets the pressure oversampling, bits 4:2 of CTRL_MEAS (0xF4).
    pub fn set_pressure_oversampling(
        &mut self,
        oversampling: impl Into<u8>,
    ) -> Bmp280Result<(), B::Error> {
        self.commit_ctrl_meas(CtrlMeas::OSRS_P, oversampling.into())
    }

    /// Sets the temperature oversampling, bits 7:5 of CTRL_MEAS (0xF4).
    pub fn set_temperature_oversampling(
        &mut self,
        oversampling: impl Into<u8>,
    ) -> Bmp280Result<(), B::Error> {
        self.commit_ctrl_meas(CtrlMeas::OSRS_T, oversampling.into())
    }

    /// Sets the standby time of Normal mode, bits 7:5 of CONFIG (0xF5).
    pub fn set_standby_time(&mut self, standby_time: impl Into<u8>) -> Bmp280Result<(), B::Error> {
        self.commit_config(Config::T_SB, standby_time.into())
    }

    /// Sets the IIR filter coefficient, bits 4:2 of CONFIG (0xF5).
    pub fn set_iir_filter(&mut self, filter: impl Into<u8>) -> Bmp280Result<(), B::Error> {
        self.commit_config(Config::FILTER, filter.into())
    }

    fn commit_ctrl_meas(&mut self, field: Field, value: u8) -> Bmp280Result<(), B::Error> {
        let value = field.validate(value)?;
        let register = field.set(self.ctrl_meas, value);

        self.bus
            .write_register(CtrlMeas::ADDR, register)
            .map_err(Bmp280Error::Bus)?;
        self.ctrl_meas = register;
        self.config.update_ctrl_meas(CtrlMeas::decode(&[register]));
        trace!("ctrl_meas <- {:#x}", register);

        Ok(())
    }

    fn commit_config(&mut self, field: Field, value: u8) -> Bmp280Result<(), B::Error> {
        let value = field.validate(value)?;
        let register = field.set(self.config_reg, value);

        self.bus
            .write_register(Config::ADDR, register)
            .map_err(Bmp280Error::Bus)?;
        self.config_reg = register;
        self.config.update_config(Config::decode(&[register]));
        trace!("config <- {:#x}", register);

        Ok(())
    }

    /// Reads the temperature data registers and compensates them, in degrees Celsius.
    ///
    /// Also updates the fine resolution temperature used by [`Bmp280::read_pressure`].
    pub fn read_temperature(&mut self) -> Bmp280Result<f64, B::Error> {
        let adc_t = self.bus.read::<TemperatureData>()?;
        self.t_fine = self.calibration_data.compensate_temperature(adc_t);

        Ok(self.t_fine / 5120.0)
    }

    /// Reads the pressure data registers and compensates them, in Pascal.
    ///
    /// Compensation uses the fine resolution temperature of the last
    /// [`Bmp280::read_temperature`] call, `0.0` if there was none. Use
    /// [`Bmp280::read_measurement`] to get both from the same cycle.
    ///
    /// Returns `0.0` when the calibration coefficients make the compensation degenerate.
    pub fn read_pressure(&mut self) -> Bmp280Result<f64, B::Error> {
        let adc_p = self.bus.read::<PressureData>()?;

        Ok(self.calibration_data.compensate_pressure(adc_p, self.t_fine))
    }

    /// Reads temperature and then pressure.
    ///
    /// # Examples
    ///
    /// ```rust, no_run
    /// # use bmp280_rs::{Bmp280, Bmp280Result};
    /// # use bmp280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
    /// let data = device.read_measurement()?;
    /// println!("The current pressure and temperature is {} and {}", data.pressure, data.temperature);
    /// # Ok(()) }
    /// ```
    pub fn read_measurement(&mut self) -> Bmp280Result<Measurement, B::Error> {
        let temperature = self.read_temperature()?;
        let pressure = self.read_pressure()?;

        Ok(Measurement { temperature, pressure })
    }

    /// Reads a single register without any validation or bookkeeping.
    pub fn read_raw_register(&mut self, reg: u8) -> Bmp280Result<u8, B::Error> {
        self.bus.read_register(reg).map_err(Bmp280Error::Bus)
    }

    /// Writes a single register without any validation or bookkeeping.
    ///
    /// The cached configuration is not updated, even when writing CTRL_MEAS or CONFIG.
    pub fn write_raw_register(&mut self, reg: u8, value: u8) -> Bmp280Result<(), B::Error> {
        self.bus.write_register(reg, value).map_err(Bmp280Error::Bus)
    }

    /// The configuration last committed through this driver.
    ///
    /// Reserved field encodings show up as the setting the device applies for them. The exact
    /// bits that were written are kept and reused when a neighbouring field changes.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The calibration coefficients read during construction.
    pub fn calibration_data(&self) -> &CalibrationData {
        &self.calibration_data
    }

    /// The fine resolution temperature of the last [`Bmp280::read_temperature`] call.
    pub fn t_fine(&self) -> f64 {
        self.t_fine
    }

    /// Returns the maximum measurement time in microseconds for the committed oversampling.
    ///
    /// See section 3.8.1 "Measurement time" of the datasheet.
    pub fn max_measurement_time_us(&self) -> u32 {
        calculate_maximum_measurement_time(
            self.config.pressure_oversampling,
            self.config.temperature_oversampling,
        )
    }

    /// Consumes the driver and gives back the bus.
    pub fn release(self) -> B {
        self.bus
    }
}

/// Maximum measurement time from section 3.8.1 of the datasheet.
fn calculate_maximum_measurement_time(
    pressure_oversampling: Oversampling,
    temperature_oversampling: Oversampling,
) -> u32 {
    let osrs_p = pressure_oversampling.samples();
    let osrs_t = temperature_oversampling.samples();

    let pressure_time = if osrs_p > 0 { 2300 * osrs_p + 575 } else { 0 };

    1250 + 2300 * osrs_t + pressure_time
}

/// This enum should reflect the physical state of the SDO pin. This is used to determine the I2C address
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdoPinState {
    /// SDO is pulled high by connection to VDDIO
    High,
    /// SDO is pulled low by connection to GND
    Low,
}

impl From<SdoPinState> for SevenBitAddress {
    fn from(state: SdoPinState) -> Self {
        match state {
            SdoPinState::High => 0x77,
            SdoPinState::Low => 0x76,
        }
    }
}
