use crate::register::config::{ConfigFields, IIRFilterCoefficient, StandbyTime};
use crate::register::ctrl_meas::{CtrlMeasFields, Oversampling, PowerMode};

/// The measurement settings of a BMP280.
///
/// Held by [`crate::Bmp280`] as the record of what was last committed to the device, and passed
/// to the constructors to choose the initial settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub mode: PowerMode,
    pub pressure_oversampling: Oversampling,
    pub temperature_oversampling: Oversampling,
    pub standby_time: StandbyTime,
    pub iir_filter: IIRFilterCoefficient,
}

impl Default for Configuration {
    /// Normal mode, both measurements skipped, 125 ms standby and a filter coefficient of 2.
    fn default() -> Self {
        Self {
            mode: PowerMode::Normal,
            pressure_oversampling: Oversampling::Skip,
            temperature_oversampling: Oversampling::Skip,
            standby_time: StandbyTime::Ms125,
            iir_filter: IIRFilterCoefficient::Coef2,
        }
    }
}

impl Configuration {
    /// The register state of the device right after power-on or a soft reset.
    pub fn power_on_reset() -> Self {
        Self {
            mode: PowerMode::Sleep,
            pressure_oversampling: Oversampling::Skip,
            temperature_oversampling: Oversampling::Skip,
            standby_time: StandbyTime::Ms0_5,
            iir_filter: IIRFilterCoefficient::Off,
        }
    }

    pub fn power_mode(mut self, mode: PowerMode) -> Self {
        self.mode = mode;

        self
    }

    /// Sets the pressure oversampling.
    /// Pressure compensation needs a recent temperature, so skipping temperature while measuring
    /// pressure only makes sense if temperatures are read elsewhere.
    pub fn pressure_oversampling(mut self, pressure_oversampling: Oversampling) -> Self {
        self.pressure_oversampling = pressure_oversampling;

        self
    }

    pub fn temperature_oversampling(mut self, temperature_oversampling: Oversampling) -> Self {
        self.temperature_oversampling = temperature_oversampling;

        self
    }

    pub fn standby_time(mut self, standby_time: StandbyTime) -> Self {
        self.standby_time = standby_time;

        self
    }

    pub fn iir_filter(mut self, iir_filter: IIRFilterCoefficient) -> Self {
        self.iir_filter = iir_filter;

        self
    }

    pub(crate) fn ctrl_meas(&self) -> CtrlMeasFields {
        CtrlMeasFields {
            osrs_t: self.temperature_oversampling,
            osrs_p: self.pressure_oversampling,
            mode: self.mode,
        }
    }

    pub(crate) fn config(&self) -> ConfigFields {
        ConfigFields {
            t_sb: self.standby_time,
            filter: self.iir_filter,
            spi3w_en: false,
        }
    }

    pub(crate) fn update_ctrl_meas(&mut self, fields: CtrlMeasFields) {
        self.mode = fields.mode;
        self.pressure_oversampling = fields.osrs_p;
        self.temperature_oversampling = fields.osrs_t;
    }

    pub(crate) fn update_config(&mut self, fields: ConfigFields) {
        self.standby_time = fields.t_sb;
        self.iir_filter = fields.filter;
    }

    /// Recommended settings for typical use cases, see section 3.4 of the datasheet.
    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::HandheldLowPower => Configuration::default()
                .pressure_oversampling(Oversampling::X16)
                .temperature_oversampling(Oversampling::X2)
                .iir_filter(IIRFilterCoefficient::Coef4)
                .standby_time(StandbyTime::Ms62_5),
            Preset::HandheldDynamic => Configuration::default()
                .pressure_oversampling(Oversampling::X4)
                .temperature_oversampling(Oversampling::X1)
                .iir_filter(IIRFilterCoefficient::Coef16)
                .standby_time(StandbyTime::Ms0_5),
            Preset::WeatherMonitoring => Configuration::default()
                .power_mode(PowerMode::Forced)
                .pressure_oversampling(Oversampling::X1)
                .temperature_oversampling(Oversampling::X1)
                .iir_filter(IIRFilterCoefficient::Off),
            Preset::ElevatorFloorChange => Configuration::default()
                .pressure_oversampling(Oversampling::X4)
                .temperature_oversampling(Oversampling::X1)
                .iir_filter(IIRFilterCoefficient::Coef4)
                .standby_time(StandbyTime::Ms125),
            Preset::DropDetection => Configuration::default()
                .pressure_oversampling(Oversampling::X2)
                .temperature_oversampling(Oversampling::X1)
                .iir_filter(IIRFilterCoefficient::Off)
                .standby_time(StandbyTime::Ms0_5),
            Preset::IndoorNavigation => Configuration::default()
                .pressure_oversampling(Oversampling::X16)
                .temperature_oversampling(Oversampling::X2)
                .iir_filter(IIRFilterCoefficient::Coef16)
                .standby_time(StandbyTime::Ms0_5),
        }
    }
}

/// Use cases with recommended settings, see [`Configuration::from_preset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    HandheldLowPower,
    HandheldDynamic,
    WeatherMonitoring,
    ElevatorFloorChange,
    DropDetection,
    IndoorNavigation,
}
