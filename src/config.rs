use crate::register::ctrl_reg1::{MeasurementMode, Oversampling, PowerState};

/// Initial device configuration, applied by the constructor.
///
/// The constructor writes the whole configuration while the device is in
/// Standby and only then commands the requested power state, so a freshly
/// constructed driver is always internally consistent.
pub struct Configuration {
    pub(crate) mode: MeasurementMode,
    pub(crate) oversampling: Oversampling,
    pub(crate) power: PowerState,
    pub(crate) data_ready_events: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: MeasurementMode::Barometer,
            oversampling: Oversampling::X16,
            power: PowerState::Active,
            data_ready_events: true,
        }
    }
}

impl Configuration {
    /// Selects barometer or altimeter output for the OUT_P registers.
    pub fn measurement_mode(mut self, mode: MeasurementMode) -> Self {
        self.mode = mode;

        self
    }

    pub fn oversampling(mut self, oversampling: Oversampling) -> Self {
        self.oversampling = oversampling;

        self
    }

    /// Whether to leave the device in Standby or command it Active once
    /// configured.
    pub fn power_state(mut self, power: PowerState) -> Self {
        self.power = power;

        self
    }

    /// Enables or disables the PT_DATA_CFG event flag setup.
    /// The data-ready poll loop depends on these flags; only disable this if
    /// you drive PT_DATA_CFG yourself.
    pub fn data_ready_events(mut self, enable: bool) -> Self {
        self.data_ready_events = enable;

        self
    }

    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::WeatherStation => Configuration::default()
                .oversampling(Oversampling::X128),
            Preset::Altimetry => Configuration::default()
                .measurement_mode(MeasurementMode::Altimeter)
                .oversampling(Oversampling::X16),
            Preset::FastSampling => Configuration::default()
                .oversampling(Oversampling::X1),
        }
    }
}

pub enum Preset {
    /// Slow, low-noise barometric readings.
    WeatherStation,
    /// Altitude output with a balanced noise/latency tradeoff.
    Altimetry,
    /// Minimum-latency conversions at the cost of noise.
    FastSampling,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration() {
        let config = Configuration::default();

        assert_eq!(MeasurementMode::Barometer, config.mode);
        assert_eq!(Oversampling::X16, config.oversampling);
        assert_eq!(PowerState::Active, config.power);
        assert!(config.data_ready_events);
    }

    #[test]
    fn builder_overrides() {
        let config = Configuration::default()
            .measurement_mode(MeasurementMode::Altimeter)
            .oversampling(Oversampling::X2)
            .power_state(PowerState::Standby);

        assert_eq!(MeasurementMode::Altimeter, config.mode);
        assert_eq!(Oversampling::X2, config.oversampling);
        assert_eq!(PowerState::Standby, config.power);
    }

    #[test]
    fn presets() {
        let config = Configuration::from_preset(Preset::Altimetry);
        assert_eq!(MeasurementMode::Altimeter, config.mode);

        let config = Configuration::from_preset(Preset::WeatherStation);
        assert_eq!(Oversampling::X128, config.oversampling);
    }
}
