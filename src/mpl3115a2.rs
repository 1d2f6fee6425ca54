use crate::bus::{Bus, I2c};
use crate::config::Configuration;
use crate::error::Mpl3115a2Error;
use crate::register::bar_in::BarIn;
use crate::register::ctrl_reg1::{
    CtrlReg1, CtrlReg1Fields, MeasurementMode, Oversampling, PowerState,
};
use crate::register::ctrl_reg2::CtrlReg2;
use crate::register::delta::{OutPDelta, OutTDelta, PressureAltitudeDelta};
use crate::register::fifo::{FSetup, FSetupFields, FStatus, FifoStatus};
use crate::register::int_ctrl::{CtrlReg3, CtrlReg4, CtrlReg5, IntPinConfig, InterruptSet};
use crate::register::int_source::{IntSource, InterruptFlags};
use crate::register::minmax::{ClearCapture, PMax, PMin, TMax, TMin};
use crate::register::offset::{OffH, OffP, OffT};
use crate::register::out_p::{OutP, PressureAltitudeSample};
use crate::register::out_t::{OutT, TemperatureSample};
use crate::register::pt_data_cfg::{PtDataCfg, PtDataCfgFields};
use crate::register::status::{Status, StatusFlags};
use crate::register::sysmod::{SysMod, SystemMode};
use crate::register::target::{PTgt, PWnd, TTgt, TWnd};
use crate::register::who_am_i::{WhoAmI, DEVICE_ID};
use crate::register::{Readable, Writable};
use crate::units;
use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_async::delay::DelayNs;

/// Type alias for an Mpl3115a2 driver communicating over I2C
type Mpl3115a2I2c<T> = Mpl3115a2<I2c<T>>;

/// The MPL3115A2's fixed 7-bit I2C address.
pub const MPL3115A2_I2C_ADDRESS: SevenBitAddress = 0x60;

/// Interval between data-ready polls.
const POLL_INTERVAL_MS: u32 = 1;

/// Type alias used to simplify return types throughout the driver
pub type Mpl3115a2Result<T, BusError> = Result<T, Mpl3115a2Error<BusError>>;

/// The commanded device state mirrored by the driver.
///
/// Transitions are pure value transformations; the CTRL_REG1 image written
/// to the device is derived from this state, so mode bookkeeping never hides
/// inside register side effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct DeviceState {
    power: PowerState,
    mode: MeasurementMode,
    oversampling: Oversampling,
}

impl DeviceState {
    fn with_power(self, power: PowerState) -> Self {
        Self { power, ..self }
    }

    fn with_mode(self, mode: MeasurementMode) -> Self {
        Self { mode, ..self }
    }

    fn with_oversampling(self, oversampling: Oversampling) -> Self {
        Self { oversampling, ..self }
    }

    fn ctrl_reg1_fields(&self) -> CtrlReg1Fields {
        CtrlReg1Fields {
            power: self.power,
            one_shot: false,
            reset: false,
            oversampling: self.oversampling,
            raw_output: false,
            mode: self.mode,
        }
    }
}

/// Main MPL3115A2 driver struct
pub struct Mpl3115a2<B> {
    bus: B,
    state: DeviceState,
}

impl<T> Mpl3115a2I2c<T>
where
    T: embedded_hal_async::i2c::I2c,
    I2c<T>: Bus,
{
    /// Constructs a new Mpl3115a2 driver instance on the device's fixed I2C
    /// address (0x60).
    ///
    /// This function will:
    /// - Probe for a connected MPL3115A2 by reading WHO_AM_I.
    /// - Write the measurement mode and oversample ratio while in Standby.
    /// - Enable the data-ready event flags (unless disabled in `config`).
    /// - Command the configured power state.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal_async::delay::DelayNs;
    /// # use embedded_hal_async::i2c::I2c;
    /// # use mpl3115a2_rs::Mpl3115a2Result;
    ///  use mpl3115a2_rs::Mpl3115a2;
    ///  use mpl3115a2_rs::config::Configuration;
    /// # async fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Mpl3115a2Result<(), I::Error> {
    ///
    ///  let mut device = Mpl3115a2::new_i2c(i2c, Configuration::default(), &mut delay).await?;
    ///  let pascals = device.pressure(&mut delay).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new_i2c<D: DelayNs>(
        i2c: T,
        config: Configuration,
        delay: &mut D,
    ) -> Mpl3115a2Result<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, MPL3115A2_I2C_ADDRESS), config, delay).await
    }

    /// Constructs a driver instance on a non-default address, for boards that
    /// sit behind an address translator or multiplexer.
    pub async fn new_i2c_with_address<D: DelayNs>(
        i2c: T,
        address: SevenBitAddress,
        config: Configuration,
        delay: &mut D,
    ) -> Mpl3115a2Result<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, address), config, delay).await
    }
}

impl<B> Mpl3115a2<B>
where
    B: Bus,
{
    /// Probes if the device is ready by attempting to read WHO_AM_I
    /// `attempts` times with a 1 ms delay.
    ///
    /// Returns [`Mpl3115a2Error::NotConnected`] if no valid response is
    /// received.
    async fn probe_ready<D: DelayNs>(
        bus: &mut B,
        delay: &mut D,
        attempts: u32,
    ) -> Mpl3115a2Result<(), B::Error> {
        for _ in 0..attempts {
            if let Ok(id) = bus.read::<WhoAmI>().await {
                if id == DEVICE_ID {
                    return Ok(());
                }
            }

            delay.delay_ms(1).await;
        }

        Err(Mpl3115a2Error::NotConnected)
    }

    /// Creates a new driver instance with the given configuration.
    pub(crate) async fn new<D: DelayNs>(
        mut bus: B,
        config: Configuration,
        delay: &mut D,
    ) -> Mpl3115a2Result<Self, B::Error> {
        Self::probe_ready(&mut bus, delay, 5).await?;

        let mut device = Mpl3115a2 {
            bus,
            state: DeviceState {
                power: PowerState::Standby,
                mode: config.mode,
                oversampling: config.oversampling,
            },
        };

        // Configuration happens in Standby; the requested power state is
        // applied last.
        device.write_control().await?;

        if config.data_ready_events {
            device.enable_event_flags().await?;
        }

        if config.power == PowerState::Active {
            device.set_mode_active().await?;
        }

        Ok(device)
    }

    /// Read a register (or fixed-size register block) using a **typed marker**.
    ///
    /// This is the low-level, register-accurate entry point. You pass a marker
    /// type from [`crate::register`] (e.g. `register::ctrl_reg1::CtrlReg1`)
    /// and get back its decoded value (`R::Out`).
    ///
    /// - The bus transfer length and address come from `R::N` and `R::ADDR`.
    /// - Bytes are decoded by `R::decode(...)`, which may return
    ///   [`InvalidRegisterField`](crate::register::InvalidRegisterField) if
    ///   reserved/invalid bit patterns are observed.
    /// - Some registers have **clear-on-read** semantics (the data-ready
    ///   flags clear when OUT_P_MSB/OUT_T_MSB are read). Consult the
    ///   register's docs.
    ///
    /// For most users, the convenience methods (e.g. [`status`](Self::status))
    /// are easier to discover and have concrete return types. This generic is
    /// here when you want full control.
    pub async fn read<R: Readable>(&mut self) -> Mpl3115a2Result<R::Out, B::Error> {
        self.bus.read::<R>().await
    }

    /// Write a register (or fixed-size register block) using a **typed marker**.
    ///
    /// You pass a marker type from [`crate::register`] and a value of its
    /// input type (`W::In`). The value is encoded by `W::encode(...)` and
    /// written to `W::ADDR`.
    ///
    /// This performs a **direct write** of the provided fields. Note that the
    /// ALT and OS fields of CTRL_REG1 only take effect when written in
    /// Standby; the mode/oversampling methods on the driver handle that cycle
    /// (and keep the driver's state mirror coherent), so prefer them over raw
    /// CTRL_REG1 writes.
    pub async fn write<W: Writable>(&mut self, v: &W::In) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<W>(v).await
    }

    /// Determines if an MPL3115A2 is responding by reading WHO_AM_I.
    pub async fn is_connected(&mut self) -> Mpl3115a2Result<bool, B::Error> {
        let id = self.bus.read::<WhoAmI>().await?;

        Ok(id == DEVICE_ID)
    }

    /// Returns the data-ready flags from the STATUS (0x00) register.
    pub async fn status(&mut self) -> Mpl3115a2Result<StatusFlags, B::Error> {
        self.bus.read::<Status>().await
    }

    /// Returns the operating state the device itself reports via SYSMOD,
    /// as opposed to the commanded SBYB bit.
    pub async fn system_mode(&mut self) -> Mpl3115a2Result<SystemMode, B::Error> {
        self.bus.read::<SysMod>().await
    }

    /// The measurement mode the driver last commanded.
    pub fn measurement_mode(&self) -> MeasurementMode {
        self.state.mode
    }

    /// The oversample ratio the driver last commanded.
    pub fn oversampling(&self) -> Oversampling {
        self.state.oversampling
    }

    /// Writes the CTRL_REG1 image derived from the driver's state mirror.
    async fn write_control(&mut self) -> Mpl3115a2Result<(), B::Error> {
        let fields = self.state.ctrl_reg1_fields();

        self.bus.write::<CtrlReg1>(&fields).await
    }

    /// Puts the device into Standby.
    ///
    /// Required before rewriting the ALT/OS fields of CTRL_REG1; the
    /// mode/oversampling setters call this internally. Idempotent: calling it
    /// while already in Standby rewrites the same register image.
    pub async fn set_mode_standby(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.state = self.state.with_power(PowerState::Standby);
        self.write_control().await
    }

    /// Puts the device into Active mode.
    ///
    /// In one-shot operation nothing happens until a conversion is triggered;
    /// with an auto-acquisition interval configured via CTRL_REG2 the device
    /// starts sampling on its own.
    pub async fn set_mode_active(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.state = self.state.with_power(PowerState::Active);
        self.write_control().await
    }

    /// Applies a state transition that requires Standby, then restores the
    /// power state the caller had commanded before.
    async fn reconfigure<F>(&mut self, transition: F) -> Mpl3115a2Result<(), B::Error>
    where
        F: FnOnce(DeviceState) -> DeviceState,
    {
        let restore = self.state.power;

        self.set_mode_standby().await?;
        self.state = transition(self.state);
        self.write_control().await?;

        if restore == PowerState::Active {
            self.set_mode_active().await?;
        }

        Ok(())
    }

    /// Selects barometer output: OUT_P holds pressure in pascals.
    ///
    /// Forces Standby for the register write and restores the previous power
    /// state afterwards.
    pub async fn set_mode_barometer(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.reconfigure(|s| s.with_mode(MeasurementMode::Barometer)).await
    }

    /// Selects altimeter output: OUT_P holds altitude in meters above the
    /// BAR_IN sea-level reference.
    ///
    /// Forces Standby for the register write and restores the previous power
    /// state afterwards.
    pub async fn set_mode_altimeter(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.reconfigure(|s| s.with_mode(MeasurementMode::Altimeter)).await
    }

    /// Sets the oversample ratio from a sample count.
    ///
    /// Only the exact ratios the hardware supports (1, 2, 4, 8, 16, 32, 64,
    /// 128) are accepted; anything else returns
    /// [`Mpl3115a2Error::InvalidConfiguration`]. The OS field shares
    /// CTRL_REG1 with the mode bits, so this also runs the
    /// Standby/write/restore cycle.
    pub async fn set_oversample_rate(&mut self, ratio: u8) -> Mpl3115a2Result<(), B::Error> {
        let oversampling = Oversampling::from_ratio(ratio)
            .map_err(|e| Mpl3115a2Error::InvalidConfiguration(e.0))?;

        self.reconfigure(|s| s.with_oversampling(oversampling)).await
    }

    /// Enables the data-ready event flags in PT_DATA_CFG.
    ///
    /// Without this setup write the PDR/TDR bits in STATUS never set and the
    /// acquisition poll loop cannot observe conversions completing. The
    /// constructor does this by default; the call is idempotent.
    pub async fn enable_event_flags(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<PtDataCfg>(&PtDataCfgFields::all_events()).await
    }

    /// Triggers a single conversion by toggling the OST bit.
    ///
    /// The device starts a conversion on the 0-to-1 transition of OST, so if
    /// the bit is still set from a previous trigger it is cleared first.
    async fn toggle_one_shot(&mut self) -> Mpl3115a2Result<(), B::Error> {
        let mut fields = self.bus.read::<CtrlReg1>().await?;

        if fields.one_shot {
            fields.one_shot = false;
            self.bus.write::<CtrlReg1>(&fields).await?;
        }

        fields.one_shot = true;
        self.bus.write::<CtrlReg1>(&fields).await
    }

    /// Polls STATUS until `ready` observes its flag, or the time budget for
    /// the configured oversample ratio runs out.
    async fn wait_for_status<D: DelayNs>(
        &mut self,
        delay: &mut D,
        ready: fn(&StatusFlags) -> bool,
    ) -> Mpl3115a2Result<(), B::Error> {
        // Twice the typical conversion time, plus slack for bus traffic.
        let budget_ms = self.state.oversampling.typical_conversion_time_ms() * 2 + 10;

        for _ in 0..budget_ms {
            let status = self.bus.read::<Status>().await?;
            if ready(&status) {
                return Ok(());
            }

            delay.delay_ms(POLL_INTERVAL_MS).await;
        }

        Err(Mpl3115a2Error::DeviceNotResponding)
    }

    /// Runs one full acquisition: trigger, wait for PDR, burst-read OUT_P.
    async fn acquire_pressure_sample<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Mpl3115a2Result<PressureAltitudeSample, B::Error> {
        self.toggle_one_shot().await?;
        self.wait_for_status(delay, StatusFlags::pressure_data_ready).await?;

        self.bus.read::<OutP>().await
    }

    /// Measures barometric pressure in pascals.
    ///
    /// Switches the device to barometer mode if it is currently an altimeter,
    /// triggers a one-shot conversion and blocks on the data-ready poll loop
    /// (bounded; a dead sensor yields
    /// [`Mpl3115a2Error::DeviceNotResponding`], not a hang).
    pub async fn pressure<D: DelayNs>(&mut self, delay: &mut D) -> Mpl3115a2Result<f32, B::Error> {
        if self.state.mode != MeasurementMode::Barometer {
            self.set_mode_barometer().await?;
        }

        let sample = self.acquire_pressure_sample(delay).await?;

        Ok(sample.pressure_pascals())
    }

    /// Measures altitude in meters above the BAR_IN sea-level reference.
    ///
    /// Switches the device to altimeter mode if it is currently a barometer;
    /// otherwise behaves like [`pressure`](Self::pressure).
    pub async fn altitude<D: DelayNs>(&mut self, delay: &mut D) -> Mpl3115a2Result<f32, B::Error> {
        if self.state.mode != MeasurementMode::Altimeter {
            self.set_mode_altimeter().await?;
        }

        let sample = self.acquire_pressure_sample(delay).await?;

        Ok(sample.altitude_meters())
    }

    /// Measures altitude in feet.
    pub async fn altitude_feet<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Mpl3115a2Result<f32, B::Error> {
        let meters = self.altitude(delay).await?;

        Ok(units::meters_to_feet(meters))
    }

    /// Measures temperature in degrees Celsius.
    pub async fn temperature<D: DelayNs>(&mut self, delay: &mut D) -> Mpl3115a2Result<f32, B::Error> {
        self.toggle_one_shot().await?;
        self.wait_for_status(delay, StatusFlags::temperature_data_ready).await?;

        let sample = self.bus.read::<OutT>().await?;

        Ok(sample.celsius())
    }

    /// Measures temperature in degrees Fahrenheit.
    pub async fn temperature_fahrenheit<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Mpl3115a2Result<f32, B::Error> {
        let celsius = self.temperature(delay).await?;

        Ok(units::celsius_to_fahrenheit(celsius))
    }

    /// Returns the change in pressure/altitude between the two most recent
    /// samples (OUT_P_DELTA).
    ///
    /// Only meaningful when the data-ready event mode is enabled, which
    /// [`enable_event_flags`](Self::enable_event_flags) does.
    pub async fn pressure_altitude_delta(
        &mut self,
    ) -> Mpl3115a2Result<PressureAltitudeDelta, B::Error> {
        self.bus.read::<OutPDelta>().await
    }

    /// Returns the temperature change between the two most recent samples in
    /// degrees Celsius (OUT_T_DELTA).
    pub async fn temperature_delta(&mut self) -> Mpl3115a2Result<f32, B::Error> {
        let sample = self.bus.read::<OutTDelta>().await?;

        Ok(sample.celsius())
    }

    /// Writes the equivalent sea-level pressure used by the internal altitude
    /// calculation, in pascals. The hardware resolution is 2 Pa; values are
    /// clamped to the representable range (0 - 131070 Pa).
    pub async fn set_sea_level_pressure(&mut self, pascals: f32) -> Mpl3115a2Result<(), B::Error> {
        let raw = (pascals / 2.0).clamp(0.0, 65535.0) as u16;

        self.bus.write::<BarIn>(&raw).await
    }

    /// Reads back the sea-level pressure reference in pascals.
    pub async fn sea_level_pressure(&mut self) -> Mpl3115a2Result<f32, B::Error> {
        let raw = self.bus.read::<BarIn>().await?;

        Ok(raw as f32 * 2.0)
    }

    /// Writes the pressure offset trim (OFF_P), in 4 Pa steps.
    pub async fn set_pressure_offset(&mut self, offset: i8) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<OffP>(&offset).await
    }

    /// Reads the pressure offset trim (OFF_P), in 4 Pa steps.
    pub async fn pressure_offset(&mut self) -> Mpl3115a2Result<i8, B::Error> {
        self.bus.read::<OffP>().await
    }

    /// Writes the temperature offset trim (OFF_T), in 0.0625 degC steps.
    pub async fn set_temperature_offset(&mut self, offset: i8) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<OffT>(&offset).await
    }

    /// Reads the temperature offset trim (OFF_T), in 0.0625 degC steps.
    pub async fn temperature_offset(&mut self) -> Mpl3115a2Result<i8, B::Error> {
        self.bus.read::<OffT>().await
    }

    /// Writes the altitude offset trim (OFF_H), in 1 m steps.
    pub async fn set_altitude_offset(&mut self, offset: i8) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<OffH>(&offset).await
    }

    /// Reads the altitude offset trim (OFF_H), in 1 m steps.
    pub async fn altitude_offset(&mut self) -> Mpl3115a2Result<i8, B::Error> {
        self.bus.read::<OffH>().await
    }

    /// Returns the minimum pressure/altitude captured since power-up or the
    /// last capture reset.
    pub async fn minimum_pressure_sample(
        &mut self,
    ) -> Mpl3115a2Result<PressureAltitudeSample, B::Error> {
        self.bus.read::<PMin>().await
    }

    /// Returns the maximum pressure/altitude captured since power-up or the
    /// last capture reset.
    pub async fn maximum_pressure_sample(
        &mut self,
    ) -> Mpl3115a2Result<PressureAltitudeSample, B::Error> {
        self.bus.read::<PMax>().await
    }

    /// Returns the minimum temperature captured since power-up or the last
    /// capture reset.
    pub async fn minimum_temperature_sample(
        &mut self,
    ) -> Mpl3115a2Result<TemperatureSample, B::Error> {
        self.bus.read::<TMin>().await
    }

    /// Returns the maximum temperature captured since power-up or the last
    /// capture reset.
    pub async fn maximum_temperature_sample(
        &mut self,
    ) -> Mpl3115a2Result<TemperatureSample, B::Error> {
        self.bus.read::<TMax>().await
    }

    /// Zeroes all four min/max capture register groups.
    pub async fn clear_min_max_captures(&mut self) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<PMin>(&ClearCapture).await?;
        self.bus.write::<PMax>(&ClearCapture).await?;
        self.bus.write::<TMin>(&ClearCapture).await?;
        self.bus.write::<TMax>(&ClearCapture).await?;

        Ok(())
    }

    /// Sets the pressure/altitude alarm target (P_TGT). Units follow the
    /// measurement mode: 2 Pa/LSB as a barometer, 1 m/LSB as an altimeter.
    pub async fn set_pressure_target(&mut self, target: u16) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<PTgt>(&target).await
    }

    /// Sets the pressure/altitude alarm window width (P_WND).
    pub async fn set_pressure_window(&mut self, window: u16) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<PWnd>(&window).await
    }

    /// Sets the temperature alarm target (T_TGT) in whole degrees Celsius.
    pub async fn set_temperature_target(&mut self, target: i8) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<TTgt>(&target).await
    }

    /// Sets the temperature alarm window width (T_WND) in whole degrees.
    pub async fn set_temperature_window(&mut self, window: u8) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<TWnd>(&window).await
    }

    /// Enables the given interrupt sources (CTRL_REG4).
    pub async fn enable_interrupts(&mut self, ints: InterruptSet) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<CtrlReg4>(&ints).await
    }

    /// Routes the given interrupt sources to the INT1 pin; everything else
    /// goes to INT2 (CTRL_REG5).
    pub async fn route_interrupts_to_int1(
        &mut self,
        ints: InterruptSet,
    ) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<CtrlReg5>(&ints).await
    }

    /// Configures the electrical behavior of the two interrupt pins
    /// (CTRL_REG3).
    pub async fn configure_interrupt_pins(
        &mut self,
        config: IntPinConfig,
    ) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<CtrlReg3>(&config).await
    }

    /// Returns the currently asserted interrupt sources (INT_SOURCE).
    pub async fn interrupt_source(&mut self) -> Mpl3115a2Result<InterruptFlags, B::Error> {
        self.bus.read::<IntSource>().await
    }

    /// Returns the FIFO fill level and overflow/watermark flags (F_STATUS).
    pub async fn fifo_status(&mut self) -> Mpl3115a2Result<FifoStatus, B::Error> {
        self.bus.read::<FStatus>().await
    }

    /// Writes the FIFO mode and watermark (F_SETUP).
    ///
    /// Enabling the FIFO re-points the STATUS (0x00) alias at F_STATUS, so
    /// the one-shot read methods on this driver assume it stays disabled.
    pub async fn configure_fifo(&mut self, setup: FSetupFields) -> Mpl3115a2Result<(), B::Error> {
        self.bus.write::<FSetup>(&setup).await
    }

    /// Sets the auto-acquisition interval exponent in CTRL_REG2: in Active
    /// mode the device samples every 2^`step` seconds on its own. `step` must
    /// be 0..=15.
    pub async fn set_auto_acquisition_step(&mut self, step: u8) -> Mpl3115a2Result<(), B::Error> {
        if step > 0b1111 {
            return Err(Mpl3115a2Error::InvalidConfiguration(step));
        }

        let mut fields = self.bus.read::<CtrlReg2>().await?;
        fields.time_step = step;

        self.bus.write::<CtrlReg2>(&fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::ctrl_reg2::CtrlReg2Fields;
    use crate::testing::{FakeBus, FakeDelay};

    fn connected_bus() -> FakeBus<24> {
        let mut bus: FakeBus<24> = FakeBus::new();
        bus.with_response::<WhoAmI>(&[0xC4]);

        bus
    }

    #[tokio::test]
    async fn new_probes_who_am_i() {
        let mut bus: FakeBus<24> = FakeBus::new();
        bus.with_response::<WhoAmI>(&[0x00]);

        let result = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {}).await;

        assert!(matches!(result, Err(Mpl3115a2Error::NotConnected)));
    }

    #[tokio::test]
    async fn new_applies_configuration() {
        let bus = connected_bus();

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(PowerState::Active, ctrl.power);
        assert_eq!(MeasurementMode::Barometer, ctrl.mode);
        assert_eq!(Oversampling::X16, ctrl.oversampling);

        let events = device.read::<PtDataCfg>().await.unwrap();
        assert!(events.temperature_event);
        assert!(events.pressure_event);
        assert!(events.data_ready_event_mode);
    }

    #[tokio::test]
    async fn new_with_standby_config_stays_standby() {
        let bus = connected_bus();
        let config = Configuration::default().power_state(PowerState::Standby);

        let mut device = Mpl3115a2::new(bus, config, &mut FakeDelay {}).await.unwrap();

        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(PowerState::Standby, ctrl.power);
    }

    #[tokio::test]
    async fn oversample_rate_readback() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        for (ratio, field) in [(1u8, 0b000u8), (2, 0b001), (4, 0b010), (8, 0b011),
                               (16, 0b100), (32, 0b101), (64, 0b110), (128, 0b111)] {
            device.set_oversample_rate(ratio).await.unwrap();

            let ctrl = device.read::<CtrlReg1>().await.unwrap();
            assert_eq!(field, ctrl.oversampling.field());
        }
    }

    #[tokio::test]
    async fn oversample_rate_rejects_invalid_ratios() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        for ratio in [0u8, 3, 5, 129, 255] {
            let result = device.set_oversample_rate(ratio).await;
            assert!(matches!(result, Err(Mpl3115a2Error::InvalidConfiguration(r)) if r == ratio));
        }

        // A rejected ratio must not disturb the configured one.
        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(Oversampling::X16, ctrl.oversampling);
    }

    #[tokio::test]
    async fn standby_is_idempotent() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        device.set_mode_standby().await.unwrap();
        let first = device.read::<CtrlReg1>().await.unwrap();

        device.set_mode_standby().await.unwrap();
        let second = device.read::<CtrlReg1>().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(PowerState::Standby, second.power);
    }

    #[tokio::test]
    async fn mode_change_restores_active_state() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        // Configured Active; switching measurement mode must end Active.
        device.set_mode_altimeter().await.unwrap();

        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(MeasurementMode::Altimeter, ctrl.mode);
        assert_eq!(PowerState::Active, ctrl.power);
    }

    #[tokio::test]
    async fn mode_change_preserves_standby_state() {
        let bus = connected_bus();
        let config = Configuration::default().power_state(PowerState::Standby);
        let mut device = Mpl3115a2::new(bus, config, &mut FakeDelay {}).await.unwrap();

        device.set_mode_altimeter().await.unwrap();

        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(MeasurementMode::Altimeter, ctrl.mode);
        assert_eq!(PowerState::Standby, ctrl.power);
    }

    #[tokio::test]
    async fn pressure_read_decodes_datasheet_sample() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0b0000_0110]);
        bus.with_response::<OutP>(&[0x3D, 0x90, 0x00]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let pascals = device.pressure(&mut FakeDelay {}).await.unwrap();
        assert!((pascals - 63040.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn altitude_read_switches_mode_and_decodes() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0b0000_0110]);
        bus.with_response::<OutP>(&[0x06, 0x66, 0xF0]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let meters = device.altitude(&mut FakeDelay {}).await.unwrap();
        assert!((meters - 1638.9375).abs() < 0.0001);

        // The convenience read flipped the device into altimeter mode.
        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert_eq!(MeasurementMode::Altimeter, ctrl.mode);
        assert_eq!(PowerState::Active, ctrl.power);
    }

    #[tokio::test]
    async fn temperature_read_decodes_datasheet_sample() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0b0000_0110]);
        bus.with_response::<OutT>(&[0x1D, 0x00]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let celsius = device.temperature(&mut FakeDelay {}).await.unwrap();
        assert_eq!(29.0, celsius);
    }

    #[tokio::test]
    async fn derived_unit_reads_match_pure_conversions() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0b0000_0110]);
        bus.with_response::<OutP>(&[0x06, 0x66, 0xF0]);
        bus.with_response::<OutT>(&[0x17, 0x40]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let meters = device.altitude(&mut FakeDelay {}).await.unwrap();
        let feet = device.altitude_feet(&mut FakeDelay {}).await.unwrap();
        assert_eq!(meters * 3.28084, feet);

        let celsius = device.temperature(&mut FakeDelay {}).await.unwrap();
        let fahrenheit = device.temperature_fahrenheit(&mut FakeDelay {}).await.unwrap();
        assert_eq!(celsius * 9.0 / 5.0 + 32.0, fahrenheit);
    }

    #[tokio::test]
    async fn poll_loop_times_out_when_never_ready() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0x00]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        let result = device.pressure(&mut FakeDelay {}).await;
        assert!(matches!(result, Err(Mpl3115a2Error::DeviceNotResponding)));
    }

    #[tokio::test]
    async fn one_shot_reasserts_after_a_stale_trigger() {
        let mut bus = connected_bus();
        bus.with_response::<Status>(&[0b0000_0110]);
        bus.with_response::<OutP>(&[0x3D, 0x90, 0x00]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        // The FakeBus never auto-clears OST, so the second acquisition takes
        // the clear-then-set path.
        device.pressure(&mut FakeDelay {}).await.unwrap();
        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert!(ctrl.one_shot);

        device.pressure(&mut FakeDelay {}).await.unwrap();
        let ctrl = device.read::<CtrlReg1>().await.unwrap();
        assert!(ctrl.one_shot);
    }

    #[tokio::test]
    async fn sea_level_pressure_round_trip() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        device.set_sea_level_pressure(101_326.0).await.unwrap();
        assert_eq!(101_326.0, device.sea_level_pressure().await.unwrap());
    }

    #[tokio::test]
    async fn offset_round_trips() {
        let bus = connected_bus();
        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        device.set_pressure_offset(-32).await.unwrap();
        assert_eq!(-32, device.pressure_offset().await.unwrap());

        device.set_temperature_offset(16).await.unwrap();
        assert_eq!(16, device.temperature_offset().await.unwrap());

        device.set_altitude_offset(-5).await.unwrap();
        assert_eq!(-5, device.altitude_offset().await.unwrap());
    }

    #[tokio::test]
    async fn auto_acquisition_step_validates_range() {
        let mut bus = connected_bus();
        bus.with_response::<CtrlReg2>(&[0x00]);

        let mut device = Mpl3115a2::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap();

        device.set_auto_acquisition_step(4).await.unwrap();
        let fields: CtrlReg2Fields = device.read::<CtrlReg2>().await.unwrap();
        assert_eq!(4, fields.time_step);

        let result = device.set_auto_acquisition_step(16).await;
        assert!(matches!(result, Err(Mpl3115a2Error::InvalidConfiguration(16))));
    }
}
