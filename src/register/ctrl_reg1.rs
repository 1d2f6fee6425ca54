use crate::register::{InvalidRegisterField, Readable, Reg, UnexpectedValue, Writable};

/// Marker struct for the CTRL_REG1 (0x26) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// The primary control register: measurement mode select (ALT), oversample
/// ratio (OS), software reset (RST), one-shot trigger (OST) and the
/// standby/active bit (SBYB). The ALT and OS fields may only be changed
/// while SBYB is clear; the driver's mode setters take care of that cycle.
///
/// Used with [`Mpl3115a2::read::<CtrlReg1>()`] / [`Mpl3115a2::write::<CtrlReg1>()`],
/// or through the mode and oversampling methods on the driver.
///
/// [`Mpl3115a2::read::<CtrlReg1>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::write::<CtrlReg1>()`]: crate::Mpl3115a2::write
pub struct CtrlReg1;
impl Reg for CtrlReg1 { const ADDR: u8 = 0x26; }

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlReg1Fields {
    pub power: PowerState,
    pub one_shot: bool,
    pub reset: bool,
    pub oversampling: Oversampling,
    pub raw_output: bool,
    pub mode: MeasurementMode,
}

impl Readable for CtrlReg1 {
    type Out = CtrlReg1Fields;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        let v = b[0];
        Ok(CtrlReg1Fields {
            power:        if v & 0b0000_0001 != 0 { PowerState::Active } else { PowerState::Standby },
            one_shot:     v & 0b0000_0010 != 0,
            reset:        v & 0b0000_0100 != 0,
            oversampling: Oversampling::from_field((v >> 3) & 0b111),
            raw_output:   v & 0b0100_0000 != 0,
            mode:         if v & 0b1000_0000 != 0 { MeasurementMode::Altimeter } else { MeasurementMode::Barometer },
        })
    }
}

impl Writable for CtrlReg1 {
    type In = CtrlReg1Fields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u8;
        if v.power == PowerState::Active {
            value |= 0b0000_0001;
        }
        if v.one_shot {
            value |= 0b0000_0010;
        }
        if v.reset {
            value |= 0b0000_0100;
        }
        value |= v.oversampling.field() << 3;
        if v.raw_output {
            value |= 0b0100_0000;
        }
        if v.mode == MeasurementMode::Altimeter {
            value |= 0b1000_0000;
        }
        out[0] = value;
    }
}

/// Commanded power state, the SBYB bit.
///
/// Standby is the default after power-on reset. Most control fields can only
/// be rewritten in Standby.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Standby,
    Active,
}

/// Measurement mode select, the ALT bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementMode {
    /// OUT_P holds barometric pressure in pascals.
    Barometer,
    /// OUT_P holds altitude in meters above the BAR_IN reference.
    Altimeter,
}

/// Oversample ratio, the 3-bit OS field.
///
/// The device averages 2^OS internal samples per reported value; each step
/// roughly doubles the conversion time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    X1,
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
}

impl Oversampling {
    pub(crate) fn from_field(field: u8) -> Self {
        match field & 0b111 {
            0b000 => Oversampling::X1,
            0b001 => Oversampling::X2,
            0b010 => Oversampling::X4,
            0b011 => Oversampling::X8,
            0b100 => Oversampling::X16,
            0b101 => Oversampling::X32,
            0b110 => Oversampling::X64,
            _ => Oversampling::X128,
        }
    }

    pub(crate) fn field(self) -> u8 {
        match self {
            Oversampling::X1 => 0b000,
            Oversampling::X2 => 0b001,
            Oversampling::X4 => 0b010,
            Oversampling::X8 => 0b011,
            Oversampling::X16 => 0b100,
            Oversampling::X32 => 0b101,
            Oversampling::X64 => 0b110,
            Oversampling::X128 => 0b111,
        }
    }

    /// Maps a sample-count ratio to its OS encoding. Only the exact powers of
    /// two the hardware supports are accepted.
    pub fn from_ratio(ratio: u8) -> Result<Self, UnexpectedValue> {
        match ratio {
            1 => Ok(Oversampling::X1),
            2 => Ok(Oversampling::X2),
            4 => Ok(Oversampling::X4),
            8 => Ok(Oversampling::X8),
            16 => Ok(Oversampling::X16),
            32 => Ok(Oversampling::X32),
            64 => Ok(Oversampling::X64),
            128 => Ok(Oversampling::X128),
            other => Err(UnexpectedValue(other)),
        }
    }

    /// The number of internal samples averaged per reported value.
    pub fn ratio(self) -> u8 {
        1 << self.field()
    }

    /// Typical one-shot conversion time at this ratio, from the datasheet's
    /// minimum-time-between-samples table.
    pub fn typical_conversion_time_ms(self) -> u32 {
        (1u32 << self.field()) * 4 + 2
    }
}
