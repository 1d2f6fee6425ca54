use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the PT_DATA_CFG (0x13) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Configures the data-ready event flags. Until the event flags are enabled
/// here, the PDR/TDR bits in STATUS never set and data-ready polling sees
/// nothing. Used with [`Mpl3115a2::write::<PtDataCfg>()`] or the convenience
/// method [`Mpl3115a2::enable_event_flags`].
///
/// [`Mpl3115a2::write::<PtDataCfg>()`]: crate::Mpl3115a2::write
/// [`Mpl3115a2::enable_event_flags`]: crate::Mpl3115a2::enable_event_flags
pub struct PtDataCfg;
impl Reg for PtDataCfg { const ADDR: u8 = 0x13; }

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PtDataCfgFields {
    /// Raise an event on a new temperature sample (TDEFE).
    pub temperature_event: bool,
    /// Raise an event on a new pressure/altitude sample (PDEFE).
    pub pressure_event: bool,
    /// Data-ready event mode (DREM): also update the OUT_*_DELTA registers.
    pub data_ready_event_mode: bool,
}

impl PtDataCfgFields {
    /// All event flags enabled, the configuration any polling driver wants.
    pub fn all_events() -> Self {
        Self {
            temperature_event: true,
            pressure_event: true,
            data_ready_event_mode: true,
        }
    }
}

impl Readable for PtDataCfg {
    type Out = PtDataCfgFields;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(PtDataCfgFields {
            temperature_event:     b[0] & 0b001 != 0,
            pressure_event:        b[0] & 0b010 != 0,
            data_ready_event_mode: b[0] & 0b100 != 0,
        })
    }
}

impl Writable for PtDataCfg {
    type In = PtDataCfgFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u8;
        if v.temperature_event { value |= 0b001; }
        if v.pressure_event { value |= 0b010; }
        if v.data_ready_event_mode { value |= 0b100; }

        out[0] = value;
    }
}
