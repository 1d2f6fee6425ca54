use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the INT_SOURCE (0x12) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Reports which interrupt sources are currently asserted. The bit layout is
/// shared with CTRL_REG4 (enable) and CTRL_REG5 (routing).
///
/// Used with [`Mpl3115a2::read::<IntSource>()`] or the convenience method
/// [`Mpl3115a2::interrupt_source`].
///
/// [`Mpl3115a2::read::<IntSource>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::interrupt_source`]: crate::Mpl3115a2::interrupt_source
pub struct IntSource;
impl Reg for IntSource { const ADDR: u8 = 0x12; }

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptFlags {
    /// Data ready (SRC_DRDY).
    pub data_ready: bool,
    /// FIFO event (SRC_FIFO).
    pub fifo: bool,
    /// Pressure/altitude window (SRC_PW).
    pub pressure_window: bool,
    /// Temperature window (SRC_TW).
    pub temperature_window: bool,
    /// Pressure/altitude threshold (SRC_PTH).
    pub pressure_threshold: bool,
    /// Temperature threshold (SRC_TTH).
    pub temperature_threshold: bool,
    /// Pressure/altitude change (SRC_PCHG).
    pub pressure_change: bool,
    /// Temperature change (SRC_TCHG).
    pub temperature_change: bool,
}

impl Readable for IntSource {
    type Out = InterruptFlags;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(InterruptFlags {
            temperature_change:    b[0] & 0b0000_0001 != 0,
            pressure_change:       b[0] & 0b0000_0010 != 0,
            temperature_threshold: b[0] & 0b0000_0100 != 0,
            pressure_threshold:    b[0] & 0b0000_1000 != 0,
            temperature_window:    b[0] & 0b0001_0000 != 0,
            pressure_window:       b[0] & 0b0010_0000 != 0,
            fifo:                  b[0] & 0b0100_0000 != 0,
            data_ready:            b[0] & 0b1000_0000 != 0,
        })
    }
}
