use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the CTRL_REG3 (0x28) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Electrical configuration of the two interrupt pins: active level and
/// push-pull/open-drain selection.
pub struct CtrlReg3;
impl Reg for CtrlReg3 { const ADDR: u8 = 0x28; }

/// Marker struct for the CTRL_REG4 (0x29) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Interrupt enable mask; a set bit enables that source. Shares its bit
/// layout with INT_SOURCE and CTRL_REG5.
pub struct CtrlReg4;
impl Reg for CtrlReg4 { const ADDR: u8 = 0x29; }

/// Marker struct for the CTRL_REG5 (0x2A) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Interrupt routing: a set bit routes that source to INT1, a clear bit to
/// INT2.
pub struct CtrlReg5;
impl Reg for CtrlReg5 { const ADDR: u8 = 0x2A; }

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntPinConfig {
    /// INT1 active level: `true` = active high (IPOL1).
    pub int1_active_high: bool,
    /// INT1 drive: `true` = open drain (PP_OD1).
    pub int1_open_drain: bool,
    /// INT2 active level: `true` = active high (IPOL2).
    pub int2_active_high: bool,
    /// INT2 drive: `true` = open drain (PP_OD2).
    pub int2_open_drain: bool,
}

impl Readable for CtrlReg3 {
    type Out = IntPinConfig;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(IntPinConfig {
            int2_open_drain:  b[0] & 0b0000_0001 != 0,
            int2_active_high: b[0] & 0b0000_0010 != 0,
            int1_open_drain:  b[0] & 0b0001_0000 != 0,
            int1_active_high: b[0] & 0b0010_0000 != 0,
        })
    }
}

impl Writable for CtrlReg3 {
    type In = IntPinConfig;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u8;
        if v.int2_open_drain { value |= 0b0000_0001; }
        if v.int2_active_high { value |= 0b0000_0010; }
        if v.int1_open_drain { value |= 0b0001_0000; }
        if v.int1_active_high { value |= 0b0010_0000; }

        out[0] = value;
    }
}

/// A set of interrupt sources, used both as the CTRL_REG4 enable mask and
/// the CTRL_REG5 INT1-routing mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptSet(u8);

impl InterruptSet {
    const TEMPERATURE_CHANGE: u8 = 1 << 0;
    const PRESSURE_CHANGE: u8 = 1 << 1;
    const TEMPERATURE_THRESHOLD: u8 = 1 << 2;
    const PRESSURE_THRESHOLD: u8 = 1 << 3;
    const TEMPERATURE_WINDOW: u8 = 1 << 4;
    const PRESSURE_WINDOW: u8 = 1 << 5;
    const FIFO: u8 = 1 << 6;
    const DATA_READY: u8 = 1 << 7;

    /// Creates an empty set.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn data_ready(mut self) -> Self {
        self.0 |= Self::DATA_READY;

        self
    }

    pub fn fifo(mut self) -> Self {
        self.0 |= Self::FIFO;

        self
    }

    pub fn pressure_window(mut self) -> Self {
        self.0 |= Self::PRESSURE_WINDOW;

        self
    }

    pub fn temperature_window(mut self) -> Self {
        self.0 |= Self::TEMPERATURE_WINDOW;

        self
    }

    pub fn pressure_threshold(mut self) -> Self {
        self.0 |= Self::PRESSURE_THRESHOLD;

        self
    }

    pub fn temperature_threshold(mut self) -> Self {
        self.0 |= Self::TEMPERATURE_THRESHOLD;

        self
    }

    pub fn pressure_change(mut self) -> Self {
        self.0 |= Self::PRESSURE_CHANGE;

        self
    }

    pub fn temperature_change(mut self) -> Self {
        self.0 |= Self::TEMPERATURE_CHANGE;

        self
    }

    pub fn none(mut self) -> Self {
        self.0 = 0;

        self
    }

    pub(crate) fn bits(self) -> u8 {
        self.0
    }
}

impl Default for InterruptSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Readable for CtrlReg4 {
    type Out = InterruptSet;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(InterruptSet(b[0]))
    }
}

impl Writable for CtrlReg4 {
    type In = InterruptSet;

    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = v.bits();
    }
}

impl Readable for CtrlReg5 {
    type Out = InterruptSet;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(InterruptSet(b[0]))
    }
}

impl Writable for CtrlReg5 {
    type In = InterruptSet;

    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = v.bits();
    }
}
