use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the CTRL_REG2 (0x27) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Auto-acquisition configuration: the ST field sets the interval between
/// automatic samples in Active mode to 2^ST seconds, ALARM_SEL selects
/// whether the alarm targets compare against OUT_P/OUT_T or the targets
/// offset by the windows, and LOAD_OUTPUT copies the next sample into the
/// target registers.
pub struct CtrlReg2;
impl Reg for CtrlReg2 { const ADDR: u8 = 0x27; }

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlReg2Fields {
    /// Auto-acquisition time step exponent, 0..=15 (interval = 2^ST seconds).
    pub time_step: u8,
    /// ALARM_SEL bit.
    pub alarm_from_target: bool,
    /// LOAD_OUTPUT bit.
    pub load_output: bool,
}

impl Readable for CtrlReg2 {
    type Out = CtrlReg2Fields;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(CtrlReg2Fields {
            time_step:         b[0] & 0b0000_1111,
            alarm_from_target: b[0] & 0b0001_0000 != 0,
            load_output:       b[0] & 0b0010_0000 != 0,
        })
    }
}

impl Writable for CtrlReg2 {
    type In = CtrlReg2Fields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = v.time_step & 0b0000_1111;
        if v.alarm_from_target { value |= 0b0001_0000; }
        if v.load_output { value |= 0b0010_0000; }

        out[0] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_reg2_round_trip() {
        let mut buffer = [0u8; 1];
        CtrlReg2::encode(&CtrlReg2Fields {
            time_step: 0b1010,
            alarm_from_target: true,
            load_output: false,
        }, &mut buffer);
        assert_eq!([0b0001_1010], buffer);

        let reg = CtrlReg2::decode(&buffer).unwrap();
        assert_eq!(0b1010, reg.time_step);
        assert!(reg.alarm_from_target);
        assert!(!reg.load_output);
    }

    #[test]
    fn ctrl_reg2_encode_masks_time_step() {
        let mut buffer = [0u8; 1];
        CtrlReg2::encode(&CtrlReg2Fields {
            time_step: 0xFF,
            alarm_from_target: false,
            load_output: false,
        }, &mut buffer);

        assert_eq!([0b0000_1111], buffer);
    }
}
