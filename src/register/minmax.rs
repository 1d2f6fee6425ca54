use crate::register::out_p::PressureAltitudeSample;
use crate::register::out_t::TemperatureSample;
use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the P_MIN_MSB/CSB/LSB (0x1C - 0x1E) registers.
///
/// - **Length:** 3 bytes
/// - **Access:** Read/Write (write zeros to reset the capture)
///
/// Minimum pressure/altitude captured since power-up or last reset, in the
/// OUT_P sample format.
pub struct PMin;
impl Reg for PMin { const ADDR: u8 = 0x1C; }

/// Marker struct for the T_MIN_MSB/LSB (0x1F - 0x20) registers.
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write (write zeros to reset the capture)
pub struct TMin;
impl Reg for TMin { const ADDR: u8 = 0x1F; }

/// Marker struct for the P_MAX_MSB/CSB/LSB (0x21 - 0x23) registers.
///
/// - **Length:** 3 bytes
/// - **Access:** Read/Write (write zeros to reset the capture)
pub struct PMax;
impl Reg for PMax { const ADDR: u8 = 0x21; }

/// Marker struct for the T_MAX_MSB/LSB (0x24 - 0x25) registers.
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write (write zeros to reset the capture)
pub struct TMax;
impl Reg for TMax { const ADDR: u8 = 0x24; }

impl Readable for PMin {
    type Out = PressureAltitudeSample;
    const N: usize = 3;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(PressureAltitudeSample::new(b[0], b[1], b[2]))
    }
}

impl Readable for PMax {
    type Out = PressureAltitudeSample;
    const N: usize = 3;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(PressureAltitudeSample::new(b[0], b[1], b[2]))
    }
}

impl Readable for TMin {
    type Out = TemperatureSample;
    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(TemperatureSample::new(b[0], b[1]))
    }
}

impl Readable for TMax {
    type Out = TemperatureSample;
    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(TemperatureSample::new(b[0], b[1]))
    }
}

/// Capture-reset input: writing the unit value zeroes the capture registers.
pub struct ClearCapture;

impl Writable for PMin {
    type In = ClearCapture;
    const N: usize = 3;
    fn encode(_: &Self::In, out: &mut [u8]) {
        out[..3].fill(0);
    }
}

impl Writable for PMax {
    type In = ClearCapture;
    const N: usize = 3;
    fn encode(_: &Self::In, out: &mut [u8]) {
        out[..3].fill(0);
    }
}

impl Writable for TMin {
    type In = ClearCapture;
    const N: usize = 2;
    fn encode(_: &Self::In, out: &mut [u8]) {
        out[..2].fill(0);
    }
}

impl Writable for TMax {
    type In = ClearCapture;
    const N: usize = 2;
    fn encode(_: &Self::In, out: &mut [u8]) {
        out[..2].fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_share_sample_formats() {
        let min = PMin::decode(&[0x3D, 0x90, 0x00]).unwrap();
        assert!((min.pressure_pascals() - 63040.0).abs() < 0.01);

        let max = TMax::decode(&[0x1D, 0x00]).unwrap();
        assert_eq!(29.0, max.celsius());
    }

    #[test]
    fn clear_capture_writes_zeros() {
        let mut buffer = [0xFFu8; 3];
        PMax::encode(&ClearCapture, &mut buffer);
        assert_eq!([0, 0, 0], buffer);

        let mut buffer = [0xFFu8; 2];
        TMin::encode(&ClearCapture, &mut buffer);
        assert_eq!([0, 0], buffer);
    }
}
