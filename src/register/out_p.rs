use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the OUT_P_MSB/CSB/LSB (0x01 - 0x03) registers.
///
/// The MPL3115A2 auto-increments on multiple reads, so reading 3 bytes from
/// 0x01 fetches the whole sample in one burst. The device latches the output
/// registers while the burst is in progress, so a sample read this way cannot
/// tear. Reading OUT_P_MSB also clears the PDR status flag.
///
/// - **Length:** 3 bytes
/// - **Access:** Read-only
///
/// Used with [`Mpl3115a2::read::<OutP>()`] or the convenience methods
/// [`Mpl3115a2::pressure`] / [`Mpl3115a2::altitude`].
///
/// [`Mpl3115a2::read::<OutP>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::pressure`]: crate::Mpl3115a2::pressure
/// [`Mpl3115a2::altitude`]: crate::Mpl3115a2::altitude
pub struct OutP;
impl Reg for OutP { const ADDR: u8 = 0x01; }

/// One raw pressure/altitude sample.
///
/// The same three bytes hold either format depending on the ALT bit in
/// CTRL_REG1 when the conversion ran; the caller picks the decoder that
/// matches the measurement mode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressureAltitudeSample {
    msb: u8,
    csb: u8,
    lsb: u8,
}

impl PressureAltitudeSample {
    pub fn new(msb: u8, csb: u8, lsb: u8) -> Self {
        Self { msb, csb, lsb }
    }

    /// Decodes the sample as barometric pressure in pascals.
    ///
    /// Unsigned Q18.2 fixed point: the integer part occupies bits 19:2 of the
    /// 20-bit field, the two fraction bits sit in OUT_P_LSB bits 5:4 and are
    /// worth 0.25 Pa each. OUT_P_LSB bits 3:0 are reserved.
    pub fn pressure_pascals(&self) -> f32 {
        let whole = ((self.msb as u32) << 16 | (self.csb as u32) << 8 | self.lsb as u32) >> 6;
        let frac = ((self.lsb >> 4) & 0b11) as f32 / 4.0;

        whole as f32 + frac
    }

    /// Decodes the sample as altitude in meters above the sea-level
    /// reference (BAR_IN).
    ///
    /// Two's-complement Q16.4 fixed point: 16 integer bits in MSB:CSB, the
    /// fraction nibble in OUT_P_LSB bits 7:4, worth 1/16 m each.
    pub fn altitude_meters(&self) -> f32 {
        let raw = (self.msb as u32) << 12 | (self.csb as u32) << 4 | (self.lsb >> 4) as u32;
        let signed = ((raw << 12) as i32) >> 12;

        signed as f32 / 16.0
    }

    #[cfg(feature = "uom")]
    pub fn pressure_uom(&self) -> uom::si::f32::Pressure {
        uom::si::f32::Pressure::new::<uom::si::pressure::pascal>(self.pressure_pascals())
    }

    #[cfg(feature = "uom")]
    pub fn altitude_uom(&self) -> uom::si::f32::Length {
        uom::si::f32::Length::new::<uom::si::length::meter>(self.altitude_meters())
    }
}

impl Readable for OutP {
    type Out = PressureAltitudeSample;

    const N: usize = 3;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(PressureAltitudeSample { msb: b[0], csb: b[1], lsb: b[2] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_decode_datasheet_example() {
        // 0x3D 0x90 0x00 is the datasheet worked example: 63040 Pa, no fraction.
        let sample = OutP::decode(&[0x3D, 0x90, 0x00]).unwrap();

        assert!((sample.pressure_pascals() - 63040.0).abs() < 0.01);
    }

    #[test]
    fn pressure_decode_fraction_bits() {
        // Fraction bits 5:4 of the LSB contribute quarters of a pascal.
        let sample = OutP::decode(&[0x3D, 0x90, 0x30]).unwrap();

        assert!((sample.pressure_pascals() - 63040.75).abs() < 0.01);
    }

    #[test]
    fn altitude_decode_positive() {
        // 1638.9375 m: whole = 0x0666, fraction nibble = 0xF (15/16).
        let sample = OutP::decode(&[0x06, 0x66, 0xF0]).unwrap();

        assert!((sample.altitude_meters() - 1638.9375).abs() < 0.0001);
    }

    #[test]
    fn altitude_decode_negative() {
        // -1.5 m in Q16.4 is 0xFFFE8 across the 20-bit field.
        let sample = OutP::decode(&[0xFF, 0xFE, 0x80]).unwrap();

        assert!((sample.altitude_meters() + 1.5).abs() < 0.0001);
    }

    #[test]
    fn altitude_decode_zero() {
        let sample = OutP::decode(&[0x00, 0x00, 0x00]).unwrap();

        assert_eq!(0.0, sample.altitude_meters());
    }
}
