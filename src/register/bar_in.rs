use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the BAR_IN_MSB/LSB (0x14 - 0x15) registers.
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write
///
/// The equivalent sea-level pressure input used by the device's internal
/// altitude calculation, big endian, in 2 Pa units. Power-on default is
/// 101,326 Pa (standard atmosphere).
///
/// Used with [`Mpl3115a2::write::<BarIn>()`] or the convenience method
/// [`Mpl3115a2::set_sea_level_pressure`].
///
/// [`Mpl3115a2::write::<BarIn>()`]: crate::Mpl3115a2::write
/// [`Mpl3115a2::set_sea_level_pressure`]: crate::Mpl3115a2::set_sea_level_pressure
pub struct BarIn;
impl Reg for BarIn { const ADDR: u8 = 0x14; }

impl Readable for BarIn {
    type Out = u16;

    const N: usize = 2;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

impl Writable for BarIn {
    type In = u16;
    const N: usize = 2;

    fn encode(v: &Self::In, out: &mut [u8]) {
        out[..2].copy_from_slice(&v.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_in_round_trip() {
        // Power-on default: 101326 Pa / 2 = 50663 = 0xC5E7.
        let mut buffer = [0u8; 2];
        BarIn::encode(&0xC5E7, &mut buffer);
        assert_eq!([0xC5, 0xE7], buffer);

        assert_eq!(0xC5E7, BarIn::decode(&buffer).unwrap());
    }
}
