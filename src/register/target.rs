use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the P_TGT_MSB/LSB (0x16 - 0x17) registers.
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write
///
/// Pressure/altitude alarm target, big endian. Units follow the measurement
/// mode: 2 Pa per LSB in barometer mode, 1 m per LSB (two's complement) in
/// altimeter mode.
pub struct PTgt;
impl Reg for PTgt { const ADDR: u8 = 0x16; }

/// Marker struct for the T_TGT (0x18) register.
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Temperature alarm target in whole degrees Celsius, two's complement.
pub struct TTgt;
impl Reg for TTgt { const ADDR: u8 = 0x18; }

/// Marker struct for the P_WND_MSB/LSB (0x19 - 0x1A) registers.
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write
///
/// Width of the pressure/altitude alarm window around P_TGT, same units as
/// the target.
pub struct PWnd;
impl Reg for PWnd { const ADDR: u8 = 0x19; }

/// Marker struct for the T_WND (0x1B) register.
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
pub struct TWnd;
impl Reg for TWnd { const ADDR: u8 = 0x1B; }

impl Readable for PTgt {
    type Out = u16;
    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

impl Writable for PTgt {
    type In = u16;
    const N: usize = 2;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[..2].copy_from_slice(&v.to_be_bytes());
    }
}

impl Readable for TTgt {
    type Out = i8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0] as i8)
    }
}

impl Writable for TTgt {
    type In = i8;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = *v as u8;
    }
}

impl Readable for PWnd {
    type Out = u16;
    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

impl Writable for PWnd {
    type In = u16;
    const N: usize = 2;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[..2].copy_from_slice(&v.to_be_bytes());
    }
}

impl Readable for TWnd {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

impl Writable for TWnd {
    type In = u8;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = *v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_target_round_trip() {
        let mut buffer = [0u8; 2];
        PTgt::encode(&0x1234, &mut buffer);
        assert_eq!([0x12, 0x34], buffer);

        assert_eq!(0x1234, PTgt::decode(&buffer).unwrap());
    }

    #[test]
    fn temperature_target_is_signed() {
        let mut buffer = [0u8; 1];
        TTgt::encode(&-10, &mut buffer);
        assert_eq!([0xF6], buffer);

        assert_eq!(-10, TTgt::decode(&buffer).unwrap());
    }

    #[test]
    fn window_round_trip() {
        let mut buffer = [0u8; 2];
        PWnd::encode(&0x00FF, &mut buffer);
        assert_eq!(0x00FF, PWnd::decode(&buffer).unwrap());

        let mut buffer = [0u8; 1];
        TWnd::encode(&5, &mut buffer);
        assert_eq!(5, TWnd::decode(&buffer).unwrap());
    }
}
