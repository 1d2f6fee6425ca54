use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the STATUS (0x00) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// With the FIFO disabled (this driver's operating regime), STATUS is an
/// alias of [`DrStatus`] (0x06) and reports the data-ready flags. With the
/// FIFO enabled it aliases F_STATUS instead.
///
/// Used with [`Mpl3115a2::read::<Status>()`] or the convenience method
/// [`Mpl3115a2::status`].
///
/// [`Mpl3115a2::read::<Status>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::status`]: crate::Mpl3115a2::status
pub struct Status;
impl Reg for Status { const ADDR: u8 = 0x00; }

/// Marker struct for the DR_STATUS (0x06) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct DrStatus;
impl Reg for DrStatus { const ADDR: u8 = 0x06; }

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
    tdr: bool,
    pdr: bool,
    ptdr: bool,
    tow: bool,
    pow: bool,
    ptow: bool,
}

impl StatusFlags {
    pub fn new(tdr: bool, pdr: bool, ptdr: bool, tow: bool, pow: bool, ptow: bool) -> Self {
        Self { tdr, pdr, ptdr, tow, pow, ptow }
    }

    /// Is there a new, unread temperature sample in OUT_T?
    ///
    /// This value is cleared when OUT_T_MSB is read.
    pub fn temperature_data_ready(&self) -> bool { self.tdr }

    /// Is there a new, unread pressure/altitude sample in OUT_P?
    ///
    /// This value is cleared when OUT_P_MSB is read.
    pub fn pressure_data_ready(&self) -> bool { self.pdr }

    /// Is there a new pressure/altitude *or* temperature sample?
    pub fn any_data_ready(&self) -> bool { self.ptdr }

    /// Was an unread temperature sample overwritten by a newer one?
    pub fn temperature_overwritten(&self) -> bool { self.tow }

    /// Was an unread pressure/altitude sample overwritten by a newer one?
    pub fn pressure_overwritten(&self) -> bool { self.pow }

    /// Was any unread sample overwritten?
    pub fn any_overwritten(&self) -> bool { self.ptow }
}

fn decode_flags(b: u8) -> StatusFlags {
    StatusFlags {
        tdr:  (b & 0b0000_0010) != 0,
        pdr:  (b & 0b0000_0100) != 0,
        ptdr: (b & 0b0000_1000) != 0,
        tow:  (b & 0b0010_0000) != 0,
        pow:  (b & 0b0100_0000) != 0,
        ptow: (b & 0b1000_0000) != 0,
    }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(decode_flags(b[0]))
    }
}

impl Readable for DrStatus {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(decode_flags(b[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decode() {
        let reg = Status::decode(&[0b0000_0010]).unwrap();
        assert!(reg.tdr);
        assert!(!reg.pdr);

        let reg = Status::decode(&[0b0000_0100]).unwrap();
        assert!(reg.pdr);

        let reg = Status::decode(&[0b0000_1000]).unwrap();
        assert!(reg.ptdr);

        let reg = Status::decode(&[0b1110_0000]).unwrap();
        assert!(reg.tow);
        assert!(reg.pow);
        assert!(reg.ptow);
        assert!(!reg.tdr);
    }

    #[test]
    fn dr_status_matches_status_layout() {
        let a = Status::decode(&[0b0000_0110]).unwrap();
        let b = DrStatus::decode(&[0b0000_0110]).unwrap();

        assert_eq!(a.pressure_data_ready(), b.pressure_data_ready());
        assert_eq!(a.temperature_data_ready(), b.temperature_data_ready());
    }
}
