use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the WHO_AM_I (0x0C) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Reads back the fixed device identifier, [`DEVICE_ID`] (0xC4) on the
/// MPL3115A2. Used with [`Mpl3115a2::read::<WhoAmI>()`] or the convenience
/// method [`Mpl3115a2::is_connected`].
///
/// [`Mpl3115a2::read::<WhoAmI>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::is_connected`]: crate::Mpl3115a2::is_connected
pub struct WhoAmI;
impl Reg for WhoAmI { const ADDR: u8 = 0x0C; }

/// Factory-programmed identifier returned by WHO_AM_I.
pub const DEVICE_ID: u8 = 0xC4;

impl Readable for WhoAmI {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
