use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the SYSMOD (0x11) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Reports the system mode the device is actually in, as opposed to the SBYB
/// bit in CTRL_REG1 which is the *commanded* mode. Used with
/// [`Mpl3115a2::read::<SysMod>()`] or the convenience method
/// [`Mpl3115a2::system_mode`].
///
/// [`Mpl3115a2::read::<SysMod>()`]: crate::Mpl3115a2::read
/// [`Mpl3115a2::system_mode`]: crate::Mpl3115a2::system_mode
pub struct SysMod;
impl Reg for SysMod { const ADDR: u8 = 0x11; }

/// The operating state reported by SYSMOD.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemMode {
    Standby,
    Active,
}

impl Readable for SysMod {
    type Out = SystemMode;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(if b[0] & 0b1 != 0 { SystemMode::Active } else { SystemMode::Standby })
    }
}
