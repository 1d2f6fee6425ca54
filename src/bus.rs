//! Register-level transport for the MPL3115A2.
//!
//! The [`Bus`] trait moves whole typed registers: transfer length and
//! address come from the [`Readable`]/[`Writable`] marker, and decode/encode
//! happen at this layer so the driver above only ever sees typed values.

use crate::error::Mpl3115a2Error;
use crate::register::{Readable, Writable};

/// Length of the largest register block on the device (the 3-byte OUT_P and
/// min/max sample groups).
pub const MAX_REG_BYTES: usize = 3;

pub trait Bus {
    type Error;

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Mpl3115a2Error<Self::Error>>;

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Mpl3115a2Error<Self::Error>>;
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: u8,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    type Error = <I2cType as embedded_hal_async::i2c::ErrorType>::Error;

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Mpl3115a2Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES];
        self.i2c
            .write_read(self.address, &[R::ADDR], &mut buf[..R::N])
            .await
            .map_err(Mpl3115a2Error::Bus)?;

        R::decode(&buf[..R::N]).map_err(Mpl3115a2Error::UnexpectedRegisterData)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Mpl3115a2Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES + 1];
        buf[0] = W::ADDR;
        W::encode(v, &mut buf[1..1 + W::N]);

        self.i2c
            .write(self.address, &buf[..1 + W::N])
            .await
            .map_err(Mpl3115a2Error::Bus)?;

        Ok(())
    }
}
