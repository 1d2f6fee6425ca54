//! Test doubles for driving the state machine and decoders without hardware.
//!
//! [`FakeBus`] is a scripted register file: tests seed read responses per
//! register, and writes are stored so later reads observe them. That makes
//! read-modify-write sequences (the Standby/configure/restore cycle, the
//! one-shot toggle) visible to tests through plain register readback.

use crate::bus::{Bus, MAX_REG_BYTES};
use crate::error::Mpl3115a2Error;
use crate::register::{Readable, Writable};
use embedded_hal_async::delay::DelayNs;
use heapless::LinearMap;

#[derive(Debug)]
enum RegisterValue {
    Data { bytes: [u8; MAX_REG_BYTES], len: usize },
    DontCare,
}

pub struct FakeBus<const N: usize> {
    regs: LinearMap<(u8, usize), RegisterValue, N>,
    scratch: [u8; MAX_REG_BYTES],
}

pub struct FakeDelay {}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, _: u32) {}
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            scratch: [0u8; MAX_REG_BYTES],
        }
    }

    /// Seeds the response returned for reads of register `R`.
    pub fn with_response<R: Readable>(&mut self, data: &[u8]) {
        let mut register_value = [0u8; MAX_REG_BYTES];
        register_value[..data.len()].copy_from_slice(data);
        self.regs
            .insert((R::ADDR, R::N), RegisterValue::Data { bytes: register_value, len: data.len() })
            .unwrap();
    }

    /// Marks register `R` as readable with all-zero content.
    pub fn with_any_response<R: Readable>(&mut self) {
        self.regs.insert((R::ADDR, R::N), RegisterValue::DontCare).unwrap();
    }
}

impl<const N: usize> Default for FakeBus<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = ();

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Mpl3115a2Error<Self::Error>> {
        if let Some(value) = self.regs.get(&(R::ADDR, R::N)) {
            match value {
                RegisterValue::Data { bytes, len } => {
                    if *len == R::N {
                        return R::decode(&bytes[..R::N])
                            .map_err(Mpl3115a2Error::UnexpectedRegisterData);
                    }
                }
                RegisterValue::DontCare => {
                    let data = &self.scratch[0..R::N];
                    return R::decode(data).map_err(Mpl3115a2Error::UnexpectedRegisterData);
                }
            }
        }

        panic!("No mocked value for register 0x{:x} and length {}", R::ADDR, R::N)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Mpl3115a2Error<Self::Error>> {
        let mut bytes = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut bytes[..W::N]);
        self.regs
            .insert((W::ADDR, W::N), RegisterValue::Data { bytes, len: W::N })
            .unwrap();

        Ok(())
    }
}
