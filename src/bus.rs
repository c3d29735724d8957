//! Register transport.
//!
//! The driver talks to the BMP280 exclusively through single-register transactions described by
//! the [`Bus`] trait. [`I2c`] and [`Spi`] adapt the `embedded-hal` 1.0 blocking traits; any other
//! transport (or a test double) can be plugged in by implementing [`Bus`].

use crate::error::Bmp280Error;
use crate::register::{Readable, Writable, MAX_REG_BYTES};
use embedded_hal::i2c::SevenBitAddress;

/// A register-addressed transport to a single BMP280.
///
/// Every call performs a live bus transaction. Implementations must not cache or retry.
pub trait Bus {
    type Error;

    /// Writes `[reg, value]` as a single transaction.
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Writes `[reg]` and reads back one byte.
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Reads `R::N` consecutive registers starting at `R::ADDR`, one transaction per byte, and
    /// decodes them.
    ///
    /// Addresses past `0xFF` wrap around to `0x00`.
    fn read<R: Readable>(&mut self) -> Result<R::Out, Bmp280Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES];
        for (offset, byte) in buf[..R::N].iter_mut().enumerate() {
            *byte = self
                .read_register(R::ADDR.wrapping_add(offset as u8))
                .map_err(Bmp280Error::Bus)?;
        }
        trace!("read {} byte(s) from {:#x}", R::N, R::ADDR);

        Ok(R::decode(&buf[..R::N]))
    }

    /// Encodes `v` and writes it to `W::ADDR`.
    fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Bmp280Error<Self::Error>> {
        let value = W::encode(v);
        trace!("write {:#x} to {:#x}", value, W::ADDR);

        self.write_register(W::ADDR, value).map_err(Bmp280Error::Bus)
    }
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this transport is bound to.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Gives back the underlying I2C peripheral.
    pub fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = <I2cType as embedded_hal::i2c::ErrorType>::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg, value])?;

        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut data = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut data)?;

        Ok(data[0])
    }
}

pub struct Spi<SpiType> {
    spi: SpiType,
}

impl<SpiType> Spi<SpiType>
where
    SpiType: embedded_hal::spi::SpiDevice,
{
    // In SPI mode bit 7 of the control byte selects read (1) or write (0).
    const READ: u8 = 0x80;

    pub(crate) fn new(spi: SpiType) -> Self {
        Self { spi }
    }

    /// Gives back the underlying SPI device.
    pub fn release(self) -> SpiType {
        self.spi
    }
}

impl<SpiType> Bus for Spi<SpiType>
where
    SpiType: embedded_hal::spi::SpiDevice,
{
    type Error = <SpiType as embedded_hal::spi::ErrorType>::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[reg & !Self::READ, value])?;

        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        use embedded_hal::spi::Operation;

        let mut data = [0u8; 1];
        self.spi.transaction(
            &mut [Operation::Write(&[reg | Self::READ]), Operation::Read(&mut data)],
        )?;

        Ok(data[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    #[test]
    fn i2c_read_register() {
        let mock = I2cMock::new(&[I2cTransaction::write_read(0x76, vec![0xD0], vec![0x58])]);
        let mut bus = I2c::new(mock, 0x76);

        assert_eq!(0x58, bus.read_register(0xD0).unwrap());

        bus.release().done();
    }

    #[test]
    fn i2c_write_register() {
        let mock = I2cMock::new(&[I2cTransaction::write(0x77, vec![0xE0, 0xB6])]);
        let mut bus = I2c::new(mock, 0x77);

        bus.write_register(0xE0, 0xB6).unwrap();

        bus.release().done();
    }

    #[test]
    fn i2c_error_is_propagated() {
        use embedded_hal::i2c::ErrorKind;

        let mock = I2cMock::new(&[
            I2cTransaction::write_read(0x76, vec![0xF3], vec![0x00]).with_error(ErrorKind::Other)
        ]);
        let mut bus = I2c::new(mock, 0x76);

        assert_eq!(Err(ErrorKind::Other), bus.read_register(0xF3));

        bus.release().done();
    }

    #[test]
    fn spi_read_register() {
        let mock = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0xD0]),
            SpiTransaction::read_vec(vec![0x58]),
            SpiTransaction::transaction_end(),
        ]);
        let mut bus = Spi::new(mock);

        assert_eq!(0x58, bus.read_register(0xD0).unwrap());

        bus.release().done();
    }

    #[test]
    fn typed_read_spans_consecutive_registers() {
        use crate::register::data::TemperatureData;

        let mock = I2cMock::new(&[
            I2cTransaction::write_read(0x76, vec![0xFA], vec![0x7E]),
            I2cTransaction::write_read(0x76, vec![0xFB], vec![0xED]),
            I2cTransaction::write_read(0x76, vec![0xFC], vec![0x00]),
        ]);
        let mut bus = I2c::new(mock, 0x76);

        assert_eq!(519888, bus.read::<TemperatureData>().unwrap());

        bus.release().done();
    }

    #[test]
    fn typed_read_wraps_around_the_address_space() {
        use crate::register::Reg;

        struct LastTwo;
        impl Reg for LastTwo { const ADDR: u8 = 0xFF; }
        impl Readable for LastTwo {
            type Out = [u8; 2];
            const N: usize = 2;
            fn decode(b: &[u8]) -> Self::Out {
                [b[0], b[1]]
            }
        }

        let mock = I2cMock::new(&[
            I2cTransaction::write_read(0x76, vec![0xFF], vec![0xAA]),
            I2cTransaction::write_read(0x76, vec![0x00], vec![0x55]),
        ]);
        let mut bus = I2c::new(mock, 0x76);

        assert_eq!([0xAA, 0x55], bus.read::<LastTwo>().unwrap());

        bus.release().done();
    }

    #[test]
    fn typed_read_wraps_bus_errors() {
        use crate::register::chip_id::ChipId;
        use embedded_hal::i2c::ErrorKind;

        let mock = I2cMock::new(&[
            I2cTransaction::write_read(0x76, vec![0xD0], vec![0x00]).with_error(ErrorKind::Other)
        ]);
        let mut bus = I2c::new(mock, 0x76);

        assert_eq!(Err(Bmp280Error::Bus(ErrorKind::Other)), bus.read::<ChipId>());

        bus.release().done();
    }

    #[test]
    fn spi_write_register() {
        let mock = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x74, 0x27]),
            SpiTransaction::transaction_end(),
        ]);
        let mut bus = Spi::new(mock);

        bus.write_register(0xF4, 0x27).unwrap();

        bus.release().done();
    }
}
