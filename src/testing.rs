use crate::bus::Bus;
use crate::register::calibration::{Calibration, CalibrationNvm};
use crate::register::chip_id::{ChipId, BMP280_CHIP_ID};
use crate::register::config::Config;
use crate::register::ctrl_meas::CtrlMeas;
use crate::register::data::{PressureData, TemperatureData};
use crate::register::reset::Reset;
use crate::register::status::Status;
use crate::register::{Reg, MAX_REG_BYTES};
use heapless::{LinearMap, Vec};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FakeBusError;

/// Counts how many fake buses were opened and how many were dropped again.
#[derive(Debug, Default)]
pub struct BusLifecycle {
    opened: Cell<usize>,
    closed: Cell<usize>,
}

impl BusLifecycle {
    pub fn opened(&self) -> usize { self.opened.get() }
    pub fn closed(&self) -> usize { self.closed.get() }
}

/// In-memory register file behaving like a BMP280.
///
/// - Writing `0xB6` to RESET clears CTRL_MEAS and CONFIG, other values are ignored.
/// - ID, STATUS, the data registers and the calibration block ignore writes.
/// - After `fail_after` successful transactions every further transaction fails.
pub struct FakeBus {
    regs: LinearMap<u8, u8, 64>,
    writes: Vec<(u8, u8), 64>,
    transactions: usize,
    fail_after: Option<usize>,
    lifecycle: Rc<BusLifecycle>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::with_lifecycle(Rc::new(BusLifecycle::default()))
    }

    pub fn with_lifecycle(lifecycle: Rc<BusLifecycle>) -> Self {
        lifecycle.opened.set(lifecycle.opened.get() + 1);

        let mut bus = FakeBus {
            regs: LinearMap::new(),
            writes: Vec::new(),
            transactions: 0,
            fail_after: None,
            lifecycle,
        };
        bus.set_register(ChipId::ADDR, BMP280_CHIP_ID);

        bus
    }

    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.regs.insert(reg, value).unwrap();
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.regs.get(&reg).copied().unwrap_or(0)
    }

    pub fn with_calibration(mut self, nvm: &CalibrationNvm) -> Self {
        let words = [
            nvm.dig_t1, nvm.dig_t2 as u16, nvm.dig_t3 as u16,
            nvm.dig_p1, nvm.dig_p2 as u16, nvm.dig_p3 as u16,
            nvm.dig_p4 as u16, nvm.dig_p5 as u16, nvm.dig_p6 as u16,
            nvm.dig_p7 as u16, nvm.dig_p8 as u16, nvm.dig_p9 as u16,
        ];

        let mut block = [0u8; MAX_REG_BYTES];
        for (chunk, word) in block.chunks_mut(2).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        for (offset, byte) in block.iter().enumerate() {
            self.set_register(Calibration::ADDR + offset as u8, *byte);
        }

        self
    }

    pub fn with_raw_temperature(mut self, adc_t: u32) -> Self {
        self.set_adc(TemperatureData::ADDR, adc_t);

        self
    }

    pub fn with_raw_pressure(mut self, adc_p: u32) -> Self {
        self.set_adc(PressureData::ADDR, adc_p);

        self
    }

    pub fn with_status(mut self, status: u8) -> Self {
        self.set_register(Status::ADDR, status);

        self
    }

    pub fn failing_after(mut self, transactions: usize) -> Self {
        self.fail_after = Some(transactions);

        self
    }

    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub fn transactions(&self) -> usize {
        self.transactions
    }

    fn set_adc(&mut self, addr: u8, raw: u32) {
        self.set_register(addr, (raw >> 12) as u8);
        self.set_register(addr + 1, (raw >> 4) as u8);
        self.set_register(addr + 2, (raw & 0x0F) as u8);
    }

    fn begin_transaction(&mut self) -> Result<(), FakeBusError> {
        if self.fail_after.is_some_and(|limit| self.transactions >= limit) {
            return Err(FakeBusError);
        }
        self.transactions += 1;

        Ok(())
    }

    fn is_read_only(reg: u8) -> bool {
        let calibration_end = Calibration::ADDR + MAX_REG_BYTES as u8;

        reg == ChipId::ADDR
            || reg == Status::ADDR
            || (PressureData::ADDR..TemperatureData::ADDR + 3).contains(&reg)
            || (Calibration::ADDR..calibration_end).contains(&reg)
    }
}

impl Drop for FakeBus {
    fn drop(&mut self) {
        self.lifecycle.closed.set(self.lifecycle.closed.get() + 1);
    }
}

impl Bus for FakeBus {
    type Error = FakeBusError;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.begin_transaction()?;
        self.writes.push((reg, value)).unwrap();

        if reg == Reset::ADDR {
            if value == 0xB6 {
                self.set_register(CtrlMeas::ADDR, 0);
                self.set_register(Config::ADDR, 0);
            }
        } else if !Self::is_read_only(reg) {
            self.set_register(reg, value);
        }

        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        self.begin_transaction()?;

        Ok(self.register(reg))
    }
}
