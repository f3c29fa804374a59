//! Bus simulado para las pruebas de los controladores

use std::collections::{HashMap, VecDeque};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::ErrorKind;

use crate::interface::{BusScan, Interface, InterfaceError};

/// Banco de registros en memoria que implementa `Interface` y `BusScan`
pub struct FakeBus {
    pub address: u8,
    pub present: Vec<u8>,
    pub registers: HashMap<u8, u8>,
    /// Ráfagas devueltas, en orden, por las lecturas de `fifo_register`
    pub fifo: VecDeque<Vec<u8>>,
    pub fifo_register: Option<u8>,
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
    /// Registro cuya lectura falla aunque el resto del bus responda
    pub fail_read: Option<u8>,
}

impl FakeBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            present: vec![address],
            registers: HashMap::new(),
            fifo: VecDeque::new(),
            fifo_register: None,
            writes: Vec::new(),
            fail: false,
            fail_read: None,
        }
    }

    pub fn with_register(mut self, reg: u8, value: u8) -> Self {
        self.registers.insert(reg, value);
        self
    }

    pub fn with_present(mut self, present: &[u8]) -> Self {
        self.present = present.to_vec();
        self
    }

    pub fn written(&self, reg: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, data)| data[0])
            .collect()
    }
}

impl Interface for FakeBus {
    fn address(&self) -> u8 {
        self.address
    }

    fn write_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), InterfaceError> {
        if self.fail {
            return Err(InterfaceError::I2c(ErrorKind::Other));
        }
        self.writes.push((reg, data.to_vec()));
        for (i, value) in data.iter().enumerate() {
            self.registers.insert(reg.wrapping_add(i as u8), *value);
        }
        Ok(())
    }

    fn read_reg(&mut self, reg: u8, data: &mut [u8]) -> Result<(), InterfaceError> {
        if self.fail || self.fail_read == Some(reg) {
            return Err(InterfaceError::I2c(ErrorKind::Other));
        }
        if self.fifo_register == Some(reg) {
            let burst = self.fifo.pop_front().unwrap_or_default();
            for (i, slot) in data.iter_mut().enumerate() {
                *slot = burst.get(i).copied().unwrap_or(0);
            }
            return Ok(());
        }
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = self
                .registers
                .get(&reg.wrapping_add(i as u8))
                .copied()
                .unwrap_or(0);
        }
        Ok(())
    }
}

impl BusScan for FakeBus {
    fn scan(&mut self) -> Vec<u8> {
        if self.fail {
            return Vec::new();
        }
        self.present.clone()
    }
}

/// Retardo que anota cada espera solicitada, en milisegundos
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_ms.push(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
