//! Módulo de abstracción para la comunicación con los sensores por bus I2C
//!
//! Un `Interface` representa un canal de registros hacia un único dispositivo:
//! la dirección de destino queda fijada al construirlo y todas las lecturas y
//! escrituras de registros van dirigidas a ella.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use thiserror::Error;

/// Primera dirección de 7 bits no reservada
pub const FIRST_SCAN_ADDRESS: u8 = 0x08;
/// Última dirección de 7 bits no reservada
pub const LAST_SCAN_ADDRESS: u8 = 0x77;

/// Longitud máxima de datos en una escritura de registros
const MAX_WRITE_LEN: usize = 16;

/// Error genérico para interfaces de comunicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterfaceError {
    /// Error de comunicación I2C
    #[error("I2C communication error: {0:?}")]
    I2c(ErrorKind),
    /// Parámetro inválido
    #[error("invalid interface parameter")]
    InvalidParameter,
}

/// Registro de identidad de un dispositivo y los valores que se aceptan en él
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// Dirección del registro de identidad
    pub register: u8,
    /// Valores válidos para el registro
    pub accepted: &'static [u8],
}

impl Identity {
    /// Indica si el valor leído corresponde al dispositivo esperado
    pub fn matches(&self, value: u8) -> bool {
        self.accepted.contains(&value)
    }
}

/// Trait para abstraer la comunicación con un dispositivo de registros
pub trait Interface {
    /// Dirección fija del dispositivo en el bus
    fn address(&self) -> u8;

    /// Escribe uno o varios registros consecutivos
    fn write_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), InterfaceError>;

    /// Lee uno o varios registros consecutivos
    fn read_reg(&mut self, reg: u8, data: &mut [u8]) -> Result<(), InterfaceError>;

    /// Lee un único registro
    fn read_register(&mut self, reg: u8) -> Result<u8, InterfaceError> {
        let mut data = [0u8];
        self.read_reg(reg, &mut data)?;
        Ok(data[0])
    }

    /// Escribe un único registro
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), InterfaceError> {
        self.write_reg(reg, &[value])
    }

    /// Lectura en ráfaga de `N` registros a partir de `reg`
    fn read_registers<const N: usize>(&mut self, reg: u8) -> Result<[u8; N], InterfaceError>
    where
        Self: Sized,
    {
        let mut data = [0u8; N];
        self.read_reg(reg, &mut data)?;
        Ok(data)
    }

    /// Comprueba el registro de identidad. Nunca devuelve error: cualquier fallo
    /// de comunicación se trata como dispositivo ausente.
    fn check_connection(&mut self, identity: &Identity) -> bool {
        match self.read_register(identity.register) {
            Ok(value) => identity.matches(value),
            Err(e) => {
                log::debug!(
                    "no identity response from 0x{:02X}: {}",
                    self.address(),
                    e
                );
                false
            }
        }
    }
}

/// Capacidad de listar las direcciones presentes en el bus
pub trait BusScan {
    /// Devuelve las direcciones que responden, en orden ascendente
    fn scan(&mut self) -> Vec<u8>;
}

/// Implementación de Interface para I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Interface for I2cInterface<I2C> {
    fn address(&self) -> u8 {
        self.addr
    }

    fn write_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), InterfaceError> {
        if data.len() > MAX_WRITE_LEN {
            return Err(InterfaceError::InvalidParameter);
        }

        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = reg;
        buffer[1..data.len() + 1].copy_from_slice(data);

        self.i2c
            .write(self.addr, &buffer[..data.len() + 1])
            .map_err(|e| InterfaceError::I2c(e.kind()))
    }

    fn read_reg(&mut self, reg: u8, data: &mut [u8]) -> Result<(), InterfaceError> {
        if data.is_empty() {
            return Err(InterfaceError::InvalidParameter);
        }

        self.i2c
            .write_read(self.addr, &[reg], data)
            .map_err(|e| InterfaceError::I2c(e.kind()))
    }
}

impl<I2C: I2c> BusScan for I2cInterface<I2C> {
    fn scan(&mut self) -> Vec<u8> {
        crate::scanner::scan_bus(&mut self.i2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    const ADDR: u8 = 0x57;

    #[test]
    fn test_read_registers_burst() {
        let expectations = [Transaction::write_read(
            ADDR,
            vec![0x05],
            vec![0x12, 0x34, 0x56, 0x78],
        )];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations), ADDR);

        let data: [u8; 4] = iface.read_registers(0x05).unwrap();
        assert_eq!(data, [0x12, 0x34, 0x56, 0x78]);

        iface.release().done();
    }

    #[test]
    fn test_write_register_prefixes_address() {
        let expectations = [Transaction::write(ADDR, vec![0x06, 0x40])];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations), ADDR);

        iface.write_register(0x06, 0x40).unwrap();

        iface.release().done();
    }

    #[test]
    fn test_write_too_long_is_rejected() {
        let mut iface = I2cInterface::new(I2cMock::new(&[]), ADDR);
        let data = [0u8; MAX_WRITE_LEN + 1];

        assert_eq!(
            iface.write_reg(0x00, &data),
            Err(InterfaceError::InvalidParameter)
        );

        iface.release().done();
    }

    #[test]
    fn test_check_connection() {
        let identity = Identity {
            register: 0xFF,
            accepted: &[0x11],
        };
        let expectations = [
            Transaction::write_read(ADDR, vec![0xFF], vec![0x11]),
            Transaction::write_read(ADDR, vec![0xFF], vec![0x15]),
            Transaction::write_read(ADDR, vec![0xFF], vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations), ADDR);

        assert!(iface.check_connection(&identity));
        assert!(!iface.check_connection(&identity));
        // Un fallo de bus no se propaga
        assert!(!iface.check_connection(&identity));

        iface.release().done();
    }
}
