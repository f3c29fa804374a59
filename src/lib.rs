//! Controladores Rust para el IMU MPU6050 y el pulsioxímetro MAX30100
//!
//! Ambos chips hablan I2C a nivel de registros. La biblioteca separa:
//! - [`interface`]: transporte de registros sobre una dirección fija, más el
//!   escaneo del bus.
//! - [`mpu6050`] y [`max30100`]: los protocolos de cada chip.
//! - [`conversion`] y [`max30100::health`]: cálculos puros sin E/S.
//! - [`capability`]: traits comunes a todos los sensores.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

pub mod buffer;
pub mod capability;
pub mod config;
pub mod conversion;
pub mod interface;
pub mod max30100;
pub mod mpu6050;
pub mod register;
pub mod scanner;
pub mod types;

#[cfg(test)]
mod testing;

// Re-exports públicos
pub use capability::{DataSource, HealthMetrics, Initializable, StatusReportable};
pub use config::{LedCurrent, Max30100Config, Mode, PulseWidth, SampleRate};
pub use interface::{BusScan, I2cInterface, Interface, InterfaceError};
pub use max30100::{FifoStatus, Max30100, Max30100Error};
pub use mpu6050::{Mpu6050, Mpu6050Device, Mpu6050Error, Mpu6050Status};
pub use types::{
    AccelFullScale, DeviceInfo, GyroFullScale, MotionData, PpgSample, PulseOximeterData,
    RawMotion, Vector3,
};

/// Crea un MPU6050 sobre el bus I2C verificando que responde en `address`
pub fn new_mpu6050_i2c<I, D>(
    i2c: I,
    address: u8,
    delay: D,
) -> Result<Mpu6050<I2cInterface<I>, D>, Mpu6050Error>
where
    I: I2c,
    D: DelayNs,
{
    let interface = I2cInterface::new(i2c, address);
    Mpu6050Device::new_strict(interface, delay).map(Mpu6050::new)
}

/// Crea un MAX30100 en su dirección fija (0x57); falta llamar a `initialize`
pub fn new_max30100_i2c<I, D>(i2c: I, delay: D) -> Max30100<I2cInterface<I>, D>
where
    I: I2c,
    D: DelayNs,
{
    let interface = I2cInterface::new(i2c, register::max30100::DEFAULT_ADDRESS);
    Max30100::new(interface, delay)
}
