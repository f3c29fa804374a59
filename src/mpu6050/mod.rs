//! Controlador del IMU MPU6050
//!
//! Separado en dos capas:
//! - [`Mpu6050Device`]: protocolo de registros, verificación de conexión y
//!   gestión de energía.
//! - [`Mpu6050`]: conversión a unidades físicas sobre un `Mpu6050Device`.

mod device;
mod sensor;

pub use device::{not_found_diagnostic, Mpu6050Device, Mpu6050Error, IDENTITY, SETTLE_DELAY_MS};
pub use sensor::{Mpu6050, Mpu6050Status};
