//! Definiciones de tipos comunes para los sensores

use crate::register::mpu6050::FS_SEL_MASK;

/// Escalas completas disponibles para el acelerómetro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AccelFullScale {
    /// ±2g
    #[default]
    Fs2G = 0x00,
    /// ±4g
    Fs4G = 0x08,
    /// ±8g
    Fs8G = 0x10,
    /// ±16g
    Fs16G = 0x18,
}

impl AccelFullScale {
    /// Interpreta el valor de ACCEL_CONFIG (bits [4:3])
    pub fn from_register(value: u8) -> Self {
        match value & FS_SEL_MASK {
            0x00 => AccelFullScale::Fs2G,
            0x08 => AccelFullScale::Fs4G,
            0x10 => AccelFullScale::Fs8G,
            _ => AccelFullScale::Fs16G,
        }
    }

    /// Bits a escribir en ACCEL_CONFIG
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sensibilidad en LSB/g
    pub fn lsb_per_g(self) -> f32 {
        match self {
            AccelFullScale::Fs2G => 16384.0,
            AccelFullScale::Fs4G => 8192.0,
            AccelFullScale::Fs8G => 4096.0,
            AccelFullScale::Fs16G => 2048.0,
        }
    }
}

/// Escalas completas disponibles para el giroscopio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GyroFullScale {
    /// ±250 dps
    #[default]
    Fs250Dps = 0x00,
    /// ±500 dps
    Fs500Dps = 0x08,
    /// ±1000 dps
    Fs1000Dps = 0x10,
    /// ±2000 dps
    Fs2000Dps = 0x18,
}

impl GyroFullScale {
    /// Interpreta el valor de GYRO_CONFIG (bits [4:3])
    pub fn from_register(value: u8) -> Self {
        match value & FS_SEL_MASK {
            0x00 => GyroFullScale::Fs250Dps,
            0x08 => GyroFullScale::Fs500Dps,
            0x10 => GyroFullScale::Fs1000Dps,
            _ => GyroFullScale::Fs2000Dps,
        }
    }

    /// Bits a escribir en GYRO_CONFIG
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sensibilidad en LSB/(°/s)
    pub fn lsb_per_dps(self) -> f32 {
        match self {
            GyroFullScale::Fs250Dps => 131.0,
            GyroFullScale::Fs500Dps => 65.5,
            GyroFullScale::Fs1000Dps => 32.8,
            GyroFullScale::Fs2000Dps => 16.4,
        }
    }
}

/// Vector de tres ejes en unidades físicas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Bytes brutos de una lectura completa del MPU6050
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawMotion {
    pub temperature: [u8; 2],
    pub accel: [u8; 6],
    pub gyro: [u8; 6],
}

/// Lectura convertida del MPU6050
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionData {
    /// Temperatura en °C
    pub temperature_c: f32,
    /// Aceleración en g
    pub acceleration: Vector3,
    /// Velocidad angular en °/s
    pub angular_velocity: Vector3,
}

/// Muestra del FIFO del MAX30100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PpgSample {
    pub ir: u16,
    pub red: u16,
}

/// Lectura procesada del MAX30100
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PulseOximeterData {
    pub ir_raw: u16,
    pub red_raw: u16,
    pub heart_rate_bpm: Option<u16>,
    pub spo2_percent: Option<f32>,
    pub temperature_c: Option<f32>,
}

/// Información de identificación del dispositivo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: &'static str,
    pub manufacturer: &'static str,
    pub part_id: Option<u8>,
    pub revision_id: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_scale_lookup() {
        assert_eq!(AccelFullScale::from_register(0x08), AccelFullScale::Fs4G);
        assert_eq!(AccelFullScale::from_register(0x08).lsb_per_g(), 8192.0);
        // Los bits fuera de [4:3] se ignoran
        assert_eq!(AccelFullScale::from_register(0xE7), AccelFullScale::Fs2G);
        assert_eq!(AccelFullScale::Fs16G.bits(), 0x18);
    }

    #[test]
    fn test_gyro_scale_lookup() {
        assert_eq!(GyroFullScale::from_register(0x08), GyroFullScale::Fs500Dps);
        assert_eq!(GyroFullScale::from_register(0x08).lsb_per_dps(), 65.5);
        assert_eq!(GyroFullScale::from_register(0x18).lsb_per_dps(), 16.4);
    }
}
