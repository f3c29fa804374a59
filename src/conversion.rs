//! Funciones de conversión para datos de los sensores
//!
//! Este módulo convierte palabras brutas de registro a unidades físicas:
//! aceleraciones en g, velocidad angular en grados por segundo y temperatura
//! en grados Celsius.

use crate::types::{AccelFullScale, GyroFullScale, Vector3};

/// Sensibilidad del sensor de temperatura del MPU6050 (LSB/°C)
pub const MPU6050_TEMP_SENSITIVITY: f32 = 340.0;
/// Desplazamiento del sensor de temperatura del MPU6050 (°C)
pub const MPU6050_TEMP_OFFSET: f32 = 36.53;
/// Resolución de la parte fraccionaria de temperatura del MAX30100 (°C/LSB)
pub const MAX30100_TEMP_FRACTION_STEP: f32 = 0.0625;

/// Combina dos bytes big-endian en un entero con signo de 16 bits
///
/// # Arguments
/// * `high` - Byte alto (registro `_H`)
/// * `low` - Byte bajo (registro `_L`)
///
/// # Returns
/// La palabra interpretada en complemento a dos
#[inline]
pub fn bytes_to_signed16(high: u8, low: u8) -> i16 {
    let value = ((high as i32) << 8) | low as i32;
    if value & 0x8000 != 0 {
        (value - 0x10000) as i16
    } else {
        value as i16
    }
}

/// Combina dos bytes big-endian en un entero sin signo de 16 bits
#[inline]
pub fn bytes_to_unsigned16(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Redondea a un número fijo de decimales
#[inline]
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (value * factor).round() / factor
}

/// Decodifica una ráfaga de tres ejes (X_H, X_L, Y_H, Y_L, Z_H, Z_L)
pub fn axes_from_bytes(raw: &[u8; 6]) -> [i16; 3] {
    [
        bytes_to_signed16(raw[0], raw[1]),
        bytes_to_signed16(raw[2], raw[3]),
        bytes_to_signed16(raw[4], raw[5]),
    ]
}

/// Convierte datos brutos de acelerómetro a g según la escala configurada
///
/// # Arguments
/// * `raw` - Valores brutos del acelerómetro [x, y, z]
/// * `scale` - Escala completa configurada en ACCEL_CONFIG
///
/// # Returns
/// Aceleración en g por eje, redondeada a 3 decimales
pub fn accel_raw_to_g(raw: [i16; 3], scale: AccelFullScale) -> Vector3 {
    let lsb = scale.lsb_per_g();
    Vector3 {
        x: round_to(raw[0] as f32 / lsb, 3),
        y: round_to(raw[1] as f32 / lsb, 3),
        z: round_to(raw[2] as f32 / lsb, 3),
    }
}

/// Convierte datos brutos de giroscopio a grados/segundo según la escala
/// configurada
///
/// # Arguments
/// * `raw` - Valores brutos del giroscopio [x, y, z]
/// * `scale` - Escala completa configurada en GYRO_CONFIG
///
/// # Returns
/// Velocidad angular en °/s por eje, redondeada a 2 decimales
pub fn gyro_raw_to_dps(raw: [i16; 3], scale: GyroFullScale) -> Vector3 {
    let lsb = scale.lsb_per_dps();
    Vector3 {
        x: round_to(raw[0] as f32 / lsb, 2),
        y: round_to(raw[1] as f32 / lsb, 2),
        z: round_to(raw[2] as f32 / lsb, 2),
    }
}

/// Convierte datos brutos de temperatura del MPU6050 a grados Celsius
///
/// Temp °C = TEMP_OUT / 340 + 36.53, redondeado a 2 decimales
pub fn temp_raw_to_celsius(raw: i16) -> f32 {
    round_to(
        raw as f32 / MPU6050_TEMP_SENSITIVITY + MPU6050_TEMP_OFFSET,
        2,
    )
}

/// Temperatura del chip MAX30100
///
/// # Arguments
/// * `integer` - Registro TINT, grados enteros en complemento a dos
/// * `fraction` - Registro TFRAC, pasos de 0.0625 °C
///
/// # Returns
/// Temperatura en °C, redondeada a 2 decimales
pub fn die_temp_to_celsius(integer: u8, fraction: u8) -> f32 {
    round_to(
        integer as i8 as f32 + fraction as f32 * MAX30100_TEMP_FRACTION_STEP,
        2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_signed16_round_trip() {
        for v in i16::MIN..=i16::MAX {
            let [high, low] = v.to_be_bytes();
            assert_eq!(bytes_to_signed16(high, low), v);
        }
    }

    #[test]
    fn test_signed16_sign_bit() {
        assert_eq!(bytes_to_signed16(0xFF, 0xFF), -1);
        assert_eq!(bytes_to_signed16(0x80, 0x00), -32768);
        assert_eq!(bytes_to_signed16(0x7F, 0xFF), 32767);
    }

    #[test]
    fn test_temperature_worked_example() {
        // 0x0190 = 400 -> 400 / 340 + 36.53 = 37.71
        let raw = bytes_to_signed16(0x01, 0x90);
        assert_eq!(raw, 400);
        assert!(approx(temp_raw_to_celsius(raw), 37.71));
        assert!(approx(temp_raw_to_celsius(0), 36.53));
    }

    #[test]
    fn test_accel_conversion_uses_scale() {
        let g = accel_raw_to_g([16384, -8192, 4096], AccelFullScale::Fs2G);
        assert!(approx(g.x, 1.0));
        assert!(approx(g.y, -0.5));
        assert!(approx(g.z, 0.25));

        let g = accel_raw_to_g([8192, 0, 1000], AccelFullScale::Fs4G);
        assert!(approx(g.x, 1.0));
        // 1000 / 8192 = 0.12207 -> 0.122
        assert!(approx(g.z, 0.122));
    }

    #[test]
    fn test_gyro_conversion_rounds_two_decimals() {
        let dps = gyro_raw_to_dps([131, 100, -655], GyroFullScale::Fs250Dps);
        assert!(approx(dps.x, 1.0));
        // 100 / 131 = 0.7633 -> 0.76
        assert!(approx(dps.y, 0.76));
        assert!(approx(dps.z, -5.0));
    }

    #[test]
    fn test_die_temperature() {
        assert!(approx(die_temp_to_celsius(0x19, 0x04), 25.25));
        assert!(approx(die_temp_to_celsius(0xFF, 0x08), -0.5));
    }
}
