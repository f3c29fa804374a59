//! Escáner del bus I2C
//!
//! Sondea todas las direcciones no reservadas con una escritura vacía y
//! permite asociar cada dirección con los dispositivos habituales.

use embedded_hal::i2c::I2c;

use crate::interface::{FIRST_SCAN_ADDRESS, LAST_SCAN_ADDRESS};

/// Dispositivos conocidos por dirección
const KNOWN_DEVICES: &[(u8, &str)] = &[
    (0x68, "MPU6050 (or DS1307 RTC)"),
    (0x69, "MPU6050 (alternate address)"),
    (0x76, "BMP280/BME280"),
    (0x77, "BMP180/BMP280/BME280"),
    (0x57, "MAX30100"),
    (0x3C, "OLED display (128x64)"),
    (0x3D, "OLED display (128x64)"),
    (0x48, "ADS1115"),
    (0x50, "EEPROM"),
];

/// Devuelve las direcciones que reconocen (ACK) una escritura vacía
pub fn scan_bus<I: I2c>(i2c: &mut I) -> Vec<u8> {
    let found: Vec<u8> = (FIRST_SCAN_ADDRESS..=LAST_SCAN_ADDRESS)
        .filter(|&addr| i2c.write(addr, &[]).is_ok())
        .collect();

    log::debug!("I2C scan found {} device(s)", found.len());
    found
}

/// Nombre probable del dispositivo en una dirección
pub fn identify_device(addr: u8) -> &'static str {
    KNOWN_DEVICES
        .iter()
        .find(|(a, _)| *a == addr)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown device")
}
