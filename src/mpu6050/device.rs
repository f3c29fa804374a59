use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use thiserror::Error;

use crate::interface::{BusScan, Identity, Interface, InterfaceError};
use crate::register::mpu6050::{self as reg, pwr, FS_SEL_MASK};
use crate::types::{AccelFullScale, GyroFullScale};

/// Registro de identidad del MPU6050
pub const IDENTITY: Identity = Identity {
    register: reg::WHO_AM_I,
    accepted: reg::WHO_AM_I_VALUES,
};

/// Espera tras despertar o reiniciar el chip (ms)
pub const SETTLE_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mpu6050Error {
    /// La dirección configurada no responde en el bus
    #[error("{diagnostic}")]
    NotFound {
        address: u8,
        devices: Vec<u8>,
        diagnostic: String,
    },
    #[error("Invalid WHO_AM_I: 0x{found:02X} (expected 0x68 or 0x69)")]
    InvalidDeviceId { found: u8 },
    #[error("I2C communication error: {0}")]
    Interface(#[from] InterfaceError),
}

/// Capa de dispositivo del MPU6050: protocolo de registros sin conversión.
///
/// Si la verificación de conexión falla en modo no estricto, el dispositivo
/// sigue siendo utilizable: las lecturas devuelven ceros y `wake`/`sleep`
/// informan de fallo sin tocar el bus.
pub struct Mpu6050Device<I, D> {
    interface: I,
    delay: D,
    connected: bool,
    awake: bool,
    accel_range: AccelFullScale,
    gyro_range: GyroFullScale,
}

impl<I, D> Mpu6050Device<I, D>
where
    I: Interface + BusScan,
    D: DelayNs,
{
    /// Construye el dispositivo y falla si no se encuentra un MPU6050 válido
    pub fn new_strict(interface: I, delay: D) -> Result<Self, Mpu6050Error> {
        let mut device = Self::unverified(interface, delay);
        let who_am_i = device.verify_connection()?;
        device.mark_connected(who_am_i);
        Ok(device)
    }

    /// Construye el dispositivo; si no se encuentra continúa en modo degradado
    pub fn new_lenient(interface: I, delay: D) -> Self {
        let mut device = Self::unverified(interface, delay);
        match device.verify_connection() {
            Ok(who_am_i) => device.mark_connected(who_am_i),
            Err(e) => {
                log::warn!("{}", e);
                log::warn!("Continuing in non-strict mode...");
            }
        }
        device
    }

    fn verify_connection(&mut self) -> Result<u8, Mpu6050Error> {
        let address = self.interface.address();
        let devices = self.interface.scan();

        if !devices.contains(&address) {
            return Err(Mpu6050Error::NotFound {
                address,
                diagnostic: not_found_diagnostic(address, &devices),
                devices,
            });
        }

        let who_am_i = self.interface.read_register(IDENTITY.register)?;
        if !IDENTITY.matches(who_am_i) {
            return Err(Mpu6050Error::InvalidDeviceId { found: who_am_i });
        }

        Ok(who_am_i)
    }
}

impl<I, D> Mpu6050Device<I, D>
where
    I: Interface,
    D: DelayNs,
{
    fn unverified(interface: I, delay: D) -> Self {
        Self {
            interface,
            delay,
            connected: false,
            awake: false,
            accel_range: AccelFullScale::default(),
            gyro_range: GyroFullScale::default(),
        }
    }

    fn mark_connected(&mut self, who_am_i: u8) {
        self.connected = true;
        log::info!(
            "MPU6050 found at 0x{:02X} (WHO_AM_I: 0x{:02X})",
            self.interface.address(),
            who_am_i
        );
        self.sync_ranges();
    }

    /// Relee las escalas configuradas en el chip
    pub fn sync_ranges(&mut self) {
        if !self.connected {
            return;
        }
        match self.interface.read_register(reg::ACCEL_CONFIG) {
            Ok(value) => self.accel_range = AccelFullScale::from_register(value),
            Err(e) => log::warn!("Failed to read ACCEL_CONFIG, assuming ±2g: {}", e),
        }
        match self.interface.read_register(reg::GYRO_CONFIG) {
            Ok(value) => self.gyro_range = GyroFullScale::from_register(value),
            Err(e) => log::warn!("Failed to read GYRO_CONFIG, assuming ±250°/s: {}", e),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    pub fn address(&self) -> u8 {
        self.interface.address()
    }

    pub fn accel_range(&self) -> AccelFullScale {
        self.accel_range
    }

    pub fn gyro_range(&self) -> GyroFullScale {
        self.gyro_range
    }

    /// Saca al sensor del modo de bajo consumo (reloj PLL)
    pub fn wake(&mut self) -> bool {
        if !self.connected {
            log::warn!("Sensor not connected, skipping wake");
            return false;
        }

        match self.interface.write_register(reg::PWR_MGMT_1, pwr::CLK_PLL) {
            Ok(()) => {
                self.delay.delay_ms(SETTLE_DELAY_MS);
                self.awake = true;
                log::info!("MPU6050 activated");
                true
            }
            Err(e) => {
                log::error!("Failed to wake sensor: {}", e);
                false
            }
        }
    }

    /// Pone el sensor en modo de bajo consumo
    pub fn sleep(&mut self) -> bool {
        if !self.connected {
            log::warn!("Sensor not connected, skipping sleep");
            return false;
        }

        match self.interface.write_register(reg::PWR_MGMT_1, pwr::SLEEP) {
            Ok(()) => {
                self.awake = false;
                log::info!("MPU6050 sleep mode");
                true
            }
            Err(e) => {
                log::error!("Failed to sleep sensor: {}", e);
                false
            }
        }
    }

    /// Reinicio completo de registros. El chip queda dormido y con escalas
    /// por defecto.
    pub fn reset(&mut self) -> bool {
        if !self.connected {
            log::warn!("Sensor not connected, skipping reset");
            return false;
        }

        match self
            .interface
            .write_register(reg::PWR_MGMT_1, pwr::DEVICE_RESET)
        {
            Ok(()) => {
                self.delay.delay_ms(SETTLE_DELAY_MS);
                self.awake = false;
                self.accel_range = AccelFullScale::default();
                self.gyro_range = GyroFullScale::default();
                true
            }
            Err(e) => {
                log::error!("Failed to reset sensor: {}", e);
                false
            }
        }
    }

    /// Configura la escala completa del acelerómetro
    pub fn set_accel_range(&mut self, range: AccelFullScale) -> bool {
        if !self.connected {
            return false;
        }
        match self.write_full_scale(reg::ACCEL_CONFIG, range.bits()) {
            Ok(()) => {
                self.accel_range = range;
                true
            }
            Err(e) => {
                log::error!("Failed to set accelerometer range: {}", e);
                false
            }
        }
    }

    /// Configura la escala completa del giroscopio
    pub fn set_gyro_range(&mut self, range: GyroFullScale) -> bool {
        if !self.connected {
            return false;
        }
        match self.write_full_scale(reg::GYRO_CONFIG, range.bits()) {
            Ok(()) => {
                self.gyro_range = range;
                true
            }
            Err(e) => {
                log::error!("Failed to set gyroscope range: {}", e);
                false
            }
        }
    }

    /// Sustituye solo el campo FS_SEL [4:3], conservando el resto del registro
    fn write_full_scale(&mut self, config_reg: u8, bits: u8) -> Result<(), InterfaceError> {
        let current = self.interface.read_register(config_reg)?;
        self.interface
            .write_register(config_reg, (current & !FS_SEL_MASK) | (bits & FS_SEL_MASK))
    }

    /// Valor actual de WHO_AM_I
    pub fn who_am_i(&mut self) -> Option<u8> {
        if !self.connected {
            return None;
        }
        self.interface.read_register(reg::WHO_AM_I).ok()
    }

    /// Temperatura bruta (TEMP_OUT_H, TEMP_OUT_L)
    pub fn read_temperature_raw(&mut self) -> [u8; 2] {
        self.read_burst(reg::TEMP_OUT_H, "temperature")
    }

    /// Acelerómetro bruto (X_H, X_L, Y_H, Y_L, Z_H, Z_L)
    pub fn read_accel_raw(&mut self) -> [u8; 6] {
        self.read_burst(reg::ACCEL_XOUT_H, "accelerometer")
    }

    /// Giroscopio bruto (X_H, X_L, Y_H, Y_L, Z_H, Z_L)
    pub fn read_gyro_raw(&mut self) -> [u8; 6] {
        self.read_burst(reg::GYRO_XOUT_H, "gyroscope")
    }

    fn read_burst<const N: usize>(&mut self, start: u8, what: &str) -> [u8; N] {
        if !self.connected {
            return [0; N];
        }
        self.interface.read_registers::<N>(start).unwrap_or_else(|e| {
            log::error!("Failed to read {}: {}", what, e);
            [0; N]
        })
    }

    /// Consume el dispositivo y devuelve la interfaz y el retardo
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }
}

/// Mensaje de diagnóstico cuando la dirección configurada no responde
pub fn not_found_diagnostic(address: u8, devices: &[u8]) -> String {
    let mut msg = format!("MPU6050 not found at 0x{:02X}\n", address);

    if devices.is_empty() {
        msg.push_str("No I2C devices detected on bus!\n");
        msg.push_str("Troubleshooting:\n");
        msg.push_str("  - Check wiring (SCL, SDA, VCC, GND)\n");
        msg.push_str("  - Verify 3.3V power supply\n");
        msg.push_str("  - Check if pins are correct\n");
        msg.push_str("  - Try pull-up resistors (4.7kΩ)");
        return msg;
    }

    let listed: Vec<String> = devices.iter().map(|d| format!("0x{:02X}", d)).collect();
    let _ = writeln!(
        msg,
        "Found {} device(s): {}",
        devices.len(),
        listed.join(", ")
    );

    let alternate = match address {
        reg::DEFAULT_ADDRESS => Some(reg::ALTERNATE_ADDRESS),
        reg::ALTERNATE_ADDRESS => Some(reg::DEFAULT_ADDRESS),
        _ => None,
    };
    match alternate {
        Some(alt) if devices.contains(&alt) => {
            let _ = write!(
                msg,
                "TIP: MPU6050 detected at 0x{:02X}. Try address 0x{:02X}",
                alt, alt
            );
        }
        _ => msg.push_str("TIP: MPU6050 not detected. Check address (0x68 or 0x69)"),
    }

    msg
}
