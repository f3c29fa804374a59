use embedded_hal::delay::DelayNs;
use thiserror::Error;

use super::health;
use crate::buffer::RingBuffer;
use crate::capability::{DataSource, HealthMetrics, Initializable, StatusReportable};
use crate::config::Max30100Config;
use crate::conversion::{bytes_to_unsigned16, die_temp_to_celsius};
use crate::interface::{Identity, Interface, InterfaceError};
use crate::register::max30100::{self as reg, mode};
use crate::types::{DeviceInfo, PpgSample, PulseOximeterData};

/// Registro de identidad del MAX30100
pub const IDENTITY: Identity = Identity {
    register: reg::PART_ID,
    accepted: &[reg::PART_ID_VALUE],
};

/// Muestras retenidas por canal en el buffer del host
pub const BUFFER_CAPACITY: usize = 100;
/// Espera tras el reinicio por software (ms)
pub const RESET_SETTLE_MS: u32 = 100;
/// Espera de la conversión de temperatura (ms)
pub const TEMP_SETTLE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Max30100Error {
    #[error("MAX30100 not detected")]
    NotConnected,
    #[error("I2C communication error: {0}")]
    Interface(#[from] InterfaceError),
}

/// Estado del FIFO y de las interrupciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoStatus {
    pub initialized: bool,
    pub ready: bool,
    pub interrupt_status: u8,
    pub write_ptr: u8,
    pub read_ptr: u8,
    pub overflow: u8,
    /// Muestras pendientes en el FIFO de 16 posiciones del chip
    pub samples_available: u8,
}

/// Controlador del pulsioxímetro MAX30100
pub struct Max30100<I, D> {
    interface: I,
    delay: D,
    config: Max30100Config,
    initialized: bool,
    samples: RingBuffer<PpgSample, BUFFER_CAPACITY>,
}

impl<I, D> Max30100<I, D>
where
    I: Interface,
    D: DelayNs,
{
    /// Crea el controlador sin tocar el bus; usar `initialize` antes de leer
    pub fn new(interface: I, delay: D) -> Self {
        Self {
            interface,
            delay,
            config: Max30100Config::default(),
            initialized: false,
            samples: RingBuffer::new(),
        }
    }

    pub fn config(&self) -> Max30100Config {
        self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Lee una muestra del FIFO (ráfaga de 4 bytes: IR y rojo, big-endian) y
    /// la añade al buffer circular
    pub fn read_raw_sample(&mut self) -> Result<PpgSample, Max30100Error> {
        let data: [u8; 4] = self.interface.read_registers(reg::FIFO_DATA)?;

        let sample = PpgSample {
            ir: bytes_to_unsigned16(data[0], data[1]),
            red: bytes_to_unsigned16(data[2], data[3]),
        };
        self.samples.push(sample);

        Ok(sample)
    }

    /// Muestras IR del buffer, de la más antigua a la más reciente
    pub fn ir_samples(&self) -> Vec<u16> {
        self.samples.iter().map(|s| s.ir).collect()
    }

    /// Muestras del LED rojo del buffer, de la más antigua a la más reciente
    pub fn red_samples(&self) -> Vec<u16> {
        self.samples.iter().map(|s| s.red).collect()
    }

    pub fn buffered_len(&self) -> usize {
        self.samples.len()
    }

    fn recent_ir(&self, count: usize) -> Vec<u16> {
        self.samples.recent(count).map(|s| s.ir).collect()
    }

    fn recent_red(&self, count: usize) -> Vec<u16> {
        self.samples.recent(count).map(|s| s.red).collect()
    }

    fn read_fifo_pointers(&mut self) -> Result<(u8, u8), InterfaceError> {
        let write_ptr = self.interface.read_register(reg::FIFO_WR_PTR)?;
        let read_ptr = self.interface.read_register(reg::FIFO_RD_PTR)?;
        Ok((write_ptr, read_ptr))
    }

    fn read_die_temperature(&mut self) -> Result<f32, InterfaceError> {
        let current = self.interface.read_register(reg::MODE_CONFIG)?;
        self.interface
            .write_register(reg::MODE_CONFIG, current | mode::TEMP_EN)?;

        self.delay.delay_ms(TEMP_SETTLE_MS);

        let integer = self.interface.read_register(reg::TEMP_INTEGER)?;
        let fraction = self.interface.read_register(reg::TEMP_FRACTION)?;
        Ok(die_temp_to_celsius(integer, fraction))
    }

    /// Consume el controlador y devuelve la interfaz y el retardo
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }
}

impl<I, D> Initializable for Max30100<I, D>
where
    I: Interface,
    D: DelayNs,
{
    type Config = Max30100Config;
    type Error = Max30100Error;

    fn initialize(&mut self) -> bool {
        self.initialized = false;

        if !self.interface.check_connection(&IDENTITY) {
            log::warn!(
                "MAX30100 not detected at 0x{:02X}",
                self.interface.address()
            );
            return false;
        }

        if let Err(e) = self.reset() {
            log::error!("MAX30100 reset failed: {}", e);
            return false;
        }
        self.delay.delay_ms(RESET_SETTLE_MS);

        if let Err(e) = self.configure(Max30100Config::default()) {
            log::error!("MAX30100 configuration failed: {}", e);
            return false;
        }

        self.initialized = true;
        log::info!("MAX30100 initialized");
        true
    }

    /// Reinicio por software. El chip vuelve a sus valores de encendido, así
    /// que el controlador deja de estar inicializado hasta el siguiente
    /// `initialize`.
    fn reset(&mut self) -> Result<(), Max30100Error> {
        self.interface.write_register(reg::MODE_CONFIG, mode::RESET)?;
        self.initialized = false;

        self.samples.clear();

        self.interface.write_register(reg::FIFO_WR_PTR, 0x00)?;
        self.interface.write_register(reg::FIFO_RD_PTR, 0x00)?;
        self.interface.write_register(reg::OVF_COUNTER, 0x00)?;
        Ok(())
    }

    fn configure(&mut self, config: Max30100Config) -> Result<(), Max30100Error> {
        self.interface
            .write_register(reg::MODE_CONFIG, config.mode.bits())?;
        self.interface
            .write_register(reg::SPO2_CONFIG, config.spo2_config_bits())?;
        self.interface
            .write_register(reg::LED_CONFIG, config.led_current.bits())?;

        log::debug!("MAX30100 configured: {:?}", config);
        self.config = config;
        Ok(())
    }
}

impl<I, D> DataSource for Max30100<I, D>
where
    I: Interface,
    D: DelayNs,
{
    type Raw = PpgSample;
    type Processed = PulseOximeterData;
    type Error = Max30100Error;

    fn read_raw(&mut self) -> Result<PpgSample, Max30100Error> {
        self.read_raw_sample()
    }

    /// Lee una muestra y calcula todas las métricas con el buffer actualizado
    fn read_processed(&mut self) -> Result<PulseOximeterData, Max30100Error> {
        let sample = self.read_raw_sample()?;

        Ok(PulseOximeterData {
            ir_raw: sample.ir,
            red_raw: sample.red,
            heart_rate_bpm: self.heart_rate(),
            spo2_percent: self.spo2(),
            temperature_c: self.temperature(),
        })
    }

    fn sample_rate_hz(&self) -> Option<u16> {
        Some(self.config.sample_rate.hz())
    }
}

impl<I, D> StatusReportable for Max30100<I, D>
where
    I: Interface,
    D: DelayNs,
{
    type Status = Result<FifoStatus, Max30100Error>;

    fn status(&mut self) -> Result<FifoStatus, Max30100Error> {
        let interrupt_status = self.interface.read_register(reg::INT_STATUS)?;
        let (write_ptr, read_ptr) = self.read_fifo_pointers()?;
        let overflow = self.interface.read_register(reg::OVF_COUNTER)?;

        Ok(FifoStatus {
            initialized: self.initialized,
            ready: self.initialized && write_ptr != read_ptr,
            interrupt_status,
            write_ptr,
            read_ptr,
            overflow,
            samples_available: write_ptr.wrapping_sub(read_ptr) % reg::FIFO_DEPTH,
        })
    }

    fn is_ready(&mut self) -> bool {
        if !self.initialized {
            return false;
        }
        match self.read_fifo_pointers() {
            Ok((write_ptr, read_ptr)) => write_ptr != read_ptr,
            Err(e) => {
                log::debug!("FIFO pointer read failed: {}", e);
                false
            }
        }
    }

    fn device_info(&mut self) -> DeviceInfo {
        DeviceInfo {
            device: "MAX30100",
            manufacturer: "Maxim Integrated",
            part_id: self.interface.read_register(reg::PART_ID).ok(),
            revision_id: self.interface.read_register(reg::REV_ID).ok(),
        }
    }
}

impl<I, D> HealthMetrics for Max30100<I, D>
where
    I: Interface,
    D: DelayNs,
{
    fn heart_rate(&self) -> Option<u16> {
        health::heart_rate_bpm(&self.recent_ir(health::HEART_RATE_WINDOW))
    }

    fn spo2(&self) -> Option<f32> {
        health::spo2_percent(
            &self.recent_ir(health::SPO2_WINDOW),
            &self.recent_red(health::SPO2_WINDOW),
        )
    }

    fn temperature(&mut self) -> Option<f32> {
        match self.read_die_temperature() {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("MAX30100 temperature read failed: {}", e);
                None
            }
        }
    }
}
