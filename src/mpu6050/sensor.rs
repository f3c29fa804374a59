use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use super::device::Mpu6050Device;
use crate::capability::{DataSource, StatusReportable};
use crate::conversion::{
    accel_raw_to_g, axes_from_bytes, bytes_to_signed16, gyro_raw_to_dps, temp_raw_to_celsius,
};
use crate::interface::Interface;
use crate::types::{AccelFullScale, DeviceInfo, GyroFullScale, MotionData, RawMotion, Vector3};

/// Estado del MPU6050
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mpu6050Status {
    pub connected: bool,
    pub awake: bool,
    pub accel_range: AccelFullScale,
    pub gyro_range: GyroFullScale,
}

/// Capa de conversión del MPU6050: traduce las lecturas del dispositivo a
/// unidades físicas con las escalas configuradas en el chip.
///
/// Cada grupo de ejes sale de una única ráfaga, pero temperatura,
/// acelerómetro y giroscopio son tres transacciones independientes.
pub struct Mpu6050<I, D> {
    device: Mpu6050Device<I, D>,
}

impl<I, D> Mpu6050<I, D>
where
    I: Interface,
    D: DelayNs,
{
    pub fn new(device: Mpu6050Device<I, D>) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &Mpu6050Device<I, D> {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut Mpu6050Device<I, D> {
        &mut self.device
    }

    pub fn into_device(self) -> Mpu6050Device<I, D> {
        self.device
    }

    /// Temperatura en °C, 2 decimales
    pub fn temperature_c(&mut self) -> f32 {
        let [high, low] = self.device.read_temperature_raw();
        temp_raw_to_celsius(bytes_to_signed16(high, low))
    }

    /// Aceleración en g, 3 decimales
    pub fn acceleration_g(&mut self) -> Vector3 {
        let raw = self.device.read_accel_raw();
        accel_raw_to_g(axes_from_bytes(&raw), self.device.accel_range())
    }

    /// Velocidad angular en °/s, 2 decimales
    pub fn angular_velocity_dps(&mut self) -> Vector3 {
        let raw = self.device.read_gyro_raw();
        gyro_raw_to_dps(axes_from_bytes(&raw), self.device.gyro_range())
    }

    /// Temperatura, aceleración y velocidad angular (tres lecturas independientes)
    pub fn read_all(&mut self) -> MotionData {
        MotionData {
            temperature_c: self.temperature_c(),
            acceleration: self.acceleration_g(),
            angular_velocity: self.angular_velocity_dps(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.device.is_awake()
    }

    pub fn activate(&mut self) -> bool {
        self.device.wake()
    }

    pub fn deactivate(&mut self) -> bool {
        self.device.sleep()
    }
}

impl<I, D> DataSource for Mpu6050<I, D>
where
    I: Interface,
    D: DelayNs,
{
    type Raw = RawMotion;
    type Processed = MotionData;
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<RawMotion, Infallible> {
        Ok(RawMotion {
            temperature: self.device.read_temperature_raw(),
            accel: self.device.read_accel_raw(),
            gyro: self.device.read_gyro_raw(),
        })
    }

    fn read_processed(&mut self) -> Result<MotionData, Infallible> {
        Ok(self.read_all())
    }

    fn sample_rate_hz(&self) -> Option<u16> {
        None
    }
}

impl<I, D> StatusReportable for Mpu6050<I, D>
where
    I: Interface,
    D: DelayNs,
{
    type Status = Mpu6050Status;

    fn status(&mut self) -> Mpu6050Status {
        Mpu6050Status {
            connected: self.device.is_connected(),
            awake: self.device.is_awake(),
            accel_range: self.device.accel_range(),
            gyro_range: self.device.gyro_range(),
        }
    }

    fn is_ready(&mut self) -> bool {
        self.device.is_connected() && self.device.is_awake()
    }

    fn device_info(&mut self) -> DeviceInfo {
        DeviceInfo {
            device: "MPU6050",
            manufacturer: "InvenSense",
            part_id: self.device.who_am_i(),
            revision_id: None,
        }
    }
}
