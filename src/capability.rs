//! Traits de capacidad de los sensores
//!
//! Cada faceta de un sensor es un trait independiente; los tipos concretos
//! implementan los que les corresponden en lugar de heredar de una base común.

use crate::types::DeviceInfo;

/// Inicialización y configuración del sensor
pub trait Initializable {
    /// Configuración aceptada por [`Initializable::configure`]
    type Config;
    /// Error de los caminos de configuración
    type Error;

    /// Verifica la conexión y aplica la configuración por defecto.
    /// Devuelve `false` si el dispositivo no responde.
    fn initialize(&mut self) -> bool;

    /// Devuelve el sensor a su estado por defecto
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Aplica una configuración completa
    fn configure(&mut self, config: Self::Config) -> Result<(), Self::Error>;
}

/// Fuente de datos del sensor
pub trait DataSource {
    /// Lectura bruta
    type Raw;
    /// Lectura en unidades físicas
    type Processed;
    type Error;

    fn read_raw(&mut self) -> Result<Self::Raw, Self::Error>;

    fn read_processed(&mut self) -> Result<Self::Processed, Self::Error>;

    /// Frecuencia de muestreo en Hz, `None` si el sensor se lee bajo demanda
    fn sample_rate_hz(&self) -> Option<u16>;
}

/// Estado y diagnóstico
pub trait StatusReportable {
    type Status;

    fn status(&mut self) -> Self::Status;

    /// Indica si hay datos listos para leer
    fn is_ready(&mut self) -> bool;

    fn device_info(&mut self) -> DeviceInfo;
}

/// Métricas de salud. Todas son `None` cuando no hay datos suficientes o el
/// valor calculado queda fuera del rango fisiológico.
pub trait HealthMetrics {
    /// Frecuencia cardiaca en pulsaciones por minuto
    fn heart_rate(&self) -> Option<u16>;

    /// Saturación de oxígeno en porcentaje
    fn spo2(&self) -> Option<f32>;

    /// Temperatura en °C
    fn temperature(&mut self) -> Option<f32>;
}
