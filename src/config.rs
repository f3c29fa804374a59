//! Configuración del MAX30100
//!
//! Cada campo reconocido tiene su propio tipo; la configuración completa se
//! escribe de una vez con [`crate::max30100::Max30100::configure`].

use core::str::FromStr;

use crate::register::max30100::{led, mode, spo2};

/// Modo de operación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Sólo LED IR (frecuencia cardiaca)
    HeartRate,
    /// LED rojo e IR
    #[default]
    Spo2,
}

impl Mode {
    /// Valor de MODE_CONFIG
    pub fn bits(self) -> u8 {
        match self {
            Mode::HeartRate => mode::HR_ONLY,
            Mode::Spo2 => mode::SPO2_EN,
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hr" | "heart_rate" => Ok(Mode::HeartRate),
            "spo2" => Ok(Mode::Spo2),
            _ => Err(()),
        }
    }
}

/// Frecuencia de muestreo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRate {
    Hz50,
    #[default]
    Hz100,
    Hz167,
    Hz200,
    Hz400,
    Hz600,
    Hz800,
    Hz1000,
}

impl SampleRate {
    const ALL: [SampleRate; 8] = [
        SampleRate::Hz50,
        SampleRate::Hz100,
        SampleRate::Hz167,
        SampleRate::Hz200,
        SampleRate::Hz400,
        SampleRate::Hz600,
        SampleRate::Hz800,
        SampleRate::Hz1000,
    ];

    /// Frecuencia nominal en Hz
    pub fn hz(self) -> u16 {
        match self {
            SampleRate::Hz50 => 50,
            SampleRate::Hz100 => 100,
            SampleRate::Hz167 => 167,
            SampleRate::Hz200 => 200,
            SampleRate::Hz400 => 400,
            SampleRate::Hz600 => 600,
            SampleRate::Hz800 => 800,
            SampleRate::Hz1000 => 1000,
        }
    }

    /// Frecuencia soportada más cercana a `hz`
    pub fn nearest(hz: u16) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|rate| rate.hz().abs_diff(hz))
            .unwrap_or_default()
    }

    /// Patrón de bits en SPO2_CONFIG. Por encima de 167 Hz todas las
    /// frecuencias comparten el mismo patrón.
    pub fn bits(self) -> u8 {
        match self {
            SampleRate::Hz50 => spo2::SR_50HZ,
            SampleRate::Hz100 => spo2::SR_100HZ,
            _ => spo2::SR_167HZ_AND_ABOVE,
        }
    }
}

/// Ancho de pulso de los LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulseWidth {
    /// 1600 µs, resolución de 16 bits
    #[default]
    Us1600,
}

impl PulseWidth {
    /// Patrón de bits en SPO2_CONFIG
    pub fn bits(self) -> u8 {
        match self {
            PulseWidth::Us1600 => spo2::PW_1600US,
        }
    }

    /// Duración en microsegundos
    pub fn micros(self) -> u16 {
        match self {
            PulseWidth::Us1600 => 1600,
        }
    }
}

/// Corriente de los LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedCurrent {
    Low,
    #[default]
    Medium,
    High,
    Max,
}

impl LedCurrent {
    /// Valor de LED_CONFIG
    pub fn bits(self) -> u8 {
        match self {
            LedCurrent::Low => led::LOW,
            LedCurrent::Medium => led::MEDIUM,
            LedCurrent::High => led::HIGH,
            LedCurrent::Max => led::MAX,
        }
    }

    /// Interpreta un nombre; cualquier nombre desconocido equivale a `Medium`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for LedCurrent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(LedCurrent::Low),
            "medium" => Ok(LedCurrent::Medium),
            "high" => Ok(LedCurrent::High),
            "max" => Ok(LedCurrent::Max),
            _ => Err(()),
        }
    }
}

/// Configuración completa del MAX30100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Max30100Config {
    pub mode: Mode,
    pub sample_rate: SampleRate,
    pub pulse_width: PulseWidth,
    pub led_current: LedCurrent,
}

impl Max30100Config {
    /// Valor de SPO2_CONFIG para esta configuración
    pub fn spo2_config_bits(&self) -> u8 {
        spo2::HI_RES_EN | self.pulse_width.bits() | self.sample_rate.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_register_values() {
        let config = Max30100Config::default();
        assert_eq!(config.mode.bits(), 0x03);
        assert_eq!(config.spo2_config_bits(), 0x40 | 0x1C | 0x04);
        assert_eq!(config.led_current.bits(), 0x88);
    }

    #[test]
    fn test_sample_rate_bands() {
        assert_eq!(SampleRate::Hz50.bits(), 0x00);
        assert_eq!(SampleRate::Hz100.bits(), 0x04);
        assert_eq!(SampleRate::Hz167.bits(), 0x07);
        assert_eq!(SampleRate::Hz1000.bits(), SampleRate::Hz200.bits());
    }

    #[test]
    fn test_sample_rate_nearest() {
        assert_eq!(SampleRate::nearest(40), SampleRate::Hz50);
        assert_eq!(SampleRate::nearest(110), SampleRate::Hz100);
        assert_eq!(SampleRate::nearest(180), SampleRate::Hz167);
        assert_eq!(SampleRate::nearest(5000), SampleRate::Hz1000);
    }

    #[test]
    fn test_led_current_names() {
        assert_eq!(LedCurrent::from_name("low").bits(), 0x33);
        assert_eq!(LedCurrent::from_name("max").bits(), 0xFF);
        assert_eq!(LedCurrent::from_name("high").bits(), 0xCC);
        assert_eq!(LedCurrent::from_name("blinding"), LedCurrent::Medium);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!("hr".parse::<Mode>(), Ok(Mode::HeartRate));
        assert_eq!("spo2".parse::<Mode>(), Ok(Mode::Spo2));
        assert!("off".parse::<Mode>().is_err());
    }
}
