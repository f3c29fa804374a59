//! Definiciones de registros para el MPU6050 y el MAX30100
//!
//! Los valores son direcciones absolutas de registro, tal como aparecen en las
//! hojas de datos de cada dispositivo.

/// Registros del MPU6050
pub mod mpu6050 {
    /// Dirección I2C por defecto (AD0 a nivel bajo)
    pub const DEFAULT_ADDRESS: u8 = 0x68;
    /// Dirección I2C alternativa (AD0 a nivel alto)
    pub const ALTERNATE_ADDRESS: u8 = 0x69;

    // Registros de configuración
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;

    // Registros de datos (ráfagas big-endian)
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const TEMP_OUT_H: u8 = 0x41;
    pub const GYRO_XOUT_H: u8 = 0x43;

    // Registros de estado y control
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;

    /// Valores válidos de WHO_AM_I
    pub const WHO_AM_I_VALUES: &[u8] = &[0x68, 0x69];

    /// Bits de PWR_MGMT_1
    pub mod pwr {
        pub const DEVICE_RESET: u8 = 0x80;
        pub const SLEEP: u8 = 0x40;
        /// Sin SLEEP, reloj PLL con referencia del giroscopio X
        pub const CLK_PLL: u8 = 0x01;
    }

    /// Máscara del campo FS_SEL / AFS_SEL, bits [4:3]
    pub const FS_SEL_MASK: u8 = 0x18;
}

/// Registros del MAX30100
pub mod max30100 {
    /// Dirección I2C fija
    pub const DEFAULT_ADDRESS: u8 = 0x57;

    // Estado e interrupciones
    pub const INT_STATUS: u8 = 0x00;
    pub const INT_ENABLE: u8 = 0x01;

    // FIFO
    pub const FIFO_WR_PTR: u8 = 0x02;
    pub const OVF_COUNTER: u8 = 0x03;
    pub const FIFO_RD_PTR: u8 = 0x04;
    pub const FIFO_DATA: u8 = 0x05;

    // Configuración
    pub const MODE_CONFIG: u8 = 0x06;
    pub const SPO2_CONFIG: u8 = 0x07;
    pub const LED_CONFIG: u8 = 0x09;

    // Temperatura del chip
    pub const TEMP_INTEGER: u8 = 0x16;
    pub const TEMP_FRACTION: u8 = 0x17;

    // Identificación
    pub const REV_ID: u8 = 0xFE;
    pub const PART_ID: u8 = 0xFF;
    pub const PART_ID_VALUE: u8 = 0x11;

    /// Bits de MODE_CONFIG
    pub mod mode {
        pub const SHUTDOWN: u8 = 0x80;
        pub const RESET: u8 = 0x40;
        pub const TEMP_EN: u8 = 0x08;
        pub const HR_ONLY: u8 = 0x02;
        pub const SPO2_EN: u8 = 0x03;
    }

    /// Bits de SPO2_CONFIG
    pub mod spo2 {
        pub const HI_RES_EN: u8 = 0x40;
        pub const PW_1600US: u8 = 0x1C;
        pub const SR_50HZ: u8 = 0x00;
        pub const SR_100HZ: u8 = 0x04;
        pub const SR_167HZ_AND_ABOVE: u8 = 0x07;
    }

    /// Valores de LED_CONFIG (corriente de los LED rojo/IR)
    pub mod led {
        pub const LOW: u8 = 0x33;
        pub const MEDIUM: u8 = 0x88;
        pub const HIGH: u8 = 0xCC;
        pub const MAX: u8 = 0xFF;
    }

    /// Número de posiciones del FIFO interno
    pub const FIFO_DEPTH: u8 = 16;
}
