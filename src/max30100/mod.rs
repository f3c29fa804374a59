//! Controlador del pulsioxímetro MAX30100
//!
//! El controlador lee muestras IR/rojo del FIFO del chip y las guarda en un
//! buffer circular del host de 100 posiciones. La frecuencia cardiaca y la
//! SpO2 se calculan sobre ese buffer sin consumirlo.

mod device;
pub mod health;

pub use device::{
    FifoStatus, Max30100, Max30100Error, BUFFER_CAPACITY, IDENTITY, RESET_SETTLE_MS,
    TEMP_SETTLE_MS,
};
