use linux_embedded_hal::I2cdev;
use sensor_drivers::scanner::{identify_device, scan_bus};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/i2c-1".to_string());
    println!("Escaneando el bus I2C {}", path);

    let mut i2c = match I2cdev::new(&path) {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    let devices = scan_bus(&mut i2c);
    if devices.is_empty() {
        println!("No se encontraron dispositivos");
        return;
    }

    println!("Encontrados {} dispositivo(s):", devices.len());
    for addr in devices {
        println!("  0x{:02X}: {}", addr, identify_device(addr));
    }
}
