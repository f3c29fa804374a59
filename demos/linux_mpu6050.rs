use linux_embedded_hal::{Delay, I2cdev};
use sensor_drivers::register::mpu6050::DEFAULT_ADDRESS;
use sensor_drivers::{AccelFullScale, StatusReportable};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("MPU6050 - Ejemplo básico");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/i2c-1".to_string());
    let i2c = match I2cdev::new(&path) {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    let mut sensor = match sensor_drivers::new_mpu6050_i2c(i2c, DEFAULT_ADDRESS, Delay {}) {
        Ok(sensor) => sensor,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if !sensor.activate() {
        eprintln!("Error al despertar el MPU6050");
        return;
    }
    if !sensor.device_mut().set_accel_range(AccelFullScale::Fs4G) {
        eprintln!("Error al configurar la escala del acelerómetro");
    }

    let info = sensor.device_info();
    println!("{} de {} listo: {:?}", info.device, info.manufacturer, sensor.status());

    println!("Leyendo datos. Presiona Ctrl+C para detener...");
    while running.load(Ordering::SeqCst) {
        let data = sensor.read_all();
        let a = data.acceleration;
        let g = data.angular_velocity;
        println!("Aceleración: x={:.3}G, y={:.3}G, z={:.3}G", a.x, a.y, a.z);
        println!("Giroscopio: x={:.2}°/s, y={:.2}°/s, z={:.2}°/s", g.x, g.y, g.z);
        println!("Temperatura: {:.2}°C", data.temperature_c);
        println!("-------------------");
        thread::sleep(Duration::from_millis(200));
    }

    sensor.deactivate();
    println!("Ejemplo finalizado");
}
