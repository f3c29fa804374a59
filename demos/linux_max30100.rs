use linux_embedded_hal::{Delay, I2cdev};
use sensor_drivers::{
    DataSource, HealthMetrics, Initializable, LedCurrent, Max30100Config, StatusReportable,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("MAX30100 - Pulsioxímetro");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/dev/i2c-1".to_string());
    // Corriente de los LED opcional: low, medium, high o max
    let led_current = args
        .next()
        .map(|name| LedCurrent::from_name(&name))
        .unwrap_or_default();

    let i2c = match I2cdev::new(&path) {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    let mut sensor = sensor_drivers::new_max30100_i2c(i2c, Delay {});
    if !sensor.initialize() {
        eprintln!("Error al inicializar el MAX30100");
        return;
    }

    let config = Max30100Config {
        led_current,
        ..Max30100Config::default()
    };
    if let Err(e) = sensor.configure(config) {
        eprintln!("Error al configurar el MAX30100: {}", e);
        return;
    }

    let info = sensor.device_info();
    println!(
        "{} ({}) part=0x{:02X} rev=0x{:02X}",
        info.device,
        info.manufacturer,
        info.part_id.unwrap_or(0),
        info.revision_id.unwrap_or(0)
    );

    let period_ms = sensor
        .sample_rate_hz()
        .map(|hz| 1000 / u64::from(hz.max(1)))
        .unwrap_or(10);

    println!("Coloca el dedo sobre el sensor. Presiona Ctrl+C para detener...");
    let mut count = 0u32;
    while running.load(Ordering::SeqCst) {
        if !sensor.is_ready() {
            thread::sleep(Duration::from_millis(period_ms));
            continue;
        }

        match sensor.read_raw() {
            Ok(sample) => {
                count += 1;
                // Una línea de métricas cada segundo aproximadamente
                if count % 100 == 0 {
                    println!(
                        "IR={} Rojo={} Pulso={:?} bpm SpO2={:?} %",
                        sample.ir,
                        sample.red,
                        sensor.heart_rate(),
                        sensor.spo2()
                    );
                }
            }
            Err(e) => eprintln!("Error al leer el FIFO: {}", e),
        }
    }

    println!("Temperatura del chip: {:?}°C", sensor.temperature());
    println!("Ejemplo finalizado");
}
