//! Algoritmos de salud sobre el buffer de muestras del MAX30100
//!
//! Son estimadores sencillos y sin calibrar: la frecuencia cardiaca cuenta
//! picos en una ventana de 50 muestras y la SpO2 usa la relación de
//! relaciones AC/DC con la curva empírica `110 - 25·R`. No tienen precisión
//! clínica.

use crate::conversion::round_to;

/// Muestras usadas para la frecuencia cardiaca (0,5 s a 100 Hz)
pub const HEART_RATE_WINDOW: usize = 50;
/// Muestras usadas para la SpO2
pub const SPO2_WINDOW: usize = 10;
/// Picos por media ventana -> pulsaciones por minuto
pub const BPM_PER_PEAK: u32 = 120;

pub const MIN_HEART_RATE_BPM: u32 = 40;
pub const MAX_HEART_RATE_BPM: u32 = 200;
pub const MIN_SPO2_PERCENT: f64 = 70.0;
pub const MAX_SPO2_PERCENT: f64 = 100.0;

fn tail(samples: &[u16], n: usize) -> &[u16] {
    &samples[samples.len().saturating_sub(n)..]
}

fn mean(window: &[u16]) -> f64 {
    window.iter().map(|&v| v as f64).sum::<f64>() / window.len() as f64
}

/// Componentes (AC, DC) de una ventana: amplitud pico a pico y media
fn ac_dc(window: &[u16]) -> (f64, f64) {
    let max = window.iter().copied().max().unwrap_or(0);
    let min = window.iter().copied().min().unwrap_or(0);
    ((max - min) as f64, mean(window))
}

/// Cuenta máximos locales estrictos por encima de la media de la ventana
pub fn count_peaks(window: &[u16]) -> usize {
    if window.len() < 3 {
        return 0;
    }
    let threshold = mean(window);

    window
        .windows(3)
        .filter(|w| w[1] as f64 > threshold && w[1] > w[0] && w[1] > w[2])
        .count()
}

/// Pulsaciones por minuto sin filtrar a partir de los picos de una ventana
pub fn peaks_to_bpm(peaks: usize) -> u32 {
    peaks as u32 * BPM_PER_PEAK
}

/// Frecuencia cardiaca a partir de las últimas 50 muestras IR
///
/// # Arguments
/// * `ir` - Muestras IR, de la más antigua a la más reciente
///
/// # Returns
/// Pulsaciones por minuto, o `None` si hay menos de 50 muestras o el valor
/// cae fuera de [40, 200]
pub fn heart_rate_bpm(ir: &[u16]) -> Option<u16> {
    if ir.len() < HEART_RATE_WINDOW {
        return None;
    }

    let bpm = peaks_to_bpm(count_peaks(tail(ir, HEART_RATE_WINDOW)));
    (MIN_HEART_RATE_BPM..=MAX_HEART_RATE_BPM)
        .contains(&bpm)
        .then_some(bpm as u16)
}

/// Relación R = (AC_rojo / DC_rojo) / (AC_ir / DC_ir) sobre las últimas 10
/// muestras. Vale 0 si la señal IR no tiene componente AC y es `None` si
/// alguna componente DC es cero.
pub fn ratio_of_ratios(ir: &[u16], red: &[u16]) -> Option<f64> {
    if ir.len() < SPO2_WINDOW || red.len() < SPO2_WINDOW {
        return None;
    }

    let (ir_ac, ir_dc) = ac_dc(tail(ir, SPO2_WINDOW));
    let (red_ac, red_dc) = ac_dc(tail(red, SPO2_WINDOW));

    if ir_dc == 0.0 || red_dc == 0.0 {
        return None;
    }

    if ir_ac > 0.0 {
        Some((red_ac / red_dc) / (ir_ac / ir_dc))
    } else {
        Some(0.0)
    }
}

/// Saturación de oxígeno estimada como `110 - 25·R`
///
/// # Arguments
/// * `ir` - Muestras IR, de la más antigua a la más reciente
/// * `red` - Muestras del LED rojo, en el mismo orden
///
/// # Returns
/// SpO2 en porcentaje con 1 decimal, o `None` si faltan muestras, alguna
/// componente DC es cero o el valor cae fuera de [70, 100]
pub fn spo2_percent(ir: &[u16], red: &[u16]) -> Option<f32> {
    let r = ratio_of_ratios(ir, red)?;
    let spo2 = 110.0 - 25.0 * r;

    (MIN_SPO2_PERCENT..=MAX_SPO2_PERCENT)
        .contains(&spo2)
        .then(|| round_to(spo2 as f32, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with_peaks(at: &[usize]) -> Vec<u16> {
        (0..HEART_RATE_WINDOW)
            .map(|i| if at.contains(&i) { 200 } else { 100 })
            .collect()
    }

    #[test]
    fn test_three_peaks_give_360_and_are_rejected() {
        let window = window_with_peaks(&[10, 25, 40]);
        assert_eq!(count_peaks(&window), 3);
        assert_eq!(peaks_to_bpm(count_peaks(&window)), 360);
        // 360 bpm queda fuera del rango fisiológico
        assert_eq!(heart_rate_bpm(&window), None);
    }

    #[test]
    fn test_single_peak_is_120_bpm() {
        let window = window_with_peaks(&[20]);
        assert_eq!(heart_rate_bpm(&window), Some(120));
    }

    #[test]
    fn test_flat_window_has_no_heart_rate() {
        let window = vec![512u16; HEART_RATE_WINDOW];
        assert_eq!(count_peaks(&window), 0);
        assert_eq!(heart_rate_bpm(&window), None);
    }

    #[test]
    fn test_heart_rate_needs_fifty_samples() {
        let window = window_with_peaks(&[20]);
        assert_eq!(heart_rate_bpm(&window[..49]), None);
    }

    #[test]
    fn test_heart_rate_uses_most_recent_window() {
        // Picos antiguos fuera de la ventana de 50 no cuentan
        let mut samples = window_with_peaks(&[5, 15, 30]);
        samples.extend(window_with_peaks(&[20]));
        assert_eq!(heart_rate_bpm(&samples), Some(120));
    }

    #[test]
    fn test_peaks_at_window_edges_are_ignored() {
        let window = window_with_peaks(&[0, 49]);
        assert_eq!(count_peaks(&window), 0);
    }

    #[test]
    fn test_spo2_flat_ir_is_rejected() {
        let ir = vec![1000u16; SPO2_WINDOW];
        let red: Vec<u16> = (0..SPO2_WINDOW as u16).map(|i| 900 + i * 10).collect();

        assert_eq!(ratio_of_ratios(&ir, &red), Some(0.0));
        // R = 0 -> 110 %, por encima del límite
        assert_eq!(spo2_percent(&ir, &red), None);
    }

    #[test]
    fn test_spo2_estimate() {
        let ir: Vec<u16> = (0..SPO2_WINDOW)
            .map(|i| if i % 2 == 0 { 1000 } else { 1100 })
            .collect();
        let red: Vec<u16> = (0..SPO2_WINDOW)
            .map(|i| if i % 2 == 0 { 1000 } else { 1040 })
            .collect();

        // R = (40/1020) / (100/1050) = 0.4118 -> 99.7 %
        let spo2 = spo2_percent(&ir, &red).unwrap();
        assert!((spo2 - 99.7).abs() < 1e-4);
    }

    #[test]
    fn test_spo2_zero_dc_is_absent() {
        let ir = vec![0u16; SPO2_WINDOW];
        let red = vec![500u16; SPO2_WINDOW];
        assert_eq!(ratio_of_ratios(&ir, &red), None);
        assert_eq!(spo2_percent(&ir, &red), None);
    }

    #[test]
    fn test_spo2_needs_ten_samples() {
        let ir = vec![1000u16; 9];
        let red = vec![1000u16; 9];
        assert_eq!(spo2_percent(&ir, &red), None);
    }
}
