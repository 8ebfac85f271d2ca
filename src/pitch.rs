//! Key, frequency, and phase-increment conversions.

use std::f32::consts::TAU;

/// Convert a key number to frequency in Hz.
/// Key 0 = A2 = 110 Hz, 12 keys per octave.
#[inline]
pub fn key_to_hz(key: f32) -> f32 {
    110.0 * 2.0_f32.powf(key / 12.0)
}

/// Per-sample phase increment for a frequency at a given sample rate.
#[inline]
pub fn phase_per_sample(freq: f32, sample_rate: f32) -> f32 {
    TAU * freq / sample_rate
}

/// Convert a key number straight to a per-sample phase increment.
#[inline]
pub fn key_to_phase_per_sample(key: f32, sample_rate: f32) -> f32 {
    phase_per_sample(key_to_hz(key), sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_zero_is_a2() {
        assert!((key_to_hz(0.0) - 110.0).abs() < 1e-4);
    }

    #[test]
    fn twelve_keys_double_frequency() {
        let low = key_to_hz(7.0);
        let high = key_to_hz(19.0);
        assert!((high / low - 2.0).abs() < 1e-5);
    }

    #[test]
    fn phase_increment_spans_tau_per_cycle() {
        // At 440 Hz and 44100 Hz sample rate, one cycle takes fs/f samples.
        let inc = phase_per_sample(440.0, 44_100.0);
        let samples_per_cycle = 44_100.0 / 440.0;
        assert!((inc * samples_per_cycle - TAU).abs() < 1e-3);
    }

    #[test]
    fn key_conversion_composes() {
        let direct = key_to_phase_per_sample(24.0, 16_000.0);
        let manual = phase_per_sample(key_to_hz(24.0), 16_000.0);
        assert_eq!(direct, manual);
    }
}
