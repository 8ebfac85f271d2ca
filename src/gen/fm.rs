use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gen::adsr::{AdsrEnvelope, AdsrParams};
use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/*
FM Synthesis Voice
==================

Frequency modulation here depends on three things:

  1. A bank of harmonics (multiples of the base phase rate) whose summed
     sines perturb the carrier's phase. Unlike FM in communications, musical
     modulation frequencies sit above the base frequency.
  2. An envelope applied to the modulating signal (modulation depth over
     time — this is what moves the timbre).
  3. An envelope applied to the final signal (amplitude over time).

Per sample, with phase_rate = 2π·f/fs:

    comp_sum      = Σ amps[c] · sin(mod_phase[c] += harmonics[c] · phase_rate)
    carrier_phase += phase_rate · (1 + comp_sum · mod_env.next_sample())
    output        = sin(carrier_phase) · sig_env.next_sample() · gain

Both envelopes must span the same total size; the voice's lifetime is that
shared size. Phase accumulators wrap into [0, 2π) after every increment, so
phase precision does not degrade over long streams (sine is periodic, the
output is unchanged).
*/

/// Harmonic multipliers and their amplitudes for the modulator bank.
///
/// The two lists pair element-wise and must have equal length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FmSynthModParams {
    /// Harmonics for frequency modulation, e.g. `[2.0, 7.0, 11.0]`.
    pub harmonics: Vec<f32>,
    /// Amplitude for each harmonic. Same length as `harmonics`.
    pub amps: Vec<f32>,
}

impl Default for FmSynthModParams {
    fn default() -> Self {
        Self {
            harmonics: vec![2.0],
            amps: vec![1.0],
        }
    }
}

impl FmSynthModParams {
    pub fn new(harmonics: Vec<f32>, amps: Vec<f32>) -> Result<Self, ConfigError> {
        if harmonics.len() != amps.len() {
            return Err(ConfigError::HarmonicsAmpsMismatch {
                harmonics: harmonics.len(),
                amps: amps.len(),
            });
        }
        Ok(Self { harmonics, amps })
    }
}

/// A single FM voice: modulator bank, modulation envelope, carrier envelope.
#[derive(Debug)]
pub struct FmSynthGenerator {
    mod_params: FmSynthModParams,
    mod_env: AdsrEnvelope,
    sig_env: AdsrEnvelope,

    size: usize,
    progress: usize,
    frame_size: usize,

    // Per-sample phase increment for the carrier.
    phase_rate: f32,
    // Per-sample phase increments for the modulator bank.
    mod_rates: Vec<f32>,

    carrier_phase: f32,
    mod_phases: Vec<f32>,

    gain: f32,
}

impl FmSynthGenerator {
    /// `phase_per_sample` is the carrier's per-sample phase increment,
    /// `2π·f/fs` (see [`crate::pitch`]).
    ///
    /// Fails if the harmonics/amps lists differ in length or the two
    /// envelope parameter sets span different total sizes.
    pub fn new(
        mod_params: FmSynthModParams,
        mod_env_params: AdsrParams,
        env_params: AdsrParams,
        phase_per_sample: f32,
        gain: f32,
    ) -> Result<Self, ConfigError> {
        if mod_env_params.total_size() != env_params.total_size() {
            return Err(ConfigError::EnvelopeSizeMismatch {
                mod_env: mod_env_params.total_size(),
                carrier_env: env_params.total_size(),
            });
        }

        if mod_params.harmonics.len() != mod_params.amps.len() {
            return Err(ConfigError::HarmonicsAmpsMismatch {
                harmonics: mod_params.harmonics.len(),
                amps: mod_params.amps.len(),
            });
        }

        let mod_rates: Vec<f32> = mod_params
            .harmonics
            .iter()
            .map(|mul| mul * phase_per_sample)
            .collect();
        let mod_phases = vec![0.0; mod_rates.len()];
        let size = env_params.total_size();

        Ok(Self {
            mod_params,
            mod_env: AdsrEnvelope::new(mod_env_params),
            sig_env: AdsrEnvelope::new(env_params),
            size,
            progress: 0,
            frame_size: DEFAULT_FRAME_SIZE,
            phase_rate: phase_per_sample,
            mod_rates,
            carrier_phase: 0.0,
            mod_phases,
            gain,
        })
    }

    /// Compute the next output sample.
    fn next_sample(&mut self) -> f32 {
        // Advance the modulator bank and sum its weighted components.
        let mut comp_sum = 0.0;
        for ((phase, &rate), &amp) in self
            .mod_phases
            .iter_mut()
            .zip(&self.mod_rates)
            .zip(&self.mod_params.amps)
        {
            *phase = (*phase + rate).rem_euclid(TAU);
            comp_sum += phase.sin() * amp;
        }

        // Modulation depth follows its own envelope.
        let mod_env = self.mod_env.next_sample();
        let mod_signal_value = 1.0 + comp_sum * mod_env;

        // Perturb the carrier's phase increment and synthesize.
        self.carrier_phase =
            (self.carrier_phase + self.phase_rate * mod_signal_value).rem_euclid(TAU);
        let signal_env = self.sig_env.next_sample();

        self.progress += 1;
        self.carrier_phase.sin() * signal_env * self.gain
    }
}

impl FrameGenerator for FmSynthGenerator {
    fn set_frame_size(&mut self, num_samples: usize) {
        self.frame_size = num_samples;
    }

    fn has_ended(&self) -> bool {
        self.progress >= self.size
    }

    fn next_frame(&mut self, frame: &mut Vec<f32>) -> bool {
        let remaining = self.size - self.progress;
        let result_size = self.frame_size.min(remaining);

        frame.clear();
        frame.extend((0..result_size).map(|_| self.next_sample()));

        self.progress >= self.size
    }

    fn size(&self) -> usize {
        self.size
    }
}
