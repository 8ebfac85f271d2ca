#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/*
ADSR Envelope
=============

A four-phase amplitude shape, measured in samples rather than seconds so the
same parameters render identically at any sample rate.

  Level
    1.0 ┐    ╱╲
        │   ╱  ╲
    L1  │  ╱    ╲_____
        │ ╱           ╲____
    L2  │╱                 ╲
    0.0 └───────────────────╲──→ samples
         Attack Decay Sustain Release
          (A)    (D)    (S)     (R)

Phase boundaries are cumulative sample indices:

    decay_start   = A
    sustain_start = A + D
    release_start = A + D + S
    total         = A + D + S + R

For progress index i (one increment per produced sample):

  Attack    i < decay_start      linear 0 → 1:        i / A
  Decay     i < sustain_start    linear 1 → L1:       1 - (i - A)/D * (1 - L1)
  Sustain   i < release_start    log-linear L1 → L2:  exp((x·ln L2 + (M-x)·ln L1) / M)
                                 where x = i - sustain_start, M = S - 1
  Release   otherwise            linear L2 → 0:       L2 - (i - release_start)/R * L2

The sustain phase interpolates in the log domain, i.e. a constant per-sample
multiplicative ratio instead of a constant additive step. A zero-length phase
is skipped outright by the boundary comparisons. A sustain of exactly one
sample has no interior to interpolate (M = 0) and holds L1 for that sample.
*/

/// Envelope phase durations (in samples) and the two sustain levels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack duration in samples.
    pub attack: usize,
    /// Decay duration in samples.
    pub decay: usize,
    /// Sustain duration in samples.
    pub sustain: usize,
    /// Release duration in samples.
    pub release: usize,
    /// Level at the start of sustain. Must be positive.
    pub slevel1: f32,
    /// Level at the end of sustain. Must be positive.
    pub slevel2: f32,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 100,
            decay: 100,
            sustain: 16_000,
            release: 100,
            slevel1: 0.5,
            slevel2: 0.1,
        }
    }
}

impl AdsrParams {
    /// Total number of samples the envelope spans.
    pub fn total_size(&self) -> usize {
        self.attack + self.decay + self.sustain + self.release
    }
}

/// Four-phase envelope state machine driven by a per-sample progress index.
#[derive(Debug)]
pub struct AdsrEnvelope {
    params: AdsrParams,
    progress: usize,
    decay_start: usize,
    sustain_start: usize,
    release_start: usize,
    log_slevel1: f32,
    log_slevel2: f32,
    frame_size: usize,
    size: usize,
}

impl AdsrEnvelope {
    pub fn new(params: AdsrParams) -> Self {
        debug_assert!(params.slevel1 > 0.0 && params.slevel2 > 0.0);

        let decay_start = params.attack;
        let sustain_start = decay_start + params.decay;
        let release_start = sustain_start + params.sustain;

        Self {
            params,
            progress: 0,
            decay_start,
            sustain_start,
            release_start,
            log_slevel1: params.slevel1.ln(),
            log_slevel2: params.slevel2.ln(),
            frame_size: DEFAULT_FRAME_SIZE,
            size: release_start + params.release,
        }
    }

    /// Produce one envelope sample and advance the progress index.
    ///
    /// This is the unit of work; `next_frame` calls it up to `frame_size`
    /// times per pull, and the FM voice steps it sample-by-sample in lock
    /// step with its oscillators.
    pub fn next_sample(&mut self) -> f32 {
        let index = self.progress;

        let result = if index < self.decay_start {
            // Attack: linear 0 -> 1
            index as f32 / self.params.attack as f32
        } else if index < self.sustain_start {
            // Decay: linear 1 -> slevel1
            let position = (index - self.decay_start) as f32;
            let max_change = 1.0 - self.params.slevel1;
            1.0 - position / self.params.decay as f32 * max_change
        } else if index < self.release_start {
            // Sustain: linear in the log domain, slevel1 -> slevel2
            let x = (index - self.sustain_start) as f32;
            let last = self.params.sustain - 1;
            if last == 0 {
                self.params.slevel1
            } else {
                let m = last as f32;
                let y = (x * self.log_slevel2 + (m - x) * self.log_slevel1) / m;
                y.exp()
            }
        } else {
            // Release: linear slevel2 -> 0
            let position = (index - self.release_start) as f32;
            let deviation = position / self.params.release as f32 * self.params.slevel2;
            self.params.slevel2 - deviation
        };

        self.progress += 1;
        result
    }
}

impl FrameGenerator for AdsrEnvelope {
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
