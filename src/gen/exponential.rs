use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/// Per-sample decay ratio for an amplitude that halves every `halving_size`
/// samples: `0.5^(1/halving_size)`.
#[inline]
pub fn halving_size_to_decay(halving_size: f32) -> f32 {
    0.5_f32.powf(1.0 / halving_size)
}

/// Geometrically decaying signal.
///
/// Emits `current`, then multiplies it by a fixed per-sample decay ratio, so
/// the sample at index `k * halving_size` is approximately `start / 2^k`.
/// This is the natural shape of struck and plucked amplitudes.
pub struct ExponentialGenerator {
    start: f32,
    decay: f32,
    size: usize,
    current: f32,
    progress: usize,
    frame_size: usize,
}

impl ExponentialGenerator {
    /// `halving_size`: number of samples over which the signal halves.
    pub fn new(start: f32, halving_size: f32, size: usize) -> Self {
        Self {
            start,
            decay: halving_size_to_decay(halving_size),
            size,
            current: start,
            progress: 0,
            frame_size: DEFAULT_FRAME_SIZE,
        }
    }

    /// Per-sample decay ratio. Test-support accessor.
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Starting value, untouched by pulls. Test-support accessor.
    pub fn start(&self) -> f32 {
        self.start
    }
}

impl FrameGenerator for ExponentialGenerator {
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
        frame.extend((0..result_size).map(|_| {
            let sample = self.current;
            self.current *= self.decay;
            sample
        }));

        self.progress += frame.len();
        self.progress >= self.size
    }

    fn size(&self) -> usize {
        self.size
    }
}
