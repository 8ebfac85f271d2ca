use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/// Emits the same value for a fixed number of samples.
///
/// The simplest generator, mostly useful for DC offsets and as a predictable
/// signal in tests.
pub struct ConstantGenerator {
    value: f32,
    size: usize,
    remaining: usize,
    frame_size: usize,
}

impl ConstantGenerator {
    pub fn new(value: f32, size: usize) -> Self {
        Self {
            value,
            size,
            remaining: size,
            frame_size: DEFAULT_FRAME_SIZE,
        }
    }

    /// Samples not yet emitted. Test-support accessor.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl FrameGenerator for ConstantGenerator {
    fn set_frame_size(&mut self, num_samples: usize) {
        self.frame_size = num_samples;
    }

    fn has_ended(&self) -> bool {
        self.remaining == 0
    }

    fn next_frame(&mut self, frame: &mut Vec<f32>) -> bool {
        let result_size = self.frame_size.min(self.remaining);

        frame.clear();
        frame.resize(result_size, self.value);
        self.remaining -= result_size;

        self.remaining == 0
    }

    fn size(&self) -> usize {
        self.size
    }
}
