use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/// Linear interpolation from `start` to `end` over a fixed number of samples.
///
/// The first emitted sample equals `start` and the last equals `end`; every
/// step in between changes by the same delta. Sample `i` is a weighted mix
/// of the endpoints over `span = size - 1`:
///
/// ```text
/// alpha = (span - i) / span
/// beta  = i / span
/// value = alpha * start + beta * end
/// ```
///
/// A single-sample ramp has no span to divide by; it emits `start` once.
pub struct RampGenerator {
    start: f32,
    end: f32,
    size: usize,
    progress: usize,
    frame_size: usize,
}

impl RampGenerator {
    pub fn new(start: f32, end: f32, size: usize) -> Self {
        Self {
            start,
            end,
            size,
            progress: 0,
            frame_size: DEFAULT_FRAME_SIZE,
        }
    }
}

impl FrameGenerator for RampGenerator {
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
        if self.size == 1 {
            frame.resize(result_size, self.start);
        } else {
            let span = (self.size - 1) as f32;
            frame.extend((0..result_size).map(|ii| {
                let pos = (self.progress + ii) as f32;
                let alpha = (span - pos) / span;
                let beta = pos / span;
                alpha * self.start + beta * self.end
            }));
        }

        self.progress += frame.len();
        self.progress >= self.size
    }

    fn size(&self) -> usize {
        self.size
    }
}
