/// Core trait for pull-based sample generators.
///
/// A generator is constructed with its full parameter set and a fixed total
/// sample count, then drained frame by frame. Every pull yields exactly
/// `frame_size` samples, except the terminal pull, which yields whatever
/// remainder is left. A generator never yields zero samples while active.
///
/// Calling `next_frame` after `has_ended()` has turned true is outside the
/// contract; callers check first.
pub trait FrameGenerator: Send {
    /// Set the block size used by subsequent pulls.
    ///
    /// Must be called before the first pull and not again mid-stream.
    fn set_frame_size(&mut self, num_samples: usize);

    /// True once all `size()` samples have been produced.
    fn has_ended(&self) -> bool;

    /// Fill `frame` with the next up-to-`frame_size` samples, replacing its
    /// previous contents. Returns whether the stream is now exhausted.
    fn next_frame(&mut self, frame: &mut Vec<f32>) -> bool;

    /// Total number of samples this generator will ever emit.
    fn size(&self) -> usize;
}

/// Allow boxed generators to be used as generators (for dynamic dispatch).
impl FrameGenerator for Box<dyn FrameGenerator> {
    fn set_frame_size(&mut self, num_samples: usize) {
        (**self).set_frame_size(num_samples)
    }

    fn has_ended(&self) -> bool {
        (**self).has_ended()
    }

    fn next_frame(&mut self, frame: &mut Vec<f32>) -> bool {
        (**self).next_frame(frame)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Drain a generator to completion, concatenating every frame.
///
/// Test and offline-rendering helper; realtime callers pull frame by frame.
pub fn collect_frames<G: FrameGenerator>(gen: &mut G) -> Vec<f32> {
    let mut output = Vec::with_capacity(gen.size());
    let mut frame = Vec::new();
    while !gen.has_ended() {
        gen.next_frame(&mut frame);
        output.extend_from_slice(&frame);
    }
    output
}
