//! Generator ownership, mixing, and lifecycle.

use crate::error::ConfigError;
use crate::gen::generator::FrameGenerator;
use crate::DEFAULT_FRAME_SIZE;

/// Add `frame` element-wise into `acc`.
///
/// Panics if the frame is longer than the accumulator; a generator handing
/// back more than one frame's worth of samples is a logic bug, not a
/// runtime condition.
#[inline]
fn accumulate(acc: &mut [f32], frame: &[f32]) {
    assert!(
        frame.len() <= acc.len(),
        "frame size cannot exceed output size ({} > {})",
        frame.len(),
        acc.len()
    );

    for (o, &x) in acc.iter_mut().zip(frame.iter()) {
        *o += x;
    }
}

/// Owns a set of active generators and mixes one frame from each per step.
///
/// Generators are admitted with [`Sequencer::add`], which stamps the
/// sequencer's frame size onto them and transfers ownership. Each call to
/// [`Sequencer::next_frame`] pulls every live generator once, sums the
/// results, and drops whichever generators reported exhaustion. Once every
/// admitted generator has ended, further frames are all zeros.
pub struct Sequencer {
    generators: Vec<Box<dyn FrameGenerator>>,
    frame_size: usize,
    gain: f32,
    // Reused pull buffer so steady-state mixing does not allocate per
    // generator.
    scratch: Vec<f32>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_SIZE, 1.0)
    }
}

impl Sequencer {
    pub fn new(frame_size: usize, gain: f32) -> Self {
        Self {
            generators: Vec::new(),
            frame_size,
            gain,
            scratch: Vec::with_capacity(frame_size),
        }
    }

    /// Admit a generator: set its frame size to ours and take ownership.
    pub fn add<G: FrameGenerator + 'static>(&mut self, mut gen: G) {
        gen.set_frame_size(self.frame_size);
        log::trace!(
            "admitting generator of {} samples, {} already active",
            gen.size(),
            self.generators.len()
        );
        self.generators.push(Box::new(gen));
    }

    /// Mix the next frame from every active generator.
    ///
    /// Generators that have already ended contribute nothing and are pruned
    /// after the pass, so removal never disturbs in-flight iteration. The
    /// mix is scaled by the sequencer's gain when it is not 1.0.
    pub fn next_frame(&mut self) -> Vec<f32> {
        let mut output = vec![0.0; self.frame_size];
        let mut prune = false;

        for gen in &mut self.generators {
            if gen.has_ended() {
                prune = true;
                continue;
            }
            let ended = gen.next_frame(&mut self.scratch);
            accumulate(&mut output, &self.scratch);
            prune |= ended;
        }

        if prune {
            self.generators.retain(|gen| !gen.has_ended());
        }

        if self.gain != 1.0 {
            for x in &mut output {
                *x *= self.gain;
            }
        }

        output
    }

    /// Mix the next frame into a caller-provided buffer.
    ///
    /// The buffer must be exactly one frame long; anything else is a
    /// configuration error, never truncated or padded.
    pub fn fill_next_frame(&mut self, out: &mut [f32]) -> Result<(), ConfigError> {
        if out.len() != self.frame_size {
            return Err(ConfigError::OutputLenMismatch {
                expected: self.frame_size,
                actual: out.len(),
            });
        }

        let frame = self.next_frame();
        out.copy_from_slice(&frame);
        Ok(())
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Number of generators currently owned (ended ones linger until the
    /// pass after their terminal pull).
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}
