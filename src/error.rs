use thiserror::Error;

/// Construction-time configuration errors.
///
/// These are reported immediately and are not recoverable by the engine; the
/// caller fixes the inputs and retries. Contract violations discovered during
/// mixing (a generator handing back more samples than the frame size) are
/// logic bugs, not runtime conditions, and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Harmonic multipliers and amplitudes must pair element-wise.
    #[error("harmonics and amps lengths differ ({harmonics} vs {amps})")]
    HarmonicsAmpsMismatch { harmonics: usize, amps: usize },

    /// FM synthesis needs its modulation and carrier envelopes to run for
    /// the same number of samples.
    #[error("modulation and carrier envelope sizes differ ({mod_env} vs {carrier_env})")]
    EnvelopeSizeMismatch { mod_env: usize, carrier_env: usize },

    /// An external output buffer must be exactly one frame long.
    #[error("output buffer length {actual} does not match frame size {expected}")]
    OutputLenMismatch { expected: usize, actual: usize },
}
