//! Pull-based frame generators.
//!
//! Every generator produces a fixed total number of samples, handed out one
//! frame at a time through the [`FrameGenerator`] contract. Generators are
//! black boxes to each other; only the sequencer (and internally the FM
//! voice) composes them.

/// Four-phase ADSR amplitude envelope.
pub mod adsr;
/// Constant-valued signal.
pub mod constant;
/// Geometrically decaying signal.
pub mod exponential;
/// FM synthesis voice built from a modulator bank and two envelopes.
pub mod fm;
/// The capability contract shared by all generators.
pub mod generator;
/// Linear ramp signal.
pub mod ramp;

pub use adsr::{AdsrEnvelope, AdsrParams};
pub use constant::ConstantGenerator;
pub use exponential::{halving_size_to_decay, ExponentialGenerator};
pub use fm::{FmSynthGenerator, FmSynthModParams};
pub use generator::FrameGenerator;
pub use ramp::RampGenerator;
