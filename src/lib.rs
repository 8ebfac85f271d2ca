pub mod error;
pub mod gen; // Pull-based frame generators
pub mod pitch; // Key-to-frequency helpers
pub mod sequencer; // Generator ownership and mixing

pub use error::ConfigError;
pub use sequencer::Sequencer;

/// Frame size generators use until a sequencer stamps its own onto them.
pub const DEFAULT_FRAME_SIZE: usize = 128;
