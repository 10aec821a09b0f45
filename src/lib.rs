pub mod config;
pub mod encoding;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod run;

pub use config::{ConfigError, ContentMode, RunConfig, SizeSpec};
pub use encoding::minimal_be_bytes;
pub use pattern::{repeat_to_len, FixedPattern, Pattern, RandomPattern, SequentialPattern};
pub use progress::Progress;
pub use run::{run, RunSummary};

/// Exit status for rejected arguments, the 8-bit image of -2.
pub const EXIT_BAD_ARGUMENTS: u8 = 254;
