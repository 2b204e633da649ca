pub mod pitch;
pub mod tuning;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: u8 = 12;
