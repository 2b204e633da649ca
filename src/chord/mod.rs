pub mod fret_input;
pub mod resolver;

/// Fret used when no usable fret is supplied or found
pub const DEFAULT_FRET: u8 = 3;

/// Frets drawn on the reference fretboard
pub const DEFAULT_BOARD_FRETS: u8 = 15;
