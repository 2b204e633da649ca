//! Powerchord - power chord fretboard resolver and tablature printer
//!
//! This library provides:
//! - Pitch class arithmetic over the standard guitar tuning
//! - Placement of power chords (root, fifth, optional octave) on the fretboard
//! - Text tablature rendering of the placed chord
//!
//! # Example
//!
//! ```
//! use powerchord::{format_tab, pitch_class_of, resolve, ChordShape, ChordSpec, TabLabels};
//!
//! let root = pitch_class_of("Do").unwrap();
//! let spec = ChordSpec::new(root, ChordShape::LowStringRooted, 3, false);
//! let chord = resolve(&spec);
//! assert_eq!(chord.effective_fret, 8);
//! println!("{}", format_tab(&chord.positions, TabLabels::English));
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod render;
pub mod theory;

// Re-export main types for convenience
pub use chord::{
    fret_input::{clamp_fret, parse_fret_input},
    resolver::{
        find_fret_for_root, resolve, suggest_fret, ChordShape, ChordSpec, MutedString,
        ResolvedChord, Role, SoundingPosition,
    },
    DEFAULT_BOARD_FRETS, DEFAULT_FRET,
};
pub use config::Config;
pub use error::ChordError;
pub use render::{
    summary::summary_line,
    tab::{format_tab, TabLabels},
};
pub use theory::{
    pitch::{display_name, pitch_class_of, PitchClass},
    tuning::{pitch_at, string_number, strings_top_to_bottom, Tuning, STANDARD_TUNING, STRING_COUNT},
};
