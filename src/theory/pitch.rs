use crate::theory::SEMITONES;
use crate::ChordError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Note spellings accepted as input, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

/// Labels shown to the user, sharps carry both enharmonic spellings.
pub const DISPLAY_NAMES: [&str; 12] = [
    "Do",
    "Do♯ / Re♭",
    "Re",
    "Re♯ / Mi♭",
    "Mi",
    "Fa",
    "Fa♯ / Sol♭",
    "Sol",
    "Sol♯ / La♭",
    "La",
    "La♯ / Si♭",
    "Si",
];

/// One of the 12 equal-tempered pitches, octave independent.
///
/// Always in `[0, 11]`, chromatic ascending from `Do`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any value into the chromatic range.
    pub const fn new(value: u8) -> Self {
        Self(value % SEMITONES)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Moves up by `semitones`, wrapping around the octave.
    pub const fn transpose(self, semitones: u8) -> Self {
        let raised = (self.0 as u16 + semitones as u16) % SEMITONES as u16;
        Self(raised as u8)
    }

    /// Input spelling, e.g. `Do#`
    pub const fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    pub const fn display_name(self) -> &'static str {
        DISPLAY_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pitch_class_of(s)
    }
}

/// Look up the pitch class of one of the 12 recognized spellings.
pub fn pitch_class_of(note_name: &str) -> Result<PitchClass, ChordError> {
    NOTE_NAMES
        .iter()
        .position(|name| *name == note_name)
        .map(|index| PitchClass::new(index as u8))
        .ok_or_else(|| ChordError::InvalidNote(note_name.to_string()))
}

/// Label shown to the user for a pitch class.
pub const fn display_name(pitch: PitchClass) -> &'static str {
    pitch.display_name()
}
