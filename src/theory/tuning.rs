use crate::theory::pitch::PitchClass;

/// Strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Standard tuning Mi La Re Sol Si Mi, lowest string first.
pub const STANDARD_TUNING: Tuning = Tuning::new([
    PitchClass::new(4),
    PitchClass::new(9),
    PitchClass::new(2),
    PitchClass::new(7),
    PitchClass::new(11),
    PitchClass::new(4),
]);

/// Open string pitches, index 0 is the lowest pitched string (6th).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tuning {
    strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    pub const fn new(strings: [PitchClass; STRING_COUNT]) -> Self {
        Self { strings }
    }

    pub const fn open_string(&self, string_index: usize) -> PitchClass {
        self.strings[string_index]
    }

    /// Pitch sounding on `string_index` when pressed at `fret`.
    ///
    /// # Panics
    ///
    /// If `string_index` is not below `STRING_COUNT`.
    pub const fn pitch_at(&self, string_index: usize, fret: u8) -> PitchClass {
        self.strings[string_index].transpose(fret)
    }
}

/// `pitch_at` on the standard tuning.
///
/// # Panics
///
/// If `string_index` is not below `STRING_COUNT`.
pub const fn pitch_at(string_index: usize, fret: u8) -> PitchClass {
    STANDARD_TUNING.pitch_at(string_index, fret)
}

/// String indices in display order, highest pitched string first.
///
/// The only place where the low-to-high indexing is flipped for display.
pub fn strings_top_to_bottom() -> impl Iterator<Item = usize> {
    (0..STRING_COUNT).rev()
}

/// Conventional string number, 1 for the highest pitched string.
pub const fn string_number(string_index: usize) -> usize {
    STRING_COUNT - string_index
}
