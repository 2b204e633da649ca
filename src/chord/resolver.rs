use crate::chord::DEFAULT_FRET;
use crate::theory::pitch::PitchClass;
use crate::theory::tuning::{pitch_at, STRING_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Frets scanned when looking for the root on a string (one full octave)
const SEARCH_FRETS: RangeInclusive<u8> = 1..=12;

/// Frets preferred by the search, easy to reach from the open position
const COMFORTABLE_FRETS: RangeInclusive<u8> = 2..=7;

/// Fifth and octave sit two frets above the root
const FIFTH_FRET_OFFSET: u8 = 2;

/// Muted strings are drawn at the nut
const MUTE_MARKER_FRET: u8 = 0;

/// Which string carries the root of the power chord.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChordShape {
    /// Root on the 6th string
    #[default]
    #[serde(rename = "low")]
    LowStringRooted,
    /// Root on the 5th string
    #[serde(rename = "second")]
    SecondStringRooted,
}

impl ChordShape {
    pub const fn root_string_index(self) -> usize {
        match self {
            Self::LowStringRooted => 0,
            Self::SecondStringRooted => 1,
        }
    }

    /// Strings left silent by the usual fingering of the shape.
    pub const fn muted_strings(self) -> &'static [usize] {
        match self {
            Self::LowStringRooted => &[3, 4, 5],
            Self::SecondStringRooted => &[0, 4, 5],
        }
    }

    /// Ordinal of the root string, e.g. `6th`
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowStringRooted => "6th",
            Self::SecondStringRooted => "5th",
        }
    }
}

/// A chord request, built fresh for every render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChordSpec {
    pub root: PitchClass,
    pub shape: ChordShape,
    pub fret: u8,
    pub include_octave: bool,
}

impl ChordSpec {
    pub const fn new(root: PitchClass, shape: ChordShape, fret: u8, include_octave: bool) -> Self {
        Self {
            root,
            shape,
            fret,
            include_octave,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Root,
    Fifth,
    Octave,
}

/// A fretted note of the chord, `string_index` 0 is the lowest string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SoundingPosition {
    pub string_index: usize,
    pub fret: u8,
    pub role: Role,
}

impl SoundingPosition {
    pub const fn new(string_index: usize, fret: u8, role: Role) -> Self {
        Self {
            string_index,
            fret,
            role,
        }
    }

    /// Pitch sounding at this position in standard tuning.
    ///
    /// # Panics
    ///
    /// If `string_index` is not below `STRING_COUNT`.
    pub const fn pitch(&self) -> PitchClass {
        pitch_at(self.string_index, self.fret)
    }
}

/// A string that must not ring, `marker_fret` only anchors the mute marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct MutedString {
    pub string_index: usize,
    pub marker_fret: u8,
}

/// Outcome of `resolve`.
///
/// `effective_fret` may differ from the requested fret and should be
/// reflected back to the caller's input state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChord {
    pub root: PitchClass,
    pub shape: ChordShape,
    pub include_octave: bool,
    pub effective_fret: u8,
    pub positions: Vec<SoundingPosition>,
    pub muted: Vec<MutedString>,
}

impl ResolvedChord {
    pub const fn root_string_index(&self) -> usize {
        self.shape.root_string_index()
    }

    pub fn position(&self, role: Role) -> Option<&SoundingPosition> {
        self.positions.iter().find(|p| p.role == role)
    }

    /// Positions that fit on a fretboard with `board_frets` frets (nut included).
    pub fn positions_on_board(&self, board_frets: u8) -> impl Iterator<Item = &SoundingPosition> {
        self.positions.iter().filter(move |p| p.fret < board_frets)
    }
}

/// Find a fret where `string_index` sounds `root`.
///
/// The earliest match between frets 2 and 7 wins, otherwise the earliest
/// match over the octave.
///
/// # Panics
///
/// If `string_index` is not below `STRING_COUNT`.
pub fn find_fret_for_root(root: PitchClass, string_index: usize) -> u8 {
    let mut first_match = None;
    for fret in SEARCH_FRETS {
        if pitch_at(string_index, fret) != root {
            continue;
        }
        if COMFORTABLE_FRETS.contains(&fret) {
            return fret;
        }
        first_match.get_or_insert(fret);
    }
    // an octave of frets covers every pitch class
    first_match.unwrap_or(DEFAULT_FRET)
}

/// Fret suggested for `root` played with `shape`.
pub fn suggest_fret(root: PitchClass, shape: ChordShape) -> u8 {
    find_fret_for_root(root, shape.root_string_index())
}

/// Place the power chord described by `spec` on the fretboard.
///
/// The root string always sounds `spec.root`: when the requested fret does not
/// match, a fret is picked by `find_fret_for_root`.
pub fn resolve(spec: &ChordSpec) -> ResolvedChord {
    let root_string = spec.shape.root_string_index();
    let effective_fret = if pitch_at(root_string, spec.fret) == spec.root {
        spec.fret
    } else {
        let found = find_fret_for_root(spec.root, root_string);
        log::debug!(
            "Fret {} does not sound {} on string {root_string}, using fret {found}",
            spec.fret,
            spec.root
        );
        found
    };

    let upper_fret = effective_fret.saturating_add(FIFTH_FRET_OFFSET);
    let mut positions = Vec::with_capacity(3);
    positions.push(SoundingPosition::new(root_string, effective_fret, Role::Root));
    push_on_instrument(&mut positions, root_string + 1, upper_fret, Role::Fifth);
    if spec.include_octave {
        push_on_instrument(&mut positions, root_string + 2, upper_fret, Role::Octave);
    }

    let muted = spec
        .shape
        .muted_strings()
        .iter()
        .map(|&string_index| MutedString {
            string_index,
            marker_fret: MUTE_MARKER_FRET,
        })
        .collect();

    ResolvedChord {
        root: spec.root,
        shape: spec.shape,
        include_octave: spec.include_octave,
        effective_fret,
        positions,
        muted,
    }
}

/// Skip positions past the highest string instead of failing.
fn push_on_instrument(
    positions: &mut Vec<SoundingPosition>,
    string_index: usize,
    fret: u8,
    role: Role,
) {
    if string_index >= STRING_COUNT {
        log::debug!("Skipping {role:?} on missing string {string_index}");
        return;
    }
    positions.push(SoundingPosition::new(string_index, fret, role));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::pitch::pitch_class_of;
    use crate::theory::SEMITONES;

    const SHAPES: [ChordShape; 2] = [ChordShape::LowStringRooted, ChordShape::SecondStringRooted];

    fn init_logger() {
        env_logger::builder()
            .is_test(true)
            .try_init()
            .unwrap_or_default();
    }

    fn all_specs() -> impl Iterator<Item = ChordSpec> {
        (0..SEMITONES).flat_map(|root| {
            SHAPES.into_iter().flat_map(move |shape| {
                (0..15).flat_map(move |fret| {
                    [false, true].map(|octave| {
                        ChordSpec::new(PitchClass::new(root), shape, fret, octave)
                    })
                })
            })
        })
    }

    #[test]
    fn test_find_fret_low_string() {
        // open 6th string is Mi(4)
        let expected = [8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7];
        for (root, fret) in expected.into_iter().enumerate() {
            let found = find_fret_for_root(PitchClass::new(root as u8), 0);
            assert_eq!(found, fret, "root:{root}");
        }
    }

    #[test]
    fn test_find_fret_second_string() {
        // open 5th string is La(9)
        let expected = [3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2];
        for (root, fret) in expected.into_iter().enumerate() {
            let found = find_fret_for_root(PitchClass::new(root as u8), 1);
            assert_eq!(found, fret, "root:{root}");
        }
    }

    #[test]
    fn test_find_fret_prefers_comfortable_range() {
        for string_index in 0..STRING_COUNT {
            for root in 0..SEMITONES {
                let root = PitchClass::new(root);
                let found = find_fret_for_root(root, string_index);
                let comfortable = (2..=7).find(|&f| pitch_at(string_index, f) == root);
                let any = (1..=12).find(|&f| pitch_at(string_index, f) == root);
                assert_eq!(Some(found), comfortable.or(any), "string:{string_index} root:{root}");
            }
        }
    }

    #[test]
    fn test_suggest_fret() {
        let sol = pitch_class_of("Sol").unwrap();
        assert_eq!(suggest_fret(sol, ChordShape::LowStringRooted), 3);
        assert_eq!(suggest_fret(sol, ChordShape::SecondStringRooted), 10);
    }

    #[test]
    fn test_resolve_do_on_low_string() {
        init_logger();
        let do_root = pitch_class_of("Do").unwrap();
        let spec = ChordSpec::new(do_root, ChordShape::LowStringRooted, 3, false);
        let chord = resolve(&spec);
        assert_eq!(chord.effective_fret, 8);
        assert_eq!(
            chord.positions,
            vec![
                SoundingPosition::new(0, 8, Role::Root),
                SoundingPosition::new(1, 10, Role::Fifth),
            ]
        );
        let muted: Vec<(usize, u8)> = chord
            .muted
            .iter()
            .map(|m| (m.string_index, m.marker_fret))
            .collect();
        assert_eq!(muted, vec![(3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_resolve_keeps_matching_fret() {
        let la = pitch_class_of("La").unwrap();
        let spec = ChordSpec::new(la, ChordShape::SecondStringRooted, 0, true);
        let chord = resolve(&spec);
        assert_eq!(chord.effective_fret, 0);
        assert_eq!(
            chord.positions,
            vec![
                SoundingPosition::new(1, 0, Role::Root),
                SoundingPosition::new(2, 2, Role::Fifth),
                SoundingPosition::new(3, 2, Role::Octave),
            ]
        );
        let muted: Vec<usize> = chord.muted.iter().map(|m| m.string_index).collect();
        assert_eq!(muted, vec![0, 4, 5]);

        // the same pitch an octave up is kept as well
        let spec = ChordSpec::new(la, ChordShape::SecondStringRooted, 12, false);
        assert_eq!(resolve(&spec).effective_fret, 12);
    }

    #[test]
    fn test_resolve_root_consistency() {
        for spec in all_specs() {
            let chord = resolve(&spec);
            let root_string = spec.shape.root_string_index();
            assert_eq!(pitch_at(root_string, chord.effective_fret), spec.root, "{spec:?}");
            let root = chord.position(Role::Root).unwrap();
            assert_eq!(root.string_index, root_string);
            assert_eq!(root.fret, chord.effective_fret);
        }
    }

    #[test]
    fn test_resolve_fifth_interval() {
        for spec in all_specs() {
            let chord = resolve(&spec);
            let fifth = chord.position(Role::Fifth).unwrap();
            assert_eq!(fifth.pitch(), spec.root.transpose(7), "{spec:?}");
            assert_eq!(fifth.fret, chord.effective_fret + 2, "{spec:?}");
            assert_eq!(fifth.string_index, chord.root_string_index() + 1);
        }
    }

    #[test]
    fn test_resolve_octave() {
        for spec in all_specs() {
            let chord = resolve(&spec);
            match chord.position(Role::Octave) {
                Some(octave) => {
                    assert!(spec.include_octave, "{spec:?}");
                    assert_eq!(octave.pitch(), spec.root, "{spec:?}");
                    assert_eq!(octave.string_index, chord.root_string_index() + 2);
                    assert_eq!(chord.positions.len(), 3);
                }
                None => {
                    assert!(!spec.include_octave, "{spec:?}");
                    assert_eq!(chord.positions.len(), 2);
                }
            }
        }
    }

    #[test]
    fn test_unreachable_string_is_skipped() {
        let mut positions = vec![];
        push_on_instrument(&mut positions, STRING_COUNT, 4, Role::Octave);
        assert!(positions.is_empty());
        push_on_instrument(&mut positions, STRING_COUNT - 1, 4, Role::Octave);
        assert_eq!(positions, vec![SoundingPosition::new(5, 4, Role::Octave)]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_pitch_on_missing_string() {
        let _ = SoundingPosition::new(STRING_COUNT, 3, Role::Octave).pitch();
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_find_fret_on_missing_string() {
        let _ = find_fret_for_root(PitchClass::new(0), STRING_COUNT);
    }

    #[test]
    fn test_positions_on_board() {
        let mi = pitch_class_of("Mi").unwrap();
        let spec = ChordSpec::new(mi, ChordShape::LowStringRooted, 12, true);
        let chord = resolve(&spec);
        assert_eq!(chord.effective_fret, 12);
        assert_eq!(chord.positions_on_board(15).count(), 3);
        let on_small_board: Vec<Role> = chord.positions_on_board(13).map(|p| p.role).collect();
        assert_eq!(on_small_board, vec![Role::Root]);
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(ChordShape::LowStringRooted.label(), "6th");
        assert_eq!(ChordShape::SecondStringRooted.label(), "5th");
        assert_eq!(ChordShape::default(), ChordShape::LowStringRooted);
    }
}
