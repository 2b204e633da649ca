use crate::chord::resolver::{ChordShape, ChordSpec};
use crate::chord::DEFAULT_FRET;
use crate::theory::pitch::PitchClass;

/// Bring a fret into `[0, board_frets - 1]`.
pub fn clamp_fret(fret: i64, board_frets: u8) -> u8 {
    let last_fret = board_frets.saturating_sub(1);
    let clamped = fret.clamp(0, i64::from(last_fret));
    u8::try_from(clamped).unwrap_or(last_fret)
}

/// Sanitize a free text fret field.
///
/// Missing or non numeric input falls back to `DEFAULT_FRET`,
/// numbers are clamped onto the board.
pub fn parse_fret_input(raw: Option<&str>, board_frets: u8) -> u8 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return clamp_fret(i64::from(DEFAULT_FRET), board_frets);
    };
    match raw.parse::<i64>() {
        Ok(fret) => {
            let clamped = clamp_fret(fret, board_frets);
            if i64::from(clamped) != fret {
                log::debug!("Fret {fret} clamped to {clamped}");
            }
            clamped
        }
        Err(err) => {
            log::debug!("Ignoring fret input {raw:?} ({err}), using default fret");
            clamp_fret(i64::from(DEFAULT_FRET), board_frets)
        }
    }
}

impl ChordSpec {
    /// Build a spec from raw UI input.
    pub fn from_input(
        root: PitchClass,
        shape: ChordShape,
        raw_fret: Option<&str>,
        include_octave: bool,
        board_frets: u8,
    ) -> Self {
        let fret = parse_fret_input(raw_fret, board_frets);
        Self::new(root, shape, fret, include_octave)
    }
}
