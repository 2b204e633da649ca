use crate::chord::resolver::ResolvedChord;

/// Header line describing the resolved chord, e.g.
/// `Chord: Do5 — 6th string shape, fret 8`.
pub fn summary_line(chord: &ResolvedChord) -> String {
    format!(
        "Chord: {}5 — {} string shape, fret {}",
        chord.root.display_name(),
        chord.shape.label(),
        chord.effective_fret
    )
}
