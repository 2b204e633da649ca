use crate::chord::resolver::SoundingPosition;
use crate::theory::tuning::{string_number, strings_top_to_bottom, STRING_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const LABEL_SEPARATOR: &str = "|";
const LEAD_FILLER: &str = "--";
const EMPTY_CELL: char = '-';
const TRAILING_FILLER: char = '—';

/// String labels printed in front of each tab line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabLabels {
    #[default]
    English,
    Spanish,
}

impl TabLabels {
    /// Label for string number 1 (highest) to 6 (lowest).
    pub const fn label(self, string_number: usize) -> &'static str {
        let labels = match self {
            Self::English => ["1st", "2nd", "3rd", "4th", "5th", "6th"],
            Self::Spanish => ["1ra", "2da", "3ra", "4ta", "5ta", "6ta"],
        };
        labels[string_number - 1]
    }
}

/// Render positions as a six line tablature, highest string on top.
///
/// A string with several positions shows the lowest fret.
pub fn format_tab(positions: &[SoundingPosition], labels: TabLabels) -> String {
    let mut by_string: BTreeMap<usize, u8> = BTreeMap::new();
    for position in positions {
        if position.string_index >= STRING_COUNT {
            log::debug!("Ignoring position on missing string {}", position.string_index);
            continue;
        }
        by_string
            .entry(position.string_index)
            .and_modify(|fret| *fret = (*fret).min(position.fret))
            .or_insert(position.fret);
    }

    let max_fret = positions.iter().map(|p| p.fret).max().unwrap_or(0);
    let pad = max_fret.to_string().len();

    strings_top_to_bottom()
        .map(|string_index| {
            let label = labels.label(string_number(string_index));
            let cell = by_string.get(&string_index).map_or_else(
                || EMPTY_CELL.to_string().repeat(pad),
                |fret| format!("{fret:>pad$}"),
            );
            format!("{label}{LABEL_SEPARATOR}{LEAD_FILLER}{cell}{TRAILING_FILLER}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
