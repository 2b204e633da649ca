use crate::AppError::InvalidInput;
use clap::{Parser, ValueEnum};
use powerchord::{
    format_tab, pitch_class_of, resolve, string_number, suggest_fret, summary_line, ChordError,
    ChordShape, ChordSpec, Config, ResolvedChord, TabLabels,
};
use std::io;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("powerchord=info"))
        .init();

    // args
    let args = CliArgs::parse();

    // read local config
    let config = Config::read_config()?;

    let root = pitch_class_of(&args.root)?;
    let shape = args
        .shape
        .map_or_else(|| config.default_shape(), ChordShape::from);
    let include_octave = args
        .octave_override()
        .unwrap_or_else(|| config.include_octave());
    let labels = args
        .labels
        .map_or_else(|| config.tab_labels(), TabLabels::from);

    let spec = if args.suggest {
        let fret = suggest_fret(root, shape);
        log::info!("Suggested fret {fret} for {root}");
        ChordSpec::new(root, shape, fret, include_octave)
    } else {
        ChordSpec::from_input(
            root,
            shape,
            args.fret.as_deref(),
            include_octave,
            config.board_frets(),
        )
    };

    let chord = resolve(&spec);
    if chord.effective_fret != spec.fret {
        log::info!(
            "Fret {} does not sound {root} on the {} string, moved to fret {}",
            spec.fret,
            shape.label(),
            chord.effective_fret
        );
    }

    if args.json {
        let json = serde_json::to_string_pretty(&chord)
            .map_err(|err| AppError::OtherError(format!("Could not serialize chord {err:}")))?;
        println!("{json}");
    } else {
        println!("{}", render_text(&chord, labels));
    }
    Ok(())
}

fn render_text(chord: &ResolvedChord, labels: TabLabels) -> String {
    let muted = chord
        .muted
        .iter()
        .map(|m| string_number(m.string_index).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}\n\n{}\nMuted: {muted}",
        summary_line(chord),
        format_tab(&chord.positions, labels)
    )
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Root note (Do, Do#, Re, Re#, Mi, Fa, Fa#, Sol, Sol#, La, La#, Si).
    #[arg(long)]
    root: String,
    /// String carrying the root, defaults to the configured shape.
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,
    /// Fret of the root, corrected when it does not sound the root.
    #[arg(long, allow_hyphen_values = true)]
    fret: Option<String>,
    /// Double the root an octave higher.
    #[arg(long, default_value_t = false)]
    octave: bool,
    /// Leave the octave out, even when the configuration includes it.
    #[arg(long, default_value_t = false, conflicts_with = "octave")]
    no_octave: bool,
    /// Ignore the fret and use the suggested one.
    #[arg(long, default_value_t = false)]
    suggest: bool,
    /// Print the resolved chord as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Tab string labels, defaults to the configured labels.
    #[arg(long, value_enum)]
    labels: Option<LabelsArg>,
}

impl CliArgs {
    /// Octave choice from the flags, `None` defers to the configuration.
    const fn octave_override(&self) -> Option<bool> {
        if self.octave {
            Some(true)
        } else if self.no_octave {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone)]
enum ShapeArg {
    /// Root on the 6th string
    Low,
    /// Root on the 5th string
    Second,
}

impl From<ShapeArg> for ChordShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Low => Self::LowStringRooted,
            ShapeArg::Second => Self::SecondStringRooted,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone)]
enum LabelsArg {
    English,
    Spanish,
}

impl From<LabelsArg> for TabLabels {
    fn from(arg: LabelsArg) -> Self {
        match arg {
            LabelsArg::English => Self::English,
            LabelsArg::Spanish => Self::Spanish,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<ChordError> for AppError {
    fn from(error: ChordError) -> Self {
        match error {
            ChordError::InvalidNote(note) => InvalidInput(format!("unknown root note {note:?}")),
            ChordError::ConfigError(s) => Self::ConfigError(s),
            ChordError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
