use std::fs::{create_dir_all, read_to_string, write};
use std::path::{Path, PathBuf};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::chord::resolver::ChordShape;
use crate::chord::DEFAULT_BOARD_FRETS;
use crate::render::tab::TabLabels;
use crate::ChordError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    board_frets: u8,
    tab_labels: TabLabels,
    default_shape: ChordShape,
    include_octave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_frets: DEFAULT_BOARD_FRETS,
            tab_labels: TabLabels::default(),
            default_shape: ChordShape::default(),
            include_octave: false,
        }
    }
}

impl Config {
    const FOLDER: &'static str = ".powerchord";
    const FILE_NAME: &'static str = "config.json";

    pub const fn board_frets(&self) -> u8 {
        self.board_frets
    }

    pub const fn tab_labels(&self) -> TabLabels {
        self.tab_labels
    }

    pub const fn default_shape(&self) -> ChordShape {
        self.default_shape
    }

    pub const fn include_octave(&self) -> bool {
        self.include_octave
    }

    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ChordError> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            ChordError::ConfigError(format!("Could not read local configuration {err:}"))
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ChordError> {
        if self.board_frets == 0 {
            return Err(ChordError::ConfigError(
                "board_frets must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// `$HOME/.powerchord/config.json`
    pub fn default_location() -> Result<PathBuf, ChordError> {
        home_dir()
            .map(|home| home.join(Self::FOLDER).join(Self::FILE_NAME))
            .ok_or_else(|| ChordError::ConfigError("Could not find home directory".to_string()))
    }

    /// Load the user configuration, writing the defaults on first use.
    pub fn read_config() -> Result<Self, ChordError> {
        Self::load_or_create(&Self::default_location()?)
    }

    /// Persist to the user configuration file.
    pub fn save_config(&self) -> Result<(), ChordError> {
        self.save_to(&Self::default_location()?)
    }

    /// Load `path`, creating it (and its folder) with defaults when missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ChordError> {
        if !path.exists() {
            log::debug!("Creating default configuration at {path:?}");
            let defaults = Self::default();
            defaults.save_to(path)?;
            return Ok(defaults);
        }
        let json = read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ChordError> {
        if let Some(folder) = path.parent() {
            create_dir_all(folder)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            ChordError::ConfigError(format!("Could not save local configuration {err:}"))
        })?;
        write(path, json)?;
        Ok(())
    }
}
